use log::debug;
use recipe_draft::config::load_config;
use recipe_draft::{render, OutputFormat, ParseError, RecipeParser};
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

fn read_input(path: Option<&str>) -> Result<String, ParseError> {
    match path {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn run() -> Result<(), ParseError> {
    let settings = load_config()?;
    debug!("{:?}", settings);

    // Optional path to a file with raw model output; stdin otherwise
    let args: Vec<String> = env::args().collect();
    let raw = read_input(args.get(1).map(String::as_str))?;

    let recipe = RecipeParser::new(settings.parser).try_parse(&raw)?;

    let output = match settings.output.format {
        OutputFormat::Json if settings.output.pretty => serde_json::to_string_pretty(&recipe)?,
        OutputFormat::Json => serde_json::to_string(&recipe)?,
        OutputFormat::Text => render::to_text(&recipe),
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
