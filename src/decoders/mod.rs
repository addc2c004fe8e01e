pub mod keys;
pub mod lenient;
pub mod strict;

use crate::error::DecodeError;
use serde_json::Value;

pub use self::keys::{fold_key, fold_keys};

/// Parses candidate text into an untyped JSON tree, keys as written.
pub fn parse_tree(candidate: &str) -> Result<Value, DecodeError> {
    Ok(serde_json::from_str(candidate)?)
}
