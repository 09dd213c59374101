//! An already-parsed JSON document: maps, sequences, numbers, strings, booleans and null.
//!
//! Producing this tree from text is left to the caller.

mod stringify;
mod types;

pub use stringify::*;
pub use types::{JsonArray, JsonObject, JsonValue};
