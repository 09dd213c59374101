//! JSON value enum representing any valid JSON data, with accessors and conversions.

use super::{JsonArray, JsonObject};
use crate::json::stringify;
use anyhow::{Result, bail};
use std::fmt::Display;

/// Represents any JSON data: arrays, objects, numbers, strings, booleans, and null.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Return the JSON type as a lowercase string (`"array"`, `"object"`, etc.).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serialize the `JsonValue` to a compact JSON string without unnecessary whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Create a new empty JSON array value.
	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, JsonValue::Null)
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	/// Return a string slice if this value is a JSON string.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// Return the JSON number.
	///
	/// # Errors
	/// Returns an error if the value is not a JSON number.
	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(val) => Ok(*val),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}
}

impl Display for JsonValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.stringify())
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<&JsonValue> for JsonValue {
	fn from(input: &JsonValue) -> Self {
		input.clone()
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}
