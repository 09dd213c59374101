//! JSON object type with typed accessors.
use super::JsonValue;
use crate::json::{escape_json_string, stringify};
use anyhow::Result;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::{Debug, Display},
};

/// A JSON object backed by a `BTreeMap<String, JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	/// An empty object.
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Shallow merge: keys of `object` replace existing ones.
	pub fn assign(&mut self, object: JsonObject) {
		for (key, value) in object.0 {
			self.0.insert(key, value);
		}
	}

	/// The raw value stored under `key`.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// `Ok(None)` when `key` is absent, an error when it holds something other than a string.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(JsonValue::as_str).transpose()
	}

	/// Like [`JsonObject::get_str`] for nested objects.
	pub fn get_object(&self, key: &str) -> Result<Option<&JsonObject>> {
		self.get(key).map(JsonValue::as_object).transpose()
	}

	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	/// Inserts `value` under `key`, replacing any previous entry.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	/// Serialize this `JsonObject` into a compact JSON string without extra whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	/// Return an iterator over key-value pairs in key order.
	pub fn iter(&self) -> btree_map::Iter<'_, String, JsonValue> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl FromIterator<(String, JsonValue)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
		JsonObject(BTreeMap::from_iter(iter))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonValue::Object` by converting into a `JsonObject`.
impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// Convert a `Vec<(&str, T)>` into a `JsonObject`, consuming the vector of key-value pairs.
impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}
