//! JSON array type and utilities for converting its elements to Rust types.
use super::JsonValue;
use crate::json::stringify;
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Serialize the JSON array to a compact string without extra whitespace.
	///
	/// # Examples
	///
	/// ```rust
	/// use geoscene_core::json::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::from(2)]);
	/// assert_eq!(arr.stringify(), "[1,2]");
	/// ```
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(v.clone())).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		JsonArray(input.iter().map(|v| JsonValue::from(*v)).collect())
	}
}
