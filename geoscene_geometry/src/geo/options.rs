use geoscene_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// Shape construction parameters (style, interactivity flags, ...).
///
/// The content is forwarded to the [`ShapeFactory`](crate::ShapeFactory) untouched, except for the
/// `icon` entry which is filled from a marker's `style.iconStyle.url` property.
#[derive(Clone, Default, PartialEq)]
pub struct RenderOptions(JsonObject);

impl RenderOptions {
	#[must_use]
	pub fn new() -> Self {
		Self(JsonObject::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.set(key, value);
	}

	#[must_use]
	pub fn icon(&self) -> Option<&str> {
		self.0.get_str("icon").ok().flatten()
	}

	pub fn set_icon(&mut self, url: &str) {
		self.0.set("icon", url);
	}

	#[must_use]
	pub fn as_object(&self) -> &JsonObject {
		&self.0
	}

	#[must_use]
	pub fn into_inner(self) -> JsonObject {
		self.0
	}
}

impl From<JsonObject> for RenderOptions {
	fn from(value: JsonObject) -> Self {
		Self(value)
	}
}

impl<T> From<Vec<(&str, T)>> for RenderOptions
where
	JsonValue: From<T>,
{
	fn from(value: Vec<(&str, T)>) -> Self {
		Self(JsonObject::from(value))
	}
}

impl Debug for RenderOptions {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}
