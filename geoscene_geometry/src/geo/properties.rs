use super::BoundingBox;
use geoscene_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// The properties attached to one produced shape.
///
/// After construction every bag holds a `type` entry and a `bounds` entry. Bags are
/// owned per shape: cloning copies the whole tree, so siblings never share state.
#[derive(Clone, Default, PartialEq)]
pub struct PropertyBag(JsonObject);

impl PropertyBag {
	#[must_use]
	pub fn new() -> Self {
		Self(JsonObject::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	pub fn insert<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.set(key, value);
	}

	pub fn remove(&mut self, key: &str) -> Option<JsonValue> {
		self.0.remove(key)
	}

	/// The `type` entry, if it is a string.
	#[must_use]
	pub fn type_name(&self) -> Option<&str> {
		self.0.get_str("type").ok().flatten()
	}

	/// Sets `type` to `name` unless a non-null `type` is already present.
	pub fn default_type(&mut self, name: &str) {
		if self.get("type").is_none_or(JsonValue::is_null) {
			self.0.set("type", name);
		}
	}

	pub fn set_bounds(&mut self, bounds: &BoundingBox) {
		self.0.set("bounds", bounds.to_json());
	}

	/// Reads the `bounds` entry back as a typed box.
	#[must_use]
	pub fn bounds(&self) -> Option<BoundingBox> {
		self.get("bounds").and_then(|value| BoundingBox::from_json(value).ok())
	}

	/// The marker icon url carried in `style.iconStyle.url`.
	#[must_use]
	pub fn icon_url(&self) -> Option<&str> {
		self
			.0
			.get_object("style")
			.ok()??
			.get_object("iconStyle")
			.ok()??
			.get_str("url")
			.ok()?
	}

	/// Returns a copy of this bag overlaid with `overlay`; keys in `overlay` win.
	#[must_use]
	pub fn merged_with(&self, overlay: &JsonObject) -> PropertyBag {
		let mut merged = self.0.clone();
		merged.assign(overlay.clone());
		PropertyBag(merged)
	}

	#[must_use]
	pub fn as_object(&self) -> &JsonObject {
		&self.0
	}

	#[must_use]
	pub fn into_inner(self) -> JsonObject {
		self.0
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

impl From<JsonObject> for PropertyBag {
	fn from(value: JsonObject) -> Self {
		Self(value)
	}
}

impl<T> From<Vec<(&str, T)>> for PropertyBag
where
	JsonValue: From<T>,
{
	fn from(value: Vec<(&str, T)>) -> Self {
		Self(JsonObject::from(value))
	}
}

impl Debug for PropertyBag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}
