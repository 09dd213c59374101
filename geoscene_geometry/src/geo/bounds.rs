use super::LatLng;
use anyhow::{Context, Result, anyhow};
use geoscene_core::json::{JsonObject, JsonValue};

/// An axis-aligned rectangle in (lat, lng) space.
///
/// A box starts empty and only ever grows as positions are added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	pub south: f64,
	pub west: f64,
	pub north: f64,
	pub east: f64,
}

impl BoundingBox {
	/// Creates an empty box that contains nothing.
	#[must_use]
	pub fn new() -> Self {
		Self {
			south: f64::INFINITY,
			west: f64::INFINITY,
			north: f64::NEG_INFINITY,
			east: f64::NEG_INFINITY,
		}
	}

	#[must_use]
	pub fn from_point(point: LatLng) -> Self {
		Self {
			south: point.lat,
			west: point.lng,
			north: point.lat,
			east: point.lng,
		}
	}

	#[must_use]
	pub fn from_points(points: &[LatLng]) -> Self {
		let mut bounds = Self::new();
		bounds.extend_all(points);
		bounds
	}

	pub fn extend(&mut self, point: LatLng) {
		self.south = self.south.min(point.lat);
		self.west = self.west.min(point.lng);
		self.north = self.north.max(point.lat);
		self.east = self.east.max(point.lng);
	}

	pub fn extend_all(&mut self, points: &[LatLng]) {
		for point in points {
			self.extend(*point);
		}
	}

	/// Grows this box so that it also covers `other`.
	pub fn extend_bounds(&mut self, other: &BoundingBox) {
		if other.is_empty() {
			return;
		}
		self.south = self.south.min(other.south);
		self.west = self.west.min(other.west);
		self.north = self.north.max(other.north);
		self.east = self.east.max(other.east);
	}

	#[must_use]
	pub fn union(&self, other: &BoundingBox) -> BoundingBox {
		let mut bounds = *self;
		bounds.extend_bounds(other);
		bounds
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.south > self.north || self.west > self.east
	}

	#[must_use]
	pub fn contains(&self, point: LatLng) -> bool {
		(self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
	}

	#[must_use]
	pub fn center(&self) -> Option<LatLng> {
		if self.is_empty() {
			return None;
		}
		Some(LatLng::new(
			f64::midpoint(self.south, self.north),
			f64::midpoint(self.west, self.east),
		))
	}

	/// Returns `{"east", "north", "south", "west"}`, or `null` for an empty box.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		if self.is_empty() {
			return JsonValue::Null;
		}
		JsonValue::from(vec![
			("south", self.south),
			("west", self.west),
			("north", self.north),
			("east", self.east),
		])
	}

	/// Inverse of [`BoundingBox::to_json`].
	pub fn from_json(value: &JsonValue) -> Result<Self> {
		if value.is_null() {
			return Ok(Self::new());
		}
		let object = value.as_object().context("bounds must be an object")?;
		Ok(Self {
			south: edge(object, "south")?,
			west: edge(object, "west")?,
			north: edge(object, "north")?,
			east: edge(object, "east")?,
		})
	}

	/// Converts into a `geo::Rect` with x = longitude and y = latitude.
	#[must_use]
	pub fn to_rect(&self) -> Option<geo::Rect> {
		if self.is_empty() {
			return None;
		}
		Some(geo::Rect::new(
			geo::Coord {
				x: self.west,
				y: self.south,
			},
			geo::Coord {
				x: self.east,
				y: self.north,
			},
		))
	}
}

impl Default for BoundingBox {
	fn default() -> Self {
		Self::new()
	}
}

fn edge(object: &JsonObject, key: &str) -> Result<f64> {
	object.get_number(key)?.ok_or_else(|| anyhow!("bounds are missing '{key}'"))
}
