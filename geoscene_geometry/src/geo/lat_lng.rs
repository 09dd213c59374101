use anyhow::{Context, Result, ensure};
use geoscene_core::json::JsonValue;
use std::fmt::Debug;

/// A position in shape space: latitude first, longitude second.
///
/// GeoJSON stores positions as `[longitude, latitude]`; the axes are swapped exactly once,
/// in [`LatLng::from_position`].
#[derive(Clone, Copy, PartialEq)]
pub struct LatLng {
	pub lat: f64,
	pub lng: f64,
}

impl LatLng {
	#[must_use]
	pub fn new(lat: f64, lng: f64) -> Self {
		Self { lat, lng }
	}

	/// Reads a GeoJSON position `[lng, lat, ...]`. Values after the second are ignored.
	pub fn from_position(position: &JsonValue) -> Result<Self> {
		let values = position.as_array().context("a position must be an array")?;
		ensure!(
			values.len() >= 2,
			"a position needs at least two values, found {}",
			values.len()
		);
		let lng = values.0[0].as_number().context("invalid longitude")?;
		let lat = values.0[1].as_number().context("invalid latitude")?;
		Ok(Self { lat, lng })
	}

	/// Reads a GeoJSON array of positions, keeping their order.
	pub fn from_positions(positions: &JsonValue) -> Result<Vec<Self>> {
		positions
			.as_array()?
			.iter()
			.enumerate()
			.map(|(index, position)| {
				Self::from_position(position).with_context(|| format!("invalid position at index {index}"))
			})
			.collect()
	}

	/// Returns `[lat, lng]`.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from([self.lat, self.lng])
	}
}

impl Debug for LatLng {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LatLng({}, {})", self.lat, self.lng)
	}
}

impl From<LatLng> for geo::Coord {
	fn from(value: LatLng) -> Self {
		geo::Coord {
			x: value.lng,
			y: value.lat,
		}
	}
}

impl From<LatLng> for geo::Point {
	fn from(value: LatLng) -> Self {
		geo::Point::new(value.lng, value.lat)
	}
}
