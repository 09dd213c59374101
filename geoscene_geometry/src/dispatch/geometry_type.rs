use geoscene_core::json::JsonObject;
use std::fmt::Display;

/// The `type` discriminator of a GeoJSON object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
}

impl GeometryType {
	/// Returns `None` for unknown tags.
	pub fn parse(name: &str) -> Option<Self> {
		use GeometryType::*;
		Some(match name {
			"Point" => Point,
			"MultiPoint" => MultiPoint,
			"LineString" => LineString,
			"MultiLineString" => MultiLineString,
			"Polygon" => Polygon,
			"MultiPolygon" => MultiPolygon,
			"GeometryCollection" => GeometryCollection,
			"Feature" => Feature,
			"FeatureCollection" => FeatureCollection,
			_ => return None,
		})
	}

	/// Reads the `type` member of a GeoJSON object.
	pub fn of(object: &JsonObject) -> Option<Self> {
		object.get_str("type").ok().flatten().and_then(Self::parse)
	}

	pub fn as_str(&self) -> &'static str {
		use GeometryType::*;
		match self {
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
		}
	}

	/// `true` for the six types that carry `coordinates`.
	pub fn has_coordinates(&self) -> bool {
		use GeometryType::*;
		matches!(
			self,
			Point | MultiPoint | LineString | MultiLineString | Polygon | MultiPolygon
		)
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
