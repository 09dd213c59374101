use super::{BoundingBox, LatLng, PropertyBag, RenderOptions};
use geoscene_core::json::JsonValue;

/// A point shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	pub position: LatLng,
	pub options: RenderOptions,
	pub properties: PropertyBag,
	pub bounds: BoundingBox,
}

/// An open path.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
	pub path: Vec<LatLng>,
	pub options: RenderOptions,
	pub properties: PropertyBag,
	pub bounds: BoundingBox,
}

/// A filled area. `rings[0]` is the outer boundary, every later ring is a hole
/// wound opposite to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
	pub rings: Vec<Vec<LatLng>>,
	pub options: RenderOptions,
	pub properties: PropertyBag,
	pub bounds: BoundingBox,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
	Marker,
	Polyline,
	Polygon,
}

impl ShapeKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			ShapeKind::Marker => "Marker",
			ShapeKind::Polyline => "Polyline",
			ShapeKind::Polygon => "Polygon",
		}
	}
}

/// One produced shape. The type parameters default to the plain data types of this crate
/// and are replaced by the output types of a custom [`ShapeFactory`](crate::ShapeFactory).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<M = Marker, L = Polyline, P = Polygon> {
	Marker(M),
	Polyline(L),
	Polygon(P),
}

impl<M, L, P> Shape<M, L, P> {
	pub fn kind(&self) -> ShapeKind {
		match self {
			Shape::Marker(_) => ShapeKind::Marker,
			Shape::Polyline(_) => ShapeKind::Polyline,
			Shape::Polygon(_) => ShapeKind::Polygon,
		}
	}
}

impl Shape {
	pub fn properties(&self) -> &PropertyBag {
		match self {
			Shape::Marker(m) => &m.properties,
			Shape::Polyline(l) => &l.properties,
			Shape::Polygon(p) => &p.properties,
		}
	}

	pub fn properties_mut(&mut self) -> &mut PropertyBag {
		match self {
			Shape::Marker(m) => &mut m.properties,
			Shape::Polyline(l) => &mut l.properties,
			Shape::Polygon(p) => &mut p.properties,
		}
	}

	pub fn options(&self) -> &RenderOptions {
		match self {
			Shape::Marker(m) => &m.options,
			Shape::Polyline(l) => &l.options,
			Shape::Polygon(p) => &p.options,
		}
	}

	pub fn bounds(&self) -> &BoundingBox {
		match self {
			Shape::Marker(m) => &m.bounds,
			Shape::Polyline(l) => &l.bounds,
			Shape::Polygon(p) => &p.bounds,
		}
	}

	/// The shape's coordinates as nested `[lat, lng]` arrays.
	pub fn geometry_json(&self) -> JsonValue {
		match self {
			Shape::Marker(m) => m.position.to_json(),
			Shape::Polyline(l) => path_json(&l.path),
			Shape::Polygon(p) => JsonValue::from(p.rings.iter().map(|ring| path_json(ring)).collect::<Vec<_>>()),
		}
	}

	/// Exports the shape as `{"kind", "geometry", "options", "properties"}`.
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(vec![
			("kind", JsonValue::from(self.kind().as_str())),
			("geometry", self.geometry_json()),
			("options", JsonValue::from(self.options().as_object().clone())),
			("properties", JsonValue::from(self.properties().as_object().clone())),
		])
	}

	/// Converts the shape into a `geo` geometry (x = longitude, y = latitude).
	pub fn to_geo(&self) -> geo::Geometry {
		match self {
			Shape::Marker(m) => geo::Geometry::Point(m.into()),
			Shape::Polyline(l) => geo::Geometry::LineString(l.into()),
			Shape::Polygon(p) => geo::Geometry::Polygon(p.into()),
		}
	}
}

fn path_json(path: &[LatLng]) -> JsonValue {
	JsonValue::from(path.iter().map(LatLng::to_json).collect::<Vec<_>>())
}

fn line_string(path: &[LatLng]) -> geo::LineString {
	path.iter().map(|p| geo::Coord::from(*p)).collect()
}

impl From<&Marker> for geo::Point {
	fn from(value: &Marker) -> Self {
		value.position.into()
	}
}

impl From<&Polyline> for geo::LineString {
	fn from(value: &Polyline) -> Self {
		line_string(&value.path)
	}
}

impl From<&Polygon> for geo::Polygon {
	fn from(value: &Polygon) -> Self {
		let mut rings = value.rings.iter().map(|ring| line_string(ring));
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
		geo::Polygon::new(exterior, rings.collect())
	}
}
