use crate::{BoundingBox, LatLng, Marker, Polygon, Polyline, PropertyBag, RenderOptions, Shape};

/// Constructs the final shape objects.
///
/// The builder hands over fully resolved data: positions already in (lat, lng) order, the
/// per-shape copies of options and properties (with `type` and `bounds` filled in) and the
/// computed bounding box.
pub trait ShapeFactory {
	type Marker;
	type Polyline;
	type Polygon;

	fn make_marker(
		&self,
		position: LatLng,
		options: RenderOptions,
		properties: PropertyBag,
		bounds: BoundingBox,
	) -> Self::Marker;

	fn make_polyline(
		&self,
		path: Vec<LatLng>,
		options: RenderOptions,
		properties: PropertyBag,
		bounds: BoundingBox,
	) -> Self::Polyline;

	fn make_polygon(
		&self,
		rings: Vec<Vec<LatLng>>,
		options: RenderOptions,
		properties: PropertyBag,
		bounds: BoundingBox,
	) -> Self::Polygon;
}

/// The shape type produced through a given factory.
pub type FactoryShape<F> =
	Shape<<F as ShapeFactory>::Marker, <F as ShapeFactory>::Polyline, <F as ShapeFactory>::Polygon>;

/// Produces the plain [`Marker`], [`Polyline`] and [`Polygon`] values of this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneFactory;

impl ShapeFactory for SceneFactory {
	type Marker = Marker;
	type Polyline = Polyline;
	type Polygon = Polygon;

	fn make_marker(
		&self,
		position: LatLng,
		options: RenderOptions,
		properties: PropertyBag,
		bounds: BoundingBox,
	) -> Marker {
		Marker {
			position,
			options,
			properties,
			bounds,
		}
	}

	fn make_polyline(
		&self,
		path: Vec<LatLng>,
		options: RenderOptions,
		properties: PropertyBag,
		bounds: BoundingBox,
	) -> Polyline {
		Polyline {
			path,
			options,
			properties,
			bounds,
		}
	}

	fn make_polygon(
		&self,
		rings: Vec<Vec<LatLng>>,
		options: RenderOptions,
		properties: PropertyBag,
		bounds: BoundingBox,
	) -> Polygon {
		Polygon {
			rings,
			options,
			properties,
			bounds,
		}
	}
}
