use super::{ShapeFactory, winding::orient_holes};
use crate::{BoundingBox, Config, LatLng, PropertyBag, RenderOptions};
use anyhow::{Context, Result, anyhow};
use geoscene_core::json::{JsonObject, JsonValue};

/// Turns GeoJSON coordinate structures into shapes through a [`ShapeFactory`].
///
/// Options and properties are borrowed and copied for every produced shape, so shapes of the
/// same Multi-geometry never share a bag.
pub struct GeometryBuilder<'a, F: ShapeFactory> {
	factory: &'a F,
	config: &'a Config,
}

impl<'a, F: ShapeFactory> GeometryBuilder<'a, F> {
	pub fn new(factory: &'a F, config: &'a Config) -> Self {
		Self { factory, config }
	}

	/// Builds a marker from a single `[lng, lat]` position.
	///
	/// A `style.iconStyle.url` property is copied into the `icon` option.
	pub fn build_point(
		&self,
		position: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<F::Marker> {
		let position = LatLng::from_position(position)?;
		let mut options = options.clone();
		let mut properties = properties.clone();

		if let Some(url) = properties.icon_url() {
			options.set_icon(url);
		}

		let bounds = BoundingBox::from_point(position);
		properties.default_type("Point");
		properties.set_bounds(&bounds);

		log::trace!("marker at {position:?}");
		Ok(self.factory.make_marker(position, options, properties, bounds))
	}

	pub fn build_point_geometry(
		&self,
		geometry: &JsonObject,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<F::Marker> {
		self.build_point(coordinates_of(geometry)?, options, properties)
	}

	/// Builds one independent marker per position.
	pub fn build_multi_point(
		&self,
		positions: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Vec<F::Marker>> {
		positions
			.as_array()?
			.iter()
			.enumerate()
			.map(|(index, position)| {
				self
					.build_point(position, options, properties)
					.with_context(|| format!("invalid point at index {index}"))
			})
			.collect()
	}

	pub fn build_multi_point_geometry(
		&self,
		geometry: &JsonObject,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Vec<F::Marker>> {
		self.build_multi_point(coordinates_of(geometry)?, options, properties)
	}

	pub fn build_line_string(
		&self,
		positions: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<F::Polyline> {
		let path = LatLng::from_positions(positions)?;
		let bounds = BoundingBox::from_points(&path);

		let mut properties = properties.clone();
		properties.default_type("LineString");
		properties.set_bounds(&bounds);

		log::trace!("polyline with {} points", path.len());
		Ok(self.factory.make_polyline(path, options.clone(), properties, bounds))
	}

	pub fn build_line_string_geometry(
		&self,
		geometry: &JsonObject,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<F::Polyline> {
		self.build_line_string(coordinates_of(geometry)?, options, properties)
	}

	pub fn build_multi_line_string(
		&self,
		lines: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Vec<F::Polyline>> {
		lines
			.as_array()?
			.iter()
			.enumerate()
			.map(|(index, line)| {
				self
					.build_line_string(line, options, properties)
					.with_context(|| format!("invalid line at index {index}"))
			})
			.collect()
	}

	pub fn build_multi_line_string_geometry(
		&self,
		geometry: &JsonObject,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Vec<F::Polyline>> {
		self.build_multi_line_string(coordinates_of(geometry)?, options, properties)
	}

	/// Builds a polygon from its rings; ring 0 is the outer boundary, later rings are holes.
	///
	/// The bounds cover the points of every ring. Holes are reoriented according to
	/// [`Config::hole_winding`].
	pub fn build_polygon(
		&self,
		rings: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<F::Polygon> {
		let mut bounds = BoundingBox::new();
		let mut rings = rings
			.as_array()?
			.iter()
			.enumerate()
			.map(|(index, ring)| -> Result<Vec<LatLng>> {
				let ring = LatLng::from_positions(ring).with_context(|| format!("invalid ring at index {index}"))?;
				bounds.extend_all(&ring);
				Ok(ring)
			})
			.collect::<Result<Vec<_>>>()?;

		orient_holes(&mut rings, self.config.hole_winding);

		let mut properties = properties.clone();
		properties.default_type("Polygon");
		properties.set_bounds(&bounds);

		log::trace!("polygon with {} rings", rings.len());
		Ok(self.factory.make_polygon(rings, options.clone(), properties, bounds))
	}

	pub fn build_polygon_geometry(
		&self,
		geometry: &JsonObject,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<F::Polygon> {
		self.build_polygon(coordinates_of(geometry)?, options, properties)
	}

	pub fn build_multi_polygon(
		&self,
		polygons: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Vec<F::Polygon>> {
		polygons
			.as_array()?
			.iter()
			.enumerate()
			.map(|(index, polygon)| {
				self
					.build_polygon(polygon, options, properties)
					.with_context(|| format!("invalid polygon at index {index}"))
			})
			.collect()
	}

	pub fn build_multi_polygon_geometry(
		&self,
		geometry: &JsonObject,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Vec<F::Polygon>> {
		self.build_multi_polygon(coordinates_of(geometry)?, options, properties)
	}
}

fn coordinates_of(geometry: &JsonObject) -> Result<&JsonValue> {
	geometry
		.get("coordinates")
		.ok_or_else(|| anyhow!("geometry has no 'coordinates'"))
}
