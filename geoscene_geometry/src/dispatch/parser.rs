use super::GeometryType;
use crate::{
	Config, GeometryBuilder, PropertyBag, PropertyInheritance, RenderOptions, Scene, Shape, ShapeFactory,
	builder::FactoryShape,
};
use anyhow::{Context, Result};
use geoscene_core::json::{JsonArray, JsonObject, JsonValue};

/// Recursively converts GeoJSON documents into scenes.
///
/// Unrecognized or incomplete structure (unknown `type`, missing `features`, `geometries`,
/// `geometry` or `coordinates`) produces [`Scene::Empty`] and is never an error. Errors are
/// only raised for malformed coordinates.
pub struct GeoJsonParser<'a, F: ShapeFactory> {
	factory: &'a F,
	config: Config,
}

impl<'a, F: ShapeFactory> GeoJsonParser<'a, F> {
	pub fn new(factory: &'a F) -> Self {
		Self {
			factory,
			config: Config::default(),
		}
	}

	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Converts a `FeatureCollection`, `GeometryCollection`, `Feature` or bare geometry.
	///
	/// `inherited` is used when the document has no `properties` of its own.
	pub fn parse(
		&self,
		document: &JsonValue,
		options: &RenderOptions,
		inherited: Option<&PropertyBag>,
	) -> Result<Scene<FactoryShape<F>>> {
		let Ok(object) = document.as_object() else {
			log::debug!("ignoring a {} where a GeoJSON object was expected", document.type_as_str());
			return Ok(Scene::Empty);
		};
		let properties = self.effective_properties(object, inherited);

		let Some(kind) = GeometryType::of(object) else {
			log::debug!("ignoring object with unknown type {:?}", object.get("type"));
			return Ok(Scene::Empty);
		};

		match kind {
			GeometryType::FeatureCollection => {
				let Some(features) = member_array(object, "features") else {
					return Ok(Scene::Empty);
				};
				let mut shapes = Vec::new();
				for (index, feature) in features.iter().enumerate() {
					let scene = self
						.parse_member_feature(feature, options, &properties)
						.with_context(|| format!("failed to build feature {index}"));
					self.collect_member(scene, &mut shapes)?;
				}
				Ok(Scene::Multiple(shapes))
			}
			GeometryType::GeometryCollection => {
				let Some(geometries) = member_array(object, "geometries") else {
					return Ok(Scene::Empty);
				};
				let mut shapes = Vec::new();
				for (index, geometry) in geometries.iter().enumerate() {
					let scene = self
						.create_feature(geometry, options, &properties)
						.with_context(|| format!("failed to build geometry {index}"));
					self.collect_member(scene, &mut shapes)?;
				}
				Ok(Scene::Multiple(shapes))
			}
			GeometryType::Feature => match member(object, "geometry") {
				Some(geometry) => self.create_feature(geometry, options, &properties),
				None => {
					log::debug!("ignoring feature without geometry");
					Ok(Scene::Empty)
				}
			},
			_ => self.create_feature(document, options, &properties),
		}
	}

	/// Converts one geometry object with already resolved properties.
	///
	/// Nested `GeometryCollection`s re-enter [`GeoJsonParser::parse`].
	pub fn create_feature(
		&self,
		geometry: &JsonValue,
		options: &RenderOptions,
		properties: &PropertyBag,
	) -> Result<Scene<FactoryShape<F>>> {
		let Ok(object) = geometry.as_object() else {
			log::debug!("ignoring a {} where a geometry was expected", geometry.type_as_str());
			return Ok(Scene::Empty);
		};
		let Some(kind) = GeometryType::of(object) else {
			log::debug!("ignoring geometry with unknown type {:?}", object.get("type"));
			return Ok(Scene::Empty);
		};

		if kind == GeometryType::GeometryCollection {
			return self.parse(geometry, options, Some(properties));
		}
		if !kind.has_coordinates() {
			log::debug!("a {kind} cannot be used as a geometry");
			return Ok(Scene::Empty);
		}
		if member(object, "coordinates").is_none() {
			log::debug!("ignoring {kind} without coordinates");
			return Ok(Scene::Empty);
		}

		let builder = GeometryBuilder::new(self.factory, &self.config);
		Ok(match kind {
			GeometryType::Point => Scene::Single(Shape::Marker(
				builder.build_point_geometry(object, options, properties)?,
			)),
			GeometryType::MultiPoint => Scene::Multiple(
				builder
					.build_multi_point_geometry(object, options, properties)?
					.into_iter()
					.map(Shape::Marker)
					.collect(),
			),
			GeometryType::LineString => Scene::Single(Shape::Polyline(
				builder.build_line_string_geometry(object, options, properties)?,
			)),
			GeometryType::MultiLineString => Scene::Multiple(
				builder
					.build_multi_line_string_geometry(object, options, properties)?
					.into_iter()
					.map(Shape::Polyline)
					.collect(),
			),
			GeometryType::Polygon => Scene::Single(Shape::Polygon(
				builder.build_polygon_geometry(object, options, properties)?,
			)),
			GeometryType::MultiPolygon => Scene::Multiple(
				builder
					.build_multi_polygon_geometry(object, options, properties)?
					.into_iter()
					.map(Shape::Polygon)
					.collect(),
			),
			GeometryType::GeometryCollection | GeometryType::Feature | GeometryType::FeatureCollection => Scene::Empty,
		})
	}

	/// A feature inside a `FeatureCollection`: its own properties win over the collection's.
	fn parse_member_feature(
		&self,
		feature: &JsonValue,
		options: &RenderOptions,
		collection_properties: &PropertyBag,
	) -> Result<Scene<FactoryShape<F>>> {
		let Ok(object) = feature.as_object() else {
			log::debug!("ignoring a {} where a feature was expected", feature.type_as_str());
			return Ok(Scene::Empty);
		};
		let Some(geometry) = member(object, "geometry") else {
			log::debug!("ignoring feature without geometry");
			return Ok(Scene::Empty);
		};
		let properties = self.effective_properties(object, Some(collection_properties));
		self.create_feature(geometry, options, &properties)
	}

	fn effective_properties(&self, object: &JsonObject, inherited: Option<&PropertyBag>) -> PropertyBag {
		let own = object.get("properties").and_then(|value| value.as_object().ok());
		match (own, inherited) {
			(Some(own), Some(inherited)) if self.config.inheritance == PropertyInheritance::Merge => {
				inherited.merged_with(own)
			}
			(Some(own), _) => PropertyBag::from(own.clone()),
			(None, Some(inherited)) => inherited.clone(),
			(None, None) => PropertyBag::new(),
		}
	}

	fn collect_member(
		&self,
		scene: Result<Scene<FactoryShape<F>>>,
		shapes: &mut Vec<FactoryShape<F>>,
	) -> Result<()> {
		match scene {
			Ok(scene) => scene.append_to(shapes),
			Err(error) if self.config.strict => return Err(error),
			Err(error) => log::warn!("skipping collection member: {error:#}"),
		}
		Ok(())
	}
}

/// A member that is present and not `null`.
fn member<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
	object.get(key).filter(|value| !value.is_null())
}

fn member_array<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonArray> {
	let value = member(object, key)?;
	match value.as_array() {
		Ok(array) => Some(array),
		Err(_) => {
			log::debug!("ignoring '{key}' that is a {}", value.type_as_str());
			None
		}
	}
}
