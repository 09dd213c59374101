//! Walks a GeoJSON document and hands every leaf geometry to the [`GeometryBuilder`](crate::GeometryBuilder).

mod geometry_type;
mod parser;

pub use geometry_type::*;
pub use parser::*;

use crate::{PropertyBag, RenderOptions, Scene, SceneFactory};
use anyhow::Result;
use geoscene_core::json::JsonValue;

/// Converts `document` into plain shapes with the default configuration.
pub fn parse_geojson(document: &JsonValue, options: &RenderOptions) -> Result<Scene> {
	GeoJsonParser::new(&SceneFactory).parse(document, options, None)
}

/// Like [`parse_geojson`], with `properties` used when the document has none of its own.
pub fn parse_geojson_with_properties(
	document: &JsonValue,
	options: &RenderOptions,
	properties: &PropertyBag,
) -> Result<Scene> {
	GeoJsonParser::new(&SceneFactory).parse(document, options, Some(properties))
}
