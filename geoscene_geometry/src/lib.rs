//! Converts already-parsed GeoJSON documents into scenes of typed, renderer-agnostic shapes.
//!
//! ```rust
//! use geoscene_core::json::JsonValue;
//! use geoscene_geometry::{RenderOptions, Scene, Shape, parse_geojson};
//!
//! let document = JsonValue::from(vec![
//! 	("type", JsonValue::from("Point")),
//! 	("coordinates", JsonValue::from([13.4, 52.5])),
//! ]);
//! let scene = parse_geojson(&document, &RenderOptions::new()).unwrap();
//! let Scene::Single(Shape::Marker(marker)) = scene else { panic!() };
//! assert_eq!(marker.position.lat, 52.5);
//! assert_eq!(marker.properties.type_name(), Some("Point"));
//! ```

pub mod builder;
mod config;
pub mod dispatch;
mod geo;

pub use builder::{GeometryBuilder, SceneFactory, ShapeFactory};
pub use config::*;
pub use dispatch::{GeoJsonParser, GeometryType, parse_geojson, parse_geojson_with_properties};
pub use geo::*;
