//! Builds shapes from raw GeoJSON coordinate structures.
//!
//! Every geometry has two entry points: one taking the bare `coordinates` value (used by the
//! Multi-variants for their elements) and a `*_geometry` one taking the whole geometry object.

mod factory;
mod geometry_builder;
pub mod winding;

pub use factory::*;
pub use geometry_builder::*;
