//! The output data model: positions, bounding boxes, property bags, render options, shapes and scenes.

mod bounds;
mod lat_lng;
mod options;
mod properties;
mod scene;
mod shape;

pub use bounds::*;
pub use lat_lng::*;
pub use options::*;
pub use properties::*;
pub use scene::*;
pub use shape::*;
