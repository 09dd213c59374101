//! Contains the generic JSON value tree that GeoJSON documents, property bags and render options are expressed in.

pub mod json;
