use super::{BoundingBox, Shape};
use geoscene_core::json::JsonValue;

/// The result of converting one GeoJSON document.
///
/// `Empty` is produced for unrecognized or incomplete structure. Bare geometries and
/// features yield `Single`; collections and Multi-geometries yield `Multiple`, flattened and
/// in input order.
#[derive(Clone, Debug, PartialEq)]
pub enum Scene<S = Shape> {
	Empty,
	Single(S),
	Multiple(Vec<S>),
}

impl<S> Scene<S> {
	pub fn as_slice(&self) -> &[S] {
		match self {
			Scene::Empty => &[],
			Scene::Single(shape) => std::slice::from_ref(shape),
			Scene::Multiple(shapes) => shapes,
		}
	}

	pub fn iter(&self) -> std::slice::Iter<'_, S> {
		self.as_slice().iter()
	}

	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	/// `true` for `Empty` as well as for an empty `Multiple`.
	pub fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	pub fn first(&self) -> Option<&S> {
		self.as_slice().first()
	}

	pub fn into_vec(self) -> Vec<S> {
		match self {
			Scene::Empty => Vec::new(),
			Scene::Single(shape) => vec![shape],
			Scene::Multiple(shapes) => shapes,
		}
	}

	/// Appends every shape of this scene to `shapes`.
	pub fn append_to(self, shapes: &mut Vec<S>) {
		match self {
			Scene::Empty => {}
			Scene::Single(shape) => shapes.push(shape),
			Scene::Multiple(mut list) => shapes.append(&mut list),
		}
	}
}

impl Scene {
	/// The union of the bounds of all shapes.
	pub fn bounds(&self) -> BoundingBox {
		self.iter().fold(BoundingBox::new(), |bounds, shape| bounds.union(shape.bounds()))
	}

	/// Exports all shapes as a JSON array.
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(self.iter().map(Shape::to_json).collect::<Vec<_>>())
	}
}

impl<S> Default for Scene<S> {
	fn default() -> Self {
		Scene::Empty
	}
}

impl<S> From<Vec<S>> for Scene<S> {
	fn from(shapes: Vec<S>) -> Self {
		Scene::Multiple(shapes)
	}
}

impl<S> IntoIterator for Scene<S> {
	type Item = S;
	type IntoIter = std::vec::IntoIter<S>;
	fn into_iter(self) -> Self::IntoIter {
		self.into_vec().into_iter()
	}
}

impl<'a, S> IntoIterator for &'a Scene<S> {
	type Item = &'a S;
	type IntoIter = std::slice::Iter<'a, S>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
