/// How hole rings of a polygon are oriented relative to its outer ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoleWinding {
	/// Every hole is measured on its own and reversed if it winds like the outer ring.
	#[default]
	PerRing,
	/// The direction measured on the first hole decides for all holes.
	FirstHole,
	/// Rings are passed through unchanged.
	Preserve,
}

/// How a document's own `properties` combine with the ones inherited from its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropertyInheritance {
	/// Own properties replace the inherited bag entirely.
	#[default]
	Replace,
	/// Own properties are laid over the inherited bag.
	Merge,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
	pub hole_winding: HoleWinding,
	pub inheritance: PropertyInheritance,
	/// Abort the whole conversion when a collection member fails to build,
	/// instead of skipping it with a warning.
	pub strict: bool,
}

impl Config {
	pub fn with_hole_winding(mut self, hole_winding: HoleWinding) -> Self {
		self.hole_winding = hole_winding;
		self
	}

	pub fn with_inheritance(mut self, inheritance: PropertyInheritance) -> Self {
		self.inheritance = inheritance;
		self
	}

	pub fn with_strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}
}
