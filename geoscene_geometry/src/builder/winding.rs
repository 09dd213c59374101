//! Ring orientation via the shoelace formula.

use crate::{HoleWinding, LatLng};
use itertools::Itertools;

/// Half the shoelace sum `Σ (lat_i · lng_{i+1} − lat_{i+1} · lng_i)` over the ring, treated as closed.
///
/// Positive for rings running clockwise on a map (x = longitude, y = latitude).
pub fn signed_area(ring: &[LatLng]) -> f64 {
	ring
		.iter()
		.circular_tuple_windows::<(_, _)>()
		.map(|(a, b)| a.lat * b.lng - b.lat * a.lng)
		.sum::<f64>()
		/ 2.0
}

pub fn is_clockwise(ring: &[LatLng]) -> bool {
	signed_area(ring) > 0.0
}

/// Reverses hole rings (index 1 and later) that wind in the same direction as the outer ring.
/// The outer ring is never modified.
pub fn orient_holes(rings: &mut [Vec<LatLng>], mode: HoleWinding) {
	if mode == HoleWinding::Preserve {
		return;
	}
	let Some((outer, holes)) = rings.split_first_mut() else {
		return;
	};
	let Some(first_hole) = holes.first() else {
		return;
	};

	let outside = is_clockwise(outer);
	let first_inside = is_clockwise(first_hole);

	for (index, hole) in holes.iter_mut().enumerate() {
		let inside = match mode {
			HoleWinding::FirstHole => first_inside,
			_ => is_clockwise(hole),
		};
		if inside == outside {
			log::trace!("reversing hole ring {}", index + 1);
			hole.reverse();
		}
	}
}
