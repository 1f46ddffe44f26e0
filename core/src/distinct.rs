//! Decides whether a finished gesture is worth a history entry. Only the most
//! recently stored stroke of the same layer is consulted.

use crate::{FreehandStroke, Point, ShapeStroke};

/// Rejects a path only when it matches the last stored path point for point.
pub fn should_record_freehand(history: &[FreehandStroke], candidate: &[Point]) -> bool {
    let Some(last) = history.last() else {
        return true;
    };
    if last.points.len() != candidate.len() {
        return true;
    }
    last.points
        .iter()
        .zip(candidate)
        .any(|(stored, point)| stored != point)
}

/// The first shape is always kept; after that only exact repeats of the last
/// shape (kind, both corners and color) are dropped.
pub fn should_record_shape(history: &[ShapeStroke], candidate: &ShapeStroke) -> bool {
    match history.last() {
        Some(last) => last != candidate,
        None => true,
    }
}
