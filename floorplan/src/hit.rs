#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::layout::{Floor, TableId};

/// Which table (if any) is under the canvas point `pt`.
///
/// Tables later in `layout` are drawn on top, so they win overlaps.
#[must_use]
pub fn hit_test(pt: Point, floor: &Floor) -> Option<TableId> {
    floor
        .layout
        .iter()
        .rev()
        .find(|t| t.bounds().contains(pt))
        .map(|t| t.id)
}
