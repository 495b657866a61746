//! Basic point math shared by the drag and snap code.

use kurbo::Point;

/// Pointer travel (in screen pixels) below which a press/release pair counts as a click.
pub const CLICK_THRESHOLD: f64 = 5.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Check whether a gesture from `start` to `end` stayed within `threshold`.
///
/// The comparison is strict: travelling exactly `threshold` pixels is a drag.
pub fn is_click_not_drag(start: Point, end: Point, threshold: f64) -> bool {
    distance(start, end) < threshold
}

/// [`is_click_not_drag`] with the default [`CLICK_THRESHOLD`].
pub fn is_click(start: Point, end: Point) -> bool {
    is_click_not_drag(start, end, CLICK_THRESHOLD)
}
