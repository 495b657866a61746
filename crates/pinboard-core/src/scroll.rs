//! Edge auto-scroll while dragging near the border of a scroll container.

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Default distance from an edge (in pixels) at which auto-scroll kicks in.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;
/// Default scroll speed (pixels per frame) when the pointer sits on the edge.
pub const DEFAULT_MAX_SCROLL_SPEED: f64 = 15.0;

/// Auto-scroll tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScroll {
    /// Width of the active band along each edge.
    pub threshold: f64,
    /// Speed reached at the edge itself.
    pub max_speed: f64,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCROLL_THRESHOLD,
            max_speed: DEFAULT_MAX_SCROLL_SPEED,
        }
    }
}

impl AutoScroll {
    /// Scroll speed along one axis. See [`auto_scroll_speed`].
    pub fn speed(&self, mouse_pos: f64, container_start: f64, container_end: f64) -> f64 {
        auto_scroll_speed(mouse_pos, container_start, container_end, self)
    }
}

/// Compute the scroll speed along one axis for a pointer at `mouse_pos`.
///
/// Negative values scroll towards the start edge, positive towards the end.
/// The speed grows linearly from 0 at `threshold` pixels away to `max_speed`
/// at the edge. When the container is narrower than twice the threshold a
/// position can be near both edges; the start edge is checked first and wins.
pub fn auto_scroll_speed(
    mouse_pos: f64,
    container_start: f64,
    container_end: f64,
    config: &AutoScroll,
) -> f64 {
    let AutoScroll {
        threshold,
        max_speed,
    } = *config;

    if mouse_pos < container_start + threshold {
        let distance = mouse_pos - container_start;
        -((threshold - distance) / threshold) * max_speed
    } else if mouse_pos > container_end - threshold {
        let distance = container_end - mouse_pos;
        ((threshold - distance) / threshold) * max_speed
    } else {
        0.0
    }
}

/// Scroll velocity for a pointer inside a 2D viewport, one axis at a time.
pub fn auto_scroll_velocity(pointer: Point, viewport: Rect, config: &AutoScroll) -> Vec2 {
    Vec2::new(
        auto_scroll_speed(pointer.x, viewport.x0, viewport.x1, config),
        auto_scroll_speed(pointer.y, viewport.y0, viewport.y1, config),
    )
}
