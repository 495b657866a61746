//! Grid snapping with responsive cell sizes.

use kurbo::Point;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Containers narrower than this use the mobile grid.
pub const TABLET_MIN_WIDTH: f64 = 768.0;
/// Containers narrower than this (and at least tablet width) use the tablet grid.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;
/// Containers at least this wide use the large grid.
pub const LARGE_MIN_WIDTH: f64 = 1440.0;

/// Fraction of a grid cell used as the jitter range when scattering notes.
pub const JITTER_FRACTION: f64 = 0.15;

/// Responsive width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
    Large,
}

impl Breakpoint {
    /// Pick the breakpoint for a container width in pixels.
    pub fn from_width(container_width: f64) -> Self {
        if container_width < TABLET_MIN_WIDTH {
            Breakpoint::Mobile
        } else if container_width < DESKTOP_MIN_WIDTH {
            Breakpoint::Tablet
        } else if container_width < LARGE_MIN_WIDTH {
            Breakpoint::Desktop
        } else {
            Breakpoint::Large
        }
    }
}

/// Grid cell size (in pixels) for each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub mobile: f64,
    pub tablet: f64,
    pub desktop: f64,
    pub large: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            mobile: 30.0,
            tablet: 35.0,
            desktop: 40.0,
            large: 45.0,
        }
    }
}

impl GridConfig {
    /// Cell size for a breakpoint.
    pub fn cell_size(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Desktop => self.desktop,
            Breakpoint::Large => self.large,
        }
    }

    /// Whether every cell size is positive and sizes never shrink as the
    /// container grows. Nothing enforces this; it is only reported.
    pub fn is_well_formed(&self) -> bool {
        self.mobile > 0.0
            && self.mobile <= self.tablet
            && self.tablet <= self.desktop
            && self.desktop <= self.large
    }
}

/// Grid cell size for a container of the given width.
pub fn responsive_grid_size(container_width: f64, config: &GridConfig) -> f64 {
    config.cell_size(Breakpoint::from_width(container_width))
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate moved.
    pub snapped_x: bool,
    /// Whether the Y coordinate moved.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Check if any coordinate moved.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Nearest multiple of `grid_size`. Halfway values round up (towards +inf),
/// including negative ones: -0.5 cells becomes 0, not -1.
fn round_to_grid(value: f64, grid_size: f64) -> f64 {
    (value / grid_size + 0.5).floor() * grid_size
}

/// Snap a point to the nearest grid intersection, clamped to the positive quadrant.
pub fn snap_to_grid(point: Point, grid_size: f64) -> SnapResult {
    let x = round_to_grid(point.x, grid_size).max(0.0);
    let y = round_to_grid(point.y, grid_size).max(0.0);

    SnapResult {
        point: Point::new(x, y),
        snapped_x: x != point.x,
        snapped_y: y != point.y,
    }
}

/// Snap a point to the grid, scattering it slightly inside its cell.
///
/// Each axis gets independent jitter drawn uniformly from
/// `[-range / 2, range / 2)` where `range = floor(0.15 * grid_size)`, so
/// notes dropped on the same cell don't stack perfectly. With `immediate`
/// set no jitter is applied and `rng` is left untouched.
pub fn snap_to_grid_jittered<R: Rng>(
    point: Point,
    grid_size: f64,
    immediate: bool,
    rng: &mut R,
) -> Point {
    let snapped_x = round_to_grid(point.x, grid_size);
    let snapped_y = round_to_grid(point.y, grid_size);

    if immediate {
        return Point::new(snapped_x.max(0.0), snapped_y.max(0.0));
    }

    let offset_range = (grid_size * JITTER_FRACTION).floor();
    let jitter_x = rng.r#gen::<f64>() * offset_range - offset_range / 2.0;
    let jitter_y = rng.r#gen::<f64>() * offset_range - offset_range / 2.0;

    Point::new(
        (snapped_x + jitter_x).max(0.0),
        (snapped_y + jitter_y).max(0.0),
    )
}
