//! Pinboard Core Library
//!
//! Platform-agnostic layout utilities for the Pinboard sticky-note canvas:
//! drag tracking, grid snapping, edge auto-scroll and canvas sizing.

pub mod board;
pub mod canvas;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod grid;
pub mod scroll;
pub mod timing;

pub use board::{Board, BoardError, BoardResult, StickyNote};
pub use canvas::{CanvasSizing, Positioned, canvas_size};
pub use config::{ConfigError, ConfigResult, LayoutConfig};
pub use drag::{DragEvent, DragOutcome, DragState};
pub use geometry::{CLICK_THRESHOLD, distance, is_click, is_click_not_drag};
pub use grid::{
    Breakpoint, GridConfig, SnapResult, responsive_grid_size, snap_to_grid, snap_to_grid_jittered,
};
pub use scroll::{AutoScroll, auto_scroll_speed, auto_scroll_velocity};
pub use timing::{Debounce, Throttle};
