//! Drag gesture tracking.
//!
//! The pointer layer feeds [`DragEvent`]s into a [`DragState`] it owns. The
//! state only changes through [`DragState::apply`], so a gesture is always
//! `idle -> dragging -> idle` and the end of a gesture tells the caller
//! whether it was a click or a real drag.

use crate::geometry::{CLICK_THRESHOLD, is_click_not_drag};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer input relevant to a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    /// Pointer pressed.
    Start(Point),
    /// Pointer moved.
    Move(Point),
    /// Pointer released.
    End(Point),
    /// Gesture aborted (e.g. Escape or focus loss).
    Cancel,
}

/// How a finished gesture should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The pointer barely moved.
    Click { at: Point },
    /// The pointer travelled at least the click threshold.
    Drag { start: Point, end: Point },
}

/// State of the pointer drag currently in progress, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    is_dragging: bool,
    drag_start: Option<Point>,
    current_position: Point,
    click_threshold: f64,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            is_dragging: false,
            drag_start: None,
            current_position: Point::ZERO,
            click_threshold: CLICK_THRESHOLD,
        }
    }
}

impl DragState {
    /// Create an idle drag state with the default click threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle drag state that treats gestures shorter than
    /// `click_threshold` pixels as clicks.
    pub fn with_click_threshold(click_threshold: f64) -> Self {
        Self {
            click_threshold,
            ..Self::default()
        }
    }

    /// Feed one pointer event. Returns an outcome only when a gesture ends.
    pub fn apply(&mut self, event: DragEvent) -> Option<DragOutcome> {
        match event {
            DragEvent::Start(position) => {
                self.current_position = position;
                if !self.is_dragging {
                    log::debug!("drag started at ({}, {})", position.x, position.y);
                    self.is_dragging = true;
                    self.drag_start = Some(position);
                }
                None
            }
            DragEvent::Move(position) => {
                self.current_position = position;
                None
            }
            DragEvent::End(position) => {
                self.current_position = position;
                let start = self.drag_start?;
                self.reset();

                let outcome = if is_click_not_drag(start, position, self.click_threshold) {
                    DragOutcome::Click { at: position }
                } else {
                    DragOutcome::Drag {
                        start,
                        end: position,
                    }
                };
                log::debug!("drag ended: {:?}", outcome);
                Some(outcome)
            }
            DragEvent::Cancel => {
                if self.is_dragging {
                    log::debug!("drag cancelled");
                }
                self.reset();
                None
            }
        }
    }

    fn reset(&mut self) {
        self.is_dragging = false;
        self.drag_start = None;
    }

    /// Whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Where the current gesture began.
    pub fn drag_start(&self) -> Option<Point> {
        self.drag_start
    }

    /// Last known pointer position.
    pub fn current_position(&self) -> Point {
        self.current_position
    }

    /// Offset of the pointer from the gesture start, if dragging.
    pub fn delta(&self) -> Option<Vec2> {
        self.drag_start.map(|start| self.current_position - start)
    }

    /// Whether the current gesture has moved far enough to count as a drag.
    pub fn exceeds_click_threshold(&self) -> bool {
        self.drag_start.is_some_and(|start| {
            !is_click_not_drag(start, self.current_position, self.click_threshold)
        })
    }
}
