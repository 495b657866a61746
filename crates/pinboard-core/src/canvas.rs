//! Canvas sizing: how big the scrollable surface must be to hold every item.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// Anything placed on the canvas at a top-left position.
pub trait Positioned {
    /// Top-left corner in canvas coordinates.
    fn position(&self) -> Point;
}

impl Positioned for Point {
    fn position(&self) -> Point {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Point {
        (**self).position()
    }
}

/// Parameters for [`canvas_size`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSizing {
    /// Footprint assumed for every item.
    pub item_size: Size,
    /// The canvas never gets smaller than this.
    pub min_size: Size,
    /// Extra room past the furthest item edge.
    pub padding: f64,
}

impl Default for CanvasSizing {
    fn default() -> Self {
        Self {
            item_size: Size::new(400.0, 400.0),
            min_size: Size::new(1200.0, 800.0),
            padding: 200.0,
        }
    }
}

impl CanvasSizing {
    /// Canvas size for a set of items. See [`canvas_size`].
    pub fn fit<'a, T, I>(&self, items: I) -> Size
    where
        T: Positioned + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        canvas_size(items, self)
    }
}

/// Smallest canvas that contains every item plus padding, never below
/// `sizing.min_size`. An empty set yields `min_size` exactly.
pub fn canvas_size<'a, T, I>(items: I, sizing: &CanvasSizing) -> Size
where
    T: Positioned + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut extent: Option<(f64, f64)> = None;

    for item in items {
        let pos = item.position();
        let right = pos.x + sizing.item_size.width;
        let bottom = pos.y + sizing.item_size.height;
        extent = Some(match extent {
            Some((max_x, max_y)) => (max_x.max(right), max_y.max(bottom)),
            None => (right, bottom),
        });
    }

    match extent {
        None => sizing.min_size,
        Some((max_x, max_y)) => Size::new(
            (max_x + sizing.padding).max(sizing.min_size.width),
            (max_y + sizing.padding).max(sizing.min_size.height),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_minimum() {
        let items: Vec<Point> = Vec::new();
        let size = canvas_size(&items, &CanvasSizing::default());
        assert_eq!(size, Size::new(1200.0, 800.0));
    }

    #[test]
    fn test_single_item_past_minimum() {
        let items = vec![Point::new(1000.0, 700.0)];
        let size = canvas_size(&items, &CanvasSizing::default());
        assert_eq!(size, Size::new(1600.0, 1300.0));
    }

    #[test]
    fn test_small_layout_keeps_minimum() {
        let items = vec![Point::new(10.0, 10.0), Point::new(300.0, 100.0)];
        let size = canvas_size(&items, &CanvasSizing::default());
        assert_eq!(size, Size::new(1200.0, 800.0));
    }

    #[test]
    fn test_axes_are_independent() {
        // Wide but short: only width grows
        let items = vec![Point::new(2000.0, 0.0)];
        let size = canvas_size(&items, &CanvasSizing::default());
        assert_eq!(size, Size::new(2600.0, 800.0));
    }

    #[test]
    fn test_furthest_item_wins() {
        let items = vec![
            Point::new(1500.0, 100.0),
            Point::new(200.0, 1800.0),
            Point::new(900.0, 900.0),
        ];
        let size = canvas_size(&items, &CanvasSizing::default());
        assert_eq!(size, Size::new(2100.0, 2400.0));
    }

    #[test]
    fn test_custom_sizing() {
        let sizing = CanvasSizing {
            item_size: Size::new(100.0, 50.0),
            min_size: Size::new(0.0, 0.0),
            padding: 10.0,
        };
        let size = sizing.fit(&[Point::new(20.0, 30.0)]);
        assert_eq!(size, Size::new(130.0, 90.0));
    }

    #[test]
    fn test_negative_positions_still_respect_minimum() {
        let items = vec![Point::new(-5000.0, -5000.0)];
        let size = canvas_size(&items, &CanvasSizing::default());
        assert_eq!(size, Size::new(1200.0, 800.0));
    }

    #[test]
    fn test_monotonic_when_adding_items() {
        let sizing = CanvasSizing::default();
        let mut items = vec![Point::new(800.0, 600.0)];
        let before = canvas_size(&items, &sizing);
        items.push(Point::new(100.0, 100.0));
        let after = canvas_size(&items, &sizing);
        assert!(after.width >= before.width);
        assert!(after.height >= before.height);

        items.push(Point::new(1400.0, 50.0));
        let further = canvas_size(&items, &sizing);
        assert!(further.width > after.width);
        assert!(further.height >= after.height);
    }
}
