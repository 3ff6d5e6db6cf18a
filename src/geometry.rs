use serde::{Deserialize, Serialize};

/// A position on the canvas, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangular region of the canvas.
///
/// `min` is always component-wise less than or equal to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub min: Point,
    pub max: Point,
}

impl Region {
    /// Build a region from any two opposite corners, normalizing so that
    /// `min` ends up top-left regardless of drag direction.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Grow the region by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let region = Region::from_corners(Point::new(30.0, 5.0), Point::new(10.0, 25.0));
        assert_eq!(region.min, Point::new(10.0, 5.0));
        assert_eq!(region.max, Point::new(30.0, 25.0));
        assert_eq!(region.width(), 20.0);
        assert_eq!(region.height(), 20.0);
    }

    #[test]
    fn expand_grows_every_side() {
        let region = Region::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let expanded = region.expand(2.5);
        assert_eq!(expanded.min, Point::new(-2.5, -2.5));
        assert_eq!(expanded.max, Point::new(12.5, 12.5));
    }
}
