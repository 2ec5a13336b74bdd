use crate::core::{
    constants::{CANVAS_HEIGHT, CANVAS_WIDTH},
    geo::Point,
};
use serde::{Deserialize, Serialize};

/// Represents a bounding box in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Starting value for aggregating region bounds: the full canvas turned
    /// inside out, so the first real rectangle always replaces it.
    pub fn canvas_sentinel() -> Self {
        Self::from_coords(CANVAS_WIDTH, CANVAS_HEIGHT, 0.0, 0.0)
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() * 0.5,
            self.min.y + self.height() * 0.5,
        )
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Widens the bounds so they also enclose `other`
    pub fn extend_bounds(&mut self, other: &Bounds) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    /// Checks if the bounds are valid (min <= max)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// True when the bounds cannot be fitted into a viewport: inverted,
    /// not finite, or without any extent.
    pub fn is_degenerate(&self) -> bool {
        !self.is_valid()
            || !self.min.is_finite()
            || !self.max.is_finite()
            || (self.width() <= 0.0 && self.height() <= 0.0)
    }

    /// Scales both corners by `sx`/`sy` around the origin
    pub fn scaled(&self, sx: f64, sy: f64) -> Bounds {
        Bounds::from_coords(
            self.min.x * sx,
            self.min.y * sy,
            self.max.x * sx,
            self.max.y * sy,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0))
    }
}

impl From<kurbo::Rect> for Bounds {
    fn from(rect: kurbo::Rect) -> Self {
        Bounds::from_coords(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}
