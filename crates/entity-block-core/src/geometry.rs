//! Geometric primitives for symbol layout and positioning.
//!
//! - [`Point`] - A 2D coordinate in symbol space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box defined by minimum and maximum coordinates
//!
//! The coordinate system matches SVG: origin at the top-left corner, X grows
//! rightward and Y grows downward.

/// A 2D point in symbol coordinate space.
///
/// # Examples
///
/// ```
/// # use entity_block_core::geometry::Point;
/// let center = Point::new(10.0, 20.0);
/// assert_eq!(center.x(), 10.0);
/// assert_eq!(center.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Converts a point and size into a bounds rectangle, treating the point
    /// as the top-left corner.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Rounds both dimensions up to the next whole unit.
    pub fn ceil(self) -> Self {
        Self {
            width: self.width.ceil(),
            height: self.height.ceil(),
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Moves the bounds by the specified offset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use entity_block_core::geometry::{Bounds, Point, Size};
    /// let body = Bounds::new_from_top_left(Point::new(40.0, 0.0), Size::new(120.0, 80.0));
    /// let shadow = body.translate(Point::new(5.0, 3.0));
    /// assert_eq!(shadow.min_x(), 45.0);
    /// assert_eq!(shadow.min_y(), 3.0);
    /// assert_eq!(shadow.width(), 120.0);
    /// ```
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

}
