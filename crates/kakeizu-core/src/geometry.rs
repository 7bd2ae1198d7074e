//! Geometric primitives for chart layout and page composition.
//!
//! # Coordinate System
//!
//! Kakeizu uses the page coordinate convention of print documents:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! - **Origin**: Bottom-left corner of the page at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//!
//! All values are in PostScript points (1 pt = 1/72 inch). The chart's
//! source dimensions are metric, so [`MM`] converts millimetres to points.

/// One millimetre expressed in PostScript points.
pub const MM: f32 = 72.0 / 25.4;

/// A 2D point in page coordinate space.
///
/// The origin is at the bottom-left of the page with Y increasing upward
/// (see [module documentation](self)).
///
/// # Examples
///
/// ```
/// # use kakeizu_core::geometry::Point;
/// let father = Point::new(100.0, 400.0);
/// let mother = Point::new(60.0, 400.0);
///
/// let child_x = father.midpoint(mother).x();
/// assert_eq!(child_x, 80.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
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

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Returns the point moved by the given offsets
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Width and height dimensions of a page or an element
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
}

/// A rectangular bounding box with minimum and maximum coordinates.
///
/// In page space `min_y` is the bottom edge and `max_y` the top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate (left edge)
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate (bottom edge)
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate (right edge)
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate (top edge)
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Page margins with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f32..500.0, 1.0f32..500.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// Midpoint should be symmetric: a.midpoint(b) == b.midpoint(a).
    fn check_midpoint_is_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let m1 = p1.midpoint(p2);
        let m2 = p2.midpoint(p1);

        prop_assert!(approx_eq!(f32, m1.x(), m2.x()));
        prop_assert!(approx_eq!(f32, m1.y(), m2.y()));
        Ok(())
    }

    /// Midpoint should always lie between (or on) both points.
    fn check_midpoint_is_between_points(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let mid = p1.midpoint(p2);

        prop_assert!(mid.x() >= p1.x().min(p2.x()) && mid.x() <= p1.x().max(p2.x()));
        prop_assert!(mid.y() >= p1.y().min(p2.y()) && mid.y() <= p1.y().max(p2.y()));
        Ok(())
    }

    /// Bounds built from a center must report that center back.
    fn check_bounds_center_roundtrip(center: Point, size: Size) -> Result<(), TestCaseError> {
        let bounds = Bounds::from_center(center, size);

        prop_assert!(approx_eq!(
            f32,
            bounds.center().x(),
            center.x(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(
            f32,
            bounds.center().y(),
            center.y(),
            epsilon = 0.001
        ));
        prop_assert!(approx_eq!(f32, bounds.width(), size.width(), epsilon = 0.001));
        prop_assert!(approx_eq!(
            f32,
            bounds.height(),
            size.height(),
            epsilon = 0.001
        ));
        Ok(())
    }

    proptest! {
        #[test]
        fn midpoint_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_symmetric(p1, p2)?;
        }

        #[test]
        fn midpoint_is_between_points(p1 in point_strategy(), p2 in point_strategy()) {
            check_midpoint_is_between_points(p1, p2)?;
        }

        #[test]
        fn bounds_center_roundtrip(center in point_strategy(), size in size_strategy()) {
            check_bounds_center_roundtrip(center, size)?;
        }
    }
}
