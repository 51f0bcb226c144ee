//! Geometric primitives for force-directed layout.
//!
//! This module provides the small set of geometric types the layout engine
//! works with.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate or vector in canvas space
//! - [`Canvas`] - The fixed-size rectangle vertex positions are confined to
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Drift uses a coordinate system consistent with SVG and HTML canvases:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A canvas of width `W` and height `H` spans `[0, W] × [0, H]`.

use crate::error::GraphError;

/// A 2D point representing a position (or a force vector) in canvas space.
///
/// Points use `f64` coordinates; no integer truncation happens anywhere in
/// the force math.
///
/// # Examples
///
/// ```
/// # use drift_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let diff = p1.sub_point(p2);
/// assert_eq!(diff.x(), 5.0);
/// assert_eq!(diff.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin, also used as the zero force vector.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Checks that neither coordinate is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean length of the vector)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drift_core::geometry::Point;
    /// let point = Point::new(10.0, 20.0);
    ///
    /// let halved = point.scale(0.5);
    /// assert_eq!(halved.x(), 5.0);
    /// assert_eq!(halved.y(), 10.0);
    /// ```
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the negated vector
    pub fn reversed(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Rescales the vector so its length does not exceed `max_length`.
    ///
    /// Direction is preserved. Vectors already within the limit are returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drift_core::geometry::Point;
    /// let v = Point::new(30.0, 40.0);
    /// let capped = v.clamp_length(10.0);
    /// assert!((capped.hypot() - 10.0).abs() < 1e-12);
    /// assert!((capped.x() - 6.0).abs() < 1e-12);
    /// assert_eq!(v.clamp_length(100.0), v);
    /// ```
    pub fn clamp_length(self, max_length: f64) -> Self {
        let length = self.hypot();
        if length > max_length {
            self.scale(max_length / length)
        } else {
            self
        }
    }
}

/// The fixed-size rectangular area that vertex positions are confined to.
///
/// A canvas always has strictly positive, finite dimensions and a finite area; use
/// [`Canvas::new`] to construct one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Creates a new canvas.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCanvas`] if either dimension is not a
    /// finite value greater than zero, or if the area overflows.
    pub fn new(width: f64, height: f64) -> Result<Self, GraphError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !(width * height).is_finite() {
            return Err(GraphError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the canvas width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the canvas height
    pub fn height(self) -> f64 {
        self.height
    }

    /// Returns `width * height`
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Returns the center point of the canvas
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Checks whether the point lies inside `[0, width] × [0, height]`
    pub fn contains(self, point: Point) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Clamps each coordinate into the canvas.
    ///
    /// The canvas is a hard boundary: a point pushed past an edge sticks to
    /// that edge.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drift_core::geometry::{Canvas, Point};
    /// let canvas = Canvas::new(100.0, 50.0).unwrap();
    /// let clamped = canvas.clamp(Point::new(-3.0, 70.0));
    /// assert_eq!(clamped, Point::new(0.0, 50.0));
    /// ```
    pub fn clamp(self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a zero-sized bounds located at `point`
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grows the bounds so that it also covers `point`
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }
}
