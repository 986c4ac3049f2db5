//! Exact-arithmetic 3D points.
//!
//! All geometry in the refiner is carried out on arbitrary-precision
//! rationals. Averaging the same values in a different order always produces
//! the same point, so a vertex can be identified purely by its coordinates
//! across any number of subdivision passes. Conversion to floating point
//! happens only at the output boundary ([`Point::to_point3`]).

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use nalgebra::Point3;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::error::{MeshError, Result};

/// Exact coordinate type.
pub type Scalar = BigRational;

/// Build an integral [`Scalar`].
pub fn scalar(n: i64) -> Scalar {
    BigRational::from_integer(BigInt::from(n))
}

/// Build the [`Scalar`] `numer / denom`.
///
/// # Panics
/// Panics if `denom` is zero.
pub fn ratio(numer: i64, denom: i64) -> Scalar {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// A point in 3D space with exact rational coordinates.
///
/// Equality, ordering and hashing are by exact value, which makes `Point`
/// usable directly as a map key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// X coordinate.
    pub x: Scalar,
    /// Y coordinate.
    pub y: Scalar,
    /// Z coordinate.
    pub z: Scalar,
}

impl Point {
    /// Create a point from exact coordinates.
    pub fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Create a point with integer coordinates.
    pub fn from_integers(x: i64, y: i64, z: i64) -> Self {
        Self::new(scalar(x), scalar(y), scalar(z))
    }

    /// The origin `(0, 0, 0)`.
    pub fn origin() -> Self {
        Self::new(Scalar::zero(), Scalar::zero(), Scalar::zero())
    }

    /// Multiply every component by `k`.
    pub fn scale(&self, k: &Scalar) -> Point {
        Point::new(&self.x * k, &self.y * k, &self.z * k)
    }

    /// Plain average of two points.
    pub fn midpoint(&self, other: &Point) -> Point {
        (self + other).scale(&ratio(1, 2))
    }

    /// Convert to a floating-point point.
    ///
    /// Returns `None` if a coordinate has no `f64` representation.
    pub fn to_point3(&self) -> Option<Point3<f64>> {
        Some(Point3::new(
            self.x.to_f64()?,
            self.y.to_f64()?,
            self.z.to_f64()?,
        ))
    }
}

impl Add for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        Point::new(&self.x + &rhs.x, &self.y + &rhs.y, &self.z + &rhs.z)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<It: Iterator<Item = &'a Point>>(iter: It) -> Point {
        iter.fold(Point::origin(), |acc, p| &acc + p)
    }
}

impl Sum for Point {
    fn sum<It: Iterator<Item = Point>>(iter: It) -> Point {
        iter.fold(Point::origin(), |acc, p| acc + p)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Component-wise sum of `points`. The empty sum is the origin.
pub fn add_points<'a, It>(points: It) -> Point
where
    It: IntoIterator<Item = &'a Point>,
{
    points.into_iter().sum()
}

/// Per-axis mean of `points`.
///
/// Returns [`MeshError::EmptyAverage`] when `points` is empty.
pub fn average<'a, It>(points: It) -> Result<Point>
where
    It: IntoIterator<Item = &'a Point>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Point::origin(), 0i64), |(acc, n), p| (&acc + p, n + 1));

    if count == 0 {
        return Err(MeshError::EmptyAverage);
    }
    Ok(sum.scale(&ratio(1, count)))
}
