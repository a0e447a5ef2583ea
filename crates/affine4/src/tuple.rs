//! 2D and 3D point and vector types
//!
//! Points are positions; vectors are displacements. The distinction matters
//! to [`Matrix4`](crate::Matrix4): both transform through the same
//! homogeneous pipeline, but the result keeps the kind of its input.
//!
//! [`Tuple`] is the closed set of all four kinds, used where a transform
//! must accept any of them and return the matching kind.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use lin_alg::f32::Vec3;
use serde::{Deserialize, Serialize};

/// A position in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

/// A displacement in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// A position in space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A displacement in space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point
    pub fn distance2(&self, other: &Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Distance to another point
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance2(other).sqrt()
    }
}

impl Vector2 {
    /// Create a new vector
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared length of this vector
    pub fn length2(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Length of this vector
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in this direction
    ///
    /// A degenerate (near-zero) vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < 1e-10 {
            *self
        } else {
            Self::new(self.x / len, self.y / len)
        }
    }
}

impl Point3 {
    /// Create a new point
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to another point
    pub fn distance2(&self, other: &Self) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Distance to another point
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance2(other).sqrt()
    }
}

impl Vector3 {
    /// Create a new vector
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared length of this vector
    pub fn length2(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Length of this vector
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Unit vector in this direction
    ///
    /// A degenerate (near-zero) vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < 1e-10 {
            *self
        } else {
            Self::new(self.x / len, self.y / len, self.z / len)
        }
    }
}

// Point/vector interaction: point - point = vector, point +/- vector = point.

impl Sub for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f32) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Any of the four point/vector kinds
///
/// The set is closed: a transform over a `Tuple` always produces the same
/// variant it was given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tuple {
    Point2(Point2),
    Vector2(Vector2),
    Point3(Point3),
    Vector3(Vector3),
}

impl Tuple {
    /// Number of components carried by this kind (2 or 3)
    pub fn component_count(&self) -> usize {
        match self {
            Tuple::Point2(_) | Tuple::Vector2(_) => 2,
            Tuple::Point3(_) | Tuple::Vector3(_) => 3,
        }
    }

    /// Whether this kind is a point (as opposed to a vector)
    pub fn is_point(&self) -> bool {
        matches!(self, Tuple::Point2(_) | Tuple::Point3(_))
    }
}

impl From<Point2> for Tuple {
    fn from(p: Point2) -> Self {
        Tuple::Point2(p)
    }
}

impl From<Vector2> for Tuple {
    fn from(v: Vector2) -> Self {
        Tuple::Vector2(v)
    }
}

impl From<Point3> for Tuple {
    fn from(p: Point3) -> Self {
        Tuple::Point3(p)
    }
}

impl From<Vector3> for Tuple {
    fn from(v: Vector3) -> Self {
        Tuple::Vector3(v)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tuple::Point2(p) => p.fmt(f),
            Tuple::Vector2(v) => v.fmt(f),
            Tuple::Point3(p) => p.fmt(f),
            Tuple::Vector3(v) => v.fmt(f),
        }
    }
}
