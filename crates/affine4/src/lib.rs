//! Geometry primitives for graphics transforms
//!
//! This crate provides a small set of geometry types for 2D/3D graphics:
//!
//! - [`Matrix4`] - 4×4 homogeneous transformation matrix
//! - [`Point2`] / [`Point3`] - positions in the plane and in space
//! - [`Vector2`] / [`Vector3`] - displacements in the plane and in space
//! - [`Tuple`] - closed set of the four point/vector kinds for polymorphic
//!   transforms
//!
//! # Composition order
//!
//! Matrix composition reads left to right in application order: `a * b`
//! means "apply `a`, then apply `b`", and the in-place operators append
//! the same way. This trades the conventional mathematical
//! left-multiplication for code that reads in the order the operations
//! happen.
//!
//! # Example
//!
//! ```rust
//! use affine4::{Matrix4, Point2, Tuple};
//!
//! // Move right, then double everything
//! let mut m = Matrix4::new();
//! m.translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
//!
//! assert_eq!(m.transform(0.0, 0.0, 0.0), (2.0, 0.0, 0.0));
//!
//! // Tuples keep their kind through a transform
//! let p = m.transform_tuple(&Tuple::Point2(Point2::new(1.0, 1.0)));
//! assert_eq!(p, Tuple::Point2(Point2::new(4.0, 2.0)));
//!
//! // Transforms invert exactly when they are non-singular
//! let back = m.inverse()?;
//! assert_eq!(back.transform(2.0, 0.0, 0.0), (0.0, 0.0, 0.0));
//! # Ok::<(), affine4::MatrixError>(())
//! ```

mod error;
mod matrix;
mod serde_helpers;
mod tuple;

pub use error::{MatrixError, MatrixResult};
pub use matrix::Matrix4;
pub use tuple::{Point2, Point3, Tuple, Vector2, Vector3};
