//! 4×4 homogeneous transform matrices
//!
//! [`Matrix4`] represents an affine transform of 2D/3D space in homogeneous
//! coordinates. Storage is row-major (`data[row*4 + col] = M[row][col]`)
//! over the numeric backend's `Mat4` buffer, applied to column vectors
//! `(x, y, z, 1)`.
//!
//! Composition reads left to right: `a * b` means "apply `a`, then `b`",
//! so the stored product is `b · a`. The in-place operators (`translate`,
//! `rotate`, `scale`, `*=`) follow the same convention.

use std::fmt;
use std::ops::{Mul, MulAssign};

use lin_alg::f32::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult};
use crate::tuple::{Point2, Point3, Tuple, Vector2, Vector3};

/// A 4×4 homogeneous transformation matrix
///
/// Freshly constructed matrices are the identity. Factory constructors
/// build single-operation transforms; the mutating operators append further
/// operations in left-to-right application order and return `&mut Self`
/// for chaining. Clones are deep: no storage is shared between instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix4 {
    /// Row-major buffer: data[row*4 + col] = M[row][col]
    #[serde(with = "crate::serde_helpers::mat4_serde")]
    mat: Mat4,
}

/// Row-major product `left · right`
fn multiply(left: &Mat4, right: &Mat4) -> Mat4 {
    let l = &left.data;
    let r = &right.data;
    let mut out = [0.0f32; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = l[row * 4] * r[col]
                + l[row * 4 + 1] * r[4 + col]
                + l[row * 4 + 2] * r[8 + col]
                + l[row * 4 + 3] * r[12 + col];
        }
    }
    Mat4 { data: out }
}

impl Matrix4 {
    /// Create a new identity matrix
    pub fn new() -> Self {
        Self::identity()
    }

    /// The identity matrix
    pub fn identity() -> Self {
        Self {
            mat: Mat4::new_identity(),
        }
    }

    /// Create a translation by `(x, y, z)`
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut mat = Mat4::new_identity();
        // Translation lives in the last column: data[row*4 + 3]
        mat.data[3] = x;
        mat.data[7] = y;
        mat.data[11] = z;
        Self { mat }
    }

    /// Create a rotation of `angle` degrees about the axis `(x, y, z)`
    ///
    /// Counterclockwise when viewed from the positive axis toward the
    /// origin; the z-axis `(0, 0, 1)` gives the usual 2D rotation of the
    /// xy-plane. The axis is used exactly as given, not normalized, so
    /// callers wanting a pure rotation must pass a unit axis.
    pub fn rotation(angle: f32, x: f32, y: f32, z: f32) -> Self {
        let rad = angle.to_radians();

        // Rodrigues' rotation formula
        let c = rad.cos();
        let s = rad.sin();
        let t = 1.0 - c;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let yz = y * z;
        let zx = z * x;
        let xs = x * s;
        let ys = y * s;
        let zs = z * s;

        let mut mat = Mat4::new_identity();
        // Row 0
        mat.data[0] = t * xx + c;
        mat.data[1] = t * xy - zs;
        mat.data[2] = t * zx + ys;
        // Row 1
        mat.data[4] = t * xy + zs;
        mat.data[5] = t * yy + c;
        mat.data[6] = t * yz - xs;
        // Row 2
        mat.data[8] = t * zx - ys;
        mat.data[9] = t * yz + xs;
        mat.data[10] = t * zz + c;
        // Row 3 is already [0, 0, 0, 1] from new_identity()

        Self { mat }
    }

    /// Create a non-uniform scale by `(x, y, z)`
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        let mut mat = Mat4::new_identity();
        mat.data[0] = x;
        mat.data[5] = y;
        mat.data[10] = z;
        Self { mat }
    }

    /// Build a matrix from a row-major 16-float array
    pub fn from_array(data: [f32; 16]) -> Self {
        Self {
            mat: Mat4 { data },
        }
    }

    /// Export the storage as a row-major 16-float array
    pub fn as_array(&self) -> [f32; 16] {
        self.mat.data
    }

    /// A new matrix holding the inverse of this one
    ///
    /// Fails with [`MatrixError::Singular`] when the backend's inversion
    /// primitive reports that no inverse exists.
    pub fn inverse(&self) -> MatrixResult<Matrix4> {
        // Buffer inversion is interpretation-agnostic: inv(Mᵀ) = inv(M)ᵀ.
        let mat = self.mat.inverse().ok_or(MatrixError::Singular)?;
        Ok(Matrix4 { mat })
    }

    /// A new matrix holding the transpose of this one
    pub fn transpose(&self) -> Matrix4 {
        let d = &self.mat.data;
        let mut out = Mat4::new_identity();
        for row in 0..4 {
            for col in 0..4 {
                out.data[row * 4 + col] = d[col * 4 + row];
            }
        }
        Matrix4 { mat: out }
    }

    /// Element-wise comparison within a tolerance
    pub fn approx_eq(&self, other: &Matrix4, eps: f32) -> bool {
        self.mat
            .data
            .iter()
            .zip(other.mat.data.iter())
            .all(|(a, b)| (a - b).abs() < eps)
    }

    /// Check if this matrix is approximately the identity
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Matrix4::identity(), 1e-4)
    }

    /// Replace this matrix with its inverse
    ///
    /// On failure the receiver is left untouched.
    pub fn invert(&mut self) -> MatrixResult<&mut Self> {
        self.mat = self.mat.inverse().ok_or(MatrixError::Singular)?;
        Ok(self)
    }

    /// Append a translation by `(x, y, z)` to this transform
    pub fn translate(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.compose(&Matrix4::translation(x, y, z));
        self
    }

    /// Append a rotation of `angle` degrees about `(x, y, z)` to this
    /// transform
    ///
    /// Same axis handling as [`Matrix4::rotation`]: the axis is not
    /// normalized.
    pub fn rotate(&mut self, angle: f32, x: f32, y: f32, z: f32) -> &mut Self {
        self.compose(&Matrix4::rotation(angle, x, y, z));
        self
    }

    /// Append a scale by `(x, y, z)` to this transform
    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.compose(&Matrix4::scaling(x, y, z));
        self
    }

    /// Append `next` to this transform
    ///
    /// The product goes into scratch storage before overwriting the
    /// receiver, so the receiver is never read and written in the same
    /// step.
    fn compose(&mut self, next: &Matrix4) {
        let tmp = multiply(&next.mat, &self.mat);
        self.mat = tmp;
    }

    /// Apply this transform to the homogeneous column `(x, y, z, 1)`
    ///
    /// Returns the first three output components; the w output is dropped,
    /// not divided through.
    pub fn transform(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let d = &self.mat.data;
        (
            d[0] * x + d[1] * y + d[2] * z + d[3],
            d[4] * x + d[5] * y + d[6] * z + d[7],
            d[8] * x + d[9] * y + d[10] * z + d[11],
        )
    }

    /// Transform a 2D point (lifted to `(x, y, 0, 1)`)
    pub fn transform_point2(&self, p: &Point2) -> Point2 {
        let (x, y, _) = self.transform(p.x, p.y, 0.0);
        Point2::new(x, y)
    }

    /// Transform a 2D vector (lifted to `(x, y, 0, 1)`)
    pub fn transform_vector2(&self, v: &Vector2) -> Vector2 {
        let (x, y, _) = self.transform(v.x, v.y, 0.0);
        Vector2::new(x, y)
    }

    /// Transform a 3D point
    pub fn transform_point3(&self, p: &Point3) -> Point3 {
        let (x, y, z) = self.transform(p.x, p.y, p.z);
        Point3::new(x, y, z)
    }

    /// Transform a 3D vector
    pub fn transform_vector3(&self, v: &Vector3) -> Vector3 {
        let (x, y, z) = self.transform(v.x, v.y, v.z);
        Vector3::new(x, y, z)
    }

    /// Transform any point/vector kind, returning the same kind
    pub fn transform_tuple(&self, value: &Tuple) -> Tuple {
        match value {
            Tuple::Point2(p) => Tuple::Point2(self.transform_point2(p)),
            Tuple::Vector2(v) => Tuple::Vector2(self.transform_vector2(v)),
            Tuple::Point3(p) => Tuple::Point3(self.transform_point3(p)),
            Tuple::Vector3(v) => Tuple::Vector3(self.transform_vector3(v)),
        }
    }

    /// Transform a raw component slice
    ///
    /// Accepts 2- and 3-component slices; anything else fails with
    /// [`MatrixError::UnsupportedComponents`].
    pub fn transform_components(&self, components: &[f32]) -> MatrixResult<Vec<f32>> {
        match components {
            &[x, y] => {
                let (tx, ty, _) = self.transform(x, y, 0.0);
                Ok(vec![tx, ty])
            }
            &[x, y, z] => {
                let (tx, ty, tz) = self.transform(x, y, z);
                Ok(vec![tx, ty, tz])
            }
            _ => Err(MatrixError::UnsupportedComponents(components.len())),
        }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    /// `a * b` is "apply `a`, then `b`": the stored product is `b · a`
    fn mul(self, rhs: &Matrix4) -> Matrix4 {
        Matrix4 {
            mat: multiply(&rhs.mat, &self.mat),
        }
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        &self * &rhs
    }
}

impl MulAssign<&Matrix4> for Matrix4 {
    fn mul_assign(&mut self, rhs: &Matrix4) {
        self.compose(rhs);
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Matrix4) {
        self.compose(&rhs);
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.mat.data;
        for row in 0..4 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{}, {}, {}, {}]",
                d[row * 4],
                d[row * 4 + 1],
                d[row * 4 + 2],
                d[row * 4 + 3]
            )?;
        }
        Ok(())
    }
}
