//! Node transforms
//!
//! A [`Transform`] is the local pose of a scene node: translation, rotation
//! in degrees, and per-axis scale, composed as `T * R * S`. Absolute poses
//! are products of local matrices up to the root and are turned back into
//! a `Transform` by [`Transform::from_matrix`].

use nalgebra::{Matrix3, Vector3};
use planorama_core::{Point, Scale, TransformRecord};
use serde::{Deserialize, Serialize};

/// Local pose of a scene node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, clockwise in screen space
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Unscaled pose at `(x, y)` with `rotation` degrees
    pub const fn at(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            rotation,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same pose with unit scale
    pub fn unscaled(self) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            ..self
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Homogeneous matrix `T * R * S`
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        Matrix3::new(
            cos * self.scale_x,
            -sin * self.scale_y,
            self.x,
            sin * self.scale_x,
            cos * self.scale_y,
            self.y,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Decompose an affine matrix into translation, rotation and scale.
    ///
    /// Skew is discarded; rotation comes back in `(-180, 180]`.
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        let a = m[(0, 0)];
        let b = m[(1, 0)];
        let c = m[(0, 1)];
        let d = m[(1, 1)];

        let scale_x = a.hypot(b);
        if scale_x == 0.0 {
            return Self {
                x: m[(0, 2)],
                y: m[(1, 2)],
                rotation: 0.0,
                scale_x: 0.0,
                scale_y: c.hypot(d),
            };
        }

        Self {
            x: m[(0, 2)],
            y: m[(1, 2)],
            rotation: b.atan2(a).to_degrees(),
            scale_x,
            scale_y: (a * d - b * c) / scale_x,
        }
    }

    pub fn record(&self) -> TransformRecord {
        TransformRecord {
            x: self.x,
            y: self.y,
            rotation: self.rotation,
        }
    }

    pub fn scale(&self) -> Scale {
        Scale {
            x: self.scale_x,
            y: self.scale_y,
        }
    }

    pub fn from_record(record: &TransformRecord, scale: Scale) -> Self {
        Self {
            x: record.x,
            y: record.y,
            rotation: record.rotation,
            scale_x: scale.x,
            scale_y: scale.y,
        }
    }
}

/// Apply a homogeneous matrix to a point.
pub fn apply(m: &Matrix3<f64>, p: Point) -> Point {
    let v = m * Vector3::new(p.x, p.y, 1.0);
    Point::new(v.x, v.y)
}

/// Rotation by `degrees` around `pivot`, as a homogeneous matrix.
pub fn rotation_about(pivot: Point, degrees: f64) -> Matrix3<f64> {
    let to_origin = Transform::at(-pivot.x, -pivot.y, 0.0).to_matrix();
    let rotate = Transform::at(0.0, 0.0, degrees).to_matrix();
    let back = Transform::at(pivot.x, pivot.y, 0.0).to_matrix();
    back * rotate * to_origin
}

/// Translation by `(dx, dy)`, as a homogeneous matrix.
pub fn translation(dx: f64, dy: f64) -> Matrix3<f64> {
    Transform::at(dx, dy, 0.0).to_matrix()
}
