//! Conversion of rotations given as three orthonormal axes to the axis-angle representation
//! (and the rotation vector that UR controllers use for orientation), and to Euler angles.
//!
//! The axis-angle extraction follows the well known method from Martin Baker's
//! euclideanspace.com that treats the 0° and 180° singularities separately.
//!
//! A rotation is taken as singular when the symmetric off-diagonal terms differ by less than
//! `SYMMETRY_TOLERANCE`, that is when `2 sin(angle)` times the axis component is below it.
//! Rotations closer than about 0.005 rad to 0 or π therefore come out as exactly 0 or π,
//! and the rotation vector of such a pose carries an error of up to that angle.

extern crate nalgebra as na;

use std::f64::consts::PI;
use na::{Isometry3, Matrix3, Matrix4, Rotation3, Unit, UnitQuaternion, Vector3};

/// Maximal difference between symmetric off-diagonal terms to consider the matrix symmetric
/// (rotation angle 0 or 180 degrees).
pub const SYMMETRY_TOLERANCE: f64 = 0.01;

/// Tolerance of the identity check inside the symmetric case.
pub const IDENTITY_TOLERANCE: f64 = 0.01;

/// Anything that can provide the three orthonormal axes (columns) of a rotation.
pub trait OrthonormalAxes {
    /// x, y and z (normal) axes, in this order
    fn axes(&self) -> [Vector3<f64>; 3];
}

impl OrthonormalAxes for Matrix3<f64> {
    fn axes(&self) -> [Vector3<f64>; 3] {
        [self.column(0).into_owned(), self.column(1).into_owned(), self.column(2).into_owned()]
    }
}

impl OrthonormalAxes for Rotation3<f64> {
    fn axes(&self) -> [Vector3<f64>; 3] {
        self.matrix().axes()
    }
}

impl OrthonormalAxes for UnitQuaternion<f64> {
    fn axes(&self) -> [Vector3<f64>; 3] {
        self.to_rotation_matrix().axes()
    }
}

impl OrthonormalAxes for Isometry3<f64> {
    fn axes(&self) -> [Vector3<f64>; 3] {
        self.rotation.axes()
    }
}

/// Upper left 3 x 3 block of the homogeneous transform
impl OrthonormalAxes for Matrix4<f64> {
    fn axes(&self) -> [Vector3<f64>; 3] {
        let column = |j: usize| Vector3::new(self[(0, j)], self[(1, j)], self[(2, j)]);
        [column(0), column(1), column(2)]
    }
}

impl OrthonormalAxes for [Vector3<f64>; 3] {
    fn axes(&self) -> [Vector3<f64>; 3] {
        *self
    }
}

/// Rotation by `angle` in [0, π] around the unit `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub angle: f64,
    pub axis: Unit<Vector3<f64>>,
}

impl AxisAngle {
    /// Zero rotation. The axis is arbitrary, by convention x.
    pub fn identity() -> Self {
        AxisAngle { angle: 0.0, axis: Vector3::x_axis() }
    }

    /// Axis scaled by the angle, as used in UR poses p[x, y, z, rx, ry, rz]
    pub fn rotation_vector(&self) -> Vector3<f64> {
        self.axis.into_inner() * self.angle
    }

    /// Inverse of `rotation_vector`. Vectors shorter than 1e-12 give the identity.
    pub fn from_rotation_vector(v: &Vector3<f64>) -> Self {
        let angle = v.norm();
        if angle < 1e-12 {
            return AxisAngle::identity();
        }
        AxisAngle { angle, axis: Unit::new_unchecked(v / angle) }
    }

    pub fn to_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&self.axis, self.angle)
    }
}

/// Converts a rotation, given as three orthonormal axes, to the axis-angle representation.
///
/// ```
/// use nalgebra::{UnitQuaternion, Vector3};
/// use ur_dh_kinematics::axis_angle::axis_angle;
/// let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.5);
/// let aa = axis_angle(&rotation);
/// assert!((aa.angle - 0.5).abs() < 1e-9);
/// assert!((aa.axis.y - 1.0).abs() < 1e-9);
/// ```
pub fn axis_angle<A: OrthonormalAxes + ?Sized>(rotation: &A) -> AxisAngle {
    let m = Matrix3::from_columns(&rotation.axes());
    let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);

    let eps = SYMMETRY_TOLERANCE;
    if (m01 - m10).abs() < eps && (m02 - m20).abs() < eps && (m12 - m21).abs() < eps {
        // Symmetric matrix: the angle is either 0 or 180 degrees
        let eps2 = IDENTITY_TOLERANCE;
        if (m01 + m10).abs() < eps2
            && (m02 + m20).abs() < eps2
            && (m12 + m21).abs() < eps2
            && (m00 + m11 + m22 - 3.0).abs() < eps2
        {
            return AxisAngle::identity();
        }

        let xx = (m00 + 1.0) / 2.0;
        let yy = (m11 + 1.0) / 2.0;
        let zz = (m22 + 1.0) / 2.0;
        let xy = (m01 + m10) / 4.0;
        let xz = (m02 + m20) / 4.0;
        let yz = (m12 + m21) / 4.0;
        let root_half = 0.5_f64.sqrt();

        // Divide by the square root of the largest diagonal term
        let axis = if xx > yy && xx > zz {
            if xx < eps {
                Vector3::new(0.0, root_half, root_half)
            } else {
                let x = xx.sqrt();
                Vector3::new(x, xy / x, xz / x)
            }
        } else if yy > zz {
            if yy < eps {
                Vector3::new(root_half, 0.0, root_half)
            } else {
                let y = yy.sqrt();
                Vector3::new(xy / y, y, yz / y)
            }
        } else if zz < eps {
            Vector3::new(root_half, root_half, 0.0)
        } else {
            let z = zz.sqrt();
            Vector3::new(xz / z, yz / z, z)
        };
        return AxisAngle { angle: PI, axis: Unit::new_normalize(axis) };
    }

    let mut s = ((m21 - m12) * (m21 - m12) + (m02 - m20) * (m02 - m20) + (m10 - m01) * (m10 - m01)).sqrt();
    if s.abs() < 0.001 {
        // Only possible if the axes are not orthonormal
        s = 1.0;
    }
    let angle = ((m00 + m11 + m22 - 1.0) / 2.0).clamp(-1.0, 1.0).acos();
    let axis = Vector3::new(m21 - m12, m02 - m20, m10 - m01) / s;
    AxisAngle { angle, axis: Unit::new_normalize(axis) }
}

/// Euler angles (rx, ry, rz) of the rotation R = Rz * Ry * Rx. Away from the gimbal lock
/// (ry = ±90°) there are two sets; at the lock there is one, with rz fixed to 0.
pub fn euler_angles<A: OrthonormalAxes + ?Sized>(rotation: &A) -> Vec<[f64; 3]> {
    let m = Matrix3::from_columns(&rotation.axes());
    let m20 = m[(2, 0)].clamp(-1.0, 1.0);

    if 1.0 - m20.abs() > 1e-12 {
        let ry1 = -m20.asin();
        let ry2 = PI - ry1;
        [ry1, ry2]
            .iter()
            .map(|&ry| {
                let c = ry.cos();
                let rx = f64::atan2(m[(2, 1)] / c, m[(2, 2)] / c);
                let rz = f64::atan2(m[(1, 0)] / c, m[(0, 0)] / c);
                [rx, ry, rz]
            })
            .collect()
    } else {
        let rz = 0.0;
        if m20 < 0.0 {
            vec![[rz + f64::atan2(m[(0, 1)], m[(0, 2)]), PI / 2.0, rz]]
        } else {
            vec![[-rz + f64::atan2(-m[(0, 1)], -m[(0, 2)]), -PI / 2.0, rz]]
        }
    }
}
