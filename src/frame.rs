//! Typed construction of frames (origin and three orthonormal axes) from the forms that
//! come in from the outside: origin and two axes, three points, a homogeneous matrix, or
//! the `[x, y, z, rx, ry, rz]` rotation vector pose used by UR controllers.
//!
//! Inside the crate a frame is simply the `Pose` (nalgebra `Isometry3`). The origin is the
//! translation and the axes are the columns of the rotation; `FrameAxes` gives them names.
//!
//! There is also the transform between two placements of the same three points
//! (`transform_between`). This is useful when a work piece, like a pallet, moves
//! and the robot program written for the old placement must follow.

use nalgebra::{Isometry3, Matrix3, Matrix4, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};
use std::error::Error;
use std::fmt;
use crate::axis_angle::{axis_angle, AxisAngle};
use crate::kinematic_traits::Pose;

/// Tolerance for the orthonormality check of the rotation part of a matrix.
pub const ORTHONORMAL_TOLERANCE: f64 = 1e-6;

/// How much the distances between points may differ for two point triples to
/// be still treated as the same rigid body. 5 mm looks like a reasonable check.
pub const NON_ISOMETRY_TOLERANCE: f64 = 0.005;

/// Named access to the parts of the frame.
pub trait FrameAxes {
    fn origin(&self) -> Point3<f64>;
    fn x_axis(&self) -> Vector3<f64>;
    fn y_axis(&self) -> Vector3<f64>;

    /// The z axis
    fn normal(&self) -> Vector3<f64>;

    /// Frame with the same orientation, origin moved by `distance` along the normal.
    fn translated_along_normal(&self, distance: f64) -> Self;
}

impl FrameAxes for Isometry3<f64> {
    fn origin(&self) -> Point3<f64> {
        Point3::from(self.translation.vector)
    }

    fn x_axis(&self) -> Vector3<f64> {
        self.rotation * Vector3::x()
    }

    fn y_axis(&self) -> Vector3<f64> {
        self.rotation * Vector3::y()
    }

    fn normal(&self) -> Vector3<f64> {
        self.rotation * Vector3::z()
    }

    fn translated_along_normal(&self, distance: f64) -> Self {
        let origin = self.translation.vector + self.normal() * distance;
        Isometry3::from_parts(Translation3::from(origin), self.rotation)
    }
}

/// Reasons a frame cannot be built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameError {
    /// The three points are on the same line so they do not define a plane.
    ColinearPoints {
        p1: Point3<f64>,
        p2: Point3<f64>,
        p3: Point3<f64>,
    },
    /// An axis has zero length, or both axes point the same way.
    ZeroAxis,
    /// The rotation part of the matrix is not a proper rotation.
    NotOrthonormal,
    /// The two point triples are not the same rigid body moved (distances differ).
    NotIsometry,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrameError::ColinearPoints { p1, p2, p3 } => write!(
                f, "Cannot create a frame from colinear points: p1 = {:?}, p2 = {:?}, p3 = {:?}",
                p1, p2, p3
            ),
            FrameError::ZeroAxis => write!(f, "Frame axis has zero length or axes are parallel"),
            FrameError::NotOrthonormal => write!(f, "Matrix is not a rigid transform"),
            FrameError::NotIsometry => write!(f, "Point triples are not related by a rigid transform"),
        }
    }
}

impl Error for FrameError {}

/// Frame at `origin` with the given x axis. The y axis only needs to lie in the xy plane;
/// it is made orthogonal to x. z is x × y.
pub fn frame_from_axes(origin: Point3<f64>, x_axis: Vector3<f64>, y_axis: Vector3<f64>) -> Result<Pose, FrameError> {
    let z = x_axis.cross(&y_axis);
    if x_axis.norm() < f64::EPSILON || z.norm() < f64::EPSILON {
        return Err(FrameError::ZeroAxis);
    }
    let x = x_axis.normalize();
    let z = z.normalize();
    let y = z.cross(&x);

    let rotation = Rotation3::from_matrix_unchecked(Matrix3::from_columns(&[x, y, z]));
    Ok(Isometry3::from_parts(
        Translation3::from(origin.coords),
        UnitQuaternion::from_rotation_matrix(&rotation),
    ))
}

/// Frame in the plane of three points: the origin at `origin`, x towards `x_point`,
/// `y_point` on the positive y side.
pub fn frame_from_points(origin: Point3<f64>, x_point: Point3<f64>, y_point: Point3<f64>) -> Result<Pose, FrameError> {
    let x = x_point - origin;
    let y = y_point - origin;
    if x.cross(&y).norm() < f64::EPSILON {
        return Err(FrameError::ColinearPoints { p1: origin, p2: x_point, p3: y_point });
    }
    frame_from_axes(origin, x, y)
}

/// Frame from the 4x4 homogeneous matrix.
pub fn frame_from_matrix(m: &Matrix4<f64>) -> Result<Pose, FrameError> {
    let last_row_ok = m[(3, 0)].abs() < ORTHONORMAL_TOLERANCE
        && m[(3, 1)].abs() < ORTHONORMAL_TOLERANCE
        && m[(3, 2)].abs() < ORTHONORMAL_TOLERANCE
        && (m[(3, 3)] - 1.0).abs() < ORTHONORMAL_TOLERANCE;
    let r: Matrix3<f64> = m.fixed_view::<3, 3>(0, 0).into_owned();
    let orthonormal = (r.transpose() * r - Matrix3::identity()).norm() < ORTHONORMAL_TOLERANCE
        && (r.determinant() - 1.0).abs() < ORTHONORMAL_TOLERANCE;
    if !last_row_ok || !orthonormal {
        return Err(FrameError::NotOrthonormal);
    }
    let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(r));
    let translation = Translation3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
    Ok(Isometry3::from_parts(translation, rotation))
}

/// The pose as `[x, y, z, rx, ry, rz]`, rotation given as the rotation vector.
pub fn pose_vector(pose: &Pose) -> [f64; 6] {
    let t = pose.translation.vector;
    let r = axis_angle(pose).rotation_vector();
    [t.x, t.y, t.z, r.x, r.y, r.z]
}

/// Reverse of `pose_vector`.
pub fn pose_from_vector(v: &[f64; 6]) -> Pose {
    let rotation = AxisAngle::from_rotation_vector(&Vector3::new(v[3], v[4], v[5])).to_rotation();
    Isometry3::from_parts(Translation3::new(v[0], v[1], v[2]), rotation)
}

/// Rigid transform that moves points `p1, p2, p3` into `q1, q2, q3`.
pub fn transform_between(
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    q1: Point3<f64>,
    q2: Point3<f64>,
    q3: Point3<f64>,
) -> Result<Pose, FrameError> {
    if !distances_match(&[p1, p2, p3], &[q1, q2, q3], NON_ISOMETRY_TOLERANCE) {
        return Err(FrameError::NotIsometry);
    }
    let source = frame_from_points(p1, p2, p3)?;
    let target = frame_from_points(q1, q2, q3)?;
    Ok(target * source.inverse())
}

fn distances_match(a: &[Point3<f64>; 3], b: &[Point3<f64>; 3], tolerance: f64) -> bool {
    [(0, 1), (0, 2), (1, 2)].iter()
        .all(|&(i, j)| ((a[i] - a[j]).norm() - (b[i] - b[j]).norm()).abs() < tolerance)
}
