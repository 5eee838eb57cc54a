//! Geometric primitives used by the inverse kinematics: signed angle between vectors,
//! intersection of two coplanar circles and the direction of the intersection line of
//! two planes. Everything else (dot and cross products, normalization, transforms)
//! comes directly from nalgebra.

extern crate nalgebra as na;

use na::{Point3, Unit, Vector3};
use crate::kinematic_traits::KinematicsError;

/// Cross products shorter than this are treated as parallel planes.
pub const PARALLEL_TOLERANCE: f64 = 1e-5;

/// Negative h² down to this value is numerical noise of touching circles
/// (fully stretched or fully folded arm) and is treated as tangency.
pub const TANGENT_TOLERANCE: f64 = 1e-9;

/// Returns the angle in (-π, π] that rotates `v1` onto `v2`. The angle is positive
/// if the rotation is counterclockwise when looking against `normal`.
/// Both vectors must be non-zero.
///
/// ```
/// use nalgebra::Vector3;
/// use ur_dh_kinematics::geometry::signed_angle;
/// let angle = signed_angle(&Vector3::x(), &Vector3::y(), &Vector3::z());
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn signed_angle(v1: &Vector3<f64>, v2: &Vector3<f64>, normal: &Vector3<f64>) -> f64 {
    let cross = v1.cross(v2);
    let theta = f64::atan2(cross.norm(), v1.dot(v2));
    if cross.dot(normal) < 0.0 {
        -theta
    } else {
        theta
    }
}

/// Circle in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point3<f64>,
    pub radius: f64,
    /// Normal of the plane the circle lies in
    pub normal: Unit<Vector3<f64>>,
}

impl Circle {
    pub fn new(center: Point3<f64>, radius: f64, normal: Unit<Vector3<f64>>) -> Self {
        Circle { center, radius, normal }
    }
}

/// Intersection points of two circles lying in the same plane. The normal of the first
/// circle is used for both. The first point is on the side of `normal × (c2 - c1)`,
/// the second on the opposite side; for touching circles both points are the same.
///
/// Returns `KinematicsError::NoIntersection` if the circles are too far apart, one is
/// inside the other without touching, they are concentric or either radius is zero.
pub fn circle_circle_intersection(c1: &Circle, c2: &Circle) -> Result<[Point3<f64>; 2], KinematicsError> {
    let c1c2 = c2.center - c1.center;
    let d = c1c2.norm();
    // A zero radius leaves no direction to the intersection point
    if d < f64::EPSILON || c1.radius.abs() < f64::EPSILON || c2.radius.abs() < f64::EPSILON {
        return Err(KinematicsError::NoIntersection { distance: d });
    }

    let (r1, r2) = (c1.radius, c2.radius);
    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let mut h2 = r1 * r1 - a * a;
    if h2 < 0.0 {
        if h2 < -TANGENT_TOLERANCE {
            return Err(KinematicsError::NoIntersection { distance: d });
        }
        h2 = 0.0;
    }
    let h = h2.sqrt();

    let u = c1c2 / d;
    let foot = c1.center + u * a;
    let across = c1.normal.cross(&u).normalize() * h;

    Ok([foot + across, foot - across])
}

/// Direction of the line where two planes, given by their normals, intersect.
/// Returns None if the planes are parallel (within `PARALLEL_TOLERANCE`).
pub fn plane_intersection_direction(n1: &Vector3<f64>, n2: &Vector3<f64>) -> Option<Unit<Vector3<f64>>> {
    let direction = n1.cross(n2);
    if direction.norm() < PARALLEL_TOLERANCE {
        None
    } else {
        Some(Unit::new_normalize(direction))
    }
}
