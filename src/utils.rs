//! Helper functions

use std::f64::consts::PI;
use crate::kinematic_traits::{Joints, Pose, Solutions};

/// Normalizes the angle into (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % (2.0 * PI);
    if a <= -PI {
        a += 2.0 * PI;
    } else if a > PI {
        a -= 2.0 * PI;
    }
    a
}

/// Smallest difference between two angles, taking the 2π wrap into account.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}

/// True if both joint sets describe the same robot position within `tolerance`
/// (radians), comparing angles modulo 2π.
pub fn joints_approx_equal(a: &Joints, b: &Joints, tolerance: f64) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| angle_difference(*x, *y) < tolerance)
}

/// Print joint values for all solutions, converting radianst to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for solution in solutions {
        dump_joints(solution);
    }
}

/// Print joint values, converting radianst to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint in joints {
        row_str.push_str(&format!("{:5.2} ", joint.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print the pose as the translation and the rotation vector, the way the
/// controller shows it.
#[allow(dead_code)]
pub fn dump_pose(pose: &Pose) {
    let [x, y, z, rx, ry, rz] = crate::frame::pose_vector(pose);
    println!(
        "Translation: [{:.4}, {:.4}, {:.4}], rotation vector: [{:.4}, {:.4}, {:.4}]",
        x, y, z, rx, ry, rz
    );
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 6]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Same as `as_radians`, for fractional degrees.
pub fn joints(degrees: [f64; 6]) -> Joints {
    degrees.map(f64::to_radians)
}

/// Joint values in degrees.
pub fn to_degrees(joints: &Joints) -> [f64; 6] {
    joints.map(f64::to_degrees)
}

/// formatting for YAML output: deg() for whole degrees that read back exactly,
/// radians otherwise
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    let degrees = x.to_degrees().round();
    if degrees.to_radians() == *x {
        format!("deg({})", degrees)
    } else {
        format!("{}", x)
    }
}
