//! Denavit-Hartenberg transform of a single joint

extern crate nalgebra as na;

use na::{Isometry3, Matrix3, Matrix4, Rotation3, Translation3, UnitQuaternion};

/// Returns the homogeneous transform of joint frame i+1 relative to joint frame i.
///
/// # Arguments
///
/// * `d` - joint offset along the previous z axis
/// * `theta` - joint angle around the previous z axis, radians
/// * `r` - link length along the new x axis
/// * `alpha` - link twist around the new x axis, radians
pub fn dh_matrix(d: f64, theta: f64, r: f64, alpha: f64) -> Matrix4<f64> {
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();

    Matrix4::new(
        ct, -st * ca, st * sa, r * ct,
        st, ct * ca, -ct * sa, r * st,
        0.0, sa, ca, d,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Same transform as `dh_matrix`, as the rigid motion.
pub fn dh_isometry(d: f64, theta: f64, r: f64, alpha: f64) -> Isometry3<f64> {
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();

    let rotation = Matrix3::new(
        ct, -st * ca, st * sa,
        st, ct * ca, -ct * sa,
        0.0, sa, ca,
    );
    Isometry3::from_parts(
        Translation3::new(r * ct, r * st, d),
        UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation)),
    )
}
