//! Forward and analytic inverse kinematics of UR-style arms from the DH table.
//!
//! The inverse is geometric. The wrist centre is found by stepping back from the tool along
//! its normal. The base joint follows from the tangent of the shoulder offset cylinder. The
//! elbow is the intersection of the two link circles in the shoulder plane. Every joint angle
//! is then the signed angle between the zero-angle direction of its DH row and the
//! direction it must point at.

use nalgebra::{Rotation3, Unit, Vector3};
use tracing::{debug, trace};

use crate::frame::FrameAxes;
use crate::geometry::{circle_circle_intersection, plane_intersection_direction, signed_angle, Circle};
use crate::kinematic_traits::{Branch, Joints, Kinematics, KinematicsError, Pose};
use crate::parameters::dh_kinematics::Parameters;
use crate::utils::normalize_angle;

/// Poses of all six joint frames for the table (joint angles already folded into theta),
/// placed at `base`. The last frame is the tool flange.
pub fn forward_kinematics(base: &Pose, table: &Parameters) -> [Pose; 6] {
    let mut frames = [Pose::identity(); 6];
    let mut chain = Pose::identity();
    for (frame, parameter) in frames.iter_mut().zip(table.dh.iter()) {
        chain *= parameter.transform(0.0);
        *frame = chain;
    }
    frames.map(|frame| base * frame)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DHKinematics {
    parameters: Parameters,
}

impl DHKinematics {
    /// Creates a new `DHKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        DHKinematics { parameters }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

impl Kinematics for DHKinematics {
    fn inverse(&self, target: &Pose, branch: &Branch) -> Result<Joints, KinematicsError> {
        let dh = &self.parameters.dh;
        let target_normal = target.normal();

        // Wrist centre
        let wrist = target.translated_along_normal(-dh[5].d).origin();

        // Base joint: vOT is the tangent point of the shoulder offset circle seen from the wrist
        let v_op = Vector3::new(wrist.x, wrist.y, 0.0);
        let shoulder_offset = dh[3].d;
        let d = v_op.norm();
        if d == 0.0 {
            debug!("Wrist centre {:?} is on the base axis ({})", wrist, branch);
            return Err(KinematicsError::GeometricInfeasibility { ratio: f64::INFINITY });
        }
        let ratio = shoulder_offset / d;
        if ratio.abs() > 1.0 {
            debug!("Wrist centre {:?} is inside the shoulder offset cylinder ({})", wrist, branch);
            return Err(KinematicsError::GeometricInfeasibility { ratio: ratio.abs() });
        }
        let angle = ratio.acos();
        let turn = if branch.right_hand { -angle } else { angle };
        let v_ot = Rotation3::from_axis_angle(&Vector3::z_axis(), turn) * (v_op * ratio);
        let j0 = signed_angle(&Vector3::y(), &-v_ot, &Vector3::z()) - dh[0].theta;

        let frame1 = dh[0].transform(j0);
        let shoulder_normal = frame1.normal();

        // Wrist offset direction: along both the shoulder plane and the tool plane
        let mut wrist_axis = match plane_intersection_direction(&shoulder_normal, &target_normal) {
            Some(direction) => direction.into_inner(),
            None => {
                trace!("Shoulder and tool planes are parallel, wrist direction defaults to Z");
                Vector3::z()
            }
        };
        if (branch.wrist_up && wrist_axis.z < 0.0) || (!branch.wrist_up && wrist_axis.z > 0.0) {
            wrist_axis = -wrist_axis;
        }

        // Wrist offset point, brought into the shoulder plane
        let wrist_offset = wrist + wrist_axis * dh[4].d - shoulder_normal * dh[3].d;

        // Elbow
        let plane = Unit::new_normalize(shoulder_normal);
        let upper_arm = Circle::new(frame1.origin(), dh[1].r.abs(), plane);
        let forearm = Circle::new(wrist_offset, dh[2].r.abs(), plane);
        let [p0, p1] = circle_circle_intersection(&upper_arm, &forearm).map_err(|e| {
            debug!("Elbow not found ({}): {}", branch, e);
            e
        })?;
        // Higher point first, computed order kept on a tie
        let (upper, lower) = if p0.z < p1.z { (p1, p0) } else { (p0, p1) };
        let elbow = if branch.elbow_up { upper } else { lower };

        let to_elbow = (elbow - frame1.origin()).normalize();
        let j1 = signed_angle(&(frame1.x_axis() * dh[1].r.signum()), &to_elbow, &shoulder_normal)
            - dh[1].theta;
        let frame2 = frame1 * dh[1].transform(j1);

        let to_wrist = (wrist_offset - frame2.origin()).normalize();
        let j2 = signed_angle(&(frame2.x_axis() * dh[2].r.signum()), &to_wrist, &frame2.normal())
            - dh[2].theta;
        let frame3 = frame2 * dh[2].transform(j2);

        let j3 = signed_angle(&(frame3.y_axis() * -dh[3].alpha.sin()), &-wrist_axis, &frame3.normal())
            - dh[3].theta;
        let frame4 = frame3 * dh[3].transform(j3);

        let j4 = signed_angle(&(frame4.y_axis() * -dh[4].alpha.sin()), &target_normal, &frame4.normal())
            - dh[4].theta;
        let frame5 = frame4 * dh[4].transform(j4);

        let j5 = signed_angle(&frame5.y_axis(), &target.y_axis(), &frame5.normal()) - dh[5].theta;

        Ok([j0, j1, j2, j3, j4, j5].map(normalize_angle))
    }

    fn forward(&self, qs: &Joints) -> Pose {
        self.forward_with_joint_poses(qs)[5]
    }

    fn forward_with_joint_poses(&self, qs: &Joints) -> [Pose; 6] {
        forward_kinematics(&Pose::identity(), &self.parameters.with_joints(qs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Translation3, UnitQuaternion};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};

    // Compare two poses with the given tolerance.
    fn compare_poses(ta: &Pose, tb: &Pose, tolerance: f64) -> bool {
        let translation_distance = (ta.translation.vector - tb.translation.vector).norm();
        let angular_distance = ta.rotation.angle_to(&tb.rotation);

        if translation_distance.abs() > tolerance {
            println!("Translation Error: {}", translation_distance);
            return false;
        }

        if angular_distance.abs() > tolerance {
            println!("Angular Error: {}", angular_distance);
            return false;
        }
        true
    }

    fn ur5() -> DHKinematics {
        DHKinematics::new(Parameters::ur5())
    }

    const HOME: Joints = [0.0, -FRAC_PI_2, 0.0, -FRAC_PI_2, 0.0, 0.0];

    #[test]
    fn test_forward_home_origins() {
        let frames = ur5().forward_with_joint_poses(&HOME);
        let expected = [
            Point3::new(0.0, 0.0, 0.0892),
            Point3::new(0.0, 0.0, 0.5143),
            Point3::new(0.0, 0.0, 0.9065),
            Point3::new(0.0, -0.1091, 0.9065),
            Point3::new(0.0947, -0.1091, 0.9065),
            Point3::new(0.0947, -0.1914, 0.9065),
        ];
        for (frame, origin) in frames.iter().zip(expected.iter()) {
            assert!((frame.origin() - origin).norm() < 1e-9,
                    "Frame origin {} expected {}", frame.origin(), origin);
        }
    }

    #[test]
    fn test_forward_is_last_frame() {
        let robot = ur5();
        let qs = [0.3, -1.2, 1.0, -1.4, 0.5, 0.2];
        assert_eq!(robot.forward(&qs), robot.forward_with_joint_poses(&qs)[5]);
    }

    #[test]
    fn test_forward_base_applied_to_all_frames() {
        let table = Parameters::ur5().with_joints(&[0.1, -0.9, -1.1, 0.3, 1.2, -0.4]);
        let base = Pose::from_parts(
            Translation3::new(1.0, -2.0, 0.5),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.7),
        );
        let plain = forward_kinematics(&Pose::identity(), &table);
        let moved = forward_kinematics(&base, &table);
        for (p, m) in plain.iter().zip(moved.iter()) {
            assert!(compare_poses(&(base * p), m, 1e-12));
        }
    }

    #[test]
    fn test_inverse_recovers_joints() {
        let robot = ur5();
        for (qs, branch) in [
            ([0.3, -1.2, 1.0, -1.4, 0.5, 0.2], Branch::new(false, true, false)),
            ([0.1, -0.9, -1.1, 0.3, 1.2, -0.4], Branch::new(false, false, false)),
            ([0.0, -FRAC_PI_2, FRAC_PI_2, -FRAC_PI_2, -FRAC_PI_2, 0.0], Branch::new(false, true, false)),
        ] {
            let pose = robot.forward(&qs);
            let solved = robot.inverse(&pose, &branch).expect("Pose is reachable");
            for i in 0..6 {
                assert!((solved[i] - qs[i]).abs() < 1e-6,
                        "Joint {} of {:?}: {:?} for branch {}", i, qs, solved, branch);
            }
        }
    }

    #[test]
    fn test_inverse_stretched_wrist() {
        // Arm straight up: the two link circles only touch
        let robot = ur5();
        let qs = [0.0, -FRAC_PI_2, 0.0, -FRAC_PI_2, FRAC_PI_6, 0.0];
        let pose = robot.forward(&qs);
        for branch in [Branch::new(true, false, true), Branch::new(true, true, true)] {
            let solved = robot.inverse(&pose, &branch).expect("Touching circles must be solved");
            assert!(compare_poses(&robot.forward(&solved), &pose, 1e-6));
            for i in 0..6 {
                assert!((solved[i] - qs[i]).abs() < 1e-5, "{:?} for {}", solved, branch);
            }
        }
    }

    #[test]
    fn test_every_solution_reaches_the_pose() {
        let robot = ur5();
        let pose = robot.forward(&[0.3, -1.2, 1.0, -1.4, 0.5, 0.2]);
        let solutions = robot.inverse_all(&pose);
        assert!(!solutions.is_empty());
        for solution in &solutions {
            assert!(compare_poses(&robot.forward(solution), &pose, 1e-6), "{:?}", solution);
        }
    }

    #[test]
    fn test_home_is_wrist_singular() {
        // Shoulder plane parallel to the tool plane: the wrist direction is not defined
        // by the pose and defaults to Z. Solutions found must still reach the pose.
        let robot = ur5();
        let pose = robot.forward(&HOME);
        let mut found = 0;
        for branch in Branch::ALL.iter() {
            if let Ok(solved) = robot.inverse(&pose, branch) {
                assert!(compare_poses(&robot.forward(&solved), &pose, 1e-6), "{:?} for {}", solved, branch);
                found += 1;
            }
        }
        assert!(found > 0);
    }

    #[test]
    fn test_angles_normalized() {
        let robot = ur5();
        let pose = robot.forward(&[0.1, -0.9, -1.1, 0.3, 1.2, -0.4]);
        for solution in robot.inverse_all(&pose) {
            for q in solution {
                assert!(q > -std::f64::consts::PI && q <= std::f64::consts::PI);
            }
        }
    }

    #[test]
    fn test_unreachable_near_base_axis() {
        // Wrist centre 5 cm from the base axis, shoulder offset is 10.9 cm
        let pose = Pose::from_parts(
            Translation3::new(0.05, 0.0, 0.5),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI),
        );
        for branch in Branch::ALL.iter() {
            assert!(matches!(ur5().inverse(&pose, branch),
                Err(KinematicsError::GeometricInfeasibility { .. })));
        }
        assert!(ur5().inverse_all(&pose).is_empty());
    }

    #[test]
    fn test_unreachable_on_base_axis() {
        let pose = Pose::from_parts(
            Translation3::new(0.0, 0.0, 0.5),
            UnitQuaternion::identity(),
        );
        assert_eq!(ur5().inverse(&pose, &Branch::default()),
                   Err(KinematicsError::GeometricInfeasibility { ratio: f64::INFINITY }));
    }

    #[test]
    fn test_unreachable_too_far() {
        let pose = Pose::from_parts(
            Translation3::new(2.0, 0.5, 0.3),
            UnitQuaternion::identity(),
        );
        assert!(matches!(ur5().inverse(&pose, &Branch::default()),
            Err(KinematicsError::NoIntersection { .. })));
    }

    #[test]
    fn test_zero_links_rejected() {
        // The default table has no arm links: no joint angles can be found, and none of
        // the branches may return NaN instead of an error
        let robot = DHKinematics::new(Parameters::default());
        let pose = Pose::from_parts(
            Translation3::new(0.3, 0.2, 0.1),
            UnitQuaternion::identity(),
        );
        for branch in Branch::ALL.iter() {
            assert!(matches!(robot.inverse(&pose, branch),
                Err(KinematicsError::NoIntersection { .. })), "Branch {}", branch);
        }
        assert!(robot.inverse_all(&pose).is_empty());
    }
}
