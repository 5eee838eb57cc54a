//! Inverse kinematics for many target poses at once. Every target is independent so
//! with the `parallel` feature they are solved on the rayon thread pool. The result
//! order always follows the order of the targets.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::kinematic_traits::{Branch, Joints, Kinematics, KinematicsError, Pose, Solutions};

/// Solve each target on the same branch.
#[cfg(feature = "parallel")]
pub fn inverse_batch<K: Kinematics + ?Sized>(
    robot: &K,
    targets: &[Pose],
    branch: &Branch,
) -> Vec<Result<Joints, KinematicsError>> {
    targets.par_iter()
        .map(|target| robot.inverse(target, branch))
        .collect()
}

/// Solve each target on the same branch.
#[cfg(not(feature = "parallel"))]
pub fn inverse_batch<K: Kinematics + ?Sized>(
    robot: &K,
    targets: &[Pose],
    branch: &Branch,
) -> Vec<Result<Joints, KinematicsError>> {
    targets.iter()
        .map(|target| robot.inverse(target, branch))
        .collect()
}

/// All branch solutions of each target.
#[cfg(feature = "parallel")]
pub fn inverse_all_batch<K: Kinematics + ?Sized>(robot: &K, targets: &[Pose]) -> Vec<Solutions> {
    targets.par_iter()
        .map(|target| robot.inverse_all(target))
        .collect()
}

/// All branch solutions of each target.
#[cfg(not(feature = "parallel"))]
pub fn inverse_all_batch<K: Kinematics + ?Sized>(robot: &K, targets: &[Pose]) -> Vec<Solutions> {
    targets.iter()
        .map(|target| robot.inverse_all(target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics_impl::DHKinematics;
    use crate::parameters::dh_kinematics::Parameters;
    use nalgebra::{Translation3, UnitQuaternion};
    use std::sync::Arc;

    #[test]
    fn test_batch_keeps_order() {
        let robot = DHKinematics::new(Parameters::ur5());
        let joints: Vec<Joints> = (0..32)
            .map(|i| {
                let t = i as f64 * 0.01;
                [0.3 + t, -1.2 + t, 1.0 - t, -1.4, 0.5 + t, 0.2]
            })
            .collect();
        let targets: Vec<Pose> = joints.iter().map(|qs| robot.forward(qs)).collect();

        let branch = Branch::new(false, true, false);
        let solved = inverse_batch(&robot, &targets, &branch);
        assert_eq!(solved.len(), targets.len());
        for (result, target) in solved.iter().zip(targets.iter()) {
            assert_eq!(*result, robot.inverse(target, &branch));
        }
    }

    #[test]
    fn test_batch_reports_failures_in_place() {
        let robot: Arc<dyn Kinematics> = Arc::new(DHKinematics::new(Parameters::ur5()));
        let reachable = robot.forward(&[0.1, -0.9, -1.1, 0.3, 1.2, -0.4]);
        let too_far = Pose::from_parts(Translation3::new(3.0, 0.0, 0.0), UnitQuaternion::identity());

        let solved = inverse_batch(robot.as_ref(), &[reachable, too_far, reachable], &Branch::default());
        assert!(solved[0].is_ok());
        assert!(solved[1].is_err());
        assert!(solved[2].is_ok());

        let all = inverse_all_batch(robot.as_ref(), &[too_far, reachable]);
        assert!(all[0].is_empty());
        assert!(!all[1].is_empty());
    }
}
