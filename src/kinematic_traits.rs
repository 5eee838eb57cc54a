//! Core types and the Kinematics trait

extern crate nalgebra as na;

use std::error::Error;
use std::fmt;
use na::Isometry3;

/// Pose is used a pose of the robot tcp or of any joint frame. The origin of the frame is the
/// translation part, the x, y and z (normal) axes are the columns of the rotation.
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion, Vector3};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(0.3, 0.2, 0.4);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
/// let transform = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Joint angles of the robot, radians, base to tool.
pub type Joints = [f64; 6];

/// Joint angles of all branches that have a solution.
pub type Solutions = Vec<Joints>;

/// Selects one of up to 8 analytic solutions for the reachable target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Branch {
    /// Shoulder side
    pub right_hand: bool,
    /// Elbow configuration: the elbow point with the larger Z is "up"
    pub elbow_up: bool,
    /// Wrist configuration: the wrist offset points to positive Z when "up"
    pub wrist_up: bool,
}

impl Branch {
    /// All eight branch combinations. Solving them in this order is deterministic.
    pub const ALL: [Branch; 8] = [
        Branch::new(false, false, false),
        Branch::new(false, false, true),
        Branch::new(false, true, false),
        Branch::new(false, true, true),
        Branch::new(true, false, false),
        Branch::new(true, false, true),
        Branch::new(true, true, false),
        Branch::new(true, true, true),
    ];

    pub const fn new(right_hand: bool, elbow_up: bool, wrist_up: bool) -> Self {
        Branch { right_hand, elbow_up, wrist_up }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f, "{} hand, elbow {}, wrist {}",
            if self.right_hand { "right" } else { "left" },
            if self.elbow_up { "up" } else { "down" },
            if self.wrist_up { "up" } else { "down" }
        )
    }
}

/// Reasons why the target pose cannot be reached on the requested branch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// The wrist centre lies inside the cylinder around the base axis with the
    /// shoulder offset as radius. `ratio` is shoulder offset / distance to the axis, above 1.
    GeometricInfeasibility { ratio: f64 },

    /// The shoulder and the wrist are too far apart or too close for the two arm links.
    /// `distance` is the distance between the centres of the two link circles.
    NoIntersection { distance: f64 },
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KinematicsError::GeometricInfeasibility { ratio } =>
                write!(f, "Target is too close to the robot base axis (offset/distance ratio {:.5})", ratio),
            KinematicsError::NoIntersection { distance } =>
                write!(f, "Arm links cannot reach the wrist (shoulder to wrist distance {:.5})", distance),
        }
    }
}

impl Error for KinematicsError {}

pub trait Kinematics: Send + Sync {
    /// Find the joint angles for the given branch that place the tool at the pose.
    fn inverse(&self, pose: &Pose, branch: &Branch) -> Result<Joints, KinematicsError>;

    /// Find the solutions of all branches that can reach the pose, in `Branch::ALL` order.
    /// Branches without solution are skipped, so the result may be empty.
    fn inverse_all(&self, pose: &Pose) -> Solutions {
        Branch::ALL
            .iter()
            .filter_map(|branch| self.inverse(pose, branch).ok())
            .collect()
    }

    /// Find the pose of the tool for the given joint angles.
    fn forward(&self, qs: &Joints) -> Pose;

    /// Find the poses of all six joint frames; the last one is the tool pose.
    fn forward_with_joint_poses(&self, qs: &Joints) -> [Pose; 6];
}
