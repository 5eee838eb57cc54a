//! Provides tool and base for the robot.
//! Both Tool and Base take arbitrary implementation of Kinematics and are such
//! implementations themselves. Hence, they can be cascaded, like base, having the robot,
//! that robot having a tool:
//! // Robot with the tool, standing on a base:
//! ```
//! use std::sync::Arc;
//! use nalgebra::{Isometry3, Translation3, UnitQuaternion};
//! use ur_dh_kinematics::kinematic_traits::{Joints, Kinematics, Pose};
//! use ur_dh_kinematics::kinematics_impl::DHKinematics;
//! use ur_dh_kinematics::parameters::dh_kinematics::Parameters;
//! let robot_alone = DHKinematics::new(Parameters::ur5());
//!
//! // Half meter high pedestal
//! let pedestal = 0.5;
//! let base_translation = Isometry3::from_parts(
//!   Translation3::new(0.0, 0.0, pedestal).into(),
//!   UnitQuaternion::identity(),
//! );
//!
//! let robot_with_base = ur_dh_kinematics::tool::Base {
//!   robot: Arc::new(robot_alone),
//!   base: base_translation,
//! };
//!
//! // Gripper fingers 15 cm past the flange
//! let gripper = 0.15;
//! let tool_translation = Isometry3::from_parts(
//!   Translation3::new(0.0, 0.0, gripper).into(),
//!   UnitQuaternion::identity(),
//! );
//!
//! // Create the Tool instance with the transformation
//! let robot_complete = ur_dh_kinematics::tool::Tool {
//!   robot: Arc::new(robot_with_base),
//!   tool: tool_translation,
//! };
//!
//! let joints: Joints = [0.3, -1.2, 1.0, -1.4, 0.5, 0.2]; // Joints are alias of [f64; 6]
//! let tcp_pose: Pose = robot_complete.forward(&joints);
//! println!("The gripper is at: {:?}", tcp_pose);
//! ```

extern crate nalgebra as na;

use std::sync::Arc;
use na::Isometry3;
use crate::kinematic_traits::{Branch, Joints, Kinematics, KinematicsError, Pose};

/// Defines the fixed tool that can be attached to the flange (joint 6) of robot.
/// The tool moves with the robot, providing additional translation and, if needed,
/// rotation. The tool itself fully implements the Kinematics,
/// providing both inverse and forward kinematics for the robot with a tool (with
/// "pose" being assumed as the position and rotation of the tool center point).
#[derive(Clone)]
pub struct Tool {
    pub robot: Arc<dyn Kinematics>,  // The robot

    /// Transformation from the robot's flange to the tool's TCP.
    pub tool: Isometry3<f64>,
}

/// Defines the fixed base that can hold the robot.
/// The base moves the robot to its installed location, providing also rotation if
/// required (UR arms are often mounted on a wall or upside down). Base itself fully
/// implements the Kinematics, providing both inverse and forward kinematics for the
/// robot on a base.
#[derive(Clone)]
pub struct Base {
    pub robot: Arc<dyn Kinematics>,  // The robot

    /// Transformation from the world origin to the robots base.
    pub base: Isometry3<f64>,
}

impl Kinematics for Tool {
    fn inverse(&self, tcp: &Pose, branch: &Branch) -> Result<Joints, KinematicsError> {
        self.robot.inverse(&(tcp * self.tool.inverse()), branch)
    }

    fn forward(&self, qs: &Joints) -> Pose {
        self.robot.forward(qs) * self.tool
    }

    fn forward_with_joint_poses(&self, qs: &Joints) -> [Pose; 6] {
        let mut poses = self.robot.forward_with_joint_poses(qs);

        // The tool only moves the last pose
        poses[5] *= self.tool;
        poses
    }
}

impl Kinematics for Base {
    fn inverse(&self, tcp: &Pose, branch: &Branch) -> Result<Joints, KinematicsError> {
        self.robot.inverse(&(self.base.inverse() * tcp), branch)
    }

    fn forward(&self, joints: &Joints) -> Pose {
        self.base * self.robot.forward(joints)
    }

    fn forward_with_joint_poses(&self, joints: &Joints) -> [Pose; 6] {
        self.robot.forward_with_joint_poses(joints).map(|pose| self.base * pose)
    }
}
