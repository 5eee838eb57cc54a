//! Defines the DH parameter data structure

pub mod dh_kinematics {
    use crate::dh_transform::{dh_isometry, dh_matrix};
    use crate::kinematic_traits::{Joints, Pose};
    use crate::utils::deg;
    use nalgebra::Matrix4;

    /// Denavit-Hartenberg parameters of one joint. Lengths in meters, angles in radians.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DHParameter {
        /// Offset along the previous z axis to the common normal.
        pub d: f64,

        /// Angle about the previous z axis. For a robot description, the angle at
        /// joint position zero (joint offset).
        pub theta: f64,

        /// Length of the common normal (link length). May be negative.
        pub r: f64,

        /// Angle about the common normal from the old z axis to the new one (link twist).
        pub alpha: f64,
    }

    impl DHParameter {
        pub const fn new(d: f64, theta: f64, r: f64, alpha: f64) -> Self {
            DHParameter { d, theta, r, alpha }
        }

        /// Homogeneous transform of this joint, rotated by `joint` on top of `theta`.
        pub fn matrix(&self, joint: f64) -> Matrix4<f64> {
            dh_matrix(self.d, self.theta + joint, self.r, self.alpha)
        }

        /// Same as `matrix`, as the rigid motion.
        pub fn transform(&self, joint: f64) -> Pose {
            dh_isometry(self.d, self.theta + joint, self.r, self.alpha)
        }
    }

    /// DH table of a 6 joint robot, base to tool.
    /// See [parameters_robots.rs](parameters_robots.rs) for examples of concrete robot models.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        pub dh: [DHParameter; 6],
    }

    impl Parameters {
        pub fn from_table(table: [[f64; 4]; 6]) -> Self {
            Parameters {
                dh: table.map(|[d, theta, r, alpha]| DHParameter::new(d, theta, r, alpha)),
            }
        }

        /// The table with joint angles added to the theta values. This is the table
        /// the forward kinematics of the robot in the given position is computed from.
        pub fn with_joints(&self, joints: &Joints) -> Self {
            let mut dh = self.dh;
            for (p, q) in dh.iter_mut().zip(joints.iter()) {
                p.theta += q;
            }
            Parameters { dh }
        }

        /// Joint offsets (theta values) of all joints
        pub fn offsets(&self) -> Joints {
            self.dh.map(|p| p.theta)
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            let rows: Vec<String> = self.dh.iter()
                .map(|p| format!("  - [{}, {}, {}, {}]", p.d, deg(&p.theta), p.r, deg(&p.alpha)))
                .collect();
            format!("dh_parameters:\n{}\n", rows.join("\n"))
        }
    }
}
