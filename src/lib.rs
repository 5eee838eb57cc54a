//! Rust implementation of analytic inverse and forward kinematics for six-axis robots of the
//! Universal Robots family (UR3, UR5, UR10 and alike), described by the Denavit-Hartenberg table.
//!
//! The robot has a shoulder offset, two parallel arm links and a wrist with two offsets, so
//! the wrist is not spherical. The inverse kinematics is geometric: the wrist centre comes
//! from the tool pose, the base joint from the tangent to the shoulder offset cylinder, the
//! elbow from the intersection of two circles in the shoulder plane. The remaining joints
//! are signed angles between known directions.
//!
//! # Features
//!
//! - Up to 8 solutions for a pose. Each one is selected by the `Branch`
//!   (shoulder left/right, elbow up/down, wrist up/down) and can be asked for separately.
//! - Unreachable targets are reported as `KinematicsError` saying why the pose cannot be reached.
//! - Joint angles are returned normalized to (-π, π].
//! - The robot can be equipped with the tool and placed on the base, planning for the desired
//!   location and orientation of the tool center point (TCP) rather than the flange.
//! - Frames can be built from points, axes, matrices or the `[x, y, z, rx, ry, rz]` vector
//!   used by the UR controller.
//! - DH tables for UR3, UR5, UR5e and UR10 are built in, others can be read from YAML.
//! - Many targets can be solved in parallel (feature `parallel`).
//!
//! # Parameters
//!
//! Each joint is described by the classic DH parameters `d`, `theta`, `r` (link length `a`)
//! and `alpha`. The joint angle is added to `theta`. Both the table with negative link
//! lengths and zero offsets, and the table with positive link lengths where the offsets
//! are in `theta`, are supported.
//!
//! ## Examples
//!
//! The following examples demonstrate various functionalities provided by this crate:
//!
//! - **basic.rs**: Forward kinematics and all inverse kinematics solutions of a pose.
//! - **tool_and_base.rs**: Configuring robots with a tool attachment and positioning on a specified base.
//! - **frame.rs**: Building frames from points and the controller pose vector.

pub mod kinematic_traits;
pub mod geometry;
pub mod axis_angle;
pub mod dh_transform;

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod utils;
pub mod kinematics_impl;

pub mod tool;

pub mod frame;

pub mod batch;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
