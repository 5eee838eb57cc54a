use std::sync::Arc;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use ur_dh_kinematics::kinematic_traits::{Joints, Kinematics, Pose};
use ur_dh_kinematics::kinematics_impl::DHKinematics;
use ur_dh_kinematics::parameters::dh_kinematics::Parameters;
use ur_dh_kinematics::utils::{dump_joints, dump_solutions};

fn main() {
    let joints: Joints = [0.3, -1.2, 1.0, -1.4, 0.5, 0.2]; // Joints are alias of [f64; 6]
    dump_joints(&joints);

    // Robot with the tool, hanging from the ceiling:
    let robot_alone = DHKinematics::new(Parameters::ur10());

    // 2 meter high ceiling, robot upside down
    let base_transform = Isometry3::from_parts(
        Translation3::new(0.0, 0.0, 2.0),
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI),
    );

    let robot_with_base = ur_dh_kinematics::tool::Base {
        robot: Arc::new(robot_alone),
        base: base_transform,
    };

    // Suction cup 12 cm past the flange
    let tool_translation = Isometry3::from_parts(
        Translation3::new(0.0, 0.0, 0.12),
        UnitQuaternion::identity(),
    );

    let robot_on_base_with_tool = ur_dh_kinematics::tool::Tool {
        robot: Arc::new(robot_with_base),
        tool: tool_translation,
    };

    let tcp_pose: Pose = robot_on_base_with_tool.forward(&joints);
    println!("The suction cup is at: {:?}", tcp_pose.translation);

    // The complete robot implements Kinematics so the usual inverse kinematics methods are available.
    let inverse = robot_on_base_with_tool.inverse_all(&tcp_pose);
    dump_solutions(&inverse);
}
