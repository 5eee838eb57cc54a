use std::f64::consts::PI;
use ur_dh_kinematics::kinematic_traits::{Branch, Joints, Kinematics, Pose};
use ur_dh_kinematics::kinematics_impl::DHKinematics;
use ur_dh_kinematics::parameters::dh_kinematics::Parameters;
use ur_dh_kinematics::utils::{dump_joints, dump_pose, dump_solutions};

/// Usage example.
fn main() {
    let robot = DHKinematics::new(Parameters::ur5());
    let joints: Joints = [0.3, -1.2, 1.0, -1.4, 0.5, 0.2]; // Joints are alias of [f64; 6]
    println!("Initial joints: ");
    dump_joints(&joints);

    let pose: Pose = robot.forward(&joints); // Pose is alias of nalgebra::Isometry3<f64>
    dump_pose(&pose);

    println!("Solutions of all branches that can reach this pose:");
    let solutions = robot.inverse_all(&pose); // Solutions is alias of Vec<Joints>
    dump_solutions(&solutions);

    println!("Only the left hand, elbow up, wrist down branch:");
    match robot.inverse(&pose, &Branch::new(false, true, false)) {
        Ok(solution) => dump_joints(&solution),
        Err(e) => println!("No solution: {}", e),
    }

    println!("Upright robot: the wrist direction is not defined by the pose here");
    let upright = robot.forward(&[0.0, -PI / 2.0, 0.0, -PI / 2.0, 0.0, 0.0]);
    for branch in Branch::ALL.iter() {
        match robot.inverse(&upright, branch) {
            Ok(solution) => {
                print!("{}: ", branch);
                dump_joints(&solution);
            }
            Err(e) => println!("{}: {}", branch, e),
        }
    }

    // The table in the format Parameters::from_yaml_file reads
    println!("Parameters:\n{}", Parameters::ur5().to_yaml());
}
