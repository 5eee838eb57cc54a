use nalgebra::Point3;
use ur_dh_kinematics::frame::{frame_from_points, pose_vector, transform_between};
use ur_dh_kinematics::kinematic_traits::Kinematics;
use ur_dh_kinematics::kinematics_impl::DHKinematics;
use ur_dh_kinematics::parameters::dh_kinematics::Parameters;
use ur_dh_kinematics::utils::{dump_joints, dump_pose, dump_solutions};

/// Using frames, a foundational concept in robotic programming for managing coordinates.
fn main() {
    let robot = DHKinematics::new(Parameters::ur5());

    // Pallet corner, a point along its long edge and a point along the short edge
    let pallet = frame_from_points(
        Point3::new(0.4, -0.2, 0.1),
        Point3::new(0.4, 0.2, 0.1),
        Point3::new(0.2, -0.2, 0.1),
    ).expect("Points are not on the same line");
    println!("Pallet frame [x, y, z, rx, ry, rz]: {:?}", pose_vector(&pallet));

    let joints: [f64; 6] = [0.3, -1.2, 1.0, -1.4, 0.5, 0.2];
    println!("Picking position on the old pallet:");
    dump_joints(&joints);

    // The pallet has been moved 5 cm along X and turned by 3 degrees
    let moved = transform_between(
        Point3::new(0.4, -0.2, 0.1), Point3::new(0.4, 0.2, 0.1), Point3::new(0.2, -0.2, 0.1),
        Point3::new(0.45, -0.2, 0.1), Point3::new(0.4291, 0.1995, 0.1), Point3::new(0.2503, -0.2105, 0.1),
    );
    match moved {
        Ok(transform) => {
            let pick = transform * robot.forward(&joints);
            println!("Picking pose on the moved pallet:");
            dump_pose(&pick);
            println!("Possible joint values:");
            dump_solutions(&robot.inverse_all(&pick));
        }
        Err(e) => println!("Cannot follow the pallet: {}", e),
    }
}
