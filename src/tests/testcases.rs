#[cfg(test)]
mod tests {
    use crate::kinematic_traits::Kinematics;
    use crate::kinematics_impl::DHKinematics;
    use crate::tests::test_utils;

    const CASES: &str = "src/tests/data/cases.yaml";

    #[test]
    fn test_load_yaml() {
        let result = test_utils::load_yaml(CASES);

        if let Err(e) = &result {
            println!("Error loading or parsing YAML file: {}", e);
        }

        assert!(result.is_ok(), "Failed to load or parse the YAML file");
        let cases = result.expect("Expected a valid Cases struct after parsing");
        assert!(!cases.is_empty(), "No cases were loaded from the YAML file");
    }

    #[test]
    fn test_forward() {
        let cases = test_utils::load_yaml(CASES).expect("Failed to load or parse the YAML file");
        println!("Forward: {} test cases", cases.len());

        for case in cases.iter() {
            let kinematics = DHKinematics::new(test_utils::parameters_for(&case.parameters));
            let fk = kinematics.forward(&case.joints_in_radians());

            if !test_utils::are_isometries_approx_equal(&fk, &case.pose.to_isometry(), 0.00001) {
                println!("Seems not equal");
                println!("joints: {:?} ", &case.joints);
                println!("case: {:?} ", &case.pose);
                println!("FK  : {:?} ", test_utils::Pose::from_isometry(&fk));
                panic!("Forward kinematics of case {} seems not equal", case.id);
            }
        }
    }

    #[test]
    fn test_forward_with_joint_poses() {
        let cases = test_utils::load_yaml(CASES).expect("Failed to load or parse the YAML file");

        for case in cases.iter() {
            let kinematics = DHKinematics::new(test_utils::parameters_for(&case.parameters));
            let fk = kinematics.forward_with_joint_poses(&case.joints_in_radians())[5];
            assert!(test_utils::are_isometries_approx_equal(&fk, &case.pose.to_isometry(), 0.00001),
                    "Case {}: the last joint pose is not the tool pose", case.id);
        }
    }

    #[test]
    fn test_inverse() {
        let cases = test_utils::load_yaml(CASES).expect("Failed to load or parse the YAML file");
        println!("Inverse: {} test cases", cases.len());

        for case in cases.iter() {
            let kinematics = DHKinematics::new(test_utils::parameters_for(&case.parameters));
            let pose = case.pose.to_isometry();
            let solutions = kinematics.inverse_all(&pose);

            // All returned solutions must reach the pose
            for solution in &solutions {
                let reached = kinematics.forward(solution);
                assert!(test_utils::are_isometries_approx_equal(&reached, &pose, 0.00001),
                        "Case {}: solution {:?} misses the pose", case.id, solution);
            }

            // And the joints the pose was made from must be among them
            if test_utils::found_joints_approx_equal(&solutions, &case.joints_in_radians(),
                                                     0.001_f64.to_radians()).is_none() {
                println!("**** No valid solution for case {} on {} ****", case.id, case.parameters);
                println!("Expected joints (degrees): {:?}", case.joints);
                crate::utils::dump_solutions(&solutions);
                panic!("Inverse kinematics does not produce the expected joints");
            }
        }
    }
}
