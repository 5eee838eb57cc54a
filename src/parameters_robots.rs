//! Hardcoded DH parameters for a few robots

pub mod dh_kinematics {
    use crate::parameters::dh_kinematics::{DHParameter, Parameters};
    use std::f64::consts::PI;

    #[allow(dead_code)]
    impl Parameters {
        // Provides default values
        pub fn new() -> Self {
            Parameters {
                dh: [DHParameter::new(0.0, 0.0, 0.0, 0.0); 6],
            }
        }

        // Universal Robots arms share the same layout, only the lengths differ.
        // Shoulder link turned by 180 degrees so that the link lengths are positive,
        // wrist 1 turned by 90 degrees.
        fn universal_robot(d1: f64, a2: f64, a3: f64, d4: f64, d5: f64, d6: f64) -> Self {
            Parameters {
                dh: [
                    DHParameter::new(d1, 0.0, 0.0, PI / 2.0),
                    DHParameter::new(0.0, PI, a2, 0.0),
                    DHParameter::new(0.0, 0.0, a3, 0.0),
                    DHParameter::new(d4, PI / 2.0, 0.0, PI / 2.0),
                    DHParameter::new(d5, 0.0, 0.0, -PI / 2.0),
                    DHParameter::new(d6, 0.0, 0.0, 0.0),
                ],
            }
        }

        pub fn ur3() -> Self {
            Self::universal_robot(0.1519, 0.24365, 0.21325, 0.11235, 0.08535, 0.0819)
        }

        pub fn ur5() -> Self {
            Self::universal_robot(0.0892, 0.4251, 0.3922, 0.1091, 0.0947, 0.0823)
        }

        pub fn ur5e() -> Self {
            Self::universal_robot(0.1625, 0.425, 0.3922, 0.1333, 0.0997, 0.0996)
        }

        pub fn ur10() -> Self {
            Self::universal_robot(0.1273, 0.612, 0.5723, 0.163941, 0.1157, 0.0922)
        }

        /// Find the preset by name (case insensitive), as used by the command line tool.
        pub fn by_name(name: &str) -> Option<Self> {
            match name.to_ascii_lowercase().as_str() {
                "ur3" => Some(Self::ur3()),
                "ur5" => Some(Self::ur5()),
                "ur5e" => Some(Self::ur5e()),
                "ur10" => Some(Self::ur10()),
                _ => None,
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Self::new()
        }
    }
}
