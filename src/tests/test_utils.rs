use std::path::Path;

use anyhow::{anyhow, Context, Result};
use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion};
use yaml_rust2::{Yaml, YamlLoader};

use crate::kinematic_traits::{Joints, Solutions};
use crate::parameters::dh_kinematics::Parameters;
use crate::utils::joints_approx_equal;

// ---- Domain types ----

#[derive(Debug, Clone, Copy)]
pub(crate) struct Pose {
    /// Translation in meters: [x, y, z]
    pub translation: [f64; 3],
    /// Quaternion in [x, y, z, w] ordering
    pub quaternion: [f64; 4],
}

#[derive(Debug, Clone)]
pub struct Case {
    pub id: i64,
    pub(crate) parameters: String,
    pub(crate) joints: [f64; 6], // degrees
    pub(crate) pose: Pose,
}

impl Case {
    /// Returns joints converted from degrees to radians.
    #[inline]
    pub fn joints_in_radians(&self) -> Joints {
        std::array::from_fn(|i| self.joints[i].to_radians())
    }
}

// ---- Pose conversions ----

impl Pose {
    pub fn to_isometry(&self) -> Isometry3<f64> {
        let translation = Translation3::new(self.translation[0], self.translation[1], self.translation[2]);

        // Adjusting quaternion creation to match [x, y, z, w] ordering
        let quaternion = UnitQuaternion::from_quaternion(Quaternion::new(
            self.quaternion[3], // w
            self.quaternion[0], // x
            self.quaternion[1], // y
            self.quaternion[2], // z
        ));

        Isometry3::from_parts(translation, quaternion)
    }

    pub fn from_isometry(isometry: &Isometry3<f64>) -> Self {
        let translation = isometry.translation.vector;
        let quaternion = isometry.rotation.quaternion();

        Pose {
            translation: [translation.x, translation.y, translation.z],
            quaternion: [quaternion.i, quaternion.j, quaternion.k, quaternion.w], // [x, y, z, w] ordering
        }
    }
}

// ---- YAML I/O ----

fn numbers<const N: usize>(yaml: &Yaml, field: &str) -> Result<[f64; N]> {
    let values = yaml[field].as_vec()
        .ok_or_else(|| anyhow!("Field {} is missing or not a list", field))?;
    if values.len() != N {
        return Err(anyhow!("Field {} must have {} values, found {}", field, N, values.len()));
    }
    let mut out = [0.0; N];
    for (o, v) in out.iter_mut().zip(values.iter()) {
        *o = match v {
            Yaml::Integer(i) => *i as f64,
            _ => v.as_f64().ok_or_else(|| anyhow!("Not a number in {}: {:?}", field, v))?,
        };
    }
    Ok(out)
}

/// Load test cases from YAML.
pub(crate) fn load_yaml(file_path: impl AsRef<Path>) -> Result<Vec<Case>> {
    let p = file_path.as_ref();
    let contents = std::fs::read_to_string(p)
        .with_context(|| format!("Failed to read YAML file: {}", p.display()))?;

    let docs = YamlLoader::load_from_str(&contents)
        .context("Failed to parse YAML")?;
    let cases = docs.first()
        .and_then(|doc| doc["cases"].as_vec())
        .ok_or_else(|| anyhow!("No cases in {}", p.display()))?;

    let mut result = Vec::with_capacity(cases.len());
    for c in cases {
        result.push(Case {
            id: c["id"].as_i64().ok_or_else(|| anyhow!("Case without id"))?,
            parameters: c["parameters"].as_str()
                .ok_or_else(|| anyhow!("Case without parameters"))?
                .to_string(),
            joints: numbers(c, "joints")?,
            pose: Pose {
                translation: numbers(&c["pose"], "translation")?,
                quaternion: numbers(&c["pose"], "quaternion")?,
            },
        });
    }
    Ok(result)
}

/// Robot parameters by the name used in the test data
pub(crate) fn parameters_for(name: &str) -> Parameters {
    Parameters::by_name(name)
        .unwrap_or_else(|| panic!("Parameters for the robot [{}] are unknown", name))
}

// ---- Isometry comparison ----

/// Compare two isometries with separate tolerances.
/// - `trans_tol_m`: max allowed Euclidean distance in meters
/// - `rot_tol_rad`: max allowed rotation angle difference in radians
pub fn are_isometries_close(a: &Isometry3<f64>, b: &Isometry3<f64>, trans_tol_m: f64, rot_tol_rad: f64) -> bool {
    let tdiff = (a.translation.vector - b.translation.vector).norm();
    if tdiff > trans_tol_m {
        return false;
    }
    // Relative rotation a⁻¹ ∘ b ∈ SO(3)
    let rdiff = a.rotation.inverse() * b.rotation;
    let mut angle = rdiff.angle(); // in [0, π]
    // Be tolerant to tiny numerical drift
    if angle.is_nan() {
        angle = 0.0;
    }
    angle <= rot_tol_rad
}

/// Same tolerance for meters and radians.
#[inline]
pub fn are_isometries_approx_equal(a: &Isometry3<f64>, b: &Isometry3<f64>, tolerance: f64) -> bool {
    are_isometries_close(a, b, tolerance, tolerance)
}

// ---- Joint solution comparison ----

/// Check if `expected` exists within `solutions` within `tolerance` (radians),
/// accounting for 2π wrap. Returns the index of the matching solution.
pub fn found_joints_approx_equal(solutions: &Solutions, expected: &Joints, tolerance: f64) -> Option<usize> {
    solutions.iter().position(|s| joints_approx_equal(s, expected, tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_found_joints_wraps() {
        let solutions = vec![[0.0; 6], [PI - 1e-9, 0.1, 0.0, 0.0, 0.0, 0.0]];
        let expected = [-PI + 1e-9, 0.1, 0.0, 0.0, 0.0, 2.0 * PI];
        assert_eq!(found_joints_approx_equal(&solutions, &expected, 1e-6), Some(1));
        assert_eq!(found_joints_approx_equal(&solutions, &[0.5; 6], 1e-6), None);
    }

    #[test]
    fn test_pose_conversion() {
        let pose = Pose { translation: [0.1, 0.2, 0.3], quaternion: [0.0, 0.0, 0.0, 1.0] };
        let iso = pose.to_isometry();
        let back = Pose::from_isometry(&iso);
        assert_eq!(back.translation, pose.translation);
        assert!((back.quaternion[3] - 1.0).abs() < 1e-12);
    }
}
