//! Supports extracting DH parameters from YAML file (optional)

use std::path::Path;
use regex::Regex;
use tracing::debug;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::dh_kinematics::{DHParameter, Parameters};

impl Parameters {
    /// Read the DH table from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # UR5
    /// name: ur5
    /// dh_parameters:
    ///   # [d, theta, r, alpha]
    ///   - [0.0892, 0, 0, deg(90)]
    ///   - [0, deg(180), 0.4251, 0]
    ///   - [0, 0, 0.3922, 0]
    ///   - [0.1091, deg(90), 0, deg(90)]
    ///   - [0.0947, 0, 0, deg(-90)]
    ///   - [0.0823, 0, 0, 0]
    /// ```
    /// Angles are in radians unless written as deg(angle). The name is optional.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as `from_yaml_file`, parsing the YAML text directly.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::ParseError("Empty YAML document".to_string()))?;

        if let Some(name) = doc["name"].as_str() {
            debug!("Reading DH parameters of {}", name);
        }

        let rows = doc["dh_parameters"].as_vec()
            .ok_or_else(|| ParameterError::MissingField("dh_parameters".to_string()))?;
        if rows.len() != 6 {
            return Err(ParameterError::InvalidLength { expected: 6, found: rows.len() });
        }

        let angle_pattern = Regex::new(r"^deg\(\s*([-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?)\s*\)$")
            .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;

        let mut dh = [DHParameter::new(0.0, 0.0, 0.0, 0.0); 6];
        for (parameter, row) in dh.iter_mut().zip(rows.iter()) {
            let values = row.as_vec()
                .ok_or_else(|| ParameterError::ParseError(format!("Row {:?} is not a list", row)))?;
            if values.len() != 4 {
                return Err(ParameterError::InvalidLength { expected: 4, found: values.len() });
            }
            *parameter = DHParameter::new(
                parse_length(&values[0])?,
                parse_angle(&values[1], &angle_pattern)?,
                parse_length(&values[2])?,
                parse_angle(&values[3], &angle_pattern)?,
            );
        }
        Ok(Parameters { dh })
    }
}

fn parse_length(value: &Yaml) -> Result<f64, ParameterError> {
    match value {
        Yaml::Real(_) => value.as_f64()
            .ok_or_else(|| ParameterError::ParseError(format!("Not a number: {:?}", value))),
        Yaml::Integer(i) => Ok(*i as f64),
        _ => Err(ParameterError::ParseError(format!("Not a number: {:?}", value))),
    }
}

fn parse_angle(value: &Yaml, re: &Regex) -> Result<f64, ParameterError> {
    match value {
        Yaml::String(text) => {
            let caps = re.captures(text.trim())
                .ok_or_else(|| ParameterError::WrongAngle(text.clone()))?;
            let degrees_str = caps.get(1)
                .ok_or_else(|| ParameterError::WrongAngle(format!("Bad representation: {}", text)))?
                .as_str();
            let degrees: f64 = degrees_str.parse()
                .map_err(|_| ParameterError::WrongAngle(text.clone()))?;
            Ok(degrees.to_radians())
        }
        // Plain number, radians
        _ => parse_length(value),
    }
}
