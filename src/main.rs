use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use ur_dh_kinematics::frame::{pose_from_vector, pose_vector};
use ur_dh_kinematics::kinematic_traits::{Branch, Kinematics};
use ur_dh_kinematics::kinematics_impl::DHKinematics;
use ur_dh_kinematics::parameters::dh_kinematics::Parameters;
use ur_dh_kinematics::utils::{joints, to_degrees};

/// Forward and inverse kinematics of UR-style robots from the command line.
#[derive(Parser)]
#[clap(version = "0.3.1")]
struct Opts {
    /// Built in robot: ur3, ur5, ur5e or ur10
    #[clap(long, default_value = "ur5")]
    robot: String,

    /// YAML file with the DH table, overrides --robot
    #[clap(long)]
    parameters: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the DH table of the robot as YAML
    Table,

    /// Pose [x, y, z, rx, ry, rz] of the tool for the joint angles in degrees
    Fk {
        #[clap(num_args = 6, allow_negative_numbers = true, required = true)]
        joints: Vec<f64>,
    },

    /// Joint angles in degrees for the pose given as x y z (meters) rx ry rz (rotation vector)
    Ik {
        #[clap(num_args = 6, allow_negative_numbers = true, required = true)]
        pose: Vec<f64>,

        /// Only solve this branch, as three flags: right_hand elbow_up wrist_up, like "1 0 1"
        #[clap(long, num_args = 3)]
        branch: Option<Vec<u8>>,
    },
}

fn six(values: &[f64]) -> Result<[f64; 6]> {
    values.try_into()
        .map_err(|_| anyhow!("Exactly 6 values are expected, got {}", values.len()))
}

fn load_parameters(opts: &Opts) -> Result<Parameters> {
    match &opts.parameters {
        Some(path) => {
            info!("Reading DH parameters from {}", path);
            Parameters::from_yaml_file(path)
                .with_context(|| format!("Failed to read the DH table from {}", path))
        }
        None => Parameters::by_name(&opts.robot)
            .ok_or_else(|| anyhow!("Unknown robot {}, use ur3, ur5, ur5e or ur10", opts.robot)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let parameters = load_parameters(&opts)?;
    let robot = DHKinematics::new(parameters);

    match &opts.command {
        Command::Table => print!("{}", parameters.to_yaml()),
        Command::Fk { joints: degrees } => {
            let qs = joints(six(degrees)?);
            let [x, y, z, rx, ry, rz] = pose_vector(&robot.forward(&qs));
            println!("{:.6} {:.6} {:.6} {:.6} {:.6} {:.6}", x, y, z, rx, ry, rz);
        }
        Command::Ik { pose, branch } => {
            let target = pose_from_vector(&six(pose)?);
            match branch {
                Some(flags) => {
                    let branch = Branch::new(flags[0] != 0, flags[1] != 0, flags[2] != 0);
                    let solution = robot.inverse(&target, &branch)
                        .map_err(|e| anyhow!("No solution for {}: {}", branch, e))?;
                    print_degrees(&to_degrees(&solution));
                }
                None => {
                    let mut found = 0;
                    for branch in Branch::ALL.iter() {
                        match robot.inverse(&target, branch) {
                            Ok(solution) => {
                                print!("{:<32}", branch.to_string());
                                print_degrees(&to_degrees(&solution));
                                found += 1;
                            }
                            Err(e) => debug!("{}: {}", branch, e),
                        }
                    }
                    if found == 0 {
                        return Err(anyhow!("The pose cannot be reached"));
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_degrees(degrees: &[f64; 6]) {
    let row: Vec<String> = degrees.iter().map(|d| format!("{:8.3}", d)).collect();
    println!("[{}]", row.join(" "));
}
