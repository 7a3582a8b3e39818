// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Green, Purple, Yellow};
use braccio_core::{
    consts::DEFAULT_TOOL_ANGLE, Joint, KinematicsConfig, KinematicsEngine, PlanarPoint, Pose,
    SolveResult,
};
use clap::{Parser, ValueHint};
use log::{debug, info};

fn style_joint(joint: Joint) -> String {
    Purple.paint(format!("[{}]", joint)).to_string()
}

fn style_point(point: &PlanarPoint) -> String {
    format!("({:>8.2}, {:>8.2})", point.x, point.y)
}

fn point_json(point: &PlanarPoint) -> serde_json::Value {
    serde_json::json!([point.x, point.y])
}

fn print_result(result: &SolveResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    for (joint, value) in result.pose.iter() {
        println!("{} {}", style_joint(joint), value);
    }

    if result.within_limits {
        info!("{}", Green.paint("Target within reach"));
    } else {
        info!(
            "{}",
            Yellow
                .bold()
                .paint("Target out of reach, solved for nearest point")
        );
    }

    Ok(())
}

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Braccio arm kinematics tool", long_about = None)]
struct Args {
    /// Arm configuration file.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<std::path::PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,

    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Kinematics commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Locate the chain points for raw joint values.
    Forward {
        /// Shoulder value (m2).
        shoulder: i32,
        /// Elbow value (m3).
        elbow: i32,
        /// Wrist rotation value (m5).
        wrist: i32,
    },
    /// Solve the chain for an end effector target.
    Inverse {
        /// Target along the working plane.
        #[arg(allow_negative_numbers = true)]
        x: f32,
        /// Target height.
        #[arg(allow_negative_numbers = true)]
        z: f32,
        /// Tool orientation in degrees.
        #[arg(long, allow_negative_numbers = true)]
        tool_angle: Option<f32>,
    },
    /// Point the shoulder at a target.
    Shoulder {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },
    /// Solve shoulder and elbow for a wrist joint target.
    Elbow {
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },
    /// Point the wrist link at a target from a shoulder and elbow pose.
    Wrist {
        /// Shoulder value (m2).
        shoulder: i32,
        /// Elbow value (m3).
        elbow: i32,
        #[arg(allow_negative_numbers = true)]
        x: f32,
        #[arg(allow_negative_numbers = true)]
        z: f32,
    },
    /// Turn the base towards a ground plane bearing.
    Base {
        #[arg(allow_negative_numbers = true)]
        dx: f32,
        #[arg(allow_negative_numbers = true)]
        dy: f32,
    },
    /// Show the reachable regions of the arm.
    Workspace,
    /// Show the joint ranges and initial pose.
    Limits,
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_time_level(LevelFilter::Off);
    log_config.set_thread_level(LevelFilter::Off);
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let config = match &args.config {
        Some(path) => KinematicsConfig::from_file(path)?,
        None => {
            debug!("Using default arm configuration");
            KinematicsConfig::default()
        }
    };

    log::trace!("{:#?}", config);

    let engine = KinematicsEngine::new(config)?;

    match args.command {
        Command::Forward {
            shoulder,
            elbow,
            wrist,
        } => {
            let points = engine.forward(shoulder, elbow, wrist);

            if args.json {
                let value = serde_json::json!({
                    "base": point_json(&points[0]),
                    "elbow": point_json(&points[1]),
                    "wrist": point_json(&points[2]),
                    "effector": point_json(&points[3]),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                for (label, point) in ["Base", "Elbow", "Wrist", "Effector"].iter().zip(points) {
                    println!("{:<10} {}", label, style_point(&point));
                }
            }
        }
        Command::Inverse { x, z, tool_angle } => {
            let tool_angle = tool_angle
                .map(f32::to_radians)
                .unwrap_or(DEFAULT_TOOL_ANGLE);

            debug!(
                "Solve effector target ({:.2}, {:.2}) with tool at {:.1}°",
                x,
                z,
                tool_angle.to_degrees()
            );

            print_result(&engine.solve_inverse(x, z, tool_angle)?, args.json)?;
        }
        Command::Shoulder { x, z } => {
            print_result(&engine.solve_shoulder(x, z)?, args.json)?;
        }
        Command::Elbow { x, z } => {
            print_result(&engine.solve_elbow(x, z)?, args.json)?;
        }
        Command::Wrist {
            shoulder,
            elbow,
            x,
            z,
        } => {
            let pose = Pose::new()
                .with(Joint::Shoulder, shoulder)
                .with(Joint::Elbow, elbow);

            print_result(&engine.solve_wrist_rotation(&pose, x, z)?, args.json)?;
        }
        Command::Base { dx, dy } => {
            print_result(&engine.solve_base(dx, dy)?, args.json)?;
        }
        Command::Workspace => {
            let workspace = engine.workspace();

            if args.json {
                let value = serde_json::json!({
                    "effector": workspace.effector,
                    "wrist": workspace.wrist,
                    "max_reach": engine.max_reach(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{:<10} {}", "Effector", workspace.effector);
                println!("{:<10} {}", "Wrist", workspace.wrist);
                println!("{:<10} {:.2}", "Reach", engine.max_reach());
            }
        }
        Command::Limits => {
            let joints = &engine.config().joints;

            if args.json {
                println!("{}", serde_json::to_string_pretty(joints)?);
            } else {
                for joint in Joint::ALL {
                    println!("{} {}", style_joint(joint), joints.spec(joint));
                }

                info!("Initial pose: {}", joints.initial_pose());
            }
        }
    }

    Ok(())
}
