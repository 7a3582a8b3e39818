// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Planar kinematics engine for the Braccio arm.
//!
//! The shoulder, elbow and wrist links form an open chain in the vertical
//! working plane. The [`KinematicsEngine`] locates the chain points for raw
//! joint values and solves raw joint values for points dragged in the plane.
//! Solves report targets outside the reach of the arm through
//! [`SolveResult::within_limits`] and reject solutions outside the mechanical
//! joint ranges with [`SolveError::OutOfJointRange`].

pub mod algorithm;
pub mod geometry;
pub mod workspace;

mod config;
mod engine;
mod error;
mod joint;
mod pose;

pub use self::config::{KinematicsConfig, LinkLengths};
pub use self::engine::KinematicsEngine;
pub use self::error::{ConfigError, ErrorKind, Result, SolveError};
pub use self::geometry::PlanarPoint;
pub use self::joint::{Joint, JointLimits, JointSpec};
pub use self::pose::{Pose, SolveResult};

pub use nalgebra;

/// Kinematics constants.
///
/// Tolerances are tuned for pointer dragging in millimetre space.
pub mod consts {
    /// Raw joint value at zero geometric deflection of the chain joints.
    pub const NEUTRAL_OFFSET_DEG: i32 = 90;

    /// Raw base value pointing along the positive x-axis.
    pub const BASE_NEUTRAL_OFFSET_DEG: i32 = 135;

    /// Margin kept from both boundaries of the two-link reach band.
    pub const REACH_MARGIN: f32 = 1.0;

    /// Largest clamp of the target distance still reported as within limits.
    pub const REACH_TOLERANCE: f32 = 1e-3;

    /// Distance from the shoulder arc still reported as within limits.
    pub const SHOULDER_ARC_TOLERANCE: f32 = 5.0;

    /// Distance below which a target coincides with its pivot.
    pub const DEGENERATE_EPSILON: f32 = 1e-4;

    /// Tool orientation pointing straight down.
    pub const DEFAULT_TOOL_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;
}
