use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, ErrorKind},
    JointLimits,
};

/// Length of each segment of the planar chain in millimetres.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkLengths {
    /// Base pivot to elbow joint.
    pub shoulder: f32,
    /// Elbow joint to wrist joint.
    pub elbow: f32,
    /// Wrist joint to end effector.
    pub wrist: f32,
}

impl LinkLengths {
    pub fn new(shoulder: f32, elbow: f32, wrist: f32) -> Self {
        Self {
            shoulder,
            elbow,
            wrist,
        }
    }

    /// Find the first link whose length cannot span the chain.
    ///
    /// The shoulder and elbow links form the solved triangle and must be
    /// positive. The wrist link may be zero.
    fn find_invalid(&self) -> Option<&'static str> {
        let positive = |length: f32| length.is_finite() && length > 0.0;

        if !positive(self.shoulder) {
            Some("shoulder")
        } else if !positive(self.elbow) {
            Some("elbow")
        } else if !(self.wrist.is_finite() && self.wrist >= 0.0) {
            Some("wrist")
        } else {
            None
        }
    }
}

impl Default for LinkLengths {
    fn default() -> Self {
        Self {
            shoulder: 95.0,
            elbow: 110.0,
            wrist: 80.0,
        }
    }
}

/// Kinematics configuration.
///
/// Loaded once at startup and immutable afterwards. Sections missing from the
/// configuration file fall back to the Braccio arm.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Segment lengths of the planar chain.
    pub links: LinkLengths,
    /// Joint registry.
    pub joints: JointLimits,
}

impl KinematicsConfig {
    pub fn new(links: LinkLengths, joints: JointLimits) -> Self {
        Self { links, joints }
    }

    /// Read and validate the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        log::debug!("Reading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(ErrorKind::Io(e.kind())).with_path(path))?;

        contents
            .parse::<Self>()
            .map_err(|e| e.with_path(path))
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(link) = self.links.find_invalid() {
            return Err(ConfigError::new(ErrorKind::InvalidLinkLength(link)));
        }
        if let Some(joint) = self.joints.find_invalid() {
            return Err(ConfigError::new(ErrorKind::InvalidLimits(joint)));
        }

        Ok(())
    }
}

impl std::str::FromStr for KinematicsConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self =
            toml::from_str(s).map_err(|e| ConfigError::new(ErrorKind::Parse(e.to_string())))?;

        config.validate()?;

        Ok(config)
    }
}

impl std::fmt::Display for KinematicsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Links: shoulder {:.1}mm, elbow {:.1}mm, wrist {:.1}mm",
            self.links.shoulder, self.links.elbow, self.links.wrist
        )
    }
}
