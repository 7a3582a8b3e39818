use std::{error, fmt, path::PathBuf};

use crate::Joint;

pub type Result<T> = std::result::Result<T, SolveError>;

/// Reason a target cannot be solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The target coincides with the pivot the angle is measured from.
    ///
    /// The angle is undefined. The input should be ignored.
    DegenerateTarget,

    /// The solution requires a joint value outside its mechanical range.
    OutOfJointRange {
        joint: Joint,
        value: i32,
        minimum: i32,
        maximum: i32,
    },

    /// The pose lacks a joint the solve depends on.
    MissingJoint(Joint),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::DegenerateTarget => write!(f, "target coincides with pivot"),
            SolveError::OutOfJointRange {
                joint,
                value,
                minimum,
                maximum,
            } => write!(
                f,
                "{}: value {} out of joint range [{}, {}]",
                joint, value, minimum, maximum
            ),
            SolveError::MissingJoint(joint) => write!(f, "{}: joint missing from pose", joint),
        }
    }
}

impl error::Error for SolveError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An I/O error occured while reading the configuration.
    ///
    /// The type of I/O error is determined by the inner `io::ErrorKind`.
    Io(std::io::ErrorKind),

    /// The configuration is not valid TOML or does not match the schema.
    Parse(String),

    /// The joint range is unordered or does not contain its initial value.
    InvalidLimits(Joint),

    /// The link length is negative, zero where a triangle is required, or not finite.
    InvalidLinkLength(&'static str),
}

#[derive(Debug)]
pub struct ConfigError {
    /// Configuration file, if loaded from disk.
    pub path: Option<PathBuf>,
    /// Error kind.
    pub kind: ErrorKind,
}

impl ConfigError {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { path: None, kind }
    }

    pub(crate) fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }

        match &self.kind {
            ErrorKind::Io(e) => write!(f, "io error: {:?}", e),
            ErrorKind::Parse(e) => write!(f, "parse error: {}", e),
            ErrorKind::InvalidLimits(joint) => {
                write!(f, "{}: joint range does not contain initial value", joint)
            }
            ErrorKind::InvalidLinkLength(link) => write!(f, "{}: invalid link length", link),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_error_display() {
        let error = SolveError::OutOfJointRange {
            joint: Joint::Shoulder,
            value: 166,
            minimum: 15,
            maximum: 165,
        };

        assert_eq!(
            error.to_string(),
            "m2: value 166 out of joint range [15, 165]"
        );
        assert_eq!(
            SolveError::MissingJoint(Joint::Elbow).to_string(),
            "m3: joint missing from pose"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::new(ErrorKind::InvalidLinkLength("elbow")).with_path("braccio.toml");

        assert_eq!(error.to_string(), "braccio.toml: elbow: invalid link length");
    }
}
