use serde::{Deserialize, Serialize};

use crate::{error::SolveError, Pose};

/// Controlled joint of the arm.
///
/// Each joint is addressed by its servo channel name on the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Joint {
    /// Base rotation.
    #[serde(rename = "m1")]
    Base,
    /// Shoulder pitch, first link of the planar chain.
    #[serde(rename = "m2")]
    Shoulder,
    /// Elbow deflection, second link of the planar chain.
    #[serde(rename = "m3")]
    Elbow,
    /// Wrist flex.
    #[serde(rename = "m4")]
    WristFlex,
    /// Wrist rotation, the third link of the planar chain.
    #[serde(rename = "m5")]
    WristRotation,
}

impl Joint {
    /// All joints in channel order.
    pub const ALL: [Joint; 5] = [
        Joint::Base,
        Joint::Shoulder,
        Joint::Elbow,
        Joint::WristFlex,
        Joint::WristRotation,
    ];

    /// Servo channel name.
    pub fn channel(&self) -> &'static str {
        match self {
            Joint::Base => "m1",
            Joint::Shoulder => "m2",
            Joint::Elbow => "m3",
            Joint::WristFlex => "m4",
            Joint::WristRotation => "m5",
        }
    }
}

impl TryFrom<&str> for Joint {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().trim() {
            "m1" | "base" => Ok(Self::Base),
            "m2" | "shoulder" => Ok(Self::Shoulder),
            "m3" | "elbow" => Ok(Self::Elbow),
            "m4" | "wrist_flex" => Ok(Self::WristFlex),
            "m5" | "wrist_rotation" => Ok(Self::WristRotation),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.channel())
    }
}

/// Mechanical range of a single joint in raw degrees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointSpec {
    /// Human readable joint name.
    #[serde(default)]
    pub label: String,
    /// Lowest allowed value, inclusive.
    pub minimum: i32,
    /// Highest allowed value, inclusive.
    pub maximum: i32,
    /// Value the joint assumes on reset.
    pub initial: i32,
}

impl JointSpec {
    pub fn new(label: impl ToString, minimum: i32, maximum: i32, initial: i32) -> Self {
        Self {
            label: label.to_string(),
            minimum,
            maximum,
            initial,
        }
    }

    /// Whether the value lies within the joint range.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        (self.minimum..=self.maximum).contains(&value)
    }

    /// Limit the value to the joint range.
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        self.minimum.max(self.maximum.min(value))
    }

    /// Whether the range is ordered and contains the initial value.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.minimum <= self.initial && self.initial <= self.maximum
    }
}

impl std::fmt::Display for JointSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: [{}, {}] initial {}",
            self.label, self.minimum, self.maximum, self.initial
        )
    }
}

/// Joint registry of the arm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointLimits {
    pub base: JointSpec,
    pub shoulder: JointSpec,
    pub elbow: JointSpec,
    pub wrist_flex: JointSpec,
    pub wrist_rotation: JointSpec,
}

impl JointLimits {
    /// Retrieve the range of a joint.
    pub fn spec(&self, joint: Joint) -> &JointSpec {
        match joint {
            Joint::Base => &self.base,
            Joint::Shoulder => &self.shoulder,
            Joint::Elbow => &self.elbow,
            Joint::WristFlex => &self.wrist_flex,
            Joint::WristRotation => &self.wrist_rotation,
        }
    }

    /// Accept the value if it lies within the range of the joint.
    ///
    /// Out of range values are rejected, never clamped.
    pub fn check(&self, joint: Joint, value: i32) -> Result<i32, SolveError> {
        let spec = self.spec(joint);

        if spec.contains(value) {
            Ok(value)
        } else {
            Err(SolveError::OutOfJointRange {
                joint,
                value,
                minimum: spec.minimum,
                maximum: spec.maximum,
            })
        }
    }

    /// Pose with every joint at its initial value.
    pub fn initial_pose(&self) -> Pose {
        Joint::ALL
            .iter()
            .fold(Pose::new(), |pose, joint| {
                pose.with(*joint, self.spec(*joint).initial)
            })
    }

    /// Find the first joint whose range is inconsistent.
    pub fn find_invalid(&self) -> Option<Joint> {
        Joint::ALL
            .iter()
            .copied()
            .find(|joint| !self.spec(*joint).is_valid())
    }
}

impl Default for JointLimits {
    fn default() -> Self {
        Self {
            base: JointSpec::new("Base", 0, 270, 90),
            shoulder: JointSpec::new("Shoulder", 15, 165, 45),
            elbow: JointSpec::new("Elbow", 0, 180, 180),
            wrist_flex: JointSpec::new("Wrist Flex", 0, 180, 170),
            wrist_rotation: JointSpec::new("Wrist Rotation", 0, 180, 90),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_channel() {
        assert_eq!(Joint::Shoulder.to_string(), "m2");
        assert_eq!(Joint::try_from("M5"), Ok(Joint::WristRotation));
        assert_eq!(Joint::try_from("elbow"), Ok(Joint::Elbow));
        assert_eq!(Joint::try_from("m6"), Err(()));
    }

    #[test]
    fn test_joint_check() {
        let limits = JointLimits::default();

        assert_eq!(limits.check(Joint::Shoulder, 15), Ok(15));
        assert_eq!(limits.check(Joint::Shoulder, 165), Ok(165));
        assert_eq!(
            limits.check(Joint::Shoulder, 166),
            Err(SolveError::OutOfJointRange {
                joint: Joint::Shoulder,
                value: 166,
                minimum: 15,
                maximum: 165,
            })
        );
    }

    #[test]
    fn test_joint_clamp() {
        let spec = JointSpec::new("Base", 0, 270, 90);

        assert_eq!(spec.clamp(-10), 0);
        assert_eq!(spec.clamp(315), 270);
        assert_eq!(spec.clamp(100), 100);
    }

    #[test]
    fn test_initial_pose() {
        let pose = JointLimits::default().initial_pose();

        assert_eq!(pose.len(), 5);
        assert_eq!(pose.get(Joint::Base), Some(90));
        assert_eq!(pose.get(Joint::Shoulder), Some(45));
        assert_eq!(pose.get(Joint::Elbow), Some(180));
        assert_eq!(pose.get(Joint::WristFlex), Some(170));
        assert_eq!(pose.get(Joint::WristRotation), Some(90));
    }

    #[test]
    fn test_find_invalid() {
        let mut limits = JointLimits::default();
        assert_eq!(limits.find_invalid(), None);

        limits.elbow.initial = 181;
        assert_eq!(limits.find_invalid(), Some(Joint::Elbow));
    }
}
