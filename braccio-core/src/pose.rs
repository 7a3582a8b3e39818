use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Joint;

/// Raw joint values of the arm.
///
/// A pose may cover any subset of the joints. Solvers return partial poses
/// holding only the joints they affect; the caller merges them onto the pose
/// it keeps. Every operation returns a new pose.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose(BTreeMap<Joint, i32>);

impl Pose {
    /// Construct an empty pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the value of a joint, if set.
    #[inline]
    pub fn get(&self, joint: Joint) -> Option<i32> {
        self.0.get(&joint).copied()
    }

    /// Return a copy of this pose with the joint set to the value.
    pub fn with(&self, joint: Joint, value: i32) -> Self {
        let mut values = self.0.clone();
        values.insert(joint, value);
        Self(values)
    }

    /// Return a copy of this pose overlaid with the values of `other`.
    pub fn merge(&self, other: &Pose) -> Self {
        let mut values = self.0.clone();
        values.extend(other.iter());
        Self(values)
    }

    /// Iterate over the joints in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, i32)> + '_ {
        self.0.iter().map(|(joint, value)| (*joint, *value))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Joint, i32)> for Pose {
    fn from_iter<T: IntoIterator<Item = (Joint, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self
            .iter()
            .map(|(joint, value)| format!("{}={}", joint, value))
            .collect::<Vec<_>>();

        write!(f, "{}", values.join(" "))
    }
}

/// Outcome of a successful solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolveResult {
    /// Joints affected by the solve.
    pub pose: Pose,
    /// Whether the target was solved without pulling it into reach.
    ///
    /// When false, the pose is valid but was solved for the nearest reachable
    /// approximation of the target.
    pub within_limits: bool,
}

impl SolveResult {
    pub fn new(pose: Pose, within_limits: bool) -> Self {
        Self {
            pose,
            within_limits,
        }
    }
}

impl std::fmt::Display for SolveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.within_limits {
            write!(f, "{}", self.pose)
        } else {
            write!(f, "{} (out of reach)", self.pose)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_with() {
        let pose = Pose::new().with(Joint::Shoulder, 90);
        let next = pose.with(Joint::Shoulder, 100);

        assert_eq!(pose.get(Joint::Shoulder), Some(90));
        assert_eq!(next.get(Joint::Shoulder), Some(100));
        assert_eq!(next.get(Joint::Elbow), None);
    }

    #[test]
    fn test_pose_merge() {
        let current = Pose::from_iter([(Joint::Shoulder, 45), (Joint::Elbow, 180)]);
        let solved = Pose::from_iter([(Joint::Elbow, 120), (Joint::WristRotation, 30)]);

        let merged = current.merge(&solved);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get(Joint::Shoulder), Some(45));
        assert_eq!(merged.get(Joint::Elbow), Some(120));
        assert_eq!(merged.get(Joint::WristRotation), Some(30));
        assert_eq!(current.get(Joint::Elbow), Some(180));
    }

    #[test]
    fn test_pose_display() {
        let pose = Pose::from_iter([(Joint::WristRotation, 30), (Joint::Shoulder, 45)]);

        assert_eq!(pose.to_string(), "m2=45 m5=30");
        assert_eq!(
            SolveResult::new(pose, false).to_string(),
            "m2=45 m5=30 (out of reach)"
        );
    }
}
