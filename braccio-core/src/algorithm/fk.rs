use crate::{
    geometry::{polar, raw_to_angle, PlanarPoint},
    LinkLengths,
};

/// Absolute orientation of each link in the chain, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChainAngles {
    /// Shoulder link, measured from the positive x-axis.
    pub upper_arm: f32,
    /// Elbow link.
    pub forearm: f32,
    /// Wrist link.
    pub tool: f32,
}

impl ChainAngles {
    /// Accumulate the raw joint values along the chain.
    ///
    /// The shoulder value is absolute. The elbow and wrist values are
    /// deflections relative to the preceding link.
    pub fn from_raw(shoulder: i32, elbow: i32, wrist: i32) -> Self {
        let upper_arm = raw_to_angle(shoulder);
        let forearm = upper_arm + raw_to_angle(elbow);
        let tool = forearm + raw_to_angle(wrist);

        Self {
            upper_arm,
            forearm,
            tool,
        }
    }
}

pub struct ForwardKinematics {
    links: LinkLengths,
}

impl ForwardKinematics {
    pub fn new(links: LinkLengths) -> Self {
        Self { links }
    }

    /// Locate the base pivot, elbow joint, wrist joint and end effector.
    ///
    /// Any input is accepted, including values outside the joint ranges.
    pub fn solve(&self, angles: &ChainAngles) -> [PlanarPoint; 4] {
        let base = PlanarPoint::origin();
        let elbow = base + polar(self.links.shoulder, angles.upper_arm);
        let wrist = elbow + polar(self.links.elbow, angles.forearm);
        let effector = wrist + polar(self.links.wrist, angles.tool);

        [base, elbow, wrist, effector]
    }
}
