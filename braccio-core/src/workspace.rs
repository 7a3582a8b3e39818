use serde::Serialize;

use crate::{consts::REACH_TOLERANCE, LinkLengths};

/// Annulus of distances from a pivot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ReachBand {
    /// Inner radius.
    pub min: f32,
    /// Outer radius.
    pub max: f32,
}

/// Distance after pulling a target into a reach band.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Reach {
    /// Clamped distance.
    pub distance: f32,
    /// Whether the distance was left untouched.
    pub within_limits: bool,
}

impl ReachBand {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Band reachable by the end of a two-link chain.
    ///
    /// The margin keeps the solved triangle from collapsing onto a line at
    /// either boundary.
    pub fn two_link(l1: f32, l2: f32, margin: f32) -> Self {
        Self {
            min: (l1 - l2).abs() + margin,
            max: l1 + l2 - margin,
        }
    }

    /// Whether the distance lies inside the band.
    #[inline]
    pub fn contains(&self, distance: f32) -> bool {
        self.min <= distance && distance <= self.max
    }

    /// Pull the distance into the band.
    ///
    /// The distance counts as within limits when clamping moved it no more than
    /// the reach tolerance.
    pub fn clamp(&self, distance: f32) -> Reach {
        let clamped = self.min.max(self.max.min(distance));

        Reach {
            distance: clamped,
            within_limits: (clamped - distance).abs() <= REACH_TOLERANCE,
        }
    }
}

impl std::fmt::Display for ReachBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.1}mm, {:.1}mm]", self.min, self.max)
    }
}

/// Reachable regions of the arm in the working plane.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Workspace {
    /// Distances the end effector can reach from the base pivot.
    pub effector: ReachBand,
    /// Distances the wrist joint can reach from the base pivot.
    pub wrist: ReachBand,
}

impl Workspace {
    pub fn new(links: &LinkLengths) -> Self {
        let inner = (links.shoulder - links.elbow).abs();

        Self {
            effector: ReachBand::new(
                (inner - links.wrist).max(0.0),
                links.shoulder + links.elbow + links.wrist,
            ),
            wrist: ReachBand::new(inner, links.shoulder + links.elbow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_link_band() {
        let band = ReachBand::two_link(95.0, 110.0, 1.0);

        assert_eq!(band, ReachBand::new(16.0, 204.0));
        assert!(band.contains(100.0));
        assert!(!band.contains(205.0));
    }

    #[test]
    fn test_clamp() {
        let band = ReachBand::new(16.0, 204.0);

        let reach = band.clamp(150.0);
        assert_eq!(reach.distance, 150.0);
        assert!(reach.within_limits);

        let reach = band.clamp(204.0005);
        assert_eq!(reach.distance, 204.0);
        assert!(reach.within_limits);

        let reach = band.clamp(300.0);
        assert_eq!(reach.distance, 204.0);
        assert!(!reach.within_limits);

        let reach = band.clamp(2.0);
        assert_eq!(reach.distance, 16.0);
        assert!(!reach.within_limits);
    }

    #[test]
    fn test_workspace() {
        let workspace = Workspace::new(&LinkLengths::default());

        assert_eq!(workspace.effector, ReachBand::new(0.0, 285.0));
        assert_eq!(workspace.wrist, ReachBand::new(15.0, 205.0));
    }
}
