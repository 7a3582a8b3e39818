use std::f32::consts::PI;

use nalgebra::Vector2;

use crate::{
    consts::{
        BASE_NEUTRAL_OFFSET_DEG, DEGENERATE_EPSILON, NEUTRAL_OFFSET_DEG, REACH_MARGIN,
        SHOULDER_ARC_TOLERANCE,
    },
    error::{Result, SolveError},
    geometry::{angle_to_raw, bearing, law_of_cosines, offset_to_raw, polar, PlanarPoint},
    workspace::ReachBand,
    Joint, JointLimits, LinkLengths, Pose, SolveResult,
};

use super::fk::{ChainAngles, ForwardKinematics};

/// Shoulder and elbow solved for a point at the end of the elbow link.
struct TwoLinkSolution {
    /// Absolute shoulder angle.
    shoulder: f32,
    /// Absolute forearm angle.
    forearm: f32,
    /// Whether the target was left untouched by the reach clamp.
    within_limits: bool,
}

impl TwoLinkSolution {
    #[inline]
    fn elbow_deflection(&self) -> f32 {
        self.forearm - self.shoulder
    }
}

pub struct InverseKinematics<'a> {
    links: &'a LinkLengths,
    joints: &'a JointLimits,
}

impl<'a> InverseKinematics<'a> {
    pub fn new(links: &'a LinkLengths, joints: &'a JointLimits) -> Self {
        Self { links, joints }
    }

    /// Solve the shoulder and elbow for the end of the elbow link.
    ///
    /// The target is pulled into the reachable band along its own direction.
    /// The elbow deflection is always taken positive, so the same target
    /// always yields the same branch. Only a target exactly on the pivot is
    /// degenerate.
    fn solve_two_link(&self, target: Vector2<f32>) -> Result<TwoLinkSolution> {
        let l1 = self.links.shoulder;
        let l2 = self.links.elbow;

        let distance = target.x.hypot(target.y);
        if distance == 0.0 || !distance.is_finite() {
            return Err(SolveError::DegenerateTarget);
        }

        let reach = ReachBand::two_link(l1, l2, REACH_MARGIN).clamp(distance);
        log::trace!(
            "IK Target distance: {:.3} clamped to {:.3}",
            distance,
            reach.distance
        );

        let target = target * (reach.distance / distance);

        let elbow_angle = PI - law_of_cosines(l1, l2, reach.distance);
        let elbow_offset = (l2 * elbow_angle.sin()).atan2(l1 + l2 * elbow_angle.cos());
        let shoulder = bearing(&target) - elbow_offset;

        let forearm = bearing(&(target - polar(l1, shoulder)));

        log::trace!(
            "IK Shoulder: {:5.2}rad {:5.2}° Forearm: {:5.2}rad {:5.2}°",
            shoulder,
            shoulder.to_degrees(),
            forearm,
            forearm.to_degrees()
        );

        Ok(TwoLinkSolution {
            shoulder,
            forearm,
            within_limits: reach.within_limits,
        })
    }

    /// Solve the chain for an end effector target and tool orientation.
    pub fn solve_effector(&self, target: PlanarPoint, tool_angle: f32) -> Result<SolveResult> {
        if !tool_angle.is_finite() {
            return Err(SolveError::DegenerateTarget);
        }

        let wrist_target = target.coords - polar(self.links.wrist, tool_angle);
        log::debug!(
            "IK Wrist joint target: ({:.2}, {:.2})",
            wrist_target.x,
            wrist_target.y
        );

        let solution = self.solve_two_link(wrist_target)?;

        let shoulder = angle_to_raw(solution.shoulder);
        let elbow = angle_to_raw(solution.elbow_deflection());
        let wrist = angle_to_raw(tool_angle - solution.forearm);

        let pose = Pose::new()
            .with(Joint::Shoulder, self.joints.check(Joint::Shoulder, shoulder)?)
            .with(Joint::Elbow, self.joints.check(Joint::Elbow, elbow)?)
            .with(
                Joint::WristRotation,
                self.joints.check(Joint::WristRotation, wrist)?,
            );

        Ok(SolveResult::new(pose, solution.within_limits))
    }

    /// Solve the shoulder and elbow for a target at the wrist joint.
    pub fn solve_elbow(&self, target: PlanarPoint) -> Result<SolveResult> {
        let solution = self.solve_two_link(target.coords)?;

        let shoulder = angle_to_raw(solution.shoulder);
        let elbow = angle_to_raw(solution.elbow_deflection());

        let pose = Pose::new()
            .with(Joint::Shoulder, self.joints.check(Joint::Shoulder, shoulder)?)
            .with(Joint::Elbow, self.joints.check(Joint::Elbow, elbow)?);

        Ok(SolveResult::new(pose, solution.within_limits))
    }

    /// Point the shoulder link at the target.
    ///
    /// Only the direction matters. The target counts as within limits when it
    /// lies roughly on the arc of the shoulder link.
    pub fn solve_shoulder(&self, target: PlanarPoint) -> Result<SolveResult> {
        if is_near_origin(&target.coords) {
            return Err(SolveError::DegenerateTarget);
        }

        let distance = target.x.hypot(target.y);
        let within_limits = (distance - self.links.shoulder).abs() <= SHOULDER_ARC_TOLERANCE;

        let shoulder = angle_to_raw(bearing(&target.coords));
        log::debug!("IK Shoulder bearing: {}", shoulder);

        let pose = Pose::new().with(
            Joint::Shoulder,
            self.joints.check(Joint::Shoulder, shoulder)?,
        );

        Ok(SolveResult::new(pose, within_limits))
    }

    /// Point the wrist link at the target from the current pose.
    ///
    /// The shoulder and elbow values of the pose fix the wrist joint and the
    /// forearm orientation. Only the wrist rotation is solved.
    pub fn solve_wrist_rotation(&self, pose: &Pose, target: PlanarPoint) -> Result<SolveResult> {
        let shoulder = pose
            .get(Joint::Shoulder)
            .ok_or(SolveError::MissingJoint(Joint::Shoulder))?;
        let elbow = pose
            .get(Joint::Elbow)
            .ok_or(SolveError::MissingJoint(Joint::Elbow))?;

        // The wrist value does not move the wrist joint.
        let angles = ChainAngles::from_raw(shoulder, elbow, NEUTRAL_OFFSET_DEG);
        let [_, _, wrist_joint, _] = ForwardKinematics::new(*self.links).solve(&angles);

        let direction = target - wrist_joint;
        let distance = direction.x.hypot(direction.y);
        if distance < DEGENERATE_EPSILON || !distance.is_finite() {
            return Err(SolveError::DegenerateTarget);
        }

        let wrist = angle_to_raw(bearing(&direction) - angles.forearm);
        log::debug!("IK Wrist rotation: {}", wrist);

        let pose = Pose::new().with(
            Joint::WristRotation,
            self.joints.check(Joint::WristRotation, wrist)?,
        );

        Ok(SolveResult::new(pose, true))
    }

    /// Turn the base towards a bearing in the ground plane.
    ///
    /// Unlike the chain joints, the base value is clamped to its range. The
    /// result is within limits when no clamping took place.
    pub fn solve_base(&self, direction: Vector2<f32>) -> Result<SolveResult> {
        if is_near_origin(&direction) {
            return Err(SolveError::DegenerateTarget);
        }

        let base = offset_to_raw(bearing(&direction), BASE_NEUTRAL_OFFSET_DEG);
        let clamped = self.joints.spec(Joint::Base).clamp(base);

        Ok(SolveResult::new(
            Pose::new().with(Joint::Base, clamped),
            clamped == base,
        ))
    }
}

/// Whether both coordinates are indistinguishable from the origin.
///
/// Non-finite points have no defined bearing and are treated the same.
#[inline]
fn is_near_origin(vector: &Vector2<f32>) -> bool {
    !(vector.x.is_finite() && vector.y.is_finite())
        || (vector.x.abs() <= DEGENERATE_EPSILON && vector.y.abs() <= DEGENERATE_EPSILON)
}
