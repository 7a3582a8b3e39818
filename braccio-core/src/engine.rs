use nalgebra::Vector2;

use crate::{
    algorithm::{
        fk::{ChainAngles, ForwardKinematics},
        ik::InverseKinematics,
    },
    error::{ConfigError, Result, SolveError},
    geometry::PlanarPoint,
    workspace::Workspace,
    Joint, KinematicsConfig, Pose, SolveResult,
};

/// Kinematics engine of the planar arm.
///
/// The engine holds the immutable configuration and nothing else. Every
/// operation is a pure function of its arguments and the configuration, so
/// one engine can be shared between threads without locking.
#[derive(Clone, Debug, Default)]
pub struct KinematicsEngine {
    config: KinematicsConfig,
}

impl KinematicsEngine {
    /// Construct the engine from a configuration.
    pub fn new(config: KinematicsConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        log::debug!("{}", config);

        Ok(Self { config })
    }

    /// Retrieve the engine configuration.
    #[inline]
    pub fn config(&self) -> &KinematicsConfig {
        &self.config
    }

    #[inline]
    fn inverse(&self) -> InverseKinematics<'_> {
        InverseKinematics::new(&self.config.links, &self.config.joints)
    }

    /// Locate the chain points for raw shoulder, elbow and wrist values.
    ///
    /// Returns the base pivot, elbow joint, wrist joint and end effector.
    pub fn forward(&self, shoulder: i32, elbow: i32, wrist: i32) -> [PlanarPoint; 4] {
        ForwardKinematics::new(self.config.links)
            .solve(&ChainAngles::from_raw(shoulder, elbow, wrist))
    }

    /// Locate the chain points for a pose.
    pub fn forward_pose(&self, pose: &Pose) -> Result<[PlanarPoint; 4]> {
        let (shoulder, elbow, wrist) = chain_values(pose)?;

        Ok(self.forward(shoulder, elbow, wrist))
    }

    /// Absolute orientation of the wrist link for a pose, in radians.
    pub fn tool_angle(&self, pose: &Pose) -> Result<f32> {
        let (shoulder, elbow, wrist) = chain_values(pose)?;

        Ok(ChainAngles::from_raw(shoulder, elbow, wrist).tool)
    }

    /// Solve shoulder, elbow and wrist for an effector target and tool angle.
    pub fn solve_inverse(&self, x: f32, z: f32, tool_angle: f32) -> Result<SolveResult> {
        self.inverse()
            .solve_effector(PlanarPoint::new(x, z), tool_angle)
    }

    /// Solve the shoulder for a target dragged around the base pivot.
    pub fn solve_shoulder(&self, x: f32, z: f32) -> Result<SolveResult> {
        self.inverse().solve_shoulder(PlanarPoint::new(x, z))
    }

    /// Solve shoulder and elbow for a target at the wrist joint.
    pub fn solve_elbow(&self, x: f32, z: f32) -> Result<SolveResult> {
        self.inverse().solve_elbow(PlanarPoint::new(x, z))
    }

    /// Solve the wrist rotation pointing the wrist link at a target.
    pub fn solve_wrist_rotation(&self, pose: &Pose, x: f32, z: f32) -> Result<SolveResult> {
        self.inverse()
            .solve_wrist_rotation(pose, PlanarPoint::new(x, z))
    }

    /// Solve the base rotation towards a bearing in the ground plane.
    pub fn solve_base(&self, dx: f32, dy: f32) -> Result<SolveResult> {
        self.inverse().solve_base(Vector2::new(dx, dy))
    }

    /// Furthest distance the end effector can reach.
    pub fn max_reach(&self) -> f32 {
        let links = &self.config.links;

        links.shoulder + links.elbow + links.wrist
    }

    /// Reachable regions in the working plane.
    pub fn workspace(&self) -> Workspace {
        Workspace::new(&self.config.links)
    }
}

fn chain_values(pose: &Pose) -> Result<(i32, i32, i32)> {
    let value = |joint| pose.get(joint).ok_or(SolveError::MissingJoint(joint));

    Ok((
        value(Joint::Shoulder)?,
        value(Joint::Elbow)?,
        value(Joint::WristRotation)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, LinkLengths};

    #[test]
    fn test_invalid_config() {
        let mut config = KinematicsConfig::default();
        config.links = LinkLengths::new(0.0, 110.0, 80.0);

        let error = KinematicsEngine::new(config).unwrap_err();

        assert_eq!(error.kind, ErrorKind::InvalidLinkLength("shoulder"));
    }

    #[test]
    fn test_tool_angle() {
        let engine = KinematicsEngine::default();

        let pose = Pose::from_iter([
            (Joint::Shoulder, 90),
            (Joint::Elbow, 90),
            (Joint::WristRotation, 0),
        ]);

        assert!((engine.tool_angle(&pose).unwrap() + std::f32::consts::FRAC_PI_2).abs() < 0.0001);
        assert_eq!(
            engine.tool_angle(&Pose::new().with(Joint::Shoulder, 90)),
            Err(SolveError::MissingJoint(Joint::Elbow))
        );
    }

    #[test]
    fn test_forward_pose() {
        let engine = KinematicsEngine::default();

        let pose = engine.config().joints.initial_pose();
        let points = engine.forward_pose(&pose).unwrap();

        assert_eq!(points, engine.forward(45, 180, 90));
    }

    #[test]
    fn test_max_reach() {
        assert_eq!(KinematicsEngine::default().max_reach(), 285.0);
        assert_eq!(
            KinematicsEngine::default().config(),
            &KinematicsConfig::default()
        );
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<KinematicsEngine>();
    }
}
