use braccio_core::{ErrorKind, Joint, KinematicsConfig, KinematicsEngine};

const SAMPLE_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../braccio-utils/braccio.toml");

#[test]
fn sample_config_matches_defaults() {
    let config = KinematicsConfig::from_file(SAMPLE_CONFIG).unwrap();

    assert_eq!(config, KinematicsConfig::default());
}

#[test]
fn config_file_drives_engine() {
    let path = std::env::temp_dir().join(format!("braccio-{}.toml", std::process::id()));

    std::fs::write(
        &path,
        "[links]\nshoulder = 100.0\nelbow = 100.0\nwrist = 50.0\n",
    )
    .unwrap();

    let config = KinematicsConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    let engine = KinematicsEngine::new(config.unwrap()).unwrap();

    assert_eq!(engine.max_reach(), 250.0);
    assert_eq!(engine.workspace().wrist.min, 0.0);

    let [_, elbow, wrist, effector] = engine.forward(90, 90, 90);
    assert!((elbow.x - 100.0).abs() < 0.001);
    assert!((wrist.x - 200.0).abs() < 0.001);
    assert!((effector.x - 250.0).abs() < 0.001);
}

#[test]
fn invalid_config_is_rejected() {
    let error = "[joints.base]\nminimum = 0\nmaximum = 270\ninitial = 300\n"
        .parse::<KinematicsConfig>()
        .unwrap_err();

    assert_eq!(error.kind, ErrorKind::InvalidLimits(Joint::Base));
}

#[test]
fn missing_config_reports_path() {
    let error = KinematicsConfig::from_file("does-not-exist.toml").unwrap_err();

    assert_eq!(error.kind, ErrorKind::Io(std::io::ErrorKind::NotFound));
    assert!(error.to_string().starts_with("does-not-exist.toml"));
}
