use std::io::Write;
use std::time::Duration;

use arm_demo::DemoConfig;
use arm_motion::demo_collision_object;

fn write_config(lines: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(lines.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = DemoConfig::load(&dir.path().join("nope.yaml")).unwrap();
    assert_eq!(config.group_name, "manipulator");
    assert_eq!(config.base_frame, "base_iiwa");
    assert_eq!(config.tip_link, "tool0");

    let params = config.planning.to_parameters();
    assert_eq!(params.planning_attempts, 1);
    assert_eq!(params.planning_time, Duration::from_secs(5));
    assert_eq!(params.max_velocity_scaling, 0.4);
    assert_eq!(params.max_acceleration_scaling, 0.4);
    assert_eq!(params.planning_pipeline, None);
    assert_eq!(config.collision_objects, vec![demo_collision_object()]);
}

#[test]
fn partial_file_fills_the_rest_with_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tip_link: gripper_tip").unwrap();
    writeln!(file, "planning:").unwrap();
    writeln!(file, "  velocity_scaling: 0.8").unwrap();
    file.flush().unwrap();

    let config = DemoConfig::load(file.path()).unwrap();
    assert_eq!(config.tip_link, "gripper_tip");
    assert_eq!(config.group_name, "manipulator");
    assert_eq!(config.planning.velocity_scaling, 0.8);
    assert_eq!(config.planning.acceleration_scaling, 0.4);
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "planning: [not, a, map]").unwrap();
    file.flush().unwrap();

    assert!(DemoConfig::load(file.path()).is_err());
}

#[test]
fn negative_planning_time_is_an_error_not_a_panic() {
    let file = write_config("planning:\n  time_secs: -1.0\n");
    let err = DemoConfig::load(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("time_secs"));
}

#[test]
fn non_finite_planning_time_is_an_error() {
    let file = write_config("planning:\n  time_secs: .nan\n");
    assert!(DemoConfig::load(file.path()).is_err());
}

#[test]
fn scaling_factors_must_stay_in_range() {
    let zero = write_config("planning:\n  velocity_scaling: 0.0\n");
    assert!(DemoConfig::load(zero.path()).is_err());

    let above = write_config("planning:\n  acceleration_scaling: 1.5\n");
    let err = DemoConfig::load(above.path()).unwrap_err();
    assert!(format!("{err:#}").contains("acceleration_scaling"));
}

#[test]
fn zero_attempts_is_an_error() {
    let file = write_config("planning:\n  attempts: 0\n");
    assert!(DemoConfig::load(file.path()).is_err());
}

#[test]
fn collision_objects_can_be_overridden() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "collision_objects:").unwrap();
    writeln!(file, "- frame_id: world").unwrap();
    writeln!(file, "  id: pillar").unwrap();
    writeln!(file, "  primitives:").unwrap();
    writeln!(file, "  - - dimensions: [0.1, 0.1, 1.0]").unwrap();
    writeln!(file, "    - position: {{ x: 1.0, y: 0.0, z: 0.5 }}").unwrap();
    file.flush().unwrap();

    let config = DemoConfig::load(file.path()).unwrap();
    assert_eq!(config.collision_objects.len(), 1);
    let object = &config.collision_objects[0];
    assert_eq!(object.id, "pillar");
    assert_eq!(object.frame_id, "world");
    assert_eq!(object.primitives[0].0.dimensions, [0.1, 0.1, 1.0]);
    assert_eq!(object.primitives[0].1.position.x, 1.0);
}
