//! Config Command Tests
//!
//! Verifies path resolution, override merging and `config init`.

use assert_cmd::Command;
use eyegrid_testing::TestWorld;
use predicates::prelude::*;

#[allow(deprecated)]
fn eyegrid(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("eyegrid").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_config_path_prints_explicit_path() {
    let world = TestWorld::new();
    let expected = world.config_path().display().to_string();

    eyegrid(&world)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_config_show_applies_overrides() {
    let world = TestWorld::new().with_config("[playback]\ndelay_ms = 250\n");

    eyegrid(&world)
        .args(["--rows", "3", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rows = 3"))
        .stdout(predicate::str::contains("cols = 7"))
        .stdout(predicate::str::contains("delay_ms = 250"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let world = TestWorld::new();

    eyegrid(&world)
        .args(["--atlas", "atlas.png", "config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote"));

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("atlas.png"));

    eyegrid(&world)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    eyegrid(&world)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_malformed_config_is_reported() {
    let world = TestWorld::new().with_config("[grid\nrows =");

    eyegrid(&world)
        .args(["labels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_invalid_delimiter_rejected() {
    let world = TestWorld::new();

    eyegrid(&world)
        .args(["--delimiter", "é", "labels"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("delimiter"));
}
