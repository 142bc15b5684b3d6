use assert_cmd::Command;
use buildpanel_core::PanelConfig;
use buildpanel_core::config::CONFIG_FILE_NAME;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn buildpanel(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("buildpanel").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Project whose build tool is a shell script printing `output`
#[cfg(unix)]
fn project_with_build(output: &str, exit_code: i32) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("Game.sln"), "").unwrap();
    fs::write(root.join("Game.csproj"), "<Project />").unwrap();
    fs::write(root.join("Player.cs"), "public class Player {}").unwrap();

    let mut config = PanelConfig::new("Game.sln", "Game.csproj");
    config.build.command = "sh".to_string();
    config.build.args = vec![
        "-c".to_string(),
        format!("printf '%s\\n' \"{output}\"; echo \"built $0\"; exit {exit_code}"),
        "{configuration}".to_string(),
    ];
    config.reload.assemblies_reload_needed = false;
    config.save_to_file(&root.join(CONFIG_FILE_NAME)).unwrap();

    temp_dir
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Game.sln"), "").unwrap();
    fs::write(temp_dir.path().join("Game.csproj"), "").unwrap();

    buildpanel(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let config =
        PanelConfig::load_from_file(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config.solution, Path::new("Game.sln"));
    assert_eq!(config.project, Path::new("Game.csproj"));
}

#[test]
fn test_init_keeps_existing_config_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "{\"solution\": \"Old.sln\", \"project\": \"Old.csproj\"}").unwrap();

    buildpanel(temp_dir.path())
        .args(["init", "--cwd"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(fs::read_to_string(&config_path).unwrap().contains("Old.sln"));

    buildpanel(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(!fs::read_to_string(&config_path).unwrap().contains("Old.sln"));
}

#[test]
fn test_commands_require_config() {
    let temp_dir = TempDir::new().unwrap();

    buildpanel(temp_dir.path())
        .arg("sessions")
        .assert()
        .failure()
        .stderr(predicate::str::contains("buildpanel init"));
}

#[test]
fn test_build_without_solution_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    PanelConfig::new("Missing.sln", "Missing.csproj")
        .save_to_file(&temp_dir.path().join(CONFIG_FILE_NAME))
        .unwrap();

    buildpanel(temp_dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to build"));

    buildpanel(temp_dir.path())
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No builds recorded yet"));
}

#[cfg(unix)]
#[test]
fn test_successful_build_is_recorded() {
    let project = project_with_build("Player.cs(1,1): warning CS0168: unused", 0);
    let root = project.path();

    buildpanel(root)
        .args(["build", "-c", "Release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game [Release]"))
        .stdout(predicate::str::contains("Build succeeded with 1 warning(s)"));

    // Scripts metadata is generated and copied for the player
    let metadata = root.join(".buildpanel/metadata");
    assert!(metadata.join("scripts_metadata.editor").exists());
    assert!(metadata.join("scripts_metadata.editor_player").exists());

    buildpanel(root)
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game [Release]"))
        .stdout(predicate::str::contains("Status: Succeeded"));

    buildpanel(root)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("built Release"));
}

#[cfg(unix)]
#[test]
fn test_failed_build_exits_nonzero_and_filters_issues() {
    let project = project_with_build("Player.cs(2,3): error CS0103: missing", 1);
    let root = project.path();

    buildpanel(root)
        .arg("build")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Build failed with 1 error(s)"));

    buildpanel(root)
        .args(["sessions", "--show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("error CS0103: missing"));

    buildpanel(root)
        .args(["sessions", "--show", "0", "--hide-errors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors: hidden"))
        .stdout(predicate::str::contains("(no issues to show)"));

    // The hidden errors stay hidden for that session
    buildpanel(root)
        .args(["sessions", "--show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors: hidden"));

    buildpanel(root)
        .args(["sessions", "--show", "0", "--show-errors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors: shown"))
        .stdout(predicate::str::contains("error CS0103: missing"));

    buildpanel(root)
        .args(["sessions", "--show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors: shown"));

    buildpanel(root)
        .args(["sessions", "--hide-errors"])
        .assert()
        .failure();

    buildpanel(root)
        .args(["sessions", "--clear"])
        .assert()
        .success();
    buildpanel(root)
        .arg("sessions")
        .assert()
        .success()
        .stdout(predicate::str::contains("No builds recorded yet"));
}

#[cfg(unix)]
#[test]
fn test_rebuild_moves_session_to_front() {
    let project = project_with_build("", 0);
    let root = project.path();

    for configuration in ["Debug", "Release", "Debug"] {
        buildpanel(root)
            .args(["build", "-c", configuration])
            .assert()
            .success();
    }

    let output = buildpanel(root).arg("sessions").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let debug = stdout.find("Game [Debug]").unwrap();
    let release = stdout.find("Game [Release]").unwrap();
    assert!(debug < release);
    assert_eq!(stdout.matches("Game [Debug]").count(), 1);
}

#[test]
fn test_log_without_sessions_fails() {
    let temp_dir = TempDir::new().unwrap();
    PanelConfig::new("Game.sln", "Game.csproj")
        .save_to_file(&temp_dir.path().join(CONFIG_FILE_NAME))
        .unwrap();

    buildpanel(temp_dir.path())
        .args(["log", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No builds recorded yet"));
}
