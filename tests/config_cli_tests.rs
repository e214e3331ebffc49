mod common;

use common::{run_mom, TestEnv};

#[test]
fn config_show_works() {
    let output = run_mom(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[general]"));
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("provider"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_mom(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config path should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_writes_file_and_refuses_overwrite() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(env.config_path().exists());

    let output = env.run(&["config", "init"]);
    assert!(
        !output.status.success(),
        "second init without --force should fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("already exists"),
        "expected overwrite refusal, got:\n{}",
        stderr
    );

    let output = env.run(&["config", "init", "--force"]);
    assert!(
        output.status.success(),
        "init --force should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}
