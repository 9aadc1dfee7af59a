use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cornice"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute cornice");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("highlight border"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cornice"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute cornice");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cornice"));
}

#[test]
fn missing_window_flag_is_an_error() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cornice"));

    // Act
    let output = cmd.output().expect("failed to execute cornice");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--window-id"));
}

#[test]
fn malformed_handle_is_rejected() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cornice"));
    cmd.args(["-w", "not-a-handle"]);

    // Act
    let output = cmd.output().expect("failed to execute cornice");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid window handle"));
}

#[test]
fn nonexistent_window_exits_with_error() {
    // Arrange: handle 1 never refers to a real window
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cornice"));
    cmd.args(["-w", "0x1"]);

    // Act
    let output = cmd.output().expect("failed to execute cornice");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no window with handle"));
}
