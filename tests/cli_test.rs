use std::process::Command;

/// The binary with its data directory moved under the temp dir.
fn moodlist() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_moodlist"));
    cmd.env("XDG_DATA_HOME", std::env::temp_dir().join("moodlist-cli-test"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_errors_go_to_stderr_and_exit_nonzero() {
    // empty values count as missing and a .env file does not override them
    let output = moodlist()
        .args(["recommend", "--count", "5", "--mood", "Live"])
        .env("SPOTIFY_API_AUTH_CLIENT_ID", "")
        .env("SPOTIFY_API_REDIRECT_URI", "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[!] Invalid configuration"), "stderr: {}", stderr);
    assert!(stderr.contains("must be set"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_completions_write_only_the_script_to_stdout() {
    let output = moodlist().args(["completions", "bash"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("moodlist"));
    assert!(stdout.contains("recommend"));
}
