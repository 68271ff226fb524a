use std::process::Command;

fn loader() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_genesis-loader"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn prints_default_genesis() {
    let output = loader()
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("chain_id: 1337"));
    assert!(stdout.contains("0x3b9aca00"));
}

#[test]
fn reports_error_with_logging_off() {
    let dir = tempfile::tempdir().unwrap();
    let output = loader()
        .arg(dir.path().join("missing.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read genesis file"));
}
