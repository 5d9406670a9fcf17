use std::process::Command;

fn bkrs2yomi() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bkrs2yomi"))
}

#[test]
fn test_no_input_prints_usage_and_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let out = bkrs2yomi().current_dir(dir.path()).output().unwrap();

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
    assert!(stderr.contains("--daily"), "stderr: {stderr}");
}

#[test]
fn test_bad_type_is_a_usage_error() {
    let out = bkrs2yomi().args(["--type", "7", "dump.txt"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_converts_a_dump() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dump.txt"), "好\nhǎo\nхороший\n").unwrap();

    let out = bkrs2yomi()
        .current_dir(dir.path())
        .args(["dump.txt", "out.zip"])
        .output()
        .unwrap();

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("1 entries"));
    assert!(dir.path().join("out.zip").is_file());
    assert!(!dir.path().join("yomi_tmp").exists());
}
