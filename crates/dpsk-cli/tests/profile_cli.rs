use std::process::Command;

fn run_ok(args: &[&str]) -> String {
    let out = Command::new(env!("CARGO_BIN_EXE_dpsk-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run dpsk-cli");
    assert!(
        out.status.success(),
        "command failed: {:?}\nstderr:\n{}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn new_then_inspect_then_use() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("narrow.dpr");
    let p = path.to_str().unwrap();

    run_ok(&[
        "profile", "new", "--out", p, "--width", "8", "--amplitude", "127", "--recovery", "symbol",
    ]);

    let info = run_ok(&["profile", "inspect", "--in", p]);
    assert!(info.contains("width_bits=8"));
    assert!(info.contains("amplitude=127"));
    assert!(info.contains("recovery=Symbol"));
    let id_line = info
        .lines()
        .find(|l| l.starts_with("profile_id="))
        .expect("profile_id line");
    assert_eq!(id_line.len(), "profile_id=".len() + 32);

    let samples = run_ok(&["modulate", "--profile", p, "--bits", "10"]);
    assert_eq!(samples.lines().collect::<Vec<_>>(), vec!["127", "-127"]);
}

#[test]
fn corrupt_profile_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.dpr");
    std::fs::write(&path, b"DPR1garbage").expect("write");

    let out = Command::new(env!("CARGO_BIN_EXE_dpsk-cli"))
        .args(["profile", "inspect", "--in", path.to_str().unwrap()])
        .output()
        .expect("run dpsk-cli");
    assert!(!out.status.success());
}
