use std::fs;
use std::path::Path;
use std::process::Command;

fn matpipe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_matpipe"))
}

fn args(dir: &Path, threads: &str, dim: &str) -> Vec<String> {
    let mut v = vec![threads.to_string(), dim.to_string()];
    for name in ["a.dat", "b.dat", "c.dat", "d.dat", "e.dat"] {
        v.push(dir.join(name).display().to_string());
    }
    v
}

#[test]
fn test_scalar_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.dat"), "2\n").unwrap();
    fs::write(dir.path().join("b.dat"), "3\n").unwrap();
    fs::write(dir.path().join("c.dat"), "4\n").unwrap();

    let out = matpipe().args(args(dir.path(), "1", "1")).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Reduction result: 20");
    assert!(lines[1].starts_with("Sum time: ") && lines[1].ends_with(" seconds"));
    assert!(lines[4].starts_with("Total time: ") && lines[4].ends_with(" seconds."));

    assert_eq!(fs::read_to_string(dir.path().join("d.dat")).unwrap(), "5 \n");
    assert_eq!(fs::read_to_string(dir.path().join("e.dat")).unwrap(), "20 \n");
}

#[test]
fn test_uneven_threads_run() {
    let dir = tempfile::tempdir().unwrap();
    let a = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 16\n";
    let id = "1 0 0 0\n0 1 0 0\n0 0 1 0\n0 0 0 1\n";
    fs::write(dir.path().join("a.dat"), a).unwrap();
    fs::write(dir.path().join("b.dat"), id).unwrap();
    fs::write(dir.path().join("c.dat"), id).unwrap();

    let out = matpipe().args(args(dir.path(), "3", "4")).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    // sum(1..=16) + trace(I)
    assert!(stdout.starts_with("Reduction result: 140\n"), "{}", stdout);
}

#[test]
fn test_missing_input_fails_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.dat"), "1\n").unwrap();
    fs::write(dir.path().join("c.dat"), "1\n").unwrap();

    let out = matpipe().args(args(dir.path(), "2", "1")).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("b.dat"), "{}", stderr);
    assert!(!dir.path().join("d.dat").exists());
    assert!(!dir.path().join("e.dat").exists());
}

#[test]
fn test_missing_input_keeps_existing_outputs() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.dat"), "1\n").unwrap();
    fs::write(dir.path().join("b.dat"), "1\n").unwrap();
    fs::write(dir.path().join("d.dat"), "previous D\n").unwrap();
    fs::write(dir.path().join("e.dat"), "previous E\n").unwrap();

    let out = matpipe().args(args(dir.path(), "1", "1")).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("c.dat"), "{}", stderr);
    assert_eq!(
        fs::read_to_string(dir.path().join("d.dat")).unwrap(),
        "previous D\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("e.dat")).unwrap(),
        "previous E\n"
    );
}

#[test]
fn test_zero_threads_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = matpipe().args(args(dir.path(), "0", "2")).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
}
