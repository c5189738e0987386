use std::fs::File;
use std::io::Write;
use std::process::Command;

fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_bigfiles"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run bigfiles");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

fn bigfiles(args: &[&str]) -> (i32, String) {
    let (code, stdout, _) = run(args);
    (code, stdout)
}

#[test]
fn missing_root_prints_no_files() {
    let (code, stdout) = bigfiles(&["/nonexistent_xyz_12345_folder"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "No files were found.\n");
}

#[test]
fn prints_ranked_aligned_lines() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("a.txt")).unwrap().write_all(&[0u8; 10]).unwrap();
    File::create(dir.path().join("b.txt")).unwrap().write_all(&[0u8; 1200]).unwrap();
    File::create(dir.path().join("c.log")).unwrap().write_all(&[0u8; 5000]).unwrap();

    let root = dir.path().to_string_lossy().into_owned();
    let (code, stdout) = bigfiles(&[&root, "-p", "*.txt", "-m", "5"]);
    assert_eq!(code, 0);
    let expected = format!(
        " 1200  {}\n   10  {}\n",
        dir.path().join("b.txt").display(),
        dir.path().join("a.txt").display()
    );
    assert_eq!(stdout, expected);
}

#[test]
fn empty_match_prints_no_files() {
    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("a.txt")).unwrap();
    let root = dir.path().to_string_lossy().into_owned();
    let (code, stdout) = bigfiles(&[&root, "--pattern", "*.iso"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "No files were found.\n");
}

#[test]
#[cfg(unix)]
fn on_error_policy_decides_exit_code() {
    use std::os::unix::fs::symlink;

    let dir = tempfile::tempdir().unwrap();
    File::create(dir.path().join("ok.bin")).unwrap().write_all(&[0u8; 3]).unwrap();
    symlink(dir.path().join("self"), dir.path().join("self")).unwrap();
    let root = dir.path().to_string_lossy().into_owned();

    let (code, stdout, _) = run(&[&root]);
    assert_eq!(code, 0);
    assert_eq!(stdout, format!(" 3  {}\n", dir.path().join("ok.bin").display()));

    let (code, stdout, stderr) = run(&[&root, "--on-error", "abort"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("bigfiles: "), "stderr: {stderr}");
    assert!(stderr.contains("self"), "stderr: {stderr}");
}
