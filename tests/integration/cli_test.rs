use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn out_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cv-cli-{}-{name}.dat", std::process::id()))
}

fn run_cv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cv"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute cv")
}

#[test]
fn test_tdl_run_writes_ring() {
    let path = out_path("tdl");
    let output = run_cv(&[
        "--length",
        "1000",
        "--cpus",
        "3",
        "--format",
        "tdl",
        "--file-out",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let fields: Vec<&str> = stdout.trim_end().split('\t').collect();
    assert_eq!(fields.len(), 4);
    assert!(fields.iter().all(|f| f.parse::<u128>().is_ok()));

    let data = fs::read(&path).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(data.len(), 1000);
    assert!(data.iter().all(|&c| c < 6));
    for i in 0..data.len() {
        assert_ne!(data[i], data[(i + 1) % data.len()]);
    }
}

#[test]
fn test_human_report() {
    let path = out_path("human");
    let output = run_cv(&["--length", "64", "--file-out", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initialization took"));
    assert!(stdout.contains("Cole-Vishkin took"));
    assert!(stdout.contains("Cleanup took"));
    assert!(stdout.contains("<All> took"));
}

#[test]
fn test_format_none_is_silent() {
    let path = out_path("none");
    let output = run_cv(&[
        "--length",
        "64",
        "--format",
        "none",
        "--file-out",
        path.to_str().unwrap(),
    ]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_output_independent_of_cpus() {
    let one = out_path("cpus-1");
    let many = out_path("cpus-7");
    for (cpus, path) in [("1", &one), ("7", &many)] {
        let output = run_cv(&[
            "--length",
            "5000",
            "--cpus",
            cpus,
            "--init-pattern",
            "xorshift128plus",
            "--init-seed",
            "17",
            "--format",
            "none",
            "--file-out",
            path.to_str().unwrap(),
        ]);
        assert!(output.status.success());
    }
    let a = fs::read(&one).unwrap();
    let b = fs::read(&many).unwrap();
    let _ = fs::remove_file(&one);
    let _ = fs::remove_file(&many);
    assert_eq!(a, b);
}

#[test]
fn test_invalid_cpus_exit_code() {
    let output = run_cv(&["--cpus", "0", "--length", "64"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid amount of cpus"));
}

#[test]
fn test_length_below_cpus_exit_code() {
    let output = run_cv(&["--cpus", "8", "--length", "4"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_few_rounds_warns() {
    let path = out_path("rounds");
    let output = run_cv(&[
        "--length",
        "64",
        "--rounds",
        "2",
        "--format",
        "none",
        "--file-out",
        path.to_str().unwrap(),
    ]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Only 2 rounds"));
}

#[test]
fn test_unwritable_output_exit_code() {
    let path = out_path("no-such-dir").join("out.dat");
    let output = run_cv(&["--length", "64", "--file-out", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));
}
