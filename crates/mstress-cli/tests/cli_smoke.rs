use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn mstress() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mstress"))
}

#[test]
fn design_writes_annotated_table() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("exposure.csv");
    let out = dir.path().join("labelled.csv");
    fs::write(&input, "# run: 4\nA,B\n0,0\n5,0\n5,0\n0,3\n5,3\n").expect("write input");
    let status = mstress()
        .args(["design", "--stressors", "A,B", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .status()
        .expect("run design");
    assert!(status.success());
    let body = fs::read_to_string(&out).expect("read output");
    assert_eq!(
        body,
        "A,B,treatment_type,treatment_level,treatment\n\
         0,0,co,0,co0\n5,0,A,1,A1\n5,0,A,2,A2\n0,3,B,1,B1\n5,3,mix,1,mix1\n"
    );
}

#[test]
fn labels_prints_unique_values() {
    let output = mstress()
        .args(["labels", "--values", "c(1, 2.3456, 2.3449, 10)", "--digits", "2"])
        .output()
        .expect("run labels");
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(body, "1\n2.3\n10\n");
}

#[test]
fn append_before_first_step_fails() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("slab.csv");
    let out = dir.path().join("results.csv");
    fs::write(&input, "a,b\n1,2\n").expect("write input");
    let status = mstress()
        .args(["append", "--step", "2", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .status()
        .expect("run append");
    assert!(!status.success());
    assert!(!out.exists());
}
