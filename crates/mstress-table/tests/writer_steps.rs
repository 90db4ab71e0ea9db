use std::fs;

use mstress_core::{MstressError, Table};
use mstress_table::{persist, ResultSink};
use tempfile::tempdir;

fn slab(rows: &[[&str; 2]]) -> Table {
    let mut table = Table::with_columns(["a", "b"]);
    for row in rows {
        table.push_row(row.iter().copied()).expect("row");
    }
    table
}

#[test]
fn step_one_then_append_keeps_order() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    persist(&path, &slab(&[["1", "2"]]), 1).expect("step 1");
    persist(&path, &slab(&[["3", "4"]]), 2).expect("step 2");
    assert_eq!(fs::read_to_string(&path).expect("read"), "a,b\n1,2\n3,4\n");
}

#[test]
fn stepwise_equals_single_write_of_concatenation() {
    let dir = tempdir().expect("tempdir");
    let stepwise = dir.path().join("stepwise.csv");
    let at_once = dir.path().join("at_once.csv");
    let slabs = [
        slab(&[["0.1", "co0"], ["0.2", "A1"]]),
        slab(&[]),
        slab(&[["has,comma", "quoted \"x\""]]),
        slab(&[["7", ""]]),
    ];
    let mut combined = Table::with_columns(["a", "b"]);
    for (idx, table) in slabs.iter().enumerate() {
        persist(&stepwise, table, idx + 1).expect("persist");
        combined = combined.concat(table).expect("concat");
    }
    persist(&at_once, &combined, 1).expect("persist once");
    assert_eq!(
        fs::read(&stepwise).expect("stepwise"),
        fs::read(&at_once).expect("at once")
    );
}

#[test]
fn step_one_truncates_previous_content() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    persist(&path, &slab(&[["1", "2"], ["3", "4"]]), 1).expect("first run");
    persist(&path, &slab(&[["5", "6"]]), 1).expect("second run");
    assert_eq!(fs::read_to_string(&path).expect("read"), "a,b\n5,6\n");
}

#[test]
fn append_without_step_one_is_refused() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("results.csv");
    let err = persist(&path, &slab(&[["1", "2"]]), 2).unwrap_err();
    assert!(matches!(err, MstressError::MissingPrerequisite(_)));
    assert!(!path.exists());
    assert!(!dir.path().join("nested").exists());
}

#[test]
fn step_zero_is_invalid_and_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    let err = persist(&path, &slab(&[["1", "2"]]), 0).unwrap_err();
    assert!(matches!(err, MstressError::InvalidInput(_)));
    assert!(!path.exists());
}

#[test]
fn append_with_different_width_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    persist(&path, &slab(&[["1", "2"]]), 1).expect("step 1");
    let mut wide = Table::with_columns(["a", "b", "c"]);
    wide.push_row(["3", "4", "5"]).expect("row");
    let err = persist(&path, &wide, 2).unwrap_err();
    assert_eq!(err.info().code, "writer.width_mismatch");
    assert_eq!(fs::read_to_string(&path).expect("read"), "a,b\n1,2\n");
}

#[test]
fn append_to_empty_file_is_missing_prerequisite() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    fs::write(&path, "").expect("touch");
    let err = persist(&path, &slab(&[["1", "2"]]), 3).unwrap_err();
    assert!(matches!(err, MstressError::MissingPrerequisite(_)));
}

#[test]
fn tsv_sink_uses_tabs() {
    let dir = tempdir().expect("tempdir");
    let sink = ResultSink::from_path(dir.path().join("results.tsv"));
    sink.persist(&slab(&[["1", "2"]]), 1).expect("step 1");
    sink.persist(&slab(&[["3", "4"]]), 2).expect("step 2");
    assert_eq!(
        fs::read_to_string(sink.path()).expect("read"),
        "a\tb\n1\t2\n3\t4\n"
    );
}

#[test]
fn ragged_append_leaves_file_untouched() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    persist(&path, &slab(&[["1", "2"]]), 1).expect("step 1");
    let mut ragged = slab(&[["3", "4"]]);
    ragged.rows.push(vec!["5".to_string()]);
    let err = persist(&path, &ragged, 2).unwrap_err();
    assert!(matches!(err, MstressError::InvalidInput(_)));
    assert_eq!(err.info().code, "table.row_width");
    assert_eq!(fs::read_to_string(&path).expect("read"), "a,b\n1,2\n");
    persist(&path, &slab(&[["3", "4"]]), 2).expect("later append");
    assert_eq!(fs::read_to_string(&path).expect("read"), "a,b\n1,2\n3,4\n");
}

#[test]
fn ragged_first_step_creates_nothing() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    let mut ragged = slab(&[]);
    ragged.rows.push(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
    assert!(persist(&path, &ragged, 1).is_err());
    assert!(!path.exists());
}

#[test]
fn zero_column_tables_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    let empty = Table::default();
    let err = persist(&path, &empty, 1).unwrap_err();
    assert_eq!(err.info().code, "writer.empty_header");
    assert!(!path.exists());
}
