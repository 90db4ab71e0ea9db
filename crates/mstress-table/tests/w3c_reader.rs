use std::fs;
use std::io::Cursor;

use mstress_core::{AnalysisConfig, MstressError, Table};
use mstress_table::{parse_w3c, persist, read_w3c};
use tempfile::tempdir;

const DOCUMENT: &str = "\
# title: mesocosm run 4
# units=mg/L
#draft
Cu,UV,survival

0,0,0.98
10,0,0.80
# trailing: note
0,2.5,0.71
";

#[test]
fn metadata_is_returned_beside_table() {
    let doc = parse_w3c(Cursor::new(DOCUMENT), &AnalysisConfig::default()).expect("parse");
    assert_eq!(doc.table.columns, vec!["Cu", "UV", "survival"]);
    assert_eq!(doc.table.len(), 3);
    assert_eq!(doc.table.rows[2], vec!["0", "2.5", "0.71"]);
    assert_eq!(doc.metadata.get("title").map(String::as_str), Some("mesocosm run 4"));
    assert_eq!(doc.metadata.get("units").map(String::as_str), Some("mg/L"));
    assert_eq!(doc.metadata.get("draft").map(String::as_str), Some(""));
    assert_eq!(doc.metadata.get("trailing").map(String::as_str), Some("note"));
}

#[test]
fn delimiter_and_prefix_follow_config() {
    let config = AnalysisConfig {
        delimiter: ';',
        comment_prefix: "%".into(),
        ..AnalysisConfig::default()
    };
    let text = "% source: lab\na;b\n1;2\n";
    let doc = parse_w3c(Cursor::new(text), &config).expect("parse");
    assert_eq!(doc.table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    assert_eq!(doc.metadata.len(), 1);
}

#[test]
fn ragged_rows_are_parse_errors() {
    let err = parse_w3c(Cursor::new("a,b\n1,2\n3\n"), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, MstressError::Parse(_)));
    assert_eq!(err.info().code, "w3c.row");
}

#[test]
fn metadata_only_document_has_no_header() {
    let err = parse_w3c(Cursor::new("# only: meta\n"), &AnalysisConfig::default()).unwrap_err();
    assert_eq!(err.info().code, "w3c.no_header");
}

#[test]
fn read_from_path_and_report_missing_files() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("run.csv");
    fs::write(&path, DOCUMENT).expect("write");
    let doc = read_w3c(&path, &AnalysisConfig::default()).expect("read");
    assert_eq!(doc.table.len(), 3);

    let err = read_w3c(&dir.path().join("absent.csv"), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, MstressError::Io(_)));
}

#[test]
fn quoted_multiline_fields_survive_a_write_read_cycle() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.csv");
    let mut table = Table::with_columns(["id", "note"]);
    table
        .push_row(["1", "first line\n\n# not metadata\nlast \"quoted\" line"])
        .expect("row");
    table.push_row(["2", "plain"]).expect("row");
    persist(&path, &table, 1).expect("persist");

    let doc = read_w3c(&path, &AnalysisConfig::default()).expect("read");
    assert!(doc.metadata.is_empty());
    assert_eq!(doc.table, table);
}
