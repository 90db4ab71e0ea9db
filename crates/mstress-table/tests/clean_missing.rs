use mstress_core::{AnalysisConfig, Table};
use mstress_table::{drop_incomplete, replace_missing};

fn observations() -> Table {
    Table::new(
        vec!["Cu".into(), "UV".into(), "survival".into()],
        vec![
            vec!["0".into(), "0".into(), "0.98".into()],
            vec!["10".into(), "NA".into(), "0.80".into()],
            vec!["0".into(), "2.5".into(), "".into()],
            vec!["10".into(), "2.5".into(), "0.40".into()],
        ],
    )
    .expect("table")
}

#[test]
fn drop_incomplete_reports_dropped_rows() {
    let report = drop_incomplete(&observations(), &AnalysisConfig::default());
    assert_eq!(report.dropped, 2);
    assert_eq!(report.table.columns, observations().columns);
    assert_eq!(report.table.column("survival").expect("column"), vec!["0.98", "0.40"]);
}

#[test]
fn verbose_cleaning_returns_same_result() {
    let config = AnalysisConfig {
        verbose: true,
        ..AnalysisConfig::default()
    };
    let quiet = drop_incomplete(&observations(), &AnalysisConfig::default());
    assert_eq!(drop_incomplete(&observations(), &config), quiet);
}

#[test]
fn custom_tokens_change_what_counts_as_missing() {
    let config = AnalysisConfig {
        missing_tokens: vec!["-999".into()],
        ..AnalysisConfig::default()
    };
    let mut table = observations();
    table.rows[0][2] = "-999".into();
    let report = drop_incomplete(&table, &config);
    // "NA" is an ordinary value under this configuration
    assert_eq!(report.dropped, 2);
    assert_eq!(report.table.column("UV").expect("column"), vec!["NA", "2.5"]);
}

#[test]
fn replace_missing_only_touches_selected_columns() {
    let replaced =
        replace_missing(&observations(), &["UV"], "0", &AnalysisConfig::default()).expect("replace");
    assert_eq!(replaced.column("UV").expect("column"), vec!["0", "0", "2.5", "2.5"]);
    assert_eq!(replaced.rows[2][2], "");
}

#[test]
fn replace_missing_rejects_unknown_columns() {
    let err = replace_missing(&observations(), &["Zn"], "0", &AnalysisConfig::default())
        .unwrap_err();
    assert_eq!(err.info().code, "table.unknown_column");
}
