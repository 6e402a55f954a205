//! Tests for fairlens-model types.

use fairlens_model::{AnalysisResult, DatasetSummary, RiskLevel, Row, Session, Table};

fn tiny_table() -> Table {
    let mut table = Table::new(vec!["gender".to_string(), "income".to_string()]);
    table.push_row(Row::from_pairs([("gender", "F"), ("income", "52000")]));
    table.push_row(Row::from_pairs([("gender", "M"), ("income", "")]));
    table.push_row(Row::from_pairs([("gender", "M"), ("income", "61000")]));
    table
}

#[test]
fn empty_and_absent_cells_are_missing() {
    let table = tiny_table();
    assert_eq!(table.rows[0].value("income"), Some("52000"));
    assert_eq!(table.rows[1].value("income"), None);
    assert_eq!(table.rows[1].value("no_such_column"), None);
}

#[test]
fn without_column_drops_cells_and_header() {
    let table = tiny_table();
    let reduced = table.without_column("income");
    assert_eq!(reduced.columns, vec!["gender".to_string()]);
    assert_eq!(reduced.row_count(), 3);
    assert!(reduced.rows.iter().all(|row| row.value("income").is_none()));
    // Original untouched
    assert!(table.has_column("income"));
}

#[test]
fn session_records_history_per_result() {
    let result = AnalysisResult {
        summary: DatasetSummary {
            total_rows: 3,
            total_columns: 2,
            missing_values: 1,
            columns: vec![],
        },
        overall_score: 82,
        risk_level: RiskLevel::from_score(82),
        distributions: vec![],
        correlations: vec![],
        proxy_biases: vec![],
        fairness_metrics: vec![],
        recommendations: vec![],
        most_biased_column: None,
        most_underrepresented_group: None,
        proxy_bias_detected: false,
    };

    let session = Session::new()
        .with_table(tiny_table(), "people.csv")
        .with_sensitive_columns(vec!["gender".to_string()])
        .with_result(result.clone(), Some("baseline".to_string()))
        .with_result(result, None);

    assert_eq!(session.history.len(), 2);
    assert_eq!(session.history[0].file_name, "people.csv");
    assert_eq!(session.history[0].overall_score, 82);
    assert_eq!(session.history[0].label.as_deref(), Some("baseline"));
    assert!(session.history[1].label.is_none());

    let cleared = session.reset();
    assert!(cleared.table.is_none());
    assert_eq!(cleared.history.len(), 2);
}

#[test]
fn session_round_trips_through_json() {
    let session = Session::new().with_table(tiny_table(), "people.csv");
    let json = serde_json::to_string(&session).expect("serialize session");
    let round: Session = serde_json::from_str(&json).expect("deserialize session");
    assert_eq!(round, session);
}
