//! Mitigation simulation: apply one recommendation to a copy of the table
//! and re-run the evaluation pipeline on the result.
//!
//! The original table is never mutated, preserving "simulate before
//! applying" semantics.

use fairlens_model::{MitigationKind, Recommendation, Row, Table};
use tracing::info;

use crate::pipeline::{AnalysisConfig, evaluate};

/// Grouping key for rows whose cell is missing.
const MISSING_GROUP: &str = "unknown";

/// Result of simulating a mitigation.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// The mutated table copy.
    pub table: Table,
    /// Overall score of the mutated table under the same configuration.
    pub score: u32,
}

/// Apply `recommendation` to a copy of `table`, then re-score it.
///
/// Oversample and undersample rebalance groups of the target column; remove
/// drops the column entirely. Reweight and transform are advisory and leave
/// the table unchanged.
pub fn simulate_mitigation(
    table: &Table,
    config: &AnalysisConfig,
    recommendation: &Recommendation,
) -> SimulationOutcome {
    let mutated = match (recommendation.kind, recommendation.target_column.as_deref()) {
        (MitigationKind::Oversample, Some(column)) => oversample(table, column),
        (MitigationKind::Undersample, Some(column)) => undersample(table, column),
        (MitigationKind::Remove, Some(column)) => table.without_column(column),
        _ => table.clone(),
    };

    let evaluation = evaluate(&mutated, config);
    info!(
        kind = recommendation.kind.as_str(),
        rows_before = table.row_count(),
        rows_after = mutated.row_count(),
        score = evaluation.score,
        "simulated mitigation"
    );
    SimulationOutcome {
        table: mutated,
        score: evaluation.score,
    }
}

/// Group rows by the value of `column`, in first-encounter order.
/// Missing cells group under `"unknown"`.
fn group_rows(table: &Table, column: &str) -> Vec<Vec<Row>> {
    let mut order: Vec<Vec<Row>> = Vec::new();
    let mut index: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
    for row in &table.rows {
        let key = row.value(column).unwrap_or(MISSING_GROUP).to_string();
        match index.get(&key) {
            Some(&i) => order[i].push(row.clone()),
            None => {
                index.insert(key, order.len());
                order.push(vec![row.clone()]);
            }
        }
    }
    order
}

/// Cyclically repeat each group's existing rows until every group matches
/// the largest group's size. No synthetic rows are generated.
fn oversample(table: &Table, column: &str) -> Table {
    let groups = group_rows(table, column);
    let max_size = groups.iter().map(Vec::len).max().unwrap_or(0);
    let mut rows = Vec::new();
    for group in groups {
        let original = group.len();
        rows.extend(group.iter().cloned());
        for i in original..max_size {
            rows.push(group[i % original].clone());
        }
    }
    Table {
        columns: table.columns.clone(),
        rows,
    }
}

/// Truncate every group to the smallest group's size, keeping the first N
/// rows of each group.
fn undersample(table: &Table, column: &str) -> Table {
    let groups = group_rows(table, column);
    let min_size = groups.iter().map(Vec::len).min().unwrap_or(0);
    let rows = groups
        .into_iter()
        .flat_map(|group| group.into_iter().take(min_size))
        .collect();
    Table {
        columns: table.columns.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairlens_model::{Impact, MitigationKind};

    fn recommendation(kind: MitigationKind, column: &str) -> Recommendation {
        Recommendation {
            title: String::new(),
            description: String::new(),
            impact: Impact::High,
            kind,
            target_column: Some(column.to_string()),
        }
    }

    fn gender_table(m: usize, f: usize) -> Table {
        let mut table = Table::new(vec!["gender".to_string()]);
        for _ in 0..m {
            table.push_row(Row::from_pairs([("gender", "M")]));
        }
        for _ in 0..f {
            table.push_row(Row::from_pairs([("gender", "F")]));
        }
        table
    }

    fn group_sizes(table: &Table, column: &str) -> Vec<usize> {
        group_rows(table, column).iter().map(Vec::len).collect()
    }

    #[test]
    fn oversample_balances_to_max() {
        let table = gender_table(9, 3);
        let config = AnalysisConfig::new(vec!["gender".to_string()], None);
        let outcome = simulate_mitigation(
            &table,
            &config,
            &recommendation(MitigationKind::Oversample, "gender"),
        );
        assert_eq!(group_sizes(&outcome.table, "gender"), vec![9, 9]);
        assert_eq!(table.row_count(), 12);
    }

    #[test]
    fn oversample_repeats_rows_cyclically() {
        let mut table = Table::new(vec!["g".to_string(), "id".to_string()]);
        for i in 0..5 {
            table.push_row(Row::from_pairs([
                ("g".to_string(), "a".to_string()),
                ("id".to_string(), format!("a{i}")),
            ]));
        }
        for i in 0..2 {
            table.push_row(Row::from_pairs([
                ("g".to_string(), "b".to_string()),
                ("id".to_string(), format!("b{i}")),
            ]));
        }
        let config = AnalysisConfig::default();
        let outcome = simulate_mitigation(
            &table,
            &config,
            &recommendation(MitigationKind::Oversample, "g"),
        );
        let b_ids: Vec<&str> = outcome
            .table
            .rows
            .iter()
            .filter(|r| r.value("g") == Some("b"))
            .filter_map(|r| r.value("id"))
            .collect();
        assert_eq!(b_ids, vec!["b0", "b1", "b0", "b1", "b0"]);
    }

    #[test]
    fn undersample_truncates_to_min_keeping_first_rows() {
        let mut table = Table::new(vec!["g".to_string(), "id".to_string()]);
        for i in 0..4 {
            table.push_row(Row::from_pairs([
                ("g".to_string(), "a".to_string()),
                ("id".to_string(), format!("a{i}")),
            ]));
        }
        for i in 0..2 {
            table.push_row(Row::from_pairs([
                ("g".to_string(), "b".to_string()),
                ("id".to_string(), format!("b{i}")),
            ]));
        }
        let config = AnalysisConfig::default();
        let outcome = simulate_mitigation(
            &table,
            &config,
            &recommendation(MitigationKind::Undersample, "g"),
        );
        assert_eq!(group_sizes(&outcome.table, "g"), vec![2, 2]);
        let a_ids: Vec<&str> = outcome
            .table
            .rows
            .iter()
            .filter(|r| r.value("g") == Some("a"))
            .filter_map(|r| r.value("id"))
            .collect();
        assert_eq!(a_ids, vec!["a0", "a1"]);
    }

    #[test]
    fn remove_drops_column_and_degrades_gracefully() {
        let table = gender_table(9, 1);
        let config = AnalysisConfig::new(vec!["gender".to_string()], None);
        let outcome = simulate_mitigation(
            &table,
            &config,
            &recommendation(MitigationKind::Remove, "gender"),
        );
        assert!(outcome.table.columns.is_empty());
        // No surviving sensitive columns: neutral score, no error
        assert_eq!(outcome.score, 100);
        assert!(table.has_column("gender"));
    }

    #[test]
    fn reweight_leaves_table_unchanged() {
        let table = gender_table(5, 5);
        let config = AnalysisConfig::new(vec!["gender".to_string()], None);
        let outcome = simulate_mitigation(
            &table,
            &config,
            &recommendation(MitigationKind::Reweight, "gender"),
        );
        assert_eq!(outcome.table, table);
    }

    #[test]
    fn missing_cells_group_as_unknown() {
        let mut table = Table::new(vec!["g".to_string()]);
        table.push_row(Row::from_pairs([("g", "a")]));
        table.push_row(Row::new());
        table.push_row(Row::new());
        let config = AnalysisConfig::default();
        let outcome = simulate_mitigation(
            &table,
            &config,
            &recommendation(MitigationKind::Oversample, "g"),
        );
        assert_eq!(group_sizes(&outcome.table, "g"), vec![2, 2]);
    }
}
