//! Fairness metrics over categorical sensitive columns and the target column.

use std::collections::HashMap;

use fairlens_model::{ColumnProfile, ColumnType, FairnessMetric, MetricStatus, Table};

pub const DEMOGRAPHIC_PARITY: &str = "Demographic Parity Difference";
pub const REPRESENTATION_RATIO: &str = "Representation Ratio";
pub const CLASS_IMBALANCE: &str = "Class Imbalance Score";

/// Compute fairness metrics.
///
/// Per categorical sensitive column with at least two observed groups:
/// Demographic Parity Difference and Representation Ratio. When a target
/// column with at least two groups is given: Class Imbalance Score. Columns
/// with fewer than two groups are silently skipped.
pub fn fairness_metrics(
    table: &Table,
    profiles: &[ColumnProfile],
    sensitive_columns: &[String],
    target_column: Option<&str>,
) -> Vec<FairnessMetric> {
    let mut metrics = Vec::new();

    for sensitive in sensitive_columns {
        let Some(profile) = profiles.iter().find(|p| &p.name == sensitive) else {
            continue;
        };
        if profile.column_type != ColumnType::Categorical {
            continue;
        }
        let counts = group_counts(table, sensitive);
        if counts.len() < 2 {
            continue;
        }
        let total: usize = counts.iter().sum();
        let percentages: Vec<f64> = counts.iter().map(|&c| c as f64 / total as f64).collect();
        let max_p = percentages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_p = percentages.iter().copied().fold(f64::INFINITY, f64::min);
        let expected_equal = 1.0 / counts.len() as f64;

        let dpd = max_p - min_p;
        metrics.push(FairnessMetric {
            name: DEMOGRAPHIC_PARITY.to_string(),
            column: sensitive.clone(),
            value: round3(dpd),
            status: if dpd < 0.1 {
                MetricStatus::Good
            } else if dpd < 0.3 {
                MetricStatus::Moderate
            } else {
                MetricStatus::Poor
            },
            explanation: format!(
                "Measures the difference between the highest and lowest group representation \
                 in \"{sensitive}\". Value of {dpd:.3} means a {:.1}% gap exists. \
                 Below 0.1 is considered fair.",
                dpd * 100.0
            ),
        });

        let rep_ratio = min_p / expected_equal;
        metrics.push(FairnessMetric {
            name: REPRESENTATION_RATIO.to_string(),
            column: sensitive.clone(),
            value: round3(rep_ratio),
            status: if rep_ratio > 0.8 {
                MetricStatus::Good
            } else if rep_ratio > 0.5 {
                MetricStatus::Moderate
            } else {
                MetricStatus::Poor
            },
            explanation: format!(
                "Compares the smallest group in \"{sensitive}\" against expected equal \
                 distribution. Ratio of {rep_ratio:.3} means the smallest group is {:.1}% \
                 of expected size. Above 0.8 is fair.",
                rep_ratio * 100.0
            ),
        });
    }

    if let Some(target) = target_column {
        let counts = group_counts(table, target);
        if counts.len() >= 2 {
            let min = counts.iter().copied().min().unwrap_or(0);
            let max = counts.iter().copied().max().unwrap_or(0);
            let imbalance = 1.0 - min as f64 / max as f64;
            metrics.push(FairnessMetric {
                name: CLASS_IMBALANCE.to_string(),
                column: target.to_string(),
                value: round3(imbalance),
                status: if imbalance < 0.3 {
                    MetricStatus::Good
                } else if imbalance < 0.6 {
                    MetricStatus::Moderate
                } else {
                    MetricStatus::Poor
                },
                explanation: format!(
                    "Measures how imbalanced the target variable \"{target}\" is. \
                     Score of {imbalance:.3} means {:.1}% imbalance. Below 0.3 is balanced.",
                    imbalance * 100.0
                ),
            });
        }
    }

    metrics
}

/// Group sizes of a column's non-missing values, in first-encounter order.
fn group_counts(table: &Table, column: &str) -> Vec<usize> {
    let mut order: Vec<usize> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for row in &table.rows {
        let Some(value) = row.value(column) else {
            continue;
        };
        match index.get(value) {
            Some(&i) => order[i] += 1,
            None => {
                index.insert(value.to_string(), order.len());
                order.push(1);
            }
        }
    }
    order
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::profile_columns;
    use fairlens_model::Row;

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

    #[test]
    fn ninety_ten_split_is_poor_parity() {
        let t = gender_table(90, 10);
        let profiles = profile_columns(&t);
        let metrics = fairness_metrics(&t, &profiles, &["gender".to_string()], None);
        let dpd = metrics
            .iter()
            .find(|m| m.name == DEMOGRAPHIC_PARITY)
            .expect("dpd");
        assert_eq!(dpd.value, 0.8);
        assert_eq!(dpd.status, MetricStatus::Poor);
    }

    #[test]
    fn balanced_split_is_good() {
        let t = gender_table(50, 50);
        let profiles = profile_columns(&t);
        let metrics = fairness_metrics(&t, &profiles, &["gender".to_string()], None);
        let dpd = metrics
            .iter()
            .find(|m| m.name == DEMOGRAPHIC_PARITY)
            .expect("dpd");
        assert_eq!(dpd.value, 0.0);
        assert_eq!(dpd.status, MetricStatus::Good);
        let ratio = metrics
            .iter()
            .find(|m| m.name == REPRESENTATION_RATIO)
            .expect("ratio");
        assert_eq!(ratio.value, 1.0);
        assert_eq!(ratio.status, MetricStatus::Good);
    }

    #[test]
    fn single_group_column_skipped() {
        let t = gender_table(10, 0);
        let profiles = profile_columns(&t);
        let metrics = fairness_metrics(&t, &profiles, &["gender".to_string()], None);
        assert!(metrics.is_empty());
    }

    #[test]
    fn numerical_sensitive_column_skipped() {
        let mut t = Table::new(vec!["age".to_string()]);
        for i in 0..10 {
            t.push_row(Row::from_pairs([("age", format!("{}", 20 + i))]));
        }
        let profiles = profile_columns(&t);
        let metrics = fairness_metrics(&t, &profiles, &["age".to_string()], None);
        assert!(metrics.is_empty());
    }

    #[test]
    fn class_imbalance_for_target() {
        let mut t = Table::new(vec!["outcome".to_string()]);
        for _ in 0..80 {
            t.push_row(Row::from_pairs([("outcome", "yes")]));
        }
        for _ in 0..20 {
            t.push_row(Row::from_pairs([("outcome", "no")]));
        }
        let profiles = profile_columns(&t);
        let metrics = fairness_metrics(&t, &profiles, &[], Some("outcome"));
        let imbalance = metrics
            .iter()
            .find(|m| m.name == CLASS_IMBALANCE)
            .expect("imbalance");
        assert_eq!(imbalance.value, 0.75);
        assert_eq!(imbalance.status, MetricStatus::Poor);
    }

    #[test]
    fn representation_ratio_three_groups() {
        let mut t = Table::new(vec!["group".to_string()]);
        for (label, count) in [("a", 5usize), ("b", 3), ("c", 2)] {
            for _ in 0..count {
                t.push_row(Row::from_pairs([("group", label)]));
            }
        }
        let profiles = profile_columns(&t);
        let metrics = fairness_metrics(&t, &profiles, &["group".to_string()], None);
        let ratio = metrics
            .iter()
            .find(|m| m.name == REPRESENTATION_RATIO)
            .expect("ratio");
        // min% = 0.2, expected = 1/3: ratio = 0.6
        assert_eq!(ratio.value, 0.6);
        assert_eq!(ratio.status, MetricStatus::Moderate);
    }
}
