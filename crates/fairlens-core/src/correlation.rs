//! Pairwise Pearson correlation over encoded columns.
//!
//! Columns are encoded into a typed column-major form once, then correlated
//! pairwise. The matrix is capped at the first 15 columns to bound the
//! quadratic pair cost on wide datasets.

use std::collections::HashMap;

use fairlens_model::{ColumnProfile, ColumnType, CorrelationEntry, Table};

use crate::profiler::parse_numeric;

/// Upper bound on columns entering the correlation matrix.
pub const MAX_CORRELATION_COLUMNS: usize = 15;

/// Full directed correlation matrix over at most the first 15 columns.
///
/// Both `(a, b)` and `(b, a)` are materialized for every unordered pair so
/// lookups need no ordering normalization; the diagonal is emitted once per
/// column with a fixed value of 1. Values are rounded to two decimals.
pub fn correlation_matrix(table: &Table, profiles: &[ColumnProfile]) -> Vec<CorrelationEntry> {
    let selected = &profiles[..profiles.len().min(MAX_CORRELATION_COLUMNS)];
    let encoded: Vec<Vec<f64>> = selected
        .iter()
        .map(|profile| encode_column(table, profile))
        .collect();

    let mut entries = Vec::new();
    for i in 0..selected.len() {
        for j in i..selected.len() {
            let value = if i == j {
                1.0
            } else {
                round2(pearson(&encoded[i], &encoded[j]))
            };
            entries.push(CorrelationEntry {
                col1: selected[i].name.clone(),
                col2: selected[j].name.clone(),
                value,
            });
            if i != j {
                entries.push(CorrelationEntry {
                    col1: selected[j].name.clone(),
                    col2: selected[i].name.clone(),
                    value,
                });
            }
        }
    }
    entries
}

/// Look up the directed entry for `(col1, col2)`.
pub fn find_entry<'a>(
    entries: &'a [CorrelationEntry],
    col1: &str,
    col2: &str,
) -> Option<&'a CorrelationEntry> {
    entries.iter().find(|e| e.col1 == col1 && e.col2 == col2)
}

/// Encode one column as a numeric vector spanning every row.
///
/// Numerical columns use the parsed value with 0 substituted for anything
/// unparseable or missing. Categorical columns assign integer codes by
/// first-appearance order of the non-missing values; missing cells encode
/// as 0.
fn encode_column(table: &Table, profile: &ColumnProfile) -> Vec<f64> {
    match profile.column_type {
        ColumnType::Numerical => table
            .rows
            .iter()
            .map(|row| {
                row.value(&profile.name)
                    .and_then(parse_numeric)
                    .unwrap_or(0.0)
            })
            .collect(),
        ColumnType::Categorical => {
            let mut codes: HashMap<&str, usize> = HashMap::new();
            let mut next = 0usize;
            for row in &table.rows {
                if let Some(value) = row.value(&profile.name) {
                    codes.entry(value).or_insert_with(|| {
                        let code = next;
                        next += 1;
                        code
                    });
                }
            }
            table
                .rows
                .iter()
                .map(|row| {
                    row.value(&profile.name)
                        .and_then(|v| codes.get(v))
                        .map(|&code| code as f64)
                        .unwrap_or(0.0)
                })
                .collect()
        }
    }
}

/// Pearson correlation coefficient; 0 when either side has zero variance.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n == 0 {
        return 0.0;
    }
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;
    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }
    let den = (den_x * den_y).sqrt();
    if den == 0.0 { 0.0 } else { num / den }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::profile_columns;
    use fairlens_model::Row;

    fn two_column_table(a: &[&str], b: &[&str]) -> Table {
        let mut table = Table::new(vec!["x".to_string(), "y".to_string()]);
        for (va, vb) in a.iter().zip(b) {
            table.push_row(Row::from_pairs([("x", *va), ("y", *vb)]));
        }
        table
    }

    #[test]
    fn perfect_negative_correlation() {
        let t = two_column_table(&["1", "2", "3"], &["3", "2", "1"]);
        let profiles = profile_columns(&t);
        let entries = correlation_matrix(&t, &profiles);
        let entry = find_entry(&entries, "x", "y").expect("entry");
        assert_eq!(entry.value, -1.0);
    }

    #[test]
    fn diagonal_is_one_and_emitted_once() {
        let t = two_column_table(&["1", "2"], &["a", "b"]);
        let profiles = profile_columns(&t);
        let entries = correlation_matrix(&t, &profiles);
        let diagonal: Vec<_> = entries.iter().filter(|e| e.col1 == e.col2).collect();
        assert_eq!(diagonal.len(), 2);
        assert!(diagonal.iter().all(|e| e.value == 1.0));
        // 2 columns: 2 diagonal + 2 directed off-diagonal entries
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn symmetry() {
        let t = two_column_table(&["1", "2", "3", "4"], &["1", "3", "2", "4"]);
        let profiles = profile_columns(&t);
        let entries = correlation_matrix(&t, &profiles);
        let ab = find_entry(&entries, "x", "y").expect("ab").value;
        let ba = find_entry(&entries, "y", "x").expect("ba").value;
        assert_eq!(ab, ba);
    }

    #[test]
    fn zero_variance_yields_zero() {
        let t = two_column_table(&["5", "5", "5"], &["1", "2", "3"]);
        let profiles = profile_columns(&t);
        let entries = correlation_matrix(&t, &profiles);
        assert_eq!(find_entry(&entries, "x", "y").expect("entry").value, 0.0);
    }

    #[test]
    fn column_cap_limits_matrix() {
        let columns: Vec<String> = (0..20).map(|i| format!("c{i}")).collect();
        let mut table = Table::new(columns.clone());
        for r in 0..3 {
            let row = Row::from_pairs(columns.iter().map(|c| (c.clone(), format!("{r}"))));
            table.push_row(row);
        }
        let profiles = profile_columns(&table);
        let entries = correlation_matrix(&table, &profiles);
        // 15 diagonal + 15*14 directed off-diagonal entries
        assert_eq!(entries.len(), 15 + 15 * 14);
        assert!(find_entry(&entries, "c15", "c0").is_none());
    }

    #[test]
    fn categorical_codes_follow_first_appearance() {
        // "b" first -> code 0, "a" -> 1; x ascending numeric
        let t = two_column_table(&["1", "2"], &["b", "a"]);
        let profiles = profile_columns(&t);
        let entries = correlation_matrix(&t, &profiles);
        let entry = find_entry(&entries, "x", "y").expect("entry");
        assert_eq!(entry.value, 1.0);
    }
}
