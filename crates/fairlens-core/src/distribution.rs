//! Per-column frequency distributions and underrepresentation flags.

use std::collections::HashMap;

use fairlens_model::{ColumnType, DistributionEntry, DistributionResult, Table};

use crate::profiler::parse_numeric;

/// Groups strictly below this share of non-missing values are flagged.
pub const UNDERREPRESENTATION_THRESHOLD: f64 = 0.10;

/// Histograms never use more bins than this.
const MAX_BINS: usize = 10;

/// Frequency distribution of one column over its non-missing values.
///
/// Categorical columns group by exact value, sorted by count descending with
/// ties kept in first-encounter order. Numerical columns are binned into a
/// histogram; underrepresentation only applies to categorical columns.
pub fn analyze_distribution(
    table: &Table,
    column: &str,
    column_type: ColumnType,
) -> DistributionResult {
    let values: Vec<&str> = table
        .rows
        .iter()
        .filter_map(|row| row.value(column))
        .collect();

    let distribution = match column_type {
        ColumnType::Categorical => categorical_entries(&values),
        ColumnType::Numerical => numerical_entries(&values),
    };

    let underrepresented = match column_type {
        ColumnType::Categorical => distribution
            .iter()
            .filter(|entry| entry.percentage < UNDERREPRESENTATION_THRESHOLD)
            .cloned()
            .collect(),
        ColumnType::Numerical => Vec::new(),
    };

    DistributionResult {
        column: column.to_string(),
        column_type,
        distribution,
        underrepresented,
    }
}

fn categorical_entries(values: &[&str]) -> Vec<DistributionEntry> {
    let total = values.len();
    // Count in first-encounter order so ties sort deterministically.
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for value in values {
        match index.get(value) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(value, order.len());
                order.push((value, 1));
            }
        }
    }
    let mut entries: Vec<DistributionEntry> = order
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label: label.to_string(),
            count,
            percentage: count as f64 / total as f64,
        })
        .collect();
    // Stable: equal counts keep first-encounter order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

fn numerical_entries(values: &[&str]) -> Vec<DistributionEntry> {
    let total = values.len();
    let nums: Vec<f64> = values.iter().filter_map(|v| parse_numeric(v)).collect();
    if nums.is_empty() {
        return Vec::new();
    }

    let min = nums.iter().copied().fold(f64::INFINITY, f64::min);
    let max = nums.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bin_count = (nums.len() as f64).sqrt().ceil() as usize;
    let bin_count = bin_count.clamp(1, MAX_BINS);
    let mut bin_width = (max - min) / bin_count as f64;
    if bin_width == 0.0 {
        bin_width = 1.0;
    }

    (0..bin_count)
        .map(|i| {
            let lo = min + i as f64 * bin_width;
            let last = i == bin_count - 1;
            let hi = min + (i + 1) as f64 * bin_width;
            // Half-open bins, except the last bin is closed to include max.
            let count = nums
                .iter()
                .filter(|&&n| n >= lo && if last { n <= max } else { n < hi })
                .count();
            let hi_label = if last { max } else { hi };
            DistributionEntry {
                label: format!("{lo:.1}-{hi_label:.1}"),
                count,
                percentage: count as f64 / total as f64,
            }
        })
        .collect()
}
