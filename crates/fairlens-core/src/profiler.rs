//! Column type and sensitivity profiling.
//!
//! Type inference is a simple majority vote: a column is numerical when more
//! than 80% of its non-missing values parse as numbers. Sensitivity detection
//! is an ordered first-match-wins table of name patterns, evaluated
//! case-insensitively against the tokenized column name.

use fairlens_model::{ColumnProfile, ColumnType, Table};

/// How a pattern stem matches against a column-name token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The stem must equal a whole token ("sex" matches `sex` but not `sextant`).
    WholeToken,
    /// The stem must prefix a token ("disab" matches `disability`).
    TokenPrefix,
}

/// One entry of the sensitive-attribute pattern table.
#[derive(Debug, Clone, Copy)]
pub struct SensitivePattern {
    pub stems: &'static [&'static str],
    pub kind: MatchKind,
    pub reason: &'static str,
}

/// Ordered pattern table; the first matching entry wins.
pub const SENSITIVE_PATTERNS: &[SensitivePattern] = &[
    SensitivePattern {
        stems: &["gender", "sex"],
        kind: MatchKind::WholeToken,
        reason: "Gender-related attribute",
    },
    SensitivePattern {
        stems: &["race", "ethnic"],
        kind: MatchKind::TokenPrefix,
        reason: "Race/ethnicity-related attribute",
    },
    SensitivePattern {
        stems: &["age", "birth"],
        kind: MatchKind::TokenPrefix,
        reason: "Age-related attribute",
    },
    SensitivePattern {
        stems: &["religio"],
        kind: MatchKind::TokenPrefix,
        reason: "Religion-related attribute",
    },
    SensitivePattern {
        stems: &["caste"],
        kind: MatchKind::WholeToken,
        reason: "Caste-related attribute",
    },
    SensitivePattern {
        stems: &["income", "salary", "wage", "pay"],
        kind: MatchKind::WholeToken,
        reason: "Income-related attribute",
    },
    SensitivePattern {
        stems: &["disab"],
        kind: MatchKind::TokenPrefix,
        reason: "Disability-related attribute",
    },
    SensitivePattern {
        stems: &["national", "country", "citizen"],
        kind: MatchKind::TokenPrefix,
        reason: "Nationality-related attribute",
    },
    SensitivePattern {
        stems: &["marital", "married", "divorce"],
        kind: MatchKind::TokenPrefix,
        reason: "Marital status attribute",
    },
    SensitivePattern {
        stems: &["orient", "lgbtq"],
        kind: MatchKind::TokenPrefix,
        reason: "Sexual orientation attribute",
    },
    SensitivePattern {
        stems: &["pregnan"],
        kind: MatchKind::TokenPrefix,
        reason: "Pregnancy-related attribute",
    },
    SensitivePattern {
        stems: &["zip", "postal", "region"],
        kind: MatchKind::WholeToken,
        reason: "Geographic attribute (potential proxy)",
    },
];

/// Share of parseable values above which a column counts as numerical.
const NUMERIC_RATIO_THRESHOLD: f64 = 0.8;

/// Parse a cell as a numeric literal, tolerating surrounding whitespace.
pub fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

fn tokenize(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reason a column name is considered sensitive, if any pattern matches.
pub fn sensitive_reason(column_name: &str) -> Option<&'static str> {
    let tokens = tokenize(column_name);
    SENSITIVE_PATTERNS
        .iter()
        .find(|pattern| {
            pattern.stems.iter().any(|stem| {
                tokens.iter().any(|token| match pattern.kind {
                    MatchKind::WholeToken => token == stem,
                    MatchKind::TokenPrefix => token.starts_with(stem),
                })
            })
        })
        .map(|pattern| pattern.reason)
}

/// Profile every column of the table: type, cardinality, missingness,
/// sensitivity.
pub fn profile_columns(table: &Table) -> Vec<ColumnProfile> {
    table
        .columns
        .iter()
        .map(|name| profile_column(table, name))
        .collect()
}

fn profile_column(table: &Table, name: &str) -> ColumnProfile {
    let mut non_missing = 0usize;
    let mut numeric = 0usize;
    let mut uniques = std::collections::BTreeSet::new();
    for row in &table.rows {
        let Some(value) = row.value(name) else {
            continue;
        };
        non_missing += 1;
        uniques.insert(value);
        if parse_numeric(value).is_some() {
            numeric += 1;
        }
    }
    let is_numerical =
        non_missing > 0 && numeric as f64 / non_missing as f64 > NUMERIC_RATIO_THRESHOLD;
    let reason = sensitive_reason(name);
    ColumnProfile {
        name: name.to_string(),
        column_type: if is_numerical {
            ColumnType::Numerical
        } else {
            ColumnType::Categorical
        },
        unique_values: uniques.len(),
        missing_count: table.rows.len() - non_missing,
        is_sensitive: reason.is_some(),
        sensitive_reason: reason.map(str::to_string),
    }
}
