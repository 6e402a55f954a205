use serde::{Deserialize, Serialize};

/// Inferred type of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Categorical,
    Numerical,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Categorical => "categorical",
            ColumnType::Numerical => "numerical",
        }
    }
}

/// Per-column profile derived from one analysis run.
///
/// Never persisted on the table itself; each run recomputes profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    pub column_type: ColumnType,
    /// Distinct non-missing values, by exact string equality.
    pub unique_values: usize,
    pub missing_count: usize,
    pub is_sensitive: bool,
    /// Why the column was flagged sensitive, when it was.
    pub sensitive_reason: Option<String>,
}

/// Dataset-level summary included in every analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub missing_values: usize,
    pub columns: Vec<ColumnProfile>,
}
