use serde::{Deserialize, Serialize};

use crate::profile::{ColumnType, DatasetSummary};

/// One label (category or histogram bin) within a column's distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
    /// Share of the column's non-missing values, 0.0 to 1.0.
    pub percentage: f64,
}

/// Frequency distribution of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    pub column: String,
    pub column_type: ColumnType,
    pub distribution: Vec<DistributionEntry>,
    /// Entries with a share strictly below the 10% threshold.
    ///
    /// Always empty for numerical columns.
    pub underrepresented: Vec<DistributionEntry>,
}

/// One directed cell of the correlation matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub col1: String,
    pub col2: String,
    /// Pearson r, rounded to two decimals; always within [-1, 1].
    pub value: f64,
}

/// A non-sensitive column strongly correlated with a sensitive one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyBias {
    pub column: String,
    pub sensitive_column: String,
    pub correlation: f64,
    pub explanation: String,
}

/// Qualitative bucket for a fairness metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Moderate,
    Poor,
}

impl MetricStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricStatus::Good => "good",
            MetricStatus::Moderate => "moderate",
            MetricStatus::Poor => "poor",
        }
    }
}

/// A single computed fairness metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessMetric {
    pub name: String,
    pub column: String,
    /// Metric value rounded to three decimals.
    pub value: f64,
    pub status: MetricStatus,
    pub explanation: String,
}

/// Expected impact of a mitigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::High => "high",
            Impact::Medium => "medium",
            Impact::Low => "low",
        }
    }
}

/// Kind of mitigation a recommendation proposes.
///
/// Only `Oversample`, `Undersample` and `Remove` materialize as table
/// mutations in the simulator; the rest are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MitigationKind {
    Oversample,
    Undersample,
    Reweight,
    Remove,
    Transform,
}

impl MitigationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MitigationKind::Oversample => "oversample",
            MitigationKind::Undersample => "undersample",
            MitigationKind::Reweight => "reweight",
            MitigationKind::Remove => "remove",
            MitigationKind::Transform => "transform",
        }
    }
}

/// A ranked mitigation action; emission order defines display priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub kind: MitigationKind,
    pub target_column: Option<String>,
}

/// Risk tier derived from the overall score via fixed thresholds (75, 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Bucket a 0-100 score into a risk tier.
    pub fn from_score(score: u32) -> Self {
        if score >= 75 {
            RiskLevel::Low
        } else if score >= 50 {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// The most underrepresented group across the analyzed distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupHighlight {
    pub column: String,
    pub group: String,
    pub percentage: f64,
}

/// Immutable snapshot of one full analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: DatasetSummary,
    pub overall_score: u32,
    pub risk_level: RiskLevel,
    pub distributions: Vec<DistributionResult>,
    pub correlations: Vec<CorrelationEntry>,
    pub proxy_biases: Vec<ProxyBias>,
    pub fairness_metrics: Vec<FairnessMetric>,
    pub recommendations: Vec<Recommendation>,
    pub most_biased_column: Option<String>,
    pub most_underrepresented_group: Option<GroupHighlight>,
    pub proxy_bias_detected: bool,
}
