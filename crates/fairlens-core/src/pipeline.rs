//! The composed analysis pipeline.
//!
//! One evaluation function chains profiling, distributions, correlation,
//! proxy detection, fairness metrics and scoring. It is reused verbatim by
//! the mitigation simulator, so the initial run and every simulated re-run
//! share the same stage sequence.

use fairlens_model::{
    AnalysisResult, ColumnProfile, CorrelationEntry, DatasetSummary, DistributionResult,
    FairnessMetric, GroupHighlight, MetricStatus, ProxyBias, RiskLevel, Table,
};
use tracing::{debug, info};

use crate::correlation::correlation_matrix;
use crate::distribution::analyze_distribution;
use crate::fairness::fairness_metrics;
use crate::profiler::profile_columns;
use crate::proxy::detect_proxy_bias;
use crate::recommend::generate_recommendations;
use crate::scoring::overall_score;

/// Caller-supplied analysis configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    pub sensitive_columns: Vec<String>,
    pub target_column: Option<String>,
}

impl AnalysisConfig {
    pub fn new(sensitive_columns: Vec<String>, target_column: Option<String>) -> Self {
        Self {
            sensitive_columns,
            target_column,
        }
    }
}

/// Output of the core evaluation stages, before recommendations and
/// highlights are derived.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub profiles: Vec<ColumnProfile>,
    pub distributions: Vec<DistributionResult>,
    pub correlations: Vec<CorrelationEntry>,
    pub proxy_biases: Vec<ProxyBias>,
    pub fairness_metrics: Vec<FairnessMetric>,
    pub score: u32,
}

/// Run the evaluation stages over a table.
///
/// Sensitive columns absent from the table are dropped up front, so a
/// mutated table that lost columns degrades to empty findings instead of
/// erroring.
pub fn evaluate(table: &Table, config: &AnalysisConfig) -> Evaluation {
    let profiles = profile_columns(table);
    let active_sensitive: Vec<String> = config
        .sensitive_columns
        .iter()
        .filter(|name| profiles.iter().any(|p| p.name == **name))
        .cloned()
        .collect();
    debug!(
        rows = table.row_count(),
        columns = profiles.len(),
        sensitive = active_sensitive.len(),
        "evaluating table"
    );

    let distributions: Vec<DistributionResult> = active_sensitive
        .iter()
        .map(|name| {
            let column_type = profiles
                .iter()
                .find(|p| &p.name == name)
                .map(|p| p.column_type)
                .unwrap_or(fairlens_model::ColumnType::Categorical);
            analyze_distribution(table, name, column_type)
        })
        .collect();

    let correlations = correlation_matrix(table, &profiles);
    let proxy_biases = detect_proxy_bias(&correlations, &active_sensitive, &profiles);
    let metrics = fairness_metrics(
        table,
        &profiles,
        &active_sensitive,
        config.target_column.as_deref(),
    );
    let score = overall_score(&metrics, &proxy_biases, &distributions);

    Evaluation {
        profiles,
        distributions,
        correlations,
        proxy_biases,
        fairness_metrics: metrics,
        score,
    }
}

/// Full analysis entry point: evaluation plus recommendations and derived
/// highlights, packaged as an immutable result snapshot.
pub fn run_full_analysis(table: &Table, config: &AnalysisConfig) -> AnalysisResult {
    let evaluation = evaluate(table, config);
    let Evaluation {
        profiles,
        distributions,
        correlations,
        proxy_biases,
        fairness_metrics: metrics,
        score,
    } = evaluation;

    let missing_values = profiles.iter().map(|p| p.missing_count).sum();
    let summary = DatasetSummary {
        total_rows: table.row_count(),
        total_columns: table.column_count(),
        missing_values,
        columns: profiles,
    };

    let recommendations = generate_recommendations(&distributions, &metrics, &proxy_biases);
    let most_biased_column = most_biased_column(&metrics, config, table);
    let most_underrepresented_group = most_underrepresented_group(&distributions);
    let risk_level = RiskLevel::from_score(score);

    info!(
        score,
        risk = risk_level.as_str(),
        proxies = proxy_biases.len(),
        recommendations = recommendations.len(),
        "analysis complete"
    );

    AnalysisResult {
        summary,
        overall_score: score,
        risk_level,
        distributions,
        correlations,
        proxy_bias_detected: !proxy_biases.is_empty(),
        proxy_biases,
        fairness_metrics: metrics,
        recommendations,
        most_biased_column,
        most_underrepresented_group,
    }
}

/// First poor metric's column, falling back to the first sensitive column,
/// then the first table column.
fn most_biased_column(
    metrics: &[FairnessMetric],
    config: &AnalysisConfig,
    table: &Table,
) -> Option<String> {
    metrics
        .iter()
        .find(|m| m.status == MetricStatus::Poor)
        .map(|m| m.column.clone())
        .or_else(|| config.sensitive_columns.first().cloned())
        .or_else(|| table.columns.first().cloned())
}

/// The flagged entry with the smallest share; when nothing is flagged, the
/// last entry of the first distribution stands in.
fn most_underrepresented_group(distributions: &[DistributionResult]) -> Option<GroupHighlight> {
    let mut best: Option<GroupHighlight> = None;
    for dist in distributions {
        for entry in &dist.underrepresented {
            let replace = match &best {
                Some(current) => entry.percentage < current.percentage,
                None => true,
            };
            if replace {
                best = Some(GroupHighlight {
                    column: dist.column.clone(),
                    group: entry.label.clone(),
                    percentage: entry.percentage,
                });
            }
        }
    }
    best.or_else(|| {
        let first = distributions.first()?;
        let last = first.distribution.last()?;
        Some(GroupHighlight {
            column: first.column.clone(),
            group: last.label.clone(),
            percentage: last.percentage,
        })
    })
}
