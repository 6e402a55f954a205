//! Aggregation of findings into a single 0-100 fairness score.
//!
//! Linear unweighted penalty model with fixed deductions. Penalties are flat
//! and not scaled by effect size; the score is a screening aid, not a
//! calibrated probability.

use fairlens_model::{DistributionResult, FairnessMetric, MetricStatus, ProxyBias};

pub const POOR_METRIC_PENALTY: i64 = 12;
pub const MODERATE_METRIC_PENALTY: i64 = 6;
pub const PROXY_BIAS_PENALTY: i64 = 8;
pub const UNDERREPRESENTED_GROUP_PENALTY: i64 = 3;

/// Overall fairness score: start at 100, subtract fixed penalties, clamp to
/// [0, 100].
pub fn overall_score(
    metrics: &[FairnessMetric],
    proxy_biases: &[ProxyBias],
    distributions: &[DistributionResult],
) -> u32 {
    let mut score: i64 = 100;

    for metric in metrics {
        match metric.status {
            MetricStatus::Poor => score -= POOR_METRIC_PENALTY,
            MetricStatus::Moderate => score -= MODERATE_METRIC_PENALTY,
            MetricStatus::Good => {}
        }
    }

    score -= proxy_biases.len() as i64 * PROXY_BIAS_PENALTY;

    let underrepresented: usize = distributions.iter().map(|d| d.underrepresented.len()).sum();
    score -= underrepresented as i64 * UNDERREPRESENTED_GROUP_PENALTY;

    score.clamp(0, 100) as u32
}
