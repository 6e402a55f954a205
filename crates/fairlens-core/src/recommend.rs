//! Mapping of detected issues to ranked mitigation actions.
//!
//! Rules fire independently in a fixed order; emission order defines display
//! priority and there is no cross-rule deduplication.

use fairlens_model::{
    DistributionResult, FairnessMetric, Impact, MetricStatus, MitigationKind, ProxyBias,
    Recommendation,
};

use crate::fairness::{CLASS_IMBALANCE, DEMOGRAPHIC_PARITY};

/// Generate mitigation recommendations from the analysis findings.
pub fn generate_recommendations(
    distributions: &[DistributionResult],
    metrics: &[FairnessMetric],
    proxy_biases: &[ProxyBias],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for dist in distributions {
        if dist.underrepresented.is_empty() {
            continue;
        }
        let groups = dist
            .underrepresented
            .iter()
            .map(|entry| entry.label.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        recommendations.push(Recommendation {
            title: format!("Oversample underrepresented groups in \"{}\"", dist.column),
            description: format!(
                "Groups [{groups}] are below the 10% threshold. Consider oversampling these \
                 groups using SMOTE or random oversampling to improve representation balance."
            ),
            impact: Impact::High,
            kind: MitigationKind::Oversample,
            target_column: Some(dist.column.clone()),
        });
    }

    for metric in metrics {
        if metric.name == DEMOGRAPHIC_PARITY && metric.status == MetricStatus::Poor {
            recommendations.push(Recommendation {
                title: format!("Re-weight samples for \"{}\"", metric.column),
                description: format!(
                    "High demographic parity difference ({:.3}) detected. Apply sample \
                     re-weighting to give underrepresented groups higher importance during \
                     model training.",
                    metric.value
                ),
                impact: Impact::High,
                kind: MitigationKind::Reweight,
                target_column: Some(metric.column.clone()),
            });
        }
    }

    for proxy in proxy_biases {
        recommendations.push(Recommendation {
            title: format!("Review or remove proxy column \"{}\"", proxy.column),
            description: format!(
                "\"{}\" has {:.0}% correlation with sensitive attribute \"{}\". Consider \
                 removing it or applying decorrelation to prevent indirect discrimination.",
                proxy.column,
                proxy.correlation * 100.0,
                proxy.sensitive_column
            ),
            impact: Impact::High,
            kind: MitigationKind::Remove,
            target_column: Some(proxy.column.clone()),
        });
    }

    for metric in metrics {
        if metric.name == CLASS_IMBALANCE && metric.status != MetricStatus::Good {
            recommendations.push(Recommendation {
                title: format!("Balance target variable \"{}\"", metric.column),
                description: format!(
                    "Class imbalance score of {:.3} detected. Use techniques like SMOTE, \
                     random undersampling, or stratified sampling to balance the target \
                     distribution.",
                    metric.value
                ),
                impact: if metric.status == MetricStatus::Poor {
                    Impact::High
                } else {
                    Impact::Medium
                },
                kind: MitigationKind::Undersample,
                target_column: Some(metric.column.clone()),
            });
        }
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            title: "Dataset appears fair".to_string(),
            description: "No significant bias issues detected. Continue monitoring as data \
                          evolves and consider regular audits."
                .to_string(),
            impact: Impact::Low,
            kind: MitigationKind::Transform,
            target_column: None,
        });
    }

    recommendations
}
