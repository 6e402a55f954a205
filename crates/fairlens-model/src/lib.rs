pub mod analysis;
pub mod profile;
pub mod session;
pub mod table;

pub use analysis::{
    AnalysisResult, CorrelationEntry, DistributionEntry, DistributionResult, FairnessMetric,
    GroupHighlight, Impact, MetricStatus, MitigationKind, ProxyBias, Recommendation, RiskLevel,
};
pub use profile::{ColumnProfile, ColumnType, DatasetSummary};
pub use session::{HistoryEntry, Session};
pub use table::{Row, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommendation_serializes() {
        let rec = Recommendation {
            title: "Oversample underrepresented groups in \"gender\"".to_string(),
            description: "Groups [F] are below the 10% threshold.".to_string(),
            impact: Impact::High,
            kind: MitigationKind::Oversample,
            target_column: Some("gender".to_string()),
        };
        let json = serde_json::to_string(&rec).expect("serialize recommendation");
        let round: Recommendation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, rec);
    }

    #[test]
    fn table_round_trips() {
        let mut table = Table::new(vec!["age".to_string(), "gender".to_string()]);
        table.push_row(Row::from_pairs([("age", "30"), ("gender", "F")]));
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: Table = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round, table);
    }
}
