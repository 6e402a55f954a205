//! Immutable session and run-history snapshots.
//!
//! Every user action (load a table, pick sensitive columns, analyze) produces
//! a new session value instead of mutating shared state. History is an
//! append-only in-memory log; persisting it is out of scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, RiskLevel};
use crate::table::Table;

/// One append-only record of a completed analysis or simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    pub overall_score: u32,
    pub risk_level: RiskLevel,
    pub label: Option<String>,
}

/// Snapshot of one analysis session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub table: Option<Table>,
    pub file_name: Option<String>,
    pub sensitive_columns: Vec<String>,
    pub target_column: Option<String>,
    pub result: Option<AnalysisResult>,
    pub history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fresh table, clearing any previous result.
    #[must_use]
    pub fn with_table(&self, table: Table, file_name: impl Into<String>) -> Self {
        Session {
            table: Some(table),
            file_name: Some(file_name.into()),
            result: None,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_sensitive_columns(&self, columns: Vec<String>) -> Self {
        Session {
            sensitive_columns: columns,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_target_column(&self, column: Option<String>) -> Self {
        Session {
            target_column: column,
            ..self.clone()
        }
    }

    /// Record an analysis result and append a history entry for it.
    #[must_use]
    pub fn with_result(&self, result: AnalysisResult, label: Option<String>) -> Self {
        let entry = HistoryEntry {
            file_name: self.file_name.clone().unwrap_or_default(),
            timestamp: Utc::now(),
            overall_score: result.overall_score,
            risk_level: result.risk_level,
            label,
        };
        let mut history = self.history.clone();
        history.push(entry);
        Session {
            result: Some(result),
            history,
            ..self.clone()
        }
    }

    /// Clear the loaded dataset and result, keeping the history log.
    #[must_use]
    pub fn reset(&self) -> Self {
        Session {
            history: self.history.clone(),
            ..Session::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_history() {
        let session = Session::new().with_table(Table::default(), "data.csv");
        let mut entry_session = session.clone();
        entry_session.history.push(HistoryEntry {
            file_name: "data.csv".to_string(),
            timestamp: Utc::now(),
            overall_score: 88,
            risk_level: RiskLevel::Low,
            label: None,
        });
        let reset = entry_session.reset();
        assert!(reset.table.is_none());
        assert!(reset.file_name.is_none());
        assert_eq!(reset.history.len(), 1);
    }

    #[test]
    fn with_table_clears_previous_result() {
        let mut session = Session::new();
        session.result = None;
        let loaded = session.with_table(Table::default(), "a.csv");
        assert_eq!(loaded.file_name.as_deref(), Some("a.csv"));
        assert!(loaded.result.is_none());
    }
}
