//! Command implementations for the FairLens CLI.

use anyhow::{Context, Result, bail};
use tracing::info;

use fairlens_assist::respond;
use fairlens_core::{AnalysisConfig, run_full_analysis, simulate_mitigation};
use fairlens_ingest::read_csv_table;
use fairlens_model::{AnalysisResult, Session};

use crate::cli::{AnalyzeArgs, AskArgs};

/// Everything `analyze` produces for rendering.
#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub file_name: String,
    pub result: AnalysisResult,
    pub session: Session,
    pub simulation: Option<SimulationSummary>,
}

/// Before/after scores of one simulated recommendation.
#[derive(Debug)]
pub struct SimulationSummary {
    pub recommendation_title: String,
    pub score_before: u32,
    pub score_after: u32,
    pub rows_before: usize,
    pub rows_after: usize,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let dataset = read_csv_table(&args.input)
        .with_context(|| format!("load dataset: {}", args.input.display()))?;
    validate_columns(&dataset.table.columns, &args.sensitive, args.target.as_deref())?;

    let table = dataset.table;
    let config = AnalysisConfig::new(args.sensitive.clone(), args.target.clone());
    info!(file = %dataset.file_name, "running analysis");
    let result = run_full_analysis(&table, &config);

    let simulation = match args.simulate {
        Some(index) => Some(simulate_by_index(&table, &config, &result, index)?),
        None => None,
    };

    let session = Session::new()
        .with_table(table, dataset.file_name.clone())
        .with_sensitive_columns(args.sensitive.clone())
        .with_target_column(args.target.clone())
        .with_result(result.clone(), args.label.clone());
    Ok(AnalyzeOutcome {
        file_name: dataset.file_name,
        result,
        session,
        simulation,
    })
}

fn simulate_by_index(
    table: &fairlens_model::Table,
    config: &AnalysisConfig,
    result: &AnalysisResult,
    index: usize,
) -> Result<SimulationSummary> {
    if index == 0 || index > result.recommendations.len() {
        bail!(
            "recommendation index {index} out of range (1..={})",
            result.recommendations.len()
        );
    }
    let recommendation = &result.recommendations[index - 1];
    let outcome = simulate_mitigation(table, config, recommendation);
    Ok(SimulationSummary {
        recommendation_title: recommendation.title.clone(),
        score_before: result.overall_score,
        score_after: outcome.score,
        rows_before: table.row_count(),
        rows_after: outcome.table.row_count(),
    })
}

pub fn run_ask(args: &AskArgs) -> Result<String> {
    let result = match &args.input {
        Some(path) => {
            let dataset = read_csv_table(path)
                .with_context(|| format!("load dataset: {}", path.display()))?;
            let config = AnalysisConfig::new(args.sensitive.clone(), args.target.clone());
            Some(run_full_analysis(&dataset.table, &config))
        }
        None => None,
    };
    Ok(respond(result.as_ref(), &args.query))
}

fn validate_columns(
    columns: &[String],
    sensitive: &[String],
    target: Option<&str>,
) -> Result<()> {
    for name in sensitive {
        if !columns.contains(name) {
            bail!("sensitive column not in dataset: {name}");
        }
    }
    if let Some(target) = target {
        if !columns.iter().any(|c| c == target) {
            bail!("target column not in dataset: {target}");
        }
    }
    Ok(())
}
