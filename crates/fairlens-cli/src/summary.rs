//! Human-readable report rendering with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fairlens_core::SENSITIVE_PATTERNS;
use fairlens_core::profiler::MatchKind;
use fairlens_model::{AnalysisResult, Impact, MetricStatus};

use crate::commands::{AnalyzeOutcome, SimulationSummary};

pub fn print_report(outcome: &AnalyzeOutcome) {
    let result = &outcome.result;
    println!("Dataset: {}", outcome.file_name);
    println!(
        "Rows: {}  Columns: {}  Missing values: {}",
        result.summary.total_rows, result.summary.total_columns, result.summary.missing_values
    );
    println!(
        "Fairness score: {}/100 ({} risk)",
        result.overall_score,
        result.risk_level.as_str()
    );
    println!();

    print_columns_table(result);
    print_metrics_table(result);
    print_proxy_table(result);
    print_recommendations_table(result);

    if let Some(simulation) = &outcome.simulation {
        print_simulation(simulation);
    }

    if let Some(entry) = outcome.session.history.last() {
        println!();
        match &entry.label {
            Some(label) => println!("Recorded as \"{label}\" at {}", entry.timestamp.to_rfc3339()),
            None => println!("Recorded at {}", entry.timestamp.to_rfc3339()),
        }
    }
}

fn print_columns_table(result: &AnalysisResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Unique"),
        header_cell("Missing"),
        header_cell("Sensitive"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for profile in &result.summary.columns {
        table.add_row(vec![
            Cell::new(&profile.name).add_attribute(Attribute::Bold),
            Cell::new(profile.column_type.as_str()),
            Cell::new(profile.unique_values),
            Cell::new(profile.missing_count),
            sensitive_cell(profile.is_sensitive),
            match &profile.sensitive_reason {
                Some(reason) => Cell::new(reason),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

fn print_metrics_table(result: &AnalysisResult) {
    if result.fairness_metrics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for metric in &result.fairness_metrics {
        table.add_row(vec![
            Cell::new(&metric.name),
            Cell::new(&metric.column),
            Cell::new(format!("{:.3}", metric.value)),
            status_cell(metric.status),
        ]);
    }
    println!();
    println!("Fairness metrics:");
    println!("{table}");
}

fn print_proxy_table(result: &AnalysisResult) {
    if result.proxy_biases.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Sensitive attribute"),
        header_cell("Correlation"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for proxy in &result.proxy_biases {
        table.add_row(vec![
            Cell::new(&proxy.column).fg(Color::Red),
            Cell::new(&proxy.sensitive_column),
            Cell::new(format!("{:.2}", proxy.correlation))
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!();
    println!("Proxy biases:");
    println!("{table}");
}

fn print_recommendations_table(result: &AnalysisResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Impact"),
        header_cell("Recommendation"),
        header_cell("Details"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Center);
    for (index, rec) in result.recommendations.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            impact_cell(rec.impact),
            Cell::new(&rec.title).add_attribute(Attribute::Bold),
            Cell::new(&rec.description),
        ]);
    }
    println!();
    println!("Recommendations:");
    println!("{table}");
}

fn print_simulation(simulation: &SimulationSummary) {
    println!();
    println!("Simulated: {}", simulation.recommendation_title);
    println!(
        "Rows: {} -> {}  Score: {}/100 -> {}/100",
        simulation.rows_before,
        simulation.rows_after,
        simulation.score_before,
        simulation.score_after
    );
}

pub fn print_patterns() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patterns"),
        header_cell("Match"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    for pattern in SENSITIVE_PATTERNS {
        table.add_row(vec![
            Cell::new(pattern.stems.join(", ")).add_attribute(Attribute::Bold),
            Cell::new(match pattern.kind {
                MatchKind::WholeToken => "whole token",
                MatchKind::TokenPrefix => "token prefix",
            }),
            Cell::new(pattern.reason),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn sensitive_cell(is_sensitive: bool) -> Cell {
    if is_sensitive {
        Cell::new("yes")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("no")
    }
}

fn status_cell(status: MetricStatus) -> Cell {
    match status {
        MetricStatus::Good => Cell::new("GOOD").fg(Color::Green),
        MetricStatus::Moderate => Cell::new("MODERATE").fg(Color::Yellow),
        MetricStatus::Poor => Cell::new("POOR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn impact_cell(impact: Impact) -> Cell {
    match impact {
        Impact::High => Cell::new("HIGH").fg(Color::Red),
        Impact::Medium => Cell::new("MEDIUM").fg(Color::Yellow),
        Impact::Low => Cell::new("LOW").fg(Color::Green),
    }
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}
