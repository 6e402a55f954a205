use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use fairlens_model::{Row, Table};

use crate::error::{IngestError, Result};

/// A dataset read from a delimited file, ready for analysis.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    pub table: Table,
    pub file_name: String,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a header-first CSV file into a [`Table`].
///
/// The first record is taken as the header row. Fully-empty records are
/// skipped; short records pad out to the header width with missing cells.
/// Dialect and encoding concerns beyond BOM/whitespace normalization are out
/// of scope.
pub fn read_csv_table(path: &Path) -> Result<CsvDataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::read(path, source))?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::read(path, source))?;
        if columns.is_empty() {
            columns = record.iter().map(normalize_header).collect();
            continue;
        }
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Row::new();
        for (idx, column) in columns.iter().enumerate() {
            let value = record.get(idx).unwrap_or("");
            row.set(column.clone(), normalize_cell(value));
        }
        rows.push(row);
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    debug!(
        file = %file_name,
        columns = columns.len(),
        rows = rows.len(),
        "loaded csv dataset"
    );

    Ok(CsvDataset {
        table: Table { columns, rows },
        file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn header_first_parsing() {
        let file = write_csv("gender,age\nM,30\nF,25\n");
        let dataset = read_csv_table(file.path()).expect("read");
        assert_eq!(dataset.table.columns, vec!["gender", "age"]);
        assert_eq!(dataset.table.rows.len(), 2);
        assert_eq!(dataset.table.rows[0].value("gender"), Some("M"));
        assert_eq!(dataset.table.rows[1].value("age"), Some("25"));
    }

    #[test]
    fn bom_stripped_from_header() {
        let file = write_csv("\u{feff}gender,age\nM,30\n");
        let dataset = read_csv_table(file.path()).expect("read");
        assert_eq!(dataset.table.columns[0], "gender");
    }

    #[test]
    fn empty_records_skipped_and_short_rows_padded() {
        let file = write_csv("a,b\n1\n,\n2,3\n");
        let dataset = read_csv_table(file.path()).expect("read");
        assert_eq!(dataset.table.rows.len(), 2);
        assert_eq!(dataset.table.rows[0].value("a"), Some("1"));
        assert_eq!(dataset.table.rows[0].value("b"), None);
        assert_eq!(dataset.table.rows[1].value("b"), Some("3"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let error = read_csv_table(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(error.to_string().contains("data.csv"));
    }
}
