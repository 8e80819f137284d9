/// CSV export of the analysis history. Embedded image data URLs are not exported.
use crate::model::AnalysisResult;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Serialize)]
struct Row<'a> {
    date: &'a str,
    disease: &'a str,
    confidence_percent: u32,
    treatment: &'a str,
}

/// Write `entries` as CSV (with header) to `writer`, in the given order.
pub fn write_history_csv<W: Write>(
    writer: W,
    entries: &[AnalysisResult],
) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for e in entries {
        wtr.serialize(Row {
            date: &e.date,
            disease: &e.disease,
            confidence_percent: (e.confidence * 100.0).round() as u32,
            treatment: &e.treatment,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the history to a CSV file at `path`, replacing any existing file.
pub fn export_history_csv(path: &Path, entries: &[AnalysisResult]) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_history_csv(std::io::BufWriter::new(file), entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FINDINGS;

    fn entry(i: usize) -> AnalysisResult {
        AnalysisResult {
            disease: FINDINGS[i].disease.into(),
            confidence: FINDINGS[i].confidence,
            treatment: FINDINGS[i].treatment.into(),
            date: format!("2025-01-0{}T08:00:00.000Z", i + 1),
            image: "data:image/png;base64,AAAA".into(),
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_history_csv(&mut buf, &[entry(0), entry(2)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,disease,confidence_percent,treatment");
        assert!(lines[1].starts_with("2025-01-01T08:00:00.000Z,Leaf Blight,92,"));
        assert!(lines[2].starts_with("2025-01-03T08:00:00.000Z,Leaf Rust,90,"));
        assert!(!text.contains("base64"));
    }

    #[test]
    fn test_treatment_with_commas_is_quoted() {
        let mut buf = Vec::new();
        write_history_csv(&mut buf, &[entry(1)]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Increase spacing, water early"));
    }

    #[test]
    fn test_export_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("history.csv");
        export_history_csv(&path, &[entry(3)]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Bacterial Leaf Spot,86,"));
    }
}
