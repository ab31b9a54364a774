//! Tabular file ingestion.
//!
//! Decodes an uploaded spreadsheet into headers plus an untyped row
//! matrix. The format is detected from content, not extension: ZIP or
//! OLE magic routes to the workbook decoder, anything else is read as
//! CSV. Only the first sheet of a multi-sheet workbook is consulted.
//! No validation happens at ingest time; malformed rows pass through
//! unchanged and are dealt with at mapping time.

use anyhow::{Context, Result, anyhow};
use calamine::{Reader, open_workbook_auto_from_rs};
use log::{debug, warn};
use std::io::Cursor;
use std::path::Path;
use tokio::task;

/// Raw parsed dataset: first file row as headers, the rest as data.
/// The header row never appears in `rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpreadsheetDataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SpreadsheetDataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True when nothing usable was decoded.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabularFormat {
    /// XLSX/XLS/ODS, handed to calamine.
    Workbook,
    /// Anything without a workbook signature.
    Csv,
}

// ZIP local-file header (XLSX/ODS) and OLE compound file (legacy XLS).
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Sniff the tabular format from leading bytes.
pub fn detect_format(bytes: &[u8]) -> TabularFormat {
    if bytes.starts_with(&ZIP_MAGIC) || bytes.starts_with(&OLE_MAGIC) {
        TabularFormat::Workbook
    } else {
        TabularFormat::Csv
    }
}

/// Decode a byte buffer into a dataset.
pub fn decode(bytes: &[u8]) -> Result<SpreadsheetDataset> {
    match detect_format(bytes) {
        TabularFormat::Workbook => decode_workbook(bytes),
        TabularFormat::Csv => decode_csv(bytes),
    }
}

fn decode_workbook(bytes: &[u8]) -> Result<SpreadsheetDataset> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| anyhow!("Failed to open workbook: {}", e))?;

    let sheets = workbook.sheet_names().to_owned();
    let first_sheet = sheets
        .first()
        .ok_or_else(|| anyhow!("Workbook contains no sheets"))?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| anyhow!("Error reading sheet '{}': {}", first_sheet, e))?;

    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for (row_idx, row) in range.rows().enumerate() {
        let values: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();

        if row_idx == 0 {
            headers = values;
        } else {
            rows.push(values);
        }
    }

    Ok(SpreadsheetDataset { headers, rows })
}

fn decode_csv(bytes: &[u8]) -> Result<SpreadsheetDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut headers = Vec::new();
    let mut rows = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Malformed CSV at row {}", row_idx + 1))?;
        let values: Vec<String> = record.iter().map(|cell| cell.to_string()).collect();

        if row_idx == 0 {
            headers = values;
        } else {
            rows.push(values);
        }
    }

    Ok(SpreadsheetDataset { headers, rows })
}

/// Read and decode a tabular file off the interaction thread.
///
/// Decode failure yields an empty dataset (with a logged warning)
/// rather than an error; callers treat a dataset with no headers as
/// unreadable input and surface an inline message.
pub async fn load_dataset(path: &Path) -> SpreadsheetDataset {
    let owned = path.to_path_buf();
    let decoded = task::spawn_blocking(move || -> Result<SpreadsheetDataset> {
        let bytes = std::fs::read(&owned)
            .with_context(|| format!("Failed to read file: {:?}", owned))?;
        decode(&bytes)
    })
    .await;

    match decoded {
        Ok(Ok(dataset)) => {
            debug!(
                "Decoded {} columns x {} rows",
                dataset.column_count(),
                dataset.row_count()
            );
            dataset
        }
        Ok(Err(e)) => {
            warn!("Spreadsheet decode failed: {:#}", e);
            SpreadsheetDataset::default()
        }
        Err(e) => {
            warn!("Spreadsheet decode task panicked: {}", e);
            SpreadsheetDataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_magic_routes_to_workbook() {
        assert_eq!(detect_format(b"PK\x03\x04rest"), TabularFormat::Workbook);
    }

    #[test]
    fn test_ole_magic_routes_to_workbook() {
        let bytes = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1, 0x00];
        assert_eq!(detect_format(&bytes), TabularFormat::Workbook);
    }

    #[test]
    fn test_plain_text_routes_to_csv() {
        assert_eq!(detect_format(b"Phone,Src\n123,A\n"), TabularFormat::Csv);
    }

    #[test]
    fn test_csv_header_row_extracted() {
        let dataset = decode(b"Phone,Src\n123,A\n456,B\n").unwrap();
        assert_eq!(dataset.headers, vec!["Phone", "Src"]);
        assert_eq!(dataset.rows, vec![vec!["123", "A"], vec!["456", "B"]]);
    }

    #[test]
    fn test_header_row_never_in_rows() {
        let dataset = decode(b"Phone,Src\n123,A\n").unwrap();
        assert!(!dataset.rows.iter().any(|row| row == &dataset.headers));
    }

    #[test]
    fn test_quoted_csv_cells() {
        let dataset = decode(b"Phone,Src\n\"123\",\"Campaign, Q3\"\n").unwrap();
        assert_eq!(dataset.rows[0], vec!["123", "Campaign, Q3"]);
    }

    #[test]
    fn test_uneven_rows_pass_through() {
        let dataset = decode(b"Phone,Src\n123\n456,B,extra\n").unwrap();
        assert_eq!(dataset.rows[0], vec!["123"]);
        assert_eq!(dataset.rows[1], vec!["456", "B", "extra"]);
    }

    #[test]
    fn test_empty_input_yields_empty_dataset() {
        let dataset = decode(b"").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn test_corrupt_workbook_is_an_error() {
        // ZIP magic with a garbage body cannot be opened as a workbook.
        assert!(decode(b"PK\x03\x04 not actually a workbook").is_err());
    }
}
