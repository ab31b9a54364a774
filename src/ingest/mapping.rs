//! Operator-declared column mapping and row normalization.

use anyhow::{Result, anyhow, bail};
use serde::Serialize;

use super::spreadsheet::SpreadsheetDataset;

/// A record ready for the mapped bulk upload endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub contact_number: String,
    pub source_name: String,
}

/// Correspondence between spreadsheet header names and the canonical
/// record fields. Both selections are validated at submission time,
/// not at selection time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    pub contact_column: String,
    pub source_column: String,
}

impl ColumnMapping {
    pub fn validate(&self, headers: &[String]) -> Result<()> {
        if self.contact_column.is_empty() || self.source_column.is_empty() {
            bail!("Please map all required columns");
        }
        column_index(headers, &self.contact_column)?;
        column_index(headers, &self.source_column)?;
        Ok(())
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| anyhow!("Mapped column '{}' not found in file headers", name))
}

/// Project every raw row into a normalized record by locating the
/// mapped header names and reading the same-index cell from each row.
///
/// A mapped name absent from the headers is a validation failure
/// raised here, before any dispatch — never a silently empty cell.
/// Rows shorter than the header row yield empty values for the
/// missing cells.
pub fn normalize(
    dataset: &SpreadsheetDataset,
    mapping: &ColumnMapping,
) -> Result<Vec<NormalizedRecord>> {
    mapping.validate(&dataset.headers)?;

    let contact_idx = column_index(&dataset.headers, &mapping.contact_column)?;
    let source_idx = column_index(&dataset.headers, &mapping.source_column)?;

    Ok(dataset
        .rows
        .iter()
        .map(|row| NormalizedRecord {
            contact_number: row.get(contact_idx).cloned().unwrap_or_default(),
            source_name: row.get(source_idx).cloned().unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SpreadsheetDataset {
        SpreadsheetDataset {
            headers: vec!["Phone".to_string(), "Src".to_string()],
            rows: vec![
                vec!["123".to_string(), "A".to_string()],
                vec!["456".to_string(), "B".to_string()],
            ],
        }
    }

    #[test]
    fn test_projection_round_trip() {
        let mapping = ColumnMapping {
            contact_column: "Phone".to_string(),
            source_column: "Src".to_string(),
        };
        let records = normalize(&dataset(), &mapping).unwrap();
        assert_eq!(
            records,
            vec![
                NormalizedRecord {
                    contact_number: "123".to_string(),
                    source_name: "A".to_string(),
                },
                NormalizedRecord {
                    contact_number: "456".to_string(),
                    source_name: "B".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_reversed_column_order() {
        let mapping = ColumnMapping {
            contact_column: "Src".to_string(),
            source_column: "Phone".to_string(),
        };
        let records = normalize(&dataset(), &mapping).unwrap();
        assert_eq!(records[0].contact_number, "A");
        assert_eq!(records[0].source_name, "123");
    }

    #[test]
    fn test_unmapped_columns_rejected() {
        let mapping = ColumnMapping::default();
        let err = normalize(&dataset(), &mapping).unwrap_err();
        assert!(err.to_string().contains("map all required columns"));
    }

    #[test]
    fn test_unknown_column_rejected_by_name() {
        let mapping = ColumnMapping {
            contact_column: "Telephone".to_string(),
            source_column: "Src".to_string(),
        };
        let err = normalize(&dataset(), &mapping).unwrap_err();
        assert!(err.to_string().contains("Telephone"));
    }

    #[test]
    fn test_short_rows_yield_empty_cells() {
        let mut data = dataset();
        data.rows.push(vec!["789".to_string()]);

        let mapping = ColumnMapping {
            contact_column: "Phone".to_string(),
            source_column: "Src".to_string(),
        };
        let records = normalize(&data, &mapping).unwrap();
        assert_eq!(records[2].contact_number, "789");
        assert_eq!(records[2].source_name, "");
    }
}
