//! Result reconciliation.
//!
//! Normalizes heterogeneous per-item service responses into ordered
//! display rows. Row *i* of the output corresponds to entry *i* of the
//! submitted batch; the reconciler never reorders, deduplicates, or
//! matches rows back by identifier — it trusts the service's
//! order-preservation contract.

use crate::api::models::{RecordItem, ResolutionItem};
use chrono::{DateTime, Utc};

/// Status the service implies when it omits one: the row was fetched,
/// not created on the fly.
pub const DEFAULT_STATUS: &str = "fetched";

/// One display row of a resolve result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRow {
    pub generated_id: String,
    pub link: Option<String>,
    pub status: String,
    pub error: Option<String>,
}

impl From<ResolutionItem> for ResolutionRow {
    fn from(item: ResolutionItem) -> Self {
        Self {
            generated_id: item.generated_id,
            link: item.link,
            status: item.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            error: item.error,
        }
    }
}

/// Single-result context: surface only the first item, if any.
pub fn single(results: Vec<ResolutionItem>) -> Option<ResolutionRow> {
    results.into_iter().next().map(ResolutionRow::from)
}

/// Bulk context: surface the entire response verbatim, index for index.
pub fn bulk(results: Vec<ResolutionItem>) -> Vec<ResolutionRow> {
    results.into_iter().map(ResolutionRow::from).collect()
}

/// One display row of a contact search table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub record_id: Option<i64>,
    pub contact_number: String,
    pub source_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub found: bool,
}

impl From<RecordItem> for RecordRow {
    fn from(item: RecordItem) -> Self {
        let found = item.error.is_none();
        Self {
            record_id: item.record_id,
            contact_number: item.contact_number,
            source_name: item.source_name,
            created_at: item.created_at,
            found,
        }
    }
}

/// Contact search context: every row displayed in server order,
/// absence marked per row rather than suppressed.
pub fn records(results: Vec<RecordItem>) -> Vec<RecordRow> {
    results.into_iter().map(RecordRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, link: Option<&str>, status: Option<&str>) -> ResolutionItem {
        ResolutionItem {
            generated_id: id.to_string(),
            link: link.map(|s| s.to_string()),
            status: status.map(|s| s.to_string()),
            error: None,
        }
    }

    #[test]
    fn test_single_takes_first_item() {
        let row = single(vec![
            item("PRB100", Some("https://x"), Some("fetched")),
            item("PRB101", None, None),
        ])
        .unwrap();
        assert_eq!(row.generated_id, "PRB100");
        assert_eq!(row.link.as_deref(), Some("https://x"));
        assert_eq!(row.status, "fetched");
        assert!(row.error.is_none());
    }

    #[test]
    fn test_single_empty_response() {
        assert!(single(Vec::new()).is_none());
    }

    #[test]
    fn test_bulk_preserves_length_and_order() {
        let rows = bulk(vec![
            item("PRB1", Some("https://a"), None),
            item("PRB2", None, Some("created")),
            item("PRB3", None, None),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].generated_id, "PRB1");
        assert_eq!(rows[1].generated_id, "PRB2");
        assert_eq!(rows[2].generated_id, "PRB3");
    }

    #[test]
    fn test_absent_status_defaults_to_fetched() {
        let rows = bulk(vec![item("PRB1", None, None)]);
        assert_eq!(rows[0].status, "fetched");
    }

    #[test]
    fn test_declared_status_kept_verbatim() {
        let rows = bulk(vec![item("PRB1", None, Some("created"))]);
        assert_eq!(rows[0].status, "created");
    }

    #[test]
    fn test_record_absence_marked_by_error() {
        let rows = records(vec![
            RecordItem {
                record_id: Some(7),
                contact_number: "123".to_string(),
                source_name: Some("A".to_string()),
                created_at: None,
                error: None,
            },
            RecordItem {
                record_id: None,
                contact_number: "456".to_string(),
                source_name: None,
                created_at: None,
                error: Some("not found".to_string()),
            },
        ]);
        assert!(rows[0].found);
        assert!(!rows[1].found);
        assert_eq!(rows[1].contact_number, "456");
    }
}
