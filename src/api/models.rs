//! Wire types for the PRB service endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One item of a bulk resolve response, order-correlated with the
/// submitted batch. The service omits `status` for plain lookups and
/// may omit `link` when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionItem {
    #[serde(rename = "generatedId", default)]
    pub generated_id: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkResolveResponse {
    #[serde(default)]
    pub results: Vec<ResolutionItem>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Response of `POST /links/add`. A duplicate link is a normal
/// outcome carried in `error`, usually alongside the existing ID.
#[derive(Debug, Clone, Deserialize)]
pub struct AddLinkResponse {
    #[serde(rename = "generatedId", default)]
    pub generated_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A link held in the link console's local cache. Created and mutated
/// only through explicit operator action; never re-fetched from the
/// service after a local mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkEntity {
    pub link_id: String,
    pub link_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// One item of a contact search response. An absent record is
/// distinguishable only by a populated `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordItem {
    #[serde(default)]
    pub record_id: Option<i64>,
    pub contact_number: String,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordSearchResponse {
    #[serde(default)]
    pub results: Vec<RecordItem>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Aggregate outcome of a mapped bulk upload; the service returns no
/// per-row detail for this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadOutcome {
    pub message: String,
    #[serde(default)]
    pub count: Option<u64>,
}
