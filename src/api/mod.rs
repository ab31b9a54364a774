//! PRB service API module.
//!
//! Wire types, the pooled HTTP client, the issued bearer session, and
//! the single-attempt batch dispatch operations.

pub mod client;
pub mod dispatch;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use dispatch::{IDS_BULK_PATH, LINKS_BULK_PATH, resolve_request};
pub use models::{
    AddLinkResponse, BulkResolveResponse, LinkEntity, RecordItem, RecordSearchResponse,
    ResolutionItem, UploadOutcome,
};
pub use session::Session;
