//! Batch dispatch to the PRB service.
//!
//! Every operation makes exactly one attempt: transport failures and
//! non-success statuses are reported to the caller without retry, so a
//! bulk mutation is never silently resubmitted.

use anyhow::{Context, Result, bail};
use log::{debug, error};
use serde_json::{Value, json};

use super::client::ApiClient;
use super::models::{
    AddLinkResponse, BulkResolveResponse, RecordSearchResponse, UploadOutcome,
};
use super::session::Session;
use crate::core::classify::{ClassifiedBatch, LookupMode};
use crate::ingest::mapping::NormalizedRecord;

pub const IDS_BULK_PATH: &str = "/fetch/by-ids-bulk";
pub const LINKS_BULK_PATH: &str = "/fetch/by-links-bulk";

/// Build the single outbound request implied by a classified batch.
///
/// The endpoint and body field name are chosen once from the batch
/// mode, never per entry, and the entries travel in original order.
pub fn resolve_request(batch: &ClassifiedBatch) -> (&'static str, Value) {
    match batch.mode {
        LookupMode::Id => (IDS_BULK_PATH, json!({ "prb_ids": batch.entries })),
        LookupMode::Link => (LINKS_BULK_PATH, json!({ "links": batch.entries })),
    }
}

impl ApiClient {
    async fn post(&self, session: &Session, path: &str, body: &Value) -> Result<reqwest::Response> {
        self.http_client()
            .post(session.endpoint(path))
            .bearer_auth(session.bearer_token())
            .json(body)
            .send()
            .await
            .with_context(|| format!("request to {} failed", path))
    }

    /// Resolve a classified batch in one bulk request.
    pub async fn bulk_resolve(
        &self,
        session: &Session,
        batch: &ClassifiedBatch,
    ) -> Result<BulkResolveResponse> {
        let (path, payload) = resolve_request(batch);
        debug!("Dispatching {} entries to {}", batch.entries.len(), path);

        let response = self.post(session, path, &payload).await?;
        let status = response.status();
        if !status.is_success() {
            error!("Bulk resolve returned {}", status);
            bail!("bulk resolve failed with status {}", status);
        }

        Ok(response.json().await.context("malformed resolve response")?)
    }

    /// Register a new link. A duplicate is a normal outcome: the
    /// service answers with `error` (and usually the existing ID) in
    /// the body, so the body is parsed regardless of HTTP status.
    pub async fn add_link(&self, session: &Session, link: &str) -> Result<AddLinkResponse> {
        debug!("Adding link");
        let response = self.post(session, "/links/add", &json!({ "link": link })).await?;

        let status = response.status();
        match response.json::<AddLinkResponse>().await {
            Ok(body) => Ok(body),
            Err(e) if status.is_success() => Err(e).context("malformed add-link response"),
            Err(_) => {
                error!("Add link returned {}", status);
                bail!("add link failed with status {}", status)
            }
        }
    }

    pub async fn update_link(&self, session: &Session, link_id: &str, link: &str) -> Result<()> {
        debug!("Updating link {}", link_id);
        let response = self
            .http_client()
            .put(session.endpoint(&format!("/links/update/{}", link_id)))
            .bearer_auth(session.bearer_token())
            .json(&json!({ "link": link }))
            .send()
            .await
            .context("update request failed")?;

        if !response.status().is_success() {
            error!("Update link {} returned {}", link_id, response.status());
            bail!("update failed with status {}", response.status());
        }
        Ok(())
    }

    pub async fn delete_link(&self, session: &Session, link_id: &str) -> Result<()> {
        debug!("Deleting link {}", link_id);
        let response = self
            .http_client()
            .delete(session.endpoint(&format!("/links/delete/{}", link_id)))
            .bearer_auth(session.bearer_token())
            .send()
            .await
            .context("delete request failed")?;

        if !response.status().is_success() {
            error!("Delete link {} returned {}", link_id, response.status());
            bail!("delete failed with status {}", response.status());
        }
        Ok(())
    }

    /// Search contact records in one bulk request, order preserved.
    pub async fn search_contacts(
        &self,
        session: &Session,
        contact_numbers: &[String],
    ) -> Result<RecordSearchResponse> {
        debug!("Searching {} contact numbers", contact_numbers.len());
        let payload = json!({ "contact_numbers": contact_numbers });

        let response = self.post(session, "/records/fetch-by-contacts", &payload).await?;
        let status = response.status();
        if !status.is_success() {
            // The service may carry a reason in the body.
            let reason = response
                .json::<RecordSearchResponse>()
                .await
                .ok()
                .and_then(|body| body.error);
            error!("Contact search returned {}: {:?}", status, reason);
            bail!(reason.unwrap_or_else(|| format!("contact search failed with status {}", status)));
        }

        Ok(response.json().await.context("malformed search response")?)
    }

    /// Submit all normalized records as one mapped bulk upload.
    pub async fn upload_records(
        &self,
        session: &Session,
        records: &[NormalizedRecord],
    ) -> Result<UploadOutcome> {
        debug!("Uploading {} mapped records", records.len());
        let payload = json!({ "records": records });

        let response = self.post(session, "/records/upload-mapped", &payload).await?;
        if !response.status().is_success() {
            error!("Mapped upload returned {}", response.status());
            bail!("upload failed with status {}", response.status());
        }

        Ok(response.json().await.context("malformed upload response")?)
    }
}
