//! Contact record search and mapped spreadsheet upload.

use anyhow::Result;
use log::error;
use std::path::Path;

use super::read_input;
use crate::api::models::UploadOutcome;
use crate::api::{ApiClient, Session};
use crate::core::classify;
use crate::core::reconcile::{self, RecordRow};
use crate::core::session::SubmissionSession;
use crate::ingest::mapping::{self, ColumnMapping};
use crate::ingest::spreadsheet::{self, SpreadsheetDataset};
use crate::ui::{prompt_column_selection, tables};

/// Search records by contact number, one per line.
pub async fn search_command(
    client: &ApiClient,
    session: &Session,
    file: Option<&Path>,
) -> Result<()> {
    let content = read_input(file)?;

    let mut view: SubmissionSession<Vec<RecordRow>> = SubmissionSession::new();
    run_search(client, session, &mut view, &content).await;

    if let Some(rows) = view.result() {
        tables::print_record_rows(rows);
    }
    if let Some(message) = view.message() {
        println!("{}", message);
    }
    Ok(())
}

async fn run_search(
    client: &ApiClient,
    session: &Session,
    view: &mut SubmissionSession<Vec<RecordRow>>,
    content: &str,
) {
    let contacts = classify::split_entries(content);
    if contacts.is_empty() {
        view.reject("Enter contact numbers");
        return;
    }

    let Some(token) = view.begin() else { return };

    match client.search_contacts(session, &contacts).await {
        Ok(response) => {
            if response.results.is_empty() {
                view.fail(token, "No records found");
            } else {
                view.succeed(token, reconcile::records(response.results), None);
            }
        }
        Err(e) => {
            error!("Contact search failed: {:#}", e);
            view.fail(token, "Search failed");
        }
    }
}

/// One spreadsheet upload session: the ingested dataset and the
/// operator's column mapping live exactly as long as the upload and
/// are discarded after a successful final submission.
struct UploadSession {
    dataset: SpreadsheetDataset,
    mapping: ColumnMapping,
    view: SubmissionSession<UploadOutcome>,
}

impl UploadSession {
    fn new(dataset: SpreadsheetDataset) -> Self {
        Self {
            dataset,
            mapping: ColumnMapping::default(),
            view: SubmissionSession::new(),
        }
    }

    fn clear_upload_state(&mut self) {
        self.dataset = SpreadsheetDataset::default();
        self.mapping = ColumnMapping::default();
    }
}

/// Ingest a spreadsheet, bind columns interactively, and submit every
/// normalized row as one mapped bulk upload.
pub async fn upload_command(client: &ApiClient, session: &Session, file: &Path) -> Result<()> {
    let dataset = spreadsheet::load_dataset(file).await;
    if dataset.is_empty() {
        println!("Could not read any columns from {:?}", file);
        return Ok(());
    }

    println!(
        "Parsed {} columns, {} rows",
        dataset.column_count(),
        dataset.row_count()
    );

    let mut upload = UploadSession::new(dataset);
    upload.mapping.contact_column =
        prompt_column_selection("Contact number column", &upload.dataset.headers)?;
    upload.mapping.source_column =
        prompt_column_selection("Source name column", &upload.dataset.headers)?;

    run_upload(client, session, &mut upload).await;

    if let Some(message) = upload.view.message() {
        println!("{}", message);
    }
    Ok(())
}

async fn run_upload(client: &ApiClient, session: &Session, upload: &mut UploadSession) {
    // Mapping problems are rejected before any request is made.
    let records = match mapping::normalize(&upload.dataset, &upload.mapping) {
        Ok(records) => records,
        Err(e) => {
            upload.view.reject(e.to_string());
            return;
        }
    };

    let Some(token) = upload.view.begin() else { return };

    match client.upload_records(session, &records).await {
        Ok(outcome) => {
            let message = outcome.message.clone();
            upload.view.succeed(token, outcome, Some(message));
            upload.clear_upload_state();
        }
        Err(e) => {
            error!("Mapped upload failed: {:#}", e);
            upload.view.fail(token, "Upload failed");
        }
    }
}
