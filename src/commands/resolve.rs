//! Single and bulk resolution against the lookup endpoints.

use anyhow::Result;
use log::error;
use std::path::Path;

use super::read_input;
use crate::api::{ApiClient, Session};
use crate::core::classify;
use crate::core::reconcile::{self, ResolutionRow};
use crate::core::session::SubmissionSession;
use crate::ui::tables;

/// Resolve a single PRB ID or link and surface the first result.
pub async fn search_command(client: &ApiClient, session: &Session, query: &str) -> Result<()> {
    let mut view: SubmissionSession<ResolutionRow> = SubmissionSession::new();
    run_search(client, session, &mut view, query).await;

    if let Some(row) = view.result() {
        tables::print_resolution_result(row);
    }
    if let Some(message) = view.message() {
        println!("{}", message);
    }
    Ok(())
}

async fn run_search(
    client: &ApiClient,
    session: &Session,
    view: &mut SubmissionSession<ResolutionRow>,
    query: &str,
) {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        view.reject("Enter a PRB ID or Link");
        return;
    }

    let Some(token) = view.begin() else { return };

    let batch = match classify::classify(vec![trimmed.to_string()]) {
        Ok(batch) => batch,
        Err(_) => {
            view.fail(token, "Enter a PRB ID or Link");
            return;
        }
    };

    match client.bulk_resolve(session, &batch).await {
        Ok(response) => match reconcile::single(response.results) {
            Some(row) => {
                view.succeed(token, row, None);
            }
            None => {
                view.fail(token, "No result found");
            }
        },
        Err(e) => {
            error!("Search failed: {:#}", e);
            view.fail(token, "Backend error");
        }
    }
}

/// Resolve a pasted batch, one entry per line, and print the full
/// result table.
pub async fn bulk_command(
    client: &ApiClient,
    session: &Session,
    file: Option<&Path>,
) -> Result<()> {
    let content = read_input(file)?;

    let mut view: SubmissionSession<Vec<ResolutionRow>> = SubmissionSession::new();
    run_bulk(client, session, &mut view, &content).await;

    if let Some(rows) = view.result() {
        tables::print_resolution_rows(rows);
    }
    if let Some(message) = view.message() {
        println!("{}", message);
    }
    Ok(())
}

async fn run_bulk(
    client: &ApiClient,
    session: &Session,
    view: &mut SubmissionSession<Vec<ResolutionRow>>,
    content: &str,
) {
    let entries = classify::split_entries(content);
    if entries.is_empty() {
        view.reject("Please enter bulk data");
        return;
    }

    let Some(token) = view.begin() else { return };

    let batch = match classify::classify(entries) {
        Ok(batch) => batch,
        Err(_) => {
            view.fail(token, "Please enter bulk data");
            return;
        }
    };

    match client.bulk_resolve(session, &batch).await {
        Ok(response) => {
            let count = response.count.unwrap_or(response.results.len() as u64);
            let rows = reconcile::bulk(response.results);
            view.succeed(token, rows, Some(format!("Processed {} records", count)));
        }
        Err(e) => {
            error!("Bulk resolve failed: {:#}", e);
            view.fail(token, "Bulk request failed");
        }
    }
}
