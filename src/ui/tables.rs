//! Plain-terminal tables for reconciled result rows.

use colored::Colorize;

use crate::api::models::LinkEntity;
use crate::core::reconcile::{RecordRow, ResolutionRow};

/// Bulk resolve output: one row per submitted entry, in entry order.
pub fn print_resolution_rows(rows: &[ResolutionRow]) {
    println!("{:<50} {:<15} {:<10}", "Link", "Generated ID", "Status");
    println!("{}", "-".repeat(77));

    for row in rows {
        let link = row.link.as_deref().unwrap_or("Not Found");
        let status = if row.status == "created" {
            row.status.as_str().green()
        } else {
            row.status.as_str().blue()
        };
        println!("{:<50} {:<15} {}", link, row.generated_id, status);

        if let Some(error) = &row.error {
            println!("    {} {}", "error:".red(), error);
        }
    }
}

/// Single-search output.
pub fn print_resolution_result(row: &ResolutionRow) {
    println!("Generated ID: {}", row.generated_id);
    println!(
        "Link: {}",
        row.link.as_deref().unwrap_or("Not Found")
    );
}

pub fn print_record_rows(rows: &[RecordRow]) {
    println!(
        "{:<10} {:<16} {:<20} {:<22} {:<10}",
        "Record ID", "Contact", "Source", "Created", "Status"
    );
    println!("{}", "-".repeat(80));

    for row in rows {
        let record_id = row
            .record_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let source = row.source_name.as_deref().unwrap_or("-");
        let created = row
            .created_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        let status = if row.found {
            "Found".green()
        } else {
            "Not Found".red()
        };
        println!(
            "{:<10} {:<16} {:<20} {:<22} {}",
            record_id, row.contact_number, source, created, status
        );
    }
}

pub fn print_links(links: &[LinkEntity]) {
    if links.is_empty() {
        println!("No links added yet.");
        return;
    }

    for link in links {
        let created = link
            .created_at
            .map(|ts| format!(" ({})", ts.format("%Y-%m-%d %H:%M:%S")))
            .unwrap_or_default();
        println!("{}  {}{}", link.link_id.as_str().cyan(), link.link_url, created);
    }
}
