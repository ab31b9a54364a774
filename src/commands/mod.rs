pub mod auth;
pub mod links;
pub mod records;
pub mod resolve;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read multi-line operator input from a file or, failing that, stdin.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {:?}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
