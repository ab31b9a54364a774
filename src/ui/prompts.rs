use anyhow::Result;
use dialoguer::{Input, Password, Select};

/// Interactive yes/no prompt using arrow-key navigable selection.
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_profile_name(default_name: Option<String>) -> Result<String> {
    if let Some(name) = default_name {
        Ok(name)
    } else {
        let name = Input::<String>::new()
            .with_prompt("Session profile name (e.g., 'production', 'test')")
            .interact()?;
        Ok(name)
    }
}

pub fn prompt_overwrite_confirmation(profile_name: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Session '{}' already exists. Overwrite?", profile_name),
        false // Default to "No" for safety
    )
}

pub fn prompt_delete_link_confirmation(link_id: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Delete link '{}'?", link_id),
        false // Default to "No" for safety
    )
}

/// Select one header name out of the ingested column headers.
pub fn prompt_column_selection(prompt: &str, headers: &[String]) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(headers)
        .interact()?;

    Ok(headers[selection].clone())
}

/// Text input prompt with an optional default value.
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new()
        .with_prompt(prompt);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact()?)
}

pub fn prompt_token() -> Result<String> {
    let token = Password::new()
        .with_prompt("Bearer token")
        .interact()?;
    Ok(token)
}
