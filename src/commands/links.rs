//! Interactive link management console.
//!
//! The console holds a local cache of links touched this session.
//! Mutations are applied optimistically after the service accepts
//! them; the cache is never refreshed from the server.

use anyhow::Result;
use chrono::Utc;
use dialoguer::Select;
use log::error;

use crate::api::models::{AddLinkResponse, LinkEntity};
use crate::api::{ApiClient, Session};
use crate::core::session::SubmissionSession;
use crate::ui::{prompt_delete_link_confirmation, tables, prompts};

pub async fn console_command(client: &ApiClient, session: &Session) -> Result<()> {
    let mut console = LinkConsole::new();

    loop {
        let items = ["List links", "Add link", "Edit link", "Delete link", "Quit"];
        let selection = Select::new()
            .with_prompt("Link management")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => tables::print_links(&console.links),
            1 => console.add(client, session).await?,
            2 => console.edit(client, session).await?,
            3 => console.delete(client, session).await?,
            _ => break,
        }

        if let Some(message) = console.view.message() {
            println!("{}", message);
        }
    }

    Ok(())
}

struct LinkConsole {
    links: Vec<LinkEntity>,
    view: SubmissionSession<()>,
}

impl LinkConsole {
    fn new() -> Self {
        Self {
            links: Vec::new(),
            view: SubmissionSession::new(),
        }
    }

    /// Pick one cached link by index, newest first.
    fn pick(&self, prompt: &str) -> Result<Option<usize>> {
        if self.links.is_empty() {
            println!("No links added yet.");
            return Ok(None);
        }

        let items: Vec<String> = self
            .links
            .iter()
            .map(|link| format!("{}  {}", link.link_id, link.link_url))
            .collect();

        let selection = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .interact()?;

        Ok(Some(selection))
    }

    async fn add(&mut self, client: &ApiClient, session: &Session) -> Result<()> {
        let link_input = prompts::text_input("Link URL", None)?;
        let link_url = link_input.trim();
        if link_url.is_empty() {
            self.view.reject("Enter a link URL");
            return Ok(());
        }

        let Some(token) = self.view.begin() else { return Ok(()) };

        match client.add_link(session, link_url).await {
            Ok(body) => match interpret_add(body, link_url) {
                Some((entity, message)) => {
                    if let Some(entity) = entity {
                        self.links.insert(0, entity);
                    }
                    self.view.succeed(token, (), Some(message));
                }
                None => {
                    self.view.fail(token, "✗ Operation failed");
                }
            },
            Err(e) => {
                error!("Add link failed: {:#}", e);
                self.view.fail(token, "✗ Operation failed");
            }
        }
        Ok(())
    }

    async fn edit(&mut self, client: &ApiClient, session: &Session) -> Result<()> {
        let Some(index) = self.pick("Edit which link?")? else {
            return Ok(());
        };

        let new_url_input = prompts::text_input("New URL", Some(&self.links[index].link_url))?;
        let new_url = new_url_input.trim();
        if new_url.is_empty() {
            self.view.reject("Enter a link URL");
            return Ok(());
        }

        let Some(token) = self.view.begin() else { return Ok(()) };

        match client
            .update_link(session, &self.links[index].link_id, new_url)
            .await
        {
            Ok(()) => {
                self.links[index].link_url = new_url.to_string();
                self.view
                    .succeed(token, (), Some("✓ Link updated successfully".to_string()));
            }
            Err(e) => {
                error!("Update link failed: {:#}", e);
                self.view.fail(token, "✗ Operation failed");
            }
        }
        Ok(())
    }

    async fn delete(&mut self, client: &ApiClient, session: &Session) -> Result<()> {
        let Some(index) = self.pick("Delete which link?")? else {
            return Ok(());
        };

        if !prompt_delete_link_confirmation(&self.links[index].link_id)? {
            return Ok(());
        }

        let Some(token) = self.view.begin() else { return Ok(()) };

        match client.delete_link(session, &self.links[index].link_id).await {
            Ok(()) => {
                self.links.remove(index);
                self.view
                    .succeed(token, (), Some("✓ Link deleted successfully".to_string()));
            }
            Err(e) => {
                error!("Delete link failed: {:#}", e);
                self.view.fail(token, "✗ Delete failed");
            }
        }
        Ok(())
    }
}

/// Turn an add-link response into the cache entry to install (if any)
/// and the operator message. A duplicate is a normal outcome: it
/// produces a message but never a cache entry.
fn interpret_add(body: AddLinkResponse, link_url: &str) -> Option<(Option<LinkEntity>, String)> {
    if let Some(err) = body.error {
        let id = body.generated_id.unwrap_or_else(|| "Exists".to_string());
        return Some((None, format!("⚠ {} (ID: {})", err, id)));
    }

    let id = body.generated_id?;
    let entity = LinkEntity {
        link_id: id.clone(),
        link_url: link_url.to_string(),
        created_at: Some(Utc::now()),
    };
    Some((Some(entity), format!("✓ Link added with ID {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_add_yields_message_and_no_entity() {
        let body = AddLinkResponse {
            generated_id: Some("PRB007".to_string()),
            error: Some("duplicate".to_string()),
        };

        let (entity, message) = interpret_add(body, "https://example.com").unwrap();
        assert!(entity.is_none());
        assert_eq!(message, "⚠ duplicate (ID: PRB007)");
    }

    #[test]
    fn test_successful_add_installs_entity() {
        let body = AddLinkResponse {
            generated_id: Some("PRB010".to_string()),
            error: None,
        };

        let (entity, message) = interpret_add(body, "https://example.com").unwrap();
        let entity = entity.unwrap();
        assert_eq!(entity.link_id, "PRB010");
        assert_eq!(entity.link_url, "https://example.com");
        assert_eq!(message, "✓ Link added with ID PRB010");
    }

    #[test]
    fn test_add_without_id_or_error_is_a_failure() {
        let body = AddLinkResponse {
            generated_id: None,
            error: None,
        };
        assert!(interpret_add(body, "https://example.com").is_none());
    }
}
