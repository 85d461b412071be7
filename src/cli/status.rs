//! Search API status command.

use console::style;

use crate::api::SearchApiClient;
use crate::config::Settings;

/// Fetch and print the search API health check.
pub async fn cmd_status(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let client = SearchApiClient::new(settings)?;

    let body = match client.health_check().await {
        Ok(body) => body,
        Err(e) => {
            if !json {
                eprintln!(
                    "{} Search API at {} is unavailable",
                    style("✗").red(),
                    client.base_url()
                );
            }
            return Err(e.into());
        }
    };

    if !json {
        println!(
            "{} Search API at {} is up",
            style("✓").green(),
            client.base_url()
        );
    }
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
