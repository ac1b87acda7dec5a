use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::config::Competitions;
use crate::error::ScoresError;
use crate::espn::Espn;
use crate::format;
use crate::say;
use crate::style::{Mirc, Style};
use crate::webhook::Webhook;

/// Hard per-message budget for the chat transport.
const MAX_MESSAGE_LEN: usize = 400;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Production,
}

/// One chat command invocation. `list`, `table`, and `query` mirror the
/// command's options and may be combined; each produces its own replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub mode: Mode,
    pub hook_url: String,
    pub test_hook_url: String,
    /// List the known competitions.
    #[serde(default)]
    pub list: bool,
    /// Post the league table for this competition key.
    #[serde(default)]
    pub table: Option<String>,
    /// Competition key or team-name fragment to fetch fixtures for.
    #[serde(default)]
    pub query: Option<String>,
    /// Append a cache-busting token to upstream requests.
    #[serde(default = "default_no_cache")]
    pub no_cache: bool,
}

fn default_no_cache() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;

    // Select destination based on request mode
    let destination = match payload.mode {
        Mode::Test => payload.test_hook_url.clone(),
        Mode::Production => payload.hook_url.clone(),
    };
    let webhook = Webhook::new(destination);

    // ureq is blocking; keep the whole command off the async runtime.
    let summary = tokio::task::spawn_blocking(move || run_command(&payload, &webhook)).await?;
    info!(summary = %summary, "Command finished");
    Ok(Response { message: summary })
}

fn run_command(request: &Request, webhook: &Webhook) -> String {
    let style = Mirc;
    let competitions = Competitions::bundled();
    let espn = Espn::new();
    let mut summaries: Vec<String> = Vec::new();

    if request.list {
        let items = competitions.list(&style);
        reply(webhook, &items, ", ");
        summaries.push(format!("listed {} competitions", items.len()));
    }

    if let Some(key) = &request.table {
        let outcome = competitions
            .lookup(key)
            .ok_or_else(|| ScoresError::UnknownCompetition(key.clone()))
            .and_then(|competition| espn.standings(&competition.id, request.no_cache));
        match outcome {
            Ok(rows) => {
                let items: Vec<String> = rows
                    .iter()
                    .map(|row| format::table_row(row, &style))
                    .collect();
                reply(webhook, &items, ", ");
                summaries.push(format!("posted {} table rows for {}", items.len(), key));
            }
            Err(ScoresError::UnknownCompetition(unknown)) => {
                let _ = webhook.error(&format!(
                    "{} is not a valid competition. Use {} to see available competitions.",
                    style.bold(&unknown),
                    style.bold("list"),
                ));
                summaries.push(format!("unknown competition {}", unknown));
            }
            Err(e) => {
                error!(error = %e, "Standings fetch failed");
                let _ = webhook.error("Could not fetch the table right now.");
                summaries.push("standings fetch failed".to_string());
            }
        }
    }

    if let Some(query) = &request.query {
        let query = query.to_lowercase();
        // A query naming a competition key means "all fixtures in that
        // competition"; anything else is a team-name search across all.
        let outcome = match competitions.lookup(&query) {
            Some(competition) => espn.scoreboard(&competition.id, None, request.no_cache),
            None => espn.scoreboard("all", Some(&query), request.no_cache),
        }
        .and_then(|fixtures| {
            if fixtures.is_empty() {
                Err(ScoresError::EmptyResult)
            } else {
                Ok(fixtures)
            }
        });
        match outcome {
            Ok(fixtures) => {
                let now = Utc::now();
                let items: Vec<String> = fixtures
                    .iter()
                    .map(|fixture| format::match_line(fixture, now, &style))
                    .collect();
                reply(webhook, &items, " | ");
                summaries.push(format!("posted {} fixtures", items.len()));
            }
            // A dead upstream reads the same as an empty result from the
            // channel's side.
            Err(e @ (ScoresError::EmptyResult | ScoresError::Upstream(_))) => {
                info!(error = %e, "Query produced nothing to post");
                let _ = webhook.error("No teams found matching query.");
                summaries.push("no fixtures matched".to_string());
            }
            Err(e) => {
                error!(error = %e, "Scoreboard extraction failed");
                let _ = webhook.error("Could not read match data right now.");
                summaries.push("scoreboard extraction failed".to_string());
            }
        }
    }

    if summaries.is_empty() {
        "No action requested".to_string()
    } else {
        summaries.join("; ")
    }
}

/// Reply in as few messages as the budget allows, never splitting an item
/// across message boundaries.
fn reply(webhook: &Webhook, items: &[String], separator: &str) {
    for message in say::pack(items, separator, MAX_MESSAGE_LEN) {
        if let Err(e) = webhook.post(&message) {
            error!(error = %e, "Failed to post reply");
        }
    }
}
