use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{error, info, instrument};
use ureq::Agent;

use crate::error::ScoresError;
use crate::model::fixture::{Fixture, FixtureStatus};
use crate::model::scoreboard::{Event, Scoreboard};
use crate::model::standings::{StandingsDocument, StandingsEntry};
use crate::model::table::TableRow;

// Contractual positions within a standings entry's stats array.
const STAT_GAMES_PLAYED: usize = 3;
const STAT_POINTS: usize = 6;
const STAT_POSITION: usize = 8;
const STAT_GOAL_DIFFERENCE: usize = 9;

/// Blocking client for the ESPN soccer scoreboard and standings endpoints.
#[derive(Debug)]
pub struct Espn {
    agent: Agent,
}

impl Espn {
    pub fn new() -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(6)))
            .build();
        Self {
            agent: config.into(),
        }
    }

    /// Fixtures for one competition slug, optionally narrowed to the first
    /// fixture involving a team whose name contains `query`.
    #[instrument(level = "info", skip(self, query))]
    pub fn scoreboard(
        &self,
        slug: &str,
        query: Option<&str>,
        bypass_cache: bool,
    ) -> Result<Vec<Fixture>, ScoresError> {
        let url = format!(
            "https://site.api.espn.com/apis/site/v2/sports/soccer/{}/scoreboard",
            slug
        );
        let body = self.get(&url, bypass_cache)?;
        let fixtures = extract_fixtures(&body, query)?;
        info!(count = fixtures.len(), "Extracted fixtures");
        Ok(fixtures)
    }

    /// League table for one competition slug.
    #[instrument(level = "info", skip(self))]
    pub fn standings(&self, slug: &str, bypass_cache: bool) -> Result<Vec<TableRow>, ScoresError> {
        let url = format!(
            "https://site.api.espn.com/apis/v2/sports/soccer/{}/standings",
            slug
        );
        let body = self.get(&url, bypass_cache)?;
        let rows = extract_table(&body)?;
        info!(count = rows.len(), "Extracted table rows");
        Ok(rows)
    }

    /// GET a document body. `bypass_cache` appends a timestamp token so
    /// intermediaries cannot serve a stale copy.
    fn get(&self, url: &str, bypass_cache: bool) -> Result<String, ScoresError> {
        let url = if bypass_cache {
            format!("{}?{}", url, Utc::now().timestamp())
        } else {
            url.to_string()
        };
        match self.agent.get(&url).call() {
            Ok(response) => {
                let status = response.status();
                let mut body = response.into_body();
                match body.read_to_string() {
                    Ok(text) if status.is_success() => Ok(text),
                    Ok(_) => {
                        error!(url = %url, status = status.as_u16(), "Non-success status from upstream");
                        Err(ScoresError::Upstream(format!("status {}", status.as_u16())))
                    }
                    Err(e) => {
                        error!(url = %url, error = %e, "Failed to read response body");
                        Err(ScoresError::Upstream(format!("read body: {}", e)))
                    }
                }
            }
            Err(e) => {
                error!(url = %url, error = %e, "Request failed");
                Err(ScoresError::Upstream(e.to_string()))
            }
        }
    }
}

impl Default for Espn {
    fn default() -> Self {
        Self::new()
    }
}

/// Build normalized fixtures from a raw scoreboard document.
///
/// With a query, the scan stops at the first fixture whose home or away
/// name contains it; the feed lists the most relevant fixture first.
pub fn extract_fixtures(body: &str, query: Option<&str>) -> Result<Vec<Fixture>, ScoresError> {
    let scoreboard: Scoreboard = serde_json::from_str(body)
        .map_err(|e| ScoresError::Malformed(format!("scoreboard: {}", e)))?;

    let query = query.map(|q| q.to_lowercase());
    let mut fixtures = Vec::new();
    for event in &scoreboard.events {
        let fixture = fixture_from_event(event)?;
        match &query {
            Some(q) => {
                if fixture.home_team.to_lowercase().contains(q)
                    || fixture.away_team.to_lowercase().contains(q)
                {
                    fixtures.push(fixture);
                    // The first hit is the fixture the query meant.
                    break;
                }
            }
            None => fixtures.push(fixture),
        }
    }
    Ok(fixtures)
}

fn fixture_from_event(event: &Event) -> Result<Fixture, ScoresError> {
    let competition = event
        .competitions
        .first()
        .ok_or_else(|| ScoresError::Malformed("event without competitions".to_string()))?;
    // Competitor order is an upstream contract: index 0 is home, 1 is away.
    let home = competition
        .competitors
        .first()
        .ok_or_else(|| ScoresError::Malformed("competition without home side".to_string()))?;
    let away = competition
        .competitors
        .get(1)
        .ok_or_else(|| ScoresError::Malformed("competition without away side".to_string()))?;

    Ok(Fixture {
        game_id: competition.id.clone(),
        status: FixtureStatus::from_code(&competition.status.kind.name),
        kick_off: parse_kick_off(&event.date)?,
        clock: competition.status.display_clock.clone(),
        home_team: home.team.name.clone(),
        away_team: away.team.name.clone(),
        home_goals: parse_goals(&home.score)?,
        away_goals: parse_goals(&away.score)?,
        home_agg: sentinel(home.aggregate_score),
        away_agg: sentinel(away.aggregate_score),
        home_pens: sentinel(home.shootout_score),
        away_pens: sentinel(away.shootout_score),
    })
}

fn parse_goals(score: &str) -> Result<u32, ScoresError> {
    score
        .parse()
        .map_err(|_| ScoresError::Malformed(format!("score {:?} is not a number", score)))
}

/// Absent aggregate/shootout scores become -1, "not applicable".
fn sentinel(value: Option<f64>) -> i64 {
    value.map(|v| v as i64).unwrap_or(-1)
}

/// The scoreboard feed dates fixtures to the minute ("2025-03-14T19:30Z");
/// fall back to full RFC 3339 in case the precision changes.
fn parse_kick_off(date: &str) -> Result<DateTime<Utc>, ScoresError> {
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%MZ")
        .map(|naive| naive.and_utc())
        .or_else(|_| DateTime::parse_from_rfc3339(date).map(|dt| dt.with_timezone(&Utc)))
        .map_err(|e| ScoresError::Malformed(format!("kick off {:?}: {}", date, e)))
}

/// Build table rows from a raw standings document, preserving rank order.
pub fn extract_table(body: &str) -> Result<Vec<TableRow>, ScoresError> {
    let document: StandingsDocument = serde_json::from_str(body)
        .map_err(|e| ScoresError::Malformed(format!("standings: {}", e)))?;
    let group = document
        .children
        .first()
        .ok_or_else(|| ScoresError::Malformed("standings without children".to_string()))?;

    let mut rows = Vec::with_capacity(group.standings.entries.len());
    for entry in &group.standings.entries {
        rows.push(TableRow {
            position: stat(entry, STAT_POSITION)?,
            team: entry.team.display_name.clone(),
            games_played: stat(entry, STAT_GAMES_PLAYED)?,
            goal_difference: stat(entry, STAT_GOAL_DIFFERENCE)?,
            points: stat(entry, STAT_POINTS)?,
        });
    }
    Ok(rows)
}

fn stat(entry: &StandingsEntry, index: usize) -> Result<String, ScoresError> {
    entry
        .stats
        .get(index)
        .and_then(|s| s.display_value.clone())
        .ok_or_else(|| {
            ScoresError::Malformed(format!(
                "stats[{}] missing for {}",
                index, entry.team.display_name
            ))
        })
}
