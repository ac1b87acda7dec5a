use serde::Deserialize;

/// Raw wire shapes for the standings endpoint. Each entry carries a stats
/// array read by fixed index; the values stay as display strings.
#[derive(Debug, Deserialize)]
pub struct StandingsDocument {
    #[serde(default)]
    pub children: Vec<StandingsGroup>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsGroup {
    pub standings: StandingsList,
}

#[derive(Debug, Deserialize)]
pub struct StandingsList {
    #[serde(default)]
    pub entries: Vec<StandingsEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsEntry {
    pub team: StandingsTeam,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTeam {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct Stat {
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}
