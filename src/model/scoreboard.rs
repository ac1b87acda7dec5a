use serde::Deserialize;

/// Raw wire shapes for the scoreboard endpoint. Only the fields the
/// extractor reads are modeled; everything else in the document is ignored.
#[derive(Debug, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct Event {
    pub date: String,
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Deserialize)]
pub struct Competition {
    pub id: String,
    pub status: Status,
    pub competitors: Vec<Competitor>,
}

#[derive(Debug, Deserialize)]
pub struct Status {
    #[serde(rename = "displayClock", default)]
    pub display_clock: String,
    #[serde(rename = "type")]
    pub kind: StatusType,
}

#[derive(Debug, Deserialize)]
pub struct StatusType {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Competitor {
    pub team: Team,
    pub score: String,
    // Absent unless the fixture is part of a two-legged tie or went to a
    // shootout; the feed mixes integer and float encodings for both.
    #[serde(rename = "aggregateScore")]
    pub aggregate_score: Option<f64>,
    #[serde(rename = "shootoutScore")]
    pub shootout_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Team {
    pub name: String,
}
