use chrono::{DateTime, Utc};

/// Match status codes from the scoreboard feed, folded into a closed enum.
/// Codes this build has never seen keep their raw form so new upstream
/// states render verbatim instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureStatus {
    Scheduled,
    Abandoned,
    Canceled,
    Delayed,
    Postponed,
    InProgress,
    FirstHalf,
    SecondHalf,
    Overtime,
    Halftime,
    HalftimeExtraTime,
    EndOfRegulation,
    FullTime,
    FinalAfterExtraTime,
    EndOfExtraTime,
    Shootout,
    FinalAfterPens,
    Unknown(String),
}

impl FixtureStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "STATUS_SCHEDULED" => Self::Scheduled,
            "STATUS_ABANDONED" => Self::Abandoned,
            "STATUS_CANCELED" => Self::Canceled,
            "STATUS_DELAYED" => Self::Delayed,
            "STATUS_POSTPONED" => Self::Postponed,
            "STATUS_IN_PROGRESS" => Self::InProgress,
            "STATUS_FIRST_HALF" => Self::FirstHalf,
            "STATUS_SECOND_HALF" => Self::SecondHalf,
            "STATUS_OVERTIME" => Self::Overtime,
            "STATUS_HALFTIME" => Self::Halftime,
            "STATUS_HALFTIME_ET" => Self::HalftimeExtraTime,
            "STATUS_END_OF_REGULATION" => Self::EndOfRegulation,
            "STATUS_FULL_TIME" => Self::FullTime,
            "STATUS_FINAL_AET" => Self::FinalAfterExtraTime,
            "STATUS_END_OF_EXTRATIME" => Self::EndOfExtraTime,
            "STATUS_SHOOTOUT" => Self::Shootout,
            "STATUS_FINAL_PEN" => Self::FinalAfterPens,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Fixture has not started, or never will: there is no score to show.
    pub fn is_prematch(&self) -> bool {
        matches!(
            self,
            Self::Scheduled | Self::Abandoned | Self::Canceled | Self::Delayed | Self::Postponed
        )
    }

    /// The score line carries shootout totals alongside goals.
    pub fn is_shootout(&self) -> bool {
        matches!(self, Self::Shootout | Self::FinalAfterPens)
    }
}

/// One fixture, normalized from the scoreboard feed. Built fresh per
/// response and discarded after formatting.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub game_id: String,
    pub status: FixtureStatus,
    pub kick_off: DateTime<Utc>,
    /// Free-text clock string; only meaningful while the fixture is live.
    pub clock: String,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    /// Aggregate and shootout scores use -1 for "not applicable".
    pub home_agg: i64,
    pub away_agg: i64,
    pub home_pens: i64,
    pub away_pens: i64,
}
