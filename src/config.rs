use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::ScoresError;
use crate::style::Style;

/// One competition the scoreboard API knows about.
#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    pub id: String,
    pub name: String,
}

/// Read-only competition reference table, keyed by lowercase short name.
#[derive(Debug, Clone)]
pub struct Competitions {
    entries: BTreeMap<String, Competition>,
}

static BUNDLED: OnceLock<Competitions> = OnceLock::new();

impl Competitions {
    /// The table shipped with the binary, parsed once per process.
    pub fn bundled() -> &'static Competitions {
        BUNDLED.get_or_init(|| {
            Competitions::from_json(include_str!("../competitions.json"))
                .expect("bundled competitions.json must parse")
        })
    }

    /// Parse a key -> {id, name} table from JSON. Keys are normalized to
    /// lowercase so lookup is case-insensitive.
    pub fn from_json(body: &str) -> Result<Self, ScoresError> {
        let raw: BTreeMap<String, Competition> = serde_json::from_str(body)
            .map_err(|e| ScoresError::Malformed(format!("competition table: {}", e)))?;
        let entries = raw
            .into_iter()
            .map(|(key, competition)| (key.to_lowercase(), competition))
            .collect();
        Ok(Self { entries })
    }

    pub fn lookup(&self, key: &str) -> Option<&Competition> {
        self.entries.get(&key.to_lowercase())
    }

    /// Formatted listing sorted by key, one item per competition.
    pub fn list(&self, style: &dyn Style) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, competition)| format!("{} ({})", style.bold(key), competition.name))
            .collect()
    }
}
