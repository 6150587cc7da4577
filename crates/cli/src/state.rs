//! Persisted travel history.
//!
//! The history file is plain JSON holding the rows exactly as typed, plus an
//! optional planned rejoin date. Rows are never normalized on disk, so the
//! user sees back what they entered.

use schengen_core::{Error, RawInterval, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Contents of the history file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelHistory {
    /// Stays in the order they were entered.
    #[serde(default)]
    pub stays: Vec<RawInterval>,
    /// Planned rejoin date, as typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejoin_date: Option<String>,
}

/// History file bound to its path.
pub struct HistoryStore {
    path: PathBuf,
    history: TravelHistory,
}

impl HistoryStore {
    /// Load the history at `path`; a missing file is an empty history.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let history = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::Serialization(format!(
                    "Failed to parse history file '{}': {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            TravelHistory::default()
        };
        debug!(path = %path.display(), stays = history.stays.len(), "Loaded travel history");
        Ok(Self { path, history })
    }

    /// Current contents.
    pub fn history(&self) -> &TravelHistory {
        &self.history
    }

    /// Append a stay.
    pub fn add(&mut self, stay: RawInterval) {
        self.history.stays.push(stay);
    }

    /// Remove the stay at `index`, returning it if it existed.
    pub fn remove(&mut self, index: usize) -> Option<RawInterval> {
        (index < self.history.stays.len()).then(|| self.history.stays.remove(index))
    }

    /// Replace the planned rejoin date.
    pub fn set_rejoin_date(&mut self, date: impl Into<String>) {
        self.history.rejoin_date = Some(date.into());
    }

    /// Write the history back, replacing the file in one rename.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.history)
            .map_err(|e| Error::Serialization(format!("Failed to serialize history: {}", e)))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), stays = self.history.stays.len(), "Saved travel history");
        Ok(())
    }
}
