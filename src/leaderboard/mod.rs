//! Locally persisted top scores for the Dino Runner. One JSON slot on
//! disk; higher score wins, faster time breaks ties.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many entries survive on disk.
pub const PERSIST_CAP: usize = 20;
/// How many entries `leaderboard dino` shows.
pub const DISPLAY_CAP: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub ms: u64,
    pub date: DateTime<Utc>,
}

pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends one result and rewrites the slot in the same call: read,
    /// rank, truncate to [`PERSIST_CAP`], write. Returns the display list.
    pub fn record(&self, name: &str, score: u32, ms: u64) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.load();
        entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            ms,
            date: Utc::now(),
        });
        rank(&mut entries);
        entries.truncate(PERSIST_CAP);

        let encoded = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, encoded)
            .with_context(|| format!("writing leaderboard {}", self.path.display()))?;

        entries.truncate(DISPLAY_CAP);
        Ok(entries)
    }

    /// The display list without appending anything.
    pub fn top(&self) -> Vec<LeaderboardEntry> {
        let mut entries = self.load();
        rank(&mut entries);
        entries.truncate(DISPLAY_CAP);
        entries
    }

    /// A missing, empty or unreadable slot is an empty leaderboard.
    fn load(&self) -> Vec<LeaderboardEntry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!(error = %err, path = %self.path.display(), "leaderboard read failed");
                }
                return Vec::new();
            }
        };
        if text.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&text) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "leaderboard slot corrupt, starting over");
                Vec::new()
            }
        }
    }
}

fn rank(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.ms.cmp(&b.ms)));
}
