//! Leaderboard of the best rounds this session
//!
//! Lives in memory only and tracks the top 10 scores. A fresh session starts
//! with five demo entries so the table is never empty.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_ENTRIES: usize = 10;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u32,
    /// Hits over shots, two decimals
    pub accuracy: f32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Leaderboard seeded with the demo players, stamped relative to `now_ms`
    pub fn with_demo_entries(now_ms: f64) -> Self {
        let entries = (0..5)
            .map(|i| LeaderboardEntry {
                username: format!("Player{}", i + 1),
                score: 500 - i * 50,
                accuracy: 0.75 - i as f32 * 0.05,
                timestamp: now_ms - 10_000.0 * (i + 1) as f64,
            })
            .collect();
        Self { entries }
    }

    /// Get the rank a score would achieve (1-indexed, None if it would be cut)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len())
            + 1;
        (rank <= MAX_ENTRIES).then_some(rank)
    }

    /// Add a finished round
    ///
    /// Ties rank below existing entries with the same score. Returns the rank
    /// achieved (1-indexed) or None if the entry fell off the bottom.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let pos = self.entries.iter().position(|e| entry.score > e.score);
        let index = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_ENTRIES);

        (index < MAX_ENTRIES).then_some(index + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}

/// Format a timestamp as a relative date string
pub fn format_date(timestamp: f64, now_ms: f64) -> String {
    let diff_secs = (now_ms - timestamp) / 1000.0;
    let diff_mins = diff_secs / 60.0;
    let diff_hours = diff_mins / 60.0;
    let diff_days = diff_hours / 24.0;

    if diff_days >= 1.0 {
        let days = diff_days.floor() as i64;
        if days == 1 {
            "Yesterday".to_string()
        } else {
            format!("{} days ago", days)
        }
    } else if diff_hours >= 1.0 {
        let hours = diff_hours.floor() as i64;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    } else if diff_mins >= 1.0 {
        let mins = diff_mins.floor() as i64;
        if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        }
    } else {
        "Just now".to_string()
    }
}
