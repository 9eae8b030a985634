//! Citations domain - directory checklist with per-user claimed flags.
//!
//! The directory table is fixed. Claimed flags live in process memory and
//! are lost on restart.

pub mod directories;

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use tokio::sync::RwLock;

use crate::common::UserId;
pub use directories::{Directory, DIRECTORIES};

#[derive(Debug, Clone, Serialize)]
pub struct CitationEntry {
    #[serde(flatten)]
    pub directory: Directory,
    pub claimed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CitationChecklist {
    /// Category name to entries, highest DA first.
    pub categories: BTreeMap<&'static str, Vec<CitationEntry>>,
    pub claimed_count: usize,
    pub total_count: usize,
    /// Percent claimed, rounded.
    pub progress: u32,
}

#[derive(Default)]
pub struct CitationTracker {
    claimed: RwLock<HashMap<UserId, HashSet<&'static str>>>,
}

impl CitationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn checklist(&self, user_id: UserId) -> CitationChecklist {
        let claimed = self.claimed.read().await;
        let mine = claimed.get(&user_id);

        let mut categories: BTreeMap<&'static str, Vec<CitationEntry>> = BTreeMap::new();
        for directory in DIRECTORIES {
            categories
                .entry(directory.category)
                .or_default()
                .push(CitationEntry {
                    directory: *directory,
                    claimed: mine.is_some_and(|set| set.contains(directory.name)),
                });
        }
        for entries in categories.values_mut() {
            entries.sort_by(|a, b| b.directory.da.cmp(&a.directory.da));
        }

        let claimed_count = mine.map_or(0, |set| set.len());
        let total_count = DIRECTORIES.len();

        CitationChecklist {
            categories,
            claimed_count,
            total_count,
            progress: progress_percent(claimed_count, total_count),
        }
    }

    /// Flip the claimed flag. Returns the new state, or `None` for an unknown directory.
    pub async fn toggle(&self, user_id: UserId, name: &str) -> Option<bool> {
        let directory = DIRECTORIES.iter().find(|d| d.name.eq_ignore_ascii_case(name))?;

        let mut claimed = self.claimed.write().await;
        let mine = claimed.entry(user_id).or_default();
        if mine.remove(directory.name) {
            Some(false)
        } else {
            mine.insert(directory.name);
            Some(true)
        }
    }
}

fn progress_percent(claimed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((claimed as f64 / total as f64) * 100.0).round() as u32
}
