//! Competitors domain - demo competitor list kept in process memory.
//!
//! Nothing here is persisted. Each user starts from the same two seeded
//! competitors.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::common::{require, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: u64,
    pub name: String,
    pub website: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitorInput {
    pub name: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
}

impl CompetitorInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)
    }
}

fn seed() -> Vec<Competitor> {
    vec![
        Competitor {
            id: 1,
            name: "ABC Plumbing".to_string(),
            website: "https://abcplumbing.com".to_string(),
            location: "Miami, FL".to_string(),
        },
        Competitor {
            id: 2,
            name: "Quick Fix Plumbing".to_string(),
            website: "https://quickfixplumbing.com".to_string(),
            location: "Miami, FL".to_string(),
        },
    ]
}

pub struct CompetitorBook {
    entries: RwLock<HashMap<UserId, Vec<Competitor>>>,
    next_id: AtomicU64,
}

impl Default for CompetitorBook {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(3),
        }
    }
}

impl CompetitorBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self, user_id: UserId) -> Vec<Competitor> {
        if let Some(list) = self.entries.read().await.get(&user_id) {
            return list.clone();
        }
        seed()
    }

    pub async fn add(&self, user_id: UserId, input: CompetitorInput) -> Result<Competitor, ValidationError> {
        input.validate()?;

        let competitor = Competitor {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: input.name.trim().to_string(),
            website: input.website.trim().to_string(),
            location: input.location.trim().to_string(),
        };

        self.entries
            .write()
            .await
            .entry(user_id)
            .or_insert_with(seed)
            .push(competitor.clone());

        Ok(competitor)
    }

    /// Returns `false` when no competitor had that id.
    pub async fn remove(&self, user_id: UserId, id: u64) -> bool {
        let mut entries = self.entries.write().await;
        let list = entries.entry(user_id).or_insert_with(seed);
        let before = list.len();
        list.retain(|c| c.id != id);
        list.len() != before
    }
}
