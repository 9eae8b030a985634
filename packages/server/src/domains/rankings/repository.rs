use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{Ranking, RankingResult};
use crate::common::KeywordId;

/// Number of rows shown per keyword card.
pub const LATEST_RANKINGS_LIMIT: i64 = 10;

/// Ranking snapshot storage
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// Append one tracking run. Returns the number of rows written.
    async fn insert_batch(&self, keyword_id: KeywordId, results: &[RankingResult]) -> Result<u64>;

    async fn latest(&self, keyword_id: KeywordId, limit: i64) -> Result<Vec<Ranking>>;

    async fn count(&self, keyword_id: KeywordId) -> Result<i64>;
}

pub struct PgRankingStore {
    pool: PgPool,
}

impl PgRankingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RankingRepository for PgRankingStore {
    async fn insert_batch(&self, keyword_id: KeywordId, results: &[RankingResult]) -> Result<u64> {
        Ranking::insert_batch(keyword_id, results, &self.pool).await
    }

    async fn latest(&self, keyword_id: KeywordId, limit: i64) -> Result<Vec<Ranking>> {
        Ranking::find_latest(keyword_id, limit, &self.pool).await
    }

    async fn count(&self, keyword_id: KeywordId) -> Result<i64> {
        Ranking::count_for_keyword(keyword_id, &self.pool).await
    }
}
