use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{Keyword, KeywordInput, KeywordListing};
use crate::common::{KeywordId, UserId};

/// Keyword storage. There is no update; keywords are created and deleted.
#[async_trait]
pub trait KeywordRepository: Send + Sync {
    async fn list(&self, user_id: UserId) -> Result<Vec<KeywordListing>>;
    async fn find(&self, user_id: UserId, id: KeywordId) -> Result<Option<KeywordListing>>;
    async fn create(&self, input: &KeywordInput) -> Result<Keyword>;
    async fn delete(&self, user_id: UserId, id: KeywordId) -> Result<bool>;
}

pub struct PgKeywordStore {
    pool: PgPool,
}

impl PgKeywordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeywordRepository for PgKeywordStore {
    async fn list(&self, user_id: UserId) -> Result<Vec<KeywordListing>> {
        Keyword::find_for_user(user_id, &self.pool).await
    }

    async fn find(&self, user_id: UserId, id: KeywordId) -> Result<Option<KeywordListing>> {
        Keyword::find_owned(id, user_id, &self.pool).await
    }

    async fn create(&self, input: &KeywordInput) -> Result<Keyword> {
        Keyword::create(input, &self.pool).await
    }

    async fn delete(&self, user_id: UserId, id: KeywordId) -> Result<bool> {
        Keyword::delete(id, user_id, &self.pool).await
    }
}
