use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::models::{Location, LocationInput};
use crate::common::{LocationId, UserId};

/// Location storage, always scoped to the owning user
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list(&self, user_id: UserId) -> Result<Vec<Location>>;
    async fn find(&self, user_id: UserId, id: LocationId) -> Result<Option<Location>>;
    async fn create(&self, user_id: UserId, input: &LocationInput) -> Result<Location>;
    async fn update(
        &self,
        user_id: UserId,
        id: LocationId,
        input: &LocationInput,
    ) -> Result<Option<Location>>;
    /// Returns `false` when nothing was deleted.
    async fn delete(&self, user_id: UserId, id: LocationId) -> Result<bool>;
}

pub struct PgLocationStore {
    pool: PgPool,
}

impl PgLocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationStore {
    async fn list(&self, user_id: UserId) -> Result<Vec<Location>> {
        Location::find_for_user(user_id, &self.pool).await
    }

    async fn find(&self, user_id: UserId, id: LocationId) -> Result<Option<Location>> {
        Location::find_owned(id, user_id, &self.pool).await
    }

    async fn create(&self, user_id: UserId, input: &LocationInput) -> Result<Location> {
        Location::create(user_id, input, &self.pool).await
    }

    async fn update(
        &self,
        user_id: UserId,
        id: LocationId,
        input: &LocationInput,
    ) -> Result<Option<Location>> {
        Location::update(id, user_id, input, &self.pool).await
    }

    async fn delete(&self, user_id: UserId, id: LocationId) -> Result<bool> {
        Location::delete(id, user_id, &self.pool).await
    }
}
