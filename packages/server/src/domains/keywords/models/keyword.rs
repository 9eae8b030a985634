use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{require, KeywordId, LocationId, UserId, ValidationError};

/// A search phrase tracked for one location. Keywords are never edited.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Keyword {
    pub id: KeywordId,
    pub location_id: LocationId,
    pub keyword: String,
    /// Only used by clients to highlight the business's own listings.
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Keyword joined with the location fields the keyword screen displays
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct KeywordListing {
    pub id: KeywordId,
    pub location_id: LocationId,
    pub keyword: String,
    pub website_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub business_name: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordInput {
    pub location_id: LocationId,
    pub keyword: String,
    #[serde(default)]
    pub website_url: Option<String>,
}

impl KeywordInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("keyword", &self.keyword)
    }

    /// Trimmed website, with blank treated as absent.
    pub fn normalized_website(&self) -> Option<&str> {
        self.website_url
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

const LISTING_SELECT: &str = r#"
    SELECT k.id, k.location_id, k.keyword, k.website_url, k.created_at,
           l.business_name, l.city, l.state
    FROM keywords k
    INNER JOIN locations l ON l.id = k.location_id
"#;

impl Keyword {
    pub async fn find_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<KeywordListing>> {
        let query = format!("{} WHERE l.user_id = $1 ORDER BY k.created_at DESC", LISTING_SELECT);
        let keywords = sqlx::query_as::<_, KeywordListing>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(keywords)
    }

    pub async fn find_owned(
        id: KeywordId,
        user_id: UserId,
        pool: &PgPool,
    ) -> Result<Option<KeywordListing>> {
        let query = format!("{} WHERE k.id = $1 AND l.user_id = $2", LISTING_SELECT);
        let keyword = sqlx::query_as::<_, KeywordListing>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(keyword)
    }

    /// Caller is responsible for checking the location belongs to the user.
    pub async fn create(input: &KeywordInput, pool: &PgPool) -> Result<Self> {
        let keyword = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO keywords (location_id, keyword, website_url)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(input.location_id)
        .bind(input.keyword.trim())
        .bind(input.normalized_website())
        .fetch_one(pool)
        .await?;
        Ok(keyword)
    }

    /// Ranking rows are left in place.
    pub async fn delete(id: KeywordId, user_id: UserId, pool: &PgPool) -> Result<bool> {
        let done = sqlx::query(
            r#"
            DELETE FROM keywords k
            USING locations l
            WHERE k.id = $1 AND l.id = k.location_id AND l.user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(done.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_website_is_dropped() {
        let input = KeywordInput {
            location_id: LocationId::new(),
            keyword: "plumber".to_string(),
            website_url: Some("   ".to_string()),
        };
        assert_eq!(input.normalized_website(), None);
    }

    #[test]
    fn website_is_trimmed() {
        let input = KeywordInput {
            location_id: LocationId::new(),
            keyword: "plumber".to_string(),
            website_url: Some(" https://joes.example ".to_string()),
        };
        assert_eq!(input.normalized_website(), Some("https://joes.example"));
    }

    #[test]
    fn keyword_text_is_required() {
        let input = KeywordInput {
            location_id: LocationId::new(),
            keyword: "".to_string(),
            website_url: None,
        };
        assert!(input.validate().is_err());
    }
}
