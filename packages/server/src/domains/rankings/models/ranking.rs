use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::common::{KeywordId, RankingId};
use crate::kernel::SerpItem;

/// Organic listings are paginated ten to a SERP page.
pub const RESULTS_PER_SERP_PAGE: u32 = 10;

/// Which part of the results page a listing came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerpType {
    Organic,
    Maps,
}

impl SerpType {
    /// SERP page a listing at `position` appears on. The local pack is
    /// always reported as page 1, whatever its running position.
    pub fn page_for(self, position: u32) -> u32 {
        match self {
            SerpType::Organic => position.div_ceil(RESULTS_PER_SERP_PAGE),
            SerpType::Maps => 1,
        }
    }
}

impl std::fmt::Display for SerpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerpType::Organic => write!(f, "organic"),
            SerpType::Maps => write!(f, "maps"),
        }
    }
}

impl std::str::FromStr for SerpType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "organic" => Ok(SerpType::Organic),
            "maps" => Ok(SerpType::Maps),
            _ => Err(anyhow::anyhow!("Invalid serp type: {}", s)),
        }
    }
}

/// One positioned listing as returned by the tracking endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingResult {
    pub position: u32,
    pub url: String,
    pub page: u32,
    pub serp_type: SerpType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl RankingResult {
    pub fn from_item(item: SerpItem, position: u32) -> Self {
        Self {
            position,
            url: item.url,
            page: item.serp_type.page_for(position),
            serp_type: item.serp_type,
            title: item.title,
            snippet: item.snippet,
        }
    }
}

/// Stored ranking row. Rows are append-only; every tracking run adds a batch
/// sharing one `checked_at`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ranking {
    pub id: RankingId,
    pub keyword_id: KeywordId,
    pub position: i32,
    pub page: i32,
    pub url: String,
    pub serp_type: String,
    pub checked_at: DateTime<Utc>,
}

impl Ranking {
    /// Insert a whole tracking run in one statement
    pub async fn insert_batch(
        keyword_id: KeywordId,
        results: &[RankingResult],
        pool: &PgPool,
    ) -> Result<u64> {
        if results.is_empty() {
            return Ok(0);
        }

        let checked_at = Utc::now();
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO rankings (keyword_id, position, page, url, serp_type, checked_at) ",
        );
        builder.push_values(results, |mut row, result| {
            row.push_bind(keyword_id)
                .push_bind(result.position as i32)
                .push_bind(result.page as i32)
                .push_bind(result.url.as_str())
                .push_bind(result.serp_type.to_string())
                .push_bind(checked_at);
        });

        let done = builder.build().execute(pool).await?;
        Ok(done.rows_affected())
    }

    /// Most recent rows for a keyword, newest batch first
    pub async fn find_latest(keyword_id: KeywordId, limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let rankings = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM rankings
            WHERE keyword_id = $1
            ORDER BY checked_at DESC, position ASC
            LIMIT $2
            "#,
        )
        .bind(keyword_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(rankings)
    }

    pub async fn count_for_keyword(keyword_id: KeywordId, pool: &PgPool) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rankings WHERE keyword_id = $1")
            .bind(keyword_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organic_page_is_position_over_ten_rounded_up() {
        assert_eq!(SerpType::Organic.page_for(1), 1);
        assert_eq!(SerpType::Organic.page_for(10), 1);
        assert_eq!(SerpType::Organic.page_for(11), 2);
        assert_eq!(SerpType::Organic.page_for(13), 2);
        assert_eq!(SerpType::Organic.page_for(95), 10);
    }

    #[test]
    fn maps_listings_are_always_page_one() {
        for position in [1, 9, 13, 57, 100] {
            assert_eq!(SerpType::Maps.page_for(position), 1);
        }
    }

    #[test]
    fn serp_type_text_form() {
        assert_eq!(SerpType::Maps.to_string(), "maps");
        assert_eq!("organic".parse::<SerpType>().unwrap(), SerpType::Organic);
        assert!("images".parse::<SerpType>().is_err());
        assert_eq!(serde_json::to_string(&SerpType::Organic).unwrap(), "\"organic\"");
    }

    #[test]
    fn result_omits_missing_title_and_snippet() {
        let result = RankingResult::from_item(
            SerpItem {
                serp_type: SerpType::Organic,
                url: "https://a.example".to_string(),
                title: None,
                snippet: None,
            },
            13,
        );

        assert_eq!(result.page, 2);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["serp_type"], "organic");
    }
}
