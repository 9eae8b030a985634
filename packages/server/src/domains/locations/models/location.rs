use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{require, LocationId, UserId, ValidationError};

/// A business location whose keywords are tracked
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Location {
    pub id: LocationId,
    pub user_id: UserId,
    pub business_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form fields for creating or replacing a location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationInput {
    pub business_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl LocationInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("business_name", &self.business_name)?;
        require("address", &self.address)?;
        require("city", &self.city)?;
        require("state", &self.state)?;
        require("zip", &self.zip)?;
        Ok(())
    }

    /// `"City, ST"` as used for the SERP location, or `None` when both are blank.
    pub fn search_location(city: &str, state: &str) -> Option<String> {
        let parts: Vec<&str> = [city.trim(), state.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

impl Location {
    pub async fn find_for_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let locations = sqlx::query_as::<_, Self>(
            "SELECT * FROM locations WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(locations)
    }

    pub async fn find_owned(id: LocationId, user_id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let location = sqlx::query_as::<_, Self>(
            "SELECT * FROM locations WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(location)
    }

    pub async fn create(user_id: UserId, input: &LocationInput, pool: &PgPool) -> Result<Self> {
        let location = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO locations (user_id, business_name, address, city, state, zip, lat, lng)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(input.business_name.trim())
        .bind(input.address.trim())
        .bind(input.city.trim())
        .bind(input.state.trim())
        .bind(input.zip.trim())
        .bind(input.lat)
        .bind(input.lng)
        .fetch_one(pool)
        .await?;
        Ok(location)
    }

    /// Replace the editable fields. Returns `None` if the location does not
    /// exist or belongs to someone else.
    pub async fn update(
        id: LocationId,
        user_id: UserId,
        input: &LocationInput,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let location = sqlx::query_as::<_, Self>(
            r#"
            UPDATE locations SET
                business_name = $3,
                address = $4,
                city = $5,
                state = $6,
                zip = $7,
                lat = $8,
                lng = $9,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(input.business_name.trim())
        .bind(input.address.trim())
        .bind(input.city.trim())
        .bind(input.state.trim())
        .bind(input.zip.trim())
        .bind(input.lat)
        .bind(input.lng)
        .fetch_optional(pool)
        .await?;
        Ok(location)
    }

    /// Keywords go with the location (foreign key cascade).
    pub async fn delete(id: LocationId, user_id: UserId, pool: &PgPool) -> Result<bool> {
        let done = sqlx::query("DELETE FROM locations WHERE id = $1 AND user_id = $2")
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

    fn input() -> LocationInput {
        LocationInput {
            business_name: "Joe's Plumbing".to_string(),
            address: "1 Main St".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            zip: "33101".to_string(),
            lat: None,
            lng: None,
        }
    }

    #[test]
    fn complete_form_validates() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn blank_zip_is_rejected() {
        let mut form = input();
        form.zip = " ".to_string();
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Missing required field: zip"
        );
    }

    #[test]
    fn search_location_joins_city_and_state() {
        assert_eq!(
            LocationInput::search_location("Miami", "FL").as_deref(),
            Some("Miami, FL")
        );
        assert_eq!(LocationInput::search_location(" ", "FL").as_deref(), Some("FL"));
        assert_eq!(LocationInput::search_location("", ""), None);
    }
}
