//! # Signature Brew Repository
//!
//! Database operations for the `signaturebrews` collection.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use taproom_core::SignatureBrew;

const BREW_COLUMNS: &str = r#"
    id,
    created_at,
    updated_at,
    name,
    beer_image,
    flavor_description,
    details_url,
    beer_style
"#;

/// Repository for signature brew records.
#[derive(Debug, Clone)]
pub struct SignatureBrewRepository {
    pool: SqlitePool,
}

impl SignatureBrewRepository {
    /// Creates a new SignatureBrewRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SignatureBrewRepository { pool }
    }

    /// Lists every brew in editor order.
    pub async fn list(&self) -> DbResult<Vec<SignatureBrew>> {
        let sql = format!(
            "SELECT {} FROM signature_brews ORDER BY sort_order, created_at",
            BREW_COLUMNS
        );
        let brews = sqlx::query_as::<_, SignatureBrew>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = brews.len(), "Listed signature brews");
        Ok(brews)
    }

    /// Gets a brew by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<SignatureBrew>> {
        let sql = format!("SELECT {} FROM signature_brews WHERE id = ?1", BREW_COLUMNS);
        let brew = sqlx::query_as::<_, SignatureBrew>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brew)
    }

    /// Appends a brew after the existing ones.
    pub async fn insert(&self, brew: &SignatureBrew) -> DbResult<SignatureBrew> {
        debug!(id = %brew.id, "Inserting signature brew");

        sqlx::query(
            r#"
            INSERT INTO signature_brews (
                id, created_at, updated_at,
                name, beer_image, flavor_description, details_url, beer_style,
                sort_order
            ) VALUES (
                ?1, ?2, ?3,
                ?4, ?5, ?6, ?7, ?8,
                (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM signature_brews)
            )
            "#,
        )
        .bind(&brew.id)
        .bind(brew.created_at)
        .bind(brew.updated_at)
        .bind(&brew.name)
        .bind(&brew.beer_image)
        .bind(&brew.flavor_description)
        .bind(&brew.details_url)
        .bind(&brew.beer_style)
        .execute(&self.pool)
        .await?;

        Ok(brew.clone())
    }

    /// Updates an existing brew's editorial fields.
    pub async fn update(&self, brew: &SignatureBrew) -> DbResult<()> {
        debug!(id = %brew.id, "Updating signature brew");

        let result = sqlx::query(
            r#"
            UPDATE signature_brews SET
                name = ?2,
                beer_image = ?3,
                flavor_description = ?4,
                details_url = ?5,
                beer_style = ?6,
                updated_at = ?7
            WHERE id = ?1
            "#,
        )
        .bind(&brew.id)
        .bind(&brew.name)
        .bind(&brew.beer_image)
        .bind(&brew.flavor_description)
        .bind(&brew.details_url)
        .bind(&brew.beer_style)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("SignatureBrew", &brew.id));
        }

        Ok(())
    }

    /// Counts brews.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM signature_brews")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::generate_content_id;
    use crate::{Database, DbConfig};

    fn brew(name: &str, style: &str) -> SignatureBrew {
        let now = Utc::now();
        SignatureBrew {
            id: generate_content_id(),
            created_at: now,
            updated_at: now,
            name: Some(name.to_string()),
            beer_image: None,
            flavor_description: Some("Crisp and bright".to_string()),
            details_url: None,
            beer_style: Some(style.to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_list_and_get() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.signature_brews();

        let wit = repo.insert(&brew("Wit", "Witbier")).await.unwrap();
        repo.insert(&brew("Stout", "Dry Stout")).await.unwrap();

        let brews = repo.list().await.unwrap();
        assert_eq!(brews.len(), 2);
        assert_eq!(brews[0].name.as_deref(), Some("Wit"));

        let loaded = repo.get_by_id(&wit.id).await.unwrap().unwrap();
        assert_eq!(loaded.beer_style.as_deref(), Some("Witbier"));
        assert!(repo.get_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_brew() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db
            .signature_brews()
            .update(&brew("Ghost", "IPA"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
