use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::about::dtos::AboutResponseDto;
use crate::features::about::models::About;
use crate::modules::storage::UploadStore;
use crate::shared::constants::CATEGORY_DESIGNS;
use crate::shared::multipart::FilePart;

pub struct AboutService {
    pool: SqlitePool,
    uploads: Arc<UploadStore>,
}

impl AboutService {
    pub fn new(pool: SqlitePool, uploads: Arc<UploadStore>) -> Self {
        Self { pool, uploads }
    }

    /// The single about record; `None` until the first update
    pub async fn get(&self) -> Result<Option<AboutResponseDto>> {
        let about = sqlx::query_as::<_, About>(
            "SELECT id, content, cv_file, updated_at FROM about WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(about.map(Into::into))
    }

    /// Upsert the single record. The CV reference takes the new value even
    /// when no file was sent: each update fully replaces the slot.
    pub async fn update(&self, content: String, cv: Option<&FilePart>) -> Result<AboutResponseDto> {
        let cv_ref = match cv {
            // CV files live under the designs category
            Some(part) => self
                .uploads
                .store(CATEGORY_DESIGNS, part)
                .await?
                .map(|stored| {
                    tracing::info!(
                        outcome = ?stored.outcome,
                        reference = %stored.reference,
                        "Stored CV upload"
                    );
                    stored.reference
                }),
            None => None,
        };

        let about = sqlx::query_as::<_, About>(
            r#"
            INSERT INTO about (id, content, cv_file, updated_at)
            VALUES (1, ?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                content = excluded.content,
                cv_file = excluded.cv_file,
                updated_at = excluded.updated_at
            RETURNING id, content, cv_file, updated_at
            "#,
        )
        .bind(&content)
        .bind(&cv_ref)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("About record updated");
        Ok(about.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    async fn service(dir: &std::path::Path) -> AboutService {
        AboutService::new(test_pool().await, Arc::new(UploadStore::local(dir)))
    }

    #[tokio::test]
    async fn test_empty_until_first_update() {
        let dir = tempfile::tempdir().unwrap();
        let about = service(dir.path()).await;

        assert!(about.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_a_single_row() {
        let dir = tempfile::tempdir().unwrap();
        let about = service(dir.path()).await;

        about.update("v1".to_string(), None).await.unwrap();
        about.update("v2".to_string(), None).await.unwrap();

        let current = about.get().await.unwrap().unwrap();
        assert_eq!(current.content, "v2");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM about")
            .fetch_one(&about.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_cv_reference() {
        let dir = tempfile::tempdir().unwrap();
        let about = service(dir.path()).await;

        let cv = FilePart {
            filename: "cv.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: b"pdf".to_vec(),
        };

        let updated = about.update("bio".to_string(), Some(&cv)).await.unwrap();
        let cv_ref = updated.cv_file.unwrap();
        assert!(cv_ref.starts_with("designs/"));
        assert!(dir.path().join(&cv_ref).exists());

        // Updating without a CV clears the stored reference
        let updated = about.update("bio".to_string(), None).await.unwrap();
        assert!(updated.cv_file.is_none());
    }
}
