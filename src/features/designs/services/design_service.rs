use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::designs::dtos::DesignResponseDto;
use crate::features::designs::models::Design;
use crate::modules::storage::UploadStore;
use crate::shared::constants::CATEGORY_DESIGNS;
use crate::shared::multipart::FilePart;

pub struct DesignService {
    pool: SqlitePool,
    uploads: Arc<UploadStore>,
}

impl DesignService {
    pub fn new(pool: SqlitePool, uploads: Arc<UploadStore>) -> Self {
        Self { pool, uploads }
    }

    /// Store the preview image and the downloadable file independently, then
    /// insert the row referencing whichever of the two were provided.
    pub async fn create(
        &self,
        title: String,
        price: f64,
        is_free: bool,
        image: Option<&FilePart>,
        file: Option<&FilePart>,
    ) -> Result<DesignResponseDto> {
        let image_ref = self.store_part(image).await?;
        let file_ref = self.store_part(file).await?;

        let design = sqlx::query_as::<_, Design>(
            r#"
            INSERT INTO designs (title, price, is_free, image, file, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, title, price, is_free, image, file, created_at
            "#,
        )
        .bind(&title)
        .bind(price)
        .bind(is_free)
        .bind(&image_ref)
        .bind(&file_ref)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Design created: id={}, title={}", design.id, design.title);
        Ok(design.into())
    }

    async fn store_part(&self, part: Option<&FilePart>) -> Result<Option<String>> {
        let Some(part) = part else { return Ok(None) };

        Ok(self
            .uploads
            .store(CATEGORY_DESIGNS, part)
            .await?
            .map(|stored| {
                tracing::info!(
                    outcome = ?stored.outcome,
                    reference = %stored.reference,
                    "Stored design upload"
                );
                stored.reference
            }))
    }

    pub async fn list(&self) -> Result<Vec<DesignResponseDto>> {
        let designs = sqlx::query_as::<_, Design>(
            r#"
            SELECT id, title, price, is_free, image, file, created_at
            FROM designs
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(designs.into_iter().map(Into::into).collect())
    }

    /// Case-insensitive substring match on the design title
    pub async fn search(&self, query: &str) -> Result<Vec<DesignResponseDto>> {
        let designs = sqlx::query_as::<_, Design>(
            r#"
            SELECT id, title, price, is_free, image, file, created_at
            FROM designs
            WHERE title LIKE '%' || ?1 || '%'
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(designs.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    async fn service(dir: &std::path::Path) -> DesignService {
        DesignService::new(test_pool().await, Arc::new(UploadStore::local(dir)))
    }

    fn part(name: &str, data: &[u8]) -> FilePart {
        FilePart {
            filename: name.to_string(),
            content_type: "application/octet-stream".to_string(),
            data: data.to_vec(),
        }
    }

    #[tokio::test]
    async fn test_create_stores_preview_and_file_separately() {
        let dir = tempfile::tempdir().unwrap();
        let designs = service(dir.path()).await;

        let design = designs
            .create(
                "Poster".to_string(),
                9.99,
                false,
                Some(&part("preview.png", b"png")),
                Some(&part("poster.pdf", b"pdf")),
            )
            .await
            .unwrap();

        let image_ref = design.image.unwrap();
        let file_ref = design.file.unwrap();
        assert_ne!(image_ref, file_ref);
        assert!(image_ref.starts_with("designs/"));
        assert!(file_ref.starts_with("designs/"));
        assert!(dir.path().join(&image_ref).exists());
        assert!(dir.path().join(&file_ref).exists());
    }

    #[tokio::test]
    async fn test_create_free_design_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let designs = service(dir.path()).await;

        let design = designs
            .create("Freebie".to_string(), 0.0, true, None, None)
            .await
            .unwrap();

        assert!(design.is_free);
        assert!(design.image.is_none());
        assert!(design.file.is_none());
    }

    #[tokio::test]
    async fn test_search_matches_title_substring() {
        let dir = tempfile::tempdir().unwrap();
        let designs = service(dir.path()).await;

        designs
            .create("Business Card".to_string(), 5.0, false, None, None)
            .await
            .unwrap();

        assert_eq!(designs.search("CARD").await.unwrap().len(), 1);
        assert!(designs.search("flyer").await.unwrap().is_empty());
    }
}
