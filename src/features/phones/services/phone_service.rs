use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::phones::dtos::PhoneResponseDto;
use crate::features::phones::models::Phone;
use crate::modules::storage::UploadStore;
use crate::shared::constants::CATEGORY_PHONES;
use crate::shared::multipart::FilePart;

/// Service for the phone catalog: append-only creates plus newest-first reads
pub struct PhoneService {
    pool: SqlitePool,
    uploads: Arc<UploadStore>,
}

impl PhoneService {
    pub fn new(pool: SqlitePool, uploads: Arc<UploadStore>) -> Self {
        Self { pool, uploads }
    }

    /// Store the image (if one was sent) and insert the row. The insert only
    /// happens after storage succeeds, so a failed write leaves no row with a
    /// dangling reference.
    pub async fn create(
        &self,
        name: String,
        price: f64,
        description: Option<String>,
        image: Option<&FilePart>,
    ) -> Result<PhoneResponseDto> {
        let image_ref = match image {
            Some(part) => self
                .uploads
                .store(CATEGORY_PHONES, part)
                .await?
                .map(|stored| {
                    tracing::info!(
                        outcome = ?stored.outcome,
                        reference = %stored.reference,
                        "Stored phone image"
                    );
                    stored.reference
                }),
            None => None,
        };

        let phone = sqlx::query_as::<_, Phone>(
            r#"
            INSERT INTO phones (name, price, image, description, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, name, price, image, description, created_at
            "#,
        )
        .bind(&name)
        .bind(price)
        .bind(&image_ref)
        .bind(&description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Phone created: id={}, name={}", phone.id, phone.name);
        Ok(phone.into())
    }

    pub async fn list(&self) -> Result<Vec<PhoneResponseDto>> {
        let phones = sqlx::query_as::<_, Phone>(
            r#"
            SELECT id, name, price, image, description, created_at
            FROM phones
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(phones.into_iter().map(Into::into).collect())
    }

    /// Case-insensitive substring match on the phone name
    pub async fn search(&self, query: &str) -> Result<Vec<PhoneResponseDto>> {
        let phones = sqlx::query_as::<_, Phone>(
            r#"
            SELECT id, name, price, image, description, created_at
            FROM phones
            WHERE name LIKE '%' || ?1 || '%'
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await?;

        Ok(phones.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    async fn service(dir: &std::path::Path) -> PhoneService {
        PhoneService::new(test_pool().await, Arc::new(UploadStore::local(dir)))
    }

    fn image(name: &str) -> FilePart {
        FilePart {
            filename: name.to_string(),
            content_type: "image/png".to_string(),
            data: b"png-bytes".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_create_with_image() {
        let dir = tempfile::tempdir().unwrap();
        let phones = service(dir.path()).await;

        let phone = phones
            .create(
                "Pixel 9".to_string(),
                499.99,
                Some("Flagship".to_string()),
                Some(&image("a.png")),
            )
            .await
            .unwrap();

        assert_eq!(phone.name, "Pixel 9");
        assert_eq!(phone.price, 499.99);
        let reference = phone.image.unwrap();
        assert!(reference.starts_with("phones/"));
        assert!(dir.path().join(&reference).exists());
    }

    #[tokio::test]
    async fn test_create_without_image_stores_null_reference() {
        let dir = tempfile::tempdir().unwrap();
        let phones = service(dir.path()).await;

        let phone = phones
            .create("Pixel 9".to_string(), 0.0, None, None)
            .await
            .unwrap();
        assert!(phone.image.is_none());

        // An empty file input behaves the same: row created, reference null
        let empty = FilePart {
            filename: String::new(),
            content_type: "application/octet-stream".to_string(),
            data: Vec::new(),
        };
        let phone = phones
            .create("Pixel 8".to_string(), 0.0, None, Some(&empty))
            .await
            .unwrap();
        assert!(phone.image.is_none());
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let phones = service(dir.path()).await;

        phones
            .create("First".to_string(), 1.0, None, None)
            .await
            .unwrap();
        phones
            .create("Second".to_string(), 2.0, None, None)
            .await
            .unwrap();

        let listed = phones.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Second");
        assert_eq!(listed[1].name, "First");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let dir = tempfile::tempdir().unwrap();
        let phones = service(dir.path()).await;

        phones
            .create("Pixel 9".to_string(), 499.99, None, None)
            .await
            .unwrap();
        phones
            .create("Galaxy S25".to_string(), 899.0, None, None)
            .await
            .unwrap();

        let hits = phones.search("pixel").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Pixel 9");

        assert!(phones.search("nokia").await.unwrap().is_empty());
    }
}
