use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::videos::dtos::VideoResponseDto;
use crate::features::videos::models::Video;
use crate::modules::storage::UploadStore;
use crate::shared::constants::CATEGORY_VIDEOS;
use crate::shared::multipart::FilePart;

pub struct VideoService {
    pool: SqlitePool,
    uploads: Arc<UploadStore>,
}

impl VideoService {
    pub fn new(pool: SqlitePool, uploads: Arc<UploadStore>) -> Self {
        Self { pool, uploads }
    }

    /// The video and its poster image share the videos category but are
    /// stored and referenced independently.
    pub async fn create(
        &self,
        title: String,
        video: Option<&FilePart>,
        poster: Option<&FilePart>,
    ) -> Result<VideoResponseDto> {
        let file_ref = self.store_part(video).await?;
        let poster_ref = self.store_part(poster).await?;

        let video = sqlx::query_as::<_, Video>(
            r#"
            INSERT INTO videos (title, file, poster, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, file, poster, created_at
            "#,
        )
        .bind(&title)
        .bind(&file_ref)
        .bind(&poster_ref)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Video created: id={}, title={}", video.id, video.title);
        Ok(video.into())
    }

    async fn store_part(&self, part: Option<&FilePart>) -> Result<Option<String>> {
        let Some(part) = part else { return Ok(None) };

        Ok(self
            .uploads
            .store(CATEGORY_VIDEOS, part)
            .await?
            .map(|stored| {
                tracing::info!(
                    outcome = ?stored.outcome,
                    reference = %stored.reference,
                    "Stored video upload"
                );
                stored.reference
            }))
    }

    pub async fn list(&self) -> Result<Vec<VideoResponseDto>> {
        let videos = sqlx::query_as::<_, Video>(
            r#"
            SELECT id, title, file, poster, created_at
            FROM videos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(videos.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    async fn service(dir: &std::path::Path) -> VideoService {
        VideoService::new(test_pool().await, Arc::new(UploadStore::local(dir)))
    }

    #[tokio::test]
    async fn test_create_with_video_and_poster() {
        let dir = tempfile::tempdir().unwrap();
        let videos = service(dir.path()).await;

        let clip = FilePart {
            filename: "clip.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            data: b"mp4".to_vec(),
        };
        let poster = FilePart {
            filename: "poster.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: b"jpg".to_vec(),
        };

        let video = videos
            .create("Demo reel".to_string(), Some(&clip), Some(&poster))
            .await
            .unwrap();

        let file_ref = video.file.unwrap();
        let poster_ref = video.poster.unwrap();
        assert!(file_ref.starts_with("videos/"));
        assert!(poster_ref.starts_with("videos/"));
        assert!(dir.path().join(&file_ref).exists());
        assert!(dir.path().join(&poster_ref).exists());
    }

    #[tokio::test]
    async fn test_create_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let videos = service(dir.path()).await;

        let video = videos
            .create("Placeholder".to_string(), None, None)
            .await
            .unwrap();
        assert!(video.file.is_none());
        assert!(video.poster.is_none());

        let listed = videos.list().await.unwrap();
        assert_eq!(listed.len(), 1);
    }
}
