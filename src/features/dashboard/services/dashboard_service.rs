use std::sync::Arc;

use crate::core::error::Result;
use crate::features::dashboard::dtos::DashboardOverviewDto;
use crate::features::designs::services::DesignService;
use crate::features::phones::services::PhoneService;
use crate::features::videos::services::VideoService;

pub struct DashboardService {
    phones: Arc<PhoneService>,
    designs: Arc<DesignService>,
    videos: Arc<VideoService>,
}

impl DashboardService {
    pub fn new(
        phones: Arc<PhoneService>,
        designs: Arc<DesignService>,
        videos: Arc<VideoService>,
    ) -> Self {
        Self {
            phones,
            designs,
            videos,
        }
    }

    pub async fn overview(&self) -> Result<DashboardOverviewDto> {
        Ok(DashboardOverviewDto {
            phones: self.phones.list().await?,
            designs: self.designs.list().await?,
            videos: self.videos.list().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::UploadStore;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn test_overview_collects_every_kind() {
        let dir = tempfile::tempdir().unwrap();
        let pool = test_pool().await;
        let uploads = Arc::new(UploadStore::local(dir.path()));

        let phones = Arc::new(PhoneService::new(pool.clone(), Arc::clone(&uploads)));
        let designs = Arc::new(DesignService::new(pool.clone(), Arc::clone(&uploads)));
        let videos = Arc::new(VideoService::new(pool, uploads));

        phones
            .create("Pixel 9".to_string(), 499.99, None, None)
            .await
            .unwrap();
        videos
            .create("Reel".to_string(), None, None)
            .await
            .unwrap();

        let dashboard = DashboardService::new(phones, designs, videos);
        let overview = dashboard.overview().await.unwrap();

        assert_eq!(overview.phones.len(), 1);
        assert_eq!(overview.phones[0].name, "Pixel 9");
        assert!(overview.designs.is_empty());
        assert_eq!(overview.videos.len(), 1);
    }
}
