use std::sync::Arc;

use crate::core::error::Result;
use crate::features::designs::services::DesignService;
use crate::features::phones::services::PhoneService;
use crate::features::search::dtos::SearchResultsDto;

/// Substring search over phones and designs, each kind queried
/// independently with no cross-kind ranking.
pub struct SearchService {
    phones: Arc<PhoneService>,
    designs: Arc<DesignService>,
}

impl SearchService {
    pub fn new(phones: Arc<PhoneService>, designs: Arc<DesignService>) -> Self {
        Self { phones, designs }
    }

    /// An empty or whitespace-only query returns no rows for either kind
    /// without touching the database.
    pub async fn search(&self, query: &str) -> Result<SearchResultsDto> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResultsDto {
                query: String::new(),
                phones: Vec::new(),
                designs: Vec::new(),
            });
        }

        let phones = self.phones.search(query).await?;
        let designs = self.designs.search(query).await?;

        Ok(SearchResultsDto {
            query: query.to_string(),
            phones,
            designs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::UploadStore;
    use crate::shared::test_helpers::test_pool;

    async fn service(dir: &std::path::Path) -> SearchService {
        let pool = test_pool().await;
        let uploads = Arc::new(UploadStore::local(dir));
        let phones = Arc::new(PhoneService::new(pool.clone(), Arc::clone(&uploads)));
        let designs = Arc::new(DesignService::new(pool, uploads));

        phones
            .create("Pixel 9".to_string(), 499.99, None, None)
            .await
            .unwrap();
        designs
            .create("Pixel art pack".to_string(), 3.0, true, None, None)
            .await
            .unwrap();

        SearchService::new(phones, designs)
    }

    #[tokio::test]
    async fn test_empty_query_returns_no_rows() {
        let dir = tempfile::tempdir().unwrap();
        let search = service(dir.path()).await;

        for q in ["", "   "] {
            let results = search.search(q).await.unwrap();
            assert!(results.phones.is_empty());
            assert!(results.designs.is_empty());
        }
    }

    #[tokio::test]
    async fn test_matches_each_kind_independently() {
        let dir = tempfile::tempdir().unwrap();
        let search = service(dir.path()).await;

        let results = search.search("pixel").await.unwrap();
        assert_eq!(results.phones.len(), 1);
        assert_eq!(results.designs.len(), 1);

        let results = search.search("art").await.unwrap();
        assert!(results.phones.is_empty());
        assert_eq!(results.designs.len(), 1);
    }
}
