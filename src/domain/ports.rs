use crate::domain::model::{CatalogEntry, Movie, TitleMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    /// 0 表示不限制同時進行的請求數
    fn concurrent_requests(&self) -> usize;
}

/// 外部影片資料庫
#[async_trait]
pub trait MetadataSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch_title(&self, imdb_id: &str) -> Result<TitleMetadata>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CatalogEntry>>;
    async fn transform(&self, entries: Vec<CatalogEntry>) -> Result<Vec<Movie>>;
}
