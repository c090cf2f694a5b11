use crate::core::{CatalogEntry, ConfigProvider, MetadataSource, Movie, Pipeline};
use crate::config::toml_config::CatalogConfig;
use crate::utils::error::{CatalogError, Result};
use futures::stream::{self, StreamExt};

/// 讀取目錄並向 OMDb 補齊資料
pub struct CatalogPipeline<M: MetadataSource> {
    source: M,
    config: CatalogConfig,
}

impl<M: MetadataSource> CatalogPipeline<M> {
    pub fn new(source: M, config: CatalogConfig) -> Self {
        Self { source, config }
    }
}

#[async_trait::async_trait]
impl<M: MetadataSource> Pipeline for CatalogPipeline<M> {
    async fn extract(&self) -> Result<Vec<CatalogEntry>> {
        let mut entries = Vec::with_capacity(self.config.movies.len());

        for entry in &self.config.movies {
            if entry.imdb_id.trim().is_empty() {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "movies.imdb_id".to_string(),
                    value: entry.imdb_id.clone(),
                    reason: "IMDb id cannot be empty".to_string(),
                });
            }
            entries.push(entry.clone());
        }

        tracing::debug!("Extracted {} catalog entries", entries.len());
        Ok(entries)
    }

    async fn transform(&self, entries: Vec<CatalogEntry>) -> Result<Vec<Movie>> {
        // 0 表示全部同時送出
        let limit = match self.config.concurrent_requests() {
            0 => entries.len().max(1),
            n => n,
        };
        let source = &self.source;

        tracing::debug!(
            "Fetching {} titles from {} (max {} in flight)",
            entries.len(),
            source.name(),
            limit
        );

        let results: Vec<Option<Movie>> = stream::iter(entries.into_iter().enumerate())
            .map(|(index, entry)| async move {
                match source.fetch_title(&entry.imdb_id).await {
                    Ok(metadata) => Some(Movie::from_entry(index + 1, entry, metadata)),
                    Err(e) => {
                        tracing::warn!(
                            "⚠️ {} lookup failed for {}: {}",
                            source.name(),
                            entry.imdb_id,
                            e
                        );
                        None
                    }
                }
            })
            .buffered(limit)
            .collect()
            .await;

        Ok(results.into_iter().flatten().collect())
    }
}
