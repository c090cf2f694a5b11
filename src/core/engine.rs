use crate::core::catalog::Catalog;
use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct CatalogEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CatalogEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn load(&self) -> Result<Catalog> {
        tracing::info!("🎬 Loading movies from catalog...");

        let entries = self.pipeline.extract().await?;
        let total = entries.len();
        tracing::info!("Total movie entries: {}", total);

        let movies = self.pipeline.transform(entries).await?;
        tracing::info!(
            "✅ Successfully loaded {} movies with OMDb data",
            movies.len()
        );

        let dropped = total.saturating_sub(movies.len());
        if dropped > 0 {
            tracing::warn!("{} of {} entries skipped after failed lookups", dropped, total);
        }

        Ok(Catalog::new(movies))
    }
}
