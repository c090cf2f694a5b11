//! OMDb (Open Movie Database) metadata source.
//!
//! One GET per title: `{endpoint}?i={imdb_id}&apikey={key}`. OMDb answers
//! unknown ids with HTTP 200 and `"Response": "False"`, so the body is
//! checked as well as the status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::model::{Rating, TitleMetadata, NOT_AVAILABLE};
use crate::domain::ports::{ConfigProvider, MetadataSource};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_required_value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbResponse {
    response: String,
    error: Option<String>,
    title: Option<String>,
    year: Option<String>,
    poster: Option<String>,
    rated: Option<String>,
    released: Option<String>,
    runtime: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    writer: Option<String>,
    actors: Option<String>,
    plot: Option<String>,
    language: Option<String>,
    country: Option<String>,
    awards: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    imdb_votes: Option<String>,
    metascore: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(default)]
    ratings: Vec<OmdbRating>,
    #[serde(rename = "totalSeasons")]
    total_seasons: Option<String>,
    box_office: Option<String>,
    production: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OmdbRating {
    source: String,
    value: String,
}

impl OmdbResponse {
    fn into_metadata(self, imdb_id: &str) -> Result<TitleMetadata> {
        if self.response != "True" {
            return Err(CatalogError::UpstreamError {
                imdb_id: imdb_id.to_string(),
                message: self
                    .error
                    .unwrap_or_else(|| "unknown OMDb error".to_string()),
            });
        }

        Ok(TitleMetadata {
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            poster: self.poster.filter(|p| p != NOT_AVAILABLE && !p.is_empty()),
            rated: self.rated,
            released: self.released,
            runtime: self.runtime,
            genre: self.genre,
            director: self.director,
            writer: self.writer,
            actors: self.actors,
            plot: self.plot,
            language: self.language,
            country: self.country,
            awards: self.awards,
            imdb_rating: self.imdb_rating,
            imdb_votes: self.imdb_votes,
            metascore: self.metascore,
            kind: self.kind,
            ratings: self
                .ratings
                .into_iter()
                .map(|r| Rating {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
            total_seasons: self.total_seasons,
            box_office: self.box_office,
            production: self.production,
        })
    }
}

pub struct OmdbClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(endpoint: String, api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// 從配置建立；API key 缺少或仍是 `${VAR}` 時回傳錯誤
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_key = validate_required_value("source.api_key", config.api_key())?;
        Self::new(
            config.api_endpoint().to_string(),
            api_key.to_string(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }
}

#[async_trait]
impl MetadataSource for OmdbClient {
    fn name(&self) -> &'static str {
        "omdb"
    }

    async fn fetch_title(&self, imdb_id: &str) -> Result<TitleMetadata> {
        debug!(imdb_id, endpoint = %self.endpoint, "Fetching OMDb title");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("i", imdb_id), ("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        debug!(imdb_id, status = %response.status(), "OMDb responded");

        let body: OmdbResponse = response.json().await?;
        body.into_metadata(imdb_id)
    }
}
