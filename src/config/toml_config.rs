use crate::domain::model::{CatalogEntry, Category};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_CATALOG: &str = include_str!("../../catalog/default.toml");
const DEFAULT_ENDPOINT: &str = "https://www.omdbapi.com/";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub movies: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    pub concurrent_requests: Option<usize>,
}

impl CatalogConfig {
    /// 內建目錄
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OMDB_API_KEY})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 套用命令列覆蓋設定
    pub fn apply_overrides(
        &mut self,
        endpoint: Option<&str>,
        api_key: Option<&str>,
        concurrent_requests: Option<usize>,
    ) {
        if let Some(endpoint) = endpoint {
            tracing::debug!("🔧 Endpoint overridden to: {}", endpoint);
            self.source.endpoint = endpoint.to_string();
        }
        if let Some(api_key) = api_key {
            tracing::debug!("🔧 API key overridden from command line");
            self.source.api_key = Some(api_key.to_string());
        }
        if let Some(concurrent) = concurrent_requests {
            tracing::debug!("🔧 Concurrent requests overridden to: {}", concurrent);
            self.extract.concurrent_requests = Some(concurrent);
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_positive_number("source.timeout_seconds", timeout, 1)?;
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.movies.iter().enumerate() {
            let field = format!("movies[{}]", index);
            validate_non_empty_string(&format!("{}.imdb_id", field), &entry.imdb_id)?;

            if entry.category == Category::All {
                return Err(CatalogError::InvalidConfigValueError {
                    field: format!("{}.category", field),
                    value: entry.category.to_string(),
                    reason: "'all' is a filter, pick a concrete category".to_string(),
                });
            }

            // 與 Catalog::find 一樣不分大小寫比對 id
            if !seen.insert(entry.imdb_id.to_ascii_lowercase()) {
                tracing::warn!(
                    "⚠️ {}.imdb_id '{}' repeats an earlier entry, lookups by id return the first one",
                    field,
                    entry.imdb_id
                );
            }

            for link in entry.download_links() {
                if url::Url::parse(&link.url).is_err() {
                    tracing::warn!(
                        "⚠️ {}.download_{} is not a URL: {}",
                        field,
                        link.quality.to_lowercase(),
                        link.url
                    );
                }
            }
        }

        if self.movies.is_empty() {
            tracing::warn!("📭 Catalog has no movie entries");
        }

        Ok(())
    }
}

impl ConfigProvider for CatalogConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn api_key(&self) -> Option<&str> {
        self.source.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.source
            .timeout_seconds
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn concurrent_requests(&self) -> usize {
        self.extract.concurrent_requests.unwrap_or(0)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
