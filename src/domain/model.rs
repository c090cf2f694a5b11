use crate::utils::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OMDb 用來表示缺值的字串
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    /// 只作為篩選條件使用，目錄項目必須屬於具體分類
    #[default]
    All,
    Bollywood,
    Hollywood,
    South,
    WebSeries,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Bollywood,
        Category::Hollywood,
        Category::South,
        Category::WebSeries,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Bollywood => "bollywood",
            Category::Hollywood => "hollywood",
            Category::South => "south",
            Category::WebSeries => "webseries",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Home",
            Category::Bollywood => "Bollywood",
            Category::Hollywood => "Hollywood",
            Category::South => "South",
            Category::WebSeries => "Web Series",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::All => "🏠",
            Category::Bollywood => "🎬",
            Category::Hollywood => "🎥",
            Category::South => "🌟",
            Category::WebSeries => "📺",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| CatalogError::InvalidInput {
                message: format!(
                    "Unknown category '{}'. Valid categories: {}",
                    s,
                    Category::ALL.map(|c| c.id()).join(", ")
                ),
            })
    }
}

// 目錄檔與命令列共用同一套不分大小寫的解析
impl TryFrom<String> for Category {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 目錄檔中手寫的一筆資料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub imdb_id: String,
    pub category: Category,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub download_480p: Option<String>,
    #[serde(default)]
    pub download_720p: Option<String>,
    #[serde(default)]
    pub download_1080p: Option<String>,
    #[serde(default)]
    pub download_4k: Option<String>,
}

impl CatalogEntry {
    pub fn new(imdb_id: impl Into<String>, category: Category, quality: impl Into<String>) -> Self {
        Self {
            imdb_id: imdb_id.into(),
            category,
            quality: quality.into(),
            download_480p: None,
            download_720p: None,
            download_1080p: None,
            download_4k: None,
        }
    }

    pub fn download_links(&self) -> Vec<DownloadLink> {
        ordered_links([
            &self.download_480p,
            &self.download_720p,
            &self.download_1080p,
            &self.download_4k,
        ])
    }
}

/// 依 480p、720p、1080p、4K 順序列出下載連結，空字串視為沒有連結。
fn ordered_links(urls: [&Option<String>; 4]) -> Vec<DownloadLink> {
    ["480p", "720p", "1080p", "4K"]
        .into_iter()
        .zip(urls)
        .filter_map(|(quality, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| DownloadLink {
                    quality: quality.to_string(),
                    url: u.to_string(),
                })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// 從 OMDb 回應原樣複製過來的欄位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleMetadata {
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub imdb_rating: Option<String>,
    pub imdb_votes: Option<String>,
    pub metascore: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub ratings: Vec<Rating>,
    pub total_seasons: Option<String>,
    pub box_office: Option<String>,
    pub production: Option<String>,
}

impl TitleMetadata {
    pub fn is_series(&self) -> bool {
        self.kind.as_deref() == Some("series")
    }

    pub fn rating_from(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.source == source)
            .map(|r| r.value.as_str())
    }
}

/// 有值且不是 `N/A` 時才回傳內容
pub fn known(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != NOT_AVAILABLE)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    /// 在目錄檔中的位置，從 1 開始
    pub id: usize,
    pub imdb_id: String,
    pub category: Category,
    pub quality: String,
    pub download_480p: Option<String>,
    pub download_720p: Option<String>,
    pub download_1080p: Option<String>,
    pub download_4k: Option<String>,
    #[serde(flatten)]
    pub metadata: TitleMetadata,
}

impl Movie {
    pub fn from_entry(id: usize, entry: CatalogEntry, metadata: TitleMetadata) -> Self {
        Self {
            id,
            imdb_id: entry.imdb_id,
            category: entry.category,
            quality: entry.quality,
            download_480p: entry.download_480p,
            download_720p: entry.download_720p,
            download_1080p: entry.download_1080p,
            download_4k: entry.download_4k,
            metadata,
        }
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn year(&self) -> &str {
        &self.metadata.year
    }

    pub fn download_links(&self) -> Vec<DownloadLink> {
        ordered_links([
            &self.download_480p,
            &self.download_720p,
            &self.download_1080p,
            &self.download_4k,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub quality: String,
    pub url: String,
}

/// 下載視窗顯示的內容
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetails {
    pub imdb_id: String,
    pub links: Vec<DownloadLink>,
    #[serde(flatten)]
    pub metadata: TitleMetadata,
}

impl From<&Movie> for MovieDetails {
    fn from(movie: &Movie) -> Self {
        Self {
            imdb_id: movie.imdb_id.clone(),
            links: movie.download_links(),
            metadata: movie.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("Bollywood".parse::<Category>().unwrap(), Category::Bollywood);
        assert_eq!(" webseries ".parse::<Category>().unwrap(), Category::WebSeries);
        assert_eq!("ALL".parse::<Category>().unwrap(), Category::All);
        assert!("tollywood".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_ignores_case_but_writes_lowercase() {
        let parsed: Category = serde_json::from_str("\"South\"").unwrap();
        assert_eq!(parsed, Category::South);
        assert!(serde_json::from_str::<Category>("\"tollywood\"").is_err());

        assert_eq!(serde_json::to_string(&Category::WebSeries).unwrap(), "\"webseries\"");
    }

    #[test]
    fn test_download_links_order_and_empty_skipped() {
        let mut entry = CatalogEntry::new("tt1517268", Category::Hollywood, "4K");
        entry.download_4k = Some("https://example.com/4k".to_string());
        entry.download_480p = Some("https://example.com/480".to_string());
        entry.download_720p = Some(String::new());

        let links = entry.download_links();
        let qualities: Vec<&str> = links.iter().map(|l| l.quality.as_str()).collect();
        assert_eq!(qualities, vec!["480p", "4K"]);
        assert_eq!(links[1].url, "https://example.com/4k");
    }

    #[test]
    fn test_known_hides_not_available() {
        assert_eq!(known(&Some("PG-13".to_string())), Some("PG-13"));
        assert_eq!(known(&Some("N/A".to_string())), None);
        assert_eq!(known(&Some(String::new())), None);
        assert_eq!(known(&None), None);
    }

    #[test]
    fn test_rating_from_source() {
        let metadata = TitleMetadata {
            ratings: vec![
                Rating {
                    source: "Internet Movie Database".to_string(),
                    value: "8.8/10".to_string(),
                },
                Rating {
                    source: "Rotten Tomatoes".to_string(),
                    value: "87%".to_string(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(metadata.rating_from("Rotten Tomatoes"), Some("87%"));
        assert_eq!(metadata.rating_from("Metacritic"), None);
    }

    #[test]
    fn test_movie_details_from_movie() {
        let mut entry = CatalogEntry::new("tt6473300", Category::WebSeries, "Full HD");
        entry.download_720p = Some("https://example.com/720".to_string());
        let metadata = TitleMetadata {
            title: "Mirzapur".to_string(),
            year: "2018–".to_string(),
            kind: Some("series".to_string()),
            total_seasons: Some("3".to_string()),
            ..Default::default()
        };
        let movie = Movie::from_entry(16, entry, metadata);

        let details = MovieDetails::from(&movie);
        assert_eq!(details.imdb_id, "tt6473300");
        assert_eq!(details.metadata.title, "Mirzapur");
        assert!(details.metadata.is_series());
        assert_eq!(details.links.len(), 1);
        assert_eq!(details.links[0].quality, "720p");
    }
}
