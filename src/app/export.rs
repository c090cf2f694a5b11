use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::{Movie, Storage};
use crate::utils::error::{CatalogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, json".to_string(),
            }),
        }
    }
}

/// CSV 每列的欄位
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: usize,
    imdb_id: &'a str,
    title: &'a str,
    year: &'a str,
    category: &'a str,
    quality: &'a str,
    imdb_rating: &'a str,
    genre: &'a str,
    links: String,
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    generated_at: DateTime<Utc>,
    count: usize,
    movies: &'a [&'a Movie],
}

pub struct Exporter<S: Storage> {
    storage: S,
}

impl<S: Storage> Exporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// 寫出列表，回傳檔案路徑
    pub async fn export(&self, movies: &[&Movie], format: ExportFormat) -> Result<String> {
        let data = match format {
            ExportFormat::Csv => to_csv(movies)?,
            ExportFormat::Json => to_json(movies, Utc::now())?,
        };

        let file_name = format!("catalog.{}", format.extension());
        tracing::debug!("Writing {} ({} bytes) to storage", file_name, data.len());
        let path = self.storage.write_file(&file_name, &data).await?;

        tracing::info!("💾 Exported {} movies to {}", movies.len(), path);
        Ok(path)
    }
}

fn to_csv(movies: &[&Movie]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for movie in movies {
        let links = movie
            .download_links()
            .into_iter()
            .map(|l| format!("{}={}", l.quality, l.url))
            .collect::<Vec<_>>()
            .join(";");

        writer.serialize(ExportRow {
            id: movie.id,
            imdb_id: &movie.imdb_id,
            title: movie.title(),
            year: movie.year(),
            category: movie.category.id(),
            quality: &movie.quality,
            imdb_rating: movie.metadata.imdb_rating.as_deref().unwrap_or(""),
            genre: movie.metadata.genre.as_deref().unwrap_or(""),
            links,
        })?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

fn to_json(movies: &[&Movie], generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let document = ExportDocument {
        generated_at,
        count: movies.len(),
        movies,
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CatalogEntry, Category, TitleMetadata};
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(format!("mock/{}", path))
        }
    }

    fn movies() -> Vec<Movie> {
        let mut first = CatalogEntry::new("tt1517268", Category::Hollywood, "4K");
        first.download_480p = Some("https://example.com/480".to_string());
        first.download_4k = Some("https://example.com/4k".to_string());
        let second = CatalogEntry::new("tt8983202", Category::South, "HD");

        vec![
            Movie::from_entry(
                7,
                first,
                TitleMetadata {
                    title: "Barbie".to_string(),
                    year: "2023".to_string(),
                    imdb_rating: Some("6.8".to_string()),
                    genre: Some("Adventure, Comedy".to_string()),
                    ..Default::default()
                },
            ),
            Movie::from_entry(
                14,
                second,
                TitleMetadata {
                    title: "Salaar".to_string(),
                    year: "2023".to_string(),
                    ..Default::default()
                },
            ),
        ]
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[tokio::test]
    async fn test_export_csv() {
        let storage = MockStorage::new();
        let exporter = Exporter::new(storage.clone());
        let movies = movies();
        let refs: Vec<&Movie> = movies.iter().collect();

        let path = exporter.export(&refs, ExportFormat::Csv).await.unwrap();
        assert_eq!(path, "mock/catalog.csv");

        let data = storage.get_file("catalog.csv").await.unwrap();
        let mut reader = csv::Reader::from_reader(data.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["id", "imdb_id", "title", "year", "category", "quality", "imdb_rating", "genre", "links"]
        );

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "Barbie");
        assert_eq!(&rows[0][7], "Adventure, Comedy");
        assert_eq!(
            &rows[0][8],
            "480p=https://example.com/480;4K=https://example.com/4k"
        );
        assert_eq!(&rows[1][4], "south");
        assert_eq!(&rows[1][8], "");
    }

    #[tokio::test]
    async fn test_export_json() {
        let storage = MockStorage::new();
        let exporter = Exporter::new(storage.clone());
        let movies = movies();
        let refs: Vec<&Movie> = movies.iter().take(1).collect();

        exporter.export(&refs, ExportFormat::Json).await.unwrap();

        let data = storage.get_file("catalog.json").await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&data).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["movies"][0]["title"], "Barbie");
        assert!(value["generated_at"].as_str().is_some());
    }
}
