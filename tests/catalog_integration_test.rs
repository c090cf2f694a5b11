use httpmock::prelude::*;
use movie_catalog::app::export::{ExportFormat, Exporter};
use movie_catalog::{
    CatalogConfig, CatalogEngine, CatalogFilter, CatalogPipeline, Category, LocalStorage,
    OmdbClient,
};
use tempfile::TempDir;

fn catalog_toml(endpoint: &str) -> String {
    format!(
        r#"
[source]
endpoint = "{}"
api_key = "integration-key"
timeout_seconds = 5

[[movies]]
imdb_id = "tt15398776"
category = "hollywood"
quality = "4K"
download_480p = "https://example.com/oppenheimer/480"
download_4k = "https://example.com/oppenheimer/4k"

[[movies]]
imdb_id = "tt0000001"
category = "bollywood"
quality = "HD"

[[movies]]
imdb_id = "tt8178634"
category = "south"
quality = ""
download_720p = "https://example.com/rrr/720"
download_1080p = ""
"#,
        endpoint
    )
}

fn mock_titles(server: &MockServer) -> Vec<httpmock::Mock<'_>> {
    vec![
        server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("i", "tt15398776")
                .query_param("apikey", "integration-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "Title": "Oppenheimer",
                    "Year": "2023",
                    "Rated": "R",
                    "Genre": "Biography, Drama, History",
                    "imdbRating": "8.3",
                    "Type": "movie",
                    "Poster": "https://example.com/oppenheimer.jpg",
                    "Response": "True"
                }));
        }),
        server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("i", "tt0000001")
                .query_param("apikey", "integration-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "Response": "False",
                    "Error": "Incorrect IMDb ID."
                }));
        }),
        server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("i", "tt8178634")
                .query_param("apikey", "integration-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "Title": "RRR",
                    "Year": "2022",
                    "Poster": "N/A",
                    "Type": "movie",
                    "Ratings": [{"Source": "Rotten Tomatoes", "Value": "95%"}],
                    "Response": "True"
                }));
        }),
    ]
}

async fn load_catalog(server: &MockServer) -> movie_catalog::Catalog {
    let config = CatalogConfig::from_toml_str(&catalog_toml(&server.url("/"))).unwrap();
    let source = OmdbClient::from_config(&config).unwrap();
    let engine = CatalogEngine::new(CatalogPipeline::new(source, config));
    engine.load().await.unwrap()
}

#[tokio::test]
async fn test_end_to_end_load_drops_failed_lookup() {
    let server = MockServer::start();
    let mocks = mock_titles(&server);

    let catalog = load_catalog(&server).await;

    for mock in &mocks {
        mock.assert();
    }

    assert_eq!(catalog.len(), 2);
    let titles: Vec<&str> = catalog.movies().iter().map(|m| m.title()).collect();
    assert_eq!(titles, vec!["Oppenheimer", "RRR"]);
    assert_eq!(catalog.movies()[1].id, 3);
    assert!(catalog.find("tt0000001").is_none());
    assert!(catalog.movies()[1].metadata.poster.is_none());
}

#[tokio::test]
async fn test_end_to_end_filter_and_details() {
    let server = MockServer::start();
    let _mocks = mock_titles(&server);

    let catalog = load_catalog(&server).await;

    let south = catalog.filter(&CatalogFilter::new(Category::South, ""));
    assert_eq!(south.len(), 1);
    assert_eq!(south[0].imdb_id, "tt8178634");

    let by_year = catalog.filter(&CatalogFilter::new(Category::All, "2023"));
    assert_eq!(by_year.len(), 1);
    assert_eq!(by_year[0].title(), "Oppenheimer");

    let details = catalog.details("tt8178634").unwrap();
    assert_eq!(details.links.len(), 1);
    assert_eq!(details.links[0].quality, "720p");
    assert_eq!(details.metadata.rating_from("Rotten Tomatoes"), Some("95%"));

    let details = catalog.details("tt15398776").unwrap();
    let qualities: Vec<&str> = details.links.iter().map(|l| l.quality.as_str()).collect();
    assert_eq!(qualities, vec!["480p", "4K"]);
}

#[tokio::test]
async fn test_end_to_end_server_error_drops_everything() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(500);
    });

    let catalog = load_catalog(&server).await;

    // 每一筆都失敗時仍回傳空目錄
    assert!(api_mock.hits() >= 3);
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_end_to_end_export_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let _mocks = mock_titles(&server);
    let catalog = load_catalog(&server).await;

    let exporter = Exporter::new(LocalStorage::new(output_path.clone()));
    let movies = catalog.filter(&CatalogFilter::default());

    let path = exporter.export(&movies, ExportFormat::Csv).await.unwrap();
    assert!(path.ends_with("catalog.csv"));

    let full_path = std::path::Path::new(&output_path).join("catalog.csv");
    let content = std::fs::read_to_string(&full_path).unwrap();
    assert!(content.starts_with("id,imdb_id,title,year,category,quality,imdb_rating,genre,links"));
    assert!(content.contains("Oppenheimer"));
    assert!(content.contains("RRR"));

    exporter.export(&movies, ExportFormat::Json).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(std::path::Path::new(&output_path).join("catalog.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["count"], 2);
}
