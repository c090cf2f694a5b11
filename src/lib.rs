pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig, Command};

pub use adapters::OmdbClient;
pub use config::toml_config::CatalogConfig;
pub use core::{
    browser::BrowserState, catalog::Catalog, engine::CatalogEngine, filter::CatalogFilter,
    pipeline::CatalogPipeline,
};
pub use domain::model::{CatalogEntry, Category, Movie, MovieDetails};
pub use utils::error::{CatalogError, Result};
