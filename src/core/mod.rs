pub mod browser;
pub mod catalog;
pub mod engine;
pub mod filter;
pub mod pipeline;

pub use crate::domain::model::{CatalogEntry, Movie, MovieDetails};
pub use crate::domain::ports::{ConfigProvider, MetadataSource, Pipeline, Storage};
pub use crate::utils::error::Result;
