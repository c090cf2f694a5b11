// Adapters layer: concrete implementations for external systems.

pub mod omdb;

pub use omdb::OmdbClient;
