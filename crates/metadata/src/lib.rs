//! Read-only access to the movie metadata provider (TMDB) and the external rating provider (OMDb).

use async_trait::async_trait;

mod client;
mod metadata_error;
pub mod models;

pub use client::{HttpMetadataClient, MetadataClientSettings};
pub use metadata_error::MetadataError;

use models::{
    AdvancedSearch, Credits, Genre, Keyword, MovieDetails, SearchResult, WatchProviders,
};

/// The most search results handed back from a single search.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Operations Reelpost needs from its metadata providers. Every call is a single request with no
/// retries; failures are returned to the caller to decide how to surface them.
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// Search by title. Returns at most [MAX_SEARCH_RESULTS] results in provider relevance order.
    async fn search(&self, query: &str, language: &str)
        -> Result<Vec<SearchResult>, MetadataError>;

    /// Search with optional filters. Returns at most [MAX_SEARCH_RESULTS] results.
    async fn advanced_search(
        &self,
        filters: &AdvancedSearch,
        language: &str,
    ) -> Result<Vec<SearchResult>, MetadataError>;

    /// All movie genres, in provider order.
    async fn genres(&self, language: &str) -> Result<Vec<Genre>, MetadataError>;

    async fn details(&self, movie_id: u64, language: &str) -> Result<MovieDetails, MetadataError>;

    async fn credits(&self, movie_id: u64) -> Result<Credits, MetadataError>;

    async fn keywords(&self, movie_id: u64) -> Result<Vec<Keyword>, MetadataError>;

    /// Watch providers for the configured region; empty if the region has none.
    async fn watch_providers(&self, movie_id: u64) -> Result<WatchProviders, MetadataError>;

    /// Embed URL of the movie's first YouTube trailer, if it has one.
    async fn trailer_link(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<Option<String>, MetadataError>;

    /// Rating from the external provider. [None] when the provider isn't configured or there is
    /// no external identifier to look up.
    async fn external_rating(
        &self,
        external_id: Option<&str>,
    ) -> Result<Option<String>, MetadataError>;
}
