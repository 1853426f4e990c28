use crate::models::{
    select_trailer, AdvancedSearch, Credits, Genre, GenreList, Keyword, KeywordList,
    MovieDetails, OmdbTitle, ResultsPage, SearchResult, Video, WatchProviderRegions,
    WatchProviders,
};
use crate::{MetadataClient, MetadataError, MAX_SEARCH_RESULTS};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// OMDb's placeholder for a value it doesn't have.
const OMDB_NOT_AVAILABLE: &str = "N/A";

/// Settings to configure a [HttpMetadataClient].
#[derive(Debug, Clone)]
pub struct MetadataClientSettings {
    pub tmdb_api_key: String,
    pub tmdb_base_url: String,
    /// External ratings are disabled when this is [None].
    pub omdb_api_key: Option<String>,
    pub omdb_base_url: String,
    /// Region code used to pick watch providers, e.g. `TR`.
    pub watch_region: String,
}

impl MetadataClientSettings {
    /// Settings pointing at the public TMDB and OMDb endpoints.
    pub fn new(tmdb_api_key: &str, omdb_api_key: Option<&str>, watch_region: &str) -> Self {
        MetadataClientSettings {
            tmdb_api_key: String::from(tmdb_api_key),
            tmdb_base_url: String::from(DEFAULT_TMDB_BASE_URL),
            omdb_api_key: omdb_api_key.map(String::from),
            omdb_base_url: String::from(DEFAULT_OMDB_BASE_URL),
            watch_region: String::from(watch_region),
        }
    }
}

/// A [MetadataClient] backed by the TMDB and OMDb HTTP APIs.
#[derive(Clone)]
pub struct HttpMetadataClient {
    http: reqwest::Client,
    settings: MetadataClientSettings,
}

impl HttpMetadataClient {
    pub fn new(settings: MetadataClientSettings) -> Self {
        if settings.omdb_api_key.is_none() {
            info!("No OMDb API key given; external ratings will be reported as unknown.");
        }
        HttpMetadataClient {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// GET some TMDB path. The API key is added to the query string here and is kept out of logs.
    async fn get_tmdb<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, MetadataError> {
        let url = format!("{}{}", self.settings.tmdb_base_url, path);
        debug!(url = %url, "Sending TMDB request.");
        let mut query = vec![("api_key", self.settings.tmdb_api_key.as_str())];
        query.extend_from_slice(params);

        let response = self.http.get(&url).query(&query).send().await?;
        read_body(response, url).await
    }
}

async fn read_body<T: DeserializeOwned>(
    response: reqwest::Response,
    url: String,
) -> Result<T, MetadataError> {
    let status = response.status();
    if !status.is_success() {
        return Err(MetadataError::Status {
            status: status.as_u16(),
            url,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice::<T>(&body).map_err(|source| MetadataError::Decode { url, source })
}

#[async_trait]
impl MetadataClient for HttpMetadataClient {
    #[tracing::instrument(skip(self))]
    async fn search(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        let page: ResultsPage<SearchResult> = self
            .get_tmdb(
                "/search/movie",
                &[("query", query), ("language", language)],
            )
            .await?;
        let mut results = page.results;
        results.truncate(MAX_SEARCH_RESULTS);
        debug!(count = results.len(), "Search complete.");

        Ok(results)
    }

    #[tracing::instrument(skip(self))]
    async fn advanced_search(
        &self,
        filters: &AdvancedSearch,
        language: &str,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        let filter_params = filters.to_params();
        let mut params: Vec<(&str, &str)> = vec![("language", language)];
        params.extend(filter_params.iter().map(|(k, v)| (*k, v.as_str())));

        let page: ResultsPage<SearchResult> = self.get_tmdb("/discover/movie", &params).await?;
        let mut results = page.results;
        results.truncate(MAX_SEARCH_RESULTS);
        debug!(count = results.len(), "Advanced search complete.");

        Ok(results)
    }

    async fn genres(&self, language: &str) -> Result<Vec<Genre>, MetadataError> {
        let list: GenreList = self
            .get_tmdb("/genre/movie/list", &[("language", language)])
            .await?;
        Ok(list.genres)
    }

    async fn details(&self, movie_id: u64, language: &str) -> Result<MovieDetails, MetadataError> {
        self.get_tmdb(&format!("/movie/{}", movie_id), &[("language", language)])
            .await
    }

    async fn credits(&self, movie_id: u64) -> Result<Credits, MetadataError> {
        self.get_tmdb(&format!("/movie/{}/credits", movie_id), &[])
            .await
    }

    async fn keywords(&self, movie_id: u64) -> Result<Vec<Keyword>, MetadataError> {
        let list: KeywordList = self
            .get_tmdb(&format!("/movie/{}/keywords", movie_id), &[])
            .await?;
        Ok(list.keywords)
    }

    async fn watch_providers(&self, movie_id: u64) -> Result<WatchProviders, MetadataError> {
        let mut regions: WatchProviderRegions = self
            .get_tmdb(&format!("/movie/{}/watch/providers", movie_id), &[])
            .await?;
        Ok(regions
            .results
            .remove(&self.settings.watch_region)
            .unwrap_or_default())
    }

    async fn trailer_link(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<Option<String>, MetadataError> {
        let page: ResultsPage<Video> = self
            .get_tmdb(
                &format!("/movie/{}/videos", movie_id),
                &[("language", language)],
            )
            .await?;
        Ok(select_trailer(&page.results))
    }

    #[tracing::instrument(skip(self))]
    async fn external_rating(
        &self,
        external_id: Option<&str>,
    ) -> Result<Option<String>, MetadataError> {
        let api_key = match self.settings.omdb_api_key.as_deref() {
            Some(k) => k,
            None => return Ok(None),
        };
        let external_id = match external_id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                debug!("No external identifier; skipping the rating lookup.");
                return Ok(None);
            }
        };

        let url = format!("{}/", self.settings.omdb_base_url);
        debug!(url = %url, "Sending OMDb request.");
        let response = self
            .http
            .get(&url)
            .query(&[("apikey", api_key), ("i", external_id)])
            .send()
            .await?;
        let title: OmdbTitle = read_body(response, url).await?;

        Ok(title.imdb_rating.filter(|r| r != OMDB_NOT_AVAILABLE))
    }
}
