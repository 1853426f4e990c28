use anyhow::{Context, Result};
use reelpost_common::environment::{
    get_env_var, get_env_var_or, get_optional_env_var,
    variables::{OMDB_API_KEY, TMDB_API_KEY, WATCH_REGION},
};
use reelpost_metadata::{HttpMetadataClient, MetadataClientSettings};

const DEFAULT_WATCH_REGION: &str = "TR";

fn get_tmdb_api_key() -> Result<String> {
    get_env_var(TMDB_API_KEY)
        .with_context(|| "Could not retrieve the TMDB API key from the environment.")
}

pub fn initialize_metadata_client() -> Result<HttpMetadataClient> {
    let tmdb_api_key = get_tmdb_api_key()?;
    let omdb_api_key = get_optional_env_var(OMDB_API_KEY);
    let watch_region = get_env_var_or(WATCH_REGION, DEFAULT_WATCH_REGION);
    let settings =
        MetadataClientSettings::new(&tmdb_api_key, omdb_api_key.as_deref(), &watch_region);

    Ok(HttpMetadataClient::new(settings))
}
