//! Models to be used when deserializing TMDB and OMDb response bodies.
//! Fields the provider may leave out are optional here; display fallbacks are decided later when
//! the data is rendered.
//! Source: https://developer.themoviedb.org/reference/intro/getting-started

mod credits;
mod genre;
mod keyword;
mod movie_details;
mod search_result;
mod video;
mod watch_providers;

pub use credits::{CastMember, Credits, CrewMember};
pub use genre::Genre;
pub use keyword::Keyword;
pub use movie_details::MovieDetails;
pub use search_result::{AdvancedSearch, SearchResult};
pub use video::{select_trailer, Video};
pub use watch_providers::{WatchProvider, WatchProviders};

use serde::Deserialize;
use std::collections::HashMap;

/// `/search/movie` and `/discover/movie` responses.
#[derive(Deserialize, Debug)]
pub(crate) struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// `/genre/movie/list` response.
#[derive(Deserialize, Debug)]
pub(crate) struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// `/movie/{id}/keywords` response.
#[derive(Deserialize, Debug)]
pub(crate) struct KeywordList {
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// `/movie/{id}/watch/providers` response, keyed by region code.
#[derive(Deserialize, Debug)]
pub(crate) struct WatchProviderRegions {
    #[serde(default)]
    pub results: HashMap<String, WatchProviders>,
}

/// The one field of an OMDb title lookup Reelpost cares about.
#[derive(Deserialize, Debug)]
pub(crate) struct OmdbTitle {
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
}
