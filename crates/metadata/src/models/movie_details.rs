use crate::models::Genre;
use serde::{Deserialize, Serialize};

/// Full metadata for one movie as returned by `/movie/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<u32>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    /// The IMDb identifier, used to look the movie up with the external rating provider.
    pub imdb_id: Option<String>,
}
