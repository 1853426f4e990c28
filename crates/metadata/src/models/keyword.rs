use serde::{Deserialize, Serialize};

/// A tag TMDB associates with a movie.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keyword {
    pub id: u64,
    pub name: String,
}
