use serde::{Deserialize, Serialize};

/// A TMDB movie genre, as used by both the genre list and movie details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}
