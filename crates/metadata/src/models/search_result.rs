use serde::{Deserialize, Serialize};

/// A single candidate returned from a movie search.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    pub title: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
}

/// Optional filters for a discover search. Unset filters are left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedSearch {
    pub query: Option<String>,
    pub year: Option<u16>,
    pub genre_id: Option<u32>,
}

impl AdvancedSearch {
    /// The query string pairs for the filters that are set, in a stable order.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(query) = self.query.as_ref().filter(|q| !q.is_empty()) {
            params.push(("query", query.clone()));
        }
        if let Some(year) = self.year {
            params.push(("primary_release_year", year.to_string()));
        }
        if let Some(genre_id) = self.genre_id {
            params.push(("with_genres", genre_id.to_string()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_params_omits_unset_filters() {
        // Arrange
        let search = AdvancedSearch {
            query: None,
            year: Some(1999),
            genre_id: None,
        };

        // Act
        let actual = search.to_params();

        // Assert
        assert_eq!(vec![("primary_release_year", String::from("1999"))], actual);
    }

    #[test]
    fn to_params_treats_empty_query_as_unset() {
        // Arrange
        let search = AdvancedSearch {
            query: Some(String::new()),
            year: None,
            genre_id: Some(18),
        };

        // Act
        let actual = search.to_params();

        // Assert
        assert_eq!(vec![("with_genres", String::from("18"))], actual);
    }
}
