//! Display values derived from provider data, with the fallbacks a report shows for missing data.

use crate::ReportInput;

pub const UNKNOWN: &str = "Unknown";
pub const DEFAULT_TITLE: &str = "Movie Details";
pub const MISSING_OVERVIEW: &str = "No overview available.";
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const EXTERNAL_TITLE_BASE_URL: &str = "https://www.imdb.com/title/";
/// Link used when there's no external identifier to point at.
const PLACEHOLDER_LINK: &str = "#";
/// How many cast members are listed.
pub const CAST_LIMIT: usize = 5;
/// Meta descriptions at or above this many characters are truncated.
const META_DESCRIPTION_LIMIT: usize = 160;
const ELLIPSIS: &str = "...";

/// Render-ready values for every part of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFields {
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub poster_url: Option<String>,
    pub genres: String,
    pub runtime: String,
    pub budget: String,
    pub revenue: String,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
    pub tags: String,
    pub external_rating: String,
    pub external_link: String,
    pub trailer_url: Option<String>,
}

impl ReportFields {
    pub fn derive(input: &ReportInput) -> Self {
        let details = input.details;
        let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
        let tags: Vec<&str> = input.keywords.iter().map(|k| k.name.as_str()).collect();

        ReportFields {
            title: text_or(details.title.as_deref(), DEFAULT_TITLE),
            overview: text_or(details.overview.as_deref(), MISSING_OVERVIEW),
            release_date: text_or(details.release_date.as_deref(), UNKNOWN),
            poster_url: non_empty(details.poster_path.as_deref())
                .map(|p| format!("{}{}", POSTER_BASE_URL, p)),
            genres: join_or_unknown(&genres),
            runtime: with_unit(details.runtime, "minutes"),
            budget: with_unit(details.budget, "USD"),
            revenue: with_unit(details.revenue, "USD"),
            vote_average: details.vote_average,
            vote_count: details.vote_count,
            directors: to_owned(input.credits.directors()),
            cast: to_owned(input.credits.top_cast(CAST_LIMIT)),
            tags: join_or_unknown(&tags),
            external_rating: text_or(input.external_rating, UNKNOWN),
            external_link: match non_empty(details.imdb_id.as_deref()) {
                Some(id) => format!("{}{}/", EXTERNAL_TITLE_BASE_URL, id),
                None => String::from(PLACEHOLDER_LINK),
            },
            trailer_url: non_empty(input.trailer_url).map(String::from),
        }
    }

    pub fn directors_display(&self) -> String {
        join_or_unknown(&self.directors)
    }

    pub fn cast_display(&self) -> String {
        join_or_unknown(&self.cast)
    }

    /// `average (Votes: count)`, with either part falling back to unknown.
    pub fn provider_rating_display(&self) -> String {
        format!(
            "{} (Votes: {})",
            self.vote_average
                .map(format_rating)
                .unwrap_or_else(|| String::from(UNKNOWN)),
            self.vote_count
                .map(|v| v.to_string())
                .unwrap_or_else(|| String::from(UNKNOWN))
        )
    }

    pub fn meta_description(&self) -> String {
        meta_description(&self.overview)
    }

    pub fn meta_keywords(&self) -> String {
        format!("{}, {}, {}", self.title, self.genres, self.tags)
    }
}

/// Shorten text for a `<meta name="description">` tag: anything of 160 characters or more is
/// cut to 157 characters plus an ellipsis.
pub fn meta_description(overview: &str) -> String {
    if overview.chars().count() < META_DESCRIPTION_LIMIT {
        return String::from(overview);
    }
    let mut truncated: String = overview
        .chars()
        .take(META_DESCRIPTION_LIMIT - ELLIPSIS.len())
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Ratings keep their decimal point, so TMDB's `8.0` stays `8.0` rather than `8`.
fn format_rating(value: f64) -> String {
    format!("{:?}", value)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    String::from(non_empty(value).unwrap_or(fallback))
}

fn with_unit<T: ToString>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", v.to_string(), unit),
        None => String::from(UNKNOWN),
    }
}

fn join_or_unknown<S: AsRef<str>>(values: &[S]) -> String {
    if values.is_empty() {
        return String::from(UNKNOWN);
    }
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

fn to_owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}
