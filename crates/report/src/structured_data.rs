//! The schema.org `Movie` block embedded in a report's `<head>`.

use crate::report_fields::{ReportFields, UNKNOWN};
use serde_json::{json, Value};

/// Serialize the report's JSON-LD. `</` is escaped so provider text can't close the surrounding
/// `<script>` element.
pub fn structured_data(fields: &ReportFields) -> String {
    let people = |names: &[String]| -> Vec<Value> {
        names
            .iter()
            .map(|n| json!({ "@type": "Person", "name": n }))
            .collect()
    };
    let rating_value = match fields.vote_average {
        Some(v) => json!(v),
        None => json!(UNKNOWN),
    };
    let rating_count = match fields.vote_count {
        Some(c) => json!(c),
        None => json!(UNKNOWN),
    };
    let movie = json!({
        "@context": "https://schema.org",
        "@type": "Movie",
        "name": fields.title,
        "description": fields.overview,
        "image": fields.poster_url.clone().unwrap_or_default(),
        "datePublished": fields.release_date,
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": rating_value,
            "ratingCount": rating_count
        },
        "director": people(&fields.directors),
        "actor": people(&fields.cast)
    });

    // Serializing a json! Value can't fail.
    serde_json::to_string_pretty(&movie)
        .unwrap_or_default()
        .replace("</", "<\\/")
}
