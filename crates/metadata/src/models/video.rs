use serde::{Deserialize, Serialize};

const TRAILER_TYPE: &str = "Trailer";
const TRAILER_SITE: &str = "YouTube";
const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// An entry in a movie's `/videos` list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Video {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

/// Pick the first YouTube trailer in provider order and return its embed URL.
pub fn select_trailer(videos: &[Video]) -> Option<String> {
    videos
        .iter()
        .find(|v| v.video_type == TRAILER_TYPE && v.site == TRAILER_SITE)
        .map(|v| format!("{}{}", EMBED_BASE_URL, v.key))
}
