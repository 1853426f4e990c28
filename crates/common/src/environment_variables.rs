//! The list of environment variables used throughout the application.

// Web environment variables
pub const WEB_PORT: &str = "REELPOST_WEB_PORT";
pub const SECRET_KEY: &str = "REELPOST_SECRET_KEY";

// Metadata provider environment variables
pub const TMDB_API_KEY: &str = "REELPOST_TMDB_API_KEY";
pub const OMDB_API_KEY: &str = "REELPOST_OMDB_API_KEY";
pub const LANGUAGE: &str = "REELPOST_LANGUAGE";
pub const WATCH_REGION: &str = "REELPOST_WATCH_REGION";

// Mail environment variables
pub const SMTP_HOST: &str = "REELPOST_SMTP_HOST";
pub const SMTP_PORT: &str = "REELPOST_SMTP_PORT";
pub const EMAIL_ADDRESS: &str = "REELPOST_EMAIL_ADDRESS";
pub const EMAIL_PASSWORD: &str = "REELPOST_EMAIL_PASSWORD";
pub const RECIPIENT_EMAIL: &str = "REELPOST_RECIPIENT_EMAIL";

// Miscellaneous
pub const LOG_FILTER: &str = "REELPOST_LOG_FILTER";
