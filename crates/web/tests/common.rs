#![allow(dead_code)]

use anyhow::anyhow;
use async_trait::async_trait;
use reelpost_mailer::Mailer;
use reelpost_metadata::models::{
    AdvancedSearch, CastMember, Credits, CrewMember, Genre, Keyword, MovieDetails, SearchResult,
    WatchProvider, WatchProviders,
};
use reelpost_metadata::{MetadataClient, MetadataError};
use reelpost_web::WebSettings;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const SECRET_KEY: &[u8] = b"integration-test-secret-key-of-plenty-length";
pub const EMBED: &str = "<iframe src=\"https://player.example/v/1\"></iframe>";

pub fn settings() -> WebSettings {
    WebSettings::new("tr-TR", SECRET_KEY).unwrap()
}

/// Which search a [FakeMetadataClient] was asked to run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCall {
    Search(String),
    Advanced(AdvancedSearch),
}

/// Fake implementation of [MetadataClient] that answers with The Matrix for every movie and
/// records the searches made against it. When `failing` is set, every call fails with a status
/// error.
#[derive(Clone)]
pub struct FakeMetadataClient {
    failing: bool,
    searches: Arc<RwLock<Vec<SearchCall>>>,
}

impl FakeMetadataClient {
    pub fn new() -> Self {
        FakeMetadataClient {
            failing: false,
            searches: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        FakeMetadataClient {
            failing: true,
            ..FakeMetadataClient::new()
        }
    }

    pub async fn searches(&self) -> Vec<SearchCall> {
        self.searches.read().await.clone()
    }

    fn check(&self) -> Result<(), MetadataError> {
        if self.failing {
            return Err(MetadataError::Status {
                status: 503,
                url: String::from("https://api.themoviedb.org/3"),
            });
        }
        Ok(())
    }

    fn results() -> Vec<SearchResult> {
        vec![
            SearchResult {
                id: 603,
                title: Some(String::from("The Matrix")),
                poster_path: Some(String::from("/matrix.jpg")),
                release_date: Some(String::from("1999-03-31")),
            },
            SearchResult {
                id: 604,
                title: Some(String::from("The Matrix Reloaded")),
                poster_path: None,
                release_date: None,
            },
        ]
    }
}

#[async_trait]
impl MetadataClient for FakeMetadataClient {
    async fn search(
        &self,
        query: &str,
        _language: &str,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        self.check()?;
        let mut searches = self.searches.write().await;
        searches.push(SearchCall::Search(String::from(query)));

        Ok(FakeMetadataClient::results())
    }

    async fn advanced_search(
        &self,
        filters: &AdvancedSearch,
        _language: &str,
    ) -> Result<Vec<SearchResult>, MetadataError> {
        self.check()?;
        let mut searches = self.searches.write().await;
        searches.push(SearchCall::Advanced(filters.clone()));

        Ok(FakeMetadataClient::results())
    }

    async fn genres(&self, _language: &str) -> Result<Vec<Genre>, MetadataError> {
        self.check()?;
        Ok(vec![
            Genre {
                id: 28,
                name: String::from("Action"),
            },
            Genre {
                id: 878,
                name: String::from("Science Fiction"),
            },
        ])
    }

    async fn details(&self, movie_id: u64, _language: &str) -> Result<MovieDetails, MetadataError> {
        self.check()?;
        Ok(MovieDetails {
            id: movie_id,
            title: Some(String::from("The Matrix")),
            overview: Some(String::from("A hacker learns the truth.")),
            release_date: Some(String::from("1999-03-31")),
            poster_path: Some(String::from("/matrix.jpg")),
            genres: vec![Genre {
                id: 878,
                name: String::from("Science Fiction"),
            }],
            runtime: Some(136),
            budget: Some(63000000),
            revenue: Some(463517383),
            vote_average: Some(8.2),
            vote_count: Some(24000),
            imdb_id: Some(String::from("tt0133093")),
        })
    }

    async fn credits(&self, _movie_id: u64) -> Result<Credits, MetadataError> {
        self.check()?;
        Ok(Credits {
            cast: vec![CastMember {
                name: String::from("Keanu Reeves"),
                character: Some(String::from("Neo")),
            }],
            crew: vec![CrewMember {
                name: String::from("Lana Wachowski"),
                job: Some(String::from("Director")),
            }],
        })
    }

    async fn keywords(&self, _movie_id: u64) -> Result<Vec<Keyword>, MetadataError> {
        self.check()?;
        Ok(vec![Keyword {
            id: 1,
            name: String::from("simulated reality"),
        }])
    }

    async fn watch_providers(&self, _movie_id: u64) -> Result<WatchProviders, MetadataError> {
        self.check()?;
        Ok(WatchProviders {
            link: None,
            flatrate: vec![WatchProvider {
                provider_id: 8,
                provider_name: String::from("Netflix"),
            }],
            rent: vec![],
            buy: vec![],
        })
    }

    async fn trailer_link(
        &self,
        _movie_id: u64,
        _language: &str,
    ) -> Result<Option<String>, MetadataError> {
        self.check()?;
        Ok(Some(String::from("https://www.youtube.com/embed/abc")))
    }

    async fn external_rating(
        &self,
        external_id: Option<&str>,
    ) -> Result<Option<String>, MetadataError> {
        self.check()?;
        Ok(external_id.map(|_| String::from("8.7")))
    }
}

/// Fake implementation of [Mailer] that captures the subject and body of every message.
#[derive(Clone)]
pub struct SpyMailer {
    messages: Arc<RwLock<Vec<(String, String)>>>,
}

impl SpyMailer {
    pub fn new() -> Self {
        SpyMailer {
            messages: Arc::new(RwLock::new(Vec::<(String, String)>::new())),
        }
    }

    pub async fn messages(&self) -> Vec<(String, String)> {
        self.messages.read().await.clone()
    }
}

#[async_trait]
impl Mailer for SpyMailer {
    async fn send(&self, subject: &str, html_body: &str) -> anyhow::Result<()> {
        let mut messages = self.messages.write().await;
        messages.push((String::from(subject), String::from(html_body)));

        Ok(())
    }
}

/// Fake implementation of [Mailer] whose relay always refuses the connection.
#[derive(Clone)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _subject: &str, _html_body: &str) -> anyhow::Result<()> {
        Err(anyhow!("Connection refused").context("Failed to send email via SMTP."))
    }
}
