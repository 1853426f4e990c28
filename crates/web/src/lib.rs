//! The operator-facing web pages: search, movie details, report configuration and sending.

use crate::flash::{flash_cookie, read_flash, removal_cookie, FlashNotice};
use crate::pages::DetailView;
use crate::reelpost_web_error::ReelpostWebError;
use actix_web::cookie::Key;
use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpRequest, HttpResponse};
use anyhow::{ensure, Result};
use reelpost_mailer::Mailer;
use reelpost_metadata::models::{AdvancedSearch, SearchResult};
use reelpost_metadata::MetadataClient;
use reelpost_report::{compose_report, ReportConfig, ReportInput};
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, error, info};
use tracing_actix_web::RootSpan;

mod flash;
mod pages;
mod reelpost_root_span;
mod reelpost_web_error;

pub use flash::FLASH_COOKIE;
pub use reelpost_root_span::ReelpostRootSpan;

/// The shortest secret accepted for signing flash cookies.
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Settings shared by every request handler.
#[derive(Clone)]
pub struct WebSettings {
    /// Language passed to the metadata provider, e.g. `tr-TR`.
    pub language: String,
    flash_key: Key,
}

impl WebSettings {
    pub fn new(language: &str, secret_key: &[u8]) -> Result<Self> {
        ensure!(
            secret_key.len() >= MIN_SECRET_KEY_LENGTH,
            "The secret key must be at least {} bytes long.",
            MIN_SECRET_KEY_LENGTH
        );
        Ok(WebSettings {
            language: String::from(language),
            flash_key: Key::derive_from(secret_key),
        })
    }
}

/// Configure the web pages.
pub fn reelpost_config<M, T>(cfg: &mut web::ServiceConfig)
where
    M: MetadataClient + 'static,
    T: Mailer + 'static,
{
    cfg.service(
        web::resource("/")
            .route(web::get().to(search_form::<M>))
            .route(web::post().to(search::<M>)),
    )
    .service(web::resource("/movie/{movie_id}").route(web::get().to(movie_detail::<M>)))
    .service(web::resource("/config/{movie_id}").route(web::get().to(report_config_form::<M>)))
    .service(web::resource("/send_email/{movie_id}").route(web::post().to(send_email::<M, T>)));
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(body)
}

#[derive(Deserialize, Debug)]
struct SearchForm {
    #[serde(default)]
    query: String,
    #[serde(default)]
    year: String,
    #[serde(default)]
    genre: String,
}

fn parse_filter<F: FromStr>(value: &str, name: &str) -> Result<Option<F>, ReelpostWebError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<F>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(ReelpostWebError::bad_request(&format!(
            "\"{}\" is not a valid {}.",
            value, name
        ))),
    }
}

async fn search_form<M: MetadataClient>(
    metadata_client: web::Data<M>,
    settings: web::Data<WebSettings>,
) -> Result<HttpResponse, ReelpostWebError> {
    let genres = metadata_client.genres(&settings.language).await?;
    Ok(html(pages::search_page(&genres)))
}

async fn search<M: MetadataClient>(
    form: web::Form<SearchForm>,
    metadata_client: web::Data<M>,
    settings: web::Data<WebSettings>,
) -> Result<HttpResponse, ReelpostWebError> {
    let query = form.query.trim();
    let year = parse_filter::<u16>(&form.year, "year")?;
    let genre_id = parse_filter::<u32>(&form.genre, "genre")?;

    let results: Vec<SearchResult> = if year.is_some() || genre_id.is_some() {
        let filters = AdvancedSearch {
            query: Some(String::from(query)).filter(|q| !q.is_empty()),
            year,
            genre_id,
        };
        debug!(filters = ?filters, "Running advanced search.");
        metadata_client
            .advanced_search(&filters, &settings.language)
            .await?
    } else if query.is_empty() {
        return Err(ReelpostWebError::bad_request("Enter a movie title to search for."));
    } else {
        debug!(query = query, "Running search.");
        metadata_client.search(query, &settings.language).await?
    };

    Ok(html(pages::results_page(query, &results)))
}

async fn movie_detail<M: MetadataClient>(
    root_span: RootSpan,
    req: HttpRequest,
    path: web::Path<u64>,
    metadata_client: web::Data<M>,
    settings: web::Data<WebSettings>,
) -> Result<HttpResponse, ReelpostWebError> {
    let movie_id = path.into_inner();
    root_span.record("movie_id", &movie_id);

    let details = metadata_client.details(movie_id, &settings.language).await?;
    let trailer_url = metadata_client
        .trailer_link(movie_id, &settings.language)
        .await?;
    let credits = metadata_client.credits(movie_id).await?;
    let providers = metadata_client.watch_providers(movie_id).await?;
    let notice = read_flash(&req, &settings.flash_key);

    let view = DetailView {
        details: &details,
        directors: credits.directors(),
        trailer_url: trailer_url.as_deref(),
        providers: &providers,
        notice: notice.as_ref(),
    };
    let mut response = html(pages::detail_page(&view));
    if req.cookie(FLASH_COOKIE).is_some() {
        // Shown once; drop it so a reload doesn't repeat it.
        if let Err(e) = response.add_cookie(&removal_cookie()) {
            error!(error = ?e, "Failed to clear the flash cookie.");
        }
    }

    Ok(response)
}

async fn report_config_form<M: MetadataClient>(
    root_span: RootSpan,
    path: web::Path<u64>,
    metadata_client: web::Data<M>,
    settings: web::Data<WebSettings>,
) -> Result<HttpResponse, ReelpostWebError> {
    let movie_id = path.into_inner();
    root_span.record("movie_id", &movie_id);

    let details = metadata_client.details(movie_id, &settings.language).await?;
    Ok(html(pages::config_page(movie_id, details.title.as_deref())))
}

async fn send_email<M: MetadataClient, T: Mailer>(
    root_span: RootSpan,
    path: web::Path<u64>,
    form: web::Form<HashMap<String, String>>,
    metadata_client: web::Data<M>,
    mailer: web::Data<T>,
    settings: web::Data<WebSettings>,
) -> Result<HttpResponse, ReelpostWebError> {
    let movie_id = path.into_inner();
    root_span.record("movie_id", &movie_id);

    let details = metadata_client.details(movie_id, &settings.language).await?;
    let trailer_url = metadata_client
        .trailer_link(movie_id, &settings.language)
        .await?;
    let credits = metadata_client.credits(movie_id).await?;
    let keywords = metadata_client.keywords(movie_id).await?;
    let external_rating = metadata_client
        .external_rating(details.imdb_id.as_deref())
        .await?;

    let config = ReportConfig::from_form(form.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let report = compose_report(
        &ReportInput {
            details: &details,
            credits: &credits,
            keywords: &keywords,
            trailer_url: trailer_url.as_deref(),
            external_rating: external_rating.as_deref(),
            language: &settings.language,
        },
        &config,
    );

    let notice = match mailer.send(&report.subject(), &report.html).await {
        Ok(_) => {
            info!("Sent report email.");
            FlashNotice::success("Movie details were sent by email.")
        }
        Err(e) => {
            error!(error = ?e, "Failed to send report email.");
            FlashNotice::error(&format!("Failed to send email: {:#}", e))
        }
    };

    let mut response = HttpResponse::SeeOther();
    response.insert_header((header::LOCATION, format!("/movie/{}", movie_id)));
    match flash_cookie(&notice, &settings.flash_key) {
        Ok(cookie) => {
            response.cookie(cookie);
        }
        Err(e) => error!(error = ?e, "Failed to build the flash cookie."),
    }

    Ok(response.finish())
}
