//! HTML pages served to the operator.

use crate::flash::FlashNotice;
use actix_web::http::StatusCode;
use reelpost_metadata::models::{Genre, MovieDetails, SearchResult, WatchProvider, WatchProviders};
use reelpost_report::html::{escape, STYLESHEET_URL};
use reelpost_report::{
    ReportToggle, CUSTOM_EMBED_FIELD, DEFAULT_TITLE, MISSING_OVERVIEW, POSTER_BASE_URL, UNKNOWN,
};

const THUMBNAIL_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
  </head>
  <body>
    <div class="container my-5">
{body}
    </div>
  </body>
</html>"#,
        title = escape(title),
        stylesheet = STYLESHEET_URL,
        body = body
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The search form, with a genre selection.
pub fn search_page(genres: &[Genre]) -> String {
    let mut options = String::from("<option value=\"\">All genres</option>");
    for genre in genres {
        options.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            genre.id,
            escape(&genre.name)
        ));
    }
    let body = format!(
        r#"<h1>Movie Search</h1>
<form method="post" action="/">
  <div class="form-group"><label for="query">Title</label><input class="form-control" type="text" id="query" name="query" required></div>
  <div class="form-group"><label for="year">Year</label><input class="form-control" type="number" id="year" name="year" min="1870" max="2100"></div>
  <div class="form-group"><label for="genre">Genre</label><select class="form-control" id="genre" name="genre">{}</select></div>
  <button class="btn btn-primary" type="submit">Search</button>
</form>"#,
        options
    );
    layout("Movie Search", &body)
}

/// Search results, each linking to its detail page.
pub fn results_page(query: &str, results: &[SearchResult]) -> String {
    let mut body = format!("<h1>Results for \"{}\"</h1>", escape(query));
    if results.is_empty() {
        body.push_str("<p>No movies found.</p>");
    } else {
        body.push_str("<ul class=\"list-unstyled\">");
        for result in results {
            let title = non_empty(result.title.as_deref()).unwrap_or(UNKNOWN);
            let thumbnail = match non_empty(result.poster_path.as_deref()) {
                Some(path) => format!(
                    "<img src=\"{}{}\" alt=\"{}\" width=\"92\" class=\"mr-3\">",
                    THUMBNAIL_BASE_URL,
                    escape(path),
                    escape(title)
                ),
                None => String::new(),
            };
            let release_date =
                non_empty(result.release_date.as_deref()).unwrap_or("Release date unknown");
            body.push_str(&format!(
                "<li class=\"media mb-3\">{}<div class=\"media-body\"><a href=\"/movie/{}\">{}</a><br><small>{}</small></div></li>",
                thumbnail,
                result.id,
                escape(title),
                escape(release_date)
            ));
        }
        body.push_str("</ul>");
    }
    body.push_str("<a href=\"/\">New search</a>");
    layout("Search Results", &body)
}

/// Everything shown on a movie's detail page.
pub struct DetailView<'a> {
    pub details: &'a MovieDetails,
    pub directors: Vec<&'a str>,
    pub trailer_url: Option<&'a str>,
    pub providers: &'a WatchProviders,
    pub notice: Option<&'a FlashNotice>,
}

fn provider_line(label: &str, providers: &[WatchProvider]) -> String {
    if providers.is_empty() {
        return String::new();
    }
    let names: Vec<String> = providers.iter().map(|p| escape(&p.provider_name)).collect();
    format!("<p><strong>{}:</strong> {}</p>", label, names.join(", "))
}

pub fn detail_page(view: &DetailView) -> String {
    let details = view.details;
    let title = non_empty(details.title.as_deref()).unwrap_or(DEFAULT_TITLE);
    let mut body = String::new();

    if let Some(notice) = view.notice {
        body.push_str(&format!(
            "<div class=\"alert {}\" role=\"alert\">{}</div>",
            notice.level.alert_class(),
            escape(&notice.message)
        ));
    }

    body.push_str(&format!("<h1>{}</h1>", escape(title)));
    body.push_str(&format!(
        "<p><strong>Release Date:</strong> {}</p>",
        escape(non_empty(details.release_date.as_deref()).unwrap_or(UNKNOWN))
    ));
    body.push_str(&format!(
        "<p>{}</p>",
        escape(non_empty(details.overview.as_deref()).unwrap_or(MISSING_OVERVIEW))
    ));
    let directors = if view.directors.is_empty() {
        String::from(UNKNOWN)
    } else {
        view.directors.join(", ")
    };
    body.push_str(&format!(
        "<p><strong>Director:</strong> {}</p>",
        escape(&directors)
    ));

    match non_empty(details.poster_path.as_deref()) {
        Some(path) => body.push_str(&format!(
            "<img src=\"{}{}\" alt=\"{} Poster\" class=\"img-fluid mb-3\">",
            POSTER_BASE_URL,
            escape(path),
            escape(title)
        )),
        None => body.push_str("<p>Poster not found.</p>"),
    }

    match view.trailer_url {
        Some(url) => body.push_str(&format!(
            "<div class=\"embed-responsive embed-responsive-16by9 mb-3\"><iframe class=\"embed-responsive-item\" src=\"{}\" allowfullscreen></iframe></div>",
            escape(url)
        )),
        None => body.push_str("<p>Trailer not found.</p>"),
    }

    body.push_str("<h2>Where to Watch</h2>");
    if view.providers.is_empty() {
        body.push_str("<p>No streaming providers found.</p>");
    } else {
        body.push_str(&provider_line("Stream", &view.providers.flatrate));
        body.push_str(&provider_line("Rent", &view.providers.rent));
        body.push_str(&provider_line("Buy", &view.providers.buy));
    }

    body.push_str(&format!(
        "<a class=\"btn btn-primary mr-2\" href=\"/config/{}\">Create post</a><a href=\"/\">New search</a>",
        details.id
    ));
    layout(title, &body)
}

/// The form that picks which sections go into a report. Every toggle starts checked.
pub fn config_page(movie_id: u64, title: Option<&str>) -> String {
    let title = non_empty(title).unwrap_or(DEFAULT_TITLE);
    let mut checkboxes = String::new();
    for toggle in ReportToggle::ALL.iter() {
        checkboxes.push_str(&format!(
            "<div class=\"form-check\"><input class=\"form-check-input\" type=\"checkbox\" id=\"{name}\" name=\"{name}\" checked><label class=\"form-check-label\" for=\"{name}\">{label}</label></div>",
            name = toggle.field_name(),
            label = escape(toggle.label())
        ));
    }
    let body = format!(
        r#"<h1>Configure Post: {title}</h1>
<form method="post" action="/send_email/{id}">
{checkboxes}
  <div class="form-group mt-3"><label for="{embed}">Additional video embed</label><textarea class="form-control" id="{embed}" name="{embed}" rows="4"></textarea></div>
  <button class="btn btn-primary" type="submit">Send email</button>
</form>
<a href="/movie/{id}">Back</a>"#,
        title = escape(title),
        id = movie_id,
        checkboxes = checkboxes,
        embed = CUSTOM_EMBED_FIELD
    );
    layout("Configure Post", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{}</h1><p>{}</p><a href=\"/\">New search</a>",
        escape(heading),
        escape(message)
    );
    layout(heading, &body)
}
