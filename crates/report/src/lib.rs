//! Composition of the HTML movie report that gets emailed as a post.
//!
//! Composition is pure: everything the report needs, including the external rating, is fetched
//! by the caller and handed in through [ReportInput].

use crate::html::{render_document, DocumentHead, ReportBuilder, SectionHeadingLevel};
use reelpost_metadata::models::{Credits, Keyword, MovieDetails};
use tracing::debug;

pub mod html;
mod report_config;
mod report_fields;
mod sections;
mod structured_data;

pub use report_config::{ReportConfig, ReportToggle, CUSTOM_EMBED_FIELD};
pub use report_fields::{
    meta_description, ReportFields, DEFAULT_TITLE, MISSING_OVERVIEW, POSTER_BASE_URL, UNKNOWN,
};
pub use sections::{included_sections, Section, SECTIONS};

/// Everything a report is built from.
pub struct ReportInput<'a> {
    pub details: &'a MovieDetails,
    pub credits: &'a Credits,
    pub keywords: &'a [Keyword],
    pub trailer_url: Option<&'a str>,
    /// Rating from the external provider, already fetched.
    pub external_rating: Option<&'a str>,
    /// Provider language, e.g. `tr-TR`; its primary subtag becomes the document's `lang`.
    pub language: &'a str,
}

/// A finished report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub html: String,
}

impl Report {
    /// Subject line used when the report is sent out.
    pub fn subject(&self) -> String {
        format!("Watch {}", self.title)
    }
}

/// Build the complete report document.
pub fn compose_report(input: &ReportInput, config: &ReportConfig) -> Report {
    let fields = ReportFields::derive(input);
    let body = compose_body(&fields, config);
    let description = fields.meta_description();
    let keywords = fields.meta_keywords();
    let structured_data = structured_data::structured_data(&fields);
    let head = DocumentHead {
        lang: html::document_lang(input.language),
        title: &fields.title,
        description: &description,
        keywords: &keywords,
        image: fields.poster_url.as_deref().unwrap_or_default(),
        structured_data: &structured_data,
    };
    debug!(title = %fields.title, config = ?config, "Composed report.");

    Report {
        html: render_document(&head, &body),
        title: fields.title,
    }
}

/// Build the markup that goes inside the report's container: the poster, the enabled sections,
/// the custom embed and the tag line, in that order.
pub fn compose_body(fields: &ReportFields, config: &ReportConfig) -> String {
    let mut builder = ReportBuilder::new();
    match fields.poster_url.as_deref() {
        Some(url) => builder.add_image(url, &format!("{} Poster", fields.title)),
        None => builder.add_line("Poster not found."),
    }

    for section in included_sections(fields, config) {
        (section.render)(fields, &mut builder);
    }

    if let Some(embed) = config.custom_embed() {
        builder.add_heading(&SectionHeadingLevel::Two, "Additional Video");
        builder.add_trusted_embed(embed);
    }

    builder.add_footer_line(&format!("Labels: {}", fields.tags));
    builder.to_body()
}
