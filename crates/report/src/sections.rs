//! The fixed, ordered table of optional report sections.
//!
//! A section is rendered when its toggle is on and the data it needs is available.

use crate::html::{ReportBuilder, SectionHeadingLevel};
use crate::report_fields::ReportFields;
use crate::{ReportConfig, ReportToggle};

/// One row of the section table.
pub struct Section {
    pub toggle: ReportToggle,
    pub is_available: fn(&ReportFields) -> bool,
    pub render: fn(&ReportFields, &mut ReportBuilder),
}

pub static SECTIONS: [Section; 11] = [
    Section {
        toggle: ReportToggle::Overview,
        is_available: always,
        render: render_overview,
    },
    Section {
        toggle: ReportToggle::Directors,
        is_available: always,
        render: render_directors,
    },
    Section {
        toggle: ReportToggle::Cast,
        is_available: always,
        render: render_cast,
    },
    Section {
        toggle: ReportToggle::Genres,
        is_available: always,
        render: render_genres,
    },
    Section {
        toggle: ReportToggle::ReleaseDate,
        is_available: always,
        render: render_release_date,
    },
    Section {
        toggle: ReportToggle::Runtime,
        is_available: always,
        render: render_runtime,
    },
    Section {
        toggle: ReportToggle::Budget,
        is_available: always,
        render: render_budget,
    },
    Section {
        toggle: ReportToggle::Revenue,
        is_available: always,
        render: render_revenue,
    },
    Section {
        toggle: ReportToggle::ProviderRating,
        is_available: always,
        render: render_provider_rating,
    },
    Section {
        toggle: ReportToggle::ExternalRating,
        is_available: always,
        render: render_external_rating,
    },
    // A missing trailer wins over the toggle.
    Section {
        toggle: ReportToggle::Trailer,
        is_available: has_trailer,
        render: render_trailer,
    },
];

/// The sections a report gets for the given fields and configuration, in table order.
pub fn included_sections<'a>(
    fields: &'a ReportFields,
    config: &'a ReportConfig,
) -> impl Iterator<Item = &'static Section> + 'a {
    SECTIONS
        .iter()
        .filter(move |s| config.includes(s.toggle) && (s.is_available)(fields))
}

fn always(_fields: &ReportFields) -> bool {
    true
}

fn has_trailer(fields: &ReportFields) -> bool {
    fields.trailer_url.is_some()
}

fn render_overview(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Overview", &fields.overview);
}

fn render_directors(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Director", &fields.directors_display());
}

fn render_cast(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Cast", &fields.cast_display());
}

fn render_genres(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Genres", &fields.genres);
}

fn render_release_date(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Release Date", &fields.release_date);
}

fn render_runtime(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Runtime", &fields.runtime);
}

fn render_budget(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Budget", &fields.budget);
}

fn render_revenue(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("Revenue", &fields.revenue);
}

fn render_provider_rating(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value("TMDB Rating", &fields.provider_rating_display());
}

fn render_external_rating(fields: &ReportFields, builder: &mut ReportBuilder) {
    builder.add_key_value_with_link(
        "IMDb",
        &fields.external_rating,
        "IMDb Page",
        &fields.external_link,
    );
}

fn render_trailer(fields: &ReportFields, builder: &mut ReportBuilder) {
    if let Some(url) = fields.trailer_url.as_deref() {
        builder.add_heading(&SectionHeadingLevel::Two, "Trailer");
        builder.add_video_embed(url);
    }
}
