//! Utilities for building the HTML of a report.
//!
//! Every value handed to [ReportBuilder] is escaped, with the single exception of
//! [ReportBuilder::add_trusted_embed()].

const PARAGRAPH_STYLE: &str = "margin-bottom:1em;";
const FOOTER_STYLE: &str = "margin-top:2em; font-size:0.9em;";
const EMBED_CLASS: &str = "embed-responsive embed-responsive-16by9 mb-3";
pub const STYLESHEET_URL: &str =
    "https://stackpath.bootstrapcdn.com/bootstrap/4.5.2/css/bootstrap.min.css";

/// Escape text for use in HTML element content or a quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Represents the level of section heading; otherwise known as `<h1>` through `<h3>`.
pub enum SectionHeadingLevel {
    One,
    Two,
    Three,
}

impl SectionHeadingLevel {
    fn tag(&self) -> &'static str {
        match self {
            SectionHeadingLevel::One => "h1",
            SectionHeadingLevel::Two => "h2",
            SectionHeadingLevel::Three => "h3",
        }
    }
}

/// Builds the body of a report. Forward-only.
pub struct ReportBuilder {
    html_parts: String,
}

impl ReportBuilder {
    pub fn new() -> Self {
        ReportBuilder {
            html_parts: String::new(),
        }
    }

    /// Adds a labelled value as its own paragraph.
    ///
    /// # Examples
    /// `<p style="margin-bottom:1em;"><strong>key:</strong> value</p>`
    pub fn add_key_value(&mut self, key: &str, value: &str) {
        self.html_parts.push_str(&format!(
            "<p style=\"{}\"><strong>{}:</strong> {}</p>",
            PARAGRAPH_STYLE,
            escape(key),
            escape(value)
        ));
    }

    /// Adds a labelled value followed by a link that opens in a new tab.
    ///
    /// # Examples
    /// `<p ...><strong>key:</strong> value (<a href="href" target="_blank">link_text</a>)</p>`
    pub fn add_key_value_with_link(&mut self, key: &str, value: &str, link_text: &str, href: &str) {
        self.html_parts.push_str(&format!(
            "<p style=\"{}\"><strong>{}:</strong> {} (<a href=\"{}\" target=\"_blank\">{}</a>)</p>",
            PARAGRAPH_STYLE,
            escape(key),
            escape(value),
            escape(href),
            escape(link_text)
        ));
    }

    pub fn add_heading(&mut self, heading: &SectionHeadingLevel, text: &str) {
        let tag = heading.tag();
        self.html_parts.push_str(&format!(
            "<{} class=\"mt-4\">{}</{}>",
            tag,
            escape(text),
            tag
        ));
    }

    /// Adds a centered, fixed-size image.
    pub fn add_image(&mut self, src: &str, alt: &str) {
        self.html_parts.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" style=\"width:300px; height:450px; object-fit: cover; display: block; margin: auto;\">",
            escape(src),
            escape(alt)
        ));
    }

    /// Adds a line of text as a paragraph.
    pub fn add_line(&mut self, line: &str) {
        self.html_parts.push_str(&format!("<p>{}</p>", escape(line)));
    }

    /// Adds a small trailing line, set apart from the content above it.
    pub fn add_footer_line(&mut self, line: &str) {
        self.html_parts.push_str(&format!(
            "<p style=\"{}\">{}</p>",
            FOOTER_STYLE,
            escape(line)
        ));
    }

    /// Adds a responsive `<iframe>` for the given source URL.
    pub fn add_video_embed(&mut self, src: &str) {
        self.html_parts.push_str(&format!(
            "<div class=\"{}\" style=\"margin: auto;\"><iframe class=\"embed-responsive-item\" src=\"{}\" allowfullscreen></iframe></div>",
            EMBED_CLASS,
            escape(src)
        ));
    }

    /// Adds operator-supplied embed markup inside the responsive video wrapper.
    ///
    /// # Remarks
    ///
    /// The markup is inserted **as-is, without escaping or sanitization**. This is the one trust
    /// boundary in the report: whoever fills in the configuration form controls this HTML.
    pub fn add_trusted_embed(&mut self, raw_html: &str) {
        self.html_parts.push_str(&format!(
            "<div class=\"{}\" style=\"margin: auto;\">{}</div>",
            EMBED_CLASS, raw_html
        ));
    }

    /// Copy the contents of this builder out as the body markup.
    pub fn to_body(&self) -> String {
        self.html_parts.clone()
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        ReportBuilder::new()
    }
}

/// Everything that goes in the `<head>` of a report document.
pub struct DocumentHead<'a> {
    /// Value of the `lang` attribute on `<html>`.
    pub lang: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
    pub image: &'a str,
    /// Serialized JSON-LD; must already be safe to embed in a `<script>` element.
    pub structured_data: &'a str,
}

/// The primary subtag of a language tag: `tr-TR` gives `tr`.
pub fn document_lang(language: &str) -> &str {
    language.split(&['-', '_'][..]).next().unwrap_or(language).trim()
}

/// Wrap body markup in a complete HTML document.
pub fn render_document(head: &DocumentHead, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="{lang}">
  <head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:image" content="{image}">
    <meta property="og:type" content="article">
    <script type="application/ld+json">
{structured_data}
    </script>
    <link rel="stylesheet" href="{stylesheet}">
  </head>
  <body>
    <div class="container my-5 text-center">{body}</div>
  </body>
</html>"#,
        lang = escape(head.lang),
        title = escape(head.title),
        description = escape(head.description),
        keywords = escape(head.keywords),
        image = escape(head.image),
        structured_data = head.structured_data,
        stylesheet = STYLESHEET_URL,
        body = body,
    )
}
