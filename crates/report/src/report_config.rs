//! Which optional sections an operator wants in a report.

use std::collections::BTreeSet;

/// Form field holding the operator's extra embed markup.
pub const CUSTOM_EMBED_FIELD: &str = "custom_embed";
/// Value a browser submits for a checked checkbox.
const CHECKED_VALUE: &str = "on";

/// One optional report section. Declaration order is the order sections appear in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportToggle {
    Overview,
    Directors,
    Cast,
    Genres,
    ReleaseDate,
    Runtime,
    Budget,
    Revenue,
    ProviderRating,
    ExternalRating,
    Trailer,
}

impl ReportToggle {
    pub const ALL: [ReportToggle; 11] = [
        ReportToggle::Overview,
        ReportToggle::Directors,
        ReportToggle::Cast,
        ReportToggle::Genres,
        ReportToggle::ReleaseDate,
        ReportToggle::Runtime,
        ReportToggle::Budget,
        ReportToggle::Revenue,
        ReportToggle::ProviderRating,
        ReportToggle::ExternalRating,
        ReportToggle::Trailer,
    ];

    /// The checkbox name used for this toggle on the configuration form.
    pub fn field_name(&self) -> &'static str {
        match self {
            ReportToggle::Overview => "include_overview",
            ReportToggle::Directors => "include_directors",
            ReportToggle::Cast => "include_cast",
            ReportToggle::Genres => "include_genres",
            ReportToggle::ReleaseDate => "include_release_date",
            ReportToggle::Runtime => "include_runtime",
            ReportToggle::Budget => "include_budget",
            ReportToggle::Revenue => "include_revenue",
            ReportToggle::ProviderRating => "include_tmdb_rating",
            ReportToggle::ExternalRating => "include_imdb",
            ReportToggle::Trailer => "include_trailer",
        }
    }

    /// Human readable label for the configuration form.
    pub fn label(&self) -> &'static str {
        match self {
            ReportToggle::Overview => "Overview",
            ReportToggle::Directors => "Directors",
            ReportToggle::Cast => "Cast",
            ReportToggle::Genres => "Genres",
            ReportToggle::ReleaseDate => "Release Date",
            ReportToggle::Runtime => "Runtime",
            ReportToggle::Budget => "Budget",
            ReportToggle::Revenue => "Revenue",
            ReportToggle::ProviderRating => "TMDB Rating",
            ReportToggle::ExternalRating => "IMDb Rating & Link",
            ReportToggle::Trailer => "Automatic Trailer",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Self> {
        ReportToggle::ALL
            .iter()
            .find(|t| t.field_name() == name)
            .copied()
    }
}

/// The enabled toggles plus optional custom embed markup for one report. Nothing is enabled
/// unless asked for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportConfig {
    enabled: BTreeSet<ReportToggle>,
    custom_embed: Option<String>,
}

impl ReportConfig {
    /// A configuration with every toggle off and no custom embed.
    pub fn new() -> Self {
        ReportConfig::default()
    }

    /// A configuration with every toggle on, as the configuration form starts out.
    pub fn all() -> Self {
        ReportConfig {
            enabled: ReportToggle::ALL.iter().copied().collect(),
            custom_embed: None,
        }
    }

    /// Build a configuration from submitted form fields. A toggle is on only when its field is
    /// present with the value `on`.
    pub fn from_form<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = ReportConfig::new();
        for (name, value) in fields {
            if name == CUSTOM_EMBED_FIELD {
                config.set_custom_embed(value);
                continue;
            }
            match ReportToggle::from_field_name(name) {
                Some(toggle) if value == CHECKED_VALUE => config.enable(toggle),
                _ => (),
            }
        }

        config
    }

    pub fn enable(&mut self, toggle: ReportToggle) {
        self.enabled.insert(toggle);
    }

    pub fn with(mut self, toggle: ReportToggle) -> Self {
        self.enable(toggle);
        self
    }

    pub fn includes(&self, toggle: ReportToggle) -> bool {
        self.enabled.contains(&toggle)
    }

    /// Store the custom embed, trimmed. Blank markup clears it.
    pub fn set_custom_embed(&mut self, raw_html: &str) {
        let trimmed = raw_html.trim();
        self.custom_embed = if trimmed.is_empty() {
            None
        } else {
            Some(String::from(trimmed))
        };
    }

    pub fn custom_embed(&self) -> Option<&str> {
        self.custom_embed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_form_enables_only_checked_toggles() {
        // Arrange
        let fields = vec![
            ("include_overview", "on"),
            ("include_cast", "off"),
            ("include_budget", ""),
            ("not_a_toggle", "on"),
        ];

        // Act
        let actual = ReportConfig::from_form(fields);

        // Assert
        assert!(actual.includes(ReportToggle::Overview));
        assert!(!actual.includes(ReportToggle::Cast));
        assert!(!actual.includes(ReportToggle::Budget));
        assert!(!actual.includes(ReportToggle::Directors));
        assert!(actual.custom_embed().is_none());
    }

    #[test]
    fn from_form_ignores_blank_custom_embed() {
        // Act
        let actual = ReportConfig::from_form(vec![("custom_embed", "  \n\t ")]);

        // Assert
        assert!(actual.custom_embed().is_none());
    }

    #[test]
    fn from_form_trims_custom_embed() {
        // Act
        let actual = ReportConfig::from_form(vec![("custom_embed", "  <iframe></iframe>\n")]);

        // Assert
        assert_eq!(Some("<iframe></iframe>"), actual.custom_embed());
    }

    #[test]
    fn field_names_round_trip_for_every_toggle() {
        for toggle in ReportToggle::ALL {
            assert_eq!(Some(toggle), ReportToggle::from_field_name(toggle.field_name()));
        }
    }

    #[test]
    fn all_includes_every_toggle() {
        // Act
        let actual = ReportConfig::all();

        // Assert
        assert!(ReportToggle::ALL.iter().all(|t| actual.includes(*t)));
    }
}
