//! Page configuration (`page.toml`).
//!
//! ```toml
//! title = "Grow Your Audience Live"
//! sections = ["hero", "pillars", "host", "deep-dive", "register", "footer"]
//!
//! [hero]
//! inline_form = false
//!
//! [reveal.host]
//! stagger_ms = 80
//! initial_delay_ms = 100
//! ```
//!
//! A `[reveal.<section>]` table overrides that section's default timing key by
//! key; keys left out keep the section's own values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compose::SectionId;
use crate::error::ConfigError;
use crate::reveal::RevealTiming;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document `<title>`.
    pub title: String,
    /// Document language.
    pub lang: String,
    /// Section identifiers in render order.
    pub sections: Vec<String>,
    pub hero: HeroVariant,
    /// Per-section timing overrides keyed by section identifier.
    pub reveal: BTreeMap<String, TimingOverride>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Live Event".into(),
            lang: "en".into(),
            sections: ["hero", "pillars", "deep-dive", "register", "footer"]
                .into_iter()
                .map(String::from)
                .collect(),
            hero: HeroVariant::default(),
            reveal: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroVariant {
    /// Render a compact registration form inside the hero.
    pub inline_form: bool,
}

/// Partial `[reveal.<section>]` table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingOverride {
    pub stagger_ms: Option<u32>,
    pub initial_delay_ms: Option<u32>,
    pub duration_ms: Option<u32>,
}

impl TimingOverride {
    pub fn apply(self, base: RevealTiming) -> RevealTiming {
        RevealTiming {
            stagger_ms: self.stagger_ms.unwrap_or(base.stagger_ms),
            initial_delay_ms: self.initial_delay_ms.unwrap_or(base.initial_delay_ms),
            duration_ms: self.duration_ms.unwrap_or(base.duration_ms),
        }
    }
}

impl PageConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Timing for `id`: the section default with any override keys applied.
    pub fn timing_for(&self, id: SectionId) -> RevealTiming {
        let base = id.default_timing();
        match self.reveal.get(id.as_str()) {
            Some(overrides) => overrides.apply(base),
            None => base,
        }
    }

    /// Reject override tables for sections that do not exist.
    ///
    /// The section order itself is checked when composing.
    fn validate(&self) -> Result<(), ConfigError> {
        for key in self.reveal.keys() {
            key.parse::<SectionId>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = PageConfig::from_toml("").unwrap();
        assert_eq!(config, PageConfig::default());
        assert!(!config.hero.inline_form);
    }

    #[test]
    fn reads_order_and_variant_flags() {
        let config = PageConfig::from_toml(
            r#"
            title = "Webinar"
            sections = ["hero", "host", "footer"]

            [hero]
            inline_form = true
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Webinar");
        assert_eq!(config.sections, vec!["hero", "host", "footer"]);
        assert!(config.hero.inline_form);
    }

    #[test]
    fn override_for_unknown_section_is_rejected() {
        let err = PageConfig::from_toml("[reveal.sidebar]\nstagger_ms = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSection(name) if name == "sidebar"));
    }

    #[test]
    fn partial_override_keeps_the_section_defaults() {
        let config = PageConfig::from_toml("[reveal.host]\nstagger_ms = 50\n").unwrap();

        let host = config.timing_for(SectionId::Host);
        assert_eq!(host.stagger_ms, 50);
        assert_eq!(host.initial_delay_ms, 100);
        assert_eq!(host.duration_ms, 500);
        assert_eq!(
            config.timing_for(SectionId::Register),
            SectionId::Register.default_timing()
        );
    }

    #[test]
    fn misspelled_override_key_is_rejected() {
        let err = PageConfig::from_toml("[reveal.host]\nstager_ms = 50\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPageConfig(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = PageConfig::from_toml("sections = hero").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPageConfig(_)));
    }
}
