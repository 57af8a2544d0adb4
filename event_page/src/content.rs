//! Content store: the immutable per-section records a page is built from.
//!
//! Content is loaded once, validated as a whole, then shared read-only with
//! every renderer. Sections that are never composed may be absent.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::compose::SectionId;
use crate::error::ConfigError;
use crate::form::FormSchema;
use crate::types::{
    DeepDiveContent, FooterContent, HeroContent, HostContent, Keyed, PillarsContent,
    RegisterContent,
};

#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    hero: Option<Arc<HeroContent>>,
    pillars: Option<Arc<PillarsContent>>,
    host: Option<Arc<HostContent>>,
    deep_dive: Option<Arc<DeepDiveContent>>,
    register: Option<Arc<RegisterContent>>,
    register_form: Option<Arc<FormSchema>>,
    footer: Option<Arc<FooterContent>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<section>.json` present in `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, ConfigError> {
        let mut store = Self::new();
        for id in SectionId::ALL {
            let path = dir.join(id.file_name());
            if !path.is_file() {
                debug!(section = %id, path = %path.display(), "no content file");
                continue;
            }
            let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            store.insert_json(id, &text)?;
        }
        debug!(sections = ?store.loaded(), dir = %dir.display(), "content loaded");
        Ok(store)
    }

    /// Parse and validate one section record, replacing any previous one.
    pub fn insert_json(&mut self, id: SectionId, json: &str) -> Result<(), ConfigError> {
        match id {
            SectionId::Hero => {
                self.hero = Some(Arc::new(parse(id, json)?));
            }
            SectionId::Pillars => {
                let content: PillarsContent = parse(id, json)?;
                ensure_unique(id, "pillars", &content.pillars)?;
                self.pillars = Some(Arc::new(content));
            }
            SectionId::Host => {
                let content: HostContent = parse(id, json)?;
                ensure_unique(id, "host.stats", &content.host.stats)?;
                ensure_unique(id, "host.links", &content.host.links)?;
                self.host = Some(Arc::new(content));
            }
            SectionId::DeepDive => {
                let content: DeepDiveContent = parse(id, json)?;
                ensure_unique(id, "items", &content.items)?;
                self.deep_dive = Some(Arc::new(content));
            }
            SectionId::Register => {
                let content: RegisterContent = parse(id, json)?;
                ensure_unique(id, "benefits", &content.benefits)?;
                ensure_unique(id, "form.roles", &content.form.roles)?;
                let form = FormSchema::from_content(&content.form)?;
                self.register = Some(Arc::new(content));
                self.register_form = Some(Arc::new(form));
            }
            SectionId::Footer => {
                self.footer = Some(Arc::new(parse(id, json)?));
            }
        }
        Ok(())
    }

    /// Sections with content, in canonical order.
    pub fn loaded(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|id| self.has(*id))
            .collect()
    }

    pub fn has(&self, id: SectionId) -> bool {
        match id {
            SectionId::Hero => self.hero.is_some(),
            SectionId::Pillars => self.pillars.is_some(),
            SectionId::Host => self.host.is_some(),
            SectionId::DeepDive => self.deep_dive.is_some(),
            SectionId::Register => self.register.is_some(),
            SectionId::Footer => self.footer.is_some(),
        }
    }

    pub fn hero(&self) -> Option<&Arc<HeroContent>> {
        self.hero.as_ref()
    }

    pub fn pillars(&self) -> Option<&Arc<PillarsContent>> {
        self.pillars.as_ref()
    }

    pub fn host(&self) -> Option<&Arc<HostContent>> {
        self.host.as_ref()
    }

    pub fn deep_dive(&self) -> Option<&Arc<DeepDiveContent>> {
        self.deep_dive.as_ref()
    }

    pub fn register(&self) -> Option<&Arc<RegisterContent>> {
        self.register.as_ref()
    }

    /// Validated form schema from the register record.
    pub fn register_form(&self) -> Option<&Arc<FormSchema>> {
        self.register_form.as_ref()
    }

    pub fn footer(&self) -> Option<&Arc<FooterContent>> {
        self.footer.as_ref()
    }
}

fn parse<T: DeserializeOwned>(section: SectionId, json: &str) -> Result<T, ConfigError> {
    serde_json::from_str(json).map_err(|source| ConfigError::InvalidContent { section, source })
}

fn ensure_unique<T: Keyed>(
    section: SectionId,
    collection: &'static str,
    items: &[T],
) -> Result<(), ConfigError> {
    for (position, item) in items.iter().enumerate() {
        if items[..position].iter().any(|seen| seen.key() == item.key()) {
            return Err(ConfigError::DuplicateKey {
                section,
                collection,
                key: item.key().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) const HERO: &str = r##"{
        "tag": { "text": "FREE LIVE WEBINAR", "highlight": "FREE" },
        "headline": { "line1": "Grow Your Audience", "line2": "Live On Stage" },
        "subheadline": "A 60-minute masterclass",
        "description": "Learn the system behind sold-out shows.",
        "event": { "date": "Thursday, March 12", "time": "7:00 PM EST" },
        "cta": { "text": "Save My Seat", "url": "#register" },
        "footer": "Limited seats available"
    }"##;

    pub(crate) const PILLARS: &str = r#"{
        "label": "WHAT YOU'LL LEARN",
        "title": { "line1": "Four pillars", "line2": "of a sold-out show" },
        "subtitle": "Everything we cover.",
        "pillars": [
            { "id": "p1", "title": "Monetize", "tagline": "Turn fans into revenue", "description": "Pricing that works.", "icon": "dollar" },
            { "id": "p2", "title": "Distribute", "tagline": "Be everywhere", "description": "Clips and channels.", "icon": "share" }
        ]
    }"#;

    pub(crate) const HOST: &str = r#"{
        "label": "YOUR HOST",
        "title": { "line1": "Meet", "line2": "your host" },
        "host": {
            "image": "",
            "role": "FOUNDER",
            "name": "Dana Reyes",
            "description": "Producer of 300+ live shows.",
            "stats": [
                { "icon": "people", "value": "1M+", "label": "Audience" },
                { "icon": "mic", "value": "300+", "label": "Shows" }
            ],
            "followLabel": "Follow:",
            "links": [
                { "label": "Instagram", "url": "https://instagram.com/example" },
                { "label": "YouTube", "url": "https://youtube.com/example" },
                { "label": "LinkedIn", "url": "https://linkedin.com/in/example" }
            ]
        }
    }"#;

    pub(crate) const DEEP_DIVE: &str = r##"{
        "label": "DEEP DIVE",
        "title": "Inside the system",
        "items": [
            { "id": "01", "title": "Stage", "description": "Build the stage.", "image": "/img/stage.jpg", "stat": { "value": "3x", "label": "engagement" }, "imageLeft": true },
            { "id": "02", "title": "Story", "description": "Tell the story.", "image": "", "stat": { "value": "40%", "label": "retention" }, "imageLeft": false }
        ],
        "cta": { "text": "Reserve your spot", "url": "#register" }
    }"##;

    pub(crate) const REGISTER: &str = r#"{
        "headline": "REGISTER NOW",
        "title": { "line1": "Claim your", "line2": "free seat" },
        "description": "Join us live.",
        "benefits": ["Live Q&A", "Replay access"],
        "event": { "date": "Thursday, March 12", "time": "7:00 PM EST" },
        "form": {
            "title": "Reserve your seat",
            "fields": {
                "firstName": { "label": "First name", "placeholder": "Ada", "required": true },
                "lastName": { "label": "Last name", "placeholder": "Lovelace", "required": true },
                "email": { "label": "Email", "placeholder": "you@example.com", "required": true },
                "business": { "label": "Business", "placeholder": "Company", "required": false },
                "role": { "label": "Role", "placeholder": "Select your role", "required": true }
            },
            "roles": ["Founder", "Marketer"],
            "submitText": "Register",
            "securityNote": "Your details stay private."
        }
    }"#;

    pub(crate) const FOOTER: &str = r#"{
        "tagline": "Live events for ambitious creators.",
        "copyright": "(c) 2026 Example Events"
    }"#;

    pub(crate) fn full_store() -> ContentStore {
        let mut store = ContentStore::new();
        for (id, json) in [
            (SectionId::Hero, HERO),
            (SectionId::Pillars, PILLARS),
            (SectionId::Host, HOST),
            (SectionId::DeepDive, DEEP_DIVE),
            (SectionId::Register, REGISTER),
            (SectionId::Footer, FOOTER),
        ] {
            store.insert_json(id, json).unwrap();
        }
        store
    }

    #[test]
    fn loads_every_section() {
        assert_eq!(full_store().loaded(), SectionId::ALL.to_vec());
    }

    #[test]
    fn duplicate_pillar_ids_are_rejected() {
        let json = PILLARS.replace("\"p2\"", "\"p1\"");
        let err = ContentStore::new()
            .insert_json(SectionId::Pillars, &json)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateKey { collection: "pillars", ref key, .. } if key == "p1"
        ));
    }

    #[test]
    fn duplicate_link_labels_are_rejected() {
        let json = HOST.replace("\"YouTube\"", "\"Instagram\"");
        let err = ContentStore::new()
            .insert_json(SectionId::Host, &json)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateKey { collection: "host.links", .. }
        ));
    }

    #[test]
    fn missing_required_field_names_the_section() {
        let err = ContentStore::new()
            .insert_json(SectionId::Pillars, r#"{"label":"x","title":{"line1":"a"},"pillars":[{"id":"p1"}]}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidContent { section: SectionId::Pillars, .. }
        ));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn register_form_schema_is_validated_on_load() {
        let json = REGISTER.replace("\"business\"", "\"company\"");
        let err = ContentStore::new()
            .insert_json(SectionId::Register, &json)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormField(name) if name == "company"));
    }

    #[test]
    fn load_dir_reads_present_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("hero.json"), HERO).unwrap();
        fs::write(dir.path().join("footer.json"), FOOTER).unwrap();

        let store = ContentStore::load_dir(dir.path()).unwrap();
        assert_eq!(store.loaded(), vec![SectionId::Hero, SectionId::Footer]);
    }

    #[test]
    fn load_dir_surfaces_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("deep-dive.json"), "{ not json").unwrap();

        let err = ContentStore::load_dir(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidContent { section: SectionId::DeepDive, .. }
        ));
    }
}
