//! Page composition: which sections, in which order.
//!
//! The order is configuration ([`PageConfig::sections`]). [`compose`] resolves
//! each identifier to its content and keeps the list exactly as given: no
//! reordering, no deduplication. An identifier nobody can render is fatal.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::config::PageConfig;
use crate::content::ContentStore;
use crate::error::ConfigError;
use crate::form::FormSchema;
use crate::reveal::{Entrance, RevealTiming};
use crate::types::{
    DeepDiveContent, FooterContent, HeroContent, HostContent, PillarsContent, RegisterContent,
};

/// Every section type the page knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Pillars,
    Host,
    DeepDive,
    Register,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::Pillars,
        SectionId::Host,
        SectionId::DeepDive,
        SectionId::Register,
        SectionId::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Pillars => "pillars",
            SectionId::Host => "host",
            SectionId::DeepDive => "deep-dive",
            SectionId::Register => "register",
            SectionId::Footer => "footer",
        }
    }

    /// Content file name inside a content directory.
    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }

    /// Stagger used unless the page config overrides it.
    pub fn default_timing(self) -> RevealTiming {
        match self {
            SectionId::Host => RevealTiming::new(80, 100),
            SectionId::Register => RevealTiming::new(100, 100),
            _ => RevealTiming::new(80, 0),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownSection(s.to_string()))
    }
}

/// Resolved content for one composed section.
#[derive(Clone, Debug)]
pub enum SectionContent {
    Hero {
        content: Arc<HeroContent>,
        /// Present when the hero carries its own registration form.
        inline_form: Option<Arc<FormSchema>>,
    },
    Pillars(Arc<PillarsContent>),
    Host(Arc<HostContent>),
    DeepDive(Arc<DeepDiveContent>),
    Register {
        content: Arc<RegisterContent>,
        form: Arc<FormSchema>,
    },
    Footer(Arc<FooterContent>),
}

impl SectionContent {
    /// Reveal slots the section renders, in document order.
    pub fn entrances(&self) -> Vec<Entrance> {
        match self {
            // tag, headline, copy, event, cta, small print, then the form
            SectionContent::Hero { inline_form, .. } => {
                let mut entrances = vec![Entrance::FadeInUp; 6];
                if inline_form.is_some() {
                    entrances.push(Entrance::FadeInUp);
                }
                entrances
            }
            SectionContent::Pillars(content) => {
                vec![Entrance::FadeInUp; 1 + content.pillars.len()]
            }
            SectionContent::Host(_) => vec![Entrance::FadeInUp; 2],
            SectionContent::DeepDive(content) => {
                let cta = usize::from(content.cta.is_some());
                vec![Entrance::FadeInUp; 1 + content.items.len() + cta]
            }
            SectionContent::Register { .. } => {
                vec![Entrance::SlideFromLeft, Entrance::SlideFromRight]
            }
            SectionContent::Footer(_) => vec![Entrance::Fade],
        }
    }
}

/// One entry of a composed page.
#[derive(Clone, Debug)]
pub struct ComposedSection {
    pub id: SectionId,
    /// Element id. The first occurrence of a section uses its plain name,
    /// repeats get `-2`, `-3`, ...
    pub anchor: String,
    pub timing: RevealTiming,
    pub content: SectionContent,
}

/// A page ready to render.
#[derive(Clone, Debug)]
pub struct Page {
    pub title: String,
    pub lang: String,
    pub sections: Vec<ComposedSection>,
}

impl Page {
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }
}

/// Compose the sections named in `order`.
pub fn compose<S: AsRef<str>>(
    order: &[S],
    store: &ContentStore,
    config: &PageConfig,
) -> Result<Page, ConfigError> {
    let mut sections: Vec<ComposedSection> = Vec::with_capacity(order.len());

    for name in order {
        let id: SectionId = name.as_ref().parse()?;
        let content = resolve(id, store, config)?;
        let seen = sections.iter().filter(|s| s.id == id).count();
        let anchor = match seen {
            0 => id.as_str().to_string(),
            n => format!("{}-{}", id.as_str(), n + 1),
        };
        sections.push(ComposedSection {
            id,
            anchor,
            timing: config.timing_for(id),
            content,
        });
    }

    debug!(
        sections = ?sections.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        "page composed"
    );

    Ok(Page {
        title: config.title.clone(),
        lang: config.lang.clone(),
        sections,
    })
}

/// Compose using the order from the page config.
pub fn compose_page(store: &ContentStore, config: &PageConfig) -> Result<Page, ConfigError> {
    compose(&config.sections, store, config)
}

fn resolve(
    id: SectionId,
    store: &ContentStore,
    config: &PageConfig,
) -> Result<SectionContent, ConfigError> {
    let missing = || ConfigError::MissingContent(id);
    Ok(match id {
        SectionId::Hero => {
            let inline_form = if config.hero.inline_form {
                let form = store
                    .register_form()
                    .ok_or(ConfigError::MissingContent(SectionId::Register))?;
                Some(Arc::clone(form))
            } else {
                None
            };
            SectionContent::Hero {
                content: Arc::clone(store.hero().ok_or_else(missing)?),
                inline_form,
            }
        }
        SectionId::Pillars => SectionContent::Pillars(Arc::clone(store.pillars().ok_or_else(missing)?)),
        SectionId::Host => SectionContent::Host(Arc::clone(store.host().ok_or_else(missing)?)),
        SectionId::DeepDive => {
            SectionContent::DeepDive(Arc::clone(store.deep_dive().ok_or_else(missing)?))
        }
        SectionId::Register => SectionContent::Register {
            content: Arc::clone(store.register().ok_or_else(missing)?),
            form: Arc::clone(store.register_form().ok_or_else(missing)?),
        },
        SectionId::Footer => SectionContent::Footer(Arc::clone(store.footer().ok_or_else(missing)?)),
    })
}
