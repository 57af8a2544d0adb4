//! Content data types, one record per page section.
//!
//! These mirror the JSON content files and are designed to be:
//!
//! - **Serializable** - camelCase keys, straight from the content files via serde
//! - **Immutable** - loaded once, shared behind `Arc`, never mutated by rendering
//! - **Keyed** - every collection item exposes the key it is rendered under
//!
//! Missing optional fields fall back to empty values; missing required fields
//! fail deserialization and surface as [`crate::ConfigError::InvalidContent`].
//!
//! # Example
//!
//! ```rust
//! use event_page::types::PillarsContent;
//!
//! let pillars: PillarsContent = serde_json::from_str(r#"{
//!     "label": "WHY ATTEND",
//!     "title": { "line1": "Four pillars", "line2": "of growth" },
//!     "pillars": [
//!         { "id": "p1", "title": "Revenue", "icon": "dollar" },
//!         { "id": "p2", "title": "Reach", "icon": "share" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(pillars.pillars.len(), 2);
//! assert_eq!(pillars.subtitle, "");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Anything rendered inside a keyed collection.
pub trait Keyed {
    /// Stable identifier, unique within its collection.
    fn key(&self) -> &str;
}

impl Keyed for String {
    fn key(&self) -> &str {
        self
    }
}

/// Headline split into two ordered lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lines {
    pub line1: String,
    #[serde(default)]
    pub line2: String,
}

/// `{date, time}` event descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSlot {
    pub date: String,
    pub time: String,
}

/// `{value, label}` stat pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// `{text, url}` call-to-action pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub text: String,
    pub url: String,
}

/// Optional media reference.
///
/// The empty string is the "no image" sentinel. A JSON `null` is rejected at
/// load time; only an empty or absent value means "use the placeholder".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRef(String);

impl MediaRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI, or `None` for the empty sentinel.
    pub fn uri(&self) -> Option<&str> {
        if self.0.is_empty() { None } else { Some(&self.0) }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Icon name token as written in content files.
///
/// The set is closed; anything else lands in [`IconToken::Unknown`] and renders
/// as nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconToken {
    Dollar,
    Share,
    Monitor,
    Lightning,
    People,
    Mic,
    Book,
    Award,
    Unknown(String),
}

impl Default for IconToken {
    fn default() -> Self {
        IconToken::Unknown(String::new())
    }
}

impl From<String> for IconToken {
    fn from(token: String) -> Self {
        match token.as_str() {
            "dollar" => IconToken::Dollar,
            "share" => IconToken::Share,
            "monitor" => IconToken::Monitor,
            "lightning" => IconToken::Lightning,
            "people" => IconToken::People,
            "mic" => IconToken::Mic,
            "book" => IconToken::Book,
            "award" => IconToken::Award,
            _ => IconToken::Unknown(token),
        }
    }
}

impl From<IconToken> for String {
    fn from(token: IconToken) -> Self {
        match token {
            IconToken::Dollar => "dollar".into(),
            IconToken::Share => "share".into(),
            IconToken::Monitor => "monitor".into(),
            IconToken::Lightning => "lightning".into(),
            IconToken::People => "people".into(),
            IconToken::Mic => "mic".into(),
            IconToken::Book => "book".into(),
            IconToken::Award => "award".into(),
            IconToken::Unknown(raw) => raw,
        }
    }
}

// =============================================================================
// Hero
// =============================================================================

/// Pill shown above the hero headline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub text: String,
    #[serde(default)]
    pub highlight: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub tag: Tag,
    pub headline: Lines,
    #[serde(default)]
    pub subheadline: String,
    #[serde(default)]
    pub description: String,
    pub event: EventSlot,
    pub cta: CallToAction,
    /// Small print under the call to action.
    #[serde(default)]
    pub footer: String,
    #[serde(default)]
    pub background_image: MediaRef,
}

// =============================================================================
// Pillars
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarsContent {
    pub label: String,
    pub title: Lines,
    #[serde(default)]
    pub subtitle: String,
    pub pillars: Vec<Pillar>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: IconToken,
}

impl Keyed for Pillar {
    fn key(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Host
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostContent {
    pub label: String,
    pub title: Lines,
    pub host: HostProfile,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostProfile {
    #[serde(default)]
    pub image: MediaRef,
    #[serde(default)]
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: Vec<HostStat>,
    #[serde(default)]
    pub follow_label: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Host stat tile: icon plus a `{value, label}` pair, keyed by label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostStat {
    #[serde(default)]
    pub icon: IconToken,
    pub value: String,
    pub label: String,
}

impl Keyed for HostStat {
    fn key(&self) -> &str {
        &self.label
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Keyed for Link {
    fn key(&self) -> &str {
        &self.label
    }
}

// =============================================================================
// Deep dive
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepDiveContent {
    pub label: String,
    pub title: String,
    pub items: Vec<DeepDiveItem>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepDiveItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: MediaRef,
    pub stat: Stat,
    /// Image column on the left (`true`) or right (`false`).
    #[serde(default)]
    pub image_left: bool,
}

impl Keyed for DeepDiveItem {
    fn key(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Register
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterContent {
    pub headline: String,
    pub title: Lines,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub event: EventSlot,
    pub form: FormContent,
}

/// Registration form as declared in content.
///
/// Field keys are validated into [`crate::form::FieldName`] when the
/// [`crate::form::FormSchema`] is built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormContent {
    pub title: String,
    pub fields: BTreeMap<String, FieldSpec>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub submit_text: String,
    #[serde(default)]
    pub security_note: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub required: bool,
}

// =============================================================================
// Footer
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub tagline: String,
    pub copyright: String,
    #[serde(default)]
    pub logo: MediaRef,
    #[serde(default)]
    pub logo_alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn icon_tokens_parse_known_and_keep_unknown() {
        assert_eq!(IconToken::from("mic".to_string()), IconToken::Mic);
        assert_eq!(
            IconToken::from("rocket".to_string()),
            IconToken::Unknown("rocket".into())
        );
    }

    #[test]
    fn missing_image_defaults_to_empty_sentinel() {
        let item: DeepDiveItem = serde_json::from_str(
            r#"{"id":"01","title":"T","stat":{"value":"3x","label":"reach"}}"#,
        )
        .unwrap();
        assert!(item.image.is_empty());
        assert_eq!(item.image.uri(), None);
        assert!(!item.image_left);
    }

    #[test]
    fn null_image_is_rejected() {
        let err = serde_json::from_str::<DeepDiveItem>(
            r#"{"id":"01","title":"T","image":null,"stat":{"value":"1","label":"x"}}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn pillar_without_title_is_rejected() {
        let err = serde_json::from_str::<Pillar>(r#"{"id":"p1"}"#).unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}
