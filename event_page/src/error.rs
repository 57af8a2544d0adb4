//! Error types.
//!
//! Only configuration problems are errors in the `Result` sense. Everything a
//! visitor can cause (empty media, unknown icons, missing form values) degrades
//! locally and never reaches these types.

use std::path::PathBuf;

use thiserror::Error;

use crate::compose::SectionId;

/// Fatal problem with the page content or page configuration.
///
/// Raised while loading or composing, before anything is rendered. Content is
/// loaded atomically, so one of these aborts the whole page.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A composition order names a section nobody can render.
    #[error("unknown section identifier `{0}`")]
    UnknownSection(String),

    /// A composed section has no content record loaded.
    #[error("no content loaded for section `{0}`")]
    MissingContent(SectionId),

    /// A content record failed schema validation (missing required field,
    /// wrong type, `null` where a string is expected, ...).
    #[error("invalid content for section `{section}`: {source}")]
    InvalidContent {
        section: SectionId,
        #[source]
        source: serde_json::Error,
    },

    /// Two items of one collection share a rendering key.
    #[error("duplicate key `{key}` in `{section}.{collection}`")]
    DuplicateKey {
        section: SectionId,
        collection: &'static str,
        key: String,
    },

    /// The register form schema does not declare a field the form needs.
    #[error("form schema is missing field `{0}`")]
    MissingFormField(&'static str),

    /// The register form schema declares a field the form does not know.
    #[error("unknown form field `{0}`")]
    UnknownFormField(String),

    /// The page configuration file is not valid TOML for [`crate::config::PageConfig`].
    #[error("invalid page config: {0}")]
    InvalidPageConfig(#[from] toml::de::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Slot list handed to the reveal controller is not `0..n` in order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("animation slot at position {position} has index {found}, expected {position}")]
pub struct SlotOrderError {
    pub position: usize,
    pub found: usize,
}

/// The host has no way to tell whether a region is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("visibility observation unavailable: {reason}")]
pub struct ObservationUnavailable {
    pub reason: String,
}

impl ObservationUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
