//! Leptos components for the event page.
//!
//! Every section is a `#[component]` fed by one immutable content record. The
//! same components render on the server ([`crate::render_page`]) and in the
//! browser build, which provides a live [`RevealRuntime`] and a
//! [`SubmitContext`] through Leptos context.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── PageBody
//!     └── SectionView (per composed section)
//!         ├── HeroSection
//!         │   └── RegistrationForm (inline variant)
//!         ├── PillarsSection
//!         │   └── Icon
//!         ├── HostSection
//!         │   └── Icon
//!         ├── DeepDiveSection
//!         ├── RegisterSection
//!         │   └── RegistrationForm
//!         └── FooterSection
//! ```
//!
//! Each section wraps its content in a [`RevealGroup`] whose children are
//! [`RevealSlot`]s, indexed in document order.

mod deep_dive;
mod document;
mod footer;
mod form;
mod hero;
mod host;
mod icons;
mod pillars;
mod register;
mod reveal;

pub use deep_dive::DeepDiveSection;
pub use document::{PageBody, PageDocument, SectionView};
pub use footer::FooterSection;
pub use form::{RegistrationForm, SubmitContext};
pub use hero::HeroSection;
pub use host::HostSection;
pub use icons::*;
pub use pillars::PillarsSection;
pub use register::RegisterSection;
pub use reveal::{RevealContext, RevealGroup, RevealRuntime, RevealSlot, SlotSignals};
