//! # event-page
//!
//! Content-driven event landing page built from Leptos components.
//!
//! A page is an ordered list of sections (hero, pillars, host, deep dive,
//! register, footer), each fed by one immutable content record. Sections
//! reveal their children with a staggered animation the first time they
//! scroll into view, and the registration form is a controlled form unit
//! that validates required fields locally.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use event_page::{compose_page, render_page, ContentStore, PageConfig};
//!
//! let store = ContentStore::load_dir(Path::new("content"))?;
//! let config = PageConfig::load(Path::new("content/page.toml"))?;
//! let page = compose_page(&store, &config)?;
//!
//! std::fs::write("index.html", render_page(&page)).unwrap();
//! # Ok::<(), event_page::ConfigError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - content records as they appear in the JSON files
//! - [`content`] - loading and validating the content store
//! - [`config`] - `page.toml`: section order, hero variant, reveal timing
//! - [`compose`] - resolving the section order into a [`Page`]
//! - [`reveal`] - the staggered reveal controller and its schedulers
//! - [`form`] - the controlled registration form unit
//! - [`placeholder`] - fallback backgrounds for missing media
//! - [`components`] - Leptos components for every section
//!
//! ## Rendering targets
//!
//! With the `ssr` feature (default) [`render_page`] produces a static HTML
//! document. No visibility signal exists there, so every reveal group shows
//! all of its slots immediately. The browser build mounts
//! [`components::PageBody`] and supplies a live reveal runtime through
//! [`components::RevealContext`].

pub mod components;
pub mod compose;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod placeholder;
pub mod reveal;
pub mod styles;
pub mod types;

pub use compose::{compose, compose_page, ComposedSection, Page, SectionContent, SectionId};
pub use config::PageConfig;
pub use content::ContentStore;
pub use error::{ConfigError, ObservationUnavailable, SlotOrderError};
pub use form::{FormUnit, InputValidationWarning, SubmitHandler, SubmitOutcome};
pub use reveal::{RevealController, RevealPhase, RevealTiming, VirtualClock};

/// Render a composed page to a complete HTML document.
///
/// The output includes `<!DOCTYPE html>`.
#[cfg(feature = "ssr")]
pub fn render_page(page: &Page) -> String {
    use components::PageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let doc = view! { <PageDocument page=page.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::tests::{full_store, DEEP_DIVE, HERO, HOST, PILLARS};
    use pretty_assertions::assert_eq;

    fn render(order: &[&str]) -> String {
        let page = compose(order, &full_store(), &PageConfig::default()).unwrap();
        render_page(&page)
    }

    fn render_with(id: SectionId, json: &str, order: &[&str]) -> String {
        let mut store = full_store();
        store.insert_json(id, json).unwrap();
        let page = compose(order, &store, &PageConfig::default()).unwrap();
        render_page(&page)
    }

    #[test]
    fn renders_a_complete_document() {
        let html = render(&["hero", "pillars", "host", "deep-dive", "register", "footer"]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("<title>Live Event</title>"));
        assert!(html.contains("--brand: #B91118"));
    }

    #[test]
    fn sections_render_in_composition_order() {
        let html = render(&["footer", "pillars", "hero"]);
        let at = |needle: &str| html.find(needle).unwrap();
        assert!(at("data-section=\"footer\"") < at("data-section=\"pillars\""));
        assert!(at("data-section=\"pillars\"") < at("data-section=\"hero\""));
    }

    #[test]
    fn repeated_section_gets_distinct_ids() {
        let html = render(&["footer", "footer"]);
        assert!(html.contains("id=\"footer\""));
        assert!(html.contains("id=\"footer-2\""));
    }

    #[test]
    fn static_render_shows_every_slot() {
        let html = render(&["hero", "pillars", "host", "deep-dive", "register", "footer"]);
        assert!(html.contains("data-reveal-slot=\"0\""));
        assert!(!html.contains("opacity:0;"));
    }

    #[test]
    fn pillar_cards_follow_content_order_and_keys() {
        let html = render_with(
            SectionId::Pillars,
            r#"{
                "label": "WHAT YOU'LL LEARN",
                "title": { "line1": "Two", "line2": "pillars" },
                "pillars": [
                    { "id": "p1", "title": "Monetize", "icon": "dollar" },
                    { "id": "p2", "title": "Distribute", "icon": "share" }
                ]
            }"#,
            &["pillars"],
        );
        let first = html.find("data-key=\"p1\"").unwrap();
        let second = html.find("data-key=\"p2\"").unwrap();
        assert!(first < second);
        assert!(html.find("Monetize").unwrap() < html.find("Distribute").unwrap());
        assert_eq!(html.matches("class=\"pillar-card\"").count(), 2);
        assert_eq!(html.matches("<svg class=\"icon\"").count(), 2);
    }

    #[test]
    fn unknown_icon_renders_nothing() {
        let json = PILLARS.replace("\"share\"", "\"rocket\"");
        let html = render_with(SectionId::Pillars, &json, &["pillars"]);
        assert_eq!(html.matches("class=\"pillar-card\"").count(), 2);
        assert_eq!(html.matches("<svg class=\"icon\"").count(), 1);
        assert!(!html.contains("rocket"));
    }

    #[test]
    fn link_separators_sit_between_links_only() {
        let html = render(&["host"]);
        assert_eq!(html.matches("class=\"host-link\"").count(), 3);
        assert_eq!(html.matches("class=\"link-separator\"").count(), 2);

        let mut host: serde_json::Value = serde_json::from_str(HOST).unwrap();
        host["host"]["links"].as_array_mut().unwrap().truncate(1);
        let one_link = host.to_string();
        let html = render_with(SectionId::Host, &one_link, &["host"]);
        assert_eq!(html.matches("class=\"host-link\"").count(), 1);
        assert_eq!(html.matches("class=\"link-separator\"").count(), 0);
    }

    #[test]
    fn empty_host_image_shows_the_person_placeholder() {
        let html = render(&["host"]);
        assert!(html.contains("host-image placeholder"));
        assert!(html.contains("background:linear-gradient(135deg, #f5f3f0 0%, #e8e6e3 100%)"));
        assert!(!html.contains("<img class=\"host-image\""));
    }

    #[test]
    fn deep_dive_placeholders_are_keyed_by_item_id() {
        let json = DEEP_DIVE.replace("\"/img/stage.jpg\"", "\"\"");
        let html = render_with(SectionId::DeepDive, &json, &["deep-dive"]);
        assert!(html.contains("background:linear-gradient(135deg, #2d1810 0%, #4a1a1c 50%, #B91118 100%)"));
        assert!(html.contains("background:linear-gradient(135deg, #1a0f0a 0%, #3d0f11 50%, #B91118 100%)"));
        assert!(!html.contains("class=\"feature-image\""));
    }

    #[test]
    fn deep_dive_image_side_follows_the_flag() {
        let html = render(&["deep-dive"]);
        let left = html.find("feature-card image-left").unwrap();
        let right = html.find("feature-card image-right").unwrap();
        assert!(left < right);
        assert!(html.contains("src=\"/img/stage.jpg\""));
    }

    #[test]
    fn hero_backdrop_uri_is_encoded() {
        let mut hero: serde_json::Value = serde_json::from_str(HERO).unwrap();
        hero["backgroundImage"] = "/img/o'brien (1).jpg".into();
        let html = render_with(SectionId::Hero, &hero.to_string(), &["hero"]);
        assert!(html.contains("/img/o%27brien%20%281%29.jpg"));
        assert!(!html.contains("o'brien"));
    }

    #[test]
    fn hero_inline_form_is_opt_in() {
        let store = full_store();
        let plain = compose(&["hero"], &store, &PageConfig::default()).unwrap();
        assert!(!render_page(&plain).contains("data-form=\"hero\""));

        let mut config = PageConfig::default();
        config.hero.inline_form = true;
        let inline = compose(&["hero"], &store, &config).unwrap();
        let html = render_page(&inline);
        assert!(html.contains("data-form=\"hero\""));
        assert!(html.contains("id=\"hero-firstName\""));
    }

    #[test]
    fn hero_and_register_forms_do_not_share_ids() {
        let store = full_store();
        let mut config = PageConfig::default();
        config.hero.inline_form = true;
        let page = compose(&["hero", "register"], &store, &config).unwrap();
        let html = render_page(&page);
        assert_eq!(html.matches("id=\"hero-email\"").count(), 1);
        assert_eq!(html.matches("id=\"register-email\"").count(), 1);
    }

    #[test]
    fn footer_without_logo_renders_no_image() {
        let html = render(&["footer"]);
        assert!(html.contains("(c) 2026 Example Events"));
        assert!(!html.contains("class=\"footer-logo\""));
    }
}
