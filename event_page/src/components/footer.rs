//! Footer section - logo, tagline and copyright

use std::sync::Arc;

use leptos::prelude::*;

use super::{RevealGroup, RevealSlot, SlotSignals};
use crate::reveal::RevealTiming;
use crate::types::FooterContent;

#[component]
pub fn FooterSection(
    #[prop(into)] anchor: String,
    content: Arc<FooterContent>,
    signals: SlotSignals,
    timing: RevealTiming,
) -> impl IntoView {
    let duration = timing.duration_ms;
    let FooterContent {
        tagline,
        copyright,
        logo,
        logo_alt,
    } = content.as_ref().clone();
    // no logo configured: the footer simply has none
    let logo = logo.uri().map(|uri| {
        let src = uri.to_string();
        view! {
            <div class="footer-logo">
                <img src=src alt=logo_alt />
            </div>
        }
    });

    view! {
        <footer id=anchor.clone() class="section footer" data-section="footer">
            <RevealGroup label=anchor.clone() signals=signals.clone() timing=timing class="footer-inner">
                <RevealSlot signals=signals.clone() index=0 duration_ms=duration>
                    {logo}
                    <p class="footer-tagline">{tagline}</p>
                    <div class="footer-rule"></div>
                    <p class="footer-copyright">{copyright}</p>
                </RevealSlot>
            </RevealGroup>
        </footer>
    }
}
