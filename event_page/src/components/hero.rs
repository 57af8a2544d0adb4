//! Hero section - event pitch, schedule and primary call to action

use std::sync::Arc;

use leptos::prelude::*;

use super::{
    Glyph, RegistrationForm, RevealGroup, RevealSlot, SlotSignals, GLYPH_ARROW, GLYPH_CALENDAR,
    GLYPH_CLOCK,
};
use crate::form::{FormKind, FormSchema};
use crate::placeholder;
use crate::reveal::RevealTiming;
use crate::types::HeroContent;

/// Full-height stage with the event pitch and the primary call to action.
#[component]
pub fn HeroSection(
    #[prop(into)] anchor: String,
    content: Arc<HeroContent>,
    signals: SlotSignals,
    timing: RevealTiming,
    /// Compact registration form rendered below the call to action
    inline_form: Option<Arc<FormSchema>>,
) -> impl IntoView {
    let backdrop = placeholder::css_background(placeholder::resolve(
        &content.background_image,
        &placeholder::HERO,
        &anchor,
    ));
    let duration = timing.duration_ms;
    let HeroContent {
        tag,
        headline,
        subheadline,
        description,
        event,
        cta,
        footer,
        ..
    } = content.as_ref().clone();

    view! {
        <section id=anchor.clone() class="section hero" data-section="hero">
            <div class="hero-backdrop" style=backdrop aria-hidden="true"></div>
            <div class="hero-curtain" aria-hidden="true"></div>
            <RevealGroup label=anchor.clone() signals=signals.clone() timing=timing class="hero-content">
                <RevealSlot signals=signals.clone() index=0 duration_ms=duration>
                    <div class="hero-tag">
                        <span class="hero-tag-dot"></span>
                        <span class="hero-tag-text">{tag.text}</span>
                    </div>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=1 duration_ms=duration>
                    <h1 class="hero-headline">
                        <span>{headline.line1}</span>
                        <br />
                        <span>{headline.line2}</span>
                    </h1>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=2 duration_ms=duration>
                    <p class="hero-subheadline">{subheadline}</p>
                    <p class="hero-description">{description}</p>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=3 duration_ms=duration class="hero-event">
                    <span class="event-detail">
                        <Glyph path=GLYPH_CALENDAR />
                        {event.date}
                    </span>
                    <span class="event-detail">
                        <Glyph path=GLYPH_CLOCK />
                        {event.time}
                    </span>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=4 duration_ms=duration>
                    <a href=cta.url class="btn btn-primary btn-large">
                        {cta.text}
                        <Glyph path=GLYPH_ARROW />
                    </a>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=5 duration_ms=duration>
                    <p class="hero-footer">{footer}</p>
                </RevealSlot>
                {inline_form.map(|schema| view! {
                    <RevealSlot signals=signals.clone() index=6 duration_ms=duration class="hero-form">
                        <RegistrationForm kind=FormKind::HeroInline schema=schema compact=true />
                    </RevealSlot>
                })}
            </RevealGroup>
        </section>
    }
}
