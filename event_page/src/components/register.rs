//! Register section - event details beside the registration form

use std::sync::Arc;

use leptos::prelude::*;

use super::{Glyph, RegistrationForm, RevealGroup, RevealSlot, SlotSignals, GLYPH_CALENDAR};
use crate::form::{FormKind, FormSchema};
use crate::reveal::RevealTiming;
use crate::types::RegisterContent;

/// Two columns: event pitch on the left, registration form on the right.
#[component]
pub fn RegisterSection(
    #[prop(into)] anchor: String,
    content: Arc<RegisterContent>,
    form: Arc<FormSchema>,
    signals: SlotSignals,
    timing: RevealTiming,
) -> impl IntoView {
    let duration = timing.duration_ms;
    let RegisterContent {
        headline,
        title,
        description,
        benefits,
        event,
        ..
    } = content.as_ref().clone();

    view! {
        <section id=anchor.clone() class="section register" data-section="register">
            <RevealGroup label=anchor.clone() signals=signals.clone() timing=timing class="container register-grid">
                <RevealSlot signals=signals.clone() index=0 duration_ms=duration class="register-details">
                    <div class="section-label boxed">{headline}</div>
                    <h2 class="section-title">
                        {title.line1}
                        <br />
                        <em class="accent">{title.line2}</em>
                    </h2>
                    <p class="register-description">{description}</p>
                    <ul class="benefit-list">
                        {benefits.into_iter().map(|benefit| view! {
                            <li class="benefit" data-key=benefit.clone()>
                                <span class="benefit-dot"></span>
                                <span>{benefit.clone()}</span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                    <div class="event-card">
                        <Glyph path=GLYPH_CALENDAR />
                        <div>
                            <div class="event-date">{event.date}</div>
                            <div class="event-time">{event.time}</div>
                        </div>
                    </div>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=1 duration_ms=duration class="register-form-panel">
                    <RegistrationForm kind=FormKind::Register schema=form />
                </RevealSlot>
            </RevealGroup>
        </section>
    }
}
