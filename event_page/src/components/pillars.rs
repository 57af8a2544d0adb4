//! Pillars section - keyed grid of learning pillars

use std::sync::Arc;

use leptos::prelude::*;

use super::{Icon, RevealGroup, RevealSlot, SlotSignals};
use crate::reveal::RevealTiming;
use crate::types::PillarsContent;

/// "What you'll learn": one card per pillar, in content order.
#[component]
pub fn PillarsSection(
    #[prop(into)] anchor: String,
    content: Arc<PillarsContent>,
    signals: SlotSignals,
    timing: RevealTiming,
) -> impl IntoView {
    let duration = timing.duration_ms;
    let PillarsContent {
        label,
        title,
        subtitle,
        pillars,
    } = content.as_ref().clone();

    view! {
        <section id=anchor.clone() class="section pillars" data-section="pillars">
            <RevealGroup label=anchor.clone() signals=signals.clone() timing=timing class="container">
                <RevealSlot signals=signals.clone() index=0 duration_ms=duration class="section-header">
                    <div class="section-label boxed">{label}</div>
                    <h2 class="section-title">
                        {title.line1}
                        <br />
                        <span class="accent">{title.line2}</span>
                    </h2>
                    <p class="section-subtitle">{subtitle}</p>
                </RevealSlot>
                <div class="pillar-list">
                    {pillars.into_iter().enumerate().map(|(i, pillar)| {
                        view! {
                            <RevealSlot signals=signals.clone() index={i + 1} duration_ms=duration>
                                <article class="pillar-card" data-key=pillar.id>
                                    <div class="pillar-icon">
                                        <Icon token=pillar.icon />
                                    </div>
                                    <div class="pillar-body">
                                        <h3 class="pillar-title">{pillar.title}</h3>
                                        <p class="pillar-tagline">{pillar.tagline}</p>
                                        <p class="pillar-description">{pillar.description}</p>
                                    </div>
                                </article>
                            </RevealSlot>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </RevealGroup>
        </section>
    }
}
