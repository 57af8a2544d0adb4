//! Deep dive section - numbered feature cards with image or placeholder

use std::sync::Arc;

use leptos::prelude::*;

use super::{RevealGroup, RevealSlot, SlotSignals};
use crate::placeholder::{self, Media};
use crate::reveal::RevealTiming;
use crate::types::{DeepDiveContent, DeepDiveItem};

/// Alternating feature cards with a stat overlay on each image.
///
/// Which side the image sits on comes from each item's `imageLeft` flag, not
/// from its position in the list.
#[component]
pub fn DeepDiveSection(
    #[prop(into)] anchor: String,
    content: Arc<DeepDiveContent>,
    signals: SlotSignals,
    timing: RevealTiming,
) -> impl IntoView {
    let duration = timing.duration_ms;
    let DeepDiveContent {
        label,
        title,
        items,
        cta,
    } = content.as_ref().clone();
    let cta_index = 1 + items.len();

    view! {
        <section id=anchor.clone() class="section deep-dive" data-section="deep-dive">
            <RevealGroup label=anchor.clone() signals=signals.clone() timing=timing class="container">
                <RevealSlot signals=signals.clone() index=0 duration_ms=duration class="section-header">
                    <p class="section-label">{label}</p>
                    <h2 class="section-title">{title}</h2>
                </RevealSlot>
                <div class="feature-list">
                    {items.into_iter().enumerate().map(|(i, item)| view! {
                        <RevealSlot signals=signals.clone() index={i + 1} duration_ms=duration>
                            <FeatureCard item=item />
                        </RevealSlot>
                    }).collect::<Vec<_>>()}
                </div>
                {cta.map(|cta| view! {
                    <RevealSlot signals=signals.clone() index=cta_index duration_ms=duration class="section-cta">
                        <a href=cta.url class="btn btn-primary btn-large">{cta.text}</a>
                    </RevealSlot>
                })}
            </RevealGroup>
        </section>
    }
}

#[component]
fn FeatureCard(item: DeepDiveItem) -> impl IntoView {
    let layout = if item.image_left {
        "feature-card image-left"
    } else {
        "feature-card image-right"
    };

    let media = match placeholder::resolve(&item.image, &placeholder::DEEP_DIVE, &item.id) {
        Media::Image(uri) => view! {
            <img class="feature-image" src=uri.to_string() alt="" />
        }
        .into_any(),
        Media::Placeholder(background) => view! {
            <div class="feature-image placeholder" style=format!("background:{background}")></div>
        }
        .into_any(),
    };

    view! {
        <article class=layout data-key=item.id.clone()>
            <div class="feature-media">
                {media}
                <div class="feature-stat">
                    <div class="feature-stat-value">{item.stat.value}</div>
                    <div class="feature-stat-label">{item.stat.label}</div>
                </div>
            </div>
            <div class="feature-text">
                <span class="feature-number" aria-hidden="true">{item.id.clone()}</span>
                <div class="feature-rule"></div>
                <h3 class="feature-title">{item.title}</h3>
                <p class="feature-description">{item.description}</p>
            </div>
        </article>
    }
}
