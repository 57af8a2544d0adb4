//! Host section - portrait, bio, stats and follow links

use std::sync::Arc;

use leptos::prelude::*;

use super::{Glyph, Icon, RevealGroup, RevealSlot, SlotSignals, GLYPH_PERSON};
use crate::placeholder::{self, Media};
use crate::reveal::RevealTiming;
use crate::types::{HostContent, Link};

/// Host profile card: portrait, bio, stat tiles and follow links.
#[component]
pub fn HostSection(
    #[prop(into)] anchor: String,
    content: Arc<HostContent>,
    signals: SlotSignals,
    timing: RevealTiming,
) -> impl IntoView {
    let duration = timing.duration_ms;
    let HostContent { label, title, host } = content.as_ref().clone();

    let portrait = match placeholder::resolve(&host.image, &placeholder::HOST, &host.name) {
        Media::Image(uri) => view! {
            <img class="host-image" src=uri.to_string() alt=host.name.clone() />
        }
        .into_any(),
        Media::Placeholder(background) => view! {
            <div class="host-image placeholder" style=format!("background:{background}")>
                <Glyph path=GLYPH_PERSON class="glyph-large" />
            </div>
        }
        .into_any(),
    };

    view! {
        <section id=anchor.clone() class="section host" data-section="host">
            <RevealGroup label=anchor.clone() signals=signals.clone() timing=timing class="container">
                <RevealSlot signals=signals.clone() index=0 duration_ms=duration class="section-header">
                    <div class="section-label boxed">{label}</div>
                    <h2 class="section-title">
                        {title.line1}
                        " "
                        <span class="accent">{title.line2}</span>
                    </h2>
                </RevealSlot>
                <RevealSlot signals=signals.clone() index=1 duration_ms=duration>
                    <article class="host-card">
                        <div class="host-portrait">{portrait}</div>
                        <div class="host-body">
                            <p class="host-role">{host.role}</p>
                            <h3 class="host-name">{host.name}</h3>
                            <p class="host-description">{host.description}</p>
                            <div class="host-stats">
                                {host.stats.into_iter().map(|stat| view! {
                                    <div class="host-stat" data-key=stat.label.clone()>
                                        <div class="host-stat-icon">
                                            <Icon token=stat.icon size="20" />
                                        </div>
                                        <span class="host-stat-value">{stat.value}</span>
                                        <span class="host-stat-label">{stat.label.clone()}</span>
                                    </div>
                                }).collect::<Vec<_>>()}
                            </div>
                            <FollowLinks label=host.follow_label links=host.links />
                        </div>
                    </article>
                </RevealSlot>
            </RevealGroup>
        </section>
    }
}

/// Follow label plus links, with a separator between consecutive links only.
#[component]
fn FollowLinks(label: String, links: Vec<Link>) -> impl IntoView {
    let last = links.len().saturating_sub(1);
    view! {
        <div class="host-links">
            <span class="host-follow-label">{label}</span>
            {links.into_iter().enumerate().map(|(i, link)| view! {
                <span class="host-link" data-key=link.label.clone()>
                    <a href=link.url>{link.label.clone()}</a>
                    {(i < last).then(|| view! {
                        <span class="link-separator" aria-hidden="true">"|"</span>
                    })}
                </span>
            }).collect::<Vec<_>>()}
        </div>
    }
}
