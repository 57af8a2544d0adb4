//! Root document and section dispatch.

use leptos::prelude::*;

use super::{
    DeepDiveSection, FooterSection, HeroSection, HostSection, PillarsSection, RegisterSection,
    SlotSignals,
};
use crate::compose::{ComposedSection, Page, SectionContent};
use crate::styles::PAGE_CSS;

/// The complete HTML document for a composed page.
#[component]
pub fn PageDocument(page: Page) -> impl IntoView {
    let Page {
        title,
        lang,
        sections,
    } = page;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <PageBody sections=sections />
            </body>
        </html>
    }
}

/// Every composed section, in composition order.
///
/// This is also what the browser build mounts.
#[component]
pub fn PageBody(sections: Vec<ComposedSection>) -> impl IntoView {
    view! {
        <main class="event-page">
            {sections.into_iter().map(|section| view! { <SectionView section=section /> }).collect::<Vec<_>>()}
        </main>
    }
}

/// Renders one composed section with its own reveal group.
#[component]
pub fn SectionView(section: ComposedSection) -> impl IntoView {
    let ComposedSection {
        anchor,
        timing,
        content,
        ..
    } = section;
    let signals = SlotSignals::new(content.entrances());

    match content {
        SectionContent::Hero {
            content,
            inline_form,
        } => view! {
            <HeroSection anchor=anchor content=content signals=signals timing=timing inline_form=inline_form />
        }
        .into_any(),
        SectionContent::Pillars(content) => view! {
            <PillarsSection anchor=anchor content=content signals=signals timing=timing />
        }
        .into_any(),
        SectionContent::Host(content) => view! {
            <HostSection anchor=anchor content=content signals=signals timing=timing />
        }
        .into_any(),
        SectionContent::DeepDive(content) => view! {
            <DeepDiveSection anchor=anchor content=content signals=signals timing=timing />
        }
        .into_any(),
        SectionContent::Register { content, form } => view! {
            <RegisterSection anchor=anchor content=content form=form signals=signals timing=timing />
        }
        .into_any(),
        SectionContent::Footer(content) => view! {
            <FooterSection anchor=anchor content=content signals=signals timing=timing />
        }
        .into_any(),
    }
}
