// Event page, browser build (Leptos 0.8 CSR)

mod reveal;
mod submit;

use event_page::components::{PageBody, RevealContext, SubmitContext};
use event_page::styles::PAGE_CSS;
use event_page::{compose_page, ConfigError, ContentStore, Page, PageConfig, SectionId};
use leptos::prelude::*;

use reveal::BrowserReveal;
use submit::ConsoleSubmit;

const CONTENT: [(SectionId, &str); 6] = [
    (SectionId::Hero, include_str!("../../event_page/content/hero.json")),
    (SectionId::Pillars, include_str!("../../event_page/content/pillars.json")),
    (SectionId::Host, include_str!("../../event_page/content/host.json")),
    (SectionId::DeepDive, include_str!("../../event_page/content/deep-dive.json")),
    (SectionId::Register, include_str!("../../event_page/content/register.json")),
    (SectionId::Footer, include_str!("../../event_page/content/footer.json")),
];

const PAGE_TOML: &str = include_str!("../../event_page/content/page.toml");

fn load_page() -> Result<Page, ConfigError> {
    let mut store = ContentStore::new();
    for (id, json) in CONTENT {
        store.insert_json(id, json)?;
    }
    let config = PageConfig::from_toml(PAGE_TOML)?;
    compose_page(&store, &config)
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let page = match load_page() {
        Ok(page) => page,
        Err(err) => {
            tracing::error!("event page content is invalid: {err}");
            return;
        }
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&page.title);
    }
    leptos::mount::mount_to_body(move || view! { <App page=page /> });
}

#[component]
fn App(page: Page) -> impl IntoView {
    provide_context(RevealContext::new(BrowserReveal));
    provide_context(SubmitContext::new(ConsoleSubmit));

    view! {
        <style>{PAGE_CSS}</style>
        <PageBody sections=page.sections />
    }
}
