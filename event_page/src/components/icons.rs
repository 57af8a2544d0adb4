//! Inline SVG icons.
//!
//! [`Icon`] maps an [`IconToken`] from content to its glyph. The token set is
//! closed: an unknown token renders nothing. The smaller glyphs below are
//! fixed decorations used by the sections themselves.

use leptos::prelude::*;
use tracing::debug;

use crate::types::IconToken;

/// Renders the glyph for a content icon token.
///
/// # Props
///
/// * `token` - icon name from the content record
/// * `size` - width and height in pixels (default: "24")
///
/// ```rust,ignore
/// view! { <Icon token=pillar.icon.clone() /> }
/// ```
#[component]
pub fn Icon(
    token: IconToken,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
) -> impl IntoView {
    match token {
        IconToken::Dollar => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="currentColor">
                <path d=PATH_DOLLAR></path>
            </svg>
        }
        .into_any(),
        IconToken::Share => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="18" cy="5" r="3" />
                <circle cx="6" cy="12" r="3" />
                <circle cx="18" cy="19" r="3" />
                <path d="m8.59 13.51 6.83 3.98"></path>
                <path d="m15.41 6.51-6.82 3.98"></path>
            </svg>
        }
        .into_any(),
        IconToken::Monitor => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="2" y="3" width="20" height="14" rx="2" ry="2" />
                <path d="M8 21h8"></path>
                <path d="M12 17v4"></path>
            </svg>
        }
        .into_any(),
        IconToken::Lightning => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="currentColor">
                <path d="M7 2v11h3v9l7-12h-4l4-8z"></path>
            </svg>
        }
        .into_any(),
        IconToken::People => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"></path>
                <circle cx="9" cy="7" r="4" />
                <path d="M23 21v-2a4 4 0 0 0-3-3.87"></path>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"></path>
            </svg>
        }
        .into_any(),
        IconToken::Mic => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M12 1a3 3 0 0 0-3 3v8a3 3 0 0 0 6 0V4a3 3 0 0 0-3-3z"></path>
                <path d="M19 10v2a7 7 0 0 1-14 0v-2"></path>
                <line x1="12" y1="19" x2="12" y2="23" />
                <line x1="8" y1="23" x2="16" y2="23" />
            </svg>
        }
        .into_any(),
        IconToken::Book => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"></path>
                <path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"></path>
                <path d="M8 7h8"></path>
                <path d="M8 11h8"></path>
            </svg>
        }
        .into_any(),
        IconToken::Award => view! {
            <svg class="icon" width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <circle cx="12" cy="8" r="7" />
                <path d="M8.21 13.89L7 23l5-3 5 3-1.21-9.12"></path>
            </svg>
        }
        .into_any(),
        IconToken::Unknown(raw) => {
            debug!(token = %raw, "unknown icon token, rendering nothing");
            ().into_any()
        }
    }
}

/// Stroked outline glyph on a 24x24 grid.
#[component]
pub fn Glyph(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Additional CSS class names
    #[prop(default = "glyph")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path></path>
        </svg>
    }
}

// =============================================================================
// Glyph paths
// =============================================================================

const PATH_DOLLAR: &str = "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1.41 16.09V20h-2.67v-1.93c-1.71-.36-3.16-1.46-3.27-3.4h1.96c.1 1.05.82 1.87 2.65 1.87 1.96 0 2.4-.98 2.4-1.59 0-.83-.44-1.61-2.67-2.14-2.48-.6-4.18-1.62-4.18-3.67 0-1.72 1.39-2.84 3.11-3.21V4h2.67v1.95c1.86.45 2.79 1.86 2.85 3.39H14.3c-.05-1.11-.64-1.87-2.22-1.87-1.5 0-2.4.68-2.4 1.64 0 .84.65 1.39 2.67 1.91s4.18 1.39 4.18 3.91c-.01 1.83-1.38 2.83-3.12 3.16z";

/// Calendar (event date)
pub const GLYPH_CALENDAR: &str =
    "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";

/// Clock (event time)
pub const GLYPH_CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";

/// Right arrow (call to action)
pub const GLYPH_ARROW: &str = "M17 8l4 4m0 0l-4 4m4-4H3";

/// Head and shoulders (host portrait placeholder)
pub const GLYPH_PERSON: &str = "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z";

/// Padlock (form security note)
pub const GLYPH_LOCK: &str = "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z";
