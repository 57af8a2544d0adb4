//! Placeholder backgrounds for media that is not there.
//!
//! An empty [`MediaRef`] is a normal state. Renderers resolve it against a
//! [`Palette`] keyed by the item's identifier; unregistered keys get the
//! palette's default.

use tracing::debug;

use crate::types::MediaRef;

/// Closed mapping from item key to CSS background.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    entries: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl Palette {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Background for `key`, or the default when the key is not registered.
    pub fn background(&self, key: &str) -> &'static str {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, background)| *background)
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// Deep-dive cards, keyed by item id.
pub const DEEP_DIVE: Palette = Palette::new(
    &[
        ("01", "linear-gradient(135deg, #2d1810 0%, #4a1a1c 50%, #B91118 100%)"),
        ("02", "linear-gradient(135deg, #1a0f0a 0%, #3d0f11 50%, #B91118 100%)"),
        ("03", "linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f3460 100%)"),
        ("04", "linear-gradient(135deg, #0d0d0d 0%, #1a0a0a 50%, #B91118 100%)"),
    ],
    "#2d1810",
);

/// Host portrait backdrop (shown with a person glyph).
pub const HOST: Palette = Palette::new(&[], "linear-gradient(135deg, #f5f3f0 0%, #e8e6e3 100%)");

/// Hero stage backdrop when no banner image is configured.
pub const HERO: Palette = Palette::new(
    &[],
    "linear-gradient(180deg, #1a0f0a 0%, #2d1810 50%, #0d0806 100%)",
);

/// What a renderer should draw for a media slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Media<'a> {
    Image(&'a str),
    Placeholder(&'static str),
}

/// Resolve a media reference for the item keyed `key`.
pub fn resolve<'a>(media: &'a MediaRef, palette: &Palette, key: &str) -> Media<'a> {
    match media.uri() {
        Some(uri) => Media::Image(uri),
        None => {
            debug!(key, "no image, using placeholder");
            Media::Placeholder(palette.background(key))
        }
    }
}

/// Inline CSS `background` value for `media`.
///
/// Image URIs are percent-encoded wherever a character could end the
/// `url()` token.
pub fn css_background(media: Media<'_>) -> String {
    match media {
        Media::Image(uri) => {
            let mut encoded = String::with_capacity(uri.len());
            for ch in uri.chars() {
                match ch {
                    '\'' | '"' | '(' | ')' | '\\' => {
                        encoded.push_str(&format!("%{:02X}", ch as u32))
                    }
                    c if c.is_whitespace() || c.is_control() => {
                        let mut buf = [0u8; 4];
                        for byte in c.encode_utf8(&mut buf).bytes() {
                            encoded.push_str(&format!("%{byte:02X}"));
                        }
                    }
                    c => encoded.push(c),
                }
            }
            format!("background-image:url(\"{encoded}\")")
        }
        Media::Placeholder(background) => format!("background:{background}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registered_key_gets_its_own_gradient() {
        let media = MediaRef::default();
        assert_eq!(
            resolve(&media, &DEEP_DIVE, "02"),
            Media::Placeholder("linear-gradient(135deg, #1a0f0a 0%, #3d0f11 50%, #B91118 100%)")
        );
    }

    #[test]
    fn unregistered_key_gets_the_default() {
        let media = MediaRef::default();
        assert_eq!(
            resolve(&media, &DEEP_DIVE, "99"),
            Media::Placeholder("#2d1810")
        );
    }

    #[test]
    fn image_uri_cannot_break_out_of_the_declaration() {
        let css = css_background(Media::Image("/img/it's (final).jpg\");color:red"));
        assert_eq!(
            css,
            "background-image:url(\"/img/it%27s%20%28final%29.jpg%22%29;color:red\")"
        );
        assert_eq!(
            css_background(Media::Image("https://cdn.example.com/a.jpg?w=1&h=2")),
            "background-image:url(\"https://cdn.example.com/a.jpg?w=1&h=2\")"
        );
        assert_eq!(css_background(Media::Placeholder("#000")), "background:#000");
    }

    #[test]
    fn present_image_wins_over_palette() {
        let media = MediaRef::new("/img/02.jpg");
        assert_eq!(resolve(&media, &DEEP_DIVE, "02"), Media::Image("/img/02.jpg"));
    }
}
