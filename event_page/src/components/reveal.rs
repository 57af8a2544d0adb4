//! Reveal groups: the Leptos side of [`crate::reveal`].
//!
//! A [`RevealGroup`] is the observed container; its [`RevealSlot`]s read a
//! visibility flag each. How the flags get flipped is up to the
//! [`RevealRuntime`] in context. Without one (server rendering, tests) the
//! group runs the controller against [`Unobservable`], which shows every slot
//! up front.

use std::sync::Arc;

use leptos::html::Div;
use leptos::prelude::*;
use tracing::warn;

use crate::reveal::{
    slots, AnimationSlot, Entrance, RevealController, RevealTiming, SlotSink, Unobservable,
    VirtualClock,
};

/// One visibility flag per slot of a group.
#[derive(Clone)]
pub struct SlotSignals {
    slots: Arc<Vec<(AnimationSlot, ArcRwSignal<bool>)>>,
}

impl SlotSignals {
    /// All slots start hidden.
    pub fn new(entrances: impl IntoIterator<Item = Entrance>) -> Self {
        let slots = slots(entrances)
            .into_iter()
            .map(|slot| (slot, ArcRwSignal::new(false)))
            .collect();
        Self {
            slots: Arc::new(slots),
        }
    }

    pub fn slots(&self) -> Vec<AnimationSlot> {
        self.slots.iter().map(|(slot, _)| *slot).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .map(|(_, shown)| shown.get_untracked())
            .unwrap_or(false)
    }

    /// Reactive inline style for slot `index`.
    pub fn style(&self, index: usize, duration_ms: u32) -> impl Fn() -> String + Send + Sync + 'static + use<> {
        let entry = self.slots.get(index).cloned();
        move || match &entry {
            Some((slot, shown)) => {
                let state = if shown.get() { slot.visible } else { slot.hidden };
                state.css(duration_ms)
            }
            None => String::new(),
        }
    }
}

impl SlotSink for SlotSignals {
    fn reveal(&self, index: usize) {
        if let Some((_, shown)) = self.slots.get(index) {
            shown.set(true);
        }
    }
}

/// Drives the slots of a mounted group.
///
/// Called once per group while its component is being built, so anything the
/// runtime creates is owned by that component and dropped with it.
pub trait RevealRuntime: Send + Sync {
    fn attach(&self, label: &str, container: NodeRef<Div>, signals: SlotSignals, timing: RevealTiming);
}

/// Context handle for the active [`RevealRuntime`].
#[derive(Clone)]
pub struct RevealContext(pub Arc<dyn RevealRuntime>);

impl RevealContext {
    pub fn new(runtime: impl RevealRuntime + 'static) -> Self {
        Self(Arc::new(runtime))
    }
}

/// Observed container for a staggered group of [`RevealSlot`]s.
#[component]
pub fn RevealGroup(
    /// Container label for logs and the `data-reveal` attribute
    #[prop(into)]
    label: String,
    signals: SlotSignals,
    timing: RevealTiming,
    /// Additional CSS class names
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();

    match use_context::<RevealContext>() {
        Some(RevealContext(runtime)) => runtime.attach(&label, container, signals, timing),
        None => {
            // no live visibility source: the controller degrades to "all shown"
            if let Err(err) = RevealController::attach(
                label.as_str(),
                &Unobservable,
                &(),
                &signals.slots(),
                timing,
                VirtualClock::new(),
                signals,
            ) {
                warn!(group = %label, "reveal group not attached: {err}");
            }
        }
    }

    let class = if class.is_empty() {
        "reveal-group".to_string()
    } else {
        format!("reveal-group {class}")
    };

    view! {
        <div node_ref=container class=class data-reveal=label>
            {children()}
        </div>
    }
}

/// One staggered element of a [`RevealGroup`].
#[component]
pub fn RevealSlot(
    signals: SlotSignals,
    index: usize,
    #[prop(default = 500)]
    duration_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = signals.style(index, duration_ms);
    view! {
        <div class=class style=style data-reveal-slot=index.to_string()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::VisualState;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn signals_start_hidden_and_follow_the_sink() {
        let signals = SlotSignals::new([Entrance::FadeInUp, Entrance::Fade]);
        assert!(!signals.is_revealed(0));

        signals.reveal(1);
        assert!(!signals.is_revealed(0));
        assert!(signals.is_revealed(1));
        assert_eq!(signals.style(1, 500)(), VisualState::SHOWN.css(500));
        assert_eq!(signals.style(0, 500)(), Entrance::FadeInUp.hidden().css(500));
    }

    #[test]
    fn group_without_runtime_shows_every_slot() {
        let signals = SlotSignals::new([Entrance::FadeInUp; 3]);
        let html = {
            let signals = signals.clone();
            view! {
                <RevealGroup label="pillars" signals=signals.clone() timing=RevealTiming::default()>
                    <RevealSlot signals=signals.clone() index=0>"a"</RevealSlot>
                    <RevealSlot signals=signals.clone() index=1>"b"</RevealSlot>
                    <RevealSlot signals=signals.clone() index=2>"c"</RevealSlot>
                </RevealGroup>
            }
            .to_html()
        };

        assert!((0..3).all(|i| signals.is_revealed(i)));
        assert_eq!(html.matches("opacity:1;").count(), 3);
        assert!(!html.contains("opacity:0;"));
    }

    #[test]
    fn group_without_slots_still_renders_its_children() {
        let signals = SlotSignals::new(Vec::<Entrance>::new());
        let html = view! {
            <RevealGroup label="empty" signals=signals timing=RevealTiming::default() class="bare">
                <p>"static"</p>
            </RevealGroup>
        }
        .to_html();

        assert!(html.contains("class=\"reveal-group bare\""));
        assert!(html.contains("data-reveal=\"empty\""));
        assert!(html.contains("static"));
    }

    #[test]
    fn runtime_in_context_takes_over() {
        struct Recording(Arc<std::sync::Mutex<Vec<String>>>);
        impl RevealRuntime for Recording {
            fn attach(&self, label: &str, _: NodeRef<Div>, _: SlotSignals, _: RevealTiming) {
                self.0.lock().unwrap().push(label.to_string());
            }
        }

        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let signals = SlotSignals::new([Entrance::Fade]);
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(RevealContext::new(Recording(Arc::clone(&seen))));
            let signals = signals.clone();
            view! {
                <RevealGroup label="footer" signals=signals.clone() timing=RevealTiming::default()>
                    <RevealSlot signals=signals index=0>"x"</RevealSlot>
                </RevealGroup>
            }
            .to_html()
        });

        assert_eq!(seen.lock().unwrap().as_slice(), &["footer".to_string()]);
        assert!(!signals.is_revealed(0));
        assert!(html.contains("opacity:0;"));
    }
}
