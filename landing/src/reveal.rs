//! Live reveal runtime.
//!
//! Visibility comes from an `IntersectionObserver` per group, the stagger from
//! `setTimeout`. The controller lives in the group component's owner, so it is
//! torn down (observer disconnected, timers cleared) when the group unmounts.

use std::time::Duration;

use event_page::components::{RevealRuntime, SlotSignals};
use event_page::reveal::{
    Observation, RevealController, RevealTiming, Scheduler, TimerHandle, VisibilityProvider,
};
use event_page::ObservationUnavailable;
use leptos::html::Div;
use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Groups count as visible once they are 50px inside the viewport.
const ROOT_MARGIN: &str = "-50px";

type BrowserController = RevealController<TimeoutScheduler, SlotSignals>;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserReveal;

impl RevealRuntime for BrowserReveal {
    fn attach(&self, label: &str, container: NodeRef<Div>, signals: SlotSignals, timing: RevealTiming) {
        let label = label.to_string();
        let slots = signals.slots();
        let controller = StoredValue::new_local(None::<BrowserController>);

        // runs again only if the node is swapped; one controller per group
        Effect::new(move |_| {
            let Some(element) = container.get() else {
                return;
            };
            if controller.with_value(Option::is_some) {
                return;
            }
            let target: &Element = &element;
            match RevealController::attach(
                label.as_str(),
                &BrowserVisibility,
                target,
                &slots,
                timing,
                TimeoutScheduler,
                signals.clone(),
            ) {
                Ok(attached) => controller.set_value(Some(attached)),
                Err(err) => warn!(group = %label, "reveal group not attached: {err}"),
            }
        });
    }
}

/// `IntersectionObserver`-backed visibility.
pub struct BrowserVisibility;

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityProvider<Element> for BrowserVisibility {
    fn observe(
        &self,
        target: &Element,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Observation, ObservationUnavailable> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let visible = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                on_change(visible);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| ObservationUnavailable::new(format!("{err:?}")))?;
        observer.observe(target);

        Ok(Observation::new(ObserverGuard {
            observer,
            _callback: callback,
        }))
    }
}

/// `setTimeout`-backed scheduler.
pub struct TimeoutScheduler;

pub struct Timeout(Option<TimeoutHandle>);

impl TimerHandle for Timeout {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Timeout(Some(handle)),
            Err(err) => {
                warn!("setTimeout failed: {err:?}");
                Timeout(None)
            }
        }
    }
}
