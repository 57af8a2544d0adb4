//! Staggered "reveal on first view" animation controller.
//!
//! A container owns an ordered list of [`AnimationSlot`]s. The first time the
//! container becomes visible, slot `i` is scheduled to switch to its visible
//! state `initial_delay + i * stagger` later. After that the container is
//! latched: further visibility changes do nothing.
//!
//! ```text
//! NotYetVisible --(visible)--> Triggered --(last slot shown)--> Complete
//!       |                                                         ^
//!       +-------------(no visibility provider: show all)----------+
//! ```
//!
//! Timers are owned by the [`RevealController`]. Dropping it (or calling
//! [`RevealController::teardown`]) cancels every slot still waiting, so nothing
//! fires against a container that no longer exists.
//!
//! Scheduling and visibility are traits so the same controller drives the
//! browser build (IntersectionObserver + `setTimeout`) and non-interactive
//! targets ([`AlwaysVisible`] / [`Unobservable`] + [`VirtualClock`]).

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::error::{ObservationUnavailable, SlotOrderError};

/// Opacity plus translation of one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl VisualState {
    pub const SHOWN: VisualState = VisualState {
        opacity: 1.0,
        offset_x: 0,
        offset_y: 0,
    };

    pub fn faded(offset_x: i32, offset_y: i32) -> Self {
        Self {
            opacity: 0.0,
            offset_x,
            offset_y,
        }
    }

    /// Inline style for this state with a transition of `duration_ms`.
    pub fn css(&self, duration_ms: u32) -> String {
        format!(
            "opacity:{};transform:translate({}px,{}px);transition:opacity {duration_ms}ms ease-out,transform {duration_ms}ms ease-out",
            self.opacity, self.offset_x, self.offset_y
        )
    }
}

/// Entrance presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Fade in while rising 20px.
    FadeInUp,
    Fade,
    /// Fade in from 24px to the left.
    SlideFromLeft,
    /// Fade in from 24px to the right.
    SlideFromRight,
}

impl Entrance {
    pub fn hidden(self) -> VisualState {
        match self {
            Entrance::FadeInUp => VisualState::faded(0, 20),
            Entrance::Fade => VisualState::faded(0, 0),
            Entrance::SlideFromLeft => VisualState::faded(-24, 0),
            Entrance::SlideFromRight => VisualState::faded(24, 0),
        }
    }
}

/// One position in a staggered group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSlot {
    pub index: usize,
    pub hidden: VisualState,
    pub visible: VisualState,
}

impl AnimationSlot {
    pub fn new(index: usize, entrance: Entrance) -> Self {
        Self {
            index,
            hidden: entrance.hidden(),
            visible: VisualState::SHOWN,
        }
    }
}

/// Build a slot list with contiguous indices from an ordered list of entrances.
pub fn slots(entrances: impl IntoIterator<Item = Entrance>) -> Vec<AnimationSlot> {
    entrances
        .into_iter()
        .enumerate()
        .map(|(index, entrance)| AnimationSlot::new(index, entrance))
        .collect()
}

/// Slots must be indexed `0..n` in order.
pub fn validate_slots(slots: &[AnimationSlot]) -> Result<(), SlotOrderError> {
    match slots
        .iter()
        .enumerate()
        .find(|(position, slot)| slot.index != *position)
    {
        Some((position, slot)) => Err(SlotOrderError {
            position,
            found: slot.index,
        }),
        None => Ok(()),
    }
}

/// Stagger parameters for one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    pub stagger_ms: u32,
    pub initial_delay_ms: u32,
    /// Length of each slot's own transition.
    pub duration_ms: u32,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger_ms: 80,
            initial_delay_ms: 0,
            duration_ms: 500,
        }
    }
}

impl RevealTiming {
    pub const fn new(stagger_ms: u32, initial_delay_ms: u32) -> Self {
        Self {
            stagger_ms,
            initial_delay_ms,
            duration_ms: 500,
        }
    }

    /// Delay from trigger until slot `index` is shown.
    pub fn delay_for(&self, index: usize) -> Duration {
        let stagger = u64::from(self.stagger_ms).saturating_mul(index as u64);
        Duration::from_millis(u64::from(self.initial_delay_ms).saturating_add(stagger))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    NotYetVisible,
    Triggered,
    Complete,
}

/// Receives "slot `index` is now visible".
pub trait SlotSink {
    fn reveal(&self, index: usize);
}

impl<F: Fn(usize)> SlotSink for F {
    fn reveal(&self, index: usize) {
        self(index)
    }
}

/// A scheduled, not necessarily pending, timer.
pub trait TimerHandle {
    /// Stop the timer. Must be harmless if it already fired.
    fn cancel(self);
}

/// Runs a task after a delay.
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Keeps a visibility subscription alive; dropping it unsubscribes.
pub struct Observation(#[allow(dead_code)] Box<dyn Any>);

impl Observation {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self(Box::new(guard))
    }
}

/// Source of "is this region on screen" signals for `T`.
pub trait VisibilityProvider<T: ?Sized> {
    fn observe(
        &self,
        target: &T,
        on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Observation, ObservationUnavailable>;
}

/// Every target counts as visible the moment it is observed.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysVisible;

impl<T: ?Sized> VisibilityProvider<T> for AlwaysVisible {
    fn observe(
        &self,
        _target: &T,
        mut on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Observation, ObservationUnavailable> {
        on_change(true);
        Ok(Observation::new(()))
    }
}

/// Headless target with no visibility signal at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unobservable;

impl<T: ?Sized> VisibilityProvider<T> for Unobservable {
    fn observe(
        &self,
        _target: &T,
        _on_change: Box<dyn FnMut(bool)>,
    ) -> Result<Observation, ObservationUnavailable> {
        Err(ObservationUnavailable::new("headless target"))
    }
}

struct RevealState<H> {
    phase: RevealPhase,
    revealed: Vec<bool>,
    timers: Vec<Option<H>>,
}

struct Shared<S: Scheduler, K: SlotSink> {
    label: String,
    timing: RevealTiming,
    scheduler: S,
    sink: K,
    state: RefCell<RevealState<S::Handle>>,
}

impl<S: Scheduler, K: SlotSink> Shared<S, K> {
    fn reveal_all(&self) {
        let newly = {
            let mut state = self.state.borrow_mut();
            state.phase = RevealPhase::Complete;
            let newly: Vec<usize> = (0..state.revealed.len())
                .filter(|i| !state.revealed[*i])
                .collect();
            state.revealed.iter_mut().for_each(|r| *r = true);
            newly
        };
        for index in newly {
            self.sink.reveal(index);
        }
    }

    /// Show `index` and anything before it that is still hidden.
    fn reveal_through(&self, index: usize) {
        let (newly, overtaken) = {
            let mut state = self.state.borrow_mut();
            let mut newly = Vec::new();
            let mut overtaken = Vec::new();
            for i in 0..=index.min(state.revealed.len().saturating_sub(1)) {
                if state.revealed[i] {
                    continue;
                }
                state.revealed[i] = true;
                newly.push(i);
                let handle = state.timers[i].take();
                if i != index {
                    overtaken.extend(handle);
                }
            }
            if state.revealed.iter().all(|r| *r) {
                state.phase = RevealPhase::Complete;
            }
            (newly, overtaken)
        };
        for handle in overtaken {
            handle.cancel();
        }
        for i in newly {
            trace!(container = %self.label, slot = i, "slot revealed");
            self.sink.reveal(i);
        }
    }

    fn cancel_pending(&self) -> usize {
        let pending: Vec<S::Handle> = {
            let mut state = self.state.borrow_mut();
            state.timers.iter_mut().filter_map(Option::take).collect()
        };
        let cancelled = pending.len();
        for handle in pending {
            handle.cancel();
        }
        cancelled
    }
}

impl<S: Scheduler + 'static, K: SlotSink + 'static> Shared<S, K> {
    fn on_visibility(this: &Rc<Self>, visible: bool) {
        if !visible {
            return;
        }
        let count = {
            let mut state = this.state.borrow_mut();
            if state.phase != RevealPhase::NotYetVisible {
                trace!(container = %this.label, "already triggered, ignoring visibility");
                return;
            }
            state.phase = RevealPhase::Triggered;
            if state.revealed.is_empty() {
                state.phase = RevealPhase::Complete;
            }
            state.revealed.len()
        };
        debug!(container = %this.label, slots = count, "reveal triggered");

        for index in 0..count {
            let weak: Weak<Self> = Rc::downgrade(this);
            let handle = this.scheduler.schedule(
                this.timing.delay_for(index),
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        shared.reveal_through(index);
                    }
                }),
            );
            let mut state = this.state.borrow_mut();
            // a synchronous scheduler may already have run the task
            if !state.revealed[index] {
                state.timers[index] = Some(handle);
            }
        }
    }
}

/// Reveal sequencing for one container.
pub struct RevealController<S: Scheduler, K: SlotSink> {
    shared: Rc<Shared<S, K>>,
    observation: Option<Observation>,
}

impl<S: Scheduler + 'static, K: SlotSink + 'static> RevealController<S, K> {
    /// Start observing `container`.
    ///
    /// If the provider cannot observe anything, every slot is shown at once.
    pub fn attach<T, P>(
        label: impl Into<String>,
        provider: &P,
        container: &T,
        slots: &[AnimationSlot],
        timing: RevealTiming,
        scheduler: S,
        sink: K,
    ) -> Result<Self, SlotOrderError>
    where
        T: ?Sized,
        P: VisibilityProvider<T>,
    {
        validate_slots(slots)?;
        let shared = Rc::new(Shared {
            label: label.into(),
            timing,
            scheduler,
            sink,
            state: RefCell::new(RevealState {
                phase: RevealPhase::NotYetVisible,
                revealed: vec![false; slots.len()],
                timers: slots.iter().map(|_| None).collect(),
            }),
        });

        let weak = Rc::downgrade(&shared);
        let on_change = Box::new(move |visible: bool| {
            if let Some(shared) = weak.upgrade() {
                Shared::on_visibility(&shared, visible);
            }
        });

        let observation = match provider.observe(container, on_change) {
            Ok(observation) => Some(observation),
            Err(unavailable) => {
                info!(container = %shared.label, "{unavailable}; revealing immediately");
                shared.reveal_all();
                None
            }
        };

        Ok(Self {
            shared,
            observation,
        })
    }

    /// Feed a visibility change by hand (same path the provider uses).
    pub fn notify_visibility(&self, visible: bool) {
        Shared::on_visibility(&self.shared, visible);
    }
}

impl<S: Scheduler, K: SlotSink> RevealController<S, K> {
    pub fn phase(&self) -> RevealPhase {
        self.shared.state.borrow().phase
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.shared
            .state
            .borrow()
            .revealed
            .get(index)
            .copied()
            .unwrap_or(false)
    }

    /// Slots scheduled but not yet shown.
    pub fn pending_timers(&self) -> usize {
        self.shared
            .state
            .borrow()
            .timers
            .iter()
            .filter(|t| t.is_some())
            .count()
    }

    /// Stop observing and cancel every pending slot.
    pub fn teardown(&mut self) {
        self.observation.take();
        let cancelled = self.shared.cancel_pending();
        if cancelled > 0 {
            debug!(container = %self.shared.label, cancelled, "reveal torn down early");
        }
    }
}

impl<S: Scheduler, K: SlotSink> Drop for RevealController<S, K> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Virtual clock
// =============================================================================

struct PendingTask {
    due: Duration,
    id: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    queue: Vec<PendingTask>,
}

/// Deterministic scheduler: time only moves when told to.
///
/// Tasks with equal due times run in the order they were scheduled.
#[derive(Clone, Default)]
pub struct VirtualClock {
    state: Rc<RefCell<ClockState>>,
}

/// Handle to a task on a [`VirtualClock`].
pub struct VirtualTimer {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl TimerHandle for VirtualTimer {
    fn cancel(self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().queue.retain(|task| task.id != self.id);
        }
    }
}

impl Scheduler for VirtualClock {
    type Handle = VirtualTimer;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> VirtualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.queue.push(PendingTask { due, id, task });
        VirtualTimer {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Due times of all pending tasks, earliest first.
    pub fn due_times(&self) -> Vec<Duration> {
        let mut due: Vec<Duration> = self.state.borrow().queue.iter().map(|t| t.due).collect();
        due.sort();
        due
    }

    /// Move time forward by `by`, running everything that falls due.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        self.run_until(target)
    }

    /// Run until the queue is empty.
    pub fn run_all(&self) -> usize {
        let mut fired = 0;
        while let Some(last) = self.due_times().last().copied() {
            fired += self.run_until(last);
        }
        fired
    }

    fn run_until(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let position = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(position, _)| position);
                match position {
                    Some(position) => {
                        let task = state.queue.remove(position);
                        state.now = task.due;
                        Some(task.task)
                    }
                    None => {
                        state.now = state.now.max(target);
                        None
                    }
                }
            };
            match next {
                Some(task) => {
                    task();
                    fired += 1;
                }
                None => return fired,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    type Callback = Rc<RefCell<Option<Box<dyn FnMut(bool)>>>>;

    /// Visibility driven by the test.
    #[derive(Clone, Default)]
    struct ManualVisibility {
        callback: Callback,
    }

    impl ManualVisibility {
        fn set(&self, visible: bool) {
            let taken = self.callback.borrow_mut().take();
            if let Some(mut callback) = taken {
                callback(visible);
                *self.callback.borrow_mut() = Some(callback);
            }
        }
    }

    impl VisibilityProvider<str> for ManualVisibility {
        fn observe(
            &self,
            _target: &str,
            on_change: Box<dyn FnMut(bool)>,
        ) -> Result<Observation, ObservationUnavailable> {
            *self.callback.borrow_mut() = Some(on_change);
            Ok(Observation::new(()))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<usize>>>, impl Fn(usize) + Clone + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink_log = Rc::clone(&log);
        (log, move |index| sink_log.borrow_mut().push(index))
    }

    fn fade_slots(n: usize) -> Vec<AnimationSlot> {
        slots(std::iter::repeat_n(Entrance::FadeInUp, n))
    }

    #[test]
    fn delays_follow_initial_plus_index_times_stagger() {
        let timing = RevealTiming::new(80, 100);
        let clock = VirtualClock::new();
        let (_, sink) = recorder();
        let visibility = ManualVisibility::default();
        let controller = RevealController::attach(
            "host",
            &visibility,
            "host",
            &fade_slots(4),
            timing,
            clock.clone(),
            sink,
        )
        .unwrap();

        visibility.set(true);

        let expected: Vec<Duration> = [100, 180, 260, 340]
            .into_iter()
            .map(Duration::from_millis)
            .collect();
        assert_eq!(clock.due_times(), expected);
        assert!(expected.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(controller.phase(), RevealPhase::Triggered);
        assert_eq!(controller.pending_timers(), 4);
    }

    #[test]
    fn nothing_happens_before_the_container_is_visible() {
        let clock = VirtualClock::new();
        let (log, sink) = recorder();
        let visibility = ManualVisibility::default();
        let controller = RevealController::attach(
            "pillars",
            &visibility,
            "pillars",
            &fade_slots(3),
            RevealTiming::default(),
            clock.clone(),
            sink,
        )
        .unwrap();

        visibility.set(false);
        clock.advance(Duration::from_secs(5));

        assert_eq!(controller.phase(), RevealPhase::NotYetVisible);
        assert!(log.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn second_visibility_event_does_not_replay() {
        let clock = VirtualClock::new();
        let (log, sink) = recorder();
        let visibility = ManualVisibility::default();
        let controller = RevealController::attach(
            "register",
            &visibility,
            "register",
            &fade_slots(3),
            RevealTiming::new(100, 100),
            clock.clone(),
            sink,
        )
        .unwrap();

        visibility.set(true);
        visibility.set(false);
        visibility.set(true);

        assert_eq!(clock.pending(), 3);

        clock.run_all();
        visibility.set(true);
        clock.run_all();

        assert_eq!(log.borrow().as_slice(), &[0, 1, 2]);
        assert_eq!(controller.phase(), RevealPhase::Complete);
    }

    #[test]
    fn slots_appear_one_stagger_apart() {
        let clock = VirtualClock::new();
        let (log, sink) = recorder();
        let controller = RevealController::attach(
            "deep-dive",
            &AlwaysVisible,
            "deep-dive",
            &fade_slots(3),
            RevealTiming::new(80, 0),
            clock.clone(),
            sink,
        )
        .unwrap();

        clock.advance(Duration::from_millis(0));
        assert_eq!(log.borrow().as_slice(), &[0]);
        clock.advance(Duration::from_millis(79));
        assert_eq!(log.borrow().as_slice(), &[0]);
        clock.advance(Duration::from_millis(1));
        assert_eq!(log.borrow().as_slice(), &[0, 1]);
        clock.advance(Duration::from_millis(80));
        assert_eq!(log.borrow().as_slice(), &[0, 1, 2]);
        assert_eq!(controller.phase(), RevealPhase::Complete);
        assert_eq!(controller.pending_timers(), 0);
    }

    #[test]
    fn teardown_cancels_pending_slots() {
        let clock = VirtualClock::new();
        let (log, sink) = recorder();
        let controller = RevealController::attach(
            "footer",
            &AlwaysVisible,
            "footer",
            &fade_slots(4),
            RevealTiming::new(100, 0),
            clock.clone(),
            sink,
        )
        .unwrap();

        clock.advance(Duration::from_millis(150));
        assert_eq!(log.borrow().as_slice(), &[0, 1]);

        drop(controller);
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(1));
        assert_eq!(log.borrow().as_slice(), &[0, 1]);
    }

    #[test]
    fn missing_observer_reveals_everything_immediately() {
        let clock = VirtualClock::new();
        let (log, sink) = recorder();
        let controller = RevealController::attach(
            "hero",
            &Unobservable,
            "hero",
            &fade_slots(3),
            RevealTiming::new(80, 100),
            clock.clone(),
            sink,
        )
        .unwrap();

        assert_eq!(controller.phase(), RevealPhase::Complete);
        assert_eq!(log.borrow().as_slice(), &[0, 1, 2]);
        assert_eq!(clock.pending(), 0);
        assert!((0..3).all(|i| controller.is_revealed(i)));
    }

    #[test]
    fn zero_stagger_keeps_index_order() {
        let clock = VirtualClock::new();
        let (log, sink) = recorder();
        let _controller = RevealController::attach(
            "pillars",
            &AlwaysVisible,
            "pillars",
            &fade_slots(5),
            RevealTiming::new(0, 0),
            clock.clone(),
            sink,
        )
        .unwrap();

        clock.run_all();
        assert_eq!(log.borrow().as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn late_slot_firing_first_still_shows_earlier_slots_first() {
        /// Runs each task as soon as it is scheduled, last-scheduled first.
        #[derive(Clone, Default)]
        struct Backwards {
            queue: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
        }
        struct NoHandle;
        impl TimerHandle for NoHandle {
            fn cancel(self) {}
        }
        impl Scheduler for Backwards {
            type Handle = NoHandle;
            fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce()>) -> NoHandle {
                self.queue.borrow_mut().push(task);
                NoHandle
            }
        }

        let scheduler = Backwards::default();
        let (log, sink) = recorder();
        let controller = RevealController::attach(
            "host",
            &AlwaysVisible,
            "host",
            &fade_slots(3),
            RevealTiming::default(),
            scheduler.clone(),
            sink,
        )
        .unwrap();

        let tasks: Vec<_> = scheduler.queue.borrow_mut().drain(..).rev().collect();
        for task in tasks {
            task();
        }

        assert_eq!(log.borrow().as_slice(), &[0, 1, 2]);
        assert_eq!(controller.phase(), RevealPhase::Complete);
    }

    #[test]
    fn synchronous_scheduler_is_supported() {
        struct Immediate;
        struct Done;
        impl TimerHandle for Done {
            fn cancel(self) {}
        }
        impl Scheduler for Immediate {
            type Handle = Done;
            fn schedule(&self, _delay: Duration, task: Box<dyn FnOnce()>) -> Done {
                task();
                Done
            }
        }

        let (log, sink) = recorder();
        let controller = RevealController::attach(
            "footer",
            &AlwaysVisible,
            "footer",
            &fade_slots(2),
            RevealTiming::default(),
            Immediate,
            sink,
        )
        .unwrap();

        assert_eq!(log.borrow().as_slice(), &[0, 1]);
        assert_eq!(controller.pending_timers(), 0);
        assert_eq!(controller.phase(), RevealPhase::Complete);
    }

    #[test]
    fn empty_group_completes_on_trigger() {
        let (_, sink) = recorder();
        let controller = RevealController::attach(
            "empty",
            &AlwaysVisible,
            "empty",
            &[],
            RevealTiming::default(),
            VirtualClock::new(),
            sink,
        )
        .unwrap();
        assert_eq!(controller.phase(), RevealPhase::Complete);
    }

    #[test]
    fn out_of_order_slots_are_rejected() {
        let mut list = fade_slots(3);
        list.swap(1, 2);
        let (_, sink) = recorder();
        let result = RevealController::attach(
            "bad",
            &AlwaysVisible,
            "bad",
            &list,
            RevealTiming::default(),
            VirtualClock::new(),
            sink,
        );
        assert_eq!(
            result.err(),
            Some(SlotOrderError {
                position: 1,
                found: 2
            })
        );
    }

    #[test]
    fn hidden_states_match_entrance_presets() {
        assert_eq!(Entrance::FadeInUp.hidden(), VisualState::faded(0, 20));
        assert_eq!(Entrance::SlideFromLeft.hidden(), VisualState::faded(-24, 0));
        assert_eq!(
            VisualState::SHOWN.css(500),
            "opacity:1;transform:translate(0px,0px);transition:opacity 500ms ease-out,transform 500ms ease-out"
        );
    }
}
