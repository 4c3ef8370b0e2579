//! The pull-refresh controller tying machine, wrapper, and visuals together.
//!
//! [`Model`] is the component a host application embeds. It owns the
//! [`StateMachine`], decorates whatever collection is attached through a
//! [`CollectionWrapper`], drives the pluggable footer and placeholder views,
//! and exposes the renderer seam (`item_count`, `kind_at`, `bind`,
//! `stable_id`, observers).
//!
//! Control flow follows the usual shape: the scroll sensor reports frames
//! (either by calling [`Model::scrolled`] or by sending a
//! [`ScrollFrameMsg`]); when the guards pass, the model returns a command
//! that delivers a [`LoadMoreMsg`] (or [`RefreshMsg`]) to the host; the host
//! fetches and answers with exactly one completion signal —
//! [`Model::complete`], [`Model::no_more`], or [`Model::error`]. The model
//! never awaits the fetch and every call returns immediately.
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_pullrefresh::collection::VecCollection;
//! use bubbletea_pullrefresh::model::{LoadMoreMsg, Model as PullRefresh, RefreshMsg};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     list: PullRefresh<VecCollection<String>>,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut list = PullRefresh::new();
//!         list.attach(VecCollection::new());
//!         let cmd = list.start_refresh();
//!         (Self { list }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if msg.downcast_ref::<RefreshMsg>().is_some() {
//!             // Fetch page one, then feed it back:
//!             let event = self.list.collection_mut().unwrap().set_items(vec![
//!                 "first".to_string(),
//!                 "second".to_string(),
//!             ]);
//!             self.list.notify(event);
//!             self.list.complete();
//!             return None;
//!         }
//!         if msg.downcast_ref::<LoadMoreMsg>().is_some() {
//!             // Next page came back empty:
//!             self.list.no_more();
//!             return None;
//!         }
//!         self.list.update(&msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         if self.list.is_placeholder_showing() {
//!             return self.list.placeholder_view().view();
//!         }
//!         format!("{} rows", self.list.item_count())
//!     }
//! }
//! ```

use crate::collection::{
    Change, ChangeEvent, Collection, DataObserver, ItemKind, ObserverId, ObserverRegistry, Slot,
    FOOTER_STABLE_ID,
};
use crate::footer::{FooterView, SimpleFooterView};
use crate::machine::{Emission, FooterState, PresentationState, StateMachine};
use crate::placeholder::{PlaceholderContent, PlaceholderView, TextPlaceholder};
use crate::wrapper::CollectionWrapper;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for controller instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates the next unique ID for controller instances.
///
/// Each controller receives a unique identifier so messages can be routed
/// to the right instance when several lists coexist in one application.
fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Asks the host to start a refresh fetch.
///
/// Answered later by exactly one of
/// [`Model::complete`]/[`Model::no_more`]/[`Model::error`].
#[derive(Debug, Clone)]
pub struct RefreshMsg {
    /// Identifier of the controller that emitted this message.
    pub id: i64,
}

/// Asks the host to fetch the next page.
///
/// Answered later by exactly one of
/// [`Model::complete`]/[`Model::no_more`]/[`Model::error`].
#[derive(Debug, Clone)]
pub struct LoadMoreMsg {
    /// Identifier of the controller that emitted this message.
    pub id: i64,
}

/// A scroll frame reported by the host's rendering surface.
///
/// Send one per scroll frame; the controller derives the near-end trigger
/// from the last visible position, the rendered count, and the threshold
/// policy.
#[derive(Debug, Clone)]
pub struct ScrollFrameMsg {
    /// Identifier of the target controller, or 0 to address any.
    pub id: i64,
    /// Position of the last item currently visible.
    pub last_visible: usize,
    /// Total number of positions the surface is rendering.
    pub rendered_count: usize,
}

/// Retry requested from the error footer.
#[derive(Debug, Clone)]
pub struct RetryMsg {
    /// Identifier of the target controller, or 0 to address any.
    pub id: i64,
}

/// A list-presentation controller with pull-to-refresh, load-more, and
/// empty/error placeholders.
///
/// The controller tracks presentation state only; item data stays in the
/// attached [`Collection`] and fetches stay in the host. See the
/// [module docs](self) for the control flow and a full integration example.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::collection::VecCollection;
/// use bubbletea_pullrefresh::model::Model;
///
/// let mut list = Model::new();
/// list.attach(VecCollection::from_items(vec!["a", "b", "c"]));
///
/// assert_eq!(list.item_count(), 4); // three items + footer slot
/// assert!(!list.is_refreshing());
/// ```
pub struct Model<C: Collection> {
    id: i64,
    machine: StateMachine,
    wrapper: Option<CollectionWrapper<C>>,
    observers: ObserverRegistry,
    footer: Box<dyn FooterView + Send>,
    placeholder: Box<dyn PlaceholderView + Send>,
    content: PlaceholderContent,
}

impl<C: Collection> Model<C> {
    /// Creates a detached controller with the stock footer and placeholder.
    ///
    /// Attach a collection with [`attach`](Model::attach) before the
    /// renderer starts querying; until then every count is 0.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            machine: StateMachine::new(),
            wrapper: None,
            observers: ObserverRegistry::new(),
            footer: Box::new(SimpleFooterView::new()),
            placeholder: Box::new(TextPlaceholder::new()),
            content: PlaceholderContent::default(),
        }
    }

    /// Replaces the footer view (builder pattern).
    pub fn with_footer_view(mut self, footer: Box<dyn FooterView + Send>) -> Self {
        self.set_footer_view(footer);
        self
    }

    /// Replaces the placeholder view (builder pattern).
    pub fn with_placeholder_view(mut self, placeholder: Box<dyn PlaceholderView + Send>) -> Self {
        self.set_placeholder_view(placeholder);
        self
    }

    /// Sets the empty-state text (builder pattern).
    pub fn with_empty_text(mut self, text: &str) -> Self {
        self.set_empty_text(text);
        self
    }

    /// Sets the load-more trigger threshold (builder pattern).
    pub fn with_load_more_threshold(mut self, threshold: usize) -> Self {
        self.machine.set_load_more_threshold(threshold);
        self
    }

    /// This controller's unique identifier, used for message routing.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Read access to the state machine.
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    // ---- collection lifecycle -------------------------------------------

    /// Attaches a collection, replacing any previous one.
    ///
    /// The wrapper decorating the old collection is replaced, never
    /// mutated. Attaching clears the no-more latch, forwards a `Reset`
    /// notification to observers (the renderer starts over), and runs the
    /// initial empty/non-empty derivation. Observer registrations survive
    /// the swap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::collection::VecCollection;
    /// use bubbletea_pullrefresh::model::Model;
    ///
    /// let mut list = Model::new();
    /// list.attach(VecCollection::<String>::new());
    /// assert!(list.is_placeholder_showing()); // empty collection
    ///
    /// list.attach(VecCollection::from_items(vec!["x".to_string()]));
    /// assert!(!list.is_placeholder_showing());
    /// ```
    pub fn attach(&mut self, collection: C) {
        self.machine.stop_loading_more();
        self.sync_footer();
        let wrapper = CollectionWrapper::new(collection);
        let len = wrapper.inner().len();
        self.wrapper = Some(wrapper);
        self.observers.notify(&Change::Reset);
        self.apply_boundary(len);
    }

    /// Detaches and returns the current collection.
    ///
    /// The mandatory teardown step when the hosting surface goes away:
    /// after this, change notifications are no longer delivered anywhere,
    /// so a destroyed renderer can never be notified as a dangling
    /// observer.
    pub fn detach(&mut self) -> Option<C> {
        self.wrapper.take().map(CollectionWrapper::into_inner)
    }

    /// Read access to the attached collection.
    pub fn collection(&self) -> Option<&C> {
        self.wrapper.as_ref().map(CollectionWrapper::inner)
    }

    /// Write access to the attached collection.
    ///
    /// The collection stays host-owned: after mutating it, deliver the
    /// matching event through [`notify`](Model::notify).
    pub fn collection_mut(&mut self) -> Option<&mut C> {
        self.wrapper.as_mut().map(CollectionWrapper::inner_mut)
    }

    /// Delivers an inner-collection change event.
    ///
    /// The event is re-emitted to observers unchanged — the footer is
    /// always after every inner index, so no index shifting is ever needed
    /// — and the empty/non-empty boundary is re-derived from the event's
    /// reported length. That flip is the single authoritative trigger for
    /// placeholder visibility.
    ///
    /// A no-op while detached.
    pub fn notify(&mut self, event: ChangeEvent) {
        if self.wrapper.is_none() {
            return;
        }
        self.observers.notify(&event.change);
        self.apply_boundary(event.len);
    }

    /// Registers a downstream change observer.
    ///
    /// Observers receive every inner event re-emitted by
    /// [`notify`](Model::notify) plus the synthetic footer-slot
    /// notifications. Registrations survive collection re-attachment.
    pub fn register_observer(&mut self, observer: Box<dyn DataObserver + Send>) -> ObserverId {
        self.observers.register(observer)
    }

    /// Removes a previously registered observer.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    // ---- flags -----------------------------------------------------------

    /// Whether the pull-to-refresh gesture is accepted.
    pub fn refresh_enabled(&self) -> bool {
        self.machine.refresh_enabled()
    }

    /// Enables or disables pull-to-refresh.
    pub fn set_refresh_enabled(&mut self, enabled: bool) {
        self.machine.set_refresh_enabled(enabled);
    }

    /// Whether a footer slot exists at all.
    pub fn load_more_enabled(&self) -> bool {
        self.machine.load_more_enabled()
    }

    /// Enables or disables load-more.
    ///
    /// Disabling applies the effect of [`stop_loading_more`] first — the
    /// synthetic footer-removed notification goes out while the slot is
    /// still visible — and then suppresses future triggers.
    ///
    /// [`stop_loading_more`]: Model::stop_loading_more
    pub fn set_load_more_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.emit_footer_removed();
        }
        self.machine.set_load_more_enabled(enabled);
        self.sync_footer();
    }

    /// Current load-more trigger threshold.
    pub fn load_more_threshold(&self) -> usize {
        self.machine.load_more_threshold()
    }

    /// Sets the load-more trigger threshold.
    pub fn set_load_more_threshold(&mut self, threshold: usize) {
        self.machine.set_load_more_threshold(threshold);
    }

    /// True between a refresh emission and its completion signal.
    pub fn is_refreshing(&self) -> bool {
        self.machine.is_refreshing()
    }

    /// True while a load-more fetch is outstanding or latched after
    /// [`no_more`](Model::no_more).
    pub fn is_loading_more(&self) -> bool {
        self.machine.is_loading_more()
    }

    /// Whether the placeholder currently owns the list surface.
    pub fn is_placeholder_showing(&self) -> bool {
        self.placeholder.visible()
    }

    /// Derives the observable presentation state.
    pub fn presentation_state(&self) -> PresentationState {
        self.machine.presentation_state(self.item_count())
    }

    // ---- refresh / load-more --------------------------------------------

    /// Starts a refresh and returns the command that delivers
    /// [`RefreshMsg`] to the host.
    ///
    /// A no-op (`None`) while refresh is disabled or already in progress —
    /// repeated pulls are rejected by guard, and any required cancellation
    /// of the underlying request is the host's business. Starting a refresh
    /// resets the footer to its loading visual so a footer trigger racing a
    /// fresh pull cannot strand a stale visual.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::collection::VecCollection;
    /// use bubbletea_pullrefresh::model::Model;
    ///
    /// let mut list: Model<VecCollection<String>> = Model::new();
    /// assert!(list.start_refresh().is_some());
    /// assert!(list.start_refresh().is_none()); // already refreshing
    ///
    /// list.complete();
    /// assert!(list.start_refresh().is_some());
    /// ```
    pub fn start_refresh(&mut self) -> Option<Cmd> {
        let emission = self.machine.start_refresh()?;
        self.sync_footer();
        self.emit_footer_changed();
        Some(self.emit(emission))
    }

    /// Reports a scroll frame from the host's rendering surface.
    ///
    /// Returns the command delivering [`LoadMoreMsg`] when the near-end
    /// trigger fires; `None` on every other frame. At most one emission is
    /// produced between a trigger and its completion signal.
    pub fn scrolled(&mut self, last_visible: usize, rendered_count: usize) -> Option<Cmd> {
        let emission = self.machine.scrolled_near_end(last_visible, rendered_count)?;
        Some(self.emit(emission))
    }

    /// Retry requested from the error footer.
    ///
    /// Honored only while the footer is showing its error visual; reverts
    /// it to loading and returns the command delivering a fresh
    /// [`LoadMoreMsg`].
    pub fn retry(&mut self) -> Option<Cmd> {
        let emission = self.machine.retry()?;
        self.sync_footer();
        self.emit_footer_changed();
        Some(self.emit(emission))
    }

    // ---- completion signals ---------------------------------------------

    /// Completion signal: the fetch finished and produced data.
    ///
    /// Clears both in-flight flags regardless of prior state, resets the
    /// footer, and issues the synthetic footer-slot notification.
    pub fn complete(&mut self) {
        self.emit_footer_removed();
        self.machine.complete();
        self.sync_footer();
    }

    /// Completion signal: there is no further page.
    ///
    /// Shows the end-of-list footer and latches the trigger: further scroll
    /// frames emit nothing until [`complete`](Model::complete) is called, a
    /// [`set_load_more_enabled`](Model::set_load_more_enabled) cycle runs,
    /// or a new collection is attached.
    pub fn no_more(&mut self) {
        self.machine.no_more();
        self.sync_footer();
        self.emit_footer_changed();
    }

    /// Completion signal: the fetch failed.
    ///
    /// Shows the error footer with its retry affordance. The error's cause
    /// is neither inspected nor classified here; the host owns it.
    pub fn error(&mut self) {
        self.machine.error();
        self.sync_footer();
        self.emit_footer_changed();
    }

    /// Clears the load-more flag and removes/resets the footer slot.
    pub fn stop_loading_more(&mut self) {
        self.emit_footer_removed();
        self.machine.stop_loading_more();
        self.sync_footer();
    }

    // ---- views -----------------------------------------------------------

    /// Replaces the footer view and syncs it to the current footer state.
    pub fn set_footer_view(&mut self, footer: Box<dyn FooterView + Send>) {
        self.footer = footer;
        self.sync_footer();
        self.emit_footer_changed();
    }

    /// The footer view, for rendering the footer slot.
    pub fn footer_view(&self) -> &dyn FooterView {
        self.footer.as_ref()
    }

    /// Replaces the placeholder view and re-derives its visibility.
    pub fn set_placeholder_view(&mut self, placeholder: Box<dyn PlaceholderView + Send>) {
        self.placeholder = placeholder;
        self.refresh_placeholder();
    }

    /// The placeholder view, for rendering while
    /// [`is_placeholder_showing`](Model::is_placeholder_showing) is true.
    pub fn placeholder_view(&self) -> &dyn PlaceholderView {
        self.placeholder.as_ref()
    }

    /// Sets the text shown when the collection is empty.
    pub fn set_empty_text(&mut self, text: &str) {
        self.content = PlaceholderContent::Empty {
            text: text.to_string(),
        };
        self.refresh_placeholder();
    }

    /// Switches the placeholder to a full-surface error message.
    ///
    /// Shown, like every placeholder, only while the collection is empty.
    /// Pair the host's activate affordance on this surface with
    /// [`start_refresh`](Model::start_refresh).
    pub fn set_error_placeholder(&mut self, text: &str) {
        self.content = PlaceholderContent::Error {
            text: text.to_string(),
        };
        self.refresh_placeholder();
    }

    /// Switches the placeholder to a host-supplied body.
    pub fn set_custom_placeholder(&mut self, body: &str) {
        self.content = PlaceholderContent::Custom {
            body: body.to_string(),
        };
        self.refresh_placeholder();
    }

    // ---- renderer seam ---------------------------------------------------

    /// Number of slots the renderer should present.
    ///
    /// Inner count plus the footer slot while it is visible; guaranteed 0
    /// for an empty collection even with load-more enabled, and 0 while
    /// detached.
    pub fn item_count(&self) -> usize {
        self.wrapper
            .as_ref()
            .map_or(0, |w| w.item_count(&self.machine))
    }

    /// Whether `position` addresses the footer slot.
    pub fn is_footer(&self, position: usize) -> bool {
        self.wrapper
            .as_ref()
            .is_some_and(|w| w.is_footer(&self.machine, position))
    }

    /// Render kind at `position`.
    ///
    /// Only positions below [`item_count`](Model::item_count) are
    /// meaningful.
    pub fn kind_at(&self, position: usize) -> ItemKind {
        self.wrapper
            .as_ref()
            .map_or(ItemKind::default(), |w| w.kind_at(&self.machine, position))
    }

    /// Binds the slot at `position`; a no-op for the footer slot.
    pub fn bind(&self, position: usize, slot: &mut Slot) {
        if let Some(wrapper) = &self.wrapper {
            wrapper.bind(&self.machine, position, slot);
        }
    }

    /// Stable id at `position`; the footer slot reports the reserved
    /// sentinel.
    pub fn stable_id(&self, position: usize) -> i64 {
        self.wrapper
            .as_ref()
            .map_or(FOOTER_STABLE_ID, |w| w.stable_id(&self.machine, position))
    }

    // ---- message handling ------------------------------------------------

    /// Processes controller-bound messages.
    ///
    /// Handles [`ScrollFrameMsg`] and [`RetryMsg`], both routed by
    /// controller id (an id of 0 addresses any instance). Other messages
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::collection::VecCollection;
    /// use bubbletea_pullrefresh::model::{Model, ScrollFrameMsg};
    /// use bubbletea_rs::Msg;
    ///
    /// let mut list = Model::new();
    /// list.attach(VecCollection::from_items((0..12).collect::<Vec<i32>>()));
    ///
    /// let frame: Msg = Box::new(ScrollFrameMsg {
    ///     id: list.id(),
    ///     last_visible: 11,
    ///     rendered_count: 12,
    /// });
    /// assert!(list.update(&frame).is_some());
    /// ```
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<ScrollFrameMsg>() {
            if frame.id > 0 && frame.id != self.id {
                return None;
            }
            return self.scrolled(frame.last_visible, frame.rendered_count);
        }
        if let Some(retry) = msg.downcast_ref::<RetryMsg>() {
            if retry.id > 0 && retry.id != self.id {
                return None;
            }
            return self.retry();
        }
        None
    }

    // ---- internals -------------------------------------------------------

    fn emit(&self, emission: Emission) -> Cmd {
        let id = self.id;
        match emission {
            Emission::Refresh => bubbletea_tick(Duration::from_nanos(1), move |_| {
                Box::new(RefreshMsg { id }) as Msg
            }),
            Emission::LoadMore => bubbletea_tick(Duration::from_nanos(1), move |_| {
                Box::new(LoadMoreMsg { id }) as Msg
            }),
        }
    }

    /// Drives the footer view to match the machine's current intent.
    fn sync_footer(&mut self) {
        match self.machine.footer_state() {
            FooterState::Loading => self.footer.show_loading(),
            FooterState::NoMore => self.footer.show_no_more(),
            FooterState::Error => self.footer.show_error(),
        }
    }

    fn emit_footer_removed(&mut self) {
        let change = self
            .wrapper
            .as_ref()
            .and_then(|w| w.footer_removed(&self.machine));
        if let Some(change) = change {
            self.observers.notify(&change);
        }
    }

    fn emit_footer_changed(&mut self) {
        let change = self
            .wrapper
            .as_ref()
            .and_then(|w| w.footer_changed(&self.machine));
        if let Some(change) = change {
            self.observers.notify(&change);
        }
    }

    /// Placeholder visibility from the reported post-change length.
    fn apply_boundary(&mut self, len: usize) {
        if len == 0 {
            if !self.placeholder.visible() {
                self.placeholder.show(&self.content);
            }
        } else if self.placeholder.visible() {
            self.placeholder.hide();
        }
    }

    /// Re-derives placeholder visibility from the live count after a
    /// content or view swap.
    fn refresh_placeholder(&mut self) {
        let len = self.wrapper.as_ref().map(|w| w.inner().len());
        match len {
            Some(0) => self.placeholder.show(&self.content),
            Some(_) => {
                if self.placeholder.visible() {
                    self.placeholder.hide();
                }
            }
            None => {}
        }
    }
}

impl<C: Collection> Default for Model<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Collection + std::fmt::Debug> std::fmt::Debug for Model<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("machine", &self.machine)
            .field("wrapper", &self.wrapper)
            .field("observers", &self.observers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::VecCollection;
    use std::sync::mpsc;

    struct Recorder(mpsc::Sender<Change>);

    impl DataObserver for Recorder {
        fn on_change(&mut self, change: &Change) {
            self.0.send(*change).unwrap();
        }
    }

    fn twelve_items() -> VecCollection<i32> {
        VecCollection::from_items((0..12).collect())
    }

    #[test]
    fn test_start_refresh_is_idempotent() {
        let mut list: Model<VecCollection<i32>> = Model::new();
        assert!(list.start_refresh().is_some());
        assert!(list.start_refresh().is_none());
        assert!(list.start_refresh().is_none());
        assert!(list.is_refreshing());
    }

    #[test]
    fn test_complete_clears_flags_regardless_of_prior_state() {
        let mut list = Model::new();
        list.attach(twelve_items());
        list.start_refresh();
        list.scrolled(11, 12);

        list.complete();
        assert!(!list.is_refreshing());
        assert!(!list.is_loading_more());
    }

    #[test]
    fn test_empty_collection_shows_placeholder_even_with_load_more_enabled() {
        let mut list = Model::new();
        assert!(list.load_more_enabled());
        list.attach(VecCollection::<String>::new());

        assert_eq!(list.item_count(), 0);
        assert!(list.is_placeholder_showing());
    }

    #[test]
    fn test_scenario_twelve_items_then_no_more() {
        let mut list = Model::new();
        list.attach(twelve_items());
        assert_eq!(list.item_count(), 13); // 12 items + footer

        // Scrolling to the last item emits exactly once.
        assert!(list.scrolled(11, 12).is_some());
        assert!(list.scrolled(11, 12).is_none());

        list.no_more();
        assert_eq!(list.footer_view().state(), FooterState::NoMore);

        // Further scroll-to-end frames produce nothing.
        for _ in 0..10 {
            assert!(list.scrolled(11, 12).is_none());
        }
    }

    #[test]
    fn test_scenario_empty_to_five_items() {
        let mut list = Model::new();
        list.attach(VecCollection::<String>::new());
        assert!(list.is_placeholder_showing());

        let event = list
            .collection_mut()
            .unwrap()
            .extend((0..5).map(|i| i.to_string()).collect());
        list.notify(event);

        assert!(!list.is_placeholder_showing());
        assert_eq!(list.item_count(), 6);
        assert!(list.is_footer(5));
    }

    #[test]
    fn test_scenario_error_then_retry() {
        let mut list = Model::new();
        list.attach(twelve_items());
        assert!(list.scrolled(11, 12).is_some());

        list.error();
        assert_eq!(list.footer_view().state(), FooterState::Error);
        // Scroll frames stay suppressed while the error footer shows.
        assert!(list.scrolled(11, 12).is_none());

        // Retry emits exactly one fresh request and reverts the footer
        // before the host completes anything.
        assert!(list.retry().is_some());
        assert_eq!(list.footer_view().state(), FooterState::Loading);
        assert!(list.retry().is_none());
    }

    #[test]
    fn test_attach_clears_no_more_latch() {
        let mut list = Model::new();
        list.attach(twelve_items());
        list.scrolled(11, 12);
        list.no_more();
        assert!(list.scrolled(11, 12).is_none());

        list.attach(twelve_items());
        assert!(list.scrolled(11, 12).is_some());
    }

    #[test]
    fn test_enable_cycle_clears_no_more_latch() {
        let mut list = Model::new();
        list.attach(twelve_items());
        list.scrolled(11, 12);
        list.no_more();

        list.set_load_more_enabled(false);
        list.set_load_more_enabled(true);
        assert!(list.scrolled(11, 12).is_some());
    }

    #[test]
    fn test_passthrough_reemits_events_unchanged() {
        let (tx, rx) = mpsc::channel();
        let mut list = Model::new();
        list.register_observer(Box::new(Recorder(tx)));
        list.attach(VecCollection::from_items(vec![1, 2, 3]));
        assert_eq!(rx.try_recv().unwrap(), Change::Reset);

        let event = list.collection_mut().unwrap().push(4);
        list.notify(event);
        assert_eq!(
            rx.try_recv().unwrap(),
            Change::Inserted { start: 3, count: 1 }
        );

        let (_, event) = list.collection_mut().unwrap().remove(0).unwrap();
        list.notify(event);
        assert_eq!(
            rx.try_recv().unwrap(),
            Change::Removed { start: 0, count: 1 }
        );
    }

    #[test]
    fn test_complete_emits_synthetic_footer_removal() {
        let (tx, rx) = mpsc::channel();
        let mut list = Model::new();
        list.attach(twelve_items());
        list.register_observer(Box::new(Recorder(tx)));

        list.scrolled(11, 12);
        list.complete();
        assert_eq!(
            rx.try_recv().unwrap(),
            Change::Removed {
                start: 12,
                count: 1
            }
        );
    }

    #[test]
    fn test_disable_load_more_emits_removal_before_hiding_footer() {
        let (tx, rx) = mpsc::channel();
        let mut list = Model::new();
        list.attach(twelve_items());
        list.register_observer(Box::new(Recorder(tx)));

        list.set_load_more_enabled(false);
        assert_eq!(
            rx.try_recv().unwrap(),
            Change::Removed {
                start: 12,
                count: 1
            }
        );
        assert_eq!(list.item_count(), 12);
    }

    #[test]
    fn test_no_more_and_error_emit_footer_update() {
        let (tx, rx) = mpsc::channel();
        let mut list = Model::new();
        list.attach(twelve_items());
        list.register_observer(Box::new(Recorder(tx)));

        list.no_more();
        assert_eq!(
            rx.try_recv().unwrap(),
            Change::Updated {
                start: 12,
                count: 1
            }
        );

        list.error();
        assert_eq!(
            rx.try_recv().unwrap(),
            Change::Updated {
                start: 12,
                count: 1
            }
        );
    }

    #[test]
    fn test_detach_stops_all_notifications() {
        let (tx, rx) = mpsc::channel();
        let mut list = Model::new();
        list.attach(VecCollection::from_items(vec![1]));
        list.register_observer(Box::new(Recorder(tx)));

        let collection = list.detach().unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(list.item_count(), 0);

        // Late events from the departed collection go nowhere.
        list.notify(ChangeEvent::inserted(1, 1, 2));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unregister_observer() {
        let (tx, rx) = mpsc::channel();
        let mut list = Model::new();
        list.attach(VecCollection::from_items(vec![1]));
        let id = list.register_observer(Box::new(Recorder(tx)));

        assert!(list.unregister_observer(id));
        assert!(!list.unregister_observer(id));

        list.notify(ChangeEvent::inserted(1, 1, 2));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_renderer_seam_translation() {
        let mut list = Model::new();
        list.attach(VecCollection::from_items(vec!["a", "b"]));

        assert_eq!(list.stable_id(0), 0);
        assert_eq!(list.stable_id(2), FOOTER_STABLE_ID);
        assert_eq!(list.kind_at(2), crate::collection::FOOTER_KIND);

        let mut slot = Slot::new();
        list.bind(0, &mut slot);
        assert_eq!(slot.content(), "a");

        slot.set_content("untouched");
        list.bind(2, &mut slot); // footer: no-op
        assert_eq!(slot.content(), "untouched");
    }

    #[test]
    fn test_update_routes_scroll_frames_by_id() {
        let mut list = Model::new();
        list.attach(twelve_items());

        let foreign: Msg = Box::new(ScrollFrameMsg {
            id: list.id() + 999,
            last_visible: 11,
            rendered_count: 12,
        });
        assert!(list.update(&foreign).is_none());

        let frame: Msg = Box::new(ScrollFrameMsg {
            id: list.id(),
            last_visible: 11,
            rendered_count: 12,
        });
        assert!(list.update(&frame).is_some());
    }

    #[test]
    fn test_update_routes_retry_by_id() {
        let mut list = Model::new();
        list.attach(twelve_items());
        list.scrolled(11, 12);
        list.error();

        let foreign: Msg = Box::new(RetryMsg { id: list.id() + 999 });
        assert!(list.update(&foreign).is_none());

        let retry: Msg = Box::new(RetryMsg { id: list.id() });
        assert!(list.update(&retry).is_some());
    }

    #[test]
    fn test_refresh_resets_error_footer() {
        let mut list = Model::new();
        list.attach(twelve_items());
        list.scrolled(11, 12);
        list.error();

        assert!(list.start_refresh().is_some());
        assert_eq!(list.footer_view().state(), FooterState::Loading);
        assert!(!list.is_loading_more());
    }

    #[test]
    fn test_placeholder_content_switches() {
        let mut list = Model::new();
        list.attach(VecCollection::<String>::new());
        assert!(list.is_placeholder_showing());

        list.set_error_placeholder("network down");
        assert!(list.placeholder_view().view().contains("network down"));

        list.set_empty_text("nothing yet");
        assert!(list.placeholder_view().view().contains("nothing yet"));
    }

    #[test]
    fn test_presentation_state_through_model() {
        let mut list = Model::new();
        list.attach(VecCollection::<String>::new());
        assert_eq!(list.presentation_state(), PresentationState::Empty);

        let event = list
            .collection_mut()
            .unwrap()
            .extend((0..12).map(|i| i.to_string()).collect());
        list.notify(event);
        assert_eq!(list.presentation_state(), PresentationState::Idle);

        list.scrolled(11, 12);
        assert_eq!(list.presentation_state(), PresentationState::LoadingMore);
    }

    #[tokio::test]
    async fn test_refresh_emission_carries_instance_id() {
        let mut list: Model<VecCollection<i32>> = Model::new();
        let cmd = list.start_refresh().expect("refresh should emit");

        let msg = cmd.await.expect("command should produce a message");
        let refresh = msg.downcast_ref::<RefreshMsg>().expect("RefreshMsg");
        assert_eq!(refresh.id, list.id());
    }

    #[tokio::test]
    async fn test_load_more_emission_carries_instance_id() {
        let mut list = Model::new();
        list.attach(twelve_items());
        let cmd = list.scrolled(11, 12).expect("trigger should emit");

        let msg = cmd.await.expect("command should produce a message");
        let load_more = msg.downcast_ref::<LoadMoreMsg>().expect("LoadMoreMsg");
        assert_eq!(load_more.id, list.id());
    }

    #[tokio::test]
    async fn test_retry_emission_is_load_more() {
        let mut list = Model::new();
        list.attach(twelve_items());
        list.scrolled(11, 12);
        list.error();

        let cmd = list.retry().expect("retry should emit");
        let msg = cmd.await.expect("command should produce a message");
        assert!(msg.downcast_ref::<LoadMoreMsg>().is_some());
    }
}
