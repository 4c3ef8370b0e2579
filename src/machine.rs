//! Transition rules for refresh and load-more presentation state.
//!
//! [`StateMachine`] is the leaf component of the controller: four flags, the
//! footer's current visual intent, and the guarded transitions between them.
//! It performs no I/O and holds no references — transitions that should
//! reach the host return an [`Emission`], which the top-level
//! [`Model`](crate::model::Model) converts into a command message.
//!
//! All guards are no-ops on violation. There is no failure mode; calling a
//! transition in the wrong state simply does nothing.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pullrefresh::machine::{Emission, StateMachine};
//!
//! let mut machine = StateMachine::new();
//!
//! assert_eq!(machine.start_refresh(), Some(Emission::Refresh));
//! // A second pull while refreshing is rejected by guard, not queued.
//! assert_eq!(machine.start_refresh(), None);
//!
//! machine.complete();
//! assert!(!machine.is_refreshing());
//! ```

/// Default minimum rendered-item count before load-more may trigger.
///
/// Short lists have their last item trivially visible at rest; without this
/// floor every layout pass of a five-item list would fire a fetch.
pub const DEFAULT_LOAD_MORE_THRESHOLD: usize = 10;

/// The footer slot's current visual intent.
///
/// The state machine owns this value; the pluggable
/// [`FooterView`](crate::footer::FooterView) is driven to match it whenever
/// it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterState {
    /// Fetch in progress (or idle default): show the loading visual.
    #[default]
    Loading,
    /// The last fetch returned no data: show the end-of-list visual.
    NoMore,
    /// The last fetch failed: show the error visual with a retry affordance.
    Error,
}

/// The five observable presentation states.
///
/// Derived, never stored: Empty is computed from the collection size and
/// overrides everything else, the explicit signals come next, and Idle is
/// the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    /// Content is showing and nothing is in flight.
    Idle,
    /// A refresh emission is outstanding.
    Refreshing,
    /// A load-more emission is outstanding.
    LoadingMore,
    /// The collection reports zero items; the placeholder owns the surface.
    Empty,
    /// The footer is showing the load-more error visual.
    Error,
}

/// A host-bound event produced by a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// The host should start a refresh fetch.
    Refresh,
    /// The host should fetch the next page.
    LoadMore,
}

/// Flags and transition rules for the pull-refresh controller.
///
/// Exactly one writer mutates this state (the controller that owns it); the
/// collection wrapper only reads it. Each `Refresh`/`LoadMore` emission must
/// be answered by exactly one completion signal — [`complete`], [`no_more`],
/// or [`error`] — which is the host's contract; a missing signal leaves the
/// footer on a stale visual and is not detected at runtime.
///
/// [`complete`]: StateMachine::complete
/// [`no_more`]: StateMachine::no_more
/// [`error`]: StateMachine::error
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::machine::{Emission, FooterState, StateMachine};
///
/// let mut machine = StateMachine::new();
///
/// // Twelve rendered items, last one visible: trigger.
/// assert_eq!(machine.scrolled_near_end(11, 12), Some(Emission::LoadMore));
/// assert!(machine.is_loading_more());
///
/// // The page came back empty: latch, and suppress further triggers.
/// machine.no_more();
/// assert_eq!(machine.footer_state(), FooterState::NoMore);
/// assert_eq!(machine.scrolled_near_end(11, 12), None);
/// ```
#[derive(Debug, Clone)]
pub struct StateMachine {
    refresh_enabled: bool,
    load_more_enabled: bool,
    refreshing: bool,
    loading_more: bool,
    footer: FooterState,
    load_more_threshold: usize,
}

impl Default for StateMachine {
    /// Both behaviors enabled, nothing in flight, footer on its loading
    /// default, threshold at [`DEFAULT_LOAD_MORE_THRESHOLD`].
    fn default() -> Self {
        Self {
            refresh_enabled: true,
            load_more_enabled: true,
            refreshing: false,
            loading_more: false,
            footer: FooterState::default(),
            load_more_threshold: DEFAULT_LOAD_MORE_THRESHOLD,
        }
    }
}

impl StateMachine {
    /// Creates a state machine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the load-more trigger threshold (builder pattern).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::machine::{Emission, StateMachine};
    ///
    /// let mut machine = StateMachine::new().with_load_more_threshold(3);
    /// assert_eq!(machine.scrolled_near_end(2, 3), Some(Emission::LoadMore));
    /// ```
    pub fn with_load_more_threshold(mut self, threshold: usize) -> Self {
        self.load_more_threshold = threshold;
        self
    }

    /// Sets the load-more trigger threshold (mutable version).
    pub fn set_load_more_threshold(&mut self, threshold: usize) {
        self.load_more_threshold = threshold;
    }

    /// Current load-more trigger threshold.
    pub fn load_more_threshold(&self) -> usize {
        self.load_more_threshold
    }

    /// Whether the pull-to-refresh gesture is accepted.
    pub fn refresh_enabled(&self) -> bool {
        self.refresh_enabled
    }

    /// Enables or disables pull-to-refresh.
    pub fn set_refresh_enabled(&mut self, enabled: bool) {
        self.refresh_enabled = enabled;
    }

    /// Whether a footer slot exists at all.
    pub fn load_more_enabled(&self) -> bool {
        self.load_more_enabled
    }

    /// Enables or disables load-more.
    ///
    /// Disabling first applies the effect of [`stop_loading_more`], so an
    /// in-flight or latched footer state cannot outlive the slot.
    ///
    /// [`stop_loading_more`]: StateMachine::stop_loading_more
    pub fn set_load_more_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.stop_loading_more();
        }
        self.load_more_enabled = enabled;
    }

    /// True between a refresh emission and its completion signal.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// True while a load-more fetch is outstanding, or latched after
    /// [`no_more`](StateMachine::no_more).
    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    /// The footer's current visual intent.
    pub fn footer_state(&self) -> FooterState {
        self.footer
    }

    /// Whether the footer slot is shown for a collection of `inner_len`
    /// items.
    ///
    /// No footer is shown over an empty collection; the empty placeholder
    /// supersedes it. This is the single derivation both the machine and the
    /// collection wrapper use, so footer index math cannot drift.
    pub fn footer_visible(&self, inner_len: usize) -> bool {
        self.load_more_enabled && inner_len > 0
    }

    /// Wrapper-space position of the footer slot: always one past the last
    /// inner item.
    pub fn footer_index(&self, inner_len: usize) -> usize {
        inner_len
    }

    /// Starts a refresh.
    ///
    /// Guard: refresh must be enabled and not already in progress — repeated
    /// pulls while refreshing are no-ops, never queued or canceled. The
    /// footer is reset to its loading visual so a footer trigger racing a
    /// fresh pull cannot leave a stale no-more or error visual behind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::machine::{Emission, StateMachine};
    ///
    /// let mut machine = StateMachine::new();
    /// assert_eq!(machine.start_refresh(), Some(Emission::Refresh));
    /// assert_eq!(machine.start_refresh(), None); // already refreshing
    ///
    /// let mut disabled = StateMachine::new();
    /// disabled.set_refresh_enabled(false);
    /// assert_eq!(disabled.start_refresh(), None);
    /// ```
    pub fn start_refresh(&mut self) -> Option<Emission> {
        if !self.refresh_enabled || self.refreshing {
            return None;
        }
        self.refreshing = true;
        self.loading_more = false;
        self.footer = FooterState::Loading;
        Some(Emission::Refresh)
    }

    /// Reports a scroll frame and derives the load-more trigger.
    ///
    /// `last_visible` and `rendered_count` come from the host's scroll
    /// sensor. The trigger fires only when load-more is enabled, nothing is
    /// in flight, at least [`load_more_threshold`] items are rendered, and
    /// the last visible position is the last rendered position.
    ///
    /// Between an emission and its completion signal the `loading_more` flag
    /// guarantees at most one trigger, no matter how many scroll frames
    /// arrive.
    ///
    /// [`load_more_threshold`]: StateMachine::load_more_threshold
    pub fn scrolled_near_end(
        &mut self,
        last_visible: usize,
        rendered_count: usize,
    ) -> Option<Emission> {
        if !self.load_more_enabled || self.refreshing || self.loading_more {
            return None;
        }
        if rendered_count < self.load_more_threshold {
            return None;
        }
        if last_visible + 1 != rendered_count {
            return None;
        }
        self.loading_more = true;
        Some(Emission::LoadMore)
    }

    /// Completion signal: the fetch finished and produced data.
    ///
    /// Clears both in-flight flags regardless of prior state and resets the
    /// footer to its loading default.
    pub fn complete(&mut self) {
        self.refreshing = false;
        self.stop_loading_more();
    }

    /// Completion signal: the fetch finished and there is no further page.
    ///
    /// Latches `loading_more` so no further automatic trigger fires until
    /// the latch is cleared by [`complete`](StateMachine::complete), a
    /// [`set_load_more_enabled`](StateMachine::set_load_more_enabled) cycle,
    /// or a new collection attach. Without the latch every scroll frame over
    /// a finished list would re-trigger a no-op fetch.
    pub fn no_more(&mut self) {
        self.loading_more = true;
        self.footer = FooterState::NoMore;
    }

    /// Completion signal: the fetch failed.
    ///
    /// Switches the footer to its error visual. `loading_more` is left
    /// untouched so scroll frames stay suppressed while the retry affordance
    /// is showing.
    pub fn error(&mut self) {
        self.footer = FooterState::Error;
    }

    /// Retry requested from the error footer.
    ///
    /// Routed through the current state rather than a per-transition
    /// callback: the request is honored only while the footer is actually
    /// showing the error visual, and reverts it to loading before the new
    /// emission goes out.
    pub fn retry(&mut self) -> Option<Emission> {
        if self.footer != FooterState::Error {
            return None;
        }
        self.footer = FooterState::Loading;
        self.loading_more = true;
        Some(Emission::LoadMore)
    }

    /// Clears the load-more flag (and any latch) and resets the footer
    /// visual.
    ///
    /// This is the footer half of [`complete`](StateMachine::complete); the
    /// controller pairs it with the synthetic footer-slot notification.
    pub fn stop_loading_more(&mut self) {
        self.loading_more = false;
        self.footer = FooterState::Loading;
    }

    /// Derives the observable presentation state for a collection of
    /// `item_count` items.
    ///
    /// Precedence: Empty over everything, then Refreshing, then the footer
    /// error, then an actual in-flight load-more, then Idle. A latched
    /// no-more footer reads as Idle — nothing is in flight.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::machine::{PresentationState, StateMachine};
    ///
    /// let mut machine = StateMachine::new();
    /// assert_eq!(machine.presentation_state(0), PresentationState::Empty);
    /// assert_eq!(machine.presentation_state(12), PresentationState::Idle);
    ///
    /// machine.start_refresh();
    /// assert_eq!(machine.presentation_state(12), PresentationState::Refreshing);
    /// ```
    pub fn presentation_state(&self, item_count: usize) -> PresentationState {
        if item_count == 0 {
            PresentationState::Empty
        } else if self.refreshing {
            PresentationState::Refreshing
        } else if self.footer == FooterState::Error {
            PresentationState::Error
        } else if self.loading_more && self.footer == FooterState::Loading {
            PresentationState::LoadingMore
        } else {
            PresentationState::Idle
        }
    }
}
