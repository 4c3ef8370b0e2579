//! Pluggable footer visuals for the load-more slot.
//!
//! The footer slot is the synthetic trailing list entry that shows the
//! loading, end-of-list, and error affordances. The controller drives any
//! [`FooterView`] implementation through three `show_*` calls whenever the
//! state machine's footer intent changes; the view's only other duty is to
//! render itself as a string.
//!
//! Footer views are injected by configuration — swap in a custom
//! implementation with
//! [`Model::set_footer_view`](crate::model::Model::set_footer_view) — rather
//! than subclassed. [`SimpleFooterView`] is the stock implementation.
//!
//! The retry affordance is intentionally not part of this trait: retry is a
//! single stable route through
//! [`Model::retry`](crate::model::Model::retry) (or a
//! [`RetryMsg`](crate::model::RetryMsg)), honored only while the footer is
//! actually in its error state.

use crate::machine::FooterState;
use lipgloss_extras::prelude::*;

/// Visual driver for the footer slot.
///
/// Implementations are stateful: the controller calls a `show_*` method on
/// every footer transition and the view renders its current state on
/// demand.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::footer::FooterView;
/// use bubbletea_pullrefresh::machine::FooterState;
///
/// struct AsciiFooter(FooterState);
///
/// impl FooterView for AsciiFooter {
///     fn show_loading(&mut self) {
///         self.0 = FooterState::Loading;
///     }
///
///     fn show_no_more(&mut self) {
///         self.0 = FooterState::NoMore;
///     }
///
///     fn show_error(&mut self) {
///         self.0 = FooterState::Error;
///     }
///
///     fn state(&self) -> FooterState {
///         self.0
///     }
///
///     fn view(&self) -> String {
///         match self.0 {
///             FooterState::Loading => "...".into(),
///             FooterState::NoMore => "---".into(),
///             FooterState::Error => "!!!".into(),
///         }
///     }
/// }
/// ```
pub trait FooterView {
    /// Switches to the loading visual.
    fn show_loading(&mut self);

    /// Switches to the end-of-list visual.
    fn show_no_more(&mut self);

    /// Switches to the error visual with its retry affordance.
    fn show_error(&mut self);

    /// The state currently being displayed.
    fn state(&self) -> FooterState;

    /// Renders the current visual as a string for the footer slot.
    fn view(&self) -> String;
}

/// The stock footer: one line of adaptively styled text per state.
///
/// Texts and styles are customizable through `with_*` builders; the
/// defaults follow common terminal-UI conventions with subdued colors for
/// the passive states and a highlighted error line.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::footer::{FooterView, SimpleFooterView};
///
/// let mut footer = SimpleFooterView::new().with_no_more_text("~ end ~");
/// footer.show_no_more();
/// assert!(footer.view().contains("~ end ~"));
/// ```
pub struct SimpleFooterView {
    state: FooterState,
    loading_text: String,
    no_more_text: String,
    error_text: String,
    text_style: Style,
    error_style: Style,
}

impl SimpleFooterView {
    /// Creates a footer with default texts and adaptive styles.
    pub fn new() -> Self {
        Self {
            state: FooterState::default(),
            loading_text: "Loading…".to_string(),
            no_more_text: "— no more items —".to_string(),
            error_text: "Load failed · retry".to_string(),
            text_style: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            error_style: Style::new().foreground(AdaptiveColor {
                Light: "#B00000",
                Dark: "#FF5F5F",
            }),
        }
    }

    /// Sets the loading text (builder pattern).
    pub fn with_loading_text(mut self, text: &str) -> Self {
        self.loading_text = text.to_string();
        self
    }

    /// Sets the end-of-list text (builder pattern).
    pub fn with_no_more_text(mut self, text: &str) -> Self {
        self.no_more_text = text.to_string();
        self
    }

    /// Sets the error text (builder pattern).
    pub fn with_error_text(mut self, text: &str) -> Self {
        self.error_text = text.to_string();
        self
    }

    /// Sets the style used for the loading and end-of-list visuals
    /// (builder pattern).
    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Sets the style used for the error visual (builder pattern).
    pub fn with_error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }
}

impl Default for SimpleFooterView {
    fn default() -> Self {
        Self::new()
    }
}

impl FooterView for SimpleFooterView {
    fn show_loading(&mut self) {
        self.state = FooterState::Loading;
    }

    fn show_no_more(&mut self) {
        self.state = FooterState::NoMore;
    }

    fn show_error(&mut self) {
        self.state = FooterState::Error;
    }

    fn state(&self) -> FooterState {
        self.state
    }

    fn view(&self) -> String {
        match self.state {
            FooterState::Loading => self.text_style.render(&self.loading_text),
            FooterState::NoMore => self.text_style.render(&self.no_more_text),
            FooterState::Error => self.error_style.render(&self.error_text),
        }
    }
}

impl std::fmt::Debug for SimpleFooterView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleFooterView")
            .field("state", &self.state)
            .finish()
    }
}
