//! Empty-state and error placeholders shown instead of the list.
//!
//! When the attached collection reports zero items the list surface is
//! handed to a placeholder. The controller drives any [`PlaceholderView`]
//! implementation through `show`/`hide` calls on every empty/non-empty
//! boundary flip — that flip, derived from the latest change notification's
//! reported count, is the single authoritative trigger for placeholder
//! visibility.
//!
//! What the placeholder says is a separate axis: [`PlaceholderContent`]
//! selects between the empty text, a full-surface error, or a custom body,
//! configured on the [`Model`](crate::model::Model).

use lipgloss_extras::prelude::*;

/// Content shown while the placeholder owns the list surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderContent {
    /// Nothing to show yet.
    Empty {
        /// Message displayed in place of the list.
        text: String,
    },
    /// Loading the collection failed outright (no network, first fetch
    /// failed). Pair the host's activate affordance on this surface with
    /// [`Model::start_refresh`](crate::model::Model::start_refresh).
    Error {
        /// Message displayed in place of the list.
        text: String,
    },
    /// A host-supplied body, rendered as-is.
    Custom {
        /// Pre-rendered placeholder body.
        body: String,
    },
}

impl Default for PlaceholderContent {
    fn default() -> Self {
        Self::Empty {
            text: "No data".to_string(),
        }
    }
}

/// Visual driver for the empty/error placeholder.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::placeholder::{
///     PlaceholderContent, PlaceholderView, TextPlaceholder,
/// };
///
/// let mut placeholder = TextPlaceholder::new();
/// assert!(!placeholder.visible());
///
/// placeholder.show(&PlaceholderContent::Empty { text: "Nothing here".into() });
/// assert!(placeholder.visible());
/// assert!(placeholder.view().contains("Nothing here"));
///
/// placeholder.hide();
/// assert_eq!(placeholder.view(), "");
/// ```
pub trait PlaceholderView {
    /// Makes the placeholder visible with the given content.
    ///
    /// Also called while already visible when the configured content
    /// changes.
    fn show(&mut self, content: &PlaceholderContent);

    /// Hides the placeholder; the list surface goes back to the renderer.
    fn hide(&mut self);

    /// Whether the placeholder currently owns the list surface.
    fn visible(&self) -> bool;

    /// Renders the placeholder, or an empty string while hidden.
    fn view(&self) -> String;
}

/// The stock placeholder: centered-feel styled text.
pub struct TextPlaceholder {
    visible: bool,
    content: PlaceholderContent,
    empty_style: Style,
    error_style: Style,
}

impl TextPlaceholder {
    /// Creates a hidden placeholder with default styles.
    pub fn new() -> Self {
        Self {
            visible: false,
            content: PlaceholderContent::default(),
            empty_style: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            error_style: Style::new().foreground(AdaptiveColor {
                Light: "#B00000",
                Dark: "#FF5F5F",
            }),
        }
    }

    /// Sets the style for empty-state text (builder pattern).
    pub fn with_empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }

    /// Sets the style for error text (builder pattern).
    pub fn with_error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }
}

impl Default for TextPlaceholder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderView for TextPlaceholder {
    fn show(&mut self, content: &PlaceholderContent) {
        self.visible = true;
        self.content = content.clone();
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn view(&self) -> String {
        if !self.visible {
            return String::new();
        }
        match &self.content {
            PlaceholderContent::Empty { text } => self.empty_style.render(text),
            PlaceholderContent::Error { text } => self.error_style.render(text),
            PlaceholderContent::Custom { body } => body.clone(),
        }
    }
}

impl std::fmt::Debug for TextPlaceholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPlaceholder")
            .field("visible", &self.visible)
            .field("content", &self.content)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let placeholder = TextPlaceholder::new();
        assert!(!placeholder.visible());
        assert_eq!(placeholder.view(), "");
    }

    #[test]
    fn test_show_and_hide() {
        let mut placeholder = TextPlaceholder::new();
        placeholder.show(&PlaceholderContent::Empty {
            text: "empty".into(),
        });
        assert!(placeholder.visible());
        assert!(placeholder.view().contains("empty"));

        placeholder.hide();
        assert!(!placeholder.visible());
        assert_eq!(placeholder.view(), "");
    }

    #[test]
    fn test_custom_body_renders_verbatim() {
        let mut placeholder = TextPlaceholder::new();
        placeholder.show(&PlaceholderContent::Custom {
            body: "<ascii art>".into(),
        });
        assert_eq!(placeholder.view(), "<ascii art>");
    }

    #[test]
    fn test_show_while_visible_swaps_content() {
        let mut placeholder = TextPlaceholder::new();
        placeholder.show(&PlaceholderContent::Empty { text: "a".into() });
        placeholder.show(&PlaceholderContent::Error { text: "b".into() });
        assert!(placeholder.visible());
        assert!(placeholder.view().contains("b"));
    }
}
