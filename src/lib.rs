#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pullrefresh/")]

//! # bubbletea-pullrefresh
//!
//! A reusable list-presentation controller for terminal applications built
//! with [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs): pull-to-refresh,
//! infinite scroll ("load more"), an empty-state placeholder, and an
//! error/retry footer, cooperating around one small state machine.
//!
//! ## Overview
//!
//! The crate deliberately owns no rendering, no layout, and no data. It
//! tracks *presentation* state over an item collection owned elsewhere and
//! drives a handful of pluggable collaborators:
//!
//! - **[`model::Model`]** — the controller a host embeds. Emits
//!   [`RefreshMsg`]/[`LoadMoreMsg`] commands when the guards pass and
//!   expects exactly one completion signal (`complete`, `no_more`, `error`)
//!   per emission.
//! - **[`machine::StateMachine`]** — the transition rules between
//!   {Idle, Refreshing, LoadingMore, Empty, Error}. A leaf component with
//!   no dependencies.
//! - **[`wrapper::CollectionWrapper`]** — decorates the attached collection
//!   with a synthetic trailing footer slot, translating positions without
//!   ever disturbing the inner collection's indices or change events.
//! - **[`footer::FooterView`]** / **[`placeholder::PlaceholderView`]** —
//!   capability traits for the loading/no-more/error footer and the
//!   empty/error placeholder, with stock implementations styled via
//!   lipgloss.
//! - **[`collection::Collection`]** — the seam to the externally owned item
//!   data, with a `Vec`-backed implementation for prototyping.
//!
//! ## Control Flow
//!
//! ```text
//! scroll sensor ──ScrollFrameMsg──▶ Model ──LoadMoreMsg──▶ host fetch
//!                                     ▲                        │
//!                                     └── complete / no_more / error
//! ```
//!
//! The controller validates guards (enabled, nothing in flight, threshold
//! met, last position visible), flips its flags, and returns immediately;
//! the host answers whenever its fetch resolves. Everything runs on the
//! single event-loop thread and nothing blocks.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pullrefresh::prelude::*;
//!
//! let mut list = PullRefresh::new();
//! list.attach(VecCollection::from_items(
//!     (1..=12).map(|i| format!("row {i}")).collect(),
//! ));
//!
//! // 12 rows plus the footer slot.
//! assert_eq!(list.item_count(), 13);
//!
//! // The user reached the end: ask the host for the next page.
//! let cmd = list.scrolled(11, 12);
//! assert!(cmd.is_some());
//!
//! // The host's fetch returned nothing further.
//! list.no_more();
//! assert!(list.scrolled(11, 12).is_none());
//! ```
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | `PullRefresh` | The embeddable controller (`model::Model`) |
//! | `StateMachine` | Guarded transitions and derived presentation state |
//! | `CollectionWrapper` | Footer-slot index translation over the collection |
//! | `SimpleFooterView` | Stock loading/no-more/error footer line |
//! | `TextPlaceholder` | Stock empty/error placeholder |
//! | `VecCollection` | Ready-to-use `Vec`-backed collection |

pub mod collection;
pub mod footer;
pub mod machine;
pub mod model;
pub mod placeholder;
pub mod wrapper;

pub use collection::{
    Change, ChangeEvent, Collection, DataObserver, ItemKind, ObserverId, ObserverRegistry, Slot,
    VecCollection, FOOTER_KIND, FOOTER_STABLE_ID,
};
pub use footer::{FooterView, SimpleFooterView};
pub use machine::{
    Emission, FooterState, PresentationState, StateMachine, DEFAULT_LOAD_MORE_THRESHOLD,
};
pub use model::{LoadMoreMsg, Model as PullRefresh, RefreshMsg, RetryMsg, ScrollFrameMsg};
pub use placeholder::{PlaceholderContent, PlaceholderView, TextPlaceholder};
pub use wrapper::CollectionWrapper;

/// Prelude module for convenient imports.
///
/// Re-exports the types a typical host touches: the controller, the
/// capability traits, the stock views, and the message types.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::prelude::*;
///
/// let mut list: PullRefresh<VecCollection<String>> = PullRefresh::new();
/// assert!(list.start_refresh().is_some());
/// ```
pub mod prelude {
    pub use crate::collection::{
        Change, ChangeEvent, Collection, DataObserver, ItemKind, ObserverId, Slot, VecCollection,
        FOOTER_KIND, FOOTER_STABLE_ID,
    };
    pub use crate::footer::{FooterView, SimpleFooterView};
    pub use crate::machine::{FooterState, PresentationState, StateMachine};
    pub use crate::model::{
        LoadMoreMsg, Model as PullRefresh, RefreshMsg, RetryMsg, ScrollFrameMsg,
    };
    pub use crate::placeholder::{PlaceholderContent, PlaceholderView, TextPlaceholder};
    pub use crate::wrapper::CollectionWrapper;
}
