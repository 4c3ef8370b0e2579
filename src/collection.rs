//! Inner-collection contract: item access, change events, and observers.
//!
//! The pull-refresh controller never owns item data. It decorates an
//! externally supplied collection that implements the [`Collection`] trait,
//! and learns about mutations through [`ChangeEvent`] values delivered by the
//! host. Downstream renderers subscribe through the [`DataObserver`] trait
//! and receive every inner event unchanged, plus the synthetic footer-slot
//! notifications issued by the controller.
//!
//! A ready-to-use [`VecCollection`] is provided for prototyping and tests;
//! its mutators return the matching [`ChangeEvent`] so the host can feed the
//! event straight back into the controller.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pullrefresh::collection::{Collection, VecCollection};
//!
//! let mut fruits = VecCollection::from_items(vec!["apple", "banana"]);
//! let event = fruits.push("cherry");
//!
//! assert_eq!(fruits.len(), 3);
//! assert_eq!(event.len, 3);
//! ```

use std::fmt::Display;

/// Render kind discriminator for list slots.
///
/// Mirrors the "item view type" integer a recycling renderer uses to pick a
/// slot template. Inner collections are free to use any non-reserved value;
/// the footer slot always reports [`FOOTER_KIND`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::collection::{ItemKind, FOOTER_KIND};
///
/// let plain = ItemKind(0);
/// assert_ne!(plain, FOOTER_KIND);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ItemKind(pub i64);

/// Reserved kind reported for the synthetic footer slot.
pub const FOOTER_KIND: ItemKind = ItemKind(0x100);

/// Reserved stable id for the synthetic footer slot.
///
/// Inner collection ids are domain data and defined as non-negative, so the
/// footer sentinel can never collide with a real item id.
pub const FOOTER_STABLE_ID: i64 = -1;

/// A render slot an item binds its content into.
///
/// Rendering itself is a host concern; the slot carries only the content
/// string the host's list renderer will draw. Binding the footer slot is a
/// no-op because the footer view renders itself (see
/// [`FooterView`](crate::footer::FooterView)).
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::collection::Slot;
///
/// let mut slot = Slot::new();
/// slot.set_content("hello");
/// assert_eq!(slot.content(), "hello");
///
/// slot.clear();
/// assert_eq!(slot.content(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    content: String,
}

impl Slot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the slot's content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Returns the currently bound content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        self.content.clear();
    }
}

/// An externally owned, position-addressable item collection.
///
/// This is the adapter seam the controller decorates. Implementations expose
/// their size and per-position access; they do not push change notifications
/// themselves — the host delivers those as [`ChangeEvent`] values through
/// [`Model::notify`](crate::model::Model::notify).
///
/// Positions passed to `kind_at`, `bind`, and `stable_id` are always below
/// `len()`; the controller translates the footer position away before
/// delegating.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::collection::{Collection, ItemKind, Slot};
///
/// struct Squares(usize);
///
/// impl Collection for Squares {
///     fn len(&self) -> usize {
///         self.0
///     }
///
///     fn kind_at(&self, _index: usize) -> ItemKind {
///         ItemKind(0)
///     }
///
///     fn bind(&self, index: usize, slot: &mut Slot) {
///         slot.set_content(format!("{}", index * index));
///     }
///
///     fn stable_id(&self, index: usize) -> i64 {
///         index as i64
///     }
/// }
///
/// let squares = Squares(4);
/// let mut slot = Slot::new();
/// squares.bind(3, &mut slot);
/// assert_eq!(slot.content(), "9");
/// ```
pub trait Collection {
    /// Number of items currently in the collection.
    fn len(&self) -> usize;

    /// Returns true when the collection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render kind of the item at `index`.
    fn kind_at(&self, index: usize) -> ItemKind;

    /// Binds the item at `index` into the given render slot.
    fn bind(&self, index: usize, slot: &mut Slot);

    /// Stable identity of the item at `index`.
    ///
    /// Ids are domain data and must be non-negative; [`FOOTER_STABLE_ID`] is
    /// reserved for the footer slot.
    fn stable_id(&self, index: usize) -> i64;
}

/// A single structural change to a collection.
///
/// Positions are in inner-collection space. Because the footer slot is
/// always last, inner positions are also valid wrapper positions and the
/// controller re-emits these values unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// `count` items were inserted starting at `start`.
    Inserted {
        /// First affected position.
        start: usize,
        /// Number of inserted items.
        count: usize,
    },
    /// `count` items were removed starting at `start`.
    Removed {
        /// First affected position.
        start: usize,
        /// Number of removed items.
        count: usize,
    },
    /// `count` items changed in place starting at `start`.
    Updated {
        /// First affected position.
        start: usize,
        /// Number of changed items.
        count: usize,
    },
    /// The collection was replaced wholesale.
    Reset,
}

/// A change notification delivered by the host.
///
/// `len` is the collection length *after* the change. The controller derives
/// the empty/non-empty boundary exclusively from this reported length rather
/// than from a separately cached count, so a notification storm cannot open
/// a window where the two disagree.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::collection::{Change, ChangeEvent};
///
/// let event = ChangeEvent::inserted(0, 5, 5);
/// assert_eq!(event.change, Change::Inserted { start: 0, count: 5 });
/// assert_eq!(event.len, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    /// What changed.
    pub change: Change,
    /// Collection length after the change.
    pub len: usize,
}

impl ChangeEvent {
    /// An insertion of `count` items at `start`; `len` is the new length.
    pub fn inserted(start: usize, count: usize, len: usize) -> Self {
        Self {
            change: Change::Inserted { start, count },
            len,
        }
    }

    /// A removal of `count` items at `start`; `len` is the new length.
    pub fn removed(start: usize, count: usize, len: usize) -> Self {
        Self {
            change: Change::Removed { start, count },
            len,
        }
    }

    /// An in-place update of `count` items at `start`.
    pub fn updated(start: usize, count: usize, len: usize) -> Self {
        Self {
            change: Change::Updated { start, count },
            len,
        }
    }

    /// A wholesale replacement; `len` is the new length.
    pub fn reset(len: usize) -> Self {
        Self {
            change: Change::Reset,
            len,
        }
    }
}

/// Receiver for re-emitted change notifications.
///
/// Implemented by the host's rendering collaborator. Notifications are
/// redraw hints in wrapper position space; receivers re-query
/// [`Model::item_count`](crate::model::Model::item_count) for authoritative
/// sizing.
pub trait DataObserver {
    /// Called once per re-emitted or synthetic change notification.
    fn on_change(&mut self, change: &Change);
}

/// Token returned by observer registration, used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registry of downstream change observers.
///
/// Owned by the controller; registrations survive collection re-attachment
/// and are dropped together with the controller.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn DataObserver + Send>)>,
    next_id: u64,
}

impl ObserverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer and returns its deregistration token.
    pub fn register(&mut self, observer: Box<dyn DataObserver + Send>) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.observers.push((id, observer));
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns false when the token is unknown (already deregistered).
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true when no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers one change to every registered observer, in registration
    /// order.
    pub fn notify(&mut self, change: &Change) {
        for (_, observer) in &mut self.observers {
            observer.on_change(change);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// A `Vec`-backed collection for prototyping and tests.
///
/// Items only need to implement [`Display`]; binding writes the displayed
/// form into the slot. Every mutator returns the [`ChangeEvent`] describing
/// what it did, ready to hand to
/// [`Model::notify`](crate::model::Model::notify).
///
/// Stable ids are positional, which is sufficient for renderers that do not
/// animate moves; collections with real identities should implement
/// [`Collection`] directly.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pullrefresh::collection::{Change, Collection, Slot, VecCollection};
///
/// let mut names = VecCollection::new();
/// names.push("ada");
/// let event = names.push("grace");
/// assert_eq!(event.change, Change::Inserted { start: 1, count: 1 });
///
/// let mut slot = Slot::new();
/// names.bind(0, &mut slot);
/// assert_eq!(slot.content(), "ada");
/// ```
#[derive(Debug, Clone)]
pub struct VecCollection<I> {
    items: Vec<I>,
    kind: ItemKind,
}

impl<I: Display> VecCollection<I> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            kind: ItemKind::default(),
        }
    }

    /// Creates a collection from existing items.
    pub fn from_items(items: Vec<I>) -> Self {
        Self {
            items,
            kind: ItemKind::default(),
        }
    }

    /// Sets the kind every item reports (builder pattern).
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Read access to the underlying items.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Appends one item.
    pub fn push(&mut self, item: I) -> ChangeEvent {
        self.items.push(item);
        ChangeEvent::inserted(self.items.len() - 1, 1, self.items.len())
    }

    /// Appends a batch of items.
    ///
    /// An empty batch produces an insertion of zero items, which observers
    /// treat as a no-op.
    pub fn extend(&mut self, items: Vec<I>) -> ChangeEvent {
        let start = self.items.len();
        let count = items.len();
        self.items.extend(items);
        ChangeEvent::inserted(start, count, self.items.len())
    }

    /// Removes the item at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<(I, ChangeEvent)> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        Some((item, ChangeEvent::removed(index, 1, self.items.len())))
    }

    /// Replaces the item at `index` in place, if it exists.
    pub fn update(&mut self, index: usize, item: I) -> Option<ChangeEvent> {
        let slot = self.items.get_mut(index)?;
        *slot = item;
        Some(ChangeEvent::updated(index, 1, self.items.len()))
    }

    /// Replaces the whole collection.
    pub fn set_items(&mut self, items: Vec<I>) -> ChangeEvent {
        self.items = items;
        ChangeEvent::reset(self.items.len())
    }

    /// Removes every item.
    pub fn clear(&mut self) -> ChangeEvent {
        self.items.clear();
        ChangeEvent::reset(0)
    }
}

impl<I: Display> Default for VecCollection<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Display> Collection for VecCollection<I> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn kind_at(&self, _index: usize) -> ItemKind {
        self.kind
    }

    fn bind(&self, index: usize, slot: &mut Slot) {
        if let Some(item) = self.items.get(index) {
            slot.set_content(item.to_string());
        }
    }

    fn stable_id(&self, index: usize) -> i64 {
        index as i64
    }
}
