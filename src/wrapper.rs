//! Index-translating decorator around the attached collection.
//!
//! [`CollectionWrapper`] exposes the attached collection to the renderer
//! with one extra trailing slot — the footer — without disturbing the inner
//! collection's positions: every inner position is also a valid wrapper
//! position, and the footer always sits one past the last item.
//!
//! The wrapper never mutates controller state. It reads the
//! [`StateMachine`] for the footer's visibility and derives the synthetic
//! footer notifications as plain values; delivery to observers is the
//! [`Model`](crate::model::Model)'s job.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_pullrefresh::collection::{VecCollection, FOOTER_KIND};
//! use bubbletea_pullrefresh::machine::StateMachine;
//! use bubbletea_pullrefresh::wrapper::CollectionWrapper;
//!
//! let machine = StateMachine::new();
//! let wrapper = CollectionWrapper::new(VecCollection::from_items(vec!["a", "b"]));
//!
//! assert_eq!(wrapper.item_count(&machine), 3); // two items + footer
//! assert_eq!(wrapper.kind_at(&machine, 2), FOOTER_KIND);
//! ```

use crate::collection::{Change, Collection, ItemKind, Slot, FOOTER_KIND, FOOTER_STABLE_ID};
use crate::machine::StateMachine;

/// Decorates an externally supplied collection with the synthetic footer
/// slot.
///
/// Created fresh for every attached collection and replaced, never mutated,
/// on re-attach. The inner count is read on demand for every query; nothing
/// is cached, so the wrapper can never disagree with the collection it
/// decorates.
#[derive(Debug, Clone)]
pub struct CollectionWrapper<C> {
    inner: C,
}

impl<C: Collection> CollectionWrapper<C> {
    /// Wraps a collection.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Read access to the wrapped collection.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Write access to the wrapped collection.
    ///
    /// Mutations made here still belong to the host, which must deliver the
    /// matching [`ChangeEvent`](crate::collection::ChangeEvent) through
    /// [`Model::notify`](crate::model::Model::notify).
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Unwraps and returns the collection.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Number of slots the renderer sees.
    ///
    /// `inner len + 1` while the footer is visible, `inner len` otherwise —
    /// and therefore 0 for an empty collection even when load-more is
    /// enabled, because the empty placeholder supersedes the footer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pullrefresh::collection::VecCollection;
    /// use bubbletea_pullrefresh::machine::StateMachine;
    /// use bubbletea_pullrefresh::wrapper::CollectionWrapper;
    ///
    /// let machine = StateMachine::new();
    /// let empty: CollectionWrapper<VecCollection<&str>> =
    ///     CollectionWrapper::new(VecCollection::new());
    /// assert_eq!(empty.item_count(&machine), 0);
    /// ```
    pub fn item_count(&self, machine: &StateMachine) -> usize {
        let len = self.inner.len();
        len + usize::from(machine.footer_visible(len))
    }

    /// Whether the footer slot is currently part of the rendered range.
    pub fn footer_visible(&self, machine: &StateMachine) -> bool {
        machine.footer_visible(self.inner.len())
    }

    /// Whether `position` addresses the footer slot.
    pub fn is_footer(&self, machine: &StateMachine, position: usize) -> bool {
        let len = self.inner.len();
        machine.footer_visible(len) && position == machine.footer_index(len)
    }

    /// Render kind at `position`: [`FOOTER_KIND`] for the footer slot,
    /// otherwise the inner collection's kind at the same position.
    pub fn kind_at(&self, machine: &StateMachine, position: usize) -> ItemKind {
        if self.is_footer(machine, position) {
            FOOTER_KIND
        } else {
            self.inner.kind_at(position)
        }
    }

    /// Binds the slot at `position`.
    ///
    /// A no-op for the footer slot — the footer view renders itself — and a
    /// same-position delegation otherwise. No offset is ever applied since
    /// the footer is always last.
    pub fn bind(&self, machine: &StateMachine, position: usize, slot: &mut Slot) {
        if self.is_footer(machine, position) {
            return;
        }
        self.inner.bind(position, slot);
    }

    /// Stable id at `position`: the reserved [`FOOTER_STABLE_ID`] sentinel
    /// for the footer slot, otherwise the inner collection's id.
    pub fn stable_id(&self, machine: &StateMachine, position: usize) -> i64 {
        if self.is_footer(machine, position) {
            FOOTER_STABLE_ID
        } else {
            self.inner.stable_id(position)
        }
    }

    /// Synthetic notification for the footer slot leaving the render range
    /// or needing a rebind after `complete`/`stop_loading_more`.
    ///
    /// Anchored at the footer's own index. `None` while no footer is
    /// showing — over an empty collection or with load-more disabled there
    /// is nothing to remove.
    pub fn footer_removed(&self, machine: &StateMachine) -> Option<Change> {
        if !self.footer_visible(machine) {
            return None;
        }
        Some(Change::Removed {
            start: machine.footer_index(self.inner.len()),
            count: 1,
        })
    }

    /// Synthetic notification for an in-place footer visual change
    /// (loading ⇄ no-more ⇄ error).
    pub fn footer_changed(&self, machine: &StateMachine) -> Option<Change> {
        if !self.footer_visible(machine) {
            return None;
        }
        Some(Change::Updated {
            start: machine.footer_index(self.inner.len()),
            count: 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::VecCollection;

    fn wrapper_of(items: Vec<&'static str>) -> CollectionWrapper<VecCollection<&'static str>> {
        CollectionWrapper::new(VecCollection::from_items(items))
    }

    #[test]
    fn test_item_count_adds_footer_slot() {
        let machine = StateMachine::new();
        let wrapper = wrapper_of(vec!["a", "b", "c"]);
        assert_eq!(wrapper.item_count(&machine), 4);
    }

    #[test]
    fn test_item_count_without_load_more() {
        let mut machine = StateMachine::new();
        machine.set_load_more_enabled(false);
        let wrapper = wrapper_of(vec!["a", "b", "c"]);
        assert_eq!(wrapper.item_count(&machine), 3);
        assert!(!wrapper.footer_visible(&machine));
    }

    #[test]
    fn test_empty_collection_hides_footer_even_when_enabled() {
        let machine = StateMachine::new();
        assert!(machine.load_more_enabled());
        let wrapper = wrapper_of(vec![]);
        assert_eq!(wrapper.item_count(&machine), 0);
        assert!(!wrapper.footer_visible(&machine));
        assert_eq!(wrapper.footer_removed(&machine), None);
    }

    #[test]
    fn test_footer_position_is_inner_count() {
        let machine = StateMachine::new();
        let wrapper = wrapper_of(vec!["a", "b"]);
        assert!(wrapper.is_footer(&machine, 2));
        assert!(!wrapper.is_footer(&machine, 1));
        assert!(!wrapper.is_footer(&machine, 3));
    }

    #[test]
    fn test_kind_and_id_translation() {
        let machine = StateMachine::new();
        let wrapper = wrapper_of(vec!["a", "b"]);

        assert_eq!(wrapper.kind_at(&machine, 0), ItemKind(0));
        assert_eq!(wrapper.kind_at(&machine, 2), FOOTER_KIND);

        assert_eq!(wrapper.stable_id(&machine, 1), 1);
        assert_eq!(wrapper.stable_id(&machine, 2), FOOTER_STABLE_ID);
    }

    #[test]
    fn test_bind_delegates_with_same_position() {
        let machine = StateMachine::new();
        let wrapper = wrapper_of(vec!["first", "second"]);
        let mut slot = Slot::new();

        wrapper.bind(&machine, 1, &mut slot);
        assert_eq!(slot.content(), "second");
    }

    #[test]
    fn test_bind_footer_is_noop() {
        let machine = StateMachine::new();
        let wrapper = wrapper_of(vec!["first"]);
        let mut slot = Slot::new();
        slot.set_content("untouched");

        wrapper.bind(&machine, 1, &mut slot);
        assert_eq!(slot.content(), "untouched");
    }

    #[test]
    fn test_synthetic_footer_events_anchor_at_footer_index() {
        let machine = StateMachine::new();
        let wrapper = wrapper_of(vec!["a", "b", "c"]);

        assert_eq!(
            wrapper.footer_removed(&machine),
            Some(Change::Removed { start: 3, count: 1 })
        );
        assert_eq!(
            wrapper.footer_changed(&machine),
            Some(Change::Updated { start: 3, count: 1 })
        );
    }

    #[test]
    fn test_count_reads_inner_on_demand() {
        let machine = StateMachine::new();
        let mut wrapper = wrapper_of(vec!["a"]);
        assert_eq!(wrapper.item_count(&machine), 2);

        wrapper.inner_mut().push("b");
        assert_eq!(wrapper.item_count(&machine), 3);
    }
}
