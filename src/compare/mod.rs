//! Tour comparison selection
//!
//! Visitors pick between two and four tours to view side by side. The
//! selection is a bounded, insertion-ordered set owned by
//! [`ComparisonList`]; the floating action bar and the comparison table
//! subscribe to it and re-render on change. The bounds are a business rule:
//! the comparison layout does not scale past four columns, and a single
//! tour has nothing to be compared against.
//!
//! The comparison page itself re-checks the same bounds on entry (see
//! [`entry`]), since it can be reached through a raw URL that bypasses the
//! selection entirely.

pub mod entry;

pub use entry::{parse_compare_query, resolve_entry, EntryDecision};

use crate::error::{Result, TourkitError};
use crate::notify::{Subscribers, SubscriptionId};
use crate::types::TourId;

/// Most tours a visitor can select for comparison
pub const MAX_COMPARE: usize = 4;

/// Fewest tours that make a comparison meaningful
pub const MIN_COMPARE: usize = 2;

/// What a [`ComparisonList::toggle`] call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Bounded, insertion-ordered set of tours selected for comparison
///
/// Adding past the limit is rejected, never silently evicts. All reads and
/// mutation go through the methods here; subscribers observe the new
/// selection after the mutation has fully applied.
pub struct ComparisonList {
    selected: Vec<TourId>,
    limit: usize,
    subscribers: Subscribers<[TourId]>,
}

impl ComparisonList {
    /// Create an empty selection with the default limit
    pub fn new() -> Self {
        Self::with_limit(MAX_COMPARE)
    }

    /// Create an empty selection with a custom upper bound
    pub fn with_limit(limit: usize) -> Self {
        Self {
            selected: Vec::with_capacity(limit),
            limit,
            subscribers: Subscribers::new(),
        }
    }

    /// Select a tour, appending it at the end
    ///
    /// Fails with `AlreadySelected` for a present id and `ComparisonFull`
    /// at the limit; the selection is unchanged on failure. The caller is
    /// expected to surface the full condition as a "remove one first"
    /// message.
    pub fn add(&mut self, id: TourId) -> Result<()> {
        if self.selected.contains(&id) {
            return Err(TourkitError::AlreadySelected(id));
        }

        if self.selected.len() >= self.limit {
            return Err(TourkitError::ComparisonFull {
                count: self.selected.len(),
                limit: self.limit,
            });
        }

        self.selected.push(id);
        log::debug!(
            "tour {} selected for comparison ({} of {})",
            id,
            self.selected.len(),
            self.limit
        );
        self.subscribers.notify(&self.selected);
        Ok(())
    }

    /// Deselect a tour, preserving the order of the rest
    pub fn remove(&mut self, id: TourId) -> Result<()> {
        match self.selected.iter().position(|&selected| selected == id) {
            Some(index) => {
                self.selected.remove(index);
                log::debug!("tour {} removed from comparison", id);
                self.subscribers.notify(&self.selected);
                Ok(())
            }
            None => Err(TourkitError::NotSelected(id)),
        }
    }

    /// Deselect if present, otherwise select
    ///
    /// A toggle that hits the limit reports `ComparisonFull` exactly as
    /// [`ComparisonList::add`] would and leaves the selection untouched.
    pub fn toggle(&mut self, id: TourId) -> Result<ToggleOutcome> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(ToggleOutcome::Removed)
        } else {
            self.add(id)?;
            Ok(ToggleOutcome::Added)
        }
    }

    /// Empty the selection
    ///
    /// Always succeeds; subscribers are notified only when the selection was
    /// non-empty.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }

        self.selected.clear();
        log::debug!("comparison selection cleared");
        self.subscribers.notify(&self.selected);
    }

    /// Whether a tour is currently selected
    pub fn contains(&self, id: TourId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected ids in insertion order
    pub fn selected(&self) -> &[TourId] {
        &self.selected
    }

    /// Number of selected tours
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Whether the next `add` would be rejected
    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.limit
    }

    /// Configured upper bound
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Whether enough tours are selected to open the comparison page
    pub fn can_compare(&self) -> bool {
        (MIN_COMPARE..=self.limit).contains(&self.selected.len())
    }

    /// Register a listener invoked with the selection after each change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[TourId]) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener (idempotent)
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}

impl Default for ComparisonList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_add_up_to_limit_then_reject() {
        let mut list = ComparisonList::new();

        for id in 1..=4 {
            list.add(id).unwrap();
        }
        assert_eq!(list.count(), 4);
        assert!(list.is_full());

        let result = list.add(5);
        assert!(matches!(
            result,
            Err(TourkitError::ComparisonFull { count: 4, limit: 4 })
        ));
        assert_eq!(list.count(), 4);
        assert!(!list.contains(5));
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut list = ComparisonList::new();
        list.add(1).unwrap();
        list.add(2).unwrap();

        assert!(matches!(list.add(2), Err(TourkitError::AlreadySelected(2))));
        assert_eq!(list.selected(), &[1, 2]);
    }

    #[test]
    fn test_remove_then_readd_appends_at_end() {
        let mut list = ComparisonList::new();
        for id in 1..=4 {
            list.add(id).unwrap();
        }

        list.remove(2).unwrap();
        assert_eq!(list.selected(), &[1, 3, 4]);

        list.add(2).unwrap();
        assert_eq!(list.selected(), &[1, 3, 4, 2]);
    }

    #[test]
    fn test_remove_absent_fails() {
        let mut list = ComparisonList::new();
        list.add(1).unwrap();
        assert!(matches!(list.remove(9), Err(TourkitError::NotSelected(9))));
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut list = ComparisonList::new();

        assert_eq!(list.toggle(1).unwrap(), ToggleOutcome::Added);
        assert!(list.contains(1));

        assert_eq!(list.toggle(1).unwrap(), ToggleOutcome::Removed);
        assert!(!list.contains(1));
    }

    #[test]
    fn test_toggle_surfaces_overflow_and_keeps_selection() {
        let mut list = ComparisonList::new();
        for id in 1..=4 {
            list.add(id).unwrap();
        }

        let result = list.toggle(5);
        assert!(matches!(result, Err(TourkitError::ComparisonFull { .. })));
        assert_eq!(list.selected(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_notifies_only_when_non_empty() {
        let mut list = ComparisonList::new();
        let fired = Rc::new(Cell::new(0u32));

        let fired_clone = Rc::clone(&fired);
        list.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        list.clear();
        assert_eq!(fired.get(), 0);

        list.add(1).unwrap();
        list.add(2).unwrap();
        assert_eq!(fired.get(), 2);

        list.clear();
        assert_eq!(fired.get(), 3);
        assert_eq!(list.count(), 0);

        list.clear();
        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn test_can_compare_bounds() {
        let mut list = ComparisonList::new();
        assert!(!list.can_compare());

        list.add(1).unwrap();
        assert!(!list.can_compare());

        list.add(2).unwrap();
        assert!(list.can_compare());

        list.add(3).unwrap();
        list.add(4).unwrap();
        assert!(list.can_compare());
    }

    #[test]
    fn test_failed_add_does_not_notify() {
        let mut list = ComparisonList::new();
        for id in 1..=4 {
            list.add(id).unwrap();
        }

        let fired = Rc::new(Cell::new(0u32));
        let fired_clone = Rc::clone(&fired);
        list.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        let _ = list.add(5);
        let _ = list.add(1);
        let _ = list.remove(9);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_subscriber_sees_selection_after_mutation() {
        let mut list = ComparisonList::new();
        let observed: Rc<RefCell<Vec<TourId>>> = Rc::new(RefCell::new(Vec::new()));

        let observed_clone = Rc::clone(&observed);
        list.subscribe(move |ids| *observed_clone.borrow_mut() = ids.to_vec());

        list.add(7).unwrap();
        list.add(3).unwrap();
        assert_eq!(*observed.borrow(), vec![7, 3]);

        list.remove(7).unwrap();
        assert_eq!(*observed.borrow(), vec![3]);
    }

    #[test]
    fn test_custom_limit() {
        let mut list = ComparisonList::with_limit(2);
        list.add(1).unwrap();
        list.add(2).unwrap();
        assert!(matches!(
            list.add(3),
            Err(TourkitError::ComparisonFull { count: 2, limit: 2 })
        ));
        assert!(list.can_compare());
    }
}
