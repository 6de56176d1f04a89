//! Core types and constants

/// Unique identifier for tours
pub type TourId = u64;

/// Price type (using f64 for precision)
///
/// Raw prices are always expressed in the base currency; conversion to a
/// display currency happens at formatting time.
pub type Price = f64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_id_is_hashable_key() {
        let mut set = hashbrown::HashSet::new();
        let id: TourId = 42;
        assert!(set.insert(id));
        assert!(!set.insert(id));
    }
}
