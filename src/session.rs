//! Visitor session composition root
//!
//! The application constructs exactly one [`Session`] per visitor and
//! threads references to it; there is no ambient global state. The session
//! owns the two mutable state holders (display currency and comparison
//! selection) and the optional persistence collaborator, and is the only
//! place the three are wired together.

use crate::compare::ComparisonList;
use crate::currency::{format_price, CurrencyCode, CurrencyRegistry, CurrencySelection};
use crate::error::Result;
use crate::storage::SelectionStore;
use crate::types::Price;
use std::sync::Arc;

/// Per-visitor state: display currency plus comparison selection
pub struct Session {
    currency: CurrencySelection,
    comparison: ComparisonList,
    store: Option<Box<dyn SelectionStore>>,
}

impl Session {
    /// Create a session with no persistence
    pub fn new(registry: Arc<CurrencyRegistry>) -> Self {
        Self {
            currency: CurrencySelection::new(registry),
            comparison: ComparisonList::new(),
            store: None,
        }
    }

    /// Create a session restoring a previously persisted currency choice
    ///
    /// Restoration goes through the same validation as any other currency
    /// switch; a persisted code the registry no longer carries is dropped
    /// with a warning and the base currency stands. Load failures are
    /// best-effort and never abort session creation.
    pub fn with_store(registry: Arc<CurrencyRegistry>, store: Box<dyn SelectionStore>) -> Self {
        let mut session = Self::new(registry);

        match store.load() {
            Ok(Some(code)) => {
                if let Err(err) = session.currency.set_current(code) {
                    log::warn!("ignoring persisted currency {}: {}", code, err);
                }
            }
            Ok(None) => {}
            Err(err) => {
                log::warn!("failed to load persisted currency selection: {}", err);
            }
        }

        session.store = Some(store);
        session
    }

    /// Read access to the currency selection
    pub fn currency(&self) -> &CurrencySelection {
        &self.currency
    }

    /// Mutable access to the currency selection (for subscriptions)
    pub fn currency_mut(&mut self) -> &mut CurrencySelection {
        &mut self.currency
    }

    /// Read access to the comparison selection
    pub fn comparison(&self) -> &ComparisonList {
        &self.comparison
    }

    /// Mutable access to the comparison selection
    pub fn comparison_mut(&mut self) -> &mut ComparisonList {
        &mut self.comparison
    }

    /// Switch the display currency and persist the choice
    ///
    /// Persistence is fire-and-forget: a failed save is logged and the
    /// switch still succeeds.
    pub fn set_currency(&mut self, code: CurrencyCode) -> Result<()> {
        self.currency.set_current(code)?;

        if let Some(store) = &self.store {
            if let Err(err) = store.save(code) {
                log::warn!("failed to persist currency selection: {}", err);
            }
        }

        Ok(())
    }

    /// Format a base-currency price in the session's display currency
    pub fn display_price(&self, amount_in_base: Price) -> Result<String> {
        format_price(
            self.currency.registry(),
            amount_in_base,
            self.currency.current(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TourkitError;
    use crate::storage::InMemoryStore;

    fn registry() -> Arc<CurrencyRegistry> {
        Arc::new(CurrencyRegistry::builtin())
    }

    #[test]
    fn test_new_session_starts_at_base() {
        let session = Session::new(registry());
        assert_eq!(session.currency().current(), CurrencyCode::USD);
        assert_eq!(session.comparison().count(), 0);
    }

    #[test]
    fn test_restores_persisted_currency() {
        let store = Box::new(InMemoryStore::with_saved(CurrencyCode::EUR));
        let session = Session::with_store(registry(), store);
        assert_eq!(session.currency().current(), CurrencyCode::EUR);
    }

    #[test]
    fn test_persisted_code_missing_from_registry_is_dropped() {
        let registry = Arc::new(
            CurrencyRegistry::new(vec![crate::currency::Currency::new(
                CurrencyCode::USD,
                "$",
                "US Dollar",
                1.0,
            )])
            .unwrap(),
        );

        let store = Box::new(InMemoryStore::with_saved(CurrencyCode::EUR));
        let session = Session::with_store(registry, store);
        assert_eq!(session.currency().current(), CurrencyCode::USD);
    }

    #[test]
    fn test_set_currency_persists() {
        use std::cell::RefCell;
        use std::rc::Rc;

        struct SharedStore(Rc<RefCell<Option<CurrencyCode>>>);

        impl SelectionStore for SharedStore {
            fn load(&self) -> Result<Option<CurrencyCode>> {
                Ok(*self.0.borrow())
            }
            fn save(&self, code: CurrencyCode) -> Result<()> {
                *self.0.borrow_mut() = Some(code);
                Ok(())
            }
        }

        let slot = Rc::new(RefCell::new(None));
        let mut session = Session::with_store(registry(), Box::new(SharedStore(Rc::clone(&slot))));

        session.set_currency(CurrencyCode::GBP).unwrap();
        assert_eq!(session.currency().current(), CurrencyCode::GBP);
        assert_eq!(*slot.borrow(), Some(CurrencyCode::GBP));
    }

    #[test]
    fn test_rejected_set_does_not_persist() {
        let registry = Arc::new(
            CurrencyRegistry::new(vec![crate::currency::Currency::new(
                CurrencyCode::USD,
                "$",
                "US Dollar",
                1.0,
            )])
            .unwrap(),
        );

        let mut session = Session::with_store(registry, Box::new(InMemoryStore::new()));
        assert!(matches!(
            session.set_currency(CurrencyCode::EUR),
            Err(TourkitError::UnknownCurrency(_))
        ));
        assert_eq!(session.currency().current(), CurrencyCode::USD);
    }

    #[test]
    fn test_display_price_follows_selection() {
        let mut session = Session::new(registry());
        assert_eq!(session.display_price(100.0).unwrap(), "$100.00");

        session.set_currency(CurrencyCode::EUR).unwrap();
        assert_eq!(session.display_price(100.0).unwrap(), "€92.00");
    }
}
