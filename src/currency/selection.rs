//! Display-currency selection state
//!
//! One instance per visitor session, owned by the composition root. All
//! mutation goes through [`CurrencySelection::set_current`], which validates
//! against the registry before replacing the current code and notifying
//! subscribers. Restoring a persisted choice funnels through the same path,
//! so a stale or misconfigured value can never become current.

use super::registry::{CurrencyCode, CurrencyRegistry};
use crate::error::{Result, TourkitError};
use crate::notify::{Subscribers, SubscriptionId};
use std::sync::Arc;

/// Holder of the currently selected display currency
pub struct CurrencySelection {
    registry: Arc<CurrencyRegistry>,
    current: CurrencyCode,
    subscribers: Subscribers<CurrencyCode>,
}

impl CurrencySelection {
    /// Create a selection starting at the registry's base currency
    pub fn new(registry: Arc<CurrencyRegistry>) -> Self {
        let current = registry.base().code;
        Self {
            registry,
            current,
            subscribers: Subscribers::new(),
        }
    }

    /// The registry this selection validates against
    pub fn registry(&self) -> &CurrencyRegistry {
        &self.registry
    }

    /// The active display currency (never fails)
    pub fn current(&self) -> CurrencyCode {
        self.current
    }

    /// Switch the display currency
    ///
    /// Fails with `UnknownCurrency` when the code is not configured in the
    /// registry; the current selection and subscribers are untouched in that
    /// case. On success every subscriber is notified synchronously, including
    /// when the new code equals the old one.
    pub fn set_current(&mut self, code: CurrencyCode) -> Result<()> {
        if !self.registry.contains(code) {
            return Err(TourkitError::UnknownCurrency(code.as_str().to_string()));
        }

        self.current = code;
        log::debug!("display currency set to {}", code);
        self.subscribers.notify(&code);
        Ok(())
    }

    /// Parse-then-set, for codes arriving as text (query params, storage)
    pub fn set_current_code(&mut self, code: &str) -> Result<()> {
        self.set_current(CurrencyCode::from_code(code)?)
    }

    /// Register a listener invoked on every successful currency switch
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CurrencyCode) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener (idempotent)
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }
}
