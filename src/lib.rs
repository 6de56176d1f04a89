//! # Tourkit
//!
//! Selection and pricing core for a multi-currency tour booking site.
//!
//! Tourkit owns the two pieces of per-visitor state the site's UI renders
//! from: which display currency is active, and which tours are selected for
//! side-by-side comparison. Routing, rendering, the content API, and
//! payments all live outside and talk to this crate through the boundary
//! traits ([`tour::TourSource`], [`storage::SelectionStore`]).
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use tourkit::prelude::*;
//!
//! let registry = Arc::new(CurrencyRegistry::builtin());
//! let mut session = Session::new(registry);
//!
//! session.comparison_mut().add(11)?;
//! session.comparison_mut().add(23)?;
//! assert!(session.comparison().can_compare());
//!
//! session.set_currency(CurrencyCode::EUR)?;
//! let label = session.display_price(100.0)?;
//! assert!(label.starts_with('€'));
//! # Ok::<(), TourkitError>(())
//! ```

pub mod compare;
pub mod currency;
pub mod error;
pub mod notify;
pub mod session;
pub mod storage;
pub mod tour;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::compare::{
        ComparisonList, EntryDecision, ToggleOutcome, MAX_COMPARE, MIN_COMPARE,
    };
    pub use crate::currency::{
        format_price, Currency, CurrencyCode, CurrencyRegistry, CurrencySelection,
    };
    pub use crate::error::{Result, TourkitError};
    pub use crate::notify::SubscriptionId;
    pub use crate::session::Session;
    pub use crate::storage::SelectionStore;
    pub use crate::tour::{Locale, Tour, TourSource};
    pub use crate::types::{Price, TourId};
}
