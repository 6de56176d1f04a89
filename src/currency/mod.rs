//! Currency registry, price formatting, and display-currency selection
//!
//! Raw tour prices are stored in the base currency. This module provides the
//! static table of supported display currencies, the conversion/formatting
//! pipeline, and the per-session holder of the currently selected currency.
//!
//! # Components
//!
//! - **registry**: [`CurrencyCode`], [`Currency`], and the validated
//!   [`CurrencyRegistry`] table
//! - **format**: pure conversion and rendering of base-currency amounts
//! - **selection**: the mutable "current display currency" state with
//!   synchronous change notification
//!
//! # Example
//!
//! ```rust
//! use tourkit::currency::{format_price, CurrencyCode, CurrencyRegistry};
//!
//! let registry = CurrencyRegistry::builtin();
//!
//! let label = format_price(&registry, 1500.0, CurrencyCode::USD).unwrap();
//! assert_eq!(label, "$1,500.00");
//! ```

pub mod format;
pub mod registry;
pub mod selection;

pub use format::{convert_to, format_price};
pub use registry::{Currency, CurrencyCode, CurrencyRegistry};
pub use selection::CurrencySelection;
