//! Currency codes and the validated registry of supported currencies

use crate::error::{Result, TourkitError};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency code
///
/// The set of codes the crate can represent is closed; whether a code is
/// actually offered to visitors is decided by the [`CurrencyRegistry`] a host
/// configures, so a valid code can still be rejected as unknown at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyCode {
    USD, // US Dollar
    EUR, // Euro
    GBP, // British Pound
    JPY, // Japanese Yen
    CHF, // Swiss Franc
    AUD, // Australian Dollar
    CAD, // Canadian Dollar
    NZD, // New Zealand Dollar
}

impl CurrencyCode {
    /// Parse a code from visitor-supplied text (case-insensitive)
    pub fn from_code(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::USD),
            "EUR" => Ok(CurrencyCode::EUR),
            "GBP" => Ok(CurrencyCode::GBP),
            "JPY" => Ok(CurrencyCode::JPY),
            "CHF" => Ok(CurrencyCode::CHF),
            "AUD" => Ok(CurrencyCode::AUD),
            "CAD" => Ok(CurrencyCode::CAD),
            "NZD" => Ok(CurrencyCode::NZD),
            _ => Err(TourkitError::UnknownCurrency(s.to_string())),
        }
    }

    /// Get currency code as string
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::JPY => "JPY",
            CurrencyCode::CHF => "CHF",
            CurrencyCode::AUD => "AUD",
            CurrencyCode::CAD => "CAD",
            CurrencyCode::NZD => "NZD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A supported display currency
///
/// `rate_to_base` is the number of units of this currency per unit of the
/// base currency. `minor_units` is the number of decimal places used when
/// rendering an amount (0 for zero-decimal currencies such as JPY).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub symbol: String,
    pub name: String,
    pub rate_to_base: f64,
    pub minor_units: u8,
}

impl Currency {
    /// Create a currency with the conventional two decimal places
    pub fn new(
        code: CurrencyCode,
        symbol: impl Into<String>,
        name: impl Into<String>,
        rate_to_base: f64,
    ) -> Self {
        Self {
            code,
            symbol: symbol.into(),
            name: name.into(),
            rate_to_base,
            minor_units: 2,
        }
    }

    /// Override the minor-unit precision (e.g. 0 for JPY)
    pub fn with_minor_units(mut self, minor_units: u8) -> Self {
        self.minor_units = minor_units;
        self
    }

    /// Whether this currency is the base (rate 1.0)
    pub fn is_base(&self) -> bool {
        self.rate_to_base == 1.0
    }
}

/// Registry of the currencies offered to visitors
///
/// Built once at application start and never mutated. Construction validates
/// the table: codes are unique, every rate is positive and finite, and
/// exactly one entry is the base currency (rate 1.0). The configured order
/// is the display order and is stable for the life of the process.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    currencies: Vec<Currency>,
    base: usize,
}

impl CurrencyRegistry {
    /// Build a registry from a configured table
    pub fn new(currencies: Vec<Currency>) -> Result<Self> {
        if currencies.is_empty() {
            return Err(TourkitError::InvalidRegistry(
                "at least one currency must be configured".to_string(),
            ));
        }

        let mut codes = HashSet::new();
        let mut base: Option<usize> = None;

        for currency in &currencies {
            if !codes.insert(currency.code) {
                return Err(TourkitError::InvalidRegistry(format!(
                    "duplicate currency: {}",
                    currency.code
                )));
            }

            if !currency.rate_to_base.is_finite() || currency.rate_to_base <= 0.0 {
                return Err(TourkitError::InvalidRegistry(format!(
                    "rate for {} must be positive, got: {}",
                    currency.code, currency.rate_to_base
                )));
            }

            if currency.is_base() {
                if let Some(first) = base {
                    return Err(TourkitError::InvalidRegistry(format!(
                        "both {} and {} have rate 1.0; exactly one base currency is allowed",
                        currencies[first].code, currency.code
                    )));
                }
                base = Some(codes.len() - 1);
            }
        }

        let base = base.ok_or_else(|| {
            TourkitError::InvalidRegistry("no base currency (rate 1.0) configured".to_string())
        })?;

        Ok(Self { currencies, base })
    }

    /// Default table used by the booking site (USD base)
    pub fn builtin() -> Self {
        let currencies = vec![
            Currency::new(CurrencyCode::USD, "$", "US Dollar", 1.0),
            Currency::new(CurrencyCode::EUR, "€", "Euro", 0.92),
            Currency::new(CurrencyCode::GBP, "£", "British Pound", 0.79),
            Currency::new(CurrencyCode::JPY, "¥", "Japanese Yen", 149.50).with_minor_units(0),
            Currency::new(CurrencyCode::CHF, "CHF", "Swiss Franc", 0.88),
            Currency::new(CurrencyCode::AUD, "A$", "Australian Dollar", 1.52),
            Currency::new(CurrencyCode::CAD, "C$", "Canadian Dollar", 1.36),
            Currency::new(CurrencyCode::NZD, "NZ$", "New Zealand Dollar", 1.64),
        ];

        // Invariants of `new` hold by construction: unique codes, positive
        // rates, USD as the single base entry.
        Self { currencies, base: 0 }
    }

    /// All configured currencies in display order (never empty)
    pub fn list(&self) -> &[Currency] {
        &self.currencies
    }

    /// Look up a configured currency
    pub fn get(&self, code: CurrencyCode) -> Result<&Currency> {
        self.currencies
            .iter()
            .find(|currency| currency.code == code)
            .ok_or_else(|| TourkitError::UnknownCurrency(code.as_str().to_string()))
    }

    /// Whether a code is configured in this registry
    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.currencies.iter().any(|currency| currency.code == code)
    }

    /// The base currency (rate 1.0)
    pub fn base(&self) -> &Currency {
        &self.currencies[self.base]
    }
}
