//! Tour records and the content-source boundary
//!
//! The comparison core operates on opaque [`TourId`]s; resolving an id into
//! a displayable record is the job of a [`TourSource`] implementation backed
//! by the content API. [`InMemoryTourSource`] is the in-process
//! implementation used by tests and demos.

use crate::error::{Result, TourkitError};
use crate::types::{Price, TourId};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Site locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    Es,
    De,
    Fr,
}

impl Locale {
    /// Get the BCP 47 language tag
    pub fn as_tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::De => "de",
            Locale::Fr => "fr",
        }
    }

    /// Parse from a language tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            "de" => Some(Locale::De),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Displayable tour record
///
/// `base_price` is expressed in the base currency; display conversion is the
/// formatter's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: TourId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub base_price: Price,
}

impl Tour {
    pub fn new(
        id: TourId,
        title: impl Into<String>,
        location: impl Into<String>,
        base_price: Price,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            location: location.into(),
            base_price,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Boundary to the tour content store
pub trait TourSource {
    /// Resolve an id into a localized tour record
    fn tour_by_id(&self, id: TourId, locale: Locale) -> Result<Tour>;
}

/// In-memory tour source for tests and demos
///
/// Records are keyed by id and locale. A lookup falls back to the default
/// locale when no translation exists, matching how the content API serves
/// untranslated entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTourSource {
    tours: HashMap<(TourId, Locale), Tour>,
}

impl InMemoryTourSource {
    pub fn new() -> Self {
        Self {
            tours: HashMap::new(),
        }
    }

    /// Register a tour under a locale
    pub fn add_tour(&mut self, locale: Locale, tour: Tour) {
        self.tours.insert((tour.id, locale), tour);
    }

    /// Number of registered records (across all locales)
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

impl TourSource for InMemoryTourSource {
    fn tour_by_id(&self, id: TourId, locale: Locale) -> Result<Tour> {
        self.tours
            .get(&(id, locale))
            .or_else(|| self.tours.get(&(id, Locale::default())))
            .cloned()
            .ok_or(TourkitError::TourNotFound(id))
    }
}
