//! Comparison page entry policy
//!
//! The comparison page accepts tour ids from the URL, so the selection
//! bounds cannot be trusted to hold on entry. Untrusted id lists are
//! deduplicated and clamped to the limit before any tour data is fetched,
//! unresolvable ids are dropped, and the bounds are re-checked after
//! filtering. A request that cannot produce a valid selection redirects to
//! the listing page instead of erroring.

use super::MIN_COMPARE;
use crate::tour::{Locale, Tour, TourSource};
use crate::types::TourId;
use hashbrown::HashSet;

/// Outcome of a comparison page request
#[derive(Debug, Clone)]
pub enum EntryDecision {
    /// Enough tours resolved; render them side by side
    Render(Vec<Tour>),
    /// Fewer than the minimum survived filtering; redirect to the listing
    Redirect,
}

impl EntryDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, EntryDecision::Redirect)
    }
}

/// Parse a comma-separated id list from a URL query value
///
/// Malformed tokens are discarded with a warning; duplicates keep their
/// first occurrence.
pub fn parse_compare_query(raw: &str) -> Vec<TourId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        match token.parse::<TourId>() {
            Ok(id) => {
                if seen.insert(id) {
                    ids.push(id);
                }
            }
            Err(_) => {
                log::warn!("discarding malformed tour id {:?} in comparison query", token);
            }
        }
    }

    ids
}

/// Resolve an untrusted id list into a renderable comparison
///
/// Ids are deduplicated and clamped to `limit` before the source is
/// consulted, so a crafted URL cannot trigger unbounded fetches. Ids the
/// source cannot resolve are dropped; if fewer than two tours survive, the
/// decision is a redirect.
pub fn resolve_entry(
    source: &dyn TourSource,
    ids: &[TourId],
    locale: Locale,
    limit: usize,
) -> EntryDecision {
    let mut seen = HashSet::new();
    let mut wanted: Vec<TourId> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();

    if wanted.len() > limit {
        log::warn!(
            "comparison request for {} tours truncated to the {}-tour limit",
            wanted.len(),
            limit
        );
        wanted.truncate(limit);
    }

    if wanted.len() < MIN_COMPARE {
        log::debug!(
            "comparison request with {} unique tours redirected to listing",
            wanted.len()
        );
        return EntryDecision::Redirect;
    }

    let mut tours = Vec::with_capacity(wanted.len());
    for id in wanted {
        match source.tour_by_id(id, locale) {
            Ok(tour) => tours.push(tour),
            Err(err) => {
                log::warn!("dropping unresolvable tour {} from comparison: {}", id, err);
            }
        }
    }

    if tours.len() < MIN_COMPARE {
        log::debug!(
            "only {} tours resolved, redirecting comparison request to listing",
            tours.len()
        );
        return EntryDecision::Redirect;
    }

    EntryDecision::Render(tours)
}
