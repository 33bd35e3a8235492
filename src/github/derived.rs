//! Views computed locally from plain API listings.
//!
//! GitHub's REST API has neither a "pinned repositories" nor a
//! "contributions" endpoint, so both are approximated here.

use crate::github::models::{Event, Repository};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Maximum number of pinned-like repositories
pub const PINNED_LIMIT: usize = 6;

/// Number of recent events the contribution tally looks at. Older activity is
/// not paged in.
pub const CONTRIBUTION_WINDOW: u32 = 100;

/// Non-fork repositories, most recently updated first, capped at [`PINNED_LIMIT`]
pub fn select_pinned(repos: Vec<Repository>) -> Vec<Repository> {
    let mut pinned: Vec<Repository> = repos.into_iter().filter(|repo| !repo.fork).collect();
    pinned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    pinned.truncate(PINNED_LIMIT);
    pinned
}

/// Count events per UTC calendar day
pub fn tally_contributions(events: &[Event]) -> BTreeMap<NaiveDate, u32> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.created_at.date_naive()).or_insert(0) += 1;
    }
    counts
}
