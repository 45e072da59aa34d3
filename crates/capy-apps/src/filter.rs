//! Substring filtering over the app index.

use crate::catalog::AppIndex;
use crate::desktop_entry::DesktopApp;
use std::sync::Arc;

/// Why a filtered list is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing is indexed at all.
    NoApplications,
    /// The query matched nothing.
    NoMatches,
}

impl EmptyState {
    /// Classify an empty result using the query that produced it.
    /// Returns None when there is something to show.
    pub fn classify(query: &str, matches: &[Arc<DesktopApp>]) -> Option<Self> {
        if !matches.is_empty() {
            return None;
        }

        if query.trim().is_empty() {
            Some(EmptyState::NoApplications)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    /// User-facing message for the empty list.
    pub fn message(self) -> &'static str {
        match self {
            EmptyState::NoApplications => "No applications available",
            EmptyState::NoMatches => "No applications found",
        }
    }
}

/// Return the first `max_results` apps matching `query`, in index order.
/// An empty query matches everything.
pub fn filter(index: &AppIndex, query: &str, max_results: usize) -> Vec<Arc<DesktopApp>> {
    let needle = query.trim().to_lowercase();

    index
        .iter()
        .filter(|app| needle.is_empty() || is_match(app, &needle))
        .take(max_results)
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn is_match(app: &DesktopApp, needle: &str) -> bool {
    app.id.contains(needle)
        || app.name.to_lowercase().contains(needle)
        || app.description.to_lowercase().contains(needle)
}
