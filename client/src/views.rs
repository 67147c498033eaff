//! Read-only view state fed by backend snapshots.

use crate::error::ClientError;
use crate::model::RankingEntry;

/// Last good snapshot of some list, plus the load state around it.
///
/// A snapshot replaces the items wholesale; nothing is merged. A failed
/// load keeps the previous items and records the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotView<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for SnapshotView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SnapshotView<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, err: &ClientError) {
        self.loading = false;
        self.error = Some(err.user_message());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Orders a ranking by points, highest first. Equal points keep their
/// incoming order.
pub fn sort_by_points(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| b.points.cmp(&a.points));
}
