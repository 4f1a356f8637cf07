// ── Cached collection unit ──
//
// One invalidate-then-refetch cache per source collection. A refresh
// replaces the snapshot wholesale; nothing is ever patched in place, so
// consumers always observe either the previous complete snapshot or the
// next one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

/// A single cached collection behind `watch` channels.
///
/// The snapshot is an `Arc<Vec<Arc<T>>>` rebuilt on every replace —
/// cheap to clone, impossible to observe half-updated. The loading flag
/// covers the invalidate→refetch window so consumers (e.g. selection
/// revalidation) can tell "empty" from "still in flight".
pub(crate) struct Collection<T> {
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
    loading: watch::Sender<bool>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl<T: Send + Sync + 'static> Collection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (loading, _) = watch::channel(false);
        let (last_refresh, _) = watch::channel(None);

        Self {
            snapshot,
            loading,
            last_refresh,
        }
    }

    /// Replace the whole snapshot and clear the loading flag.
    pub(crate) fn replace(&self, items: Vec<T>) {
        let values: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
        let _ = self.last_refresh.send(Some(Utc::now()));
        let _ = self.loading.send(false);
    }

    /// Mark the collection as stale; a refetch is expected to follow.
    pub(crate) fn invalidate(&self) {
        let _ = self.loading.send(true);
    }

    /// Clear the loading flag without replacing (refetch failed — the
    /// previous snapshot stays authoritative).
    pub(crate) fn abort_refresh(&self) {
        let _ = self.loading.send(false);
    }

    /// Current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub(crate) fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_not_loading() {
        let col: Collection<String> = Collection::new();
        assert!(col.snapshot().is_empty());
        assert!(!col.is_loading());
        assert!(col.last_refresh().is_none());
    }

    #[test]
    fn replace_swaps_whole_snapshot() {
        let col: Collection<String> = Collection::new();
        col.replace(vec!["a".into(), "b".into()]);
        assert_eq!(col.len(), 2);

        col.replace(vec!["c".into()]);
        let snap = col.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(*snap[0], "c");
    }

    #[test]
    fn invalidate_then_replace_clears_loading() {
        let col: Collection<String> = Collection::new();
        col.invalidate();
        assert!(col.is_loading());

        col.replace(vec!["a".into()]);
        assert!(!col.is_loading());
        assert!(col.last_refresh().is_some());
    }

    #[test]
    fn abort_refresh_keeps_previous_snapshot() {
        let col: Collection<String> = Collection::new();
        col.replace(vec!["a".into()]);
        col.invalidate();
        col.abort_refresh();

        assert!(!col.is_loading());
        assert_eq!(col.len(), 1);
    }

    #[test]
    fn subscribers_see_replacements() {
        let col: Collection<String> = Collection::new();
        let mut rx = col.subscribe();
        col.replace(vec!["a".into()]);

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
    }
}
