use crate::document::ViewId;
use crate::segments::SegmentId;
use crate::text::Text;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

/// Last text computed for one push segment in one view.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Text,
    /// Bumped on every write. Only for tests and debugging.
    pub generation: u64,
}

/// Per-view storage for push segment output.
///
/// Writes are last-writer-wins; redraws read whatever is current.
#[derive(Debug, Default)]
pub struct CacheStore {
    data: DashMap<(SegmentId, ViewId), CacheEntry>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, segment: &SegmentId, view: ViewId) -> Option<Text> {
        self.data
            .get(&(segment.clone(), view))
            .map(|entry| entry.value.clone())
    }

    /// Overwrite the entry, creating it if the view has none yet.
    /// Returns the new generation.
    pub fn put(&self, segment: SegmentId, view: ViewId, text: Text) -> u64 {
        match self.data.entry((segment, view)) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.value = text;
                entry.generation += 1;
                entry.generation
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CacheEntry {
                    value: text,
                    generation: 1,
                });
                1
            }
        }
    }

    pub fn generation(&self, segment: &SegmentId, view: ViewId) -> Option<u64> {
        self.data
            .get(&(segment.clone(), view))
            .map(|entry| entry.generation)
    }

    /// Purge every entry belonging to `view`. Returns how many were removed.
    pub fn drop_view(&self, view: ViewId) -> usize {
        let before = self.data.len();
        self.data.retain(|(_, entry_view), _| *entry_view != view);
        let removed = before.saturating_sub(self.data.len());
        debug!(%view, removed, "dropped cached segments");
        removed
    }

    pub fn clear(&self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get_returns_same_text() {
        let cache = CacheStore::new();
        let text = Text::plain("✔ main  ");
        cache.put(SegmentId::VC, ViewId(1), text.clone());
        assert_eq!(cache.get(&SegmentId::VC, ViewId(1)), Some(text));
    }

    #[test]
    fn test_generation_increments_per_write() {
        let cache = CacheStore::new();
        assert_eq!(cache.put(SegmentId::VC, ViewId(1), Text::plain("a")), 1);
        assert_eq!(cache.put(SegmentId::VC, ViewId(1), Text::plain("b")), 2);
        assert_eq!(cache.generation(&SegmentId::VC, ViewId(1)), Some(2));
        assert_eq!(cache.generation(&SegmentId::VC, ViewId(2)), None);
    }

    #[test]
    fn test_views_do_not_collide() {
        let cache = CacheStore::new();
        cache.put(SegmentId::VC, ViewId(1), Text::plain("a"));
        cache.put(SegmentId::VC, ViewId(2), Text::plain("b"));
        assert_eq!(cache.get(&SegmentId::VC, ViewId(1)), Some(Text::plain("a")));
        assert_eq!(cache.get(&SegmentId::VC, ViewId(2)), Some(Text::plain("b")));
    }

    #[test]
    fn test_drop_view_purges_only_that_view() {
        let cache = CacheStore::new();
        cache.put(SegmentId::VC, ViewId(1), Text::plain("a"));
        cache.put(SegmentId::DIAGNOSTICS, ViewId(1), Text::plain("b"));
        cache.put(SegmentId::VC, ViewId(2), Text::plain("c"));

        assert_eq!(cache.drop_view(ViewId(1)), 2);
        assert_eq!(cache.get(&SegmentId::VC, ViewId(1)), None);
        assert_eq!(cache.get(&SegmentId::DIAGNOSTICS, ViewId(1)), None);
        assert_eq!(cache.len(), 1);
    }
}
