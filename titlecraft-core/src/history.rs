use tracing::debug;

/// Maximum undo/redo history entries.
pub const MAX_HISTORY: usize = 50;

/// Linear undo/redo log of owned snapshots.
///
/// Entries are clones of what was pushed, so later edits to the live value
/// never reach back into the log, and applying an entry hands out a fresh
/// clone. Pushing after an undo drops the redo branch. Once the log exceeds
/// its capacity the oldest entry is evicted.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    /// Index of the entry matching the live value; `None` while empty.
    cursor: Option<usize>,
    capacity: usize,
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// A log holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a snapshot as the newest entry.
    pub fn push(&mut self, snapshot: &T) {
        if let Some(cursor) = self.cursor {
            let dropped = self.entries.len() - (cursor + 1);
            if dropped > 0 {
                debug!("Discarding {dropped} redo entries");
            }
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(snapshot.clone());
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back one entry and overwrite `live` with it.
    ///
    /// Returns `false` (leaving `live` alone) when there is nothing to undo.
    pub fn undo(&mut self, live: &mut T) -> bool {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                live.clone_from(&self.entries[cursor - 1]);
                true
            }
            _ => false,
        }
    }

    /// Step forward one entry and overwrite `live` with it.
    ///
    /// Returns `false` (leaving `live` alone) when there is nothing to redo.
    pub fn redo(&mut self, live: &mut T) -> bool {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                live.clone_from(&self.entries[cursor + 1]);
                true
            }
            _ => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|c| &self.entries[c])
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TitleConfig;

    fn titled(text: &str) -> TitleConfig {
        TitleConfig {
            text: text.into(),
            ..TitleConfig::default()
        }
    }

    #[test]
    fn starts_empty() {
        let mut h: History<TitleConfig> = History::new();
        let mut live = TitleConfig::default();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), None);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(!h.undo(&mut live));
        assert!(!h.redo(&mut live));
        assert_eq!(live, TitleConfig::default());
    }

    #[test]
    fn seeded_log_cannot_undo() {
        let mut h = History::new();
        h.push(&titled("a"));
        assert_eq!(h.cursor(), Some(0));
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut h = History::new();
        let mut live = titled("a");
        h.push(&live);
        live.text = "b".into();
        live.shadow_length = 77.0;
        h.push(&live);
        let before = live.clone();

        assert!(h.undo(&mut live));
        assert_eq!(live, titled("a"));
        assert!(h.can_redo());

        assert!(h.redo(&mut live));
        assert_eq!(live, before);
        assert!(!h.can_redo());
    }

    #[test]
    fn live_edits_do_not_alias_entries() {
        let mut h = History::new();
        let mut live = titled("a");
        h.push(&live);
        live.text.push_str("-edited");
        assert_eq!(h.current().unwrap().text, "a");
    }

    #[test]
    fn push_after_undo_discards_redo_branch() {
        let mut h = History::new();
        let mut live = titled("a");
        for t in ["a", "b", "c"] {
            h.push(&titled(t));
        }
        h.undo(&mut live);
        h.undo(&mut live);
        assert!(h.can_redo());

        h.push(&titled("d"));
        assert!(!h.can_redo());
        assert_eq!(h.len(), 2);
        let texts: Vec<_> = h.entries().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["a", "d"]);
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let mut h = History::new();
        for i in 0..60 {
            h.push(&titled(&i.to_string()));
        }
        assert_eq!(h.len(), MAX_HISTORY);
        assert_eq!(h.cursor(), Some(MAX_HISTORY - 1));
        assert_eq!(h.entries()[0].text, "10");
        assert_eq!(h.current().unwrap().text, "59");
    }

    #[test]
    fn undo_stops_at_oldest_retained() {
        let mut h = History::with_capacity(3);
        let mut live = titled("x");
        for t in ["a", "b", "c", "d"] {
            h.push(&titled(t));
        }
        while h.undo(&mut live) {}
        assert_eq!(live.text, "b");
        assert_eq!(h.cursor(), Some(0));
    }

    #[test]
    fn redo_at_tail_is_noop() {
        let mut h = History::new();
        let mut live = titled("a");
        h.push(&live);
        live.text = "changed".into();
        assert!(!h.redo(&mut live));
        assert_eq!(live.text, "changed");
    }
}
