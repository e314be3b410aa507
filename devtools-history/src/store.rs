use crate::clock::{Clock, SystemClock};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::entry::HistoryEntry;
use crate::error::HistoryError;
use crate::kv::KeyValueStore;
use crate::stats::HistoryStats;
use crate::{DEFAULT_LIMIT, HISTORY_KEY, MAX_HISTORY_ENTRIES};
use tracing::debug;

/// Bounded log of tool uses, persisted as one value in a key-value store.
///
/// Nothing is cached between calls: every operation loads the stored log,
/// and every write replaces it whole. Two writers sharing the same slot
/// race with last-write-wins; there is no merge.
///
/// No operation fails from the caller's point of view. Store and decoding
/// failures go to the [`DiagnosticSink`] and the log is treated as empty
/// (reads) or left untouched (writes).
pub struct UsageHistoryStore<S: KeyValueStore> {
    store: S,
    clock: Box<dyn Clock + Send + Sync>,
    sink: Box<dyn DiagnosticSink + Send + Sync>,
    capacity: usize,
}

impl<S: KeyValueStore> UsageHistoryStore<S> {
    pub fn new(store: S) -> Self {
        UsageHistoryStore {
            store,
            clock: Box::new(SystemClock),
            sink: Box::new(TracingSink),
            capacity: MAX_HISTORY_ENTRIES,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_diagnostics(mut self, sink: impl DiagnosticSink + Send + Sync + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Lower the eviction bound. Clamped to `1..=MAX_HISTORY_ENTRIES`.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.clamp(1, MAX_HISTORY_ENTRIES);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the persisted log, most recent first
    pub fn load(&self) -> Vec<HistoryEntry> {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                self.sink.report(&err);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(entries) => entries,
            Err(source) => {
                self.sink.report(&HistoryError::MalformedPersistedData {
                    key: HISTORY_KEY.to_string(),
                    source,
                });
                Vec::new()
            }
        }
    }

    /// Log a use of a tool
    pub fn record(&self, tool_id: &str, tool_name: &str, tool_category: &str) {
        let now = self.clock.now_millis();
        let mut entries = self.load();

        match entries.iter_mut().find(|e| e.tool_id == tool_id) {
            Some(entry) => {
                entry.touch(tool_name, tool_category, now);
                debug!("record {} (uses: {})", entry.tool_id, entry.use_count);
            }
            None => {
                debug!("record {} (new)", tool_id);
                // new tools rank first among equal timestamps
                entries.insert(0, HistoryEntry::new(tool_id, tool_name, tool_category, now));
            }
        }

        // sort_by is stable: equal timestamps keep their prior order
        entries.sort_by(|a, b| b.last_used.cmp(&a.last_used));
        if entries.len() > self.capacity {
            for evicted in &entries[self.capacity..] {
                debug!("evict {} (last used: {})", evicted.tool_id, evicted.last_used);
            }
            entries.truncate(self.capacity);
        }

        self.persist(&entries);
    }

    /// Drop a tool from the log. The log is rewritten even if nothing matched.
    pub fn remove(&self, tool_id: &str) {
        let mut entries = self.load();
        entries.retain(|e| e.tool_id != tool_id);
        self.persist(&entries);
    }

    /// Delete the persisted slot
    pub fn clear(&self) {
        if let Err(err) = self.store.delete(HISTORY_KEY) {
            self.sink.report(&err);
        } else {
            debug!("cleared tool history");
        }
    }

    /// The `limit` most recently used tools
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        let mut entries = self.load();
        entries.truncate(limit);
        entries
    }

    pub fn recent_default(&self) -> Vec<HistoryEntry> {
        self.recent(DEFAULT_LIMIT)
    }

    /// The `limit` most used tools. This ordering is never persisted.
    pub fn most_used(&self, limit: usize) -> Vec<HistoryEntry> {
        let mut entries = self.load();
        entries.sort_by(|a, b| b.use_count.cmp(&a.use_count));
        entries.truncate(limit);
        entries
    }

    pub fn most_used_default(&self) -> Vec<HistoryEntry> {
        self.most_used(DEFAULT_LIMIT)
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.load().iter().any(|e| e.tool_id == tool_id)
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_entries(&self.load())
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        let result = serde_json::to_string(entries)
            .map_err(HistoryError::from)
            .and_then(|raw| self.store.set(HISTORY_KEY, &raw));
        if let Err(err) = result {
            self.sink.report(&err);
        }
    }
}
