mod clock;
mod diagnostics;
mod entry;
mod error;
mod kv;
mod sqlite;
mod stats;
mod store;


/// Key the whole log is stored under
pub const HISTORY_KEY: &str = "devtools_tool_history";

/// Default bound on the number of tools kept in the log
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Default size of the `recent` and `most_used` views
pub const DEFAULT_LIMIT: usize = 5;

pub use crate::clock::{Clock, ManualClock, SystemClock, current_time_millis};
pub use crate::diagnostics::{CollectingSink, DiagnosticSink, TracingSink};
pub use crate::entry::HistoryEntry;
pub use crate::error::{HistoryError, Result};
pub use crate::kv::{FileStore, KeyValueStore, MemoryStore};
pub use crate::sqlite::SqliteStore;
pub use crate::stats::HistoryStats;
pub use crate::store::UsageHistoryStore;
