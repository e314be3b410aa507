use serde::{Deserialize, Serialize};

/// One tool's usage record.
///
/// The serialized field names are part of the persisted layout and must
/// not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub tool_id: String,
    pub tool_name: String,
    pub tool_category: String,
    /// Milliseconds since the Unix epoch
    pub last_used: i64,
    pub use_count: u64,
}

impl HistoryEntry {
    pub fn new(tool_id: &str, tool_name: &str, tool_category: &str, now: i64) -> Self {
        HistoryEntry {
            tool_id: tool_id.to_string(),
            tool_name: tool_name.to_string(),
            tool_category: tool_category.to_string(),
            last_used: now,
            use_count: 1,
        }
    }

    /// Log another use, refreshing the labels in case they were renamed
    pub fn touch(&mut self, tool_name: &str, tool_category: &str, now: i64) {
        self.tool_name = tool_name.to_string();
        self.tool_category = tool_category.to_string();
        self.last_used = now;
        self.use_count = self.use_count.saturating_add(1);
    }
}
