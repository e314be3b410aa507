use crate::entry::HistoryEntry;
use serde::Serialize;

/// Aggregate view over the history log
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_tools: usize,
    pub total_uses: u64,
    pub most_used_tool: Option<HistoryEntry>,
    pub average_uses_per_tool: u64,
}

impl HistoryStats {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let total_tools = entries.len();
        let total_uses = entries
            .iter()
            .map(|e| e.use_count)
            .fold(0u64, u64::saturating_add);

        // first entry wins a tie, so only replace on a strictly greater count
        let mut most_used_tool: Option<&HistoryEntry> = None;
        for entry in entries {
            if most_used_tool.is_none_or(|best| entry.use_count > best.use_count) {
                most_used_tool = Some(entry);
            }
        }

        let average_uses_per_tool = if total_tools == 0 {
            0
        } else {
            (total_uses as f64 / total_tools as f64).round() as u64
        };

        HistoryStats {
            total_tools,
            total_uses,
            most_used_tool: most_used_tool.cloned(),
            average_uses_per_tool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, use_count: u64) -> HistoryEntry {
        HistoryEntry {
            use_count,
            ..HistoryEntry::new(id, id, "Text", 0)
        }
    }

    #[test]
    fn test_empty() {
        let stats = HistoryStats::from_entries(&[]);
        assert_eq!(stats.total_tools, 0);
        assert_eq!(stats.total_uses, 0);
        assert_eq!(stats.most_used_tool, None);
        assert_eq!(stats.average_uses_per_tool, 0);
    }

    #[test]
    fn test_tie_keeps_first() {
        let stats = HistoryStats::from_entries(&[entry("a", 3), entry("b", 3), entry("c", 1)]);
        assert_eq!(stats.most_used_tool.unwrap().tool_id, "a");
        assert_eq!(stats.total_uses, 7);
        // 7 / 3 = 2.33
        assert_eq!(stats.average_uses_per_tool, 2);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let half = u64::MAX / 2 + 1;
        let stats = HistoryStats::from_entries(&[entry("a", half), entry("b", half)]);
        assert_eq!(stats.total_uses, u64::MAX);
        assert_eq!(stats.most_used_tool.unwrap().tool_id, "a");
    }

    #[test]
    fn test_average_rounds_half_up() {
        let stats = HistoryStats::from_entries(&[entry("a", 1), entry("b", 2)]);
        assert_eq!(stats.average_uses_per_tool, 2);

        let stats = HistoryStats::from_entries(&[entry("a", 1), entry("b", 1), entry("c", 2)]);
        assert_eq!(stats.average_uses_per_tool, 1);
    }
}
