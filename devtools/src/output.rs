use chrono::{DateTime, Local};
use devtools_history::{HistoryEntry, HistoryStats};
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "id")]
    tool_id: String,
    #[tabled(rename = "name")]
    tool_name: String,
    #[tabled(rename = "category")]
    tool_category: String,
    #[tabled(rename = "last used")]
    last_used: String,
    #[tabled(rename = "uses")]
    use_count: u64,
}

impl From<&HistoryEntry> for EntryRow {
    fn from(entry: &HistoryEntry) -> Self {
        EntryRow {
            tool_id: entry.tool_id.clone(),
            tool_name: entry.tool_name.clone(),
            tool_category: entry.tool_category.clone(),
            last_used: format_millis(entry.last_used),
            use_count: entry.use_count,
        }
    }
}

pub fn format_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(t) => t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => millis.to_string(),
    }
}

pub fn entries_table(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "(no tools used yet)".to_string();
    }
    let rows: Vec<EntryRow> = entries.iter().map(EntryRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn stats_table(stats: &HistoryStats) -> String {
    let most_used = stats
        .most_used_tool
        .as_ref()
        .map(|e| format!("{} ({} uses)", e.tool_name, e.use_count))
        .unwrap_or_else(|| "-".to_string());

    let mut builder = Builder::default();
    builder.push_record(["tools".to_string(), stats.total_tools.to_string()]);
    builder.push_record(["uses".to_string(), stats.total_uses.to_string()]);
    builder.push_record(["most used".to_string(), most_used]);
    builder.push_record([
        "average uses".to_string(),
        stats.average_uses_per_tool.to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::rounded()).to_string()
}
