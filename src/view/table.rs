use chrono::DateTime;
use serde::Serialize;

use crate::models::{HistoryEntry, SourceLocation};
use crate::view::history_uri;

/// One row of the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub commit: String,
    pub oid: String,
    pub date: String,
    pub time: String,
    pub relative_time: String,
    pub author: String,
    pub summary: String,
    pub is_merge: bool,
    pub browse_href: String,
}

pub fn build_history_table(location: &SourceLocation, entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries.iter().map(|entry| history_row(location, entry)).collect()
}

fn history_row(location: &SourceLocation, entry: &HistoryEntry) -> HistoryRow {
    let (date, time) = match DateTime::from_timestamp(entry.timestamp, 0) {
        Some(dt) => (dt.format("%Y-%m-%d").to_string(), dt.format("%H:%M").to_string()),
        None => (String::new(), String::new()),
    };

    HistoryRow {
        commit: entry.short_oid.clone(),
        oid: entry.oid.clone(),
        date,
        time,
        relative_time: entry.relative_time.clone(),
        author: entry.author.name.clone(),
        summary: entry.summary.clone(),
        is_merge: entry.parents.len() > 1,
        browse_href: history_uri(location.repository(), Some(&entry.oid), location.path()),
    }
}
