use serde::{Deserialize, Serialize};

/// One commit touching a source location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub oid: String,
    pub short_oid: String,
    pub summary: String,
    pub message: String,
    pub author: AuthorInfo,
    pub timestamp: i64,
    pub relative_time: String,
    pub parents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
}
