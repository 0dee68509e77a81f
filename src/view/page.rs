use serde::Serialize;

use crate::view::{Crumb, HistoryRow, NavItem, PagerView};

/// Standard response wrapper shared by page-style endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct StandardPage<T> {
    pub title: String,
    pub crumbs: Vec<Crumb>,
    pub nav: Vec<NavItem>,
    pub content: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryContent {
    pub rows: Vec<HistoryRow>,
    pub pager: PagerView,
}
