use serde::Serialize;

use crate::models::SourceLocation;
use crate::view::{history_uri, location_history_uri};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    History,
    Change,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub view: ViewKind,
    pub label: String,
    pub href: Option<String>,
    pub selected: bool,
}

/// Side navigation for `location` with `active` highlighted.
///
/// The change view is only listed when the location resolves to a single
/// change. It has no route of its own here, so it carries no link.
pub fn build_side_nav(
    location: &SourceLocation,
    active: ViewKind,
    has_change_view: bool,
) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        view: ViewKind::History,
        label: "History".to_string(),
        href: Some(location_history_uri(location)),
        selected: active == ViewKind::History,
    }];

    if location.path().is_some() {
        items.push(NavItem {
            view: ViewKind::History,
            label: "Repository History".to_string(),
            href: Some(history_uri(location.repository(), location.branch(), None)),
            selected: false,
        });
    }

    if has_change_view {
        items.push(NavItem {
            view: ViewKind::Change,
            label: "Change".to_string(),
            href: None,
            selected: active == ViewKind::Change,
        });
    }

    items
}
