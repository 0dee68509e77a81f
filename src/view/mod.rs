//! Presentation collaborators for the history page.
//!
//! All builders are plain functions of their inputs; the route handler
//! assembles their output into a `StandardPage`.
//!
//! - `crumbs`: breadcrumb trail for a location
//! - `nav`: side navigation between views of a location
//! - `table`: history entries as table rows
//! - `pager`: prior/next links from the window state
//! - `page`: the standard response wrapper

pub mod crumbs;
pub mod nav;
pub mod page;
pub mod pager;
pub mod table;

pub use crumbs::{Crumb, CrumbSpec, build_crumbs};
pub use nav::{NavItem, ViewKind, build_side_nav};
pub use page::{HistoryContent, StandardPage};
pub use pager::{PagerState, PagerView};
pub use table::{HistoryRow, build_history_table};

use crate::models::SourceLocation;

/// URI of the history view for `repository` at `branch`/`path`.
pub fn history_uri(repository: &str, branch: Option<&str>, path: Option<&str>) -> String {
    let mut uri = format!("/api/v1/repositories/{}/history", encode_component(repository));

    if let Some(path) = path {
        for component in path.split('/').filter(|c| !c.is_empty()) {
            uri.push('/');
            uri.push_str(&encode_component(component));
        }
    }

    if let Some(branch) = branch {
        uri.push_str("?branch=");
        uri.push_str(&encode_component(branch));
    }

    uri
}

pub fn location_history_uri(location: &SourceLocation) -> String {
    history_uri(location.repository(), location.branch(), location.path())
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_uri_encodes_components() {
        assert_eq!(history_uri("demo", None, None), "/api/v1/repositories/demo/history");
        assert_eq!(
            history_uri("demo", Some("feature/x"), Some("src/my file.rs")),
            "/api/v1/repositories/demo/history/src/my%20file.rs?branch=feature%2Fx"
        );
    }
}
