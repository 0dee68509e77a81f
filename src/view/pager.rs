use serde::Serialize;

use crate::pager::PageResult;

/// Query parameter carrying the offset; `page` is its legacy alias.
pub const OFFSET_PARAM: &str = "offset";
const LEGACY_OFFSET_PARAM: &str = "page";

/// Window state handed to the navigation builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    pub offset: usize,
    pub page_size: usize,
    pub has_more: bool,
    pub base_uri: String,
}

impl PagerState {
    pub fn from_page<T>(page: &PageResult<T>, base_uri: impl Into<String>) -> Self {
        Self {
            offset: page.offset,
            page_size: page.page_size,
            has_more: page.has_more,
            base_uri: base_uri.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerView {
    pub offset: usize,
    pub page_size: usize,
    pub has_more: bool,
    pub prev_uri: Option<String>,
    pub next_uri: Option<String>,
}

impl From<&PagerState> for PagerView {
    fn from(state: &PagerState) -> Self {
        let prev_uri = (state.offset > 0)
            .then(|| with_offset(&state.base_uri, state.offset.saturating_sub(state.page_size)));
        let next_uri = state
            .has_more
            .then(|| with_offset(&state.base_uri, state.offset + state.page_size));

        PagerView {
            offset: state.offset,
            page_size: state.page_size,
            has_more: state.has_more,
            prev_uri,
            next_uri,
        }
    }
}

/// `uri` with its offset parameter replaced by `offset`, or removed when 0.
/// Other query parameters are kept verbatim and in order.
pub fn with_offset(uri: &str, offset: usize) -> String {
    let (path, query) = uri.split_once('?').unwrap_or((uri, ""));

    let mut params: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(k, _)| k);
            key != OFFSET_PARAM && key != LEGACY_OFFSET_PARAM
        })
        .map(str::to_string)
        .collect();

    if offset > 0 {
        params.push(format!("{}={}", OFFSET_PARAM, offset));
    }

    if params.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(offset: usize, page_size: usize, has_more: bool, base_uri: &str) -> PagerState {
        PagerState {
            offset,
            page_size,
            has_more,
            base_uri: base_uri.to_string(),
        }
    }

    #[test]
    fn first_page_links_forward_only() {
        let view = PagerView::from(&state(0, 100, true, "/h?pagesize=100"));
        assert_eq!(view.prev_uri, None);
        assert_eq!(view.next_uri.as_deref(), Some("/h?pagesize=100&offset=100"));
    }

    #[test]
    fn last_page_links_back_only() {
        let view = PagerView::from(&state(20, 10, false, "/h?offset=20&branch=main"));
        assert_eq!(view.prev_uri.as_deref(), Some("/h?branch=main&offset=10"));
        assert_eq!(view.next_uri, None);
    }

    #[test]
    fn previous_link_to_start_drops_offset() {
        let view = PagerView::from(&state(5, 10, true, "/h?page=5"));
        assert_eq!(view.prev_uri.as_deref(), Some("/h"));
        assert_eq!(view.next_uri.as_deref(), Some("/h?offset=15"));
    }

    #[test]
    fn single_page_has_no_links() {
        let view = PagerView::from(&state(0, 100, false, "/h"));
        assert_eq!(view.prev_uri, None);
        assert_eq!(view.next_uri, None);
    }
}
