//! Posts API
//!
//! One-shot fetch wrapper over the remote posts resource. Each call is
//! independent and stateless; an in-flight request is not cancelled when
//! a newer one starts, so the last response to resolve wins.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::{PageResult, Post};

const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Build the request URL. The search parameter is appended only for a
/// non-empty query, percent-encoded.
fn posts_url(page: u32, limit: u32, query: &str) -> String {
    let mut url = format!("{}?_page={}&_limit={}", API_BASE_URL, page, limit);
    if !query.is_empty() {
        url.push_str(&format!("&q={}", utf8_percent_encode(query, NON_ALPHANUMERIC)));
    }
    url
}

/// Resolve the total count from the X-Total-Count header. Without a
/// usable header the count is estimated as twice the returned page size;
/// callers must treat that value as approximate.
fn resolve_total_count(header: Option<&str>, returned: usize) -> u32 {
    header
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or((returned * 2) as u32)
}

/// Total pages implied by a total count, rounding up.
pub fn total_pages(total_count: u32, limit: u32) -> u32 {
    total_count.div_ceil(limit)
}

/// Fetch one page of posts with an optional search query.
///
/// Any HTTP or transport failure collapses to a single opaque error with
/// no retry and no timeout.
pub async fn fetch_posts(page: u32, limit: u32, query: &str) -> Result<PageResult, String> {
    let url = posts_url(page, limit, query);
    let window = web_sys::window().ok_or("no window")?;

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| "request failed".to_string())?;
    let response: Response = response.dyn_into().map_err(|_| "request failed".to_string())?;
    if !response.ok() {
        return Err("request failed".to_string());
    }

    let total_header = response.headers().get("X-Total-Count").ok().flatten();

    let body = response.json().map_err(|_| "request failed".to_string())?;
    let body = JsFuture::from(body)
        .await
        .map_err(|_| "request failed".to_string())?;
    let posts: Vec<Post> = serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())?;

    let total_count = resolve_total_count(total_header.as_deref(), posts.len());
    Ok(PageResult { posts, total_count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_carries_page_and_limit() {
        let url = posts_url(2, 10, "");
        assert!(url.contains("_page=2"));
        assert!(url.contains("_limit=10"));
        assert!(!url.contains("&q="));
    }

    #[test]
    fn test_url_encodes_query() {
        let url = posts_url(1, 10, "foo bar");
        assert!(url.ends_with("&q=foo%20bar"));
    }

    #[test]
    fn test_total_count_prefers_header() {
        assert_eq!(resolve_total_count(Some("100"), 5), 100);
    }

    #[test]
    fn test_total_count_estimates_without_header() {
        // 5 returned items, no header: estimate of 10
        assert_eq!(resolve_total_count(None, 5), 10);
    }

    #[test]
    fn test_total_count_estimates_on_garbage_header() {
        assert_eq!(resolve_total_count(Some("many"), 3), 6);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }
}
