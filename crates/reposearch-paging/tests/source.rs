//! RepoPagingSource against a fake search backend.

mod common;

use common::{FakeClient, repo};
use reposearch_core::error::TransportError;
use reposearch_core::{
    Error, LoadParams, Page, PageKey, PagingSource, PagingState, Repo, SearchQuery,
};
use reposearch_paging::{PAGE_SIZE, RepoPagingSource};

fn key(n: u32) -> PageKey {
    PageKey::new(n).unwrap()
}

fn source(client: &std::sync::Arc<FakeClient>, query: &str) -> RepoPagingSource<FakeClient> {
    RepoPagingSource::new(client.clone(), SearchQuery::new(query).unwrap())
}

fn page_of(len: usize, prev: Option<u32>, next: Option<u32>) -> Page<PageKey, Repo> {
    Page::new(
        (0..len).map(repo).collect(),
        prev.map(key),
        next.map(key),
    )
}

#[tokio::test]
async fn first_load_requests_page_one_with_qualifier() {
    let client = FakeClient::with_total(500);
    let source = source(&client, "tokio");

    let result = source.load(LoadParams::new(None, PAGE_SIZE)).await;
    let page = result.page().expect("page");

    assert_eq!(page.len(), 50);
    assert_eq!(page.prev_key, None);
    assert_eq!(page.next_key, Some(key(2)));

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].query, "tokio in:name,description");
    assert_eq!(calls[0].page, 1);
    assert_eq!(calls[0].per_page, 50);
}

#[tokio::test]
async fn middle_page_has_both_neighbours() {
    let client = FakeClient::with_total(500);
    let source = source(&client, "tokio");

    let result = source.load(LoadParams::new(Some(key(3)), PAGE_SIZE)).await;
    let page = result.page().expect("page");

    assert_eq!(page.prev_key, Some(key(2)));
    assert_eq!(page.next_key, Some(key(4)));
    assert_eq!(page.data[0], repo(100));
}

#[tokio::test]
async fn empty_page_ends_pagination_but_keeps_prev() {
    let client = FakeClient::with_total(60);
    let source = source(&client, "tokio");

    let result = source.load(LoadParams::new(Some(key(3)), PAGE_SIZE)).await;
    let page = result.page().expect("page");

    assert!(page.is_empty());
    assert_eq!(page.prev_key, Some(key(2)));
    assert_eq!(page.next_key, None);
}

#[tokio::test]
async fn multi_page_load_advances_by_page_count() {
    let client = FakeClient::with_total(500);
    let source = source(&client, "tokio");

    let result = source.load(LoadParams::new(Some(key(2)), 3 * PAGE_SIZE)).await;
    let page = result.page().expect("page");

    assert_eq!(page.len(), 150);
    assert_eq!(page.prev_key, Some(key(1)));
    assert_eq!(page.next_key, Some(key(5)));
    assert_eq!(client.calls()[0].per_page, 150);
}

#[tokio::test]
async fn client_failure_becomes_error_result() {
    let client = FakeClient::with_total(500);
    client.fail_next(1, "timeout");
    let source = source(&client, "tokio");

    let result = source.load(LoadParams::new(None, PAGE_SIZE)).await;
    let err = result.error().expect("error");

    assert!(err.to_string().contains("timeout"));
    assert!(matches!(
        err.error(),
        Error::Transport(TransportError::Connection { .. })
    ));
    assert!(err.error().is_network_failure());
}

#[tokio::test]
async fn unsupported_load_size_skips_the_request() {
    let client = FakeClient::with_total(500);
    let source = source(&client, "tokio");

    let result = source.load(LoadParams::new(None, 30)).await;
    let err = result.error().expect("error");

    assert!(matches!(err.error(), Error::InvalidInput(_)));
    assert!(!err.error().is_network_failure());
    assert!(client.calls().is_empty());
}

#[test]
fn refresh_key_without_anchor_is_none() {
    let client = FakeClient::with_total(0);
    let source = source(&client, "tokio");

    let state = PagingState::new(vec![page_of(50, None, Some(2))], None);
    assert_eq!(source.refresh_key(&state), None);
}

#[test]
fn refresh_key_follows_prev_key_of_anchor_page() {
    let client = FakeClient::with_total(0);
    let source = source(&client, "tokio");

    let pages = vec![
        page_of(50, None, Some(2)),
        page_of(50, Some(1), Some(3)),
        page_of(50, Some(2), Some(4)),
    ];

    let state = PagingState::new(pages.clone(), Some(75));
    assert_eq!(source.refresh_key(&state), Some(key(2)));

    let state = PagingState::new(pages, Some(149));
    assert_eq!(source.refresh_key(&state), Some(key(3)));
}

#[test]
fn refresh_key_on_first_page_uses_next_key() {
    let client = FakeClient::with_total(0);
    let source = source(&client, "tokio");

    let state = PagingState::new(vec![page_of(50, None, Some(2))], Some(10));
    assert_eq!(source.refresh_key(&state), Some(key(1)));
}

#[test]
fn refresh_key_past_the_end_uses_last_page() {
    let client = FakeClient::with_total(0);
    let source = source(&client, "tokio");

    let pages = vec![page_of(50, None, Some(2)), page_of(50, Some(1), Some(3))];
    let state = PagingState::new(pages, Some(1000));
    assert_eq!(source.refresh_key(&state), Some(key(2)));
}

#[test]
fn refresh_key_with_no_pages_is_none() {
    let client = FakeClient::with_total(0);
    let source = source(&client, "tokio");

    let state: PagingState<PageKey, Repo> = PagingState::new(Vec::new(), Some(3));
    assert_eq!(source.refresh_key(&state), None);
}
