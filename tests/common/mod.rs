#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use scm_client::{Client, ResponseMeta, User};

pub const REQUEST_ID: &str = "DD0E:6011:12F21A8:1926790:5A2064E2";

const LINK_HEADER: &str = concat!(
    r#"<https://api.github.com/resource?page=2>; rel="next","#,
    r#"<https://api.github.com/resource?page=1>; rel="prev","#,
    r#"<https://api.github.com/resource?page=1>; rel="first","#,
    r#"<https://api.github.com/resource?page=5>; rel="last""#
);

/// Response headers every endpoint sends back.
pub fn mock_headers(mock: Mock) -> Mock {
    mock.with_header("Content-Type", "application/json")
        .with_header("X-GitHub-Request-Id", REQUEST_ID)
        .with_header("X-RateLimit-Limit", "60")
        .with_header("X-RateLimit-Remaining", "59")
        .with_header("X-RateLimit-Reset", "1512076018")
}

/// `Link` header sent back by list endpoints.
pub fn page_headers(mock: Mock) -> Mock {
    mock.with_header("Link", LINK_HEADER)
}

/// Client pointed at the mock server instead of the real API host.
pub fn client(server: &ServerGuard) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    Client::builder()
        .base_url(server.url())
        .build()
        .expect("client should build against the mock server")
}

pub fn octocat() -> User {
    User {
        id: 1,
        login: "octocat".to_owned(),
        avatar: "https://github.com/images/error/octocat_happy.gif".to_owned(),
        link: "https://github.com/octocat".to_owned(),
    }
}

pub fn assert_rate(meta: &ResponseMeta) {
    assert_eq!(meta.rate.limit, 60);
    assert_eq!(meta.rate.remaining, 59);
    assert_eq!(meta.rate.reset, 1512076018);
    assert_eq!(meta.request_id.as_deref(), Some(REQUEST_ID));
}

pub fn assert_page(meta: &ResponseMeta) {
    assert_eq!(meta.pagination.next_page, Some(2));
    assert_eq!(meta.pagination.prev_page, Some(1));
    assert_eq!(meta.pagination.first_page, Some(1));
    assert_eq!(meta.pagination.last_page, Some(5));
}
