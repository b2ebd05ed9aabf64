//! End-to-end behavior of the REST-backed repository source against a mock
//! HTTP server.

use mockito::Matcher;
use serde_json::Value;

use vitrine::{AdminSource, GitHubSource, ListRequest, SourceError};

fn repo_body() -> String {
    serde_json::json!([
        {
            "id": 4_164_482,
            "name": "django",
            "full_name": "django/django",
            "forks_count": 31000,
            "stargazers_count": 79000,
            "watchers_count": 79000,
            "open_issues_count": 350,
            "html_url": "https://github.com/django/django",
            "private": false
        },
        {
            "id": 28_549_677,
            "name": "asgiref",
            "full_name": "django/asgiref",
            "forks_count": 300,
            "stargazers_count": 1500
        }
    ])
    .to_string()
}

#[tokio::test]
async fn list_page_projects_rows_and_attaches_org_total() {
    let mut server = mockito::Server::new_async().await;

    let list_mock = server
        .mock("GET", "/orgs/django/repos")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("per_page".into(), "5".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(repo_body())
        .expect(2)
        .create_async()
        .await;

    // The org summary endpoint is hit once; the count is memoized.
    let org_mock = server
        .mock("GET", "/orgs/django")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"login": "django", "public_repos": 42}"#)
        .expect(1)
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let request = ListRequest::new(2, 5);

    let page = source.list_page(&request).await.expect("list page");

    // The total is the organization-wide count, not the page's result
    // count. The discrepancy (42 vs 2) is inherited behavior.
    assert_eq!(page.total, Some(42));
    assert_eq!(page.items.len(), 2);

    // Projection: exactly the whitelist, extra keys dropped, absent keys null.
    let first = &page.items[0];
    assert_eq!(first.fields(), source.field_list());
    assert_eq!(first.get("full_name"), Some(&Value::from("django/django")));
    assert_eq!(first.get("html_url"), None);

    let second = &page.items[1];
    assert_eq!(second.get("watchers_count"), Some(&Value::Null));
    assert_eq!(second.get("open_issues_count"), Some(&Value::Null));

    // Second page render reuses the memoized count.
    let again = source.list_page(&request).await.expect("second page");
    assert_eq!(again.total, Some(42));

    list_mock.assert_async().await;
    org_mock.assert_async().await;
}

#[tokio::test]
async fn rate_limited_list_degrades_to_empty_page() {
    let mut server = mockito::Server::new_async().await;

    let list_mock = server
        .mock("GET", "/orgs/django/repos")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("x-ratelimit-reset", "1700000000")
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let page = source
        .list_page(&ListRequest::default())
        .await
        .expect("degraded page");

    // Degraded, not failed: empty items and an absent (not zero) total.
    assert!(page.items.is_empty());
    assert_eq!(page.total, None);

    list_mock.assert_async().await;
}

#[tokio::test]
async fn list_error_other_than_rate_limit_propagates() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/orgs/django/repos")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let err = source
        .list_page(&ListRequest::default())
        .await
        .expect_err("propagated error");

    match err {
        SourceError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn object_lookup_normalizes_single_row() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/repos/django/django")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": 4164482, "name": "django", "full_name": "django/django",
                "forks_count": 31000, "stargazers_count": 79000,
                "watchers_count": 79000, "open_issues_count": 350,
                "default_branch": "main"}"#,
        )
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let record = source
        .get_object("django/django")
        .await
        .expect("lookup")
        .expect("record");

    assert_eq!(record.get("id"), Some(&Value::from(4_164_482)));
    assert_eq!(record.get("default_branch"), None);
}

#[tokio::test]
async fn missing_object_is_none() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/repos/django/nope")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let result = source.get_object("django/nope").await.expect("lookup");
    assert!(result.is_none());
}

#[tokio::test]
async fn rate_limited_object_lookup_propagates() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/repos/django/django")
        .with_status(403)
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let err = source
        .get_object("django/django")
        .await
        .expect_err("rate limited");
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn org_count_failure_leaves_total_unknown() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/orgs/django/repos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    // Org endpoint answers with a payload that has no count.
    server
        .mock("GET", "/orgs/django")
        .with_status(403)
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create_async()
        .await;

    let source = GitHubSource::with_base_url(server.url(), "django");
    let page = source
        .list_page(&ListRequest::default())
        .await
        .expect("page");
    assert_eq!(page.total, None);
    assert!(page.items.is_empty());
}
