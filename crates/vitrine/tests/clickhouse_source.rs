//! End-to-end behavior of the SQL-over-HTTP recipe source against a mock
//! ClickHouse endpoint.

use mockito::Matcher;
use serde_json::Value;

use vitrine::{AdminSource, ClickHouseClient, ListRequest, RecipeSource, SourceError};

fn source_for(server: &mockito::Server) -> RecipeSource {
    let client = ClickHouseClient::new(server.url(), "default").expect("client");
    RecipeSource::new(client, "recipes")
}

fn list_body() -> String {
    serde_json::json!({
        "meta": [{"name": "link", "type": "String"}],
        "data": [
            {
                "link": "www.example.com/r/1",
                "title": "Garlic Chicken",
                "ner_length": "4",
                "directions_length": "6",
                "ner": ["garlic", "chicken"],
                "ingredients": ["2 cloves garlic", "1 chicken"],
                "directions": ["prep", "roast"],
                "source": "Gathered"
            },
            {
                "link": "www.example.com/r/2",
                "title": "Chicken Soup"
            }
        ],
        "rows": 2,
        "rows_before_limit_at_least": 7
    })
    .to_string()
}

#[tokio::test]
async fn filtered_list_builds_conjunctive_where() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("database".into(), "default".into()),
            Matcher::UrlEncoded("default_format".into(), "JSON".into()),
        ]))
        .match_body(Matcher::Regex(
            r"WHERE title ILIKE '%chicken%' AND has\(NER, 'garlic'\)".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(list_body())
        .create_async()
        .await;

    let source = source_for(&server);
    let request = ListRequest::new(1, 10)
        .with_search("chicken")
        .with_filter("garlic");

    let page = source.list_page(&request).await.expect("list page");

    // Exact filtered total from rows_before_limit_at_least.
    assert_eq!(page.total, Some(7));
    assert_eq!(page.items.len(), 2);

    // Projection: whitelist only, extras dropped, absents null.
    let first = &page.items[0];
    assert_eq!(first.fields(), source.field_list());
    assert_eq!(first.get("source"), None);
    assert_eq!(first.get("ner_length"), Some(&Value::from("4")));
    assert_eq!(page.items[1].get("ingredients"), Some(&Value::Null));

    mock.assert_async().await;
}

#[tokio::test]
async fn pagination_and_sort_reach_the_sql_text() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Regex(
            r"ORDER BY directions_length desc,title asc\nLIMIT 25 OFFSET 50$".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [], "rows_before_limit_at_least": 0}"#)
        .create_async()
        .await;

    let source = source_for(&server);
    let request = ListRequest::new(3, 25).with_sort("-2.0");
    source.list_page(&request).await.expect("list page");

    mock.assert_async().await;
}

#[tokio::test]
async fn total_defaults_to_zero_when_backend_omits_it() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;

    let source = source_for(&server);
    let page = source
        .list_page(&ListRequest::default())
        .await
        .expect("page");
    assert_eq!(page.total, Some(0));
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn http_failure_propagates() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Code: 62. DB::Exception: Syntax error")
        .create_async()
        .await;

    let source = source_for(&server);
    let err = source
        .list_page(&ListRequest::default())
        .await
        .expect_err("propagated");

    match err {
        SourceError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("DB::Exception"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn object_lookup_keys_on_escaped_link() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::Regex(
            r"WHERE link = 'www.example.com/r/1 DROP'\nORDER BY title desc\nLIMIT 1 OFFSET 0$"
                .into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"data": [{"link": "www.example.com/r/1 DROP", "title": "Stew"}],
                "rows_before_limit_at_least": 1}"#,
        )
        .create_async()
        .await;

    let source = source_for(&server);
    let record = source
        .get_object("www.example.com/r/1'; DROP")
        .await
        .expect("lookup")
        .expect("record");

    assert_eq!(record.get("title"), Some(&Value::from("Stew")));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_detail_result_is_none() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [], "rows_before_limit_at_least": 0}"#)
        .create_async()
        .await;

    let source = source_for(&server);
    let result = source
        .get_object("www.example.com/r/404")
        .await
        .expect("lookup");

    // NotFound, never a zero-valued record.
    assert!(result.is_none());
}
