//! ApiClient against an in-process mock backend.

use std::collections::HashMap;
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use geovote_client::{ApiClient, ClientError, Config, TreeSource};
use geovote_testing::fixtures::{ALIGNMENT_JSON, CLUSTER_CHART_JSON, SUMMARY_JSON, TREE_JSON};
use geovote_types::{RegionKind, VoteType};

type Params = Query<HashMap<String, String>>;

async fn tree(Query(params): Params) -> (StatusCode, &'static str) {
    match params.get("age").map(String::as_str) {
        Some("22") => (StatusCode::OK, TREE_JSON),
        Some(_) => (StatusCode::NOT_FOUND, r#"{"error": "no data"}"#),
        None => (StatusCode::BAD_REQUEST, r#"{"error": "age parameter is required"}"#),
    }
}

async fn vote_summary(Query(params): Params) -> (StatusCode, &'static str) {
    match params.get("member_name").map(String::as_str) {
        Some("홍길동") | Some("김철수") => (StatusCode::OK, SUMMARY_JSON),
        Some("깨진응답") => (StatusCode::OK, "<html>oops</html>"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": "Failed to fetch votes"}"#),
    }
}

async fn alignment(Query(params): Params) -> (StatusCode, &'static str) {
    let known = params.get("member_name").map(String::as_str) == Some("홍길동")
        && params.get("congress_num").map(String::as_str) == Some("22");
    if known {
        (StatusCode::OK, ALIGNMENT_JSON)
    } else {
        (StatusCode::NOT_FOUND, r#"{"error": "not found"}"#)
    }
}

async fn cluster_chart(Query(params): Params) -> (StatusCode, &'static str) {
    let complete = ["age_num", "cluster_num", "party", "stance"]
        .iter()
        .all(|key| params.contains_key(*key));
    if complete {
        (StatusCode::OK, CLUSTER_CHART_JSON)
    } else {
        (StatusCode::BAD_REQUEST, "{}")
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/geovote/api/treemap-data/", get(tree))
        .route("/geovote/api/region-tree/", get(tree))
        .route("/geovote/api/member-vote-summary/", get(vote_summary))
        .route("/geovote/api/member-alignment/", get(alignment))
        .route("/api/cluster_chart", get(cluster_chart));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client() -> ApiClient {
    let base_url = spawn_backend().await;
    ApiClient::new(&base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetch_treemap_data() {
    let client = client().await;
    let root = client.fetch_treemap_data(22).await.unwrap();

    assert_eq!(root.kind, RegionKind::Root);
    assert_eq!(root.children[0].name, "서울특별시");
    assert_eq!(root.children[0].children[0].children.len(), 2);
}

#[tokio::test]
async fn test_legacy_tree_source() {
    let base_url = spawn_backend().await;
    let config = Config {
        base_url,
        tree_source: TreeSource::RegionTree,
        ..Config::default()
    };
    let client = ApiClient::from_config(&config).unwrap();

    let root = client.fetch_tree(22).await.unwrap();
    assert_eq!(root.name, "대한민국");
    assert!(client.fetch_region_tree(22).await.is_ok());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let client = client().await;
    let err = client.fetch_treemap_data(19).await.unwrap_err();

    let ClientError::Status { status, url } = err else {
        panic!("expected status error, got {:?}", err);
    };
    assert_eq!(status, 404);
    assert!(url.contains("age=19"), "{}", url);
}

#[tokio::test]
async fn test_member_summary_merges_alignment() {
    let client = client().await;
    let summary = client.fetch_member_summary("홍길동", 22).await.unwrap();

    assert_eq!(summary.member_name, "홍길동");
    assert_eq!(summary.party.as_deref(), Some("당A"));
    assert_eq!(summary.alignment_rate, Some(92.45));
    assert_eq!(summary.per_vote_type[&VoteType::Agree].cluster_id, Some(3));
}

#[tokio::test]
async fn test_alignment_failure_is_tolerated() {
    let client = client().await;
    let summary = client.fetch_member_summary("김철수", 22).await.unwrap();

    assert!(!summary.has_alignment());
    assert_eq!(summary.per_vote_type.len(), 3);
}

#[tokio::test]
async fn test_summary_failure_fails_the_call() {
    let client = client().await;
    let err = client.fetch_member_summary("없는의원", 22).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let client = client().await;
    let err = client.fetch_member_vote_summary("깨진응답").await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_fetch_cluster_chart() {
    let client = client().await;
    let chart = client.fetch_cluster_chart(22, 3, "당A", "찬성").await.unwrap();

    assert_eq!(chart.categories, vec!["찬성", "반대", "기권", "불참"]);
    assert_eq!(chart.series.len(), 2);
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr), Duration::from_secs(2)).unwrap();
    let err = client.fetch_treemap_data(22).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}
