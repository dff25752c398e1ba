use super::*;
use crate::request::MockHttpClient;
use crate::storage::MemoryStore;
use serde_json::json;
use sgcn_shared::{Document, LoginResponse, STORAGE_TOKEN_KEY, STORAGE_USER_KEY};

// =========================================================
// 辅助函数
// =========================================================

fn gateway_with_session() -> ApiGateway<MockHttpClient, MemoryStore> {
    let session = Rc::new(SessionStore::new(MemoryStore::new()));
    session.establish(LoginResponse {
        access_token: "t1".to_string(),
        token_type: Some("bearer".to_string()),
        user: UserProfile::new("Admin", "admin"),
    });
    ApiGateway::new(MockHttpClient::new(), session, &ClientConfig::default())
}

// =========================================================
// URL 拼接
// =========================================================

#[test]
fn test_url_prefixes_api_base() {
    let gateway = gateway_with_session();
    assert_eq!(gateway.url("/documents/"), "/api/documents/");
    assert_eq!(gateway.url("kpis/"), "/api/kpis/");
    assert_eq!(
        gateway.url("https://other.example.com/x"),
        "https://other.example.com/x"
    );
}

// =========================================================
// api_call 测试
// =========================================================

#[tokio::test]
async fn test_api_call_attaches_bearer_and_json_headers() {
    let gateway = gateway_with_session();
    gateway.client().mock_response("/api/documents/", 200, json!([]));

    gateway
        .api_call("/documents/", RequestOptions::get())
        .await
        .unwrap();

    let req = gateway.client().last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.header("Authorization"), Some("Bearer t1"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn test_api_call_caller_headers_extend_but_do_not_override() {
    let gateway = gateway_with_session();
    gateway.client().mock_response("/api/kpis/", 200, json!([]));

    let options = RequestOptions::get()
        .with_header("X-Request-Id", "42")
        .with_header("authorization", "Bearer forged")
        .with_header("Content-Type", "text/plain");
    gateway.api_call("/kpis/", options).await.unwrap();

    let req = gateway.client().last_request().unwrap();
    assert_eq!(req.header("X-Request-Id"), Some("42"));
    assert_eq!(req.header("Authorization"), Some("Bearer t1"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.headers.len(), 3);
}

#[tokio::test]
async fn test_api_call_returns_body_unchanged_on_success() {
    let gateway = gateway_with_session();
    let body = json!({
        "nested": {"list": [1, 2.5, "tres", null, true]},
        "unicode": "Auditoría ñ",
        "empty": {}
    });
    gateway.client().mock_response("/api/custom", 200, body.clone());

    let value = gateway
        .api_call("/custom", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(value, body);
}

#[tokio::test]
async fn test_api_call_posts_body() {
    let gateway = gateway_with_session();
    gateway
        .client()
        .mock_response("/api/incidents/", 200, json!({"id": 9}));

    let value = gateway
        .api_call("/incidents/", RequestOptions::post(json!({"title": "x"})))
        .await
        .unwrap();

    assert_eq!(value["id"], 9);
    let req = gateway.client().last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.body.as_deref(), Some(r#"{"title":"x"}"#));
}

#[tokio::test]
async fn test_api_call_401_clears_session_for_any_path() {
    let cases = [
        ("/documents/", RequestOptions::get()),
        ("/dashboard/stats", RequestOptions::get().with_header("X-A", "b")),
        ("/audits/", RequestOptions::post(json!({"title": "a"}))),
    ];

    for (path, options) in cases {
        let gateway = gateway_with_session();
        gateway
            .client()
            .mock_response(&gateway.url(path), 401, json!({"detail": "expired"}));

        let err = gateway.api_call(path, options).await.unwrap_err();

        assert_eq!(err, ClientError::SessionExpired, "path {path}");
        assert!(!gateway.session().is_authenticated());
        assert!(gateway.session().storage().get(STORAGE_TOKEN_KEY).is_none());
        assert!(gateway.session().storage().get(STORAGE_USER_KEY).is_none());
    }
}

#[tokio::test]
async fn test_api_call_non_2xx_carries_status_and_keeps_session() {
    let gateway = gateway_with_session();
    gateway
        .client()
        .mock_response("/api/incidents/", 500, json!({"detail": "boom"}));

    let err = gateway
        .api_call("/incidents/", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::http(500, "Internal Server Error"));
    assert!(gateway.session().is_authenticated());
}

#[tokio::test]
async fn test_api_call_without_session_does_not_hit_network() {
    let session = Rc::new(SessionStore::new(MemoryStore::new()));
    let gateway = ApiGateway::new(MockHttpClient::new(), session, &ClientConfig::default());

    let err = gateway
        .api_call("/documents/", RequestOptions::get())
        .await
        .unwrap_err();

    assert!(err.is_session_expired());
    assert_eq!(gateway.client().request_count(), 0);
}

#[tokio::test]
async fn test_api_call_network_failure() {
    let gateway = gateway_with_session();
    gateway.client().mock_offline("/api/audits/");

    let err = gateway
        .api_call("/audits/", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Connectivity(_)));
    assert!(gateway.session().is_authenticated());
}

// =========================================================
// 类型化请求
// =========================================================

#[tokio::test]
async fn test_fetch_collection_uses_record_path() {
    let gateway = gateway_with_session();
    gateway.client().mock_response(
        "/api/documents/",
        200,
        json!([{"id": 1, "title": "Manual de Calidad", "status": "approved"}]),
    );

    let docs: Vec<Document> = gateway.fetch_collection().await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "Manual de Calidad");
}

#[tokio::test]
async fn test_fetch_collection_rejects_non_array() {
    let gateway = gateway_with_session();
    gateway
        .client()
        .mock_response("/api/documents/", 200, json!({"items": []}));

    let err = gateway.fetch_collection::<Document>().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
