use super::*;
use crate::request::MockHttpClient;
use crate::storage::MemoryStore;
use serde_json::json;

const LOGIN_URL: &str = "/api/auth/login";

fn admin_login_body() -> serde_json::Value {
    json!({
        "access_token": "t1",
        "token_type": "bearer",
        "user": {"full_name": "Admin", "role": "admin"}
    })
}

// =========================================================
// restore 测试
// =========================================================

#[test]
fn test_restore_with_both_entries() {
    let store = SessionStore::new(MemoryStore::with_entries(&[
        (STORAGE_TOKEN_KEY, "abc"),
        (STORAGE_USER_KEY, r#"{"full_name":"Ana","role":"auditor"}"#),
    ]));

    let user = store.restore().unwrap();
    assert_eq!(user.full_name, "Ana");
    assert_eq!(store.token().as_deref(), Some("abc"));
    assert!(store.is_authenticated());
}

#[test]
fn test_restore_with_nothing_persisted() {
    let store = SessionStore::new(MemoryStore::new());
    assert!(store.restore().is_none());
    assert!(store.token().is_none());
    assert!(store.user().is_none());
}

#[test]
fn test_restore_clears_token_without_user() {
    let store = SessionStore::new(MemoryStore::with_entries(&[(STORAGE_TOKEN_KEY, "abc")]));

    assert!(store.restore().is_none());
    assert!(store.token().is_none());
    assert_eq!(store.storage().len(), 0);
}

#[test]
fn test_restore_clears_user_without_token() {
    let store = SessionStore::new(MemoryStore::with_entries(&[(
        STORAGE_USER_KEY,
        r#"{"full_name":"Ana","role":"auditor"}"#,
    )]));

    assert!(store.restore().is_none());
    assert!(store.user().is_none());
    assert_eq!(store.storage().len(), 0);
}

#[test]
fn test_restore_treats_null_or_corrupt_user_as_absent() {
    for raw in ["null", "{not json", r#"{"role":"admin"}"#] {
        let store = SessionStore::new(MemoryStore::with_entries(&[
            (STORAGE_TOKEN_KEY, "abc"),
            (STORAGE_USER_KEY, raw),
        ]));
        assert!(store.restore().is_none(), "user entry {raw}");
        assert!(store.token().is_none());
        assert_eq!(store.storage().len(), 0);
    }
}

// =========================================================
// login 测试
// =========================================================

#[tokio::test]
async fn test_login_success_persists_session() {
    let client = MockHttpClient::new();
    client.mock_response(LOGIN_URL, 200, admin_login_body());
    let store = SessionStore::new(MemoryStore::new());

    let user = store.login(&client, LOGIN_URL, "admin", "admin").await.unwrap();

    assert_eq!(user.role, "admin");
    assert_eq!(store.token().as_deref(), Some("t1"));
    assert_eq!(store.storage().get(STORAGE_TOKEN_KEY).as_deref(), Some("t1"));
    let persisted: serde_json::Value =
        serde_json::from_str(&store.storage().get(STORAGE_USER_KEY).unwrap()).unwrap();
    assert_eq!(persisted["role"], "admin");
}

#[tokio::test]
async fn test_login_sends_form_encoded_credentials() {
    let client = MockHttpClient::new();
    client.mock_response(LOGIN_URL, 200, admin_login_body());
    let store = SessionStore::new(MemoryStore::new());

    store
        .login(&client, LOGIN_URL, "gestor 1", "p&ss=word")
        .await
        .unwrap();

    let req = client.last_request().unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.header("content-type"), Some(CONTENT_TYPE_FORM));
    assert_eq!(
        req.body.as_deref(),
        Some("username=gestor+1&password=p%26ss%3Dword")
    );
    assert!(req.header("Authorization").is_none());
}

#[tokio::test]
async fn test_login_failure_surfaces_server_detail() {
    let client = MockHttpClient::new();
    client.mock_response(
        LOGIN_URL,
        401,
        json!({"detail": "Incorrect username or password"}),
    );
    let store = SessionStore::new(MemoryStore::new());

    let err = store.login(&client, LOGIN_URL, "admin", "x").await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Authentication("Incorrect username or password".into())
    );
    assert!(!store.is_authenticated());
    assert_eq!(store.storage().len(), 0);
}

#[tokio::test]
async fn test_login_failure_without_detail_uses_default_message() {
    let client = MockHttpClient::new();
    client.mock_response(LOGIN_URL, 400, json!({}));
    let store = SessionStore::new(MemoryStore::new());

    let err = store.login(&client, LOGIN_URL, "admin", "x").await.unwrap_err();
    assert_eq!(err.user_message(), "Error de autenticación");
}

#[tokio::test]
async fn test_login_network_failure_is_connectivity_error() {
    let client = MockHttpClient::new();
    client.mock_offline(LOGIN_URL);
    let store = SessionStore::new(MemoryStore::new());

    let err = store.login(&client, LOGIN_URL, "admin", "admin").await.unwrap_err();
    assert!(matches!(err, ClientError::Connectivity(_)));
    assert_eq!(err.user_message(), "Error de conexión");
}

// =========================================================
// logout 测试
// =========================================================

#[tokio::test]
async fn test_logout_clears_memory_and_storage() {
    let client = MockHttpClient::new();
    client.mock_response(LOGIN_URL, 200, admin_login_body());
    let store = SessionStore::new(MemoryStore::new());
    store.login(&client, LOGIN_URL, "admin", "admin").await.unwrap();

    assert!(store.logout());
    assert!(!store.is_authenticated());
    assert!(store.storage().get(STORAGE_TOKEN_KEY).is_none());
    assert!(store.storage().get(STORAGE_USER_KEY).is_none());

    // 第二次注销无副作用
    assert!(!store.logout());
}
