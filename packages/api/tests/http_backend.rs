//! `HttpBackend` against an in-process axum server that speaks the notes API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{ApiConfig, ApiError, Backend, HttpBackend, NoteDraft, User};
use axum::extract::{Path, Query, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

const SESSION_COOKIE: &str = "sessionid=abc123; Path=/";

#[derive(Clone, Default)]
struct FakeApi {
    notes: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<i64>>,
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains("sessionid=abc123"))
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({"detail": "Authentication credentials were not provided."})),
    )
        .into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["username"] == "alice" && body["password"] == "x" {
        (
            [(SET_COOKIE, SESSION_COOKIE)],
            Json(json!({"user": {"username": "alice", "email": "alice@example.com"}})),
        )
            .into_response()
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({"detail": "bad password"}))).into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == "alice" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"username": ["A user with that username already exists."]})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        [(SET_COOKIE, SESSION_COOKIE)],
        Json(json!({"id": 2, "username": body["username"], "email": body["email"]})),
    )
        .into_response()
}

async fn logout() -> Response {
    (
        [(SET_COOKIE, "sessionid=; Path=/; Max-Age=0")],
        Json(json!({})),
    )
        .into_response()
}

async fn list_notes(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !has_session(&headers) {
        return forbidden();
    }
    let notes = api.notes.lock().unwrap();
    let filtered: Vec<Value> = notes
        .iter()
        .filter(|n| match params.get("search") {
            Some(q) => n["title"].as_str().unwrap_or_default().contains(q.as_str())
                || n["content"].as_str().unwrap_or_default().contains(q.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    Json(Value::Array(filtered)).into_response()
}

async fn create_note(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !has_session(&headers) {
        return forbidden();
    }
    let mut next_id = api.next_id.lock().unwrap();
    *next_id += 1;
    let note = json!({
        "id": *next_id,
        "title": body["title"],
        "content": body["content"],
        "created": "2024-05-01T10:00:00Z",
        "updated": "2024-05-01T10:00:00Z",
    });
    api.notes.lock().unwrap().push(note.clone());
    (StatusCode::CREATED, Json(note)).into_response()
}

async fn update_note(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    if !has_session(&headers) {
        return forbidden();
    }
    let mut notes = api.notes.lock().unwrap();
    match notes.iter_mut().find(|n| n["id"] == id) {
        Some(note) => {
            note["title"] = body["title"].clone();
            note["content"] = body["content"].clone();
            note["updated"] = json!("2024-05-02T10:00:00Z");
            Json(note.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response(),
    }
}

async fn delete_note(
    State(api): State<FakeApi>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if !has_session(&headers) {
        return forbidden();
    }
    api.notes.lock().unwrap().retain(|n| n["id"] != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn not_json() -> &'static str {
    "welcome back"
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/api/auth/login/", post(login))
        .route("/api/auth/logout/", post(logout))
        .route("/api/auth/register/", post(register))
        .route("/api/notes/", get(list_notes).post(create_note))
        .route("/api/notes/{id}/", put(update_note).delete(delete_note))
        .route("/broken/auth/login/", post(not_json))
        .with_state(FakeApi::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn backend(base: &str) -> HttpBackend {
    HttpBackend::new(&ApiConfig::new(base)).unwrap()
}

#[tokio::test]
async fn test_session_cookie_carries_across_calls() {
    let base = spawn_server().await;
    let api = backend(&format!("{base}/api"));

    let err = api.fetch_notes(None).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 403,
            detail: Some("Authentication credentials were not provided.".to_string())
        }
    );

    let user = api.login("alice", "x").await.unwrap().into_user();
    assert_eq!(user, User::new("alice").with_email("alice@example.com"));
    assert!(api.fetch_notes(None).await.unwrap().is_empty());

    api.logout().await.unwrap();
    assert!(matches!(
        api.fetch_notes(None).await,
        Err(ApiError::Http { status: 403, .. })
    ));
}

#[tokio::test]
async fn test_bad_password_detail() {
    let base = spawn_server().await;
    let api = backend(&format!("{base}/api"));

    let err = api.login("alice", "nope").await.unwrap_err();
    assert_eq!(err.detail(), Some("bad password"));
}

#[tokio::test]
async fn test_note_crud_and_search() {
    let base = spawn_server().await;
    let api = backend(&format!("{base}/api/"));
    api.login("alice", "x").await.unwrap();

    let groceries = api
        .create_note(&NoteDraft::new("Groceries", "milk & eggs"))
        .await
        .unwrap();
    let ideas = api
        .create_note(&NoteDraft::new("Ideas", "a boat"))
        .await
        .unwrap();
    assert_eq!(groceries.created.as_deref(), Some("2024-05-01T10:00:00Z"));

    let found = api.fetch_notes(Some("milk & eggs")).await.unwrap();
    assert_eq!(found, vec![groceries.clone()]);
    assert_eq!(api.fetch_notes(Some("")).await.unwrap().len(), 2);

    let updated = api
        .update_note(ideas.id, &NoteDraft::new("Ideas", "a bigger boat"))
        .await
        .unwrap();
    assert_eq!(updated.content, "a bigger boat");
    assert_eq!(updated.updated.as_deref(), Some("2024-05-02T10:00:00Z"));

    api.delete_note(groceries.id).await.unwrap();
    assert_eq!(api.fetch_notes(None).await.unwrap(), vec![updated]);

    let err = api
        .update_note(groceries.id, &NoteDraft::new("gone", ""))
        .await
        .unwrap_err();
    assert_eq!(err.detail(), Some("Not found."));
}

#[tokio::test]
async fn test_register_accepts_bare_user_body() {
    let base = spawn_server().await;
    let api = backend(&format!("{base}/api"));

    let user = api
        .register("bob", "bob@example.com", "pw")
        .await
        .unwrap()
        .into_user();
    assert_eq!(user, User::new("bob").with_email("bob@example.com"));

    let err = api.register("alice", "a@example.com", "pw").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 400,
            detail: None
        }
    );
}

#[tokio::test]
async fn test_undecodable_body_is_unknown() {
    let base = spawn_server().await;
    let api = backend(&format!("{base}/broken"));

    assert!(matches!(
        api.login("alice", "x").await,
        Err(ApiError::Unknown(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = backend(&format!("http://{addr}/api"));
    assert!(matches!(
        api.login("alice", "x").await,
        Err(ApiError::Network(_))
    ));
}
