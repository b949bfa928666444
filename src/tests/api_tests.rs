use crate::api::handlers;
use crate::client::{HttpUserApi, UserApi, UserListView, ViewPhase};
use crate::core::errors::RosterioError;
use crate::core::models::user::NewUser;
use crate::tests::create_test_service;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    handlers::app(Arc::new(create_test_service()))
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app().oneshot(request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_create_user_returns_location() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Ada Lovelace", "email": "ada@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/users/1"
    );

    let body = response_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["isActive"], true);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_user_rejects_bad_email() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Ada", "email": "not-an-email"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid email"));
}

#[tokio::test]
async fn test_create_user_rejects_empty_name() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "", "email": "ada@example.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let response = test_app()
        .oneshot(request("GET", "/api/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"], "User 999 not found");
}

#[tokio::test]
async fn test_update_user_not_found() {
    let response = test_app()
        .oneshot(json_request(
            "PUT",
            "/api/users/999",
            json!({"name": "Ghost", "email": "ghost@example.com", "isActive": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let response = test_app()
        .oneshot(request("DELETE", "/api/users/999"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_empty() {
    let response = test_app()
        .oneshot(request("GET", "/api/users"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_crud_flow() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/users",
            json!({"name": "Grace", "email": "grace@example.com", "isActive": false}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response_json(response).await;
    assert_eq!(created["isActive"], false);

    // Full replacement of the mutable fields; createdAt survives.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/users/1",
            json!({"name": "Grace Hopper", "email": "grace@navy.mil", "isActive": true}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["name"], "Grace Hopper");
    assert_eq!(updated["email"], "grace@navy.mil");
    assert_eq!(updated["isActive"], true);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/users"))
        .await
        .unwrap();
    let listed = response_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Grace Hopper");

    let response = app
        .clone()
        .oneshot(request("DELETE", "/api/users/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/users/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(request("GET", "/api/users")).await.unwrap();
    let listed = response_json(response).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_openapi_document() {
    let response = test_app()
        .oneshot(request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = response_json(response).await;
    assert_eq!(doc["info"]["title"], "Rosterio API");
    assert!(doc["paths"]["/api/users"].is_object());
    assert!(doc["paths"]["/api/users/{user_id}"].is_object());
}

#[tokio::test]
async fn test_http_client_round_trip() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, test_app()).await.unwrap();
    });

    let api = HttpUserApi::new(format!("http://{}", addr));
    let mut view = UserListView::new(api.clone());

    view.load().await.unwrap();
    assert_eq!(view.phase(), &ViewPhase::Ready);
    assert!(view.all().is_empty());

    let created = view
        .create_user(NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            is_active: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert!(created.is_active);

    let fetched = api.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let rejected = api
        .create_user(NewUser {
            name: String::new(),
            email: "x@example.com".to_string(),
            is_active: None,
        })
        .await;
    assert!(matches!(rejected, Err(RosterioError::RejectedInput(_))));

    view.delete_user(created.id).await.unwrap();
    assert!(view.all().is_empty());

    let missing = api.get_user(created.id).await;
    assert!(matches!(missing, Err(RosterioError::UserNotFound(_))));
}
