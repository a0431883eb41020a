use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, StatusCode,
    },
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Builds a request with an optional bearer API key and JSON body.
fn request(method: Method, uri: &str, api_key: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(api_key) = api_key {
        builder = builder.header(AUTHORIZATION, format!("Bearer {}", api_key));
    }

    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends a request through the router and returns status and parsed envelope.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Tests a path that matches no route.
///
/// Expected: 404 with the not found envelope
#[tokio::test]
async fn unknown_route_returns_not_found_envelope() {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let app = app(test.db.as_ref().unwrap());

    let (status, body) = send(&app, request(Method::GET, "/api/v1/nothing", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "404-1");
    assert_eq!(body["message"], "해당 데이터가 존재하지 않습니다.");
}

/// Tests a known path with a method it doesn't accept.
///
/// Expected: 405 with the method not allowed envelope
#[tokio::test]
async fn unsupported_method_returns_envelope() {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);
    let author = factory::member::create_member(db).await.unwrap();
    let post = factory::post::create_post(db, author.id).await.unwrap();

    let uri = format!("/api/v1/posts/{}", post.id);
    let (status, body) = send(&app, request(Method::PATCH, &uri, None, None)).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "405-1");
    assert_eq!(body["message"], "지원하지 않는 요청 메서드입니다.");
}
