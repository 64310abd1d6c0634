mod common;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use elo_lists::routes::app_router;
use std::time::Duration;
use tower::ServiceExt;

const TIMEOUT: Duration = Duration::from_secs(15);

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let database = common::test_database().await;
    let app = app_router(common::create_test_state(&database), false, TIMEOUT);

    let response = app
        .oneshot(Request::get("/lists/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let database = common::test_database().await;
    let app = app_router(common::create_test_state(&database), false, TIMEOUT);

    let response = app
        .oneshot(Request::get("/nowhere").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"404 page not found\n");
}

#[tokio::test]
async fn test_create_list_with_body_logging() {
    let database = common::test_database().await;
    let app = app_router(common::create_test_state(&database), true, TIMEOUT);

    let response = app
        .oneshot(
            Request::post("/lists")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("title=Logged"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/lists");
    assert_eq!(common::count_rows(&database, "lists").await, 1);
}

#[tokio::test]
async fn test_form_without_content_type_is_bad_request() {
    let database = common::test_database().await;
    let app = app_router(common::create_test_state(&database), false, TIMEOUT);

    let response = app
        .oneshot(
            Request::post("/lists")
                .body(Body::from("title=Untyped"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::count_rows(&database, "lists").await, 0);
}
