use axum::Router;
use axum::body::Body;
use axum::extract::{Path, RawQuery};
use axum::http::Request;
use axum::routing::{any, delete, get};
use axum::Json;
use tower::ServiceExt;

use super::*;
use crate::config::HostConfig;

/// Start a stand-in shortener API on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/urls",
            get(|RawQuery(query): RawQuery| async move { Json(serde_json::json!({ "query": query })) }).post(
                |headers: HeaderMap, body: String| async move {
                    let content_type = headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_owned();
                    (
                        StatusCode::CREATED,
                        Json(serde_json::json!({ "data": { "echo": body, "content_type": content_type } })),
                    )
                },
            ),
        )
        .route(
            "/resolve/{code}",
            get(|Path(code): Path<String>, RawQuery(query): RawQuery| async move {
                Json(serde_json::json!({ "code": code, "query": query }))
            }),
        )
        .route(
            "/accept",
            get(|headers: HeaderMap| async move {
                let accept = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()).map(str::to_owned);
                Json(serde_json::json!({ "accept": accept }))
            }),
        )
        .route(
            "/invalid",
            get(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({ "message": "The original url field must be a valid URL." })),
                )
            }),
        )
        .route(
            "/urls/{id}",
            delete(|Path(id): Path<i64>| async move {
                if id == 404 { StatusCode::NOT_FOUND } else { StatusCode::NO_CONTENT }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_router(api_url: String) -> Router {
    let state = AppState::new(HostConfig { api_url, ..HostConfig::default() }).unwrap();
    Router::new()
        .route(&format!("{PROXY_PREFIX}/{{*path}}"), any(forward))
        .with_state(state)
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://api.test", "urls", Some("page=2")), "http://api.test/urls?page=2");
}

#[test]
fn upstream_url_normalizes_slashes() {
    assert_eq!(upstream_url("http://api.test/v1/", "/urls/3", None), "http://api.test/v1/urls/3");
}

#[test]
fn upstream_url_drops_empty_query() {
    assert_eq!(upstream_url("http://api.test", "resolve/abc", Some("")), "http://api.test/resolve/abc");
}

#[tokio::test]
async fn get_forwards_path_and_query() {
    let app = proxy_router(spawn_upstream().await);
    let response = app
        .oneshot(Request::builder().uri("/api/urls?page=2").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_json(response).await, serde_json::json!({ "query": "page=2" }));
}

#[tokio::test]
async fn post_forwards_body_and_content_type() {
    let app = proxy_router(spawn_upstream().await);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/urls")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"original_url":"https://example.com"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["echo"], r#"{"original_url":"https://example.com"}"#);
    assert_eq!(json["data"]["content_type"], "application/json");
}

#[tokio::test]
async fn delete_passes_upstream_status_through() {
    let base = spawn_upstream().await;

    let ok = proxy_router(base.clone())
        .oneshot(Request::builder().method(Method::DELETE).uri("/api/urls/7").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::NO_CONTENT);

    let missing = proxy_router(base)
        .oneshot(Request::builder().method(Method::DELETE).uri("/api/urls/404").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = proxy_router(format!("http://{addr}"))
        .oneshot(Request::builder().uri("/api/urls?page=1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn encoded_path_segment_is_forwarded_verbatim() {
    let response = proxy_router(spawn_upstream().await)
        .oneshot(Request::builder().uri("/api/resolve/ab%3Fx%3D1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({ "code": "ab?x=1", "query": null }));
}

#[tokio::test]
async fn accept_header_is_forwarded() {
    let request = Request::builder()
        .uri("/api/accept")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = proxy_router(spawn_upstream().await).oneshot(request).await.unwrap();

    assert_eq!(body_json(response).await, serde_json::json!({ "accept": "application/json" }));
}

#[tokio::test]
async fn error_status_keeps_json_body_and_content_type() {
    let response = proxy_router(spawn_upstream().await)
        .oneshot(Request::builder().uri("/api/invalid").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "message": "The original url field must be a valid URL." })
    );
}
