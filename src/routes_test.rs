use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn empty_site() -> Router {
    static_routes(Path::new("__missing_site_root__")).fallback(not_found)
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = empty_site()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let response = empty_site()
        .oneshot(Request::builder().uri("/pkg/staybook.js").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_falls_back_to_not_found() {
    let response = empty_site()
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
