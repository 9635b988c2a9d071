use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = app_with_options(LeptosOptions::builder().output_name("folio").build())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_bundle_asset_is_not_found() {
    let response = app_with_options(LeptosOptions::builder().output_name("folio").build())
        .oneshot(Request::builder().uri("/pkg/does-not-exist.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
