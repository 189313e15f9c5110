use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use system_health::{
    api::handlers::system::SystemHandler, app::build_router, config::Config, state::AppState,
};
use tokio::task::JoinSet;
use tower::ServiceExt;

fn test_app() -> Router {
    build_router(AppState::new(SystemHandler::new()), &Config::default())
}

fn health_request(method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/health")
        .body(Body::empty())
        .unwrap()
}

async fn status_and_body(app: Router, request: Request<Body>) -> Result<(StatusCode, Vec<u8>)> {
    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = response.into_body().collect().await?.to_bytes().to_vec();
    Ok((status, body))
}

#[tokio::test]
async fn test_health_returns_ok_with_empty_body() -> Result<()> {
    let (status, body) = status_and_body(test_app(), health_request(Method::GET)).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_health_head_returns_ok() -> Result<()> {
    let (status, body) = status_and_body(test_app(), health_request(Method::HEAD)).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_health_is_idempotent() -> Result<()> {
    let app = test_app();
    for _ in 0..20 {
        let (status, body) = status_and_body(app.clone(), health_request(Method::GET)).await?;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_health_ignores_request_body_and_query() -> Result<()> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health?verbose=true")
        .body(Body::from("ignored"))?;

    let (status, body) = status_and_body(test_app(), request).await?;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_health_handles_concurrent_requests() -> Result<()> {
    let app = test_app();
    let mut tasks = JoinSet::new();

    for _ in 0..1000 {
        let app = app.clone();
        tasks.spawn(async move { status_and_body(app, health_request(Method::GET)).await });
    }

    let mut ok = 0;
    while let Some(joined) = tasks.join_next().await {
        let (status, body) = joined??;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        ok += 1;
    }

    assert_eq!(ok, 1000);
    Ok(())
}

#[tokio::test]
async fn test_separate_handlers_respond_identically() -> Result<()> {
    let first = build_router(AppState::new(SystemHandler::new()), &Config::default());
    let second = build_router(AppState::new(SystemHandler::new()), &Config::default());

    let a = status_and_body(first, health_request(Method::GET)).await?;
    let b = status_and_body(second, health_request(Method::GET)).await?;

    assert_eq!(a, b);
    Ok(())
}

#[tokio::test]
async fn test_unknown_path_returns_not_found_json() -> Result<()> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .body(Body::empty())?;

    let (status, body) = status_and_body(test_app(), request).await?;
    let json: serde_json::Value = serde_json::from_slice(&body)?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn test_health_over_tcp_has_no_custom_headers() -> Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, test_app()).await });

    let response = reqwest::get(format!("http://{addr}/health")).await?;

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    for name in response.headers().keys() {
        assert!(
            matches!(name.as_str(), "content-length" | "date"),
            "unexpected header: {name}"
        );
    }
    assert!(response.bytes().await?.is_empty());
    Ok(())
}
