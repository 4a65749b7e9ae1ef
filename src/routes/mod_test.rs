use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("guardpost").build()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn not_found_renders_fallback_page_with_404() {
    let _ = any_spawner::Executor::init_tokio();
    let req = axum::http::Request::builder().uri("/no-such-page").body(Body::empty()).unwrap();

    let response = not_found(State(test_options()), req).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found."));
}
