use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use dara::app::App;
use dara::server::routes::create_router;
use dara::server::AppState;

fn router() -> Router {
    let app = App::builtin().expect("builtin app should build");
    create_router(AppState::new(app), "public")
}

async fn get(path: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    let response = router()
        .oneshot(request)
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (
        status,
        String::from_utf8(bytes.to_vec()).expect("body should be utf-8"),
    )
}

#[tokio::test]
async fn home_renders_shell_components() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"navbar\""));
    assert!(body.contains("Data API Platform"));
    assert_eq!(body.matches("class=\"feature-card\"").count(), 4);
    assert!(body.contains("class=\"footer\""));
}

#[tokio::test]
async fn datasets_lists_every_card() {
    let (status, body) = get("/datasets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"dataset-card\"").count(), 5);
    let energy = body.find("Global Energy Consumption").expect("first card");
    let netflix = body.find("Netflix Titles Dataset").expect("third card");
    assert!(energy < netflix);
}

#[tokio::test]
async fn trailing_slash_still_resolves() {
    let (status, body) = get("/datasets/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"dataset-card\"").count(), 5);
}

#[tokio::test]
async fn dataset_detail_renders_record() {
    let (status, body) = get("/datasets/2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("World Happiness Index"));
    assert!(body.contains("165 records"));
}

#[tokio::test]
async fn unknown_dataset_is_not_found() {
    let (status, body) = get("/datasets/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Dataset not found"));

    let (status, body) = get("/datasets/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Dataset not found"));
}

#[tokio::test]
async fn about_and_documentation_render() {
    let (status, body) = get("/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("About DARA"));

    let (status, body) = get("/documentation").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("class=\"api-table\""));
    assert!(body.contains("Medals"));
}

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let (status, body) = get("/pricing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    assert!(body.contains("class=\"navbar\""));
}

#[tokio::test]
async fn public_assets_are_served() {
    let (status, body) = get("/public/css/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".dataset-card"));
}
