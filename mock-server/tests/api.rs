use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use mock_server::{app, app_with, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn get_seeded_todo() {
    let resp = app().oneshot(get_request("/todos/168")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 168);
    assert_eq!(todo.title, "fix website");
    assert_eq!(todo.due, NaiveDate::from_ymd_opt(2020, 6, 6).unwrap());
}

#[tokio::test]
async fn each_id_gets_its_own_record() {
    let resp = app().oneshot(get_request("/todos/87549")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 87549);
    assert_eq!(todo.title, "Practice falcony");
}

#[tokio::test]
async fn get_todo_not_found_has_empty_body() {
    let resp = app().oneshot(get_request("/todos/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_todo_bad_id_returns_400() {
    let resp = app().oneshot(get_request("/todos/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn app_with_serves_custom_records() {
    let custom = Todo {
        id: 7,
        title: "water plants".to_string(),
        due: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
        notes: String::new(),
    };
    let router = app_with([custom.clone()]);

    let resp = router.clone().oneshot(get_request("/todos/7")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo, custom);

    let resp = router.oneshot(get_request("/todos/168")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn collection_route_is_not_served() {
    let resp = app().oneshot(get_request("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
