mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use cactus::api::handlers::hello_handler;

fn server() -> TestServer {
    let app = Router::new().route("/hello", get(hello_handler));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_hello_with_name() {
    let response = server().get("/hello").add_query_param("name", "Neil").await;

    response.assert_status_ok();
    response.assert_text("Hello Neil!");
}

#[tokio::test]
async fn test_hello_defaults_to_there() {
    let response = server().get("/hello").await;

    response.assert_status_ok();
    response.assert_text("Hello there!");
}

#[tokio::test]
async fn test_hello_is_plain_text() {
    let response = server().get("/hello?name=Cactus").await;

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}
