//! Greeting endpoint.

use axum::extract::Query;

use crate::api::dto::hello::HelloQuery;

/// `GET /hello?name=<name>` responds with `Hello {name}!` as plain text.
///
/// Without a `name` parameter the greeting is `Hello there!`.
pub async fn hello_handler(Query(query): Query<HelloQuery>) -> String {
    format!("Hello {}!", query.name_or_default())
}
