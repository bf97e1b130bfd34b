use std::time::Duration;

use axum::http;
use reqwest::Client;

/// HTTP client for Workers AI calls
///
/// One client is built per server so its connection pool is shared by every
/// request. `timeout` bounds the whole exchange, including the body read.
pub fn http_client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
}
