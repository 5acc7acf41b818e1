//! Shared HTTP Client Module
//!
//! Provides a global, lazy-initialized HTTP client with connection pooling.
//! Analysis requests can take minutes while the backend extracts, embeds and
//! queries the document, so the timeout is generous.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Client-side timeout for analysis requests
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Global HTTP client for RAG backend calls
static RAG_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .build()
        .expect("Failed to create RAG HTTP client")
});

/// Get the global RAG HTTP client
#[inline]
pub fn rag_client() -> &'static Client {
    &RAG_CLIENT
}
