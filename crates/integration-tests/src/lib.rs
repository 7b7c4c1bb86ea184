//! Integration tests for Storeroom.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and server
//! cargo run -p storeroom-cli -- migrate
//! cargo run -p storeroom-server
//!
//! # Run integration tests
//! cargo test -p storeroom-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they need a running server. To
//! exercise the fallback paths end to end, stop the database and re-run: the
//! product endpoints keep answering, with `_warning` set.

use reqwest::Client;

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("STOREROOM_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// Bootstrap admin credentials matching the server's demo defaults.
#[must_use]
pub fn bootstrap_credentials() -> (String, String) {
    (
        std::env::var("STOREROOM_BOOTSTRAP_EMAIL")
            .unwrap_or_else(|_| "admin@example.com".to_owned()),
        std::env::var("STOREROOM_BOOTSTRAP_PASSWORD")
            .unwrap_or_else(|_| "AdmiN_7788!@#".to_owned()),
    )
}

/// A cookie-holding client, logged in as the bootstrap admin.
///
/// # Panics
///
/// Panics if the server is unreachable or login fails.
pub async fn authenticated_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let (email, password) = bootstrap_credentials();
    let resp = client
        .post(format!("{}/auth/login", base_url()))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to reach server");
    assert!(resp.status().is_success(), "bootstrap login failed");

    client
}
