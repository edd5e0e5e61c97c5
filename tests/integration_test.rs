use std::{env, time::Duration};

use reqwest::{Client, StatusCode};
use serde_json::json;
use tokio::time::sleep;

// Tests run against a live service, e.g.
// SESSION_SECRET=$(stow-session --generate-secret) stow-session --port 8000
// SESSION_SERVICE_URL=https://localhost:8000 cargo test
// Without SESSION_SERVICE_URL set they are skipped.
fn get_session_service_url() -> Option<String> {
    env::var("SESSION_SERVICE_URL").ok()
}

fn create_client() -> Client {
    Client::builder()
        .danger_accept_invalid_certs(true)
        .cookie_store(true)
        .build()
        .expect("Failed to build reqwest client")
}

async fn wait_for_server_ready(url: &str) {
    let timeout_sec = 30;
    let live_url = format!("{}/session/live", url);

    let client = create_client();
    let timeout = Duration::from_secs(timeout_sec);
    let start_time = std::time::Instant::now();

    while start_time.elapsed() < timeout {
        let response = client.get(&live_url).send().await;

        match response {
            Ok(resp) if resp.status() == StatusCode::OK => {
                println!("Server is ready!");
                return;
            }
            Ok(_) => {
                println!("Server not ready yet, retrying...");
            }
            Err(e) => {
                println!("Error connecting to server: {:?}", e);
            }
        }
        sleep(Duration::from_millis(500)).await;
    }

    panic!("Server did not become ready within {} seconds", timeout_sec);
}

#[tokio::test]
async fn test_live() {
    let Some(url) = get_session_service_url() else {
        return;
    };
    wait_for_server_ready(&url).await;
    let client = create_client();
    let response = client
        .get(format!("{}/session/live", url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_issue_and_validate() {
    let Some(url) = get_session_service_url() else {
        return;
    };
    wait_for_server_ready(&url).await;
    let client = create_client();

    let response = client
        .post(format!("{}/session/issue", url))
        .json(&json!({"user_id": 42}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("set-cookie header present")
        .to_str()
        .expect("set-cookie is valid utf-8")
        .to_string();
    assert!(set_cookie.starts_with("_rails-stow_session="));
    assert!(set_cookie.contains("HttpOnly"));

    // cookie store carries the session cookie forward
    let response = client
        .get(format!("{}/session/validate", url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user_id"], 42);
}

#[tokio::test]
async fn test_validate_without_cookie() {
    let Some(url) = get_session_service_url() else {
        return;
    };
    wait_for_server_ready(&url).await;
    let client = create_client();

    let response = client
        .get(format!("{}/session/validate", url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validate_tampered_cookie() {
    let Some(url) = get_session_service_url() else {
        return;
    };
    wait_for_server_ready(&url).await;
    let client = create_client();

    let response = client
        .get(format!("{}/session/validate", url))
        .header("Cookie", "_rails-stow_session=eyJ1c2VyX2lkIjo0Mn0=--0000")
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_clear_session() {
    let Some(url) = get_session_service_url() else {
        return;
    };
    wait_for_server_ready(&url).await;
    let client = create_client();

    let response = client
        .post(format!("{}/session/issue", url))
        .json(&json!({"user_id": 7}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{}/session/clear", url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .get(format!("{}/session/validate", url))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
