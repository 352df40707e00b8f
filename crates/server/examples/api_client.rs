//! Examples for using the KMP Trace Server API
//!
//! Start the server first (`cargo run -p kmp-server`), then run
//! `cargo run -p kmp-server --example api_client`.

use reqwest::Client;
use serde_json::{json, Value};

const SERVER_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = Client::new();

    // Example 1: Health check
    println!("1. Health Check:");
    let resp = client.get(format!("{SERVER_URL}/health")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 2: Traced search
    println!("2. Traced Search:");
    let resp = client
        .post(format!("{SERVER_URL}/kmp"))
        .json(&json!({
            "text": "ABABDABACDABABCABAB",
            "pattern": "ABABCABAB"
        }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    let body: Value = resp.json().await?;
    println!("Failure function: {}", body["failureFunction"]);
    println!("Positions: {}", body["positions"]);
    println!("Comparisons: {}", body["comparisons"]);
    if let Some(steps) = body["steps"].as_array() {
        println!("Steps ({}):", steps.len());
        for step in steps {
            println!("  [{}] {}", step["comparisons"], step["status"]);
        }
    }
    println!();

    // Example 3: Validation error
    println!("3. Empty Pattern:");
    let resp = client
        .post(format!("{SERVER_URL}/kmp"))
        .json(&json!({ "text": "abc", "pattern": "" }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);
    println!();

    // Example 4: Service metadata
    println!("4. Service Info:");
    let resp = client.get(format!("{SERVER_URL}/api/v1/info")).send().await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
