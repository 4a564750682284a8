//! Example: retrying an async operation with a shorter attempt budget.

use iterum::future::retry;
use std::time::Duration;

// Fails about 80% of the time.
async fn fetch_data(url: &str) -> Result<String, String> {
    if rand::random::<f64>() < 0.8 {
        Err(format!("failed to connect to {url}"))
    } else {
        Ok(format!("data from {url}"))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let result = retry(|| fetch_data("https://example.com"))
        .set_attempts(5)
        .set_delay(Duration::from_millis(100))
        .await;

    match result {
        Ok(data) => println!("Fetch succeeded with result: {data}"),
        Err(e) => println!("All attempts failed with error: {e}"),
    }
}
