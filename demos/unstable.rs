//! Example: retrying an unstable blocking operation.

use iterum::retry;
use std::time::Duration;

// Fails about 70% of the time.
fn unstable_operation() -> Result<&'static str, &'static str> {
    if rand::random::<f64>() < 0.7 {
        Err("operation failed")
    } else {
        Ok("success")
    }
}

fn main() {
    let result = retry(unstable_operation)
        .set_delay(Duration::from_millis(200))
        .call();

    match result {
        Ok(value) => println!("Operation succeeded with result: {value}"),
        Err(e) => println!("All attempts failed with error: {e}"),
    }
}
