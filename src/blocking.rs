use std::thread;
use std::time::Duration;

pub(crate) const DEFAULT_ATTEMPTS: usize = 20;
pub(crate) const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Creates a retry executor around a blocking fallible operation.
///
/// The operation is invoked up to 20 times, with a one second pause between
/// attempts. Both bounds are adjustable through [`Retry::set_attempts`] and
/// [`Retry::set_delay`] before the loop is driven.
///
/// # Arguments
///
/// * `operation` - A closure invoked once per attempt, producing a `Result`.
///
/// # Returns
///
/// A [`Retry`] value; call [`Retry::call`] to run the attempt loop.
pub fn retry<G, T, E>(operation: G) -> Retry<G>
where
    G: FnMut() -> Result<T, E>,
{
    Retry::new(operation)
}

/// A configured retry executor over a blocking operation.
///
/// Attempts run sequentially on the calling thread; the pause between
/// attempts is a blocking sleep of that same thread. Each executor owns its
/// own attempt counter, so independent invocations never interfere.
pub struct Retry<G> {
    operation: G,
    attempts: usize,
    delay: Duration,
}

impl<G> Retry<G> {
    fn new(operation: G) -> Self {
        Self {
            operation,
            attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets the maximum number of attempts, counting the first one.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is zero: an executor permitted zero attempts
    /// would have no failure to report.
    pub fn set_attempts(mut self, attempts: usize) -> Self {
        assert!(attempts > 0, "retry requires at least one attempt");
        self.attempts = attempts;
        self
    }

    /// Sets the pause taken between consecutive attempts.
    ///
    /// `Duration::ZERO` disables the pause entirely. No pause is ever taken
    /// after the final attempt.
    pub fn set_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Runs the attempt loop to completion.
    ///
    /// Returns the first successful value, or the error of the final attempt
    /// once the cap is exhausted. Errors from earlier attempts are discarded;
    /// the surfaced error is exactly what the operation produced, unwrapped.
    pub fn call<T, E>(mut self) -> Result<T, E>
    where
        G: FnMut() -> Result<T, E>,
    {
        let mut attempt = 1;

        loop {
            match (self.operation)() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt == self.attempts {
                        return Err(e);
                    }

                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, cap = self.attempts, "attempt failed, retrying");

                    thread::sleep(self.delay);
                    attempt += 1;
                }
            }
        }
    }
}
