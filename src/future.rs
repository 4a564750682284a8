use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use tokio::time::Sleep;

use crate::blocking::{DEFAULT_ATTEMPTS, DEFAULT_DELAY};

/// Creates a future that retries an asynchronous operation.
///
/// # Arguments
///
/// * `factory` - A closure that returns a new future for each attempt.
///
/// # Returns
///
/// A [`Retry`] future that resolves to the first successful value, or to the
/// final attempt's error once the cap is exhausted. Defaults match the
/// blocking executor: 20 attempts, one second between them.
pub fn retry<G, F>(factory: G) -> Retry<G, F>
where
    G: FnMut() -> F,
    F: Future,
{
    Retry::new(factory)
}

/// A future that drives the retry attempt loop.
///
/// The in-flight attempt is recreated through the factory closure after each
/// failure. Between attempts the future suspends on a timer instead of
/// blocking the thread; no suspension follows the final attempt.
pub struct Retry<G, F> {
    factory: G,
    future: Option<Pin<Box<F>>>,
    timer: Option<Pin<Box<Sleep>>>,
    attempt: usize,
    attempts: usize,
    delay: Duration,
}

impl<G, F> Retry<G, F> {
    fn new(factory: G) -> Self {
        Self {
            factory,
            future: None,
            timer: None,
            attempt: 1,
            attempts: DEFAULT_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }

    /// Sets the maximum number of attempts, counting the first one.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is zero.
    pub fn set_attempts(mut self, attempts: usize) -> Self {
        assert!(attempts > 0, "retry requires at least one attempt");
        self.attempts = attempts;
        self
    }

    /// Sets the pause between consecutive attempts.
    ///
    /// `Duration::ZERO` skips the timer entirely.
    pub fn set_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl<G, F, T, E> Future for Retry<G, F>
where
    G: FnMut() -> F + Unpin,
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        if let Some(timer) = this.timer.as_mut() {
            match timer.as_mut().poll(cx) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(()) => {
                    this.timer = None;
                }
            }
        }

        if this.future.is_none() {
            this.future = Some(Box::pin((this.factory)()));
        }

        let fut = this.future.as_mut().unwrap();

        match fut.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,

            Poll::Ready(Ok(v)) => {
                this.future = None;
                Poll::Ready(Ok(v))
            }

            Poll::Ready(Err(e)) => {
                this.future = None;

                if this.attempt == this.attempts {
                    return Poll::Ready(Err(e));
                }

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt = this.attempt,
                    cap = this.attempts,
                    "attempt failed, retrying"
                );

                this.attempt += 1;

                if !this.delay.is_zero() {
                    this.timer = Some(Box::pin(tokio::time::sleep(this.delay)));
                }

                cx.waker().wake_by_ref();

                Poll::Pending
            }
        }
    }
}
