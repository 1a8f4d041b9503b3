//! Delayed square: validate an integer now, deliver its square after a fixed delay.
//!
//! ```no_run
//! # async fn demo() {
//! use snippets::delayed_square::square_async;
//!
//! square_async(4).on_complete(
//!     |value| println!("{value}"),
//!     |message| eprintln!("{message}"),
//! );
//! # }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, Sleep};

use crate::config::{SquareConfig, DEFAULT_DELAY_MS};
use crate::error::SquareError;

/// Validation and squaring, without any delay.
pub fn evaluate(n: i32) -> Result<i64, SquareError> {
    if n < 0 {
        return Err(SquareError::invalid_input(n));
    }
    let n = i64::from(n);
    Ok(n * n)
}

/// Issues square requests that complete after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayedSquare {
    delay: Duration,
}

impl Default for DelayedSquare {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl DelayedSquare {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SquareConfig) -> Self {
        Self::new(config.delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a request for `n * n`.
    ///
    /// Negative input is rejected right here, so the returned handle resolves
    /// on its first poll. Otherwise the timer starts now, not when the handle
    /// is first awaited. Must be called from within a Tokio runtime.
    pub fn square(&self, n: i32) -> PendingSquare {
        match evaluate(n) {
            Ok(value) => PendingSquare {
                timer: Some(Box::pin(tokio::time::sleep(self.delay))),
                outcome: Some(Ok(value)),
            },
            Err(err) => PendingSquare {
                timer: None,
                outcome: Some(Err(err)),
            },
        }
    }
}

/// [`DelayedSquare::square`] with the default one second delay.
pub fn square_async(n: i32) -> PendingSquare {
    DelayedSquare::default().square(n)
}

/// An in-flight square request. Resolves exactly once.
#[derive(Debug)]
#[must_use = "the outcome is lost unless the request is awaited or given handlers"]
pub struct PendingSquare {
    timer: Option<Pin<Box<Sleep>>>,
    outcome: Option<Result<i64, SquareError>>,
}

impl PendingSquare {
    /// True when validation already failed and no timer was started.
    pub fn is_rejected(&self) -> bool {
        self.timer.is_none() && matches!(self.outcome, Some(Err(_)))
    }

    /// When the success becomes observable; `None` for a rejected request.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(|timer| timer.deadline())
    }

    /// Attach completion handlers. Exactly one of them runs, on a spawned task.
    pub fn on_complete<S, F>(self, on_success: S, on_failure: F) -> JoinHandle<()>
    where
        S: FnOnce(i64) + Send + 'static,
        F: FnOnce(String) + Send + 'static,
    {
        tokio::spawn(async move {
            match self.await {
                Ok(value) => on_success(value),
                Err(err) => on_failure(err.to_string()),
            }
        })
    }
}

/// # Panics
///
/// Polling again after the outcome has been returned panics.
impl Future for PendingSquare {
    type Output = Result<i64, SquareError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(timer) = self.timer.as_mut() {
            ready!(timer.as_mut().poll(cx));
            self.timer = None;
        }

        match self.outcome.take() {
            Some(outcome) => Poll::Ready(outcome),
            None => panic!("PendingSquare polled after completion"),
        }
    }
}
