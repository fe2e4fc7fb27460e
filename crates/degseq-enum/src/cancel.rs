use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use degseq_core::{ErrorInfo, RealizeError};

/// Shared flag that asks a running enumeration to stop.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Combines an optional token and an optional deadline into one check.
#[derive(Debug, Clone)]
pub(crate) struct Watchdog<'a> {
    token: Option<&'a CancelToken>,
    started: Instant,
    deadline: Option<Duration>,
}

impl<'a> Watchdog<'a> {
    pub(crate) fn new(token: Option<&'a CancelToken>, deadline_ms: Option<u64>) -> Self {
        Self {
            token,
            started: Instant::now(),
            deadline: deadline_ms.map(Duration::from_millis),
        }
    }

    pub(crate) fn check(&self) -> Result<(), RealizeError> {
        if self.token.is_some_and(CancelToken::is_cancelled) {
            return Err(RealizeError::Enumeration(ErrorInfo::new(
                "cancelled",
                "enumeration was cancelled",
            )));
        }
        if let Some(limit) = self.deadline {
            let elapsed = self.started.elapsed();
            if elapsed >= limit {
                return Err(RealizeError::Enumeration(
                    ErrorInfo::new("deadline-exceeded", "enumeration ran past its deadline")
                        .with_context("deadline_ms", limit.as_millis().to_string())
                        .with_context("elapsed_ms", elapsed.as_millis().to_string()),
                ));
            }
        }
        Ok(())
    }
}
