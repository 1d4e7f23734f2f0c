//! Cancellable handles for in-flight API calls.
//!
//! Every endpoint is an `async fn` that resolves exactly once; dropping its
//! future cancels the call. [`spawn_call`] moves a call onto the tokio
//! runtime and hands back a [`Call`] that can be awaited or aborted.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::TraktError;

/// Handle to a spawned API call.
pub struct Call<T> {
    handle: JoinHandle<Result<T, TraktError>>,
}

/// Spawn an API call on the current tokio runtime.
pub fn spawn_call<T, F>(future: F) -> Call<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, TraktError>> + Send + 'static,
{
    Call {
        handle: tokio::spawn(future),
    }
}

impl<T> Call<T> {
    /// Abort the call. Awaiting [`Call::result`] afterwards yields `Cancelled`
    /// unless the call had already finished.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the call's single outcome.
    pub async fn result(self) -> Result<T, TraktError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(TraktError::Cancelled),
            Err(e) => Err(TraktError::Transport(format!("call task failed: {e}"))),
        }
    }
}
