// storefront_cart/src/debounce.rs

//! Trailing-edge debouncing for search-as-you-type.

use parking_lot::Mutex;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

type DebouncedFn<T> = Arc<dyn Fn(T) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

/// Delays a callback until calls stop arriving for `delay`.
///
/// Each [`call`](Debouncer::call) aborts whatever the previous call
/// scheduled, so only the last value of a burst reaches the callback.
/// Must be used from within a tokio runtime.
pub struct Debouncer<T: Send + 'static> {
  delay: Duration,
  callback: DebouncedFn<T>,
  pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
  pub fn new<F, Fut>(delay: Duration, callback: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
  {
    let wrapped: DebouncedFn<T> =
      Arc::new(move |value: T| -> Pin<Box<dyn Future<Output = ()> + Send>> { Box::pin(callback(value)) });
    Self {
      delay,
      callback: wrapped,
      pending: Mutex::new(None),
    }
  }

  pub fn delay(&self) -> Duration {
    self.delay
  }

  pub fn call(&self, value: T) {
    let callback = Arc::clone(&self.callback);
    let delay = self.delay;
    let handle = tokio::spawn(async move {
      tokio::time::sleep(delay).await;
      callback(value).await;
    });
    if let Some(previous) = self.pending.lock().replace(handle) {
      trace!("Superseding pending debounced call.");
      previous.abort();
    }
  }

  /// Drops any scheduled invocation.
  pub fn cancel(&self) {
    if let Some(previous) = self.pending.lock().take() {
      previous.abort();
    }
  }

  pub fn is_pending(&self) -> bool {
    self.pending.lock().as_ref().is_some_and(|h| !h.is_finished())
  }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
  fn drop(&mut self) {
    self.cancel();
  }
}

impl<T: Send + 'static> std::fmt::Debug for Debouncer<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Debouncer")
      .field("delay", &self.delay)
      .field("pending", &self.is_pending())
      .finish()
  }
}
