use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Coalesces bursts of values: each `push` cancels the pending timer and
/// starts a new one, so only the last value of a burst is emitted, one
/// quiet interval after the final push.
pub struct Debouncer<T> {
    interval: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Returns the debouncer and the receiver settled values arrive on
    pub fn new(interval: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let debouncer = Self {
            interval,
            tx,
            pending: Arc::new(Mutex::new(None)),
        };
        (debouncer, rx)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Must be called from within a tokio runtime
    pub fn push(&self, value: T) {
        let tx = self.tx.clone();
        let interval = self.interval;

        let Ok(mut pending) = self.pending.lock() else {
            return;
        };
        if let Some(previous) = pending.take() {
            previous.abort();
            trace!("Debounce timer rescheduled");
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            let _ = tx.send(value);
        }));
    }

    /// Drop whatever is waiting without emitting it
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(previous) = pending.take() {
                previous.abort();
            }
        }
    }
}
