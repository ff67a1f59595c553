use std::sync::Arc;

use tokio::sync::watch;

/// Observable value container: holds the latest value and notifies
/// subscribers on every write, including writes of an equal value.
///
/// Handles are cheap clones sharing one underlying channel. A subscriber
/// releases its subscription by dropping the receiver.
#[derive(Clone)]
pub struct Published<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T: Clone> Published<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// The current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Publish a new value, waking every subscriber.
    pub fn set(&self, value: T) {
        let _ = self.tx.send_replace(value);
    }

    /// Subscribe to changes. The receiver sees the value at subscription
    /// time via `borrow` and is notified of every subsequent [`set`].
    ///
    /// [`set`]: Published::set
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}
