//! Single-slot channel modelling one direction of the half-duplex medium

use std::sync::Arc;
use std::time::Duration;

use cubesat_link_core::LinkSnapshot;
use tokio::sync::{mpsc, Mutex};
use tokio::time::timeout;

use crate::RadioError;

/// Bytes on the air together with the sender's radio settings, if known.
#[derive(Debug, Clone, PartialEq)]
pub struct AirFrame {
    pub data: Vec<u8>,
    pub snapshot: Option<LinkSnapshot>,
}

impl AirFrame {
    pub fn new(data: Vec<u8>, snapshot: Option<LinkSnapshot>) -> Self {
        Self { data, snapshot }
    }
}

/// Holds at most one pending item. Puts and takes are bounded in time: a put
/// that cannot land is a dropped frame, a take that times out yields nothing.
pub struct Mailbox<T> {
    tx: mpsc::Sender<T>,
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> Clone for Mailbox<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(1);
        Self {
            tx,
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    pub async fn put(&self, item: T, wait: Duration) -> Result<(), RadioError> {
        self.tx
            .send_timeout(item, wait)
            .await
            .map_err(|_| RadioError::ChannelBusy)
    }

    pub async fn take(&self, wait: Duration) -> Option<T> {
        let mut rx = self.rx.lock().await;
        timeout(wait, rx.recv()).await.ok().flatten()
    }

    /// Non-blocking take, `None` when empty or another task is waiting on it.
    pub fn try_take(&self) -> Option<T> {
        let mut rx = self.rx.try_lock().ok()?;
        rx.try_recv().ok()
    }
}
