//! Per-instance typed publish/subscribe
//!
//! Callbacks run synchronously on the publishing task, in connection order.
//! They must not block or touch the channel they are attached to.

use std::sync::Mutex;

use tokio::sync::broadcast;

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

const BROADCAST_CAPACITY: usize = 64;

pub struct EventChannel<T: Clone> {
    listeners: Mutex<Vec<Listener<T>>>,
    broadcast: broadcast::Sender<T>,
}

impl<T: Clone> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> EventChannel<T> {
    pub fn new() -> Self {
        let (broadcast, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            listeners: Mutex::new(Vec::new()),
            broadcast,
        }
    }

    pub fn connect<F>(&self, listener: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.lock().push(Box::new(listener));
    }

    /// Async receiver for events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.broadcast.subscribe()
    }

    pub fn emit(&self, event: T) {
        for listener in self.lock().iter() {
            listener(&event);
        }
        // no subscribers is fine
        let _ = self.broadcast.send(event);
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Listener<T>>> {
        self.listeners.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_order_preserved() {
        let channel = EventChannel::<u32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for tag in 0..3u32 {
            let seen = seen.clone();
            channel.connect(move |v| seen.lock().unwrap().push((tag, *v)));
        }
        channel.emit(7);
        channel.emit(8);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(0, 7), (1, 7), (2, 7), (0, 8), (1, 8), (2, 8)]
        );
    }

    #[test]
    fn test_instances_do_not_share_listeners() {
        let a = EventChannel::<u8>::new();
        let b = EventChannel::<u8>::new();
        a.connect(|_| {});
        assert_eq!(a.listener_count(), 1);
        assert_eq!(b.listener_count(), 0);
        a.clear();
        assert_eq!(a.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_subscribe() {
        let channel = EventChannel::<&'static str>::new();
        channel.emit("lost");
        let mut rx = channel.subscribe();
        channel.emit("seen");
        assert_eq!(rx.recv().await.unwrap(), "seen");
    }
}
