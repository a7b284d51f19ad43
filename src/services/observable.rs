use tokio::sync::watch;

/// A state cell that notifies subscribers on every write
///
/// Backed by a `watch` channel, so readers always see the latest value and
/// writes never block, even with no subscribers attached.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Returns a copy of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replaces the value and wakes subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Receiver that observes every subsequent write
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_without_subscribers() {
        let cell = Observable::new(false);
        cell.set(true);
        assert!(cell.get());
    }

    #[tokio::test]
    async fn test_subscriber_sees_write() {
        let cell: Observable<String> = Observable::default();
        let mut rx = cell.subscribe();

        cell.set("Matrix".to_string());

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "Matrix");
    }
}
