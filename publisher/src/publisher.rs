use async_trait::async_trait;
use dashmap::DashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use common::types::Callback;
use common::Notifiable;

#[derive(PartialEq, Clone, Debug)]
pub enum PublisherError {
    ListenerNotFound(String),
}

impl fmt::Display for PublisherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublisherError::ListenerNotFound(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PublisherError {}

#[async_trait]
pub trait Publishable<T> {
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid;
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError>;
    fn unregister_all(&self);
    async fn notify_listeners(&self, data: Arc<T>);
}

/// Record of registered listeners that will be notified of updates
#[derive(Clone, Default)]
pub struct Publisher<T> {
    listeners: Arc<DashMap<Uuid, Callback<T>>>,
}

impl<T> Publisher<T> {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::new()),
        }
    }

    // Returns true if no listeners registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    // Returns number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

#[async_trait]
impl<T> Publishable<T> for Publisher<T>
where
    T: Send + Sync + 'static,
{
    fn register_listener(&self, listener: &mut dyn Notifiable<T>) -> Uuid {
        let callback = listener.get_callback();
        let listener_id = Uuid::new_v4();
        listener.set_id(listener_id);
        self.listeners.insert(listener_id, callback);
        listener_id
    }

    fn unregister_all(&self) {
        self.listeners.clear();
    }

    /// Returns PublisherError::ListenerNotFound() if no id matches with any of the registered listeners
    fn unregister_listener(&self, listener_id: Uuid) -> Result<(), PublisherError> {
        self.listeners
            .remove(&listener_id)
            .map(|_| ())
            .ok_or(PublisherError::ListenerNotFound(format!(
                "Listener with id {} not found",
                listener_id
            )))
    }

    /// Calls each registered listener with the provided data, one after the other.
    async fn notify_listeners(&self, data: Arc<T>) {
        // snapshot so no shard lock is held across an await
        let listeners: Vec<(Uuid, Callback<T>)> = self
            .listeners
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();

        for (id, callback) in listeners {
            callback(id, data.clone()).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{listener, listener::Listener};
    use common::Sample3D;
    use std::sync::Mutex;

    struct TestHandler {
        data: Arc<Mutex<Option<Sample3D>>>,
    }

    impl TestHandler {
        fn new() -> Self {
            Self {
                data: Arc::new(Mutex::new(None)),
            }
        }

        async fn handle(&self, _id: Uuid, value: Arc<Sample3D>) {
            let mut data = self.data.lock().unwrap();
            *data = Some(*value);
        }
    }

    #[tokio::test]
    async fn test_register_and_notify_listener() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = Listener::new({
            let handler = handler.clone();
            move |id: Uuid, value| {
                let handler = handler.clone();
                async move { handler.handle(id, value).await }
            }
        });

        let _listener_id = publisher.register_listener(&mut listener);
        publisher
            .notify_listeners(Arc::new(Sample3D::new(0.0, [1.0, 2.0, 3.0])))
            .await;

        let data = handler.data.lock().unwrap();
        assert_eq!(data.unwrap().get_measurement().inner(), [1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn test_register_and_notify_listener_macro() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = listener!(handler.handle);

        let listener_id = publisher.register_listener(&mut listener);
        assert_eq!(listener.id(), Some(listener_id));
        publisher
            .notify_listeners(Arc::new(Sample3D::new(0.0, [4.0, 2.0, 0.0])))
            .await;

        assert!(handler.data.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_notify_every_listener() {
        let publisher = Publisher::new();
        let first = Arc::new(TestHandler::new());
        let second = Arc::new(TestHandler::new());

        publisher.register_listener(&mut listener!(first.handle));
        publisher.register_listener(&mut listener!(second.handle));
        assert_eq!(publisher.len(), 2);

        publisher
            .notify_listeners(Arc::new(Sample3D::new(0.0, [1.0, 1.0, 1.0])))
            .await;

        assert!(first.data.lock().unwrap().is_some());
        assert!(second.data.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unregister_listener() {
        let publisher = Publisher::new();
        let handler = Arc::new(TestHandler::new());

        let mut listener = listener!(handler.handle);

        let listener_id = publisher.register_listener(&mut listener);
        assert_eq!(publisher.unregister_listener(listener_id), Ok(()));
        assert!(publisher.unregister_listener(listener_id).is_err());
        publisher
            .notify_listeners(Arc::new(Sample3D::new(0.0, [1.0, 1.0, 1.0])))
            .await;

        // Should remain unchanged since listener was removed
        assert!(handler.data.lock().unwrap().is_none());
        assert!(publisher.is_empty());
    }

    #[test]
    fn test_unregister_all() {
        let publisher = Publisher::<Sample3D>::new();
        let handler = Arc::new(TestHandler::new());
        publisher.register_listener(&mut listener!(handler.handle));
        publisher.register_listener(&mut listener!(handler.handle));
        publisher.unregister_all();
        assert!(publisher.is_empty());
    }
}
