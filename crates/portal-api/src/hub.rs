//! In-process notification hub.
//!
//! Room-keyed broadcast channels behind the WebSocket endpoint. Connected
//! clients join their role room and their `user-{id}` room; domain code
//! publishes typed frames to either. No core operation emits events yet;
//! the channel exists for event push.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, RwLock};

use portal_models::WsMessage;

/// Room for targeted pushes to a single user.
pub fn user_room(user_id: i64) -> String {
    format!("user-{user_id}")
}

/// Room-keyed pub/sub hub. Cheap to clone; all clones share the rooms.
#[derive(Clone)]
pub struct NotificationHub {
    rooms: Arc<RwLock<HashMap<String, broadcast::Sender<WsMessage>>>>,
    capacity: usize,
}

impl NotificationHub {
    /// Create a hub with the default per-room buffer (64 frames).
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Subscribe to a room, creating it on first use.
    pub async fn subscribe(&self, room: &str) -> broadcast::Receiver<WsMessage> {
        let mut rooms = self.rooms.write().await;
        rooms
            .entry(room.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    /// Publish to a room. No-op when nobody is subscribed.
    pub async fn publish(&self, room: &str, message: WsMessage) {
        let rooms = self.rooms.read().await;
        if let Some(tx) = rooms.get(room) {
            let _ = tx.send(message);
        }
    }

    /// Drop rooms with no remaining subscribers.
    pub async fn cleanup(&self) {
        let mut rooms = self.rooms.write().await;
        rooms.retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_subscribe_roundtrip() {
        let hub = NotificationHub::new();
        let mut rx = hub.subscribe("HR").await;

        hub.publish("HR", WsMessage::notification("test", serde_json::json!({})))
            .await;

        let frame = rx.recv().await.unwrap();
        assert!(matches!(frame, WsMessage::Notification { .. }));
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_noop() {
        let hub = NotificationHub::new();
        hub.publish(&user_room(7), WsMessage::pong()).await;
    }

    #[tokio::test]
    async fn test_rooms_are_isolated() {
        let hub = NotificationHub::new();
        let mut hr = hub.subscribe("HR").await;
        let mut user = hub.subscribe(&user_room(7)).await;

        hub.publish("HR", WsMessage::pong()).await;

        assert!(hr.recv().await.is_ok());
        assert!(user.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cleanup_drops_empty_rooms() {
        let hub = NotificationHub::new();
        {
            let _rx = hub.subscribe("HR").await;
        }
        hub.cleanup().await;
        assert!(hub.rooms.read().await.is_empty());
    }
}
