//! Notification socket frame schemas.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Server → client frames.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Sent once after a successful token handshake.
    Connected {
        email: String,
        role: String,
        timestamp: DateTime<Utc>,
    },

    /// Reply to a client ping.
    Pong {
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// A pushed event for one of the client's rooms.
    Notification {
        event: String,
        data: serde_json::Value,
        timestamp: DateTime<Utc>,
    },

    /// Handshake or delivery failure.
    Error {
        message: String,
        timestamp: DateTime<Utc>,
    },
}

impl WsMessage {
    /// Create a connected frame.
    pub fn connected(email: impl Into<String>, role: impl Into<String>) -> Self {
        WsMessage::Connected {
            email: email.into(),
            role: role.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a pong frame.
    pub fn pong() -> Self {
        WsMessage::Pong {
            message: "Server is alive".to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Create a notification frame.
    pub fn notification(event: impl Into<String>, data: serde_json::Value) -> Self {
        WsMessage::Notification {
            event: event.into(),
            data,
            timestamp: Utc::now(),
        }
    }

    /// Create an error frame.
    pub fn error(message: impl Into<String>) -> Self {
        WsMessage::Error {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Client → server frames sent after the token handshake.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    Ping,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pong_serialization() {
        let msg = WsMessage::pong();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"pong\""));
        assert!(json.contains("\"message\":\"Server is alive\""));
    }

    #[test]
    fn test_notification_serialization() {
        let msg = WsMessage::notification("resume_uploaded", serde_json::json!({"id": 1}));
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"notification\""));
        assert!(json.contains("\"event\":\"resume_uploaded\""));
    }

    #[test]
    fn test_client_ping_parses() {
        let frame: ClientFrame = serde_json::from_str("{\"type\":\"ping\"}").unwrap();
        assert!(matches!(frame, ClientFrame::Ping));
    }
}
