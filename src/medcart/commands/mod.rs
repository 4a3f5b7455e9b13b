use crate::config::MedcartConfig;
use crate::model::{CartLine, Medicine};
use crate::session::NOTIFICATION_TTL;
use std::time::Duration;

pub mod add;
pub mod clear;
pub mod config;
pub mod get;
pub mod list;
pub mod quantity;
pub mod search;
pub mod submit;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A transient toast. Unlike a [`CmdMessage`] it carries a time-to-live: the
/// UI dismisses it on its own after `ttl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub ttl: Duration,
}

impl Notification {
    /// The "added to cart" toast shown after every successful add.
    pub fn added(name: &str) -> Self {
        Self {
            message: format!("{} added to cart", name),
            ttl: NOTIFICATION_TTL,
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub medicines: Vec<Medicine>,
    pub cart_lines: Vec<CartLine>,
    pub notification: Option<Notification>,
    pub config: Option<MedcartConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_medicines(mut self, medicines: Vec<Medicine>) -> Self {
        self.medicines = medicines;
        self
    }

    pub fn with_cart_lines(mut self, lines: Vec<CartLine>) -> Self {
        self.cart_lines = lines;
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with_config(mut self, config: MedcartConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
