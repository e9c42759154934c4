//! Notification events emitted by board operations.
//!
//! The core only produces `{kind, title, description}` events; how they are
//! rendered (toast, log line) is the embedding shell's business.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Outcome flavor of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-visible, non-fatal outcome report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(description: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            description: description.to_string(),
        }
    }
}

/// Sink for notifications. Implementations must never fail the emitting
/// operation; a dropped receiver is not the board's problem.
pub trait Notify: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Channel-backed sink: the UI shell drains the receiver and renders toasts.
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notify for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // Receiver gone means the shell shut down; nothing left to tell.
        let _ = self.tx.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Notification::success("Task created successfully"));
        notifier.notify(Notification::error("Failed to update task"));

        let first = rx.try_recv().unwrap();
        assert_eq!(first.kind, NotificationKind::Success);
        assert_eq!(first.title, "Success");
        let second = rx.try_recv().unwrap();
        assert_eq!(second.kind, NotificationKind::Error);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_notify_survives_dropped_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Notification::success("ignored"));
    }
}
