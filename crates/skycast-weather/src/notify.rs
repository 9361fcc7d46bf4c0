//! Transient user notifications (fetch failures, etc.).

use tokio::sync::mpsc;

/// Sender half of the notification channel. Messages are plain text,
/// surfaced once by whatever UI collaborator holds the receiver.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: mpsc::UnboundedSender<String>,
}

impl Notifier {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Best-effort send; dropped if no one is listening.
    pub fn notify(&self, message: impl Into<String>) {
        let _ = self.tx.send(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_delivers_message() {
        let (notifier, mut rx) = Notifier::channel();
        notifier.notify("weather fetch failed");
        assert_eq!(rx.try_recv().unwrap(), "weather fetch failed");
    }

    #[test]
    fn test_notify_without_receiver_does_not_panic() {
        let (notifier, rx) = Notifier::channel();
        drop(rx);
        notifier.notify("nobody home");
    }
}
