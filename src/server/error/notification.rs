use thiserror::Error;

/// Failure to deliver an order notification.
///
/// Never surfaced to clients: notification failures are logged and the request that
/// triggered them still succeeds.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Notification webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notification webhook returned status {0}")]
    Status(u16),
}
