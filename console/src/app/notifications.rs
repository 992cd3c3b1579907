//! Transient, dismissible messages for the shell to display.

use uuid::Uuid;

/// Older notifications are dropped once the queue holds this many.
pub const MAX_NOTIFICATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

/// Queue of notifications, oldest first, bounded by [`MAX_NOTIFICATIONS`].
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_NOTIFICATIONS {
            let overflow = self.items.len() - MAX_NOTIFICATIONS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NotificationLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NotificationLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NotificationLevel::Error, message)
    }

    /// Returns false if no notification has that id.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_notification() {
        let mut notifications = Notifications::default();
        let first = notifications.error("Delete failed");
        let second = notifications.success("Product created");

        assert!(notifications.dismiss(first));
        assert!(!notifications.dismiss(first));
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.latest().map(|n| n.id), Some(second));
        assert_eq!(
            notifications.latest().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn oldest_notifications_fall_off_past_the_cap() {
        let mut notifications = Notifications::default();
        let first = notifications.error("Failed to load products: offline");
        for i in 0..MAX_NOTIFICATIONS {
            notifications.info(format!("message {i}"));
        }

        assert_eq!(notifications.len(), MAX_NOTIFICATIONS);
        assert!(!notifications.dismiss(first));
        assert_eq!(
            notifications.iter().next().map(|n| n.message.as_str()),
            Some("message 0")
        );
        assert_eq!(
            notifications.latest().map(|n| n.message.as_str()),
            Some("message 19")
        );
    }
}
