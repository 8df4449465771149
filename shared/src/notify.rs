//! notifications shown above the directory panel

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
        }
    }

    /// css classes for the alert node
    pub fn css_class(self) -> String {
        format!("alert alert-{} mt-2", self.as_str())
    }
}

/// handle used to dismiss one specific notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// visible notifications, newest first
///
/// the page inserts every alert before the directory panel, so the most
/// recent one sits on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    visible: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.visible.insert(
            0,
            Notification {
                id,
                message: message.into(),
                severity,
            },
        );
        id
    }

    /// remove exactly the notification `id`; false if already gone
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|notification| notification.id != id);
        self.visible.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class() {
        assert_eq!(Severity::Danger.css_class(), "alert alert-danger mt-2");
        assert_eq!(Severity::Success.css_class(), "alert alert-success mt-2");
    }

    #[test]
    fn test_newest_first() {
        let mut notifications = Notifications::default();
        notifications.push("first", Severity::Success);
        notifications.push("second", Severity::Danger);
        let messages: Vec<_> = notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn test_dismiss_removes_only_its_own_node() {
        let mut notifications = Notifications::default();
        let first = notifications.push("first", Severity::Success);
        let second = notifications.push("second", Severity::Danger);

        // first timer fires while second is still on screen
        assert!(notifications.dismiss(first));
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.iter().next().unwrap().id, second);

        assert!(!notifications.dismiss(first));
        assert!(notifications.dismiss(second));
        assert!(notifications.is_empty());
    }
}
