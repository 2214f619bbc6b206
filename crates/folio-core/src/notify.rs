//! Non-blocking user notifications. Every failure a page catches ends up
//! here instead of propagating further.

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A toast: short title plus one line of detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message)
    }

    /// Failure notice for a read or mutation. Validation failures carry
    /// their own user-facing text; everything else gets `fallback`.
    pub fn from_error(err: &CoreError, fallback: &str) -> Self {
        match err {
            CoreError::Validation { message } => {
                Self::new(NotificationLevel::Warning, "Invalid input", message.clone())
            }
            CoreError::Unauthorized { .. } => {
                Self::error("Unauthorized", "Please log in to continue.")
            }
            _ => Self::error("Error", fallback),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

// Canned messages used by the page controllers.
pub const LOAD_PROJECT_FAILED: &str = "Failed to load project.";
pub const LOAD_POST_FAILED: &str = "Failed to load post.";
pub const LOAD_LANDING_FAILED: &str = "Failed to load page content.";
pub const DELETE_PROJECT_FAILED: &str = "Failed to delete project.";
pub const DELETE_POST_FAILED: &str = "Failed to delete post.";
pub const SEND_MESSAGE_FAILED: &str = "Failed to send message.";

pub fn project_deleted() -> Notification {
    Notification::success("Deleted", "Project deleted.")
}

pub fn post_deleted() -> Notification {
    Notification::success("Deleted", "Post deleted.")
}
