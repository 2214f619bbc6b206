// ── Theme context ──
//
// Process-wide light/dark preference. Consumers read the current value
// or subscribe for changes; dropping a subscription unsubscribes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tokio::sync::watch;
use tracing::debug;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Shared handle to the current theme. Clones observe the same value.
#[derive(Debug, Clone)]
pub struct ThemeContext {
    sender: Arc<watch::Sender<Theme>>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Theme {
        *self.sender.borrow()
    }

    /// Subscribers are only woken when the value actually changes.
    pub fn set(&self, theme: Theme) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        });
        if changed {
            debug!(%theme, "theme changed");
        }
    }

    /// Flip light/dark, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            receiver: self.sender.subscribe(),
        }
    }
}

/// Receives theme changes until dropped.
#[derive(Debug)]
pub struct ThemeSubscription {
    receiver: watch::Receiver<Theme>,
}

impl ThemeSubscription {
    pub fn current(&self) -> Theme {
        *self.receiver.borrow()
    }

    /// Wait for the next change. `None` once every context handle is gone.
    pub async fn changed(&mut self) -> Option<Theme> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(ThemeContext::default().current(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_is_shared_across_clones() {
        let ctx = ThemeContext::new(Theme::Light);
        let other = ctx.clone();
        assert_eq!(ctx.toggle(), Theme::Dark);
        assert_eq!(other.current(), Theme::Dark);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let ctx = ThemeContext::default();
        let mut sub = ctx.subscribe();

        ctx.set(Theme::Light);
        assert_eq!(sub.changed().await, Some(Theme::Light));
        assert_eq!(sub.current(), Theme::Light);
    }

    #[tokio::test]
    async fn setting_same_theme_does_not_notify() {
        let ctx = ThemeContext::default();
        let mut sub = ctx.subscribe();

        ctx.set(Theme::Dark);
        ctx.set(Theme::Light);
        assert_eq!(sub.changed().await, Some(Theme::Light));
        assert!(!sub.receiver.has_changed().unwrap());
    }

    #[tokio::test]
    async fn changed_ends_when_context_dropped() {
        let ctx = ThemeContext::default();
        let mut sub = ctx.subscribe();
        drop(ctx);
        assert_eq!(sub.changed().await, None);
    }
}
