//! Page controllers: one per page of the site, each owning its slots,
//! derived state and interaction state.
//!
//! Every controller follows the same shape. `mount*` methods enter
//! `Loading` and hand back a [`PendingFetch`](crate::slot::PendingFetch)
//! (or nothing when the held data is already usable); `apply*` methods
//! feed the completion back. `load` does both for callers that simply
//! want to await a page. Failures never escape a controller: they are
//! queued as [`Notification`]s.

pub mod landing;
pub mod post;
pub mod project;

pub use landing::Landing;
pub use post::{AdminPost, PostDetail};
pub use project::ProjectDetail;

use folio_api::{ApiClient, add_cache_buster};

use crate::derive::PLACEHOLDER_IMAGE;
use crate::notify::Notification;
use crate::slot::{Completion, PendingFetch};

/// What every page needs from the outside world.
#[derive(Debug, Clone)]
pub struct PageContext {
    client: ApiClient,
    build_id: String,
}

impl PageContext {
    pub fn new(client: ApiClient, build_id: impl Into<String>) -> Self {
        Self {
            client,
            build_id: build_id.into(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    /// Cache-busted asset URL. The local placeholder is returned as is.
    pub fn asset_url(&self, raw: &str) -> String {
        if raw == PLACEHOLDER_IMAGE {
            return raw.to_owned();
        }
        add_cache_buster(raw, &self.build_id, self.client.base_url())
    }
}

/// Run a fetch if one was dispatched.
pub(crate) async fn settle<T>(pending: Option<PendingFetch<T>>) -> Option<Completion<T>> {
    match pending {
        Some(fetch) => Some(fetch.run().await),
        None => None,
    }
}

/// Pending user-facing notices of one page.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    queue: Vec<Notification>,
}

impl Notices {
    pub fn push(&mut self, notification: Notification) {
        self.queue.push(notification);
    }

    pub fn peek(&self) -> &[Notification] {
        &self.queue
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_busts_backend_media_only() {
        let client =
            ApiClient::from_reqwest(Some("https://api.example.com"), reqwest::Client::new()).unwrap();
        let ctx = PageContext::new(client, "9");
        assert_eq!(
            ctx.asset_url("/media/a.png"),
            "https://api.example.com/media/a.png?v=9"
        );
        assert_eq!(ctx.asset_url(PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn notices_drain_once() {
        let mut notices = Notices::default();
        notices.push(Notification::info("Hi", "there"));
        assert_eq!(notices.peek().len(), 1);
        assert_eq!(notices.drain().len(), 1);
        assert!(notices.drain().is_empty());
    }
}
