// Blog post pages.
//
// The public page resolves a post by slug from the full list (so the
// "more posts" section comes for free); the admin page fetches a single
// post by id with credentials and can delete it.

use folio_api::types::BlogPost;
use folio_api::{Auth, endpoints};

use super::{Notices, PageContext, settle};
use crate::derive::{self, Identified, RELATED_POSTS, TEASER_LEN};
use crate::error::CoreError;
use crate::key::{ResourceKey, ResourceKind};
use crate::mutation::{MutationDispatcher, Navigation};
use crate::notify::{self, Notification};
use crate::slot::{Completion, PendingFetch, ResourceSlot, SlotStatus, SlotUpdate};

// ── Public post page ─────────────────────────────────────────────────

#[derive(Debug)]
pub struct PostDetail {
    ctx: PageContext,
    slug: Option<String>,
    posts: ResourceSlot<Vec<BlogPost>>,
    notices: Notices,
}

impl PostDetail {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            slug: None,
            posts: ResourceSlot::new(),
            notices: Notices::default(),
        }
    }

    /// Show the post with `slug`. Switching between posts reuses the list
    /// already held.
    pub fn mount(&mut self, slug: &str) -> Option<PendingFetch<Vec<BlogPost>>> {
        self.slug = Some(slug.to_owned());
        let key = ResourceKey::singleton(ResourceKind::Posts);
        if self.posts.is_usable_for(&key) {
            return None;
        }
        let client = self.ctx.client().clone();
        self.posts.dispatch(key, async move {
            let posts = client.list_posts().await.map_err(CoreError::from)?;
            Ok::<_, CoreError>(derive::sort_newest_first(&posts))
        })
    }

    pub fn apply(&mut self, done: Completion<Vec<BlogPost>>) -> SlotUpdate {
        let update = self.posts.apply(done);
        if update == SlotUpdate::Applied {
            if let Some(err) = self.posts.error() {
                self.notices
                    .push(Notification::from_error(err, notify::LOAD_POST_FAILED));
            }
        }
        update
    }

    pub async fn load(&mut self, slug: &str) {
        if let Some(done) = settle(self.mount(slug)).await {
            self.apply(done);
        }
    }

    pub fn status(&self) -> SlotStatus {
        self.posts.status()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.posts.error()
    }

    pub fn current(&self) -> Option<&BlogPost> {
        let slug = self.slug.as_deref()?;
        self.posts.value()?.iter().find(|p| p.matches_id(slug))
    }

    /// The list loaded but holds no post with this slug.
    pub fn is_missing(&self) -> bool {
        self.posts.status() == SlotStatus::Ready && self.current().is_none()
    }

    /// Up to three newer-first posts other than the current one.
    pub fn others(&self) -> Vec<BlogPost> {
        match (self.slug.as_deref(), self.posts.value()) {
            (Some(slug), Some(all)) => derive::exclude_self(all, slug, RELATED_POSTS),
            _ => Vec::new(),
        }
    }

    /// Plain-text excerpt for a post card.
    pub fn teaser(post: &BlogPost) -> String {
        derive::truncate_text(post.content.as_deref().unwrap_or_default(), TEASER_LEN)
    }

    pub fn date(post: &BlogPost) -> String {
        post.created_at
            .as_deref()
            .map(derive::format_date)
            .unwrap_or_default()
    }

    pub fn cover_image(&self, post: &BlogPost) -> String {
        self.ctx.asset_url(derive::post_cover(post))
    }

    pub fn notices(&mut self) -> &mut Notices {
        &mut self.notices
    }
}

// ── Admin post page ──────────────────────────────────────────────────

#[derive(Debug)]
pub struct AdminPost {
    ctx: PageContext,
    dispatcher: MutationDispatcher,
    post: ResourceSlot<BlogPost>,
    notices: Notices,
}

impl AdminPost {
    pub fn new(ctx: PageContext) -> Self {
        let dispatcher = MutationDispatcher::new(ctx.client().clone());
        Self {
            ctx,
            dispatcher,
            post: ResourceSlot::new(),
            notices: Notices::default(),
        }
    }

    pub fn mount(&mut self, id: &str) -> Option<PendingFetch<BlogPost>> {
        let key = ResourceKey::post(id);
        if self.post.is_usable_for(&key) {
            return None;
        }
        let client = self.ctx.client().clone();
        let path = endpoints::post(id);
        self.post.dispatch(key, async move {
            client
                .get::<BlogPost>(&path, Auth::Required)
                .await
                .map_err(CoreError::from)
        })
    }

    pub fn apply(&mut self, done: Completion<BlogPost>) -> SlotUpdate {
        let update = self.post.apply(done);
        if update == SlotUpdate::Applied {
            if let Some(err) = self.post.error() {
                self.notices
                    .push(Notification::from_error(err, notify::LOAD_POST_FAILED));
            }
        }
        update
    }

    pub async fn load(&mut self, id: &str) {
        if let Some(done) = settle(self.mount(id)).await {
            self.apply(done);
        }
    }

    pub fn status(&self) -> SlotStatus {
        self.post.status()
    }

    pub fn post(&self) -> Option<&BlogPost> {
        self.post.value()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.post.error()
    }

    pub fn redirect(&self) -> Option<Navigation> {
        self.post.error().and_then(Navigation::for_error)
    }

    /// Delete the loaded post, addressed by slug when it has one.
    pub async fn delete(&mut self) -> Option<Navigation> {
        match self.dispatcher.delete(&mut self.post).await {
            Ok(nav) => {
                self.notices.push(notify::post_deleted());
                Some(nav)
            }
            Err(err) => {
                self.notices
                    .push(Notification::from_error(&err, notify::DELETE_POST_FAILED));
                Navigation::for_error(&err)
            }
        }
    }

    pub fn notices(&mut self) -> &mut Notices {
        &mut self.notices
    }
}
