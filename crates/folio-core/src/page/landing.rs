// Landing page: hero, about, skills carousel and the contact form.
//
// The three reads are independent and run concurrently. Skills are
// secondary: a failed fetch shows an empty carousel, not an error.

use tracing::warn;

use folio_api::types::{AboutItem, HeroItem, Skill};

use super::{Notices, PageContext, settle};
use crate::contact::{ContactForm, MSG_SENT};
use crate::derive::{self, TitleParts};
use crate::error::CoreError;
use crate::interaction::Carousel;
use crate::key::{ResourceKey, ResourceKind};
use crate::mutation::MutationDispatcher;
use crate::notify::{self, Notification};
use crate::slot::{Completion, PendingFetch, ResourceSlot, SlotStatus, SlotUpdate};

#[derive(Debug)]
pub struct Landing {
    ctx: PageContext,
    dispatcher: MutationDispatcher,
    hero: ResourceSlot<Vec<HeroItem>>,
    about: ResourceSlot<Option<AboutItem>>,
    skills: ResourceSlot<Vec<Skill>>,
    carousel: Carousel<String>,
    pub contact: ContactForm,
    sending: bool,
    notices: Notices,
}

impl Landing {
    /// `width` is the initial viewport width used to size the carousel.
    pub fn new(ctx: PageContext, width: u32) -> Self {
        let dispatcher = MutationDispatcher::new(ctx.client().clone());
        Self {
            ctx,
            dispatcher,
            hero: ResourceSlot::new(),
            about: ResourceSlot::new(),
            skills: ResourceSlot::new(),
            carousel: Carousel::new(Vec::new(), width),
            contact: ContactForm::default(),
            sending: false,
            notices: Notices::default(),
        }
    }

    // ── Fetching ─────────────────────────────────────────────────────

    pub fn mount_hero(&mut self) -> Option<PendingFetch<Vec<HeroItem>>> {
        let client = self.ctx.client().clone();
        self.hero.dispatch(ResourceKey::singleton(ResourceKind::Hero), async move {
            client.list_hero().await.map_err(CoreError::from)
        })
    }

    pub fn mount_about(&mut self) -> Option<PendingFetch<Option<AboutItem>>> {
        let client = self.ctx.client().clone();
        self.about.dispatch(ResourceKey::singleton(ResourceKind::About), async move {
            client.get_about().await.map_err(CoreError::from)
        })
    }

    pub fn mount_skills(&mut self) -> Option<PendingFetch<Vec<Skill>>> {
        let client = self.ctx.client().clone();
        self.skills.dispatch(ResourceKey::singleton(ResourceKind::Skills), async move {
            Ok::<_, CoreError>(client.list_skills().await.unwrap_or_else(|e| {
                warn!(error = %e, "skills unavailable, showing none");
                Vec::new()
            }))
        })
    }

    pub fn apply_hero(&mut self, done: Completion<Vec<HeroItem>>) -> SlotUpdate {
        let update = self.hero.apply(done);
        self.notify_failure(update, self.hero.error().cloned());
        update
    }

    pub fn apply_about(&mut self, done: Completion<Option<AboutItem>>) -> SlotUpdate {
        let update = self.about.apply(done);
        self.notify_failure(update, self.about.error().cloned());
        update
    }

    pub fn apply_skills(&mut self, done: Completion<Vec<Skill>>) -> SlotUpdate {
        let update = self.skills.apply(done);
        if update == SlotUpdate::Applied {
            let names = self.skill_names();
            self.carousel.set_items(names);
        }
        update
    }

    fn notify_failure(&mut self, update: SlotUpdate, error: Option<CoreError>) {
        if let (SlotUpdate::Applied, Some(err)) = (update, error) {
            self.notices
                .push(Notification::from_error(&err, notify::LOAD_LANDING_FAILED));
        }
    }

    /// Fetch everything the page shows.
    pub async fn load(&mut self) {
        let hero = self.mount_hero();
        let about = self.mount_about();
        let skills = self.mount_skills();

        let (hero, about, skills) = tokio::join!(settle(hero), settle(about), settle(skills));

        if let Some(done) = hero {
            self.apply_hero(done);
        }
        if let Some(done) = about {
            self.apply_about(done);
        }
        if let Some(done) = skills {
            self.apply_skills(done);
        }
    }

    // ── Derived state ────────────────────────────────────────────────

    pub fn is_loading(&self) -> bool {
        self.hero.is_loading() || self.about.is_loading() || self.skills.is_loading()
    }

    pub fn hero(&self) -> Option<&HeroItem> {
        self.hero.value().and_then(|items| derive::active_hero(items))
    }

    pub fn hero_image(&self) -> Option<String> {
        self.hero()
            .and_then(|h| h.image.as_deref())
            .filter(|url| !url.is_empty())
            .map(|url| self.ctx.asset_url(url))
    }

    pub fn about(&self) -> Option<&AboutItem> {
        self.about.value().and_then(Option::as_ref)
    }

    pub fn about_title(&self) -> TitleParts {
        derive::about_title(self.about())
    }

    pub fn about_status(&self) -> SlotStatus {
        self.about.status()
    }

    /// First failure among the primary reads (hero, about).
    pub fn error(&self) -> Option<&CoreError> {
        self.hero.error().or_else(|| self.about.error())
    }

    /// Unique, trimmed skill names in backend order.
    pub fn skill_names(&self) -> Vec<String> {
        let raw = self.skills.value().map_or_else(Vec::new, |skills| {
            skills
                .iter()
                .map(|s| serde_json::Value::String(s.reference.name.clone()))
                .collect()
        });
        derive::parse_skills(&serde_json::Value::Array(raw))
    }

    pub fn carousel(&self) -> &Carousel<String> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<String> {
        &mut self.carousel
    }

    // ── Contact form ─────────────────────────────────────────────────

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Validate and send the contact form. The form is cleared only on
    /// success.
    pub async fn submit_contact(&mut self) -> Result<(), CoreError> {
        self.sending = true;
        let result = self.dispatcher.submit_contact(&self.contact).await;
        self.sending = false;

        match &result {
            Ok(()) => {
                self.contact.clear();
                self.notices.push(Notification::success("Sent", MSG_SENT));
            }
            Err(err) => {
                self.notices
                    .push(Notification::from_error(err, notify::SEND_MESSAGE_FAILED));
            }
        }
        result
    }

    pub fn notices(&mut self) -> &mut Notices {
        &mut self.notices
    }
}
