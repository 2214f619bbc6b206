// Project detail page.
//
// The project itself is the primary resource; it may arrive inline from
// the list page, in which case it is not refetched. Links and the other
// projects list are secondary and degrade to empty on failure.

use tracing::{debug, warn};

use folio_api::Auth;
use folio_api::types::{Project, ProjectLink, ProjectMedia};

use super::{Notices, PageContext, settle};
use crate::derive::{self, RELATED_PROJECTS, SKILLS_SHOWN};
use crate::error::CoreError;
use crate::interaction::Gallery;
use crate::key::{ResourceKey, ResourceKind};
use crate::mutation::{MutationDispatcher, Navigation};
use crate::notify::{self, Notification};
use crate::slot::{Completion, PendingFetch, ResourceSlot, SlotStatus, SlotUpdate};

#[derive(Debug)]
pub struct ProjectDetail {
    ctx: PageContext,
    dispatcher: MutationDispatcher,
    project: ResourceSlot<Project>,
    links: ResourceSlot<Vec<ProjectLink>>,
    others: ResourceSlot<Vec<Project>>,
    gallery: Gallery<ProjectMedia>,
    notices: Notices,
}

impl ProjectDetail {
    pub fn new(ctx: PageContext) -> Self {
        let dispatcher = MutationDispatcher::new(ctx.client().clone());
        Self {
            ctx,
            dispatcher,
            project: ResourceSlot::new(),
            links: ResourceSlot::new(),
            others: ResourceSlot::new(),
            gallery: Gallery::new(&[]),
            notices: Notices::default(),
        }
    }

    // ── Fetching ─────────────────────────────────────────────────────

    /// Show project `id`. An inline value for the same id is used as is;
    /// otherwise a fetch is dispatched unless the slot already holds it.
    pub fn mount(&mut self, id: &str, inline: Option<Project>) -> Option<PendingFetch<Project>> {
        let key = ResourceKey::project(id);
        if let Some(project) = inline.filter(|p| p.id.to_string() == id) {
            debug!(%key, "using inline project");
            self.project.seed(key, project);
            self.on_project_ready();
            return None;
        }
        if self.project.is_usable_for(&key) {
            return None;
        }

        self.links.invalidate();
        self.gallery.set_media(&[]);
        let client = self.ctx.client().clone();
        let id = id.to_owned();
        self.project.dispatch(key, async move {
            client.get_project(&id, Auth::Public).await.map_err(CoreError::from)
        })
    }

    pub fn apply_project(&mut self, done: Completion<Project>) -> SlotUpdate {
        let update = self.project.apply(done);
        if update == SlotUpdate::Applied {
            match self.project.status() {
                SlotStatus::Ready => self.on_project_ready(),
                SlotStatus::Error => {
                    if let Some(err) = self.project.error() {
                        self.notices
                            .push(Notification::from_error(err, notify::LOAD_PROJECT_FAILED));
                    }
                }
                SlotStatus::Idle | SlotStatus::Loading => {}
            }
        }
        update
    }

    fn on_project_ready(&mut self) {
        let Some(project) = self.project.value() else {
            return;
        };
        self.gallery.set_media(&project.media);

        // Links embedded in the detail payload make the separate fetch
        // unnecessary.
        if let Some(links) = project.links.clone().filter(|l| !l.is_empty()) {
            let key = ResourceKey::with_id(ResourceKind::ProjectLinks, project.id.to_string());
            self.links.seed(key, links);
        }
    }

    /// Secondary fetch of the current project's links. Only dispatched
    /// once the project is ready; a failure yields no links.
    pub fn mount_links(&mut self) -> Option<PendingFetch<Vec<ProjectLink>>> {
        let id = self.project.value()?.id.to_string();
        let key = ResourceKey::with_id(ResourceKind::ProjectLinks, id.clone());
        if self.links.is_usable_for(&key) {
            return None;
        }
        let client = self.ctx.client().clone();
        self.links.dispatch(key, async move {
            Ok::<_, CoreError>(client
                .list_project_links(&id, Auth::Public)
                .await
                .unwrap_or_else(|e| {
                    warn!(error = %e, project = %id, "project links unavailable");
                    Vec::new()
                }))
        })
    }

    pub fn apply_links(&mut self, done: Completion<Vec<ProjectLink>>) -> SlotUpdate {
        self.links.apply(done)
    }

    /// The full project list, used for "other projects".
    pub fn mount_others(&mut self) -> Option<PendingFetch<Vec<Project>>> {
        let key = ResourceKey::singleton(ResourceKind::Projects);
        if self.others.is_usable_for(&key) {
            return None;
        }
        let client = self.ctx.client().clone();
        self.others.dispatch(key, async move {
            Ok::<_, CoreError>(client.list_projects().await.unwrap_or_else(|e| {
                warn!(error = %e, "project list unavailable");
                Vec::new()
            }))
        })
    }

    pub fn apply_others(&mut self, done: Completion<Vec<Project>>) -> SlotUpdate {
        self.others.apply(done)
    }

    /// Load project `id` with its links and the other projects.
    pub async fn load(&mut self, id: &str, inline: Option<Project>) {
        let project = self.mount(id, inline);
        let others = self.mount_others();
        let (project, others) = tokio::join!(settle(project), settle(others));

        if let Some(done) = project {
            self.apply_project(done);
        }
        if let Some(done) = others {
            self.apply_others(done);
        }
        if let Some(done) = settle(self.mount_links()).await {
            self.apply_links(done);
        }
    }

    // ── Derived state ────────────────────────────────────────────────

    pub fn status(&self) -> SlotStatus {
        self.project.status()
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.value()
    }

    pub fn error(&self) -> Option<&CoreError> {
        self.project.error()
    }

    /// Login redirect if the last load was rejected.
    pub fn redirect(&self) -> Option<Navigation> {
        self.project.error().and_then(Navigation::for_error)
    }

    /// Links sorted by display order.
    pub fn links(&self) -> Vec<ProjectLink> {
        let mut links = self.links.value().cloned().unwrap_or_default();
        links.sort_by_key(|l| l.order.unwrap_or(0));
        links
    }

    /// Up to four other projects, excluding this one.
    pub fn related(&self) -> Vec<Project> {
        match (self.project.value(), self.others.value()) {
            (Some(current), Some(all)) => {
                derive::exclude_self(all, &current.id.to_string(), RELATED_PROJECTS)
            }
            _ => Vec::new(),
        }
    }

    /// Skill names shown as chips.
    pub fn skills(&self) -> Vec<String> {
        self.all_skills().into_iter().take(SKILLS_SHOWN).collect()
    }

    /// Skills beyond the shown chips.
    pub fn hidden_skill_count(&self) -> usize {
        self.all_skills().len().saturating_sub(SKILLS_SHOWN)
    }

    fn all_skills(&self) -> Vec<String> {
        self.project
            .value()
            .map(|p| derive::parse_skills(&p.skills_list))
            .unwrap_or_default()
    }

    pub fn gallery(&self) -> &Gallery<ProjectMedia> {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery<ProjectMedia> {
        &mut self.gallery
    }

    /// Cache-busted URL of the selected gallery image.
    pub fn main_image(&self) -> String {
        self.ctx.asset_url(self.gallery.active_image())
    }

    /// Thumbnail URL of a related project.
    pub fn cover_image(&self, project: &Project) -> String {
        let media = derive::sort_media(&project.media);
        self.ctx.asset_url(derive::main_image(&media, 0))
    }

    // ── Admin ────────────────────────────────────────────────────────

    /// Delete the shown project. On failure the page keeps showing it and
    /// only a login redirect is returned.
    pub async fn delete(&mut self) -> Option<Navigation> {
        match self.dispatcher.delete(&mut self.project).await {
            Ok(nav) => {
                self.links.invalidate();
                self.gallery.set_media(&[]);
                self.notices.push(notify::project_deleted());
                Some(nav)
            }
            Err(err) => {
                self.notices
                    .push(Notification::from_error(&err, notify::DELETE_PROJECT_FAILED));
                Navigation::for_error(&err)
            }
        }
    }

    pub fn notices(&mut self) -> &mut Notices {
        &mut self.notices
    }
}
