// ── Mutation dispatcher ──
//
// Authenticated create/update/delete against the backend. Mutations are
// all-or-nothing: the slot handed in is only touched after the server has
// confirmed the change, and a failure leaves it exactly as it was.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use folio_api::types::{BlogPost, PostDraft, Project, ProjectDraft};
use folio_api::{ApiClient, Auth, endpoints};

use crate::contact::ContactForm;
use crate::error::CoreError;
use crate::key::{ResourceKey, ResourceKind};
use crate::slot::ResourceSlot;

/// Where the consuming page should go after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Back to a list, e.g. after deleting its member.
    Collection(ResourceKind),
    /// To the detail view of a confirmed resource.
    Detail(ResourceKey),
    /// The session is missing or expired.
    Login,
}

impl Navigation {
    /// Redirect implied by an error, if any.
    pub fn for_error(err: &CoreError) -> Option<Self> {
        err.is_unauthorized().then_some(Self::Login)
    }
}

/// A backend resource that admin pages can mutate.
pub trait Mutable: DeserializeOwned + Send + 'static {
    const KIND: ResourceKind;
    type Draft: Serialize + Sync;

    /// Identifier used in the detail path.
    fn ident(&self) -> String;

    fn collection_path() -> &'static str;

    fn detail_path(ident: &str) -> String;

    fn key(&self) -> ResourceKey {
        ResourceKey::with_id(Self::KIND, self.ident())
    }
}

impl Mutable for Project {
    const KIND: ResourceKind = ResourceKind::Project;
    type Draft = ProjectDraft;

    fn ident(&self) -> String {
        self.id.to_string()
    }

    fn collection_path() -> &'static str {
        endpoints::PROJECTS
    }

    fn detail_path(ident: &str) -> String {
        endpoints::project(ident)
    }
}

impl Mutable for BlogPost {
    const KIND: ResourceKind = ResourceKind::Post;
    type Draft = PostDraft;

    /// The slug when present, else the numeric id.
    fn ident(&self) -> String {
        self.identifier()
    }

    fn collection_path() -> &'static str {
        endpoints::POSTS
    }

    fn detail_path(ident: &str) -> String {
        endpoints::post(ident)
    }
}

/// Runs admin mutations and the public contact submission.
#[derive(Debug, Clone)]
pub struct MutationDispatcher {
    client: ApiClient,
}

impl MutationDispatcher {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Delete the resource held in `slot`.
    ///
    /// On success the slot is invalidated and the caller is sent back to the
    /// collection. On failure the slot is left untouched so the user can
    /// retry.
    pub async fn delete<T: Mutable>(
        &self,
        slot: &mut ResourceSlot<T>,
    ) -> Result<Navigation, CoreError> {
        let Some(ident) = slot.value().map(T::ident) else {
            return Err(CoreError::NotFound {
                resource: slot
                    .key()
                    .map_or_else(|| T::KIND.to_string(), ToString::to_string),
            });
        };

        debug!(kind = %T::KIND, %ident, "deleting");
        self.client
            .delete(&T::detail_path(&ident), Auth::Required)
            .await?;
        info!(kind = %T::KIND, %ident, "deleted");

        slot.invalidate();
        Ok(Navigation::Collection(T::KIND.collection()))
    }

    /// Create a resource and seed `slot` with the confirmed value.
    pub async fn create<T: Mutable>(
        &self,
        draft: &T::Draft,
        slot: &mut ResourceSlot<T>,
    ) -> Result<Navigation, CoreError> {
        let created: T = self
            .client
            .post(T::collection_path(), draft, Auth::Required)
            .await?;
        let key = created.key();
        info!(%key, "created");
        slot.seed(key.clone(), created);
        Ok(Navigation::Detail(key))
    }

    /// Replace the resource held in `slot` and reseed it with the server's
    /// version.
    pub async fn update<T: Mutable>(
        &self,
        draft: &T::Draft,
        slot: &mut ResourceSlot<T>,
    ) -> Result<Navigation, CoreError> {
        let Some(ident) = slot.value().map(T::ident) else {
            return Err(CoreError::NotFound {
                resource: T::KIND.to_string(),
            });
        };
        let updated: T = self
            .client
            .put(&T::detail_path(&ident), draft, Auth::Required)
            .await?;
        let key = updated.key();
        info!(%key, "updated");
        slot.seed(key.clone(), updated);
        Ok(Navigation::Detail(key))
    }

    /// Validate and send the contact form. Nothing is sent when validation
    /// fails.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<(), CoreError> {
        let message = form.validate()?;
        self.client.send_contact(&message).await?;
        debug!("contact message sent");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unauthorized_redirects_to_login() {
        assert_eq!(
            Navigation::for_error(&CoreError::Unauthorized { status: 401 }),
            Some(Navigation::Login)
        );
        assert_eq!(
            Navigation::for_error(&CoreError::HttpStatus {
                status: 500,
                message: String::new()
            }),
            None
        );
    }

    #[test]
    fn post_key_prefers_slug() {
        let post: BlogPost =
            serde_json::from_value(json!({ "id": 4, "title": "T", "slug": "hello" })).unwrap();
        assert_eq!(post.key(), ResourceKey::post("hello"));
        assert_eq!(BlogPost::detail_path(&post.ident()), "/api/blog/posts/hello/");
    }

    #[tokio::test]
    async fn delete_without_value_is_not_found() {
        let client = ApiClient::from_reqwest(None, reqwest::Client::new()).unwrap();
        let dispatcher = MutationDispatcher::new(client);
        let mut slot: ResourceSlot<Project> = ResourceSlot::new();

        let err = dispatcher.delete(&mut slot).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn invalid_contact_never_reaches_transport() {
        let client = ApiClient::from_reqwest(None, reqwest::Client::new()).unwrap();
        let dispatcher = MutationDispatcher::new(client);

        // An unconfigured client would fail with ConfigMissing if called.
        let err = dispatcher
            .submit_contact(&ContactForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation { .. }), "got {err:?}");
    }
}
