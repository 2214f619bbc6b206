// Async HTTP client for the portfolio REST backend.
//
// One network call per invocation, no retries. Authenticated calls attach
// `Authorization: Bearer <token>` from the credential handed in by the
// caller; the session store itself lives outside this crate.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::endpoints;
use crate::types::{
    AboutItem, BlogPost, ContactMessage, HeroItem, ListPayload, PostDraft, Project, ProjectDraft,
    ProjectLink, Skill,
};
use crate::{Error, TransportConfig};

// ── Error response shape (DRF style) ─────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    detail: Option<String>,
}

/// Whether a request must carry the bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Required,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the portfolio backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted.
/// A client built without a base URL is valid but every call fails with
/// [`Error::ConfigMissing`] before touching the network.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<Url>,
    token: Option<Arc<SecretString>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an optional base URL and transport config.
    ///
    /// A missing or blank base URL is not an error here.
    pub fn new(base_url: Option<&str>, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: Option<&str>, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = match base_url.map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(Self::normalize_base_url(raw)?),
            _ => None,
        };
        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Attach the bearer credential used for [`Auth::Required`] calls.
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(Arc::new(token));
        self
    }

    /// Ensure the base path ends with `/` so relative joins append.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a base-relative path (leading slash optional) onto the base URL.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_ref().ok_or(Error::ConfigMissing)?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    // ── Request core ─────────────────────────────────────────────────

    async fn send<B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;

        let bearer = match auth {
            Auth::Public => None,
            Auth::Required => {
                let Some(token) = self.token.as_ref() else {
                    debug!(%url, "no credential available for authenticated request");
                    return Err(Error::Unauthorized { status: 401 });
                };
                let mut value =
                    HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                        .map_err(|_| Error::Unauthorized { status: 401 })?;
                value.set_sensitive(true);
                Some(value)
            }
        };

        debug!("{method} {url}");

        let mut req = self.http.request(method, url);
        if let Some(value) = bearer {
            req = req.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        Ok(req.send().await?)
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        // 204 / empty bodies decode as JSON `null` so `()` and `Option<T>` work.
        let text = if body.trim().is_empty() {
            "null"
        } else {
            body.as_str()
        };
        serde_json::from_str(text).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Error::Unauthorized {
                status: status.as_u16(),
            };
        }

        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                }
            });

        Error::HttpStatus {
            status: status.as_u16(),
            message,
        }
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// Generic fetch returning the decoded JSON document.
    pub async fn fetch_json(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        auth: Auth,
    ) -> Result<serde_json::Value, Error> {
        let resp = self.send(method, path, body, auth).await?;
        Self::handle_response(resp).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, auth: Auth) -> Result<T, Error> {
        let resp = self.send::<()>(Method::GET, path, None, auth).await?;
        Self::handle_response(resp).await
    }

    /// GET a list endpoint, accepting bare arrays and `results` envelopes.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        auth: Auth,
    ) -> Result<Vec<T>, Error> {
        let payload: ListPayload<T> = self.get(path, auth).await?;
        Ok(payload.into_vec())
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, Error> {
        let resp = self.send(Method::POST, path, Some(body), auth).await?;
        Self::handle_response(resp).await
    }

    pub async fn post_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<(), Error> {
        let resp = self.send(Method::POST, path, Some(body), auth).await?;
        Self::handle_empty(resp).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, Error> {
        let resp = self.send(Method::PUT, path, Some(body), auth).await?;
        Self::handle_response(resp).await
    }

    pub async fn delete(&self, path: &str, auth: Auth) -> Result<(), Error> {
        let resp = self.send::<()>(Method::DELETE, path, None, auth).await?;
        Self::handle_empty(resp).await
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Landing page ─────────────────────────────────────────────────

    pub async fn list_hero(&self) -> Result<Vec<HeroItem>, Error> {
        self.get_list(endpoints::HERO, Auth::Public).await
    }

    pub async fn get_about(&self) -> Result<Option<AboutItem>, Error> {
        self.get(endpoints::ABOUT, Auth::Public).await
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, Error> {
        self.get_list(endpoints::SKILLS, Auth::Public).await
    }

    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), Error> {
        self.post_no_response(endpoints::CONTACT, message, Auth::Public)
            .await
    }

    // ── Projects ─────────────────────────────────────────────────────

    pub async fn list_projects(&self) -> Result<Vec<Project>, Error> {
        self.get_list(endpoints::PROJECTS, Auth::Public).await
    }

    pub async fn get_project(&self, id: &str, auth: Auth) -> Result<Project, Error> {
        self.get(&endpoints::project(id), auth).await
    }

    pub async fn list_project_links(
        &self,
        id: &str,
        auth: Auth,
    ) -> Result<Vec<ProjectLink>, Error> {
        self.get_list(&endpoints::project_links(id), auth).await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, Error> {
        self.post(endpoints::PROJECTS, draft, Auth::Required).await
    }

    pub async fn update_project(&self, id: &str, draft: &ProjectDraft) -> Result<Project, Error> {
        self.put(&endpoints::project(id), draft, Auth::Required)
            .await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), Error> {
        self.delete(&endpoints::project(id), Auth::Required).await
    }

    // ── Blog ─────────────────────────────────────────────────────────

    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, Error> {
        self.get_list(endpoints::POSTS, Auth::Public).await
    }

    pub async fn get_post(&self, ident: &str) -> Result<BlogPost, Error> {
        self.get(&endpoints::post(ident), Auth::Public).await
    }

    pub async fn create_post(&self, draft: &PostDraft) -> Result<BlogPost, Error> {
        self.post(endpoints::POSTS, draft, Auth::Required).await
    }

    pub async fn update_post(&self, ident: &str, draft: &PostDraft) -> Result<BlogPost, Error> {
        self.put(&endpoints::post(ident), draft, Auth::Required)
            .await
    }

    pub async fn delete_post(&self, ident: &str) -> Result<(), Error> {
        self.delete(&endpoints::post(ident), Auth::Required).await
    }
}
