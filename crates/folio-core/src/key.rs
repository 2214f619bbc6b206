// ── Resource identity ──
//
// A ResourceKey names what a slot holds: kind plus optional id/slug.
// Two keys are equal exactly when the held data is interchangeable.

use std::fmt;

use folio_api::endpoints;
use strum::{Display, EnumString};

/// Every remote resource a page can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceKind {
    Hero,
    About,
    Skills,
    Contact,
    Projects,
    Project,
    ProjectLinks,
    Posts,
    Post,
}

impl ResourceKind {
    /// The collection view a detail resource returns to after deletion.
    pub fn collection(self) -> Self {
        match self {
            Self::Project | Self::ProjectLinks | Self::Projects => Self::Projects,
            Self::Post | Self::Posts => Self::Posts,
            other => other,
        }
    }
}

/// Identity of one fetched resource, rendered as `kind` or `kind:id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    kind: ResourceKind,
    ident: Option<String>,
}

impl ResourceKey {
    /// A singleton or collection resource.
    pub fn singleton(kind: ResourceKind) -> Self {
        Self { kind, ident: None }
    }

    /// A resource addressed by id or slug.
    pub fn with_id(kind: ResourceKind, ident: impl Into<String>) -> Self {
        Self {
            kind,
            ident: Some(ident.into()),
        }
    }

    pub fn project(id: impl Into<String>) -> Self {
        Self::with_id(ResourceKind::Project, id)
    }

    pub fn post(ident: impl Into<String>) -> Self {
        Self::with_id(ResourceKind::Post, ident)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    /// Backend path for this resource, if it is addressable.
    pub fn path(&self) -> Option<String> {
        let id = self.ident.as_deref();
        match (self.kind, id) {
            (ResourceKind::Hero, _) => Some(endpoints::HERO.to_owned()),
            (ResourceKind::About, _) => Some(endpoints::ABOUT.to_owned()),
            (ResourceKind::Skills, _) => Some(endpoints::SKILLS.to_owned()),
            (ResourceKind::Contact, _) => Some(endpoints::CONTACT.to_owned()),
            (ResourceKind::Projects, _) => Some(endpoints::PROJECTS.to_owned()),
            (ResourceKind::Posts, _) => Some(endpoints::POSTS.to_owned()),
            (ResourceKind::Project, Some(id)) => Some(endpoints::project(id)),
            (ResourceKind::ProjectLinks, Some(id)) => Some(endpoints::project_links(id)),
            (ResourceKind::Post, Some(id)) => Some(endpoints::post(id)),
            (ResourceKind::Project | ResourceKind::ProjectLinks | ResourceKind::Post, None) => {
                None
            }
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.ident {
            Some(id) => write!(f, "{}:{id}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_kind_colon_id() {
        assert_eq!(ResourceKey::project("5").to_string(), "project:5");
        assert_eq!(
            ResourceKey::singleton(ResourceKind::Skills).to_string(),
            "skills"
        );
        assert_eq!(
            ResourceKey::with_id(ResourceKind::ProjectLinks, "5").to_string(),
            "project-links:5"
        );
    }

    #[test]
    fn keys_compare_by_kind_and_id() {
        assert_eq!(ResourceKey::project("5"), ResourceKey::project("5"));
        assert_ne!(ResourceKey::project("5"), ResourceKey::project("7"));
        assert_ne!(ResourceKey::project("5"), ResourceKey::post("5"));
    }

    #[test]
    fn paths_follow_backend_routes() {
        assert_eq!(
            ResourceKey::project("5").path().as_deref(),
            Some("/api/projects/5/")
        );
        assert_eq!(
            ResourceKey::post("hello").path().as_deref(),
            Some("/api/blog/posts/hello/")
        );
        assert_eq!(
            ResourceKey::singleton(ResourceKind::Project).path(),
            None
        );
    }

    #[test]
    fn detail_kinds_return_to_their_collection() {
        assert_eq!(ResourceKind::Project.collection(), ResourceKind::Projects);
        assert_eq!(ResourceKind::Post.collection(), ResourceKind::Posts);
        assert_eq!(ResourceKind::Hero.collection(), ResourceKind::Hero);
    }
}
