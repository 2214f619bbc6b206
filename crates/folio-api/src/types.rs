// Wire types for the portfolio backend.
//
// Field names follow the backend serializers (snake_case JSON). Optional
// and defaulted fields are lenient because the admin and public
// serializers do not always agree on which fields they include.

use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Landing page ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroItem {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subheadline: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instagram: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutItem {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cv: String,
    #[serde(default)]
    pub hiring_email: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillReference {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub reference: SkillReference,
}

/// Body of `POST /api/core/contact/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// ── Projects ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMedia {
    pub id: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    #[serde(default)]
    pub id: Option<i64>,
    pub url: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub media: Vec<ProjectMedia>,
    /// Loosely typed: strings, `{name}` records, a JSON string or a CSV
    /// string depending on the serializer that produced it.
    #[serde(default)]
    pub skills_list: serde_json::Value,
    #[serde(default)]
    pub links: Option<Vec<ProjectLink>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body of `POST /api/projects/` and `PUT /api/projects/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

// ── Blog ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogImage {
    pub id: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogLink {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<BlogImage>,
    #[serde(default)]
    pub links: Vec<BlogLink>,
}

impl BlogPost {
    /// Path identifier: the slug when present, the numeric id otherwise.
    pub fn identifier(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.to_owned(),
            _ => self.id.to_string(),
        }
    }
}

/// Body of `POST /api/blog/posts/` and `PUT /api/blog/posts/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

// ── List envelopes ───────────────────────────────────────────────────

/// A list endpoint answers either a bare array or a paginated
/// `{ "results": [...] }` envelope depending on backend pagination settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Paged { results: items } => items,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_payload_accepts_both_shapes() {
        let bare: ListPayload<ProjectLink> =
            serde_json::from_value(json!([{ "url": "https://a" }])).unwrap();
        assert_eq!(bare.into_vec().len(), 1);

        let paged: ListPayload<ProjectLink> = serde_json::from_value(json!({
            "count": 2,
            "results": [{ "url": "https://a" }, { "url": "https://b" }]
        }))
        .unwrap();
        assert_eq!(paged.into_vec().len(), 2);
    }

    #[test]
    fn project_tolerates_missing_optional_fields() {
        let p: Project = serde_json::from_value(json!({ "id": 3, "title": "Site" })).unwrap();
        assert!(p.media.is_empty());
        assert!(p.skills_list.is_null());
        assert!(p.links.is_none());
    }

    #[test]
    fn post_identifier_prefers_slug() {
        let mut post: BlogPost =
            serde_json::from_value(json!({ "id": 9, "title": "T", "slug": "hello" })).unwrap();
        assert_eq!(post.identifier(), "hello");
        post.slug = Some(String::new());
        assert_eq!(post.identifier(), "9");
    }

    #[test]
    fn about_with_null_cv_reads_as_empty() {
        let about: AboutItem = serde_json::from_value(json!({
            "id": 1,
            "title": "About",
            "description": null,
            "cv": null,
            "hiring_email": null
        }))
        .unwrap();
        assert_eq!(about.cv, "");
        assert_eq!(about.description, "");
        assert_eq!(about.hiring_email, None);
    }

    #[test]
    fn hero_with_null_fields_reads_as_defaults() {
        let hero: HeroItem = serde_json::from_value(json!({
            "id": 2,
            "headline": "Hi",
            "subheadline": null,
            "instagram": null,
            "order": null,
            "is_active": null
        }))
        .unwrap();
        assert_eq!(hero.headline, "Hi");
        assert_eq!(hero.subheadline, "");
        assert_eq!(hero.instagram, "");
        assert_eq!(hero.order, 0);
        assert!(!hero.is_active);
    }

    #[test]
    fn skill_list_with_null_icon_keeps_every_entry() {
        let skills: ListPayload<Skill> = serde_json::from_value(json!([
            { "id": 1, "reference": { "id": 10, "name": "Rust", "icon": "/i/rust.svg" } },
            { "id": 2, "reference": { "id": 11, "name": "SQL", "icon": null } }
        ]))
        .unwrap();
        let skills = skills.into_vec();
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].reference.name, "SQL");
        assert_eq!(skills[1].reference.icon, "");
    }
}
