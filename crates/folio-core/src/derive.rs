//! Derived view state: pure functions over a ready slot's value.
//!
//! Nothing here performs I/O or fails. Loosely typed backend output is
//! normalized to one canonical shape; anything unparsable becomes empty.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde_json::Value;

use folio_api::types::{AboutItem, BlogPost, HeroItem, Project, ProjectMedia};

/// Image shown when a project or post has no media.
pub const PLACEHOLDER_IMAGE: &str = "/project-placeholder.svg";

/// Related projects shown under a project.
pub const RELATED_PROJECTS: usize = 4;

/// Related posts shown under a post.
pub const RELATED_POSTS: usize = 3;

/// Visible characters of a post teaser.
pub const TEASER_LEN: usize = 140;

/// Skill chips shown on a project page.
pub const SKILLS_SHOWN: usize = 8;

const DEFAULT_ABOUT_TITLE: &str = "About Me";

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

// ── Media ────────────────────────────────────────────────────────────

/// Anything carrying an optional display order.
pub trait Ordered {
    fn order(&self) -> Option<i64>;
}

impl Ordered for ProjectMedia {
    fn order(&self) -> Option<i64> {
        self.order
    }
}

impl Ordered for HeroItem {
    fn order(&self) -> Option<i64> {
        Some(self.order)
    }
}

/// Stable ascending sort by `order`, absent orders counting as 0.
pub fn sort_media<M: Ordered + Clone>(items: &[M]) -> Vec<M> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|m| m.order().unwrap_or(0));
    sorted
}

/// Image URL at `index`, falling back to the placeholder.
pub fn main_image(media: &[ProjectMedia], index: usize) -> &str {
    media
        .get(index)
        .and_then(|m| m.image.as_deref())
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// First image of a post, falling back to the placeholder.
pub fn post_cover(post: &BlogPost) -> &str {
    post.images
        .first()
        .and_then(|i| i.image.as_deref())
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

// ── Pagination ───────────────────────────────────────────────────────

/// `items[page*per_page .. page*per_page + per_page]`, saturating at the
/// end of the slice. The caller clamps `page` first.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

// ── Skills ───────────────────────────────────────────────────────────

/// Normalize a loosely typed skills payload into unique names.
///
/// Accepts an array of strings and/or records (`name`, or a name nested
/// under `skill_reference` / `reference`), or a string holding either a
/// JSON array or comma-separated names. Order of first appearance wins.
pub fn parse_skills(raw: &Value) -> Vec<String> {
    let items: Vec<Value> = match raw {
        Value::Array(items) => items.clone(),
        Value::String(s) => split_skill_string(s),
        _ => Vec::new(),
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(skill_name)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn split_skill_string(s: &str) -> Vec<Value> {
    let s = s.trim();
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Array(items)) => items,
        Ok(_) => Vec::new(),
        Err(_) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Value::String(part.to_owned()))
            .collect(),
    }
}

fn skill_name(item: &Value) -> Option<String> {
    let name = match item {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .or_else(|| {
                ["skill_reference", "reference"]
                    .iter()
                    .find_map(|field| map.get(*field)?.get("name")?.as_str())
            })?,
        _ => return None,
    };
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

// ── Related items ────────────────────────────────────────────────────

/// Items that can be matched against a route identifier.
pub trait Identified {
    fn matches_id(&self, id: &str) -> bool;
}

impl Identified for Project {
    fn matches_id(&self, id: &str) -> bool {
        self.id.to_string() == id
    }
}

/// Public post routes carry the slug only.
impl Identified for BlogPost {
    fn matches_id(&self, id: &str) -> bool {
        self.slug.as_deref() == Some(id)
    }
}

/// Everything except `current_id`, truncated to `limit`.
pub fn exclude_self<T: Identified + Clone>(all: &[T], current_id: &str, limit: usize) -> Vec<T> {
    all.iter()
        .filter(|item| !item.matches_id(current_id))
        .take(limit)
        .cloned()
        .collect()
}

// ── Text ─────────────────────────────────────────────────────────────

/// Remove markup and decode the common character entities.
pub fn strip_html(html: &str) -> String {
    let text = TAG_RE.replace_all(html, "");
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_owned()
}

/// Strip markup, then cut to `max_len` visible characters, appending `…`
/// only when something was cut.
pub fn truncate_text(html: &str, max_len: usize) -> String {
    let text = strip_html(html);
    if text.chars().count() <= max_len {
        return text;
    }
    let mut cut: String = text.chars().take(max_len).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

// ── Landing page ─────────────────────────────────────────────────────

/// The hero to display: the first active one, else the first one.
pub fn active_hero(items: &[HeroItem]) -> Option<&HeroItem> {
    items.iter().find(|h| h.is_active).or_else(|| items.first())
}

/// Non-empty social links of a hero, in display order.
pub fn social_links(hero: &HeroItem) -> Vec<(&'static str, &str)> {
    [
        ("github", hero.github.trim()),
        ("linkedin", hero.linkedin.trim()),
        ("instagram", hero.instagram.trim()),
    ]
    .into_iter()
    .filter(|(_, url)| !url.is_empty())
    .collect()
}

/// About title split into a lead and a highlighted last word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    pub lead: String,
    pub highlight: String,
}

pub fn about_title(about: Option<&AboutItem>) -> TitleParts {
    let title = about
        .map(|a| a.title.trim())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_ABOUT_TITLE);

    match title.rsplit_once(' ') {
        Some((lead, last)) => TitleParts {
            lead: lead.to_owned(),
            highlight: last.to_owned(),
        },
        None => TitleParts {
            lead: String::new(),
            highlight: title.to_owned(),
        },
    }
}

// ── Posts ────────────────────────────────────────────────────────────

fn parse_created(post: &BlogPost) -> Option<DateTime<FixedOffset>> {
    post.created_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

/// Newest first; posts with missing or unparsable dates go last.
pub fn sort_newest_first(posts: &[BlogPost]) -> Vec<BlogPost> {
    let mut sorted = posts.to_vec();
    sorted.sort_by_key(|p| std::cmp::Reverse(parse_created(p)));
    sorted
}

/// `"15 Jun 2024"`, or empty when the timestamp does not parse.
pub fn format_date(iso: &str) -> String {
    DateTime::parse_from_rfc3339(iso)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default()
}
