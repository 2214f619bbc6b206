// Backend paths, relative to the configured base URL.
//
// Every collection and detail path carries the trailing slash the
// backend router expects.

pub const HERO: &str = "/api/core/hero/";
pub const ABOUT: &str = "/api/core/about/";
pub const CONTACT: &str = "/api/core/contact/";
pub const SKILLS: &str = "/api/skills/";
pub const PROJECTS: &str = "/api/projects/";
pub const POSTS: &str = "/api/blog/posts/";

pub fn project(id: &str) -> String {
    format!("{PROJECTS}{id}/")
}

pub fn project_links(id: &str) -> String {
    format!("{PROJECTS}{id}/links/")
}

/// A post detail path accepts either the numeric id or the slug.
pub fn post(ident: &str) -> String {
    format!("{POSTS}{ident}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_paths_keep_trailing_slash() {
        assert_eq!(project("5"), "/api/projects/5/");
        assert_eq!(project_links("5"), "/api/projects/5/links/");
        assert_eq!(post("hello-world"), "/api/blog/posts/hello-world/");
    }
}
