//! Blog post commands: the public page and the authenticated admin view.

use serde::Serialize;
use tabled::Tabled;

use folio_api::types::BlogPost;
use folio_core::{AdminPost, Navigation, PostDetail, derive};

use crate::cli::{AdminPostArgs, PostArgs};
use crate::error::CliError;
use crate::output::{self, Palette};

use super::{Session, util};

#[derive(Debug, Serialize)]
struct PostView {
    id: i64,
    slug: String,
    title: String,
    date: String,
    cover: Option<String>,
    content: String,
    others: Vec<PostCard>,
}

#[derive(Debug, Serialize, Tabled)]
struct PostCard {
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Teaser")]
    teaser: String,
}

impl PostView {
    fn new(post: &BlogPost, cover: Option<String>, others: Vec<PostCard>) -> Self {
        Self {
            id: post.id,
            slug: post.identifier(),
            title: post.title.clone(),
            date: PostDetail::date(post),
            cover,
            content: derive::strip_html(post.content.as_deref().unwrap_or_default()),
            others,
        }
    }
}

fn detail(v: &PostView, palette: &Palette) -> String {
    let mut lines = vec![
        palette.heading(&v.title),
        palette.muted(if v.date.is_empty() { "undated" } else { v.date.as_str() }),
    ];
    if let Some(cover) = &v.cover {
        lines.push(format!("Cover: {cover}"));
    }
    lines.push(String::new());
    lines.push(v.content.clone());
    if !v.others.is_empty() {
        lines.push(String::new());
        lines.push(palette.heading("More posts"));
        lines.push(output::render_table(&v.others));
    }
    lines.join("\n")
}

pub async fn handle(args: PostArgs, session: &Session) -> Result<(), CliError> {
    let mut page = PostDetail::new(session.ctx.clone());
    util::with_spinner("Loading post", session.quiet, page.load(&args.slug)).await;

    if let Some(err) = page.error() {
        return Err(CliError::for_resource(err, "post", &args.slug));
    }
    let Some(post) = page.current() else {
        return Err(CliError::NotFound {
            resource_type: "post".into(),
            identifier: args.slug,
        });
    };

    let others = page
        .others()
        .iter()
        .map(|p| PostCard {
            slug: p.identifier(),
            title: p.title.clone(),
            date: PostDetail::date(p),
            teaser: PostDetail::teaser(p),
        })
        .collect();
    let view = PostView::new(post, Some(page.cover_image(post)), others);
    util::flush_notices(page.notices(), session.quiet);

    let rendered = output::render_single(
        session.format,
        &view,
        |v| detail(v, &session.palette),
        |v| v.slug.clone(),
    )?;
    session.print(&rendered);
    Ok(())
}

pub async fn handle_admin(args: AdminPostArgs, session: &Session) -> Result<(), CliError> {
    let mut page = AdminPost::new(session.ctx.clone());
    util::with_spinner("Loading post", session.quiet, page.load(&args.id)).await;

    if page.redirect() == Some(Navigation::Login) {
        return Err(CliError::AuthFailed);
    }
    if let Some(err) = page.error() {
        return Err(CliError::for_resource(err, "post", &args.id));
    }
    let Some(post) = page.post() else {
        return Err(CliError::NotFound {
            resource_type: "post".into(),
            identifier: args.id,
        });
    };

    let view = PostView::new(post, None, Vec::new());
    let rendered = output::render_single(
        session.format,
        &view,
        |v| detail(v, &session.palette),
        |v| v.id.to_string(),
    )?;
    session.print(&rendered);
    Ok(())
}
