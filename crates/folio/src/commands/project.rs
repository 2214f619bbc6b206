//! Project detail command.

use serde::Serialize;
use tabled::Tabled;

use folio_api::types::Project;
use folio_core::{ProjectDetail, derive};

use crate::cli::ProjectArgs;
use crate::error::CliError;
use crate::output::{self, Palette};

use super::{Session, util};

// ── View model ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ProjectView {
    id: i64,
    title: String,
    description: String,
    github_url: Option<String>,
    live_url: Option<String>,
    main_image: String,
    image_index: usize,
    image_count: usize,
    skills: Vec<String>,
    hidden_skills: usize,
    links: Vec<LinkView>,
    related: Vec<RelatedView>,
}

#[derive(Debug, Serialize, Tabled)]
struct LinkView {
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Debug, Serialize, Tabled)]
struct RelatedView {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Cover")]
    cover: String,
}

fn build_view(page: &ProjectDetail, project: &Project) -> ProjectView {
    ProjectView {
        id: project.id,
        title: project.title.clone(),
        description: derive::strip_html(project.description.as_deref().unwrap_or_default()),
        github_url: project.github_url.clone(),
        live_url: project.live_url.clone(),
        main_image: page.main_image(),
        image_index: page.gallery().active_index(),
        image_count: page.gallery().len(),
        skills: page.skills(),
        hidden_skills: page.hidden_skill_count(),
        links: page
            .links()
            .into_iter()
            .map(|l| LinkView {
                text: l.text.unwrap_or_else(|| l.url.clone()),
                url: l.url,
            })
            .collect(),
        related: page
            .related()
            .iter()
            .map(|p| RelatedView {
                id: p.id,
                title: p.title.clone(),
                cover: page.cover_image(p),
            })
            .collect(),
    }
}

fn detail(v: &ProjectView, palette: &Palette) -> String {
    let mut skills = v.skills.join(", ");
    if v.hidden_skills > 0 {
        skills.push_str(&format!(" +{}", v.hidden_skills));
    }

    let mut lines = vec![
        palette.heading(&v.title),
        format!("ID:       {}", v.id),
        format!(
            "Image:    {} {}",
            v.main_image,
            palette.muted(&format!("({}/{})", v.image_index + 1, v.image_count.max(1)))
        ),
        format!("GitHub:   {}", util::or_dash(v.github_url.as_deref())),
        format!("Live:     {}", util::or_dash(v.live_url.as_deref())),
        format!("Skills:   {}", if skills.is_empty() { "-" } else { skills.as_str() }),
    ];
    if !v.description.is_empty() {
        lines.push(String::new());
        lines.push(v.description.clone());
    }
    if !v.links.is_empty() {
        lines.push(String::new());
        lines.push(palette.heading("Links"));
        lines.push(output::render_table(&v.links));
    }
    if !v.related.is_empty() {
        lines.push(String::new());
        lines.push(palette.heading("Other projects"));
        lines.push(output::render_table(&v.related));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: ProjectArgs, session: &Session) -> Result<(), CliError> {
    let mut page = ProjectDetail::new(session.ctx.clone());
    util::with_spinner("Loading project", session.quiet, page.load(&args.id, None)).await;

    if let Some(err) = page.error() {
        return Err(CliError::for_resource(err, "project", &args.id));
    }
    page.gallery_mut().select(args.image);
    util::flush_notices(page.notices(), session.quiet);

    let Some(project) = page.project() else {
        return Err(CliError::NotFound {
            resource_type: "project".into(),
            identifier: args.id,
        });
    };
    let view = build_view(&page, project);
    let rendered = output::render_single(
        session.format,
        &view,
        |v| detail(v, &session.palette),
        |v| v.id.to_string(),
    )?;
    session.print(&rendered);
    Ok(())
}
