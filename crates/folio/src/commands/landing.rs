//! Landing page: hero, about and the paged skills carousel.

use serde::Serialize;

use folio_core::Landing;
use folio_core::derive;

use crate::cli::LandingArgs;
use crate::error::CliError;
use crate::output::{self, Palette};

use super::{Session, util};

#[derive(Debug, Serialize)]
struct LandingView {
    hero: Option<HeroView>,
    about: Option<AboutView>,
    skills: SkillsPage,
}

#[derive(Debug, Serialize)]
struct HeroView {
    headline: String,
    subheadline: String,
    image: Option<String>,
    social: Vec<SocialLink>,
}

#[derive(Debug, Serialize)]
struct SocialLink {
    network: String,
    url: String,
}

#[derive(Debug, Serialize)]
struct AboutView {
    title_lead: String,
    title_highlight: String,
    description: String,
    cv: String,
    hiring_email: Option<String>,
}

#[derive(Debug, Serialize)]
struct SkillsPage {
    /// 1-based.
    page: usize,
    pages: usize,
    per_page: usize,
    items: Vec<String>,
}

fn build_view(landing: &Landing) -> LandingView {
    let hero = landing.hero().map(|h| HeroView {
        headline: h.headline.clone(),
        subheadline: h.subheadline.clone(),
        image: landing.hero_image(),
        social: derive::social_links(h)
            .into_iter()
            .map(|(network, url)| SocialLink {
                network: network.into(),
                url: url.into(),
            })
            .collect(),
    });

    let title = landing.about_title();
    let about = landing.about().map(|a| AboutView {
        title_lead: title.lead.clone(),
        title_highlight: title.highlight.clone(),
        description: derive::strip_html(&a.description),
        cv: a.cv.clone(),
        hiring_email: a.hiring_email.clone(),
    });

    let carousel = landing.carousel();
    let pagination = carousel.pagination();
    LandingView {
        hero,
        about,
        skills: SkillsPage {
            page: pagination.page() + 1,
            pages: pagination.total_pages(),
            per_page: pagination.per_page(),
            items: carousel.visible().to_vec(),
        },
    }
}

fn detail(view: &LandingView, palette: &Palette) -> String {
    let mut lines = Vec::new();
    if let Some(hero) = &view.hero {
        lines.push(palette.heading(&hero.headline));
        if !hero.subheadline.is_empty() {
            lines.push(hero.subheadline.clone());
        }
        if let Some(image) = &hero.image {
            lines.push(format!("Image:     {}", palette.muted(image)));
        }
        for link in &hero.social {
            lines.push(format!("{:<10} {}", format!("{}:", link.network), palette.accent(&link.url)));
        }
        lines.push(String::new());
    }
    if let Some(about) = &view.about {
        lines.push(format!(
            "{} {}",
            palette.heading(&about.title_lead),
            palette.accent(&about.title_highlight)
        ));
        lines.push(about.description.clone());
        if !about.cv.is_empty() {
            lines.push(format!("CV:        {}", about.cv));
        }
        if let Some(email) = &about.hiring_email {
            lines.push(format!("Hiring:    {email}"));
        }
        lines.push(String::new());
    }
    lines.push(format!(
        "{} {}",
        palette.heading("Skills"),
        palette.muted(&format!("(page {}/{})", view.skills.page, view.skills.pages))
    ));
    lines.push(view.skills.items.join(" · "));
    lines.join("\n")
}

pub async fn handle(args: LandingArgs, session: &Session) -> Result<(), CliError> {
    let mut landing = Landing::new(session.ctx.clone(), session.width);
    util::with_spinner("Loading landing page", session.quiet, landing.load()).await;

    if let Some(err) = landing.error() {
        return Err(err.clone().into());
    }
    let last = landing.carousel().pagination().total_pages().saturating_sub(1);
    landing
        .carousel_mut()
        .go_to(args.page.saturating_sub(1).min(last));
    util::flush_notices(landing.notices(), session.quiet);

    let view = build_view(&landing);
    let rendered = output::render_single(
        session.format,
        &view,
        |v| detail(v, &session.palette),
        |v| v.skills.items.join("\n"),
    )?;
    session.print(&rendered);
    Ok(())
}
