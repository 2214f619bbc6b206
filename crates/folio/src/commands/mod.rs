//! Command dispatch: bridges CLI args -> page controllers -> output.

pub mod config_cmd;
pub mod contact;
pub mod delete;
pub mod landing;
pub mod post;
pub mod project;
pub mod util;

use clap::ValueEnum;
use tracing::debug;

use folio_config::Config;
use folio_core::{PageContext, ThemeContext};

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{self, Palette};

/// Everything a backend-bound command runs with.
#[derive(Debug)]
pub struct Session {
    pub ctx: PageContext,
    pub format: OutputFormat,
    pub palette: Palette,
    pub width: u32,
    pub quiet: bool,
    pub yes: bool,
}

impl Session {
    /// Load config, apply flag overrides and build the page context.
    /// Fails early when no base URL is configured.
    pub fn open(global: &GlobalOpts) -> Result<Self, CliError> {
        let config = load(global)?;
        let ctx = config.page_context()?;
        if !ctx.client().is_configured() {
            return Err(CliError::NotConfigured {
                path: config_file(global).display().to_string(),
            });
        }

        let theme = ThemeContext::new(config.defaults.theme);
        if let Some(t) = global.theme {
            theme.set(t);
        }
        debug!(theme = %theme.current(), build_id = ctx.build_id(), "session ready");

        Ok(Self {
            ctx,
            format: output_format(global, &config)?,
            palette: Palette::new(theme.current(), output::should_color(global.color)),
            width: global.width.unwrap_or(config.defaults.width),
            quiet: global.quiet,
            yes: global.yes,
        })
    }

    pub fn print(&self, rendered: &str) {
        output::print_output(rendered, self.quiet);
    }
}

/// Config file selected by `--config`, else the platform default.
pub fn config_file(global: &GlobalOpts) -> std::path::PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(folio_config::config_path)
}

/// Effective configuration: file layered with `FOLIO_*` env.
pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    let config = folio_config::load_from(&config_file(global))?;
    config.validate()?;
    Ok(config)
}

/// `--output`, else `defaults.output` from config.
pub fn output_format(global: &GlobalOpts, config: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    <OutputFormat as ValueEnum>::from_str(&config.defaults.output, true).map_err(|reason| CliError::Validation {
        field: "defaults.output".into(),
        reason,
    })
}

/// Dispatch a backend-bound command to its handler.
pub async fn dispatch(cmd: Command, session: &Session) -> Result<(), CliError> {
    match cmd {
        Command::Landing(args) => landing::handle(args, session).await,
        Command::Project(args) => project::handle(args, session).await,
        Command::Post(args) => post::handle(args, session).await,
        Command::AdminPost(args) => post::handle_admin(args, session).await,
        Command::Delete(args) => delete::handle(args, session).await,
        Command::Contact(args) => contact::handle(args, session).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

