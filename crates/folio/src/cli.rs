//! Clap derive structures for the `folio` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use folio_core::Theme;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// folio -- read and manage a portfolio site from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Browse and manage a portfolio/blog backend from the command line",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "FOLIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides `defaults.output`)
    #[arg(long, short = 'o', global = true)]
    pub output: Option<OutputFormat>,

    /// Color theme for table output (overrides `defaults.theme`)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Viewport width used to page lists (overrides `defaults.width`)
    #[arg(long, global = true)]
    pub width: Option<u32>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable detail view and tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the landing page: hero, about and skills
    Landing(LandingArgs),

    /// Show a project with its links and related projects
    #[command(alias = "p")]
    Project(ProjectArgs),

    /// Show a blog post and the most recent other posts
    Post(PostArgs),

    /// Load a post through the authenticated admin endpoint
    AdminPost(AdminPostArgs),

    /// Delete a project or blog post (requires an admin token)
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Send a message through the contact form
    Contact(ContactArgs),

    /// Manage CLI configuration and the admin token
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct LandingArgs {
    /// Skills carousel page to show (1-based)
    #[arg(long, default_value = "1")]
    pub page: usize,
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Numeric project id
    pub id: String,

    /// Gallery image to select (0-based, after sorting by order)
    #[arg(long, default_value = "0")]
    pub image: usize,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    /// Post slug or numeric id
    pub slug: String,
}

#[derive(Debug, Args)]
pub struct AdminPostArgs {
    /// Post slug or numeric id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(subcommand)]
    pub target: DeleteTarget,
}

#[derive(Debug, Subcommand)]
pub enum DeleteTarget {
    /// Delete a project by id
    Project {
        /// Numeric project id
        id: String,
    },
    /// Delete a blog post by slug or id
    Post {
        /// Post slug or numeric id
        ident: String,
    },
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Sender name (prompted when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Sender email (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,

    /// Subject line (prompted when omitted)
    #[arg(long)]
    pub subject: Option<String>,

    /// Message body (prompted when omitted)
    #[arg(long, short = 'm')]
    pub message: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (tokens redacted)
    Show,

    /// Print the config file path
    Path,

    /// Set a config value in the config file
    Set {
        /// Dotted key: api.base_url, api.build_id, api.timeout,
        /// defaults.output, defaults.theme, defaults.width
        key: String,
        /// New value
        value: String,
    },

    /// Store the admin token in the system keyring
    SetToken {
        /// Token value (prompted without echo when omitted)
        #[arg(long)]
        token: Option<String>,
    },

    /// Remove the admin token from the system keyring
    ClearToken,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
