//! Output formatting: detail views, tables, JSON, YAML, plain.
//!
//! `table` renders human-readable detail text and `tabled` tables colored
//! per the active theme; structured formats serialize the view models via
//! serde; plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::{OwoColorize, Style};
use tabled::{Table, Tabled, settings::Style as TableStyle};

use folio_core::{Notification, NotificationLevel, Theme};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color palette ────────────────────────────────────────────────────

/// Styles for the current theme. Disabled palettes render plain text.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
    heading: Style,
    accent: Style,
    muted: Style,
}

impl Palette {
    pub fn new(theme: Theme, enabled: bool) -> Self {
        let (heading, accent, muted) = match theme {
            Theme::Dark => (
                Style::new().bold().bright_white(),
                Style::new().bright_cyan(),
                Style::new().bright_black(),
            ),
            Theme::Light => (
                Style::new().bold().black(),
                Style::new().blue(),
                Style::new().dimmed(),
            ),
        };
        Self {
            enabled,
            heading,
            accent,
            muted,
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_owned()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, self.heading)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.accent)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.muted)
    }
}

pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a single view model. `detail_fn` produces the `table` view.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(TableStyle::rounded()).to_string()
}

pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Page notifications go to stderr so structured stdout stays parseable.
pub fn print_notices(notices: &[Notification], quiet: bool) {
    for notice in notices {
        if quiet && !notice.is_error() {
            continue;
        }
        let marker = match notice.level {
            NotificationLevel::Success => "✓",
            NotificationLevel::Info => "i",
            NotificationLevel::Warning => "!",
            NotificationLevel::Error => "✗",
        };
        eprintln!("{marker} {}: {}", notice.title, notice.message);
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(data).map_err(|e| CliError::Serialize(e.to_string()))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Serialize(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct View {
        id: i64,
        title: String,
    }

    fn view() -> View {
        View {
            id: 3,
            title: "Kiln".into(),
        }
    }

    #[test]
    fn plain_uses_id_fn() {
        let out = render_single(OutputFormat::Plain, &view(), |_| String::new(), |v| v.id.to_string())
            .unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn json_serializes_view() {
        let out = render_single(OutputFormat::Json, &view(), |_| String::new(), |_| String::new())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["title"], "Kiln");
    }

    #[test]
    fn disabled_palette_is_plain() {
        let palette = Palette::new(Theme::Dark, false);
        assert_eq!(palette.heading("Title"), "Title");
        assert_ne!(Palette::new(Theme::Light, true).heading("Title"), "Title");
    }
}
