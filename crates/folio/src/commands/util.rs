//! Shared helpers for command handlers.

use std::future::Future;
use std::io::{self, IsTerminal};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use folio_core::page::Notices;

use crate::error::{CliError, prompt_err};
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed. Without
/// a terminal the prompt cannot be answered, so `--yes` is required.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)
}

/// Await `fut` behind a stderr spinner when attached to a terminal.
pub async fn with_spinner<F: Future>(message: &str, quiet: bool, fut: F) -> F::Output {
    if quiet || !io::stderr().is_terminal() {
        return fut.await;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

pub fn flush_notices(notices: &mut Notices, quiet: bool) {
    output::print_notices(&notices.drain(), quiet);
}

/// `-` for absent values in detail views.
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("-")
}
