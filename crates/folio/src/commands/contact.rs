//! Contact form command.

use std::io::{self, IsTerminal};

use dialoguer::Input;

use folio_core::{ContactForm, Landing};

use crate::cli::ContactArgs;
use crate::error::{CliError, prompt_err};

use super::{Session, util};

/// Flag value, else an interactive prompt, else empty (left for
/// validation to reject).
fn field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String, CliError> {
    match value {
        Some(v) => Ok(v),
        None if interactive => Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err),
        None => Ok(String::new()),
    }
}

pub async fn handle(args: ContactArgs, session: &Session) -> Result<(), CliError> {
    let interactive = io::stdin().is_terminal();
    let form = ContactForm {
        name: field(args.name, "Name", interactive)?,
        email: field(args.email, "Email", interactive)?,
        subject: field(args.subject, "Subject", interactive)?,
        message: field(args.message, "Message", interactive)?,
    };

    let mut landing = Landing::new(session.ctx.clone(), session.width);
    landing.contact = form;
    util::with_spinner("Sending message", session.quiet, landing.submit_contact()).await?;
    util::flush_notices(landing.notices(), session.quiet);
    Ok(())
}
