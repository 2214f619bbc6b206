//! Delete command: load the resource through its page, then delete it.

use folio_core::{AdminPost, Navigation, ProjectDetail};
use folio_core::page::Notices;

use crate::cli::{DeleteArgs, DeleteTarget};
use crate::error::CliError;

use super::{Session, util};

pub async fn handle(args: DeleteArgs, session: &Session) -> Result<(), CliError> {
    match args.target {
        DeleteTarget::Project { id } => {
            let action = format!("delete project {id}");
            if !util::confirm(&format!("Delete project '{id}'?"), &action, session.yes)? {
                return Ok(());
            }

            let mut page = ProjectDetail::new(session.ctx.clone());
            page.load(&id, None).await;
            if let Some(err) = page.error() {
                return Err(CliError::for_resource(err, "project", &id));
            }
            let nav = util::with_spinner("Deleting project", session.quiet, page.delete()).await;
            finish(nav, page.notices(), session)
        }

        DeleteTarget::Post { ident } => {
            let action = format!("delete post {ident}");
            if !util::confirm(&format!("Delete post '{ident}'?"), &action, session.yes)? {
                return Ok(());
            }

            let mut page = AdminPost::new(session.ctx.clone());
            page.load(&ident).await;
            if page.redirect() == Some(Navigation::Login) {
                return Err(CliError::AuthFailed);
            }
            if let Some(err) = page.error() {
                return Err(CliError::for_resource(err, "post", &ident));
            }
            let nav = util::with_spinner("Deleting post", session.quiet, page.delete()).await;
            finish(nav, page.notices(), session)
        }
    }
}

/// A delete either navigates back to its collection or leaves the
/// resource in place with an error notice.
fn finish(
    nav: Option<Navigation>,
    notices: &mut Notices,
    session: &Session,
) -> Result<(), CliError> {
    match nav {
        Some(Navigation::Login) => Err(CliError::AuthFailed),
        Some(Navigation::Collection(_) | Navigation::Detail(_)) => {
            util::flush_notices(notices, session.quiet);
            Ok(())
        }
        None => {
            let message = notices
                .drain()
                .pop()
                .map_or_else(|| "delete failed".to_owned(), |n| n.message);
            Err(CliError::ApiError {
                status: "delete".into(),
                message,
            })
        }
    }
}
