//! View-state layer between `folio-api` and page consumers (CLI, UI).
//!
//! - **[`ResourceSlot`]**: fetch state for one resource key
//!   (`Idle → Loading → Ready | Error`). Fetches are dispatched as
//!   [`PendingFetch`] values whose completions are only applied while their
//!   [`FetchTicket`] still matches, so a late response for a superseded key
//!   never overwrites newer data.
//!
//! - **[`derive`]**: pure functions turning a slot's value into what a page
//!   renders (sorted media, normalized skills, related items, teasers,
//!   dates).
//!
//! - **[`interaction`]**: pagination, gallery selection, drag and wheel
//!   gestures, all reduced to a single [`Nav`](interaction::Nav) message.
//!
//! - **[`MutationDispatcher`]**: authenticated create/update/delete plus the
//!   public contact form, returning a [`Navigation`] signal on success.
//!
//! - **[`page`]**: one controller per site page composing the above.
//!
//! - **[`ThemeContext`]**: process-wide light/dark preference with change
//!   subscriptions.

pub mod contact;
pub mod derive;
pub mod error;
pub mod interaction;
pub mod key;
pub mod mutation;
pub mod notify;
pub mod page;
pub mod slot;
pub mod theme;

// ── Primary re-exports ──────────────────────────────────────────────
pub use contact::ContactForm;
pub use error::{CoreError, ErrorKind};
pub use key::{ResourceKey, ResourceKind};
pub use mutation::{Mutable, MutationDispatcher, Navigation};
pub use notify::{Notification, NotificationLevel};
pub use page::{AdminPost, Landing, PageContext, PostDetail, ProjectDetail};
pub use slot::{Completion, FetchTicket, PendingFetch, ResourceSlot, SlotStatus, SlotUpdate};
pub use theme::{Theme, ThemeContext, ThemeSubscription};
