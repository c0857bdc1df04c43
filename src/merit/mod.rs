//! Merit API client module
//!
//! [`AppClient`] makes the application-level calls (HTTP Basic auth).
//! [`OrgSession`] keeps an org access token fresh and carries every
//! org-scoped operation; the resource modules below add those operations
//! to it.

mod client;
mod clock;
mod credentials;
pub mod linking;
pub mod members;
pub mod merits;
pub mod orgs;
mod pagination;
mod session;
pub mod templates;
pub mod traits;
pub mod validation;

pub use client::{AppClient, Environment};
pub use clock::{Clock, SystemClock};
pub use credentials::CredentialResolver;
pub use linking::{
    run_link_url_command, run_login_url_command, run_member_id_command, run_org_id_command,
};
pub use members::run_member_command;
pub use merits::{
    read_payload, run_edit_command, run_issue_command, run_merit_command, run_merits_command,
    run_revoke_command, run_transfer_command, run_translate_command, Merit, MeritQuery,
};
pub use orgs::{run_org_command, run_search_command, Org};
pub use pagination::ListParams;
pub use session::{OrgSession, TokenStatus, NO_PARAMS};
pub use templates::{run_template_command, run_templates_command, MeritTemplate, TemplateChoice};
pub use traits::{PaginatedResponse, Paging};
pub use validation::{MeritStatus, PermissionType};
