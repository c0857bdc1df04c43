//! meritctl - Issue and query Merit digital credentials
//!
//! A client library and CLI for the Merit API.
//!
//! # Features
//!
//! - Link an application to an org and exchange one-time tokens
//! - Org access tokens refreshed automatically before they expire
//! - Send, propose, edit, revoke and transfer merits
//! - Cursor pagination for merits and merit templates
//! - Multiple output formats (table, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Show the org the credentials belong to
//! meritctl org --org $MERIT_ORG_ID
//!
//! # List pending merits of a template
//! meritctl merits --template t-123 --status Pending
//!
//! # Send a merit from a JSON payload
//! meritctl send --file merit.json -o json
//! ```
//!
//! Library use:
//!
//! ```no_run
//! # async fn demo() -> meritctl::Result<()> {
//! use meritctl::{AppClient, MeritQuery, OrgSession};
//!
//! let app = AppClient::from_env()?;
//! let session = OrgSession::new(app, "org-id").await;
//! let pending = session
//!     .all_merits(&MeritQuery::new().status("Pending"))
//!     .await?;
//! println!("{} pending merits", pending.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod merit;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{MeritError, Result};
pub use merit::{
    AppClient, Clock, CredentialResolver, Environment, Merit, MeritQuery, MeritStatus,
    MeritTemplate, Org, OrgSession, PermissionType, SystemClock, TemplateChoice, TokenStatus,
};
