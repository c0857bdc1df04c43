//! Merit data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::api;
use crate::merit::traits::{PaginatedResponse, Paging};
use crate::merit::MeritStatus;

/// Merit (credential record) from the Merit API
///
/// Only the identifier is typed; every other field is kept as-is so the
/// payload round-trips unchanged.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Merit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Merit {
    /// Get merit ID (empty when the payload has none)
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Title of the merit, falling back to its template title
    pub fn title(&self) -> &str {
        self.fields
            .get("title")
            .and_then(Value::as_str)
            .or_else(|| {
                self.fields
                    .get("merittemplate")
                    .and_then(|t| t.get("title"))
                    .and_then(Value::as_str)
            })
            .unwrap_or("")
    }

    /// Raw status string
    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(Value::as_str)
    }

    /// Status parsed into the known enum, if recognised
    pub fn merit_status(&self) -> Option<MeritStatus> {
        self.status().and_then(|s| s.parse().ok())
    }

    /// Explicit `active` flag, when present
    pub fn active(&self) -> Option<bool> {
        self.fields.get("active").and_then(Value::as_bool)
    }

    /// Whether the merit is live: the `active` flag wins, otherwise an
    /// `Accepted` status counts as active
    pub fn is_active(&self) -> bool {
        self.active()
            .unwrap_or_else(|| self.merit_status() == Some(MeritStatus::Accepted))
    }

    /// Recipient email (`recipient.email`, or top-level `email`)
    pub fn recipient_email(&self) -> &str {
        self.fields
            .get("recipient")
            .and_then(|r| r.get("email"))
            .and_then(Value::as_str)
            .or_else(|| self.fields.get("email").and_then(Value::as_str))
            .unwrap_or("")
    }

    /// ID of the template the merit was issued from
    pub fn template_id(&self) -> Option<&str> {
        self.fields
            .get("merittemplate")
            .and_then(|t| t.get("id"))
            .and_then(Value::as_str)
            .or_else(|| self.fields.get("merittemplateId").and_then(Value::as_str))
    }
}

/// Response wrapper for merit lists
#[derive(Deserialize, Debug)]
pub struct MeritsResponse {
    #[serde(default)]
    pub merits: Vec<Merit>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl PaginatedResponse<Merit> for MeritsResponse {
    fn into_items(self) -> Vec<Merit> {
        self.merits
    }

    fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }
}

/// Query options for listing org merits
#[derive(Debug, Clone)]
pub struct MeritQuery {
    /// Filter by MeritTemplate ID
    pub template_id: Option<String>,
    /// Filter by status name (validated before any request)
    pub status: Option<String>,
    /// Filter by recipient email
    pub email: Option<String>,
    /// Number of merits wanted
    pub limit: u32,
}

impl Default for MeritQuery {
    fn default() -> Self {
        Self {
            template_id: None,
            status: None,
            email: None,
            limit: api::DEFAULT_LIMIT,
        }
    }
}

impl MeritQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}
