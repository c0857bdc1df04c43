//! Merit credential resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::error::{MeritError, Result};

/// Credential resolution with fallback logic
///
/// Every value is resolved from:
/// 1. An explicit value (CLI argument or caller-supplied)
/// 2. Its environment variable (`MERIT_APP_ID`, `MERIT_APP_SECRET`, `MERIT_ORG_ID`)
#[derive(Debug, Default, Clone, Copy)]
pub struct CredentialResolver;

impl CredentialResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the application ID
    pub fn app_id(&self, explicit: Option<&str>) -> Result<String> {
        self.resolve(explicit, credentials::APP_ID_ENV, "app ID", "--app-id")
    }

    /// Resolve the application secret
    pub fn app_secret(&self, explicit: Option<&str>) -> Result<String> {
        self.resolve(
            explicit,
            credentials::APP_SECRET_ENV,
            "app secret",
            "--app-secret",
        )
    }

    /// Resolve the organization ID
    pub fn org_id(&self, explicit: Option<&str>) -> Result<String> {
        self.resolve(explicit, credentials::ORG_ID_ENV, "org ID", "--org")
    }

    /// Resolve the sandbox flag: an explicit `true` wins, then `MERIT_SANDBOX`
    pub fn sandbox(&self, explicit: bool) -> bool {
        if explicit {
            return true;
        }
        std::env::var(credentials::SANDBOX_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false)
    }

    fn resolve(
        &self,
        explicit: Option<&str>,
        env_var: &str,
        label: &str,
        flag: &str,
    ) -> Result<String> {
        if let Some(value) = explicit.filter(|v| !v.is_empty()) {
            debug!("Using {} from explicit argument", label);
            return Ok(value.to_string());
        }

        match std::env::var(env_var) {
            Ok(value) if !value.is_empty() => {
                debug!("Using {} from {} environment variable", label, env_var);
                Ok(value)
            }
            _ => Err(MeritError::Credentials(not_found_message(
                label, flag, env_var,
            ))),
        }
    }
}

/// Interpret an environment flag value
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Generate helpful error message when a credential is not found
fn not_found_message(label: &str, flag: &str, env_var: &str) -> String {
    format!(
        "No Merit {} found. Please provide it using one of:\n\
         \n\
         1. CLI argument:      meritctl {} <VALUE>\n\
         2. Environment var:   export {}=<VALUE>\n",
        label, flag, env_var
    )
}
