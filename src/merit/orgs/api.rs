//! Organization API operations

use log::debug;

use crate::error::Result;
use crate::merit::client::parse_body;
use crate::merit::session::{OrgSession, NO_PARAMS};
use crate::merit::validation::validate_search_query;

use super::models::{Org, OrgSearchResponse};

impl OrgSession {
    /// Get info about the session's organization
    pub async fn org_info(&self) -> Result<Option<Org>> {
        let context = format!("fetch org '{}'", self.org_id());
        let body = self
            .get_json(&format!("/orgs/{}", self.org_id()), NO_PARAMS, &context)
            .await?;
        Ok(body.and_then(|b| parse_body(b, &context)))
    }

    /// Search organizations by name
    ///
    /// Queries shorter than the minimum length fail before any request.
    pub async fn search_orgs(&self, query: &str) -> Result<Vec<Org>> {
        validate_search_query(query)?;
        debug!("Searching orgs matching '{}'", query);

        let context = format!("search orgs for '{}'", query);
        let body = self
            .get_json("/orgs/search", &[("query", query)], &context)
            .await?;

        Ok(body
            .and_then(|b| parse_body::<OrgSearchResponse>(b, &context))
            .map(|r| r.orgs)
            .unwrap_or_default())
    }
}
