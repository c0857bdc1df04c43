//! Merit API operations

use log::debug;
use serde_json::{json, Value};

use crate::error::Result;
use crate::merit::client::{parse_body, string_field};
use crate::merit::pagination::ListParams;
use crate::merit::session::{OrgSession, NO_PARAMS};
use crate::merit::validation::parse_merit_status;
use crate::merit::MeritStatus;

use super::models::{Merit, MeritQuery, MeritsResponse};

impl OrgSession {
    /// Get a single merit by ID
    pub async fn merit(&self, merit_id: &str) -> Result<Option<Merit>> {
        let context = format!("fetch merit '{}'", merit_id);
        let body = self
            .get_json(&format!("/merits/{}", merit_id), NO_PARAMS, &context)
            .await?;
        Ok(body.and_then(|b| parse_body(b, &context)))
    }

    /// Get org merits matching the query (with pagination)
    ///
    /// An unknown status fails before any request is made. Failed pages end
    /// the listing early with whatever was already collected.
    pub async fn all_merits(&self, query: &MeritQuery) -> Result<Vec<Merit>> {
        let status = parse_merit_status(query.status.as_deref())?;

        let mut params = ListParams::with_limit(query.limit);
        params.set_opt("merit_status", status.map(|s| s.as_str()));
        params.set_opt("merittemplate_id", query.template_id.as_deref());
        params.set_opt("recipient_email", query.email.as_deref());

        let path = format!("/orgs/{}/merits", self.org_id());
        let error_context = format!("merits for org '{}'", self.org_id());

        Ok(self
            .fetch_pages::<Merit, MeritsResponse>(&path, params, query.limit, &error_context)
            .await)
    }

    /// Get merits proposed from a template that still await approval
    pub async fn template_pending_merits(&self, template_id: &str) -> Result<Vec<Merit>> {
        let query = MeritQuery::new()
            .template(template_id)
            .status(MeritStatus::Unapproved.as_str());
        self.all_merits(&query).await
    }

    /// Propose a merit; returns the ID of the proposed merit
    pub async fn propose_merit(&self, data: &Value) -> Result<Option<String>> {
        debug!("Proposing merit for org '{}'", self.org_id());
        let body = self
            .post_json("/merits/propose", Some(data), "propose merit")
            .await?;
        Ok(body.and_then(|b| string_field(&b, "id")))
    }

    /// Send a merit; returns the ID of the sent merit
    pub async fn send_merit(&self, data: &Value) -> Result<Option<String>> {
        debug!("Sending merit for org '{}'", self.org_id());
        let body = self.post_json("/merits/send", Some(data), "send merit").await?;
        Ok(body.and_then(|b| string_field(&b, "id")))
    }

    /// Edit a merit; returns whether the edit was accepted
    pub async fn edit_merit(&self, merit_id: &str, data: &Value) -> Result<bool> {
        self.post_ok(
            &format!("/merits/{}", merit_id),
            Some(data),
            &format!("edit merit '{}'", merit_id),
        )
        .await
    }

    /// Revoke a merit; returns whether the revocation was accepted
    pub async fn revoke_merit(&self, merit_id: &str, reason: &str) -> Result<bool> {
        let body = json!({ "revocationReason": reason });
        self.post_ok(
            &format!("/merits/{}/revoke", merit_id),
            Some(&body),
            &format!("revoke merit '{}'", merit_id),
        )
        .await
    }

    /// Translate a member email into a static lookup URL for the merit
    pub async fn translate_uuid(&self, merit_id: &str, email: &str) -> Result<Option<String>> {
        let path = format!(
            "/uuidTranslation/merit/{}/email/{}",
            merit_id,
            urlencoding::encode(email)
        );
        let body = self
            .post_json(&path, None, &format!("translate merit '{}'", merit_id))
            .await?;
        Ok(body.and_then(|b| string_field(&b, "translationUrl")))
    }

    /// Transfer a merit to a new email; returns the ID of the new merit
    pub async fn transfer_email(&self, merit_id: &str, new_email: &str) -> Result<Option<String>> {
        let body = json!({ "newRecipientEmail": new_email });
        let response = self
            .post_json(
                &format!("/merits/{}/transfer", merit_id),
                Some(&body),
                &format!("transfer merit '{}'", merit_id),
            )
            .await?;

        Ok(response
            .as_ref()
            .and_then(|b| b.get("newMerit"))
            .and_then(|m| string_field(m, "id")))
    }
}
