//! Member API operations

use log::debug;
use serde_json::Value;

use crate::error::Result;
use crate::merit::merits::{Merit, MeritsResponse};
use crate::merit::pagination::ListParams;
use crate::merit::session::{OrgSession, NO_PARAMS};

impl OrgSession {
    /// Get profile info of a member
    pub async fn member_info(&self, member_id: &str) -> Result<Option<Value>> {
        self.get_json(
            &format!("/members/{}", member_id),
            NO_PARAMS,
            &format!("fetch member '{}'", member_id),
        )
        .await
    }

    /// Get the access merit a member holds with the org
    pub async fn member_access_merit(&self, member_id: &str) -> Result<Option<Value>> {
        self.get_json(
            &format!("/members/{}/access_merit", member_id),
            NO_PARAMS,
            &format!("fetch access merit of member '{}'", member_id),
        )
        .await
    }

    /// Get merits held by a member (with pagination)
    pub async fn member_merits(
        &self,
        member_id: &str,
        template_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Merit>> {
        let mut params = ListParams::with_limit(limit);
        params.set_opt("merittemplate_id", template_id);

        let path = format!("/members/{}/merits", member_id);
        let error_context = format!("merits of member '{}'", member_id);

        Ok(self
            .fetch_pages::<Merit, MeritsResponse>(&path, params, limit, &error_context)
            .await)
    }

    /// Get only the live merits held by a member
    pub async fn active_member_merits(
        &self,
        member_id: &str,
        template_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<Merit>> {
        let merits = self.member_merits(member_id, template_id, limit).await?;
        let total = merits.len();
        let active: Vec<Merit> = merits.into_iter().filter(Merit::is_active).collect();
        debug!(
            "Member '{}': {} of {} merits active",
            member_id,
            active.len(),
            total
        );
        Ok(active)
    }
}
