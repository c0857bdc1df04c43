//! Login-with-Merit linking operations

use log::debug;
use serde_json::{json, Value};

use crate::error::{MeritError, Result};
use crate::merit::client::{state_token, string_field};
use crate::merit::session::OrgSession;
use crate::merit::validation::parse_permissions;
use crate::merit::PermissionType;

const LOGIN_STATE_PREFIX: &str = "initiated-from-login-with-merit";

/// Build the `requestedPermissions` list for a login request
///
/// The public profile permission always comes first. Org-scoped permissions
/// expand to one entry per org ID and repeated entries are dropped.
pub(crate) fn requested_permissions<S: AsRef<str>>(
    permissions: &[PermissionType],
    org_ids: &[S],
) -> Vec<Value> {
    let mut entries = vec![json!({
        "permissionType": PermissionType::CanViewPublicProfile.as_str()
    })];

    for permission in permissions {
        let candidates: Vec<Value> = if permission.requires_org_ids() {
            org_ids
                .iter()
                .map(|org_id| {
                    json!({
                        "permissionType": permission.as_str(),
                        "orgId": org_id.as_ref(),
                    })
                })
                .collect()
        } else {
            vec![json!({ "permissionType": permission.as_str() })]
        };

        for entry in candidates {
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        }
    }

    entries
}

impl OrgSession {
    /// Request a Login with Merit URL for members
    ///
    /// Permissions are validated before any request: unknown names fail, and
    /// org-scoped permissions need at least one org ID.
    pub async fn login_with_merit_url<S: AsRef<str>>(
        &self,
        success_url: &str,
        failure_url: &str,
        permissions: &[S],
        org_ids: &[S],
    ) -> Result<Option<String>> {
        let permissions = parse_permissions(permissions)?;
        if org_ids.is_empty() {
            if let Some(scoped) = permissions.iter().find(|p| p.requires_org_ids()) {
                return Err(MeritError::MissingOrgIds(*scoped));
            }
        }

        let body = json!({
            "requestedPermissions": requested_permissions(&permissions, org_ids),
            "successUrl": success_url,
            "failureUrl": failure_url,
            "state": state_token(LOGIN_STATE_PREFIX),
        });
        debug!("Requesting login URL for org '{}'", self.org_id());

        let response = self
            .post_json(
                &format!("/orgs/{}/request_loginwithmerit_url", self.org_id()),
                Some(&body),
                "request login with Merit URL",
            )
            .await?;
        Ok(response.and_then(|b| string_field(&b, "request_loginwithmerit_url")))
    }

    /// Exchange a member ID token for the member's ID
    pub async fn member_id_from_token(&self, member_id_token: &str) -> Result<Option<String>> {
        let response = self
            .get_json(
                "/member_id",
                &[("member_id_token", member_id_token)],
                "exchange member ID token",
            )
            .await?;
        Ok(response.and_then(|b| string_field(&b, "memberId")))
    }
}
