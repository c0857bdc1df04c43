//! Field and MeritTemplate API operations

use log::debug;
use serde_json::Value;

use crate::config::api;
use crate::error::Result;
use crate::merit::client::parse_body;
use crate::merit::pagination::ListParams;
use crate::merit::session::{OrgSession, NO_PARAMS};

use super::models::{MeritTemplate, MeritTemplatesResponse, TemplateChoice};

/// Label of the empty template choice
pub const EMPTY_CHOICE_LABEL: &str = "-----";

impl OrgSession {
    /// Get details of a field
    pub async fn field(&self, field_id: &str) -> Result<Option<Value>> {
        self.get_json(
            &format!("/fields/{}", field_id),
            NO_PARAMS,
            &format!("fetch field '{}'", field_id),
        )
        .await
    }

    /// Get details of a MeritTemplate
    pub async fn merit_template(&self, template_id: &str) -> Result<Option<MeritTemplate>> {
        let context = format!("fetch merit template '{}'", template_id);
        let body = self
            .get_json(&format!("/merittemplates/{}", template_id), NO_PARAMS, &context)
            .await?;
        Ok(body.and_then(|b| parse_body(b, &context)))
    }

    /// Get the fields used by a template, one request per enabled field
    ///
    /// Fields that cannot be fetched are left out; an unknown template
    /// yields an empty list.
    pub async fn template_field_choices(&self, template_id: &str) -> Result<Vec<Value>> {
        let Some(template) = self.merit_template(template_id).await? else {
            return Ok(Vec::new());
        };

        let field_ids = template.enabled_field_ids();
        debug!(
            "Fetching {} fields for template '{}'",
            field_ids.len(),
            template_id
        );

        let mut fields = Vec::with_capacity(field_ids.len());
        for field_id in field_ids {
            if let Some(field) = self.field(field_id).await? {
                fields.push(field);
            }
        }
        Ok(fields)
    }

    /// Get all MeritTemplates owned by the org (with pagination)
    pub async fn all_org_merit_templates(&self, limit: u32) -> Result<Vec<MeritTemplate>> {
        let path = format!("/orgs/{}/merittemplates", self.org_id());
        let error_context = format!("merit templates for org '{}'", self.org_id());

        Ok(self
            .fetch_pages::<MeritTemplate, MeritTemplatesResponse>(
                &path,
                ListParams::with_limit(limit),
                limit,
                &error_context,
            )
            .await)
    }

    /// Get `(id, title)` choices for every org template
    ///
    /// With `include_none`, the list starts with an empty `(None, "-----")`
    /// choice for optional pickers.
    pub async fn merit_template_choices(&self, include_none: bool) -> Result<Vec<TemplateChoice>> {
        let mut choices = Vec::new();
        if include_none {
            choices.push((None, EMPTY_CHOICE_LABEL.to_string()));
        }
        for template in self.all_org_merit_templates(api::DEFAULT_LIMIT).await? {
            let title = template.title().to_string();
            choices.push((Some(template.id), title));
        }
        Ok(choices)
    }
}
