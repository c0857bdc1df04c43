//! MeritTemplate data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merit::traits::{PaginatedResponse, Paging};

/// Field setting enabled on a template
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// MeritTemplate data from the Merit API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MeritTemplate {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub enabled_field_settings: Vec<FieldSetting>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MeritTemplate {
    /// Get title (empty when unset)
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// IDs of the fields enabled on this template, in template order
    ///
    /// Settings without a `fieldId` are skipped.
    pub fn enabled_field_ids(&self) -> Vec<&str> {
        self.enabled_field_settings
            .iter()
            .filter_map(|s| s.field_id.as_deref())
            .collect()
    }
}

/// Response wrapper for template lists
#[derive(Deserialize, Debug)]
pub struct MeritTemplatesResponse {
    #[serde(default)]
    pub merittemplates: Vec<MeritTemplate>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl PaginatedResponse<MeritTemplate> for MeritTemplatesResponse {
    fn into_items(self) -> Vec<MeritTemplate> {
        self.merittemplates
    }

    fn paging(&self) -> Option<&Paging> {
        self.paging.as_ref()
    }
}

/// `(id, title)` choice for template pickers; `None` is the empty choice
pub type TemplateChoice = (Option<String>, String);
