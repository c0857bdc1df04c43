//! Organization data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organization data from the Merit API
///
/// A body without `id` is not an organization and fails to deserialize.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Org {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Org {
    /// Get org name from `title`, falling back to `name` (empty when unset)
    pub fn name(&self) -> &str {
        ["title", "name"]
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
            .unwrap_or("")
    }

    pub fn description(&self) -> Option<&str> {
        self.extra.get("description").and_then(Value::as_str)
    }
}

/// Response wrapper for org search
#[derive(Deserialize, Debug, Default)]
pub struct OrgSearchResponse {
    #[serde(default)]
    pub orgs: Vec<Org>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_requires_id() {
        let result: std::result::Result<Org, _> =
            serde_json::from_value(serde_json::json!({"title": "No Id"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_org_accessors() {
        let org: Org = serde_json::from_value(serde_json::json!({
            "id": "5b44d5c5-55c8-4cd0-9a0e-5e6d5d5c1a2b",
            "title": "Millbrae CERT",
            "description": "Community emergency response team"
        }))
        .unwrap();
        assert_eq!(org.id, "5b44d5c5-55c8-4cd0-9a0e-5e6d5d5c1a2b");
        assert_eq!(org.name(), "Millbrae CERT");
        assert_eq!(org.description(), Some("Community emergency response team"));
    }

    #[test]
    fn test_org_name_prefers_title() {
        let org: Org = serde_json::from_value(serde_json::json!({
            "id": "org-1",
            "title": "Millbrae CERT",
            "name": "millbrae-cert"
        }))
        .unwrap();
        assert_eq!(org.name(), "Millbrae CERT");

        let org: Org =
            serde_json::from_value(serde_json::json!({"id": "org-2", "name": "Rescue Dogs"}))
                .unwrap();
        assert_eq!(org.name(), "Rescue Dogs");

        let org: Org = serde_json::from_value(serde_json::json!({"id": "org-3"})).unwrap();
        assert_eq!(org.name(), "");
    }

    #[test]
    fn test_org_search_response_defaults_to_empty() {
        let response: OrgSearchResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.orgs.is_empty());
    }
}
