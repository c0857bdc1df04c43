//! Input validation for enum-valued and length-constrained parameters
//!
//! Everything here runs before a request is built, so invalid input never
//! reaches the network.

use std::fmt;
use std::str::FromStr;

use crate::config::api;
use crate::error::{MeritError, Result};

/// Lifecycle status of a merit, as accepted by the `merit_status` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeritStatus {
    Accepted,
    Forfeited,
    Pending,
    Rejected,
    Reported,
    Revoked,
    Transferred,
    TransferredUnverified,
    Unapproved,
    UnapprovedUnverified,
    Unverified,
}

impl MeritStatus {
    /// All statuses in API order
    pub const ALL: [MeritStatus; 11] = [
        MeritStatus::Accepted,
        MeritStatus::Forfeited,
        MeritStatus::Pending,
        MeritStatus::Rejected,
        MeritStatus::Reported,
        MeritStatus::Revoked,
        MeritStatus::Transferred,
        MeritStatus::TransferredUnverified,
        MeritStatus::Unapproved,
        MeritStatus::UnapprovedUnverified,
        MeritStatus::Unverified,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            MeritStatus::Accepted => "Accepted",
            MeritStatus::Forfeited => "Forfeited",
            MeritStatus::Pending => "Pending",
            MeritStatus::Rejected => "Rejected",
            MeritStatus::Reported => "Reported",
            MeritStatus::Revoked => "Revoked",
            MeritStatus::Transferred => "Transferred",
            MeritStatus::TransferredUnverified => "TransferredUnverified",
            MeritStatus::Unapproved => "Unapproved",
            MeritStatus::UnapprovedUnverified => "UnapprovedUnverified",
            MeritStatus::Unverified => "Unverified",
        }
    }

    /// Wire names of every status
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl FromStr for MeritStatus {
    type Err = MeritError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| MeritError::InvalidMeritStatus(s.to_string()))
    }
}

impl fmt::Display for MeritStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission a member can grant through login-with-Merit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionType {
    CanViewPublicProfile,
    /// Scoped: needs at least one org ID alongside it
    CanViewAllStandardMeritsFromOrg,
    CanViewAllStandardMerits,
}

impl PermissionType {
    pub const ALL: [PermissionType; 3] = [
        PermissionType::CanViewPublicProfile,
        PermissionType::CanViewAllStandardMeritsFromOrg,
        PermissionType::CanViewAllStandardMerits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionType::CanViewPublicProfile => "CanViewPublicProfile",
            PermissionType::CanViewAllStandardMeritsFromOrg => "CanViewAllStandardMeritsFromOrg",
            PermissionType::CanViewAllStandardMerits => "CanViewAllStandardMerits",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }

    /// Whether the permission is scoped to specific organizations
    pub fn requires_org_ids(&self) -> bool {
        matches!(self, PermissionType::CanViewAllStandardMeritsFromOrg)
    }
}

impl FromStr for PermissionType {
    type Err = MeritError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| MeritError::InvalidPermission(s.to_string()))
    }
}

impl fmt::Display for PermissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an optional merit status filter
pub fn parse_merit_status(status: Option<&str>) -> Result<Option<MeritStatus>> {
    status.map(str::parse).transpose()
}

/// Parse a list of permission names, failing on the first unknown one
pub fn parse_permissions<S: AsRef<str>>(permissions: &[S]) -> Result<Vec<PermissionType>> {
    permissions.iter().map(|p| p.as_ref().parse()).collect()
}

/// Reject org search queries shorter than the API minimum
pub fn validate_search_query(query: &str) -> Result<()> {
    if query.chars().count() < api::MIN_SEARCH_QUERY_LEN {
        return Err(MeritError::SearchQueryTooShort {
            query: query.to_string(),
            min: api::MIN_SEARCH_QUERY_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merit_status_has_eleven_values() {
        assert_eq!(MeritStatus::ALL.len(), 11);
        assert_eq!(MeritStatus::names().len(), 11);
    }

    #[test]
    fn test_merit_status_parse_every_name() {
        for name in MeritStatus::names() {
            let status: MeritStatus = name.parse().unwrap();
            assert_eq!(status.to_string(), name);
        }
    }

    #[test]
    fn test_merit_status_parse_is_case_sensitive() {
        assert!("accepted".parse::<MeritStatus>().is_err());
    }

    #[test]
    fn test_merit_status_parse_invalid() {
        match "Bogus".parse::<MeritStatus>() {
            Err(MeritError::InvalidMeritStatus(s)) => assert_eq!(s, "Bogus"),
            other => panic!("Expected InvalidMeritStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_merit_status_none() {
        assert_eq!(parse_merit_status(None).unwrap(), None);
        assert_eq!(
            parse_merit_status(Some("Revoked")).unwrap(),
            Some(MeritStatus::Revoked)
        );
    }

    #[test]
    fn test_parse_permissions() {
        let parsed =
            parse_permissions(&["CanViewPublicProfile", "CanViewAllStandardMerits"]).unwrap();
        assert_eq!(
            parsed,
            vec![
                PermissionType::CanViewPublicProfile,
                PermissionType::CanViewAllStandardMerits
            ]
        );
    }

    #[test]
    fn test_parse_permissions_rejects_unknown() {
        let result = parse_permissions(&["CanViewPublicProfile", "CanManageOrg"]);
        match result {
            Err(MeritError::InvalidPermission(p)) => assert_eq!(p, "CanManageOrg"),
            other => panic!("Expected InvalidPermission, got {:?}", other),
        }
    }

    #[test]
    fn test_requires_org_ids() {
        assert!(PermissionType::CanViewAllStandardMeritsFromOrg.requires_org_ids());
        assert!(!PermissionType::CanViewAllStandardMerits.requires_org_ids());
        assert!(!PermissionType::CanViewPublicProfile.requires_org_ids());
    }

    #[test]
    fn test_validate_search_query_boundary() {
        assert!(validate_search_query("").is_err());
        assert!(validate_search_query("ab").is_err());
        assert!(validate_search_query("abc").is_ok());
        assert!(validate_search_query("merit org").is_ok());
    }
}
