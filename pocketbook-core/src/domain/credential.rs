//! Credential domain model and enrollment payload adapter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A stored access credential for one financial institution.
///
/// Keyed uniquely by `access_token`; `institution_name` is a secondary
/// lookup key, assumed (but not enforced) unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token granting access to the institution's data. Secret:
    /// callers must redact before exposing externally.
    pub access_token: String,
    pub institution_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Raw enrollment payload as the provider's connect flow posts it.
///
/// Every field is optional at the wire level; `into_credential` decides
/// what is actually required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentPayload {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: EnrollmentUser,
    #[serde(default)]
    pub enrollment: EnrollmentInfo,
    #[serde(default)]
    pub signatures: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentUser {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub institution: EnrollmentInstitution,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnrollmentInstitution {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl EnrollmentPayload {
    /// Adapt the nested provider shape into a canonical credential record.
    ///
    /// Fails with a validation error if the access token is absent. A
    /// missing institution name falls back to "Unknown Institution".
    pub fn into_credential(self) -> Result<Credential> {
        let access_token = self
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::validation("enrollment payload has no access token"))?;

        let now = Utc::now();
        Ok(Credential {
            access_token,
            institution_name: self
                .enrollment
                .institution
                .name
                .unwrap_or_else(|| "Unknown Institution".to_string()),
            institution_id: self.enrollment.institution.id,
            user_id: self.user.id,
            enrollment_id: self.enrollment.id,
            signature: self.signatures.and_then(|s| s.into_iter().next()),
            created_at: now,
            last_updated: now,
        })
    }
}
