use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role; drives route access and the landing dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    HrManager,
    Candidate,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::HrManager, Self::Candidate];

    /// URL segment for the role's area (`/admin`, `/hr`, `/candidate`)
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HrManager => "hr",
            Self::Candidate => "candidate",
        }
    }

    /// The role's own dashboard. Total over all roles.
    #[must_use]
    pub const fn dashboard_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin/dashboard",
            Self::HrManager => "/hr/dashboard",
            Self::Candidate => "/candidate/dashboard",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::HrManager => "HR Manager",
            Self::Candidate => "Candidate",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::HrManager => "HR_MANAGER",
            Self::Candidate => "CANDIDATE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role strings outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Snapshot of the signed-in user, replaced wholesale on login or restore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

impl UserRecord {
    /// Name to greet the user with, falling back to the email address
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.email.clone(),
        }
    }
}

/// Client-side session. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserRecord,
    /// Epoch milliseconds of the last user interaction
    pub last_activity_ms: i64,
}

impl Session {
    /// Build a fresh session from a successful login
    #[must_use]
    pub fn from_login(response: LoginResponse, now_ms: i64) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            user: response.user,
            last_activity_ms: now_ms,
        }
    }

    /// Swap in a refreshed token pair, keeping user and activity
    #[must_use]
    pub fn with_tokens(self, tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            ..self
        }
    }
}

/// `POST /auth/login` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserRecord,
}

/// `POST /auth/refresh` response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::HrManager).unwrap(), "\"HR_MANAGER\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"CANDIDATE\"").unwrap(),
            Role::Candidate
        );
        assert!(serde_json::from_str::<Role>("\"SUPERUSER\"").is_err());
    }

    #[test]
    fn test_every_role_has_its_own_dashboard() {
        for role in Role::ALL {
            let path = role.dashboard_path();
            assert!(path.starts_with(&format!("/{}/", role.slug())));
            assert_ne!(path, "/");
        }
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(
            "admin".parse::<Role>(),
            Err(UnknownRole("admin".to_string()))
        );
    }

    #[test]
    fn test_user_record_camel_case() {
        let json = r#"{"id":"u1","email":"a@b.c","role":"ADMIN","firstName":"Ada","emailVerified":true}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert!(user.email_verified);
        assert_eq!(user.display_name(), "Ada");
    }
}
