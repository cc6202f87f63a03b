//! Route access policy and the guard decision

use crate::error::AuthError;
use crate::types::Role;

/// Sign-in page; target of every unauthenticated redirect
pub const LOGIN_PATH: &str = "/login";

/// Who may open a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Any signed-in user
    Authenticated,
    Roles(Vec<Role>),
}

impl RouteAccess {
    /// Shorthand for a role-gated route
    #[must_use]
    pub fn roles(roles: &[Role]) -> Self {
        Self::Roles(roles.to_vec())
    }

    #[must_use]
    pub fn permits(&self, role: Role) -> bool {
        match self {
            Self::Public | Self::Authenticated => true,
            Self::Roles(roles) => roles.contains(&role),
        }
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// Path-prefix table mapping routes to access rules
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    public: Vec<&'static str>,
    prefixes: Vec<(&'static str, RouteAccess)>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            public: vec![
                LOGIN_PATH,
                "/register",
                "/forgot-password",
                "/reset-password",
                "/verify-email",
            ],
            prefixes: vec![
                ("/admin", RouteAccess::roles(&[Role::Admin])),
                ("/hr", RouteAccess::roles(&[Role::HrManager, Role::Admin])),
                ("/candidate", RouteAccess::roles(&[Role::Candidate])),
            ],
        }
    }
}

impl RoutePolicy {
    /// Resolve the rule for a path; query strings and trailing slashes are ignored
    #[must_use]
    pub fn access_for(&self, path: &str) -> RouteAccess {
        let path = normalize(path);
        if self.public.iter().any(|p| *p == path) {
            return RouteAccess::Public;
        }
        self.prefixes
            .iter()
            .find(|(prefix, _)| path == *prefix || path.starts_with(&format!("{prefix}/")))
            .map_or(RouteAccess::Authenticated, |(_, access)| access.clone())
    }

    /// Whether `role` may open `path`
    #[must_use]
    pub fn permits(&self, role: Role, path: &str) -> bool {
        self.access_for(path).permits(role)
    }

    /// Where to land after sign-in: the remembered path when the role may
    /// open it, otherwise the role's dashboard
    #[must_use]
    pub fn post_login_target(&self, role: Role, remembered: Option<&str>) -> String {
        match remembered {
            Some(path)
                if path.starts_with('/')
                    && normalize(path) != "/"
                    && !self.access_for(path).is_public()
                    && self.permits(role, path) =>
            {
                path.to_string()
            }
            _ => role.dashboard_path().to_string(),
        }
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Auth state as the guard sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAuth {
    /// Session restoration has not settled yet
    Loading,
    Authenticated(Role),
    Unauthenticated,
}

/// Outcome of a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// No session and no tokens; come back to `return_to` after sign-in
    RedirectToLogin { return_to: String },
    /// Tokens present but not yet validated
    Restoring,
    /// Signed in with the wrong role; always the user's own dashboard
    RedirectToDashboard { target: &'static str, notice: String },
}

/// Decide what a guarded navigation does
#[must_use]
pub fn decide(
    auth: GuardAuth,
    has_tokens: bool,
    access: &RouteAccess,
    requested_path: &str,
) -> GuardDecision {
    if access.is_public() {
        return GuardDecision::Render;
    }
    match auth {
        GuardAuth::Authenticated(role) if access.permits(role) => GuardDecision::Render,
        GuardAuth::Authenticated(role) => GuardDecision::RedirectToDashboard {
            target: role.dashboard_path(),
            notice: AuthError::AuthorizationDenied {
                role,
                path: requested_path.to_string(),
            }
            .to_string(),
        },
        GuardAuth::Loading | GuardAuth::Unauthenticated if has_tokens => GuardDecision::Restoring,
        GuardAuth::Loading | GuardAuth::Unauthenticated => GuardDecision::RedirectToLogin {
            return_to: requested_path.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_table() {
        let policy = RoutePolicy::default();
        assert_eq!(policy.access_for("/login"), RouteAccess::Public);
        assert_eq!(
            policy.access_for("/reset-password?token=abc"),
            RouteAccess::Public
        );
        assert_eq!(
            policy.access_for("/candidate/jobs/"),
            RouteAccess::roles(&[Role::Candidate])
        );
        assert!(policy.permits(Role::Admin, "/hr/analytics"));
        assert!(!policy.permits(Role::HrManager, "/admin/settings"));
        assert_eq!(policy.access_for("/profile"), RouteAccess::Authenticated);
        // prefix match is per segment
        assert_eq!(policy.access_for("/hrx"), RouteAccess::Authenticated);
    }

    #[test]
    fn test_admin_on_candidate_route_goes_to_admin_dashboard() {
        let access = RoutePolicy::default().access_for("/candidate/assessments");
        for _ in 0..3 {
            let decision = decide(
                GuardAuth::Authenticated(Role::Admin),
                true,
                &access,
                "/candidate/assessments",
            );
            match decision {
                GuardDecision::RedirectToDashboard { target, notice } => {
                    assert_eq!(target, "/admin/dashboard");
                    assert_eq!(
                        notice,
                        "Administrator accounts cannot open that page. \
                         You have been returned to your dashboard."
                    );
                }
                other => panic!("unexpected decision {other:?}"),
            }
        }
    }

    #[test]
    fn test_unauthenticated_without_tokens_goes_to_login() {
        let access = RouteAccess::roles(&[Role::Candidate]);
        assert_eq!(
            decide(GuardAuth::Unauthenticated, false, &access, "/candidate/jobs"),
            GuardDecision::RedirectToLogin {
                return_to: "/candidate/jobs".to_string()
            }
        );
    }

    #[test]
    fn test_tokens_present_defers_to_restoration() {
        let access = RouteAccess::Authenticated;
        assert_eq!(
            decide(GuardAuth::Unauthenticated, true, &access, "/x"),
            GuardDecision::Restoring
        );
        assert_eq!(
            decide(GuardAuth::Loading, true, &access, "/x"),
            GuardDecision::Restoring
        );
    }

    #[test]
    fn test_public_routes_always_render() {
        for auth in [
            GuardAuth::Loading,
            GuardAuth::Unauthenticated,
            GuardAuth::Authenticated(Role::Candidate),
        ] {
            assert_eq!(
                decide(auth, false, &RouteAccess::Public, "/login"),
                GuardDecision::Render
            );
        }
    }

    #[test]
    fn test_post_login_target() {
        let policy = RoutePolicy::default();
        assert_eq!(
            policy.post_login_target(Role::Candidate, Some("/candidate/messages")),
            "/candidate/messages"
        );
        assert_eq!(
            policy.post_login_target(Role::Candidate, Some("/admin/settings")),
            "/candidate/dashboard"
        );
        assert_eq!(
            policy.post_login_target(Role::HrManager, Some("/login")),
            "/hr/dashboard"
        );
        assert_eq!(policy.post_login_target(Role::Admin, None), "/admin/dashboard");
    }
}
