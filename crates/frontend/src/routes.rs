//! Route table

use std::fmt;
use std::str::FromStr;
use talenthub_core::Role;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Redirects by auth state
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/verify-email")]
    VerifyEmail,
    #[at("/admin/:page")]
    Admin { page: DashboardPage },
    #[at("/hr/:page")]
    Hr { page: DashboardPage },
    #[at("/candidate/:page")]
    Candidate { page: DashboardPage },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route of `page` inside `role`'s area
    pub const fn in_area(role: Role, page: DashboardPage) -> Self {
        match role {
            Role::Admin => Self::Admin { page },
            Role::HrManager => Self::Hr { page },
            Role::Candidate => Self::Candidate { page },
        }
    }

    pub const fn dashboard(role: Role) -> Self {
        Self::in_area(role, DashboardPage::Dashboard)
    }

    /// Area and page of a dashboard route
    pub const fn area(&self) -> Option<(Role, DashboardPage)> {
        match *self {
            Self::Admin { page } => Some((Role::Admin, page)),
            Self::Hr { page } => Some((Role::HrManager, page)),
            Self::Candidate { page } => Some((Role::Candidate, page)),
            _ => None,
        }
    }

    /// Resolve a path produced by the session lifecycle (dashboards,
    /// remembered redirects); unknown paths land on the not-found page
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}

/// Pages inside a role area
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DashboardPage {
    Dashboard,
    Jobs,
    Messages,
    Assessments,
    Analytics,
    Settings,
}

impl DashboardPage {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Jobs,
        Self::Messages,
        Self::Assessments,
        Self::Analytics,
        Self::Settings,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Jobs => "jobs",
            Self::Messages => "messages",
            Self::Assessments => "assessments",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Jobs => "Jobs",
            Self::Messages => "Messages",
            Self::Assessments => "Assessments",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Whether the area of `role` has this page
    pub const fn exists_in(self, role: Role) -> bool {
        match role {
            Role::Admin => matches!(self, Self::Dashboard | Self::Analytics | Self::Settings),
            Role::HrManager => !matches!(self, Self::Assessments),
            Role::Candidate => !matches!(self, Self::Analytics),
        }
    }

    /// Pages of `role`'s area in navigation order
    pub fn for_area(role: Role) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |page| page.exists_in(role))
    }
}

impl fmt::Display for DashboardPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DashboardPage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talenthub_core::RoutePolicy;

    #[test]
    fn test_role_dashboards_are_routes() {
        for role in Role::ALL {
            assert_eq!(Route::from_path(role.dashboard_path()), Route::dashboard(role));
            assert_eq!(Route::dashboard(role).to_path(), role.dashboard_path());
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/reset-password?token=abc"), Route::ResetPassword);
        assert_eq!(
            Route::from_path("/hr/jobs"),
            Route::Hr {
                page: DashboardPage::Jobs
            }
        );
        assert_eq!(Route::from_path("/hr/payroll"), Route::NotFound);
        assert_eq!(Route::from_path("/nowhere"), Route::NotFound);
    }

    #[test]
    fn test_area_pages_match_policy() {
        let policy = RoutePolicy::default();
        for role in Role::ALL {
            for page in DashboardPage::for_area(role) {
                let path = Route::in_area(role, page).to_path();
                assert!(policy.permits(role, &path), "{role} should open {path}");
            }
        }
        assert!(!DashboardPage::Assessments.exists_in(Role::HrManager));
        assert_eq!(DashboardPage::for_area(Role::Admin).count(), 3);
    }
}
