//! Hash route table and the role guard in front of it.

use crate::system::auth::{Role, UserSession};

pub const LOGIN_PATH: &str = "/login";
pub const USER_HOME: &str = "/dashboard/overview";
pub const ADMIN_HOME: &str = "/admin/customers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAccess {
    Public,
    UserOnly,
    AdminOnly,
    /// Any authenticated role
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Otp,
    Legal,
    Overview,
    Itc,
    Sales,
    Compliance,
    GstConnect,
    Subscription,
    AdminCustomers,
    AdminSubscriptions,
    AdminTickets,
    AdminLogs,
    Settings,
    Support,
}

impl AppRoute {
    pub const ALL: [AppRoute; 15] = [
        AppRoute::Login,
        AppRoute::Otp,
        AppRoute::Legal,
        AppRoute::Overview,
        AppRoute::Itc,
        AppRoute::Sales,
        AppRoute::Compliance,
        AppRoute::GstConnect,
        AppRoute::Subscription,
        AppRoute::AdminCustomers,
        AppRoute::AdminSubscriptions,
        AppRoute::AdminTickets,
        AppRoute::AdminLogs,
        AppRoute::Settings,
        AppRoute::Support,
    ];

    /// Canonical path.
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => LOGIN_PATH,
            AppRoute::Otp => "/otp",
            AppRoute::Legal => "/legal",
            AppRoute::Overview => USER_HOME,
            AppRoute::Itc => "/dashboard/itc",
            AppRoute::Sales => "/dashboard/sales",
            AppRoute::Compliance => "/dashboard/compliance",
            AppRoute::GstConnect => "/gst-connection",
            AppRoute::Subscription => "/subscription",
            AppRoute::AdminCustomers => ADMIN_HOME,
            AppRoute::AdminSubscriptions => "/admin/subscriptions",
            AppRoute::AdminTickets => "/admin/tickets",
            AppRoute::AdminLogs => "/admin/logs",
            AppRoute::Settings => "/settings",
            AppRoute::Support => "/support",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Login",
            AppRoute::Otp => "Verify OTP",
            AppRoute::Legal => "Legal",
            AppRoute::Overview => "Overview",
            AppRoute::Itc => "Input Tax Credit",
            AppRoute::Sales => "Sales Register",
            AppRoute::Compliance => "Compliance & Alerts",
            AppRoute::GstConnect => "GST Connection",
            AppRoute::Subscription => "Subscription",
            AppRoute::AdminCustomers => "Customers",
            AppRoute::AdminSubscriptions => "Subscriptions",
            AppRoute::AdminTickets => "Support Tickets",
            AppRoute::AdminLogs => "Activity Logs",
            AppRoute::Settings => "Settings",
            AppRoute::Support => "Support",
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            AppRoute::Login | AppRoute::Otp | AppRoute::Legal => RouteAccess::Public,
            AppRoute::Overview
            | AppRoute::Itc
            | AppRoute::Sales
            | AppRoute::Compliance
            | AppRoute::GstConnect
            | AppRoute::Subscription => RouteAccess::UserOnly,
            AppRoute::AdminCustomers
            | AppRoute::AdminSubscriptions
            | AppRoute::AdminTickets
            | AppRoute::AdminLogs => RouteAccess::AdminOnly,
            AppRoute::Settings | AppRoute::Support => RouteAccess::Shared,
        }
    }

    /// Rendered inside the sidebar/header chrome.
    pub fn uses_shell(&self) -> bool {
        self.access() != RouteAccess::Public
    }

    pub fn allows(&self, role: Role) -> bool {
        match self.access() {
            RouteAccess::Public | RouteAccess::Shared => true,
            RouteAccess::UserOnly => role == Role::User,
            RouteAccess::AdminOnly => role == Role::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(&'static str),
}

pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_HOME,
        Role::User => USER_HOME,
    }
}

/// `#/a/b/?x=1` and `/a/b` both become `/a/b`.
pub fn normalize_hash(raw: &str) -> String {
    let path = raw.trim_start_matches('#');
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

enum Target {
    Route(AppRoute),
    /// Path that only forwards to a canonical route.
    Alias(AppRoute),
}

fn lookup(path: &str) -> Option<Target> {
    match path {
        "/" => Some(Target::Route(AppRoute::Overview)),
        "/dashboard" => Some(Target::Alias(AppRoute::Overview)),
        "/admin" => Some(Target::Alias(AppRoute::AdminCustomers)),
        _ => AppRoute::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .map(Target::Route),
    }
}

/// Decides what to show for a hash path given the current session.
pub fn resolve(path: &str, session: Option<&UserSession>) -> RouteDecision {
    let path = normalize_hash(path);
    let Some(target) = lookup(&path) else {
        return RouteDecision::Redirect(LOGIN_PATH);
    };
    let route = match target {
        Target::Route(route) | Target::Alias(route) => route,
    };

    if route.access() != RouteAccess::Public {
        let Some(session) = session else {
            return RouteDecision::Redirect(LOGIN_PATH);
        };
        if !route.allows(session.role) {
            return RouteDecision::Redirect(home_path(session.role));
        }
    }

    match target {
        Target::Alias(route) => RouteDecision::Redirect(route.path()),
        Target::Route(route) => RouteDecision::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::PlanTier;

    fn session(role: Role) -> UserSession {
        UserSession {
            name: "User".into(),
            email: String::new(),
            company_name: String::new(),
            user_type: PlanTier::Individual,
            role,
            phone_number: "9876543210".into(),
            credits: 5,
            referral_code: "PIN-ABCDE".into(),
            referred_by: None,
            is_profile_complete: true,
            connected_gstins: vec![],
        }
    }

    #[test]
    fn test_normalize_hash() {
        assert_eq!(normalize_hash(""), "/");
        assert_eq!(normalize_hash("#/"), "/");
        assert_eq!(normalize_hash("#/dashboard/itc/"), "/dashboard/itc");
        assert_eq!(normalize_hash("#/settings?tab=export"), "/settings");
        assert_eq!(normalize_hash("support"), "/support");
    }

    #[test]
    fn test_public_routes_render_without_session() {
        assert_eq!(resolve("/login", None), RouteDecision::Render(AppRoute::Login));
        assert_eq!(resolve("/otp", None), RouteDecision::Render(AppRoute::Otp));
        assert_eq!(resolve("/legal", None), RouteDecision::Render(AppRoute::Legal));
    }

    #[test]
    fn test_protected_routes_require_session() {
        for route in AppRoute::ALL.iter().filter(|r| r.uses_shell()) {
            assert_eq!(resolve(route.path(), None), RouteDecision::Redirect("/login"));
        }
        assert_eq!(resolve("/", None), RouteDecision::Redirect("/login"));
        assert_eq!(resolve("/dashboard", None), RouteDecision::Redirect("/login"));
    }

    #[test]
    fn test_unknown_path_goes_to_login() {
        let user = session(Role::User);
        assert_eq!(resolve("/nope", Some(&user)), RouteDecision::Redirect("/login"));
    }

    #[test]
    fn test_role_mismatch_goes_home() {
        let user = session(Role::User);
        let admin = session(Role::Admin);
        assert_eq!(
            resolve("/admin/customers", Some(&user)),
            RouteDecision::Redirect("/dashboard/overview")
        );
        assert_eq!(resolve("/admin", Some(&user)), RouteDecision::Redirect("/dashboard/overview"));
        assert_eq!(
            resolve("/dashboard/sales", Some(&admin)),
            RouteDecision::Redirect("/admin/customers")
        );
        assert_eq!(resolve("/", Some(&admin)), RouteDecision::Redirect("/admin/customers"));
    }

    #[test]
    fn test_aliases_and_shared_routes() {
        let user = session(Role::User);
        let admin = session(Role::Admin);
        assert_eq!(
            resolve("/dashboard", Some(&user)),
            RouteDecision::Redirect("/dashboard/overview")
        );
        assert_eq!(resolve("/admin", Some(&admin)), RouteDecision::Redirect("/admin/customers"));
        assert_eq!(resolve("/", Some(&user)), RouteDecision::Render(AppRoute::Overview));
        assert_eq!(resolve("/settings", Some(&admin)), RouteDecision::Render(AppRoute::Settings));
        assert_eq!(resolve("/support", Some(&user)), RouteDecision::Render(AppRoute::Support));
    }
}
