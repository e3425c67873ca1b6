//! Decides where the app should send a user based on their role and
//! onboarding flags. Pure over its inputs; the route guard applies the
//! resulting redirect and re-evaluates after every navigation, so a
//! `RedirectTo` must resolve to `Stay` once followed.

use crate::api::UserResponse;
use crate::router::{
    is_public_path, ADMIN_DASHBOARD_PATH, CHANGE_PASSWORD_PATH, DASHBOARD_PATH, LOGIN_PATH,
    ONBOARDING_PATH, PROFILE_COMPLETION_PATH,
};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    CompanyAdmin,
    Hr,
    Manager,
    TeamLead,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CompanyAdmin => "company_admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::TeamLead => "team_lead",
            Role::Employee => "employee",
        }
    }
}

impl FromStr for Role {
    type Err = NavigationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "company_admin" => Ok(Role::CompanyAdmin),
            "hr" => Ok(Role::Hr),
            "manager" => Ok(Role::Manager),
            "team_lead" => Ok(Role::TeamLead),
            "employee" => Ok(Role::Employee),
            other => Err(NavigationError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    Stay,
    RedirectTo(&'static str),
}

/// An unrecognized role is surfaced to the caller instead of being routed
/// to some default dashboard; guessing would grant a page the account is
/// not entitled to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationContext<'a> {
    pub loading: bool,
    pub is_authenticated: bool,
    pub user: Option<&'a UserResponse>,
    pub current_path: &'a str,
}

/// Resolves the single route the user is required to be on.
///
/// Onboarding steps are strictly ordered: password change first, then the
/// role-specific setup step, then the role's dashboard. Within a session the
/// flags only ever flip `false -> true`, so following one redirect always
/// reaches a fixed point.
pub fn resolve_navigation(
    ctx: &NavigationContext<'_>,
) -> Result<NavigationTarget, NavigationError> {
    if ctx.loading {
        return Ok(NavigationTarget::Stay);
    }

    if !ctx.is_authenticated {
        return Ok(if is_public_path(ctx.current_path) {
            NavigationTarget::Stay
        } else {
            NavigationTarget::RedirectTo(LOGIN_PATH)
        });
    }

    let Some(user) = ctx.user else {
        // Authenticated with no record yet; the auth layer resolves this on
        // its next update, so staying put beats guessing.
        log::warn!("authenticated session without a user record; staying put");
        return Ok(NavigationTarget::Stay);
    };

    let role = Role::from_str(&user.role)?;

    let target = match role {
        Role::CompanyAdmin => {
            if user.temp_password {
                redirect_unless_at(CHANGE_PASSWORD_PATH, ctx.current_path)
            } else if !user.company_setup_completed {
                redirect_unless_at(ONBOARDING_PATH, ctx.current_path)
            } else if ctx.current_path == ONBOARDING_PATH {
                // Completed setup is not revisited.
                NavigationTarget::RedirectTo(ADMIN_DASHBOARD_PATH)
            } else {
                NavigationTarget::Stay
            }
        }
        _ => {
            if user.temp_password {
                redirect_unless_at(CHANGE_PASSWORD_PATH, ctx.current_path)
            } else if !user.profile_completed {
                redirect_unless_at(PROFILE_COMPLETION_PATH, ctx.current_path)
            } else if ctx.current_path == PROFILE_COMPLETION_PATH {
                NavigationTarget::RedirectTo(role_dashboard_path(role))
            } else {
                NavigationTarget::Stay
            }
        }
    };

    Ok(target)
}

fn redirect_unless_at(required: &'static str, current: &str) -> NavigationTarget {
    if current == required {
        NavigationTarget::Stay
    } else {
        NavigationTarget::RedirectTo(required)
    }
}

pub fn role_dashboard_path(role: Role) -> &'static str {
    match role {
        Role::CompanyAdmin => ADMIN_DASHBOARD_PATH,
        Role::Hr | Role::Manager | Role::TeamLead | Role::Employee => DASHBOARD_PATH,
    }
}

/// The path the user belongs on right now, independent of where they are.
/// Pages use this after a completion step to pick the follow-up route.
pub fn next_required_path(user: &UserResponse) -> Result<&'static str, NavigationError> {
    let role = Role::from_str(&user.role)?;
    if user.temp_password {
        return Ok(CHANGE_PASSWORD_PATH);
    }
    match role {
        Role::CompanyAdmin if !user.company_setup_completed => Ok(ONBOARDING_PATH),
        Role::CompanyAdmin => Ok(ADMIN_DASHBOARD_PATH),
        _ if !user.profile_completed => Ok(PROFILE_COMPLETION_PATH),
        _ => Ok(role_dashboard_path(role)),
    }
}
