use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{
        admin_dashboard::AdminDashboardPage, change_password::ChangePasswordPage,
        dashboard::DashboardPage, home::HomePage, login::LoginPage, onboarding::OnboardingPage,
        profile_completion::ProfileCompletionPage,
    },
    state::auth::AuthProvider,
};

pub const LOGIN_PATH: &str = "/login";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
pub const ONBOARDING_PATH: &str = "/onboarding";
pub const PROFILE_COMPLETION_PATH: &str = "/profile-completion";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const DASHBOARD_PATH: &str = "/dashboard";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    LOGIN_PATH,
    CHANGE_PASSWORD_PATH,
    ONBOARDING_PATH,
    PROFILE_COMPLETION_PATH,
    DASHBOARD_PATH,
    ADMIN_DASHBOARD_PATH,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    CHANGE_PASSWORD_PATH,
    ONBOARDING_PATH,
    PROFILE_COMPLETION_PATH,
    DASHBOARD_PATH,
    ADMIN_DASHBOARD_PATH,
];

/// Paths that never bounce an unauthenticated visitor to the login page.
pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_ROUTE_PATHS.contains(&path)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path=LOGIN_PATH view=LoginPage/>
                    <Route path=CHANGE_PASSWORD_PATH view=ProtectedChangePassword/>
                    <Route path=ONBOARDING_PATH view=ProtectedOnboarding/>
                    <Route path=PROFILE_COMPLETION_PATH view=ProtectedProfileCompletion/>
                    <Route path=DASHBOARD_PATH view=ProtectedDashboard/>
                    <Route path=ADMIN_DASHBOARD_PATH view=ProtectedAdminDashboard/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedChangePassword() -> impl IntoView {
    view! { <RequireAuth><ChangePasswordPage/></RequireAuth> }
}

#[component]
fn ProtectedOnboarding() -> impl IntoView {
    view! { <RequireAuth><OnboardingPage/></RequireAuth> }
}

#[component]
fn ProtectedProfileCompletion() -> impl IntoView {
    view! { <RequireAuth><ProfileCompletionPage/></RequireAuth> }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireAuth><AdminDashboardPage/></RequireAuth> }
}
