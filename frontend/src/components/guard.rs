use crate::{
    components::error::AccountConfigError,
    components::layout::LoadingSpinner,
    navigation::{resolve_navigation, NavigationContext, NavigationError, NavigationTarget},
    state::auth::{use_auth, AuthState},
};
use leptos::*;
use leptos_router::use_location;

/// Route guard for everything behind authentication. Re-evaluates the
/// navigation resolver whenever the auth snapshot or the path changes and
/// applies the resulting redirect; the resolver guarantees the follow-up
/// evaluation at the target path is a fixed point.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let location = use_location();

    let decision = create_memo(move |_| {
        let state = auth.get();
        let path = location.pathname.get();
        decide(&state, &path)
    });

    create_effect(move |_| {
        if let Ok(NavigationTarget::RedirectTo(target)) = decision.get() {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(target);
            }
        }
    });

    view! {
        <Show
            when=move || {
                let state = auth.get();
                should_render_children(&decision.get(), &state)
            }
            fallback=move || match decision.get() {
                Err(NavigationError::UnknownRole(_)) => view! { <AccountConfigError /> }.into_view(),
                _ => view! { <LoadingSpinner /> }.into_view(),
            }
        >
            {children()}
        </Show>
    }
}

fn decide(state: &AuthState, path: &str) -> Result<NavigationTarget, NavigationError> {
    resolve_navigation(&NavigationContext {
        loading: state.loading,
        is_authenticated: state.is_authenticated,
        user: state.user.as_ref(),
        current_path: path,
    })
}

fn should_render_children(
    decision: &Result<NavigationTarget, NavigationError>,
    state: &AuthState,
) -> bool {
    state.is_authenticated
        && !state.loading
        && state.user.is_some()
        && matches!(decision, Ok(NavigationTarget::Stay))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, staff_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;
    use leptos_router::{Router, RouterIntegrationContext, ServerIntegration};

    fn render_guard_at(path: &str, state: AuthState) -> String {
        let path = format!("http://localhost{}", path);
        render_to_string(move || {
            provide_context(RouterIntegrationContext::new(ServerIntegration {
                path,
            }));
            let (auth, set_auth) = create_signal(state);
            provide_context((auth, set_auth));
            view! {
                <Router>
                    <RequireAuth>
                        {|| view! { <div>"protected-content"</div> }}
                    </RequireAuth>
                </Router>
            }
        })
    }

    #[test]
    fn renders_children_for_a_ready_employee() {
        let html = render_guard_at(
            "/dashboard",
            AuthState {
                user: Some(staff_user("employee", false, true)),
                is_authenticated: true,
                loading: false,
            },
        );
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn shows_spinner_while_auth_is_loading() {
        let html = render_guard_at(
            "/dashboard",
            AuthState {
                user: None,
                is_authenticated: false,
                loading: true,
            },
        );
        assert!(!html.contains("protected-content"));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn hides_children_when_unauthenticated() {
        let html = render_guard_at(
            "/dashboard",
            AuthState {
                user: None,
                is_authenticated: false,
                loading: false,
            },
        );
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn hides_children_from_an_admin_pending_company_setup() {
        let html = render_guard_at(
            "/admin/dashboard",
            AuthState {
                user: Some(admin_user(false, false)),
                is_authenticated: true,
                loading: false,
            },
        );
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn shows_account_config_error_for_unknown_roles() {
        let mut user = staff_user("employee", false, true);
        user.role = "contractor".into();
        let html = render_guard_at(
            "/dashboard",
            AuthState {
                user: Some(user),
                is_authenticated: true,
                loading: false,
            },
        );
        assert!(!html.contains("protected-content"));
        assert!(html.contains("Account configuration error"));
    }
}
