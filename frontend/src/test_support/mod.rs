#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user(temp_password: bool, company_setup_completed: bool) -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            role: "company_admin".into(),
            department: None,
            designation: None,
            company_id: Some("c-1".into()),
            company_name: Some("Example Inc".into()),
            temp_password,
            company_setup_completed,
            // Not consulted for admins; kept true so tests that flip roles
            // start from an all-clear record.
            profile_completed: true,
        }
    }

    pub fn staff_user(role: &str, temp_password: bool, profile_completed: bool) -> UserResponse {
        UserResponse {
            id: format!("u-{}", role),
            name: "Staff User".into(),
            email: format!("{}@example.com", role),
            role: role.into(),
            department: Some("Engineering".into()),
            designation: None,
            company_id: Some("c-1".into()),
            company_name: Some("Example Inc".into()),
            temp_password,
            company_setup_completed: true,
            profile_completed,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
