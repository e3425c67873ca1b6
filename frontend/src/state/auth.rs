use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse, UserResponse};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

/// Partial flag update applied after an onboarding step completes. Each
/// backend operation flips exactly one flag, so at most one field is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserFlagsUpdate {
    pub temp_password: Option<bool>,
    pub company_setup_completed: Option<bool>,
    pub profile_completed: Option<bool>,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    // Restore the session off the initial render so consumers observe the
    // loading state until the stored record is read back.
    spawn_local(async move {
        match restore_session() {
            Some(user) => set_auth_state.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            None => set_auth_state.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            }),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserResponse, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match client.login(request).await {
        Ok(response) => {
            persist_session(&response);
            set_auth_state.update(|state| {
                state.user = Some(response.user.clone());
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(response.user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = client.logout().await;

    // The local session ends even if the backend call failed.
    clear_session();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });

    result
}

/// Applies a completion-step flag flip to the in-memory record and the
/// stored copy, so the next resolver evaluation reads fresh flags.
pub fn update_user_flags(set_auth_state: WriteSignal<AuthState>, update: UserFlagsUpdate) {
    set_auth_state.update(|state| {
        let Some(user) = state.user.as_mut() else {
            log::warn!("flag update with no user record; ignoring");
            return;
        };
        if let Some(value) = update.temp_password {
            user.temp_password = value;
        }
        if let Some(value) = update.company_setup_completed {
            user.company_setup_completed = value;
        }
        if let Some(value) = update.profile_completed {
            user.profile_completed = value;
        }
        persist_user(user);
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserResponse, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let client = api.clone();
        async move { login_request(payload, &client, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    create_action(move |_: &()| {
        let client = api.clone();
        async move { logout(&client, set_auth).await }
    })
}

#[cfg(target_arch = "wasm32")]
fn restore_session() -> Option<UserResponse> {
    let storage = crate::utils::storage::local_storage()?;
    let token = storage.get_item("access_token").ok()??;
    if token.is_empty() {
        return None;
    }
    let raw_user = storage.get_item("current_user").ok()??;
    match serde_json::from_str(&raw_user) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding unparseable stored user record: {}", err);
            clear_session();
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn restore_session() -> Option<UserResponse> {
    None
}

#[cfg(target_arch = "wasm32")]
fn persist_session(response: &LoginResponse) {
    let Some(storage) = crate::utils::storage::local_storage() else {
        return;
    };
    let _ = storage.set_item("access_token", &response.access_token);
    let _ = storage.set_item("refresh_token", &response.refresh_token);
    if let Ok(user_json) = serde_json::to_string(&response.user) {
        let _ = storage.set_item("current_user", &user_json);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_session(_response: &LoginResponse) {}

#[cfg(target_arch = "wasm32")]
fn persist_user(user: &UserResponse) {
    let Some(storage) = crate::utils::storage::local_storage() else {
        return;
    };
    if let Ok(user_json) = serde_json::to_string(user) {
        let _ = storage.set_item("current_user", &user_json);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_user(_user: &UserResponse) {}

#[cfg(target_arch = "wasm32")]
fn clear_session() {
    if let Some(storage) = crate::utils::storage::local_storage() {
        let _ = storage.remove_item("access_token");
        let _ = storage.remove_item("refresh_token");
        let _ = storage.remove_item("current_user");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_session() {}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::MockBackend;
    use reqwest::Method;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let backend = MockBackend::start();
        backend.stub(
            Method::POST,
            "/auth/login/",
            200,
            serde_json::json!({
                "user": {
                    "id": "u1",
                    "name": "Alice",
                    "email": "alice@example.com",
                    "role": "hr",
                    "profile_completed": false
                },
                "access_token": "at-1",
                "refresh_token": "rt-1"
            }),
        );
        backend.stub(Method::POST, "/auth/logout/", 200, serde_json::json!({}));

        let runtime = leptos::create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let client = ApiClient::new_with_base_url(backend.base_url());

        let user = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
            },
            &client,
            set_state,
        )
        .await
        .unwrap();
        assert_eq!(user.role, "hr");

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.loading);
        assert!(!snapshot.user.as_ref().unwrap().profile_completed);

        logout(&client, set_state).await.unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_clears_loading_and_keeps_state() {
        let backend = MockBackend::start();
        backend.stub(
            Method::POST,
            "/auth/login/",
            401,
            serde_json::json!({ "error": "Invalid credentials" }),
        );

        let runtime = leptos::create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let client = ApiClient::new_with_base_url(backend.base_url());

        let error = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
            },
            &client,
            set_state,
        )
        .await
        .expect_err("should fail");
        assert_eq!(error.error, "Invalid credentials");

        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(!snapshot.loading);
        runtime.dispose();
    }
}
