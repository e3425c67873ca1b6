use crate::{
    api::{ApiClient, ApiError, CompleteProfileRequest},
    components::{
        error::InlineErrorMessage,
        forms::{SubmitButton, TextField},
    },
    navigation::next_required_path,
    state::auth::{self, UserFlagsUpdate},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ProfileCompletionPanel() -> impl IntoView {
    let full_name = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let designation = create_rw_signal(String::new());
    let department = create_rw_signal(String::new());
    let city = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let (auth, set_auth) = auth::use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    // Admins finish company setup instead of a personal profile.
    create_effect(move |_| {
        let state = auth.get();
        let Some(user) = state.user.as_ref() else {
            return;
        };
        if user.role == "company_admin" {
            if let Ok(path) = next_required_path(user) {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            }
        }
    });

    // Prefill from the signed-in record.
    create_effect(move |_| {
        if let Some(user) = auth.get().user {
            if full_name.get_untracked().is_empty() {
                full_name.set(user.name.clone());
            }
        }
    });

    let profile_action = create_action(move |request: &CompleteProfileRequest| {
        let payload = request.clone();
        let client = api.clone();
        async move { client.complete_profile(payload).await }
    });
    let pending = profile_action.pending();

    create_effect(move |_| {
        if let Some(result) = profile_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    auth::update_user_flags(
                        set_auth,
                        UserFlagsUpdate {
                            profile_completed: Some(true),
                            ..UserFlagsUpdate::default()
                        },
                    );
                    let destination = auth
                        .get_untracked()
                        .user
                        .as_ref()
                        .map(next_required_path)
                        .transpose();
                    match destination {
                        Ok(Some(path)) => {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().set_href(path);
                            }
                        }
                        Ok(None) => log::warn!("profile completed with no user record"),
                        Err(err) => {
                            log::error!("cannot route after profile completion: {}", err);
                            error.set(Some(ApiError::unknown(
                                "Your account has a role this application does not recognize. \
                                 Please contact your administrator.",
                            )));
                        }
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name = full_name.get_untracked().trim().to_string();
        if let Err(msg) = super::utils::validate_profile(&name) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);

        profile_action.dispatch(CompleteProfileRequest {
            full_name: name,
            phone: super::utils::optional(phone.get_untracked()),
            designation: super::utils::optional(designation.get_untracked()),
            department: super::utils::optional(department.get_untracked()),
            address: None,
            city: super::utils::optional(city.get_untracked()),
            country: None,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4 py-8">
            <div class="max-w-lg w-full bg-white shadow rounded-lg p-8">
                <h2 class="text-2xl font-bold text-gray-900 text-center mb-2">
                    "Complete your profile"
                </h2>
                <p class="text-sm text-gray-600 text-center mb-6">
                    "A few details about you before you get started."
                </p>
                <InlineErrorMessage error={Signal::derive(move || error.get())} />
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField
                        value=full_name
                        label="Full name"
                        required=true
                    />
                    <TextField
                        value=phone
                        label="Phone"
                        input_type="tel"
                    />
                    <TextField
                        value=designation
                        label="Designation"
                        placeholder="e.g. Backend Engineer"
                    />
                    <TextField
                        value=department
                        label="Department"
                    />
                    <TextField
                        value=city
                        label="City"
                    />
                    <SubmitButton
                        label="Save profile"
                        pending_label="Saving..."
                        pending={Signal::derive(move || pending.get())}
                    />
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, staff_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_panel_renders_and_prefills_the_name() {
        let html = render_to_string(move || {
            provide_auth(Some(staff_user("employee", false, false)));
            view! { <ProfileCompletionPanel /> }
        });
        assert!(html.contains("Complete your profile"));
        assert!(html.contains("Full name"));
        assert!(html.contains("Designation"));
    }
}
