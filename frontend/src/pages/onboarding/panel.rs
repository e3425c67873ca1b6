use crate::{
    api::{ApiClient, ApiError, CompanySetupRequest},
    components::{
        error::InlineErrorMessage,
        forms::{SelectField, SubmitButton, TextField},
    },
    navigation::next_required_path,
    router::ADMIN_DASHBOARD_PATH,
    state::auth::{self, UserFlagsUpdate},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn OnboardingPanel() -> impl IntoView {
    let company_name = create_rw_signal(String::new());
    let industry = create_rw_signal(String::new());
    let company_size = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let (auth, set_auth) = auth::use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    // Company setup is an admin-only step; anyone else who lands here is
    // sent back to their own required route.
    create_effect(move |_| {
        let state = auth.get();
        let Some(user) = state.user.as_ref() else {
            return;
        };
        if user.role != "company_admin" {
            if let Ok(path) = next_required_path(user) {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            }
        }
    });

    let setup_action = create_action(move |request: &CompanySetupRequest| {
        let payload = request.clone();
        let client = api.clone();
        async move { client.company_setup(payload).await }
    });
    let pending = setup_action.pending();

    create_effect(move |_| {
        if let Some(result) = setup_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    auth::update_user_flags(
                        set_auth,
                        UserFlagsUpdate {
                            company_setup_completed: Some(true),
                            ..UserFlagsUpdate::default()
                        },
                    );
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(ADMIN_DASHBOARD_PATH);
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
        let name = company_name.get_untracked().trim().to_string();
        let industry_value = industry.get_untracked().trim().to_string();
        let size = company_size.get_untracked();

        if let Err(msg) = super::utils::validate_company_setup(&name, &industry_value, &size) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);

        let address_value = address.get_untracked().trim().to_string();
        setup_action.dispatch(CompanySetupRequest {
            company_name: name,
            industry: industry_value,
            company_size: size,
            address: (!address_value.is_empty()).then_some(address_value),
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4 py-8">
            <div class="max-w-lg w-full bg-white shadow rounded-lg p-8">
                <h2 class="text-2xl font-bold text-gray-900 text-center mb-2">
                    "Set up your company"
                </h2>
                <p class="text-sm text-gray-600 text-center mb-6">
                    "Tell us about your organization to finish creating your workspace."
                </p>
                <InlineErrorMessage error={Signal::derive(move || error.get())} />
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField
                        value=company_name
                        label="Company name"
                        required=true
                    />
                    <TextField
                        value=industry
                        label="Industry"
                        placeholder="e.g. Software"
                        required=true
                    />
                    <SelectField
                        value=company_size
                        label="Company size"
                        options=super::utils::COMPANY_SIZES.to_vec()
                        required=true
                    />
                    <TextField
                        value=address
                        label="Address"
                    />
                    <SubmitButton
                        label="Finish setup"
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
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn onboarding_panel_renders_the_setup_form() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user(false, false)));
            view! { <OnboardingPanel /> }
        });
        assert!(html.contains("Set up your company"));
        assert!(html.contains("Company name"));
        assert!(html.contains("Company size"));
        assert!(html.contains("51-200 employees"));
    }
}
