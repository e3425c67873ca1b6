use crate::{
    api::{ApiError, LoginRequest},
    components::{
        error::InlineErrorMessage,
        forms::{SubmitButton, TextField},
    },
    navigation::next_required_path,
    pages::login::utils,
    state::auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(user) => match next_required_path(&user) {
                    Ok(path) => {
                        error.set(None);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(path);
                        }
                    }
                    Err(err) => {
                        log::error!("cannot route freshly signed-in user: {}", err);
                        error.set(Some(ApiError::unknown(
                            "Your account has a role this application does not recognize. \
                             Please contact your administrator.",
                        )));
                    }
                },
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        if let Err(msg) = utils::validate_credentials(&email_value, &password_value) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);

        login_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white shadow rounded-lg p-8">
                <h2 class="text-2xl font-bold text-gray-900 text-center mb-6">
                    "Sign in to WorkHub"
                </h2>
                <InlineErrorMessage error={Signal::derive(move || error.get())} />
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField
                        value=email
                        label="Email"
                        input_type="email"
                        placeholder="you@company.com"
                        required=true
                    />
                    <TextField
                        value=password
                        label="Password"
                        input_type="password"
                        required=true
                    />
                    <SubmitButton
                        label="Sign in"
                        pending_label="Signing in..."
                        pending={Signal::derive(move || pending.get())}
                    />
                </form>
            </div>
        </div>
    }
}
