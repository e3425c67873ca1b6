use crate::{
    api::{ApiClient, ApiError, ChangePasswordRequest, MessageResponse},
    components::{
        error::InlineErrorMessage,
        forms::{SubmitButton, TextField},
    },
    navigation::next_required_path,
    pages::change_password::utils,
    state::auth::{self, UserFlagsUpdate},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ChangePasswordPanel() -> impl IntoView {
    let old_password = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);

    let (auth, set_auth) = auth::use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);

    let change_action = create_action(move |request: &ChangePasswordRequest| {
        let payload = request.clone();
        let client = api.clone();
        async move { client.change_temp_password(payload).await }
    });
    let pending = change_action.pending();

    create_effect(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(MessageResponse { .. }) => {
                    error.set(None);
                    auth::update_user_flags(
                        set_auth,
                        UserFlagsUpdate {
                            temp_password: Some(false),
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
                        Ok(None) => log::warn!("password changed with no user record"),
                        Err(err) => {
                            log::error!("cannot route after password change: {}", err);
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
        let old = old_password.get_untracked();
        let new = new_password.get_untracked();
        let confirm = confirm_password.get_untracked();

        if let Err(msg) = utils::validate_passwords(&old, &new, &confirm) {
            error.set(Some(ApiError::validation(msg)));
            return;
        }
        error.set(None);

        change_action.dispatch(ChangePasswordRequest {
            old_password: old,
            new_password: new,
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white shadow rounded-lg p-8">
                <h2 class="text-2xl font-bold text-gray-900 text-center mb-2">
                    "Change your password"
                </h2>
                <p class="text-sm text-gray-600 text-center mb-6">
                    "Your password was generated for you. Pick a new one before continuing."
                </p>
                <InlineErrorMessage error={Signal::derive(move || error.get())} />
                <form class="space-y-4" on:submit=handle_submit>
                    <TextField
                        value=old_password
                        label="Current password"
                        input_type="password"
                        required=true
                    />
                    <TextField
                        value=new_password
                        label="New password"
                        input_type="password"
                        required=true
                    />
                    <TextField
                        value=confirm_password
                        label="Confirm new password"
                        input_type="password"
                        required=true
                    />
                    <SubmitButton
                        label="Change password"
                        pending_label="Changing..."
                        pending={Signal::derive(move || pending.get())}
                    />
                </form>
            </div>
        </div>
    }
}
