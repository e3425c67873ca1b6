use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = &e.code;
                    if code == "VALIDATION_ERROR" {
                        if let Some(errors) = e
                            .details
                            .as_ref()
                            .and_then(|details| details.get("errors"))
                            .and_then(|v| v.as_array())
                        {
                            return view! {
                                <ul class="list-disc list-inside text-sm">
                                    {errors.iter().map(|err| {
                                        view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                    }).collect_view()}
                                </ul>
                            }.into_view();
                        }
                    }
                    if code != "UNKNOWN" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Full-page stop shown when the signed-in user carries a role the client
/// does not recognize. Guessing a landing page for such an account would
/// hide a provisioning bug, so the user is asked to contact an admin.
#[component]
pub fn AccountConfigError() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-md w-full bg-white shadow rounded-lg p-8 text-center space-y-3">
                <i class="fas fa-triangle-exclamation text-red-500 text-3xl"></i>
                <h2 class="text-lg font-semibold text-gray-900">
                    "Account configuration error"
                </h2>
                <p class="text-sm text-gray-600">
                    "Your account has a role this application does not recognize. \
                     Please contact your administrator."
                </p>
            </div>
        </div>
    }
}
