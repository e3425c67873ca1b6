use crate::{
    navigation::{role_dashboard_path, Role},
    router::LOGIN_PATH,
    state::auth::{self, use_auth, AuthState},
};
use leptos::*;
use std::str::FromStr;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    };
    let dashboard_link = move || dashboard_href(&auth.get());

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href(LOGIN_PATH);
            }
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-gray-900">
                            "WorkHub"
                        </h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="flex items-center space-x-4">
                            <a href=dashboard_link class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-100">
                                "Dashboard"
                            </a>
                            <span class="text-gray-500 text-sm hidden sm:inline">
                                {user_name}
                            </span>
                            <button
                                on:click=on_logout
                                class="text-gray-600 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-gray-100"
                                disabled={move || logout_pending.get()}
                            >
                                "Log out"
                            </button>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

// An unrecognized role gets no dashboard of its own; link back to the
// login page instead of picking one for it.
fn dashboard_href(state: &AuthState) -> &'static str {
    state
        .user
        .as_ref()
        .and_then(|user| Role::from_str(&user.role).ok())
        .map(role_dashboard_path)
        .unwrap_or(LOGIN_PATH)
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
