use leptos::*;

pub mod utils;

mod panel;

pub use panel::ChangePasswordPanel;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! { <ChangePasswordPanel /> }
}
