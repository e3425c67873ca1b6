use leptos::*;

pub mod utils;

mod panel;

pub use panel::ProfileCompletionPanel;

#[component]
pub fn ProfileCompletionPage() -> impl IntoView {
    view! { <ProfileCompletionPanel /> }
}
