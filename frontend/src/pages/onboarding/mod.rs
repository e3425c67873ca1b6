use leptos::*;

pub mod utils;

mod panel;

pub use panel::OnboardingPanel;

#[component]
pub fn OnboardingPage() -> impl IntoView {
    view! { <OnboardingPanel /> }
}
