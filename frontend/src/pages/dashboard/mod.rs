use leptos::*;

mod panel;

pub use panel::DashboardPanel;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardPanel /> }
}
