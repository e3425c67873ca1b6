use crate::{components::layout::Layout, state::auth::use_auth};
use leptos::*;

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let (auth, _) = use_auth();

    let company = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|user| user.company_name.clone())
            .unwrap_or_else(|| "Your company".to_string())
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{company}</h2>
                    <p class="text-sm text-gray-600">"Company overview"</p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div class="bg-white shadow rounded-lg p-6">
                        <p class="text-sm font-medium text-gray-500">"Employees"</p>
                        <p class="mt-1 text-2xl font-semibold text-gray-900">"—"</p>
                    </div>
                    <div class="bg-white shadow rounded-lg p-6">
                        <p class="text-sm font-medium text-gray-500">"Departments"</p>
                        <p class="mt-1 text-2xl font-semibold text-gray-900">"—"</p>
                    </div>
                    <div class="bg-white shadow rounded-lg p-6">
                        <p class="text-sm font-medium text-gray-500">"Pending requests"</p>
                        <p class="mt-1 text-2xl font-semibold text-gray-900">"—"</p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}
