use crate::{components::layout::Layout, navigation::Role, state::auth::use_auth};
use chrono::Local;
use leptos::*;
use std::str::FromStr;

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let (auth, _) = use_auth();

    let greeting = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| format!("Welcome back, {}", user.name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };
    let role_label = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| describe_role(&user.role))
            .unwrap_or_default()
    };
    let company = move || {
        auth.get()
            .user
            .as_ref()
            .and_then(|user| user.company_name.clone())
            .unwrap_or_default()
    };

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">{greeting}</h2>
                    <p class="text-sm text-gray-600">{role_label}" · "{company}</p>
                    <p class="text-sm text-gray-500">{Local::now().format("%A, %B %e").to_string()}</p>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div class="bg-white shadow rounded-lg p-6">
                        <p class="text-sm font-medium text-gray-500">"Attendance"</p>
                        <p class="mt-1 text-2xl font-semibold text-gray-900">"—"</p>
                    </div>
                    <div class="bg-white shadow rounded-lg p-6">
                        <p class="text-sm font-medium text-gray-500">"Open tasks"</p>
                        <p class="mt-1 text-2xl font-semibold text-gray-900">"—"</p>
                    </div>
                    <div class="bg-white shadow rounded-lg p-6">
                        <p class="text-sm font-medium text-gray-500">"Leave balance"</p>
                        <p class="mt-1 text-2xl font-semibold text-gray-900">"—"</p>
                    </div>
                </div>
            </div>
        </Layout>
    }
}

fn describe_role(role: &str) -> String {
    match Role::from_str(role) {
        Ok(Role::CompanyAdmin) => "Company Admin".into(),
        Ok(Role::Hr) => "HR".into(),
        Ok(Role::Manager) => "Manager".into(),
        Ok(Role::TeamLead) => "Team Lead".into(),
        Ok(Role::Employee) => "Employee".into(),
        Err(_) => role.to_string(),
    }
}
