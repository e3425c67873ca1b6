use crate::router::LOGIN_PATH;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl lg:text-6xl">
                        "WorkHub"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-gray-600 sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Attendance, tasks and people management for your whole team"
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <a href=LOGIN_PATH class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 lg:py-4 lg:text-lg lg:px-10">
                                "Sign in"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_links_to_login() {
        let html = render_to_string(move || view! { <HomePage /> });
        assert!(html.contains("WorkHub"));
        assert!(html.contains("href=\"/login\""));
    }
}
