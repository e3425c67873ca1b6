use leptos::*;

/// Renders a component tree to static HTML inside a throwaway reactive
/// runtime. Panels are pure over their provided context, so string
/// assertions on the markup are enough for host-side checks.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    leptos_reactive::suppress_resource_load(false);
    html
}
