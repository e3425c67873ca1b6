use leptos::*;

#[component]
pub fn TextField(
    #[prop(into)] value: RwSignal<String>,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-medium text-gray-700">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <input
                type=input_type.unwrap_or("text")
                class="rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-blue-500 focus:ring-blue-500"
                placeholder=placeholder.unwrap_or_default()
                prop:value={move || value.get()}
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] value: RwSignal<String>,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5 w-full">
            <label class="text-sm font-medium text-gray-700">
                {label}
                {required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <select
                class="rounded-md border border-gray-300 px-3 py-2 text-sm shadow-sm focus:border-blue-500 focus:ring-blue-500 bg-white"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="" selected={move || value.get().is_empty()}>
                    "Select..."
                </option>
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        view! {
                            <option
                                value=option_value
                                selected={move || value.get() == option_value}
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn SubmitButton(
    label: &'static str,
    pending_label: &'static str,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full flex justify-center items-center gap-2 rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white shadow-sm hover:bg-blue-700 disabled:opacity-50"
            disabled={move || pending.get()}
        >
            <Show when=move || pending.get() fallback=move || label>
                <span class="animate-spin rounded-full h-4 w-4 border-b-2 border-current"></span>
                {pending_label}
            </Show>
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn text_field_marks_required_inputs() {
        let html = render_to_string(move || {
            let value = create_rw_signal(String::new());
            view! { <TextField value=value label="Email" input_type="email" required=true /> }
        });
        assert!(html.contains("Email"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains(" *"));
    }

    #[test]
    fn select_field_renders_options() {
        let html = render_to_string(move || {
            let value = create_rw_signal("11-50".to_string());
            view! {
                <SelectField
                    value=value
                    label="Company size"
                    options=vec![("1-10", "1-10"), ("11-50", "11-50")]
                />
            }
        });
        assert!(html.contains("Company size"));
        assert!(html.contains("11-50"));
    }

    #[test]
    fn submit_button_swaps_label_while_pending() {
        let html = render_to_string(move || {
            let pending = create_rw_signal(true);
            view! { <SubmitButton label="Save" pending_label="Saving..." pending={pending} /> }
        });
        assert!(html.contains("Saving..."));
        assert!(html.contains("disabled"));
    }
}
