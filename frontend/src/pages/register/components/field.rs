use crate::pages::register::utils::FormField;
use leptos::*;

#[component]
pub fn FormInput(
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let id = field.id();
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-fg-muted">
                {label}
            </label>
            <div class="mt-1">
                <input
                    id=id
                    name=id
                    type=input_type
                    autocomplete=autocomplete
                    required
                    placeholder=placeholder
                    class="block w-full appearance-none rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 placeholder-form-control-placeholder text-form-control-text shadow-sm focus:border-action-primary-border focus:outline-none focus:ring-1 focus:ring-action-primary-focus sm:text-sm"
                    prop:value=value
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
