use leptos::prelude::*;

/// Labelled form input bound to a string signal
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    /// ID for the input element, also used by the label
    #[prop(into)]
    id: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Input type: "text" (default), "password", "email"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>{label}</label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                autocomplete=input_autocomplete
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
