use leptos::prelude::*;

/// Checkbox with an inline label
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: String,
    #[prop(into)]
    id: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div
            class="form__checkbox-wrapper"
            class:form__checkbox-wrapper--disabled=move || disabled.get().unwrap_or(false)
        >
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
