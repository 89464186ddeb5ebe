use leptos::prelude::*;

/// Primary form button. While `busy` is true the button is disabled and shows
/// `busy_label` instead of its children.
#[component]
pub fn Button(
    /// Button type attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional, into)]
    busy_label: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());
    let class = if block {
        "button button--primary button--block"
    } else {
        "button button--primary"
    };

    view! {
        <button
            type=btn_type
            class=class
            disabled=move || is_busy() || disabled.get().unwrap_or(false)
        >
            {move || match (is_busy(), busy_label.get()) {
                (true, Some(label)) => label.into_any(),
                _ => children().into_any(),
            }}
        </button>
    }
}
