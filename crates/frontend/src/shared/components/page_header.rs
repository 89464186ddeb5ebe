use leptos::prelude::*;

/// Title block at the top of every portal page
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </div>
    }
}
