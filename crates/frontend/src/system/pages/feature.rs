use leptos::prelude::*;

use crate::shared::components::PageHeader;

/// Frame for an entity page. The entity list/forms mount inside `page-body`.
#[component]
pub fn FeaturePage(
    #[prop(into)]
    title: String,
    #[prop(into)]
    subtitle: String,
) -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title=title subtitle=subtitle />
            <div class="page-body"></div>
        </div>
    }
}
