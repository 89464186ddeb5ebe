pub mod left;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use left::Sidebar;

/// Layout of every signed-in page.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |                              |
/// |  (Left)   |     routed page (Outlet)     |
/// |           |                              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn UserLayout() -> impl IntoView {
    view! {
        <div class="app-layout">
            <div data-zone="left" class="left">
                <Sidebar />
            </div>
            <main class="app-main">
                <Outlet />
            </main>
        </div>
    }
}

/// Centered single-card layout for the public auth pages
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="auth-layout">
            <div class="auth-layout__card">
                <Outlet />
            </div>
        </div>
    }
}
