use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The session store is created here, above the router, and handed
    // down through context.
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
