use contracts::enums::Role;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::layout::{AuthLayout, UserLayout};
use crate::system::auth::session::SIGN_IN_PATH;
use crate::system::auth::RequireRole;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::feature::FeaturePage;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::reset_password::ResetPasswordPage;

#[component]
fn SysadLayout() -> impl IntoView {
    view! {
        <RequireRole role=Role::Sysad>
            <UserLayout />
        </RequireRole>
    }
}

#[component]
fn PesoLayout() -> impl IntoView {
    view! {
        <RequireRole role=Role::Peso>
            <UserLayout />
        </RequireRole>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=SIGN_IN_PATH /> } />

                <ParentRoute path=path!("/auth") view=AuthLayout>
                    <Route path=path!("") view=LoginPage />
                    <Route path=path!("forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("reset-password") view=ResetPasswordPage />
                </ParentRoute>

                <ParentRoute path=path!("/sysad") view=SysadLayout>
                    <Route path=path!("") view=|| view! { <DashboardPage role=Role::Sysad /> } />
                    <Route
                        path=path!("manage-companies")
                        view=|| view! { <FeaturePage title="Companies" subtitle="Registered companies and their documents" /> }
                    />
                    <Route
                        path=path!("manage-job-posts")
                        view=|| view! { <FeaturePage title="Job Posts" subtitle="Job posts published by companies" /> }
                    />
                    <Route
                        path=path!("manage-dean")
                        view=|| view! { <FeaturePage title="Dean Accounts" subtitle="Dean sub-accounts per school" /> }
                    />
                    <Route
                        path=path!("manage-peso")
                        view=|| view! { <FeaturePage title="PESO Accounts" subtitle="PESO officer sub-accounts" /> }
                    />
                </ParentRoute>

                <ParentRoute path=path!("/peso") view=PesoLayout>
                    <Route path=path!("") view=|| view! { <DashboardPage role=Role::Peso /> } />
                    <Route
                        path=path!("verify-companies")
                        view=|| view! { <FeaturePage title="Verify Companies" subtitle="Review company registrations and approve or reject them" /> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
