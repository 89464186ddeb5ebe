use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::CardAnimated;
use crate::system::auth::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let store = use_session();
    let state = store.state();
    let is_loading = Signal::derive(move || state.with(|s| s.signing_in));
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let remember_val = remember.get_untracked();

        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match store.sign_in(email_val, password_val, remember_val).await {
                Ok(landing) => navigate(landing, Default::default()),
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <CardAnimated>
            <div class="auth-card__header">
                <h1>"Welcome Back"</h1>
                <p>"Sign in to your account to continue"</p>
            </div>

            <form class="auth-card__form" on:submit=on_submit>
                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <Input
                    label="Email"
                    id="email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="username"
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                    disabled=is_loading
                    required=true
                />

                <Input
                    label="Password"
                    id="password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="current-password"
                    value=password
                    on_input=Callback::new(move |v| set_password.set(v))
                    disabled=is_loading
                    required=true
                />

                <div class="auth-card__row">
                    <Checkbox
                        label="Remember me"
                        id="remember"
                        checked=remember
                        on_change=Callback::new(move |v| set_remember.set(v))
                        disabled=is_loading
                    />
                    <A href="/auth/forgot-password">"Forgot password?"</A>
                </div>

                <Button button_type="submit" block=true busy=is_loading busy_label="Signing in...">
                    "Sign In"
                </Button>
            </form>
        </CardAnimated>
    }
}
