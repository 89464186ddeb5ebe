use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::shared::components::ui::{Button, Input};
use crate::shared::components::CardAnimated;
use crate::system::auth::api;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (email_sent, set_email_sent) = signal(false);
    // Ok = backend confirmation, Err = failure text
    let (notice, set_notice) = signal(Option::<Result<String, String>>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked();

        set_is_loading.set(true);
        set_notice.set(None);

        spawn_local(async move {
            match api::forgot_password(email_val).await {
                Ok(detail) => {
                    set_email_sent.set(true);
                    set_notice.set(Some(Ok(detail)));
                }
                Err(e) => {
                    log::error!("forgot password request failed: {}", e);
                    set_notice.set(Some(Err(e.to_string())));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <CardAnimated>
            <div class="auth-card__header">
                <h1>"Forgot Password"</h1>
                <p>"Enter your email to reset your password"</p>
            </div>

            <form class="auth-card__form" on:submit=on_submit>
                {move || notice.get().map(|n| match n {
                    Ok(text) => view! { <div class="info-message">{text}</div> }.into_any(),
                    Err(text) => view! { <div class="error-message">{text}</div> }.into_any(),
                })}

                <Input
                    label="Email Address"
                    id="email"
                    input_type="email"
                    placeholder="you@example.com"
                    value=email
                    on_input=Callback::new(move |v| set_email.set(v))
                    required=true
                />

                <Button button_type="submit" block=true busy=is_loading busy_label="Sending...">
                    {move || if email_sent.get() { "Resend Reset Link" } else { "Send Reset Link" }}
                </Button>

                <div class="auth-card__footer">
                    <A href="/auth">"Back to Login"</A>
                </div>
            </form>
        </CardAnimated>
    }
}
