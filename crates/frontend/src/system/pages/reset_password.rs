use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::shared::components::ui::{Button, Input};
use crate::shared::components::CardAnimated;
use crate::system::auth::api;
use crate::system::auth::session::SIGN_IN_PATH;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Check the new password pair before it is sent
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let query = use_query_map();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let Some(token) = query.with_untracked(|q| q.get("token")).filter(|t| !t.is_empty()) else {
            set_error_message.set(Some("Missing reset token.".to_string()));
            return;
        };

        let password_val = password.get_untracked();
        if let Err(e) = validate_new_password(&password_val, &confirm.get_untracked()) {
            set_error_message.set(Some(e));
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::reset_password(password_val, token).await;
            set_is_loading.set(false);

            match result {
                Ok(detail) => {
                    log::info!("password reset: {}", detail);
                    navigate(SIGN_IN_PATH, Default::default());
                }
                Err(e) => {
                    log::error!("password reset failed: {}", e);
                    set_error_message.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <CardAnimated>
            <div class="auth-card__header">
                <h1>"Reset Password"</h1>
                <p>"Enter your new password"</p>
            </div>

            <form class="auth-card__form" on:submit=on_submit>
                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <Input
                    label="New Password"
                    id="password"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                    value=password
                    on_input=Callback::new(move |v| set_password.set(v))
                    disabled=is_loading
                    required=true
                />

                <Input
                    label="Confirm Password"
                    id="confirmPassword"
                    input_type="password"
                    placeholder="••••••••"
                    autocomplete="new-password"
                    value=confirm
                    on_input=Callback::new(move |v| set_confirm.set(v))
                    disabled=is_loading
                    required=true
                />

                <Button button_type="submit" block=true busy=is_loading busy_label="Resetting...">
                    "Reset Password"
                </Button>
            </form>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_reported_first() {
        assert_eq!(
            validate_new_password("abc", "abd"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_new_password("abc12", "abc12"),
            Err("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_valid_pair() {
        assert_eq!(validate_new_password("abc123", "abc123"), Ok(()));
    }
}
