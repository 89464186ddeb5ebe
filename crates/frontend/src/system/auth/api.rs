use contracts::shared::envelope::{ApiEnvelope, DetailResponse};
use contracts::system::auth::{
    ForgotPasswordRequest, ResetPasswordRequest, SignInRequest, UserInfo, UserPayload,
};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::{api_url, send_json, ApiError};

/// Sign in with email and password. The backend sets the session cookie.
pub async fn sign_in(email: String, password: String, remember: bool) -> Result<UserInfo, ApiError> {
    let body = SignInRequest {
        email,
        password,
        remember,
    };

    let request = Request::post(&api_url("/auth/signin"))
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::Build(e.to_string()))?;

    let envelope: ApiEnvelope<UserPayload> = send_json(request, "Login failed").await?;
    Ok(envelope.data.user)
}

/// Revoke the session cookie
pub async fn sign_out() -> Result<(), ApiError> {
    let request = Request::post(&api_url("/auth/signout"))
        .credentials(RequestCredentials::Include)
        .build()
        .map_err(|e| ApiError::Build(e.to_string()))?;

    send_json::<DetailResponse>(request, "Failed to signout.").await?;
    Ok(())
}

/// Get the user owning the current session cookie
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    let request = Request::get(&api_url("/user"))
        .credentials(RequestCredentials::Include)
        .build()
        .map_err(|e| ApiError::Build(e.to_string()))?;

    let envelope: ApiEnvelope<UserPayload> = send_json(request, "Failed to fetch user").await?;
    Ok(envelope.data.user)
}

/// Ask the backend to email a reset link. Returns the backend message.
pub async fn forgot_password(email: String) -> Result<String, ApiError> {
    let request = Request::post(&api_url("/auth/forgot-password"))
        .json(&ForgotPasswordRequest { email })
        .map_err(|e| ApiError::Build(e.to_string()))?;

    let response: DetailResponse = send_json(request, "Failed to request a reset.").await?;
    Ok(response
        .detail
        .unwrap_or_else(|| "Reset link sent.".to_string()))
}

/// Set a new password using the token from the reset link
pub async fn reset_password(password: String, reset_token: String) -> Result<String, ApiError> {
    let request = Request::patch(&api_url("/auth/reset-password"))
        .json(&ResetPasswordRequest {
            password,
            reset_token,
        })
        .map_err(|e| ApiError::Build(e.to_string()))?;

    let response: DetailResponse = send_json(request, "Failed to reset password.").await?;
    Ok(response
        .detail
        .unwrap_or_else(|| "Password has been reset.".to_string()))
}
