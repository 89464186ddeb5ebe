//! Session lifecycle, independent of Leptos.
//!
//! ```text
//! Unknown --hydrated--> Authenticated --signed out / 401--> Anonymous
//!    \--hydration failed or skipped--> Anonymous --signed in--> Authenticated
//! ```
//!
//! Hydration events only move a session out of `Unknown`; once settled,
//! only sign-in, sign-out and expiry change it.

use contracts::enums::Role;
use contracts::system::auth::UserInfo;

use crate::layout::left::menu::get_role_dashboard;
use crate::shared::api_utils::ApiError;

/// Public entry of the portal; sign-out always lands here
pub const SIGN_IN_PATH: &str = "/auth";

/// Paths rendered without a session. Hydration is not attempted on them.
pub const PUBLIC_PATHS: [&str; 3] = ["/auth", "/auth/forgot-password", "/auth/reset-password"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Hydration has not finished yet
    #[default]
    Unknown,
    /// Confirmed: nobody is signed in
    Anonymous,
    Authenticated(UserInfo),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(UserInfo),
    SignedOut,
    Hydrated(UserInfo),
    HydrationFailed,
    /// Page was public, no hydration request was made
    HydrationSkipped,
    /// Backend answered 401 to an authenticated call
    Expired,
}

impl Session {
    /// Next session after `event`
    pub fn apply(self, event: AuthEvent) -> Session {
        match (self, event) {
            (_, AuthEvent::SignedIn(user)) => Session::Authenticated(user),
            (_, AuthEvent::SignedOut | AuthEvent::Expired) => Session::Anonymous,
            (Session::Unknown, AuthEvent::Hydrated(user)) => Session::Authenticated(user),
            (Session::Unknown, AuthEvent::HydrationFailed | AuthEvent::HydrationSkipped) => {
                Session::Anonymous
            }
            // Late hydration result
            (settled, _) => settled,
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Known role of the signed-in user
    pub fn role(&self) -> Option<Role> {
        self.user().and_then(UserInfo::role)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Session::Unknown)
    }
}

/// State held by the session store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    /// A sign-in request is in flight
    pub signing_in: bool,
}

impl AuthState {
    /// Apply `event` to the session. The sign-in busy flag is left alone.
    pub fn apply(&mut self, event: AuthEvent) {
        let current = std::mem::take(&mut self.session);
        self.session = current.apply(event);
    }
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Where to send `user` after sign-in. Users with a role this portal has
/// no pages for are sent back to the sign-in page.
pub fn landing_path(user: &UserInfo) -> &'static str {
    get_role_dashboard(&user.role).unwrap_or(SIGN_IN_PATH)
}

/// Event and landing path for a finished sign-in request.
/// A failed sign-in leaves the session alone.
pub fn sign_in_outcome(
    result: Result<UserInfo, ApiError>,
) -> (Option<AuthEvent>, Result<&'static str, ApiError>) {
    match result {
        Ok(user) => {
            let path = landing_path(&user);
            (Some(AuthEvent::SignedIn(user)), Ok(path))
        }
        Err(e) => (None, Err(e)),
    }
}

/// Event and next path for a finished sign-out request.
///
/// A 401 means the backend session is already gone, so it counts as signed
/// out. Any other failure keeps the session.
pub fn sign_out_outcome(
    result: Result<(), ApiError>,
) -> (Option<AuthEvent>, Result<&'static str, ApiError>) {
    match result {
        Ok(()) => (Some(AuthEvent::SignedOut), Ok(SIGN_IN_PATH)),
        Err(e) if e.is_unauthorized() => (Some(AuthEvent::Expired), Ok(SIGN_IN_PATH)),
        Err(e) => (None, Err(e)),
    }
}

pub fn hydrate_outcome(result: Result<UserInfo, ApiError>) -> AuthEvent {
    match result {
        Ok(user) => AuthEvent::Hydrated(user),
        Err(_) => AuthEvent::HydrationFailed,
    }
}
