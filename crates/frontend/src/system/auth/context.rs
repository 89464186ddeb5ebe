use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::session::{
    hydrate_outcome, is_public_path, sign_in_outcome, sign_out_outcome, AuthEvent, AuthState,
    Session,
};
use crate::shared::api_utils::ApiError;

/// Single writer of the session.
///
/// Provided once by [`AuthProvider`]; components read through [`state`] or
/// [`session`] and change it only via the async operations below.
///
/// [`state`]: SessionStore::state
/// [`session`]: SessionStore::session
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    pub fn state(&self) -> Signal<AuthState> {
        self.state.read_only().into()
    }

    pub fn session(&self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.clone()))
    }

    fn dispatch(&self, event: AuthEvent) {
        log::debug!("auth event: {:?}", event);
        self.state.update(|s| s.apply(event));
    }

    fn set_signing_in(&self, signing_in: bool) {
        self.state.update(|s| s.signing_in = signing_in);
    }

    /// Sign in and return the landing path for the user's role.
    ///
    /// On failure the session is left as it was and the error is returned
    /// for inline display.
    pub async fn sign_in(
        &self,
        email: String,
        password: String,
        remember: bool,
    ) -> Result<&'static str, ApiError> {
        self.set_signing_in(true);
        let result = api::sign_in(email, password, remember).await;
        self.set_signing_in(false);

        match &result {
            Ok(user) => log::info!("signed in as {} ({})", user.name, user.role),
            Err(e) => log::error!("sign in failed: {}", e),
        }

        let (event, path) = sign_in_outcome(result);
        if let Some(event) = event {
            self.dispatch(event);
        }
        path
    }

    /// Sign out and return the public entry path.
    ///
    /// If the backend refuses, the session stays authenticated. A 401 means
    /// the backend session is already gone, so that case counts as signed out.
    pub async fn sign_out(&self) -> Result<&'static str, ApiError> {
        let (event, path) = sign_out_outcome(api::sign_out().await);
        if let Err(e) = &path {
            log::error!("sign out failed: {}", e);
        }
        if let Some(event) = event {
            self.dispatch(event);
        }
        path
    }

    /// Recover the session from the backend cookie.
    ///
    /// Failures are not errors: an unknown session just becomes anonymous.
    pub async fn hydrate(&self) {
        let result = api::get_current_user().await;
        if let Err(e) = &result {
            log::debug!("no session to hydrate: {}", e);
        }
        self.dispatch(hydrate_outcome(result));
    }

    /// Run once per page load: public pages skip hydration entirely.
    fn bootstrap(&self, path: &str) {
        if is_public_path(path) {
            self.dispatch(AuthEvent::HydrationSkipped);
            return;
        }

        let store = *self;
        spawn_local(async move {
            store.hydrate().await;
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let store = SessionStore::new();
    provide_context(store);
    store.bootstrap(&current_path());

    children()
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("AuthProvider not found in component tree")
}

/// Helper: current user's display name, empty when signed out
pub fn use_user_name() -> Signal<String> {
    let store = use_session();
    let state = store.state();
    Signal::derive(move || {
        state.with(|s| s.session.user().map(|u| u.name.clone()).unwrap_or_default())
    })
}
