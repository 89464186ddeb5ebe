pub mod api;
pub mod context;
pub mod guard;
pub mod session;

pub use context::{use_session, AuthProvider, SessionStore};
pub use guard::RequireRole;
