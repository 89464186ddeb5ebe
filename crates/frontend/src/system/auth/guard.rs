use contracts::enums::Role;
use leptos::prelude::*;

use super::context::use_session;
use super::session::Session;

/// What a role-gated subtree should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateView {
    /// Session still unknown: render nothing, not even the denial
    Pending,
    Allow,
    Unauthorized,
}

pub fn gate(session: &Session, required: Role) -> GateView {
    if session.is_unknown() {
        return GateView::Pending;
    }
    if session.role() == Some(required) {
        GateView::Allow
    } else {
        GateView::Unauthorized
    }
}

/// Component that renders its children only for users with `role`.
/// Shows an inert placeholder otherwise; redirects are left to the router.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_session().session();
    let decision = Memo::new(move |_| session.with(|s| gate(s, role)));

    move || match decision.get() {
        GateView::Pending => ().into_any(),
        GateView::Allow => children().into_any(),
        GateView::Unauthorized => view! { <div class="unauthorized">"Unauthorized"</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;

    fn signed_in(role: &str) -> Session {
        Session::Authenticated(UserInfo {
            id: "42".to_string(),
            name: "Jose Reyes".to_string(),
            role: role.to_string(),
        })
    }

    #[test]
    fn test_unknown_session_renders_nothing() {
        assert_eq!(gate(&Session::Unknown, Role::Sysad), GateView::Pending);
        assert_eq!(gate(&Session::Unknown, Role::Peso), GateView::Pending);
    }

    #[test]
    fn test_matching_role_allowed() {
        assert_eq!(gate(&signed_in("sysad"), Role::Sysad), GateView::Allow);
        assert_eq!(gate(&signed_in("peso"), Role::Peso), GateView::Allow);
    }

    #[test]
    fn test_other_role_unauthorized() {
        assert_eq!(gate(&signed_in("peso"), Role::Sysad), GateView::Unauthorized);
        assert_eq!(gate(&signed_in("dean"), Role::Sysad), GateView::Unauthorized);
    }

    #[test]
    fn test_anonymous_unauthorized() {
        assert_eq!(gate(&Session::Anonymous, Role::Peso), GateView::Unauthorized);
    }
}
