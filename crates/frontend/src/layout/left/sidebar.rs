//! Sidebar with the signed-in role's collapsible menu, the account card
//! and the Logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use super::menu::get_role_links;
use super::nav_tree::{nav_rows, CollapseState, NavRow};
use crate::shared::icons::icon;
use crate::system::auth::use_session;

/// Left padding per nesting level, in px
const INDENT_PX: usize = 16;

fn render_row(row: NavRow, collapse: RwSignal<CollapseState>) -> AnyView {
    let padding = format!("{}px", 12 + row.depth() * INDENT_PX);

    match row {
        NavRow::Link {
            icon: nav_icon,
            label,
            path,
            is_current,
            ..
        } => view! {
            <a
                href=path
                class="app-sidebar__item"
                class:app-sidebar__item--active=is_current
                aria-current=is_current.then_some("page")
                style:padding-left=padding
            >
                <div class="app-sidebar__item-content">
                    {icon(nav_icon.as_str())}
                    <span>{label}</span>
                </div>
            </a>
        }
        .into_any(),
        NavRow::Group {
            key,
            icon: group_icon,
            label,
            collapsed,
        } => {
            let dom_id = key.dom_id();
            view! {
                <div
                    class="app-sidebar__group"
                    data-group=dom_id
                    style:padding-left=padding
                    on:click=move |_| collapse.update(|c| c.toggle(&key))
                >
                    <div class="app-sidebar__chevron">
                        {icon(if collapsed { "chevron-right" } else { "chevron-down" })}
                    </div>
                    {group_icon.map(|i| icon(i.as_str()))}
                    <span class="app-sidebar__group-label">{label}</span>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_session();
    let state = store.state();
    let location = use_location();
    let navigate = use_navigate();

    // Fresh per mount: every group starts expanded
    let collapse = RwSignal::new(CollapseState::default());

    let user = Memo::new(move |_| state.with(|s| s.session.user().cloned()));

    let rows = move || {
        let entries = user
            .get()
            .and_then(|u| get_role_links(&u.role))
            .unwrap_or(&[]);
        location
            .pathname
            .with(|path| collapse.with(|c| nav_rows(entries, c, path)))
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match store.sign_out().await {
                Ok(path) => navigate(path, Default::default()),
                Err(e) => log::error!("logout failed, session kept: {}", e),
            }
        });
    };

    view! {
        <aside class="app-sidebar">
            <div class="app-sidebar__header">
                <h1>"Admin Portal"</h1>
            </div>

            <nav class="app-sidebar__content">
                {move || rows().into_iter().map(|row| render_row(row, collapse)).collect_view()}
            </nav>

            <div class="app-sidebar__footer">
                {move || user.get().map(|u| {
                    let role_name = u
                        .role()
                        .map(|r| r.display_name().to_string())
                        .unwrap_or_else(|| u.role.replace('_', " "));
                    view! {
                        <div class="app-sidebar__account">
                            <p class="app-sidebar__account-name">{u.name}</p>
                            <p class="app-sidebar__account-role">{role_name}</p>
                        </div>
                    }
                })}
                <button type="button" class="button button--outline button--block" on:click=on_logout>
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </aside>
    }
}
