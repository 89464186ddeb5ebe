use contracts::enums::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::left::menu::{role_dashboard, role_links, NavEntry};
use crate::shared::components::{CardAnimated, PageHeader};
use crate::shared::icons::icon;
use crate::system::auth::context::use_user_name;

fn dashboard_title(role: Role) -> &'static str {
    match role {
        Role::Sysad => "System Admin Dashboard",
        Role::Peso => "PESO Dashboard",
    }
}

/// Every link reachable from the role's menu except the dashboard itself
fn shortcuts(role: Role) -> Vec<NavEntry> {
    fn collect(entries: &[NavEntry], out: &mut Vec<NavEntry>) {
        for entry in entries {
            match entry {
                NavEntry::Link { .. } => out.push(*entry),
                NavEntry::Group { children, .. } => collect(children, out),
            }
        }
    }

    let mut links = Vec::new();
    collect(role_links(role), &mut links);
    links.retain(|e| !matches!(e, NavEntry::Link { path, .. } if *path == role_dashboard(role)));
    links
}

/// Landing page of a role: greeting plus shortcut cards
#[component]
pub fn DashboardPage(role: Role) -> impl IntoView {
    let user_name = use_user_name();

    view! {
        <div class="page">
            <PageHeader
                title=dashboard_title(role)
                subtitle=Signal::derive(move || Some(format!("Welcome back, {}", user_name.get())))
            />
            <div class="dashboard-grid">
                {shortcuts(role).into_iter().enumerate().filter_map(|(i, entry)| match entry {
                    NavEntry::Link { icon: nav_icon, label, path } => Some(view! {
                        <CardAnimated delay_ms={(i as u32) * 80}>
                            <A href=path>
                                <div class="dashboard-shortcut">
                                    {icon(nav_icon.as_str())}
                                    <span>{label}</span>
                                </div>
                            </A>
                        </CardAnimated>
                    }),
                    NavEntry::Group { .. } => None,
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_skip_dashboard() {
        let labels: Vec<_> = shortcuts(Role::Sysad).iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Companies", "Job Posts", "Dean", "PESO"]);

        let labels: Vec<_> = shortcuts(Role::Peso).iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Verify Companies"]);
    }
}
