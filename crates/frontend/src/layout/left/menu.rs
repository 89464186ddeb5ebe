//! Static role → sidebar menu mapping.
//!
//! Entries carry a [`NavIcon`] identifier instead of a view so the table
//! stays plain data; `shared::icons::icon` resolves it at render time.

use contracts::enums::Role;

/// Icon identifiers used by the navigation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Wrench,
    Companies,
    JobPosts,
    Accounts,
    Dean,
    Peso,
    Verify,
}

impl NavIcon {
    /// Name understood by `shared::icons::icon`
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::Dashboard => "layout-dashboard",
            NavIcon::Wrench => "wrench",
            NavIcon::Companies => "building-2",
            NavIcon::JobPosts => "briefcase",
            NavIcon::Accounts => "users",
            NavIcon::Dean => "graduation-cap",
            NavIcon::Peso => "building",
            NavIcon::Verify => "badge-check",
        }
    }
}

/// One node of a role's sidebar tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Link {
        icon: NavIcon,
        label: &'static str,
        path: &'static str,
    },
    /// Collapsible section. `children` is never empty.
    Group {
        label: &'static str,
        icon: Option<NavIcon>,
        children: &'static [NavEntry],
    },
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Link { label, .. } | NavEntry::Group { label, .. } => *label,
        }
    }
}

static SYSAD_LINKS: &[NavEntry] = &[
    NavEntry::Link {
        icon: NavIcon::Dashboard,
        label: "Dashboard",
        path: "/sysad",
    },
    NavEntry::Group {
        label: "Manage Companies & Job Posts",
        icon: Some(NavIcon::Wrench),
        children: &[
            NavEntry::Link {
                icon: NavIcon::Companies,
                label: "Companies",
                path: "/sysad/manage-companies",
            },
            NavEntry::Link {
                icon: NavIcon::JobPosts,
                label: "Job Posts",
                path: "/sysad/manage-job-posts",
            },
        ],
    },
    NavEntry::Group {
        label: "Manage Accounts",
        icon: Some(NavIcon::Accounts),
        children: &[
            NavEntry::Link {
                icon: NavIcon::Dean,
                label: "Dean",
                path: "/sysad/manage-dean",
            },
            NavEntry::Link {
                icon: NavIcon::Peso,
                label: "PESO",
                path: "/sysad/manage-peso",
            },
        ],
    },
];

static PESO_LINKS: &[NavEntry] = &[
    NavEntry::Link {
        icon: NavIcon::Dashboard,
        label: "Dashboard",
        path: "/peso",
    },
    NavEntry::Link {
        icon: NavIcon::Verify,
        label: "Verify Companies",
        path: "/peso/verify-companies",
    },
];

/// Sidebar tree for a role
pub fn role_links(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Sysad => SYSAD_LINKS,
        Role::Peso => PESO_LINKS,
    }
}

/// Landing page after sign-in or hydration
pub fn role_dashboard(role: Role) -> &'static str {
    match role {
        Role::Sysad => "/sysad",
        Role::Peso => "/peso",
    }
}

/// Sidebar tree for a raw backend role identifier; `None` when unknown.
pub fn get_role_links(role: &str) -> Option<&'static [NavEntry]> {
    Role::parse(role).map(role_links)
}

/// Landing path for a raw backend role identifier; `None` when unknown.
pub fn get_role_dashboard(role: &str) -> Option<&'static str> {
    Role::parse(role).map(role_dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_groups_non_empty(entries: &[NavEntry]) {
        for entry in entries {
            if let NavEntry::Group { label, children, .. } = entry {
                assert!(!children.is_empty(), "group '{}' has no children", label);
                assert_groups_non_empty(children);
            }
        }
    }

    fn leaf_paths(entries: &[NavEntry], out: &mut Vec<&'static str>) {
        for entry in entries {
            match entry {
                NavEntry::Link { path, .. } => out.push(*path),
                NavEntry::Group { children, .. } => leaf_paths(children, out),
            }
        }
    }

    #[test]
    fn test_every_role_has_links_and_dashboard() {
        for role in Role::all() {
            let links = get_role_links(role.as_str()).unwrap();
            assert!(!links.is_empty());
            assert_groups_non_empty(links);

            let dashboard = get_role_dashboard(role.as_str()).unwrap();
            assert!(dashboard.starts_with(&format!("/{}", role.as_str())));
        }
    }

    #[test]
    fn test_leaf_paths_stay_under_role_prefix() {
        for role in Role::all() {
            let mut paths = Vec::new();
            leaf_paths(role_links(role), &mut paths);
            let prefix = format!("/{}", role.as_str());
            assert!(paths.iter().all(|p| p.starts_with(&prefix)), "{:?}", paths);
            assert!(paths.contains(&role_dashboard(role)));
        }
    }

    #[test]
    fn test_unknown_role_has_no_mapping() {
        assert_eq!(get_role_links("dean"), None);
        assert_eq!(get_role_dashboard("dean"), None);
        assert_eq!(get_role_links(""), None);
    }

    #[test]
    fn test_sysad_tree_shape() {
        let labels: Vec<_> = SYSAD_LINKS.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Manage Companies & Job Posts", "Manage Accounts"]
        );
    }
}
