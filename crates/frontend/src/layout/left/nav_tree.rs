//! Collapse state and visible-row computation for the sidebar tree.

use std::collections::HashSet;

use super::menu::{NavEntry, NavIcon};

/// Position of a group in the tree: index at each level from the root.
/// `depth()` is the group's nesting level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(Vec<usize>);

impl GroupKey {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// DOM-friendly identifier, e.g. `"0_1"` or `"1_0_2"`
    pub fn dom_id(&self) -> String {
        self.0
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// Groups the user has collapsed. Empty means everything is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: HashSet<GroupKey>,
}

impl CollapseState {
    pub fn is_collapsed(&self, key: &GroupKey) -> bool {
        self.collapsed.contains(key)
    }

    pub fn toggle(&mut self, key: &GroupKey) {
        if !self.collapsed.remove(key) {
            self.collapsed.insert(key.clone());
        }
    }
}

/// One rendered line of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRow {
    Link {
        depth: usize,
        icon: NavIcon,
        label: &'static str,
        path: &'static str,
        is_current: bool,
    },
    Group {
        key: GroupKey,
        icon: Option<NavIcon>,
        label: &'static str,
        collapsed: bool,
    },
}

impl NavRow {
    pub fn depth(&self) -> usize {
        match self {
            NavRow::Link { depth, .. } => *depth,
            NavRow::Group { key, .. } => key.depth(),
        }
    }
}

/// Exact match only: `/sysad/manage-companies/123` does not highlight
/// the `/sysad/manage-companies` link.
pub fn is_current(link_path: &str, current_path: &str) -> bool {
    link_path == current_path
}

/// Walk `entries` depth-first and return the rows that are visible under
/// `collapse`. Children of a collapsed group are skipped; the group header
/// itself is always shown.
pub fn nav_rows(entries: &[NavEntry], collapse: &CollapseState, current_path: &str) -> Vec<NavRow> {
    let mut rows = Vec::new();
    walk(entries, &[], collapse, current_path, &mut rows);
    rows
}

fn walk(
    entries: &[NavEntry],
    parent: &[usize],
    collapse: &CollapseState,
    current_path: &str,
    rows: &mut Vec<NavRow>,
) {
    for (index, entry) in entries.iter().enumerate() {
        match entry {
            NavEntry::Link { icon, label, path } => rows.push(NavRow::Link {
                depth: parent.len(),
                icon: *icon,
                label: *label,
                path: *path,
                is_current: is_current(path, current_path),
            }),
            NavEntry::Group {
                label,
                icon,
                children,
            } => {
                let mut position = parent.to_vec();
                position.push(index);
                let key = GroupKey::new(position);
                let collapsed = collapse.is_collapsed(&key);

                rows.push(NavRow::Group {
                    key: key.clone(),
                    icon: *icon,
                    label: *label,
                    collapsed,
                });

                if !collapsed {
                    walk(children, &key.0, collapse, current_path, rows);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::left::menu::{get_role_links, role_links};
    use contracts::enums::Role;

    static NESTED: &[NavEntry] = &[
        NavEntry::Group {
            label: "Outer",
            icon: None,
            children: &[
                NavEntry::Group {
                    label: "Inner",
                    icon: None,
                    children: &[NavEntry::Link {
                        icon: NavIcon::Dean,
                        label: "Deep",
                        path: "/x/deep",
                    }],
                },
                NavEntry::Link {
                    icon: NavIcon::Peso,
                    label: "Shallow",
                    path: "/x/shallow",
                },
            ],
        },
        NavEntry::Group {
            label: "Second",
            icon: None,
            children: &[NavEntry::Group {
                label: "Cousin",
                icon: None,
                children: &[NavEntry::Link {
                    icon: NavIcon::Verify,
                    label: "Other",
                    path: "/x/other",
                }],
            }],
        },
    ];

    fn labels(rows: &[NavRow]) -> Vec<&'static str> {
        rows.iter()
            .map(|r| match r {
                NavRow::Link { label, .. } | NavRow::Group { label, .. } => *label,
            })
            .collect()
    }

    fn group_key(rows: &[NavRow], wanted: &str) -> GroupKey {
        rows.iter()
            .find_map(|r| match r {
                NavRow::Group { key, label, .. } if *label == wanted => Some(key.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_initially_everything_expanded() {
        let rows = nav_rows(role_links(Role::Sysad), &CollapseState::default(), "/sysad");
        assert_eq!(
            labels(&rows),
            vec![
                "Dashboard",
                "Manage Companies & Job Posts",
                "Companies",
                "Job Posts",
                "Manage Accounts",
                "Dean",
                "PESO",
            ]
        );
        assert_eq!(rows[2].depth(), 1);
    }

    #[test]
    fn test_toggle_hides_only_own_children() {
        let links = role_links(Role::Sysad);
        let mut state = CollapseState::default();
        let all = nav_rows(links, &state, "/sysad");

        state.toggle(&group_key(&all, "Manage Companies & Job Posts"));
        let rows = nav_rows(links, &state, "/sysad");
        assert_eq!(
            labels(&rows),
            vec![
                "Dashboard",
                "Manage Companies & Job Posts",
                "Manage Accounts",
                "Dean",
                "PESO",
            ]
        );
        assert!(matches!(rows[1], NavRow::Group { collapsed: true, .. }));
        assert!(matches!(rows[2], NavRow::Group { collapsed: false, .. }));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let links = role_links(Role::Sysad);
        let mut state = CollapseState::default();
        let before = nav_rows(links, &state, "/sysad");
        let key = group_key(&before, "Manage Accounts");

        state.toggle(&key);
        state.toggle(&key);
        assert_eq!(nav_rows(links, &state, "/sysad"), before);
        assert_eq!(state, CollapseState::default());
    }

    #[test]
    fn test_nested_collapse_is_positional() {
        let mut state = CollapseState::default();
        let all = nav_rows(NESTED, &state, "/");
        assert_eq!(
            labels(&all),
            vec!["Outer", "Inner", "Deep", "Shallow", "Second", "Cousin", "Other"]
        );

        // "Inner" and "Cousin" sit at the same depth and index under
        // different parents; collapsing one must not touch the other.
        let inner = group_key(&all, "Inner");
        assert_eq!(inner.dom_id(), "0_0");
        assert_eq!(group_key(&all, "Cousin").dom_id(), "1_0");
        state.toggle(&inner);
        assert_eq!(
            labels(&nav_rows(NESTED, &state, "/")),
            vec!["Outer", "Inner", "Shallow", "Second", "Cousin", "Other"]
        );

        state.toggle(&group_key(&all, "Outer"));
        assert_eq!(
            labels(&nav_rows(NESTED, &state, "/")),
            vec!["Outer", "Second", "Cousin", "Other"]
        );
    }

    #[test]
    fn test_exact_match_highlight() {
        let links = role_links(Role::Sysad);
        let current = |path: &str| -> Vec<&'static str> {
            nav_rows(links, &CollapseState::default(), path)
                .into_iter()
                .filter_map(|r| match r {
                    NavRow::Link {
                        label,
                        is_current: true,
                        ..
                    } => Some(label),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(current("/sysad/manage-companies"), vec!["Companies"]);
        assert!(current("/sysad/manage-companies/123").is_empty());
        assert_eq!(current("/sysad"), vec!["Dashboard"]);
    }

    #[test]
    fn test_unknown_role_renders_no_rows() {
        let entries = get_role_links("dean").unwrap_or(&[]);
        assert!(nav_rows(entries, &CollapseState::default(), "/dean").is_empty());
    }
}
