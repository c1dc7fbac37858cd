//! Route-aware navigation model for the dashboard sidebar.
//!
//! An entry is active when the current path starts with its `href`, so
//! sub-routes such as `/users/123` keep `/users` highlighted. Plain prefix
//! matching lets nested entries (`/users` and `/users/settings`) both match;
//! [`NavConfig::active_entry`] resolves that by picking the longest matching
//! `href`, first declared entry on an exact tie.
//!
//! Everything here is a pure function of the configuration and the path
//! string handed over by the router.

use crate::core::icons::Icon;

#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub title: String,
    pub href: String,
    pub icon: Icon,
}

impl NavEntry {
    pub fn new(title: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavGroup {
    /// May be empty, in which case no heading is rendered.
    pub title: String,
    pub entries: Vec<NavEntry>,
}

impl NavGroup {
    pub fn new(title: impl Into<String>, entries: Vec<NavEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }
}

/// Prefix match between the current route and an entry's target.
pub fn is_active(current_path: &str, entry_href: &str) -> bool {
    current_path.starts_with(entry_href)
}

/// Sidebar layout: the main groups stacked at the top, plus one group pinned
/// to the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct NavConfig {
    pub groups: Vec<NavGroup>,
    pub footer: NavGroup,
}

impl NavConfig {
    pub fn dashboard() -> Self {
        Self {
            groups: vec![
                NavGroup::new(
                    "General",
                    vec![
                        NavEntry::new("Dashboard", "/dashboard", Icon::LayoutDashboard),
                        NavEntry::new("Notifications", "/notifications", Icon::Bell),
                        NavEntry::new("Users", "/users", Icon::Users),
                        NavEntry::new("Customization", "/customization", Icon::Settings),
                        NavEntry::new("Metrics", "/metrics", Icon::AreaChart),
                    ],
                ),
                NavGroup::new(
                    "Developers",
                    vec![
                        NavEntry::new("Integrations", "/integrations", Icon::Blocks),
                        NavEntry::new("API Keys", "/api-keys", Icon::KeyRound),
                        NavEntry::new("Webhooks", "/webhooks", Icon::Webhook),
                    ],
                ),
            ],
            footer: NavGroup::new(
                "",
                vec![NavEntry::new("Organization", "/team", Icon::Building)],
            ),
        }
    }

    /// All entries in declaration order, footer last.
    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.groups
            .iter()
            .chain(std::iter::once(&self.footer))
            .flat_map(|group| group.entries.iter())
    }

    /// The single entry to highlight for `current_path`, if any.
    pub fn active_entry(&self, current_path: &str) -> Option<&NavEntry> {
        let mut best: Option<&NavEntry> = None;
        for entry in self.entries() {
            if !is_active(current_path, &entry.href) {
                continue;
            }
            match best {
                Some(current) if current.href.len() >= entry.href.len() => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    pub fn active_href(&self, current_path: &str) -> Option<&str> {
        self.active_entry(current_path)
            .map(|entry| entry.href.as_str())
    }

    /// Position of the winning entry within [`NavConfig::entries`].
    pub fn active_index(&self, current_path: &str) -> Option<usize> {
        let winner = self.active_entry(current_path)?;
        self.entries().position(|entry| std::ptr::eq(entry, winner))
    }

    /// One flag per entry, in [`NavConfig::entries`] order. At most one is set,
    /// even when two entries share an `href`.
    pub fn highlights(&self, current_path: &str) -> Vec<bool> {
        let active = self.active_index(current_path);
        (0..self.entries().count())
            .map(|index| Some(index) == active)
            .collect()
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> NavConfig {
        NavConfig {
            groups: vec![NavGroup::new(
                "General",
                vec![
                    NavEntry::new("Users", "/users", Icon::Users),
                    NavEntry::new("User settings", "/users/settings", Icon::Settings),
                ],
            )],
            footer: NavGroup::new("", vec![]),
        }
    }

    #[test]
    fn prefix_match_keeps_parent_active() {
        assert!(is_active("/users/123", "/users"));
        assert!(is_active("/users", "/users"));
        assert!(!is_active("/dashboard", "/users"));
        assert!(!is_active("/user", "/users"));
    }

    #[test]
    fn longest_prefix_wins() {
        let nav = nested();
        assert_eq!(nav.active_href("/users/settings/email"), Some("/users/settings"));
        assert_eq!(nav.active_href("/users/42"), Some("/users"));
    }

    #[test]
    fn declaration_order_breaks_equal_length_ties() {
        let nav = NavConfig {
            groups: vec![NavGroup::new(
                "",
                vec![
                    NavEntry::new("First", "/a", Icon::Bell),
                    NavEntry::new("Second", "/a", Icon::Mail),
                ],
            )],
            footer: NavGroup::new("", vec![]),
        };
        assert_eq!(nav.active_entry("/a/b").map(|e| e.title.as_str()), Some("First"));
        assert_eq!(nav.active_index("/a/b"), Some(0));
    }

    #[test]
    fn duplicate_hrefs_highlight_only_the_first() {
        let nav = NavConfig {
            groups: vec![NavGroup::new(
                "",
                vec![
                    NavEntry::new("First", "/a", Icon::Bell),
                    NavEntry::new("Second", "/a", Icon::Mail),
                ],
            )],
            footer: NavGroup::new("", vec![]),
        };
        let highlighted: Vec<&str> = nav
            .entries()
            .zip(nav.highlights("/a/b"))
            .filter(|(_, on)| *on)
            .map(|(entry, _)| entry.title.as_str())
            .collect();
        assert_eq!(highlighted, vec!["First"]);
    }

    #[test]
    fn highlights_follow_the_footer_and_unknown_paths() {
        let nav = NavConfig::dashboard();
        let flags = nav.highlights("/team/members");
        assert_eq!(flags.len(), 9);
        assert_eq!(flags.iter().filter(|on| **on).count(), 1);
        assert!(flags[8]);
        assert!(nav.highlights("/nowhere").iter().all(|on| !on));
    }

    #[test]
    fn unknown_path_has_no_active_entry() {
        let nav = NavConfig::dashboard();
        assert!(nav.active_entry("/nowhere").is_none());
        assert!(nav.active_entry("").is_none());
    }

    #[test]
    fn footer_entries_participate() {
        let nav = NavConfig::dashboard();
        let active = nav.active_entry("/team/members").unwrap();
        assert_eq!(active.title, "Organization");
    }

    #[test]
    fn dashboard_layout_has_expected_entries() {
        let nav = NavConfig::dashboard();
        let hrefs: Vec<&str> = nav.entries().map(|e| e.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/dashboard",
                "/notifications",
                "/users",
                "/customization",
                "/metrics",
                "/integrations",
                "/api-keys",
                "/webhooks",
                "/team",
            ]
        );
    }
}
