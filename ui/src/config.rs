//! Explicit configuration values handed to each app shell.
//!
//! Shells build these once in `App` and provide them through context, so the
//! views never reach for module-level mock data.

use std::rc::Rc;

use api::{NotificationFeed, StaticFeed};

use crate::core::inbox::InboxSnapshot;
use crate::core::nav::NavConfig;
use crate::core::theme::Theme;

/// Signed-in account shown in the dashboard header.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub avatar_url: String,
    pub initials: String,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            avatar_url: "https://github.com/armans-code.png".into(),
            initials: "AK".into(),
        }
    }
}

#[derive(Clone)]
pub struct DashboardConfig {
    pub nav: NavConfig,
    pub feed: Rc<dyn NotificationFeed>,
    pub account: Account,
}

impl DashboardConfig {
    /// Dashboard backed by the seeded mock feed.
    pub fn seeded() -> Self {
        Self::with_feed(StaticFeed::seeded())
    }

    pub fn with_feed(feed: impl NotificationFeed + 'static) -> Self {
        Self {
            nav: NavConfig::dashboard(),
            feed: Rc::new(feed),
            account: Account::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub inbox: InboxSnapshot,
    pub initial_theme: Theme,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            inbox: InboxSnapshot::showcase(),
            initial_theme: Theme::default(),
        }
    }
}
