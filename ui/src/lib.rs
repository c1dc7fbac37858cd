//! Shared UI crate for Whistle. The navigation model, the notification
//! presentation pipeline, and every view used by the dashboard and landing
//! shells live here.

pub mod config;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod app_header;
    pub use app_header::AppHeader;

    mod avatar;
    pub use avatar::Avatar;

    mod icon;
    pub use icon::IconGlyph;

    mod mock_inbox;
    pub use mock_inbox::MockInbox;

    mod notification_table;
    pub use notification_table::NotificationTable;

    mod sidebar;
    pub use sidebar::Sidebar;

    mod site_header;
    pub use site_header::SiteHeader;

    mod theme_toggle;
    pub use theme_toggle::ThemeToggle;
}

pub use config::{DashboardConfig, LandingConfig};
