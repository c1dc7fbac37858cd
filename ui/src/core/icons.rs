//! Closed set of glyphs used across both apps.
//!
//! Icons are rendered as a `span` carrying `icon icon--<name>`; the shared
//! stylesheet supplies the glyph. [`Icon::glyph`] is the text fallback shown
//! inside the span so the markup stays readable without the stylesheet.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    LayoutDashboard,
    Bell,
    Users,
    Settings,
    AreaChart,
    Blocks,
    KeyRound,
    Webhook,
    Building,
    Mail,
    Smartphone,
    Inbox,
    Ellipsis,
    CircleAlert,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Bell => "bell",
            Icon::Users => "users",
            Icon::Settings => "settings",
            Icon::AreaChart => "area-chart",
            Icon::Blocks => "blocks",
            Icon::KeyRound => "key-round",
            Icon::Webhook => "webhook",
            Icon::Building => "building",
            Icon::Mail => "mail",
            Icon::Smartphone => "smartphone",
            Icon::Inbox => "inbox",
            Icon::Ellipsis => "ellipsis",
            Icon::CircleAlert => "circle-alert",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "▦",
            Icon::Bell => "🔔",
            Icon::Users => "👥",
            Icon::Settings => "⚙",
            Icon::AreaChart => "📈",
            Icon::Blocks => "▣",
            Icon::KeyRound => "🔑",
            Icon::Webhook => "⚓",
            Icon::Building => "🏢",
            Icon::Mail => "✉",
            Icon::Smartphone => "📱",
            Icon::Inbox => "📥",
            Icon::Ellipsis => "…",
            Icon::CircleAlert => "⚠",
        }
    }

    pub fn css_class(self) -> String {
        format!("icon icon--{}", self.name())
    }
}
