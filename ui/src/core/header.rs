//! Scroll-dependent style of the landing page header.

/// Scroll offset (px) past which the header switches to its frosted look.
pub const FROST_THRESHOLD_PX: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderStyle {
    #[default]
    Plain,
    Frosted,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > FROST_THRESHOLD_PX {
            HeaderStyle::Frosted
        } else {
            HeaderStyle::Plain
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HeaderStyle::Plain => "site-header",
            HeaderStyle::Frosted => "site-header site-header--frosted",
        }
    }
}
