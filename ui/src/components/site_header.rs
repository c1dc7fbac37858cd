use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::header::HeaderStyle;
use crate::core::platform::{self, ScrollListener};
use crate::t;

/// Sticky landing header that frosts once the page scrolls past the hero top.
#[component]
pub fn SiteHeader() -> Element {
    let style = use_signal(HeaderStyle::default);

    // Listener lives as long as the component; dropping the hook detaches it.
    let _listener: Rc<ScrollListener> = use_hook(|| {
        Rc::new(platform::on_window_scroll(move |scroll_y| {
            let next = HeaderStyle::for_scroll(scroll_y);
            if *style.peek() != next {
                let mut style = style;
                style.set(next);
            }
        }))
    });

    rsx! {
        div { class: "{style().css_class()}",
            p { class: "site-header__brand", {t!("brand-name")} }
            button { r#type: "button", class: "button button--primary",
                {t!("landing-feature-request")}
            }
        }
    }
}
