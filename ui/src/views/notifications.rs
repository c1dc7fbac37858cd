use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;

use crate::components::NotificationTable;
use crate::config::DashboardConfig;
use crate::core::commands::{self, Command};
use crate::core::notifications::present;
use crate::t;

#[component]
pub fn Notifications() -> Element {
    let config = use_context::<DashboardConfig>();
    let records = config.feed.fetch_notifications();
    let presented = present(&records);

    if let Err(err) = &presented {
        error!("notification feed violates the display contract: {err}");
    }

    let on_send = move |_: MouseEvent| {
        if let Err(err) = commands::dispatch(Command::SendNotification) {
            debug!("send notification: {err}");
        }
    };

    rsx! {
        section { class: "page page-notifications",
            div { class: "page__header",
                div {
                    h1 { class: "page__title", {t!("notifications-title")} }
                    p { class: "page__subtitle", {t!("notifications-subtitle")} }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: on_send,
                    {t!("notifications-send")}
                }
            }

            {match presented {
                Ok(rows) => rsx! {
                    NotificationTable { rows: rows }
                },
                Err(err) => rsx! {
                    div { class: "contract-error", role: "alert",
                        h2 { class: "contract-error__title", {t!("notifications-error-title")} }
                        p { class: "contract-error__hint", {t!("notifications-error-hint")} }
                        code { class: "contract-error__detail", "{err}" }
                    }
                },
            }}
        }
    }
}
