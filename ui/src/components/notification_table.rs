use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::IconGlyph;
use crate::core::commands::{self, Command};
use crate::core::icons::Icon;
use crate::core::notifications::PresentedRow;
use crate::t;

/// Table renderer for presented notification rows.
///
/// Rows render in the order given. Keys combine position and id because ids
/// are not unique upstream.
#[component]
pub fn NotificationTable(rows: Vec<PresentedRow>) -> Element {
    let is_empty = rows.is_empty();

    rsx! {
        div { class: "notifications-table",
            table { class: "table",
                thead {
                    tr {
                        th { class: "table__head table__head--id", {t!("column-id")} }
                        th { class: "table__head table__head--message", {t!("column-message")} }
                        th { class: "table__head", {t!("column-user")} }
                        th { class: "table__head", {t!("column-provider")} }
                        th { class: "table__head", {t!("column-status")} }
                        th { class: "table__head table__head--actions" }
                    }
                }
                tbody {
                    if is_empty {
                        tr {
                            td { class: "table__placeholder", colspan: "6", {t!("notifications-empty")} }
                        }
                    }
                    for (index, row) in rows.into_iter().enumerate() {
                        {render_row(index, row)}
                    }
                }
            }
        }
    }
}

fn render_row(index: usize, row: PresentedRow) -> Element {
    let PresentedRow {
        id,
        message,
        read,
        user_id,
        user_link,
        provider_label,
        provider_icon,
        status,
        status_label,
    } = row;

    let row_class = if read {
        "table__row"
    } else {
        "table__row table__row--unread"
    };

    let on_menu = move |_: MouseEvent| {
        if let Err(err) = commands::dispatch(Command::OpenRowMenu { id }) {
            debug!("row menu for {id}: {err}");
        }
    };

    rsx! {
        tr {
            key: "{index}-{id}",
            class: row_class,
            td { class: "table__cell table__cell--id",
                "{id}"
                if !read {
                    span {
                        class: "unread-dot",
                        title: t!("notifications-unread"),
                    }
                }
            }
            td { class: "table__cell table__cell--message", "{message}" }
            td { class: "table__cell",
                Link { class: "table__link", to: user_link, "{user_id}" }
            }
            td { class: "table__cell table__cell--provider",
                IconGlyph { icon: provider_icon, class: "table__provider-icon" }
                "{provider_label}"
            }
            td { class: "table__cell",
                span { class: status.css_class(), "{status_label}" }
            }
            td { class: "table__cell table__cell--actions",
                button {
                    r#type: "button",
                    class: "row-menu__trigger",
                    aria_label: t!("notifications-row-menu"),
                    aria_haspopup: "menu",
                    onclick: on_menu,
                    IconGlyph { icon: Icon::Ellipsis }
                }
            }
        }
    }
}
