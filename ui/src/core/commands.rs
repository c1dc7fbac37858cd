//! User-triggered commands on the notifications page.
//!
//! Both commands are visible affordances (the "Send Notification" button and
//! each row's overflow menu) without behaviour behind them yet. Dispatching one
//! logs the request and reports [`CommandError::Unwired`].

use dioxus::logger::tracing::{debug, warn};

use crate::core::error::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SendNotification,
    OpenRowMenu { id: i64 },
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::SendNotification => "send-notification",
            Command::OpenRowMenu { .. } => "open-row-menu",
        }
    }
}

pub fn dispatch(command: Command) -> Result<(), CommandError> {
    debug!(?command, "dispatching command");
    warn!(command = command.name(), "command has no handler");
    Err(CommandError::Unwired(command.name()))
}
