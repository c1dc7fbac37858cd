//! Platform-agnostic presentation state: navigation, the notification
//! pipeline, and the small value types the components render.

pub mod commands;
pub mod error;
pub mod format;
pub mod header;
pub mod icons;
pub mod inbox;
pub mod nav;
pub mod notifications;
pub mod platform;
pub mod theme;

pub use error::{CommandError, DataContractError};
