//! Data contract with the notification service.
//!
//! The UI never talks to the service directly. It receives a
//! [`NotificationFeed`] and reads records through it, so the seeded
//! [`StaticFeed`] can be swapped for a live source without touching any
//! presentation code.

mod feed;
pub use feed::{NotificationFeed, StaticFeed};

mod record;
pub use record::NotificationRecord;

pub mod seed;
