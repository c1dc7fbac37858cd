mod landing;
pub use landing::Landing;

mod notifications;
pub use notifications::Notifications;

mod placeholder;
pub use placeholder::{SectionPlaceholder, UserProfile};
