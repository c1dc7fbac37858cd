//! Mock records used until a live notification service is wired in.

use crate::NotificationRecord;

pub fn mock_notifications() -> Vec<NotificationRecord> {
    vec![
        NotificationRecord::new(
            1,
            "Welcome to the app!",
            "cos3kdkm20akmcao34a",
            "PENDING",
            "EMAIL",
        ),
        NotificationRecord::new(
            2,
            "You have 5 new notifications",
            "kdkmf210amdsc03msad",
            "PENDING",
            "IN-APP",
        ),
        NotificationRecord::new(
            3,
            "You're all caught up!",
            "mvs92kaldncn38ajcnafs",
            "DELIVERED",
            "IN-APP",
        )
        .mark_read(true),
        // Shares id 3 with the previous record; ids are not unique upstream.
        NotificationRecord::new(
            3,
            "You've got a new comment!",
            "amdo2kavmc39cnavksfj",
            "DELIVERED",
            "MOBILE",
        )
        .mark_read(true),
    ]
}
