use serde::{Deserialize, Serialize};

/// A notification as delivered by the service.
///
/// `status` and `provider` are kept as the raw upper-case text the service
/// sends (`"PENDING"`, `"IN-APP"`, ...). Mapping them onto known values is the
/// presentation layer's job, which is also where unknown values are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Not guaranteed to be unique.
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub user_id: String,
    pub status: String,
    pub provider: String,
}

impl NotificationRecord {
    pub fn new(
        id: i64,
        message: impl Into<String>,
        user_id: impl Into<String>,
        status: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            read: false,
            user_id: user_id.into(),
            status: status.into(),
            provider: provider.into(),
        }
    }

    pub fn mark_read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_format_uses_camel_case_user_id() {
        let value = json!({
            "id": 7,
            "message": "Ping",
            "read": true,
            "userId": "u7",
            "status": "DELIVERED",
            "provider": "MOBILE",
        });
        let record: NotificationRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.user_id, "u7");
        assert!(record.read);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["userId"], "u7");
        assert!(back.get("user_id").is_none());
    }

    #[test]
    fn read_flag_defaults_to_unread() {
        let value = json!({
            "id": 1,
            "message": "Hi",
            "userId": "u1",
            "status": "PENDING",
            "provider": "EMAIL",
        });
        let record: NotificationRecord = serde_json::from_value(value).unwrap();
        assert!(!record.read);
    }
}
