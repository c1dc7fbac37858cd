use crate::{seed, NotificationRecord};

/// Source of notification records for the dashboard.
///
/// Implementations return records in display order. Fetching, paging and live
/// updates are the implementation's concern; callers only see the snapshot.
pub trait NotificationFeed {
    fn fetch_notifications(&self) -> Vec<NotificationRecord>;
}

/// In-memory feed holding a fixed, ordered list of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticFeed {
    records: Vec<NotificationRecord>,
}

impl StaticFeed {
    pub fn new(records: Vec<NotificationRecord>) -> Self {
        Self { records }
    }

    /// The mock list shown by the dashboard out of the box.
    pub fn seeded() -> Self {
        Self::new(seed::mock_notifications())
    }

    /// Parse a JSON array of records.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str(raw)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl NotificationFeed for StaticFeed {
    fn fetch_notifications(&self) -> Vec<NotificationRecord> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_keeps_order() {
        let raw = r#"[
            {"id": 2, "message": "b", "userId": "u2", "status": "PENDING", "provider": "EMAIL"},
            {"id": 1, "message": "a", "userId": "u1", "status": "FAILED", "provider": "MOBILE"}
        ]"#;
        let feed = StaticFeed::from_json(raw).unwrap();
        let ids: Vec<i64> = feed.fetch_notifications().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn from_json_rejects_missing_fields() {
        let raw = r#"[{"id": 1, "message": "a"}]"#;
        assert!(StaticFeed::from_json(raw).is_err());
    }

    #[test]
    fn default_feed_is_empty() {
        let feed = StaticFeed::default();
        assert!(feed.is_empty());
        assert!(feed.fetch_notifications().is_empty());
    }
}
