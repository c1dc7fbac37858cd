use api::{NotificationFeed, NotificationRecord, StaticFeed};
use serde_json::json;
use ui::core::icons::Icon;
use ui::core::nav::{is_active, NavConfig};
use ui::core::notifications::{present, DeliveryStatus};
use ui::core::DataContractError;

#[test]
fn seeded_feed_presents_every_row() {
    let records = StaticFeed::seeded().fetch_notifications();
    let rows = present(&records).expect("seed data is within the display contract");

    let summary: Vec<(i64, &str, &str)> = rows
        .iter()
        .map(|row| (row.id, row.provider_label.as_str(), row.status_label.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "Email", "Pending"),
            (2, "In-app", "Pending"),
            (3, "In-app", "Delivered"),
            (3, "Mobile", "Delivered"),
        ]
    );
    assert_eq!(rows[0].user_link, "/users/cos3kdkm20akmcao34a");
    assert_eq!(rows[3].provider_icon, Icon::Smartphone);
    assert_eq!(rows[2].status, DeliveryStatus::Delivered);
}

#[test]
fn json_feed_with_sms_provider_is_rejected() {
    let raw = json!([
        {"id": 1, "message": "Hi", "userId": "u1", "status": "PENDING", "provider": "EMAIL"},
        {"id": 2, "message": "Yo", "userId": "u2", "status": "PENDING", "provider": "SMS"}
    ])
    .to_string();
    let feed = StaticFeed::from_json(&raw).unwrap();

    let err = present(&feed.fetch_notifications()).unwrap_err();
    assert_eq!(err, DataContractError::UnknownProvider("SMS".into()));
    assert_eq!(err.to_string(), "unknown notification provider `SMS`");
}

#[test]
fn end_to_end_single_record() {
    let rows = present(&[NotificationRecord::new(1, "Hi", "u1", "PENDING", "EMAIL")]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].message, "Hi");
    assert_eq!(rows[0].user_link, "/users/u1");
    assert_eq!(rows[0].provider_label, "Email");
    assert_eq!(rows[0].status_label, "Pending");
    assert_eq!(rows[0].provider_icon, Icon::Mail);
}

#[test]
fn user_links_resolve_to_the_users_entry() {
    let nav = NavConfig::dashboard();
    let rows = present(&StaticFeed::seeded().fetch_notifications()).unwrap();
    for row in &rows {
        assert!(is_active(&row.user_link, "/users"));
        assert_eq!(nav.active_href(&row.user_link), Some("/users"));
    }
}

#[test]
fn every_prefix_of_a_path_is_active() {
    let path = "/notifications/42/details";
    for end in 0..=path.len() {
        assert!(is_active(path, &path[..end]));
    }
    assert!(!is_active(path, "/notifications/43"));
    assert!(!is_active("/notif", "/notifications"));
}
