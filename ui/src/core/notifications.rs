//! Turns raw notification records into rows the dashboard table can render.
//!
//! `present` is a pure, order-preserving map: no sorting, no filtering, and
//! nothing is rendered for a record whose provider or status has no display
//! mapping. The first such value aborts the whole call with a
//! [`DataContractError`].

use std::fmt;
use std::str::FromStr;

use api::NotificationRecord;

use crate::core::error::DataContractError;
use crate::core::format::title_case;
use crate::core::icons::Icon;

/// Delivery channel of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Email,
    Mobile,
    InApp,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Email => "EMAIL",
            Provider::Mobile => "MOBILE",
            Provider::InApp => "IN-APP",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Provider::Email => Icon::Mail,
            Provider::Mobile => Icon::Smartphone,
            Provider::InApp => Icon::Inbox,
        }
    }

    pub fn label(self) -> String {
        title_case(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DataContractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "EMAIL" => Ok(Provider::Email),
            "MOBILE" => Ok(Provider::Mobile),
            "IN-APP" => Ok(Provider::InApp),
            other => Err(DataContractError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery lifecycle stage of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    Failed,
    Attempted,
    Undelivered,
}

impl DeliveryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "PENDING",
            DeliveryStatus::Delivered => "DELIVERED",
            DeliveryStatus::Failed => "FAILED",
            DeliveryStatus::Attempted => "ATTEMPTED",
            DeliveryStatus::Undelivered => "UNDELIVERED",
        }
    }

    pub fn label(self) -> String {
        title_case(self.as_str())
    }

    /// Modifier for the status cell, e.g. `status--failed`.
    pub fn css_class(self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "status status--pending",
            DeliveryStatus::Delivered => "status status--delivered",
            DeliveryStatus::Failed => "status status--failed",
            DeliveryStatus::Attempted => "status status--attempted",
            DeliveryStatus::Undelivered => "status status--undelivered",
        }
    }
}

impl FromStr for DeliveryStatus {
    type Err = DataContractError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "PENDING" => Ok(DeliveryStatus::Pending),
            "DELIVERED" => Ok(DeliveryStatus::Delivered),
            "FAILED" => Ok(DeliveryStatus::Failed),
            "ATTEMPTED" => Ok(DeliveryStatus::Attempted),
            "UNDELIVERED" => Ok(DeliveryStatus::Undelivered),
            other => Err(DataContractError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready form of a [`NotificationRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct PresentedRow {
    pub id: i64,
    pub message: String,
    pub read: bool,
    pub user_id: String,
    pub user_link: String,
    pub provider_label: String,
    pub provider_icon: Icon,
    pub status: DeliveryStatus,
    pub status_label: String,
}

impl PresentedRow {
    pub fn from_record(record: &NotificationRecord) -> Result<Self, DataContractError> {
        let provider: Provider = record.provider.parse()?;
        let status: DeliveryStatus = record.status.parse()?;

        Ok(Self {
            id: record.id,
            message: record.message.clone(),
            read: record.read,
            user_id: record.user_id.clone(),
            user_link: user_link(&record.user_id),
            provider_label: provider.label(),
            provider_icon: provider.icon(),
            status,
            status_label: status.label(),
        })
    }
}

/// Link target for a user's detail page. The id is used verbatim; an empty id
/// yields `/users/`, which the router treats like any other unknown page.
pub fn user_link(user_id: &str) -> String {
    format!("/users/{user_id}")
}

/// Present every record, preserving input order.
pub fn present(records: &[NotificationRecord]) -> Result<Vec<PresentedRow>, DataContractError> {
    records.iter().map(PresentedRow::from_record).collect()
}
