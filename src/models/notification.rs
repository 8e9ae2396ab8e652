use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification tag of a notification. Drives the row icon and
/// filter matching. Unrecognized tags are kept verbatim in `Other`
/// so a load/persist round-trip never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationCategory {
    Appointment,
    Report,
    Prescription,
    System,
    Other(String),
}

impl NotificationCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Appointment => "appointment",
            Self::Report => "report",
            Self::Prescription => "prescription",
            Self::System => "system",
            Self::Other(raw) => raw,
        }
    }

    /// Row icon. Anything unrecognized gets the generic info symbol.
    ///
    /// Keyed on the tag text, so `Other("report")` looks the same as
    /// `Report` does after a persist/load round-trip.
    pub fn icon(&self) -> &'static str {
        match self.as_str() {
            "appointment" => "🩺",
            "report" => "📄",
            "prescription" => "💊",
            "system" => "⚠",
            _ => "ℹ",
        }
    }
}

impl From<String> for NotificationCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "appointment" => Self::Appointment,
            "report" => Self::Report,
            "prescription" => Self::Prescription,
            "system" => Self::System,
            _ => Self::Other(raw),
        }
    }
}

impl From<NotificationCategory> for String {
    fn from(category: NotificationCategory) -> Self {
        match category {
            NotificationCategory::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// One entry of the notification list.
///
/// Serialized field names follow the persisted slot format:
/// `{"id":1,"type":"appointment","title":..,"message":..,"time":..,"read":false}`.
/// `category` is accepted on input as an alias of `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: i64,
    #[serde(rename = "type", alias = "category")]
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    /// Display label ("10 mins ago") or an RFC 3339 instant.
    #[serde(default)]
    pub time: String,
    pub read: bool,
}

impl NotificationRecord {
    pub fn new(
        id: i64,
        category: NotificationCategory,
        title: &str,
        message: &str,
        time: &str,
        read: bool,
    ) -> Self {
        Self {
            id,
            category,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
        }
    }

    /// Title is required and must carry text.
    pub fn is_well_formed(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid notification filter: {0}")]
pub struct InvalidFilter(pub String);

/// Category filter applied by the list view. Starts at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFilter {
    #[default]
    All,
    Appointment,
    Report,
    Prescription,
    System,
}

impl NotificationFilter {
    /// Tab order of the filter bar.
    pub const TABS: [NotificationFilter; 5] = [
        Self::All,
        Self::Appointment,
        Self::Report,
        Self::Prescription,
        Self::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Appointment => "appointment",
            Self::Report => "report",
            Self::Prescription => "prescription",
            Self::System => "system",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Appointment => "Appointments",
            Self::Report => "Reports",
            Self::Prescription => "Prescriptions",
            Self::System => "System",
        }
    }

    /// Compares tag text, not variants, for the same reason as
    /// [`NotificationCategory::icon`].
    pub fn matches(&self, category: &NotificationCategory) -> bool {
        *self == Self::All || category.as_str() == self.as_str()
    }
}

impl std::str::FromStr for NotificationFilter {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TABS
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| InvalidFilter(s.to_string()))
    }
}

impl std::fmt::Display for NotificationFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
