use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of entry on the team schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionKind {
    Practice,
    Meet,
    Meeting,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionKind::Practice => "Practice",
            SessionKind::Meet => "Meet",
            SessionKind::Meeting => "Meeting",
        };
        write!(f, "{label}")
    }
}

/// Read-only schedule entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub kind: SessionKind,
    pub location: Option<String>,
}
