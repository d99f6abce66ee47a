use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Training group an athlete belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventGroup {
    Sprints,
    Distance,
    Jumps,
    Throws,
    Relays,
}

impl EventGroup {
    /// All groups in display order
    pub const ALL: [EventGroup; 5] = [
        EventGroup::Sprints,
        EventGroup::Distance,
        EventGroup::Jumps,
        EventGroup::Throws,
        EventGroup::Relays,
    ];
}

impl fmt::Display for EventGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventGroup::Sprints => "Sprints",
            EventGroup::Distance => "Distance",
            EventGroup::Jumps => "Jumps",
            EventGroup::Throws => "Throws",
            EventGroup::Relays => "Relays",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AthleteStatus {
    Active,
    Injured,
    Resting,
}

impl fmt::Display for AthleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AthleteStatus::Active => "Active",
            AthleteStatus::Injured => "Injured",
            AthleteStatus::Resting => "Resting",
        };
        write!(f, "{label}")
    }
}

/// Athlete roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub grade: u8,
    /// Events the athlete competes in, e.g. ["100m", "200m"]
    pub events: Vec<String>,
    pub group: EventGroup,
    pub status: AthleteStatus,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
