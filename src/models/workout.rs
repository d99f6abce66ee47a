use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::EventGroup;

/// Scheduled training intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
    #[serde(rename = "Race Pace")]
    RacePace,
}

impl Intensity {
    /// All intensities in display order
    pub const ALL: [Intensity; 4] = [
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::RacePace,
    ];
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
            Intensity::RacePace => "Race Pace",
        };
        write!(f, "{label}")
    }
}

/// Season phase used to contextualize assisted plan requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingPhase {
    #[serde(rename = "Pre-Season")]
    PreSeason,
    #[serde(rename = "Early Season")]
    EarlySeason,
    #[serde(rename = "Mid Season")]
    MidSeason,
    Championship,
    #[serde(rename = "Off Season")]
    OffSeason,
}

impl TrainingPhase {
    /// All phases in display order
    pub const ALL: [TrainingPhase; 5] = [
        TrainingPhase::PreSeason,
        TrainingPhase::EarlySeason,
        TrainingPhase::MidSeason,
        TrainingPhase::Championship,
        TrainingPhase::OffSeason,
    ];
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrainingPhase::PreSeason => "Pre-Season",
            TrainingPhase::EarlySeason => "Early Season",
            TrainingPhase::MidSeason => "Mid Season",
            TrainingPhase::Championship => "Championship",
            TrainingPhase::OffSeason => "Off Season",
        };
        write!(f, "{label}")
    }
}

/// A scheduled workout for one training group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub group: EventGroup,
    pub description: String,
    pub intensity: Intensity,
    /// Whether the plan came out of the assisted-generation workflow
    pub ai_generated: bool,
}

impl Workout {
    /// Create a workout with a generated id
    pub fn new(
        title: String,
        date: NaiveDate,
        group: EventGroup,
        description: String,
        intensity: Intensity,
        ai_generated: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            date,
            group,
            description,
            intensity,
            ai_generated,
        }
    }
}
