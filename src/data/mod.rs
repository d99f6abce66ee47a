// Fixed sample datasets the dashboard is seeded with at startup. There is
// no persistence layer; every run starts from these records.

use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{
    Athlete, AthleteStatus, CalendarEvent, EventGroup, Intensity, PerformanceStat, SessionKind,
    Workout,
};

fn athlete(
    first_name: &str,
    last_name: &str,
    grade: u8,
    events: &[&str],
    group: EventGroup,
    status: AthleteStatus,
    email: &str,
    phone: &str,
) -> Athlete {
    Athlete {
        id: Uuid::new_v4(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        grade,
        events: events.iter().map(|e| e.to_string()).collect(),
        group,
        status,
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        avatar_url: Some(format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={first_name}"
        )),
    }
}

/// Sample team roster
pub fn seed_roster() -> Vec<Athlete> {
    vec![
        athlete(
            "Jordan",
            "Miller",
            12,
            &["100m", "200m"],
            EventGroup::Sprints,
            AthleteStatus::Active,
            "jordan.m@example.com",
            "555-0101",
        ),
        athlete(
            "Sarah",
            "Jenkins",
            11,
            &["1600m", "3200m"],
            EventGroup::Distance,
            AthleteStatus::Active,
            "sarah.j@example.com",
            "555-0102",
        ),
        athlete(
            "Marcus",
            "Tate",
            10,
            &["Shot Put", "Discus"],
            EventGroup::Throws,
            AthleteStatus::Injured,
            "marcus.t@example.com",
            "555-0103",
        ),
        athlete(
            "Elena",
            "Rodriguez",
            9,
            &["Long Jump", "4x100m"],
            EventGroup::Jumps,
            AthleteStatus::Active,
            "elena.r@example.com",
            "555-0104",
        ),
        athlete(
            "Tyrell",
            "Owens",
            12,
            &["400m", "800m"],
            EventGroup::Sprints,
            AthleteStatus::Active,
            "tyrell.o@example.com",
            "555-0105",
        ),
    ]
}

/// Workouts already on the board at startup
pub fn seed_workouts() -> Vec<Workout> {
    vec![
        Workout::new(
            "Speed Endurance I".to_string(),
            NaiveDate::from_ymd_opt(2023, 10, 25).expect("valid seed date"),
            EventGroup::Sprints,
            "3x150m @ 95%".to_string(),
            Intensity::High,
            false,
        ),
        Workout::new(
            "Long Run".to_string(),
            NaiveDate::from_ymd_opt(2023, 10, 26).expect("valid seed date"),
            EventGroup::Distance,
            "45min steady state".to_string(),
            Intensity::Medium,
            false,
        ),
    ]
}

fn calendar_event(
    title: &str,
    day: u32,
    hour: u32,
    minute: u32,
    kind: SessionKind,
    location: &str,
) -> CalendarEvent {
    CalendarEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        date: Utc
            .with_ymd_and_hms(2023, 10, day, hour, minute, 0)
            .single()
            .expect("valid seed date"),
        kind,
        location: Some(location.to_string()),
    }
}

/// Team schedule entries
pub fn seed_calendar() -> Vec<CalendarEvent> {
    vec![
        calendar_event("Regional Qualifiers", 28, 9, 0, SessionKind::Meet, "City Stadium"),
        calendar_event("Team Practice", 26, 15, 30, SessionKind::Practice, "Home Track"),
        calendar_event("Coaches Meeting", 27, 18, 0, SessionKind::Meeting, "Room 204"),
        calendar_event("Recovery Session", 29, 10, 0, SessionKind::Practice, "Gym"),
    ]
}

fn stat(month: u32, day: u32, value: f64, display: &str) -> PerformanceStat {
    PerformanceStat {
        date: NaiveDate::from_ymd_opt(2024, month, day).expect("valid seed date"),
        event_name: "100m Dash".to_string(),
        value,
        display_value: display.to_string(),
        meet_name: None,
    }
}

/// 100m progression series for the performance view
pub fn seed_performance_series() -> Vec<PerformanceStat> {
    vec![
        stat(3, 1, 11.2, "11.2s"),
        stat(3, 15, 11.0, "11.0s"),
        stat(3, 22, 10.95, "10.95s"),
        stat(4, 5, 10.88, "10.88s"),
        stat(4, 12, 10.82, "10.82s"),
    ]
}
