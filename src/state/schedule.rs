use chrono::{DateTime, Utc};

use crate::models::{CalendarEvent, SessionKind};

/// Read-only schedule, held date-ascending for display
#[derive(Debug)]
pub struct ScheduleStore {
    events: Vec<CalendarEvent>,
}

impl ScheduleStore {
    pub fn new(mut events: Vec<CalendarEvent>) -> Self {
        events.sort_by_key(|e| e.date);
        Self { events }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Earliest meet at or after `now`
    pub fn next_meet(&self, now: DateTime<Utc>) -> Option<&CalendarEvent> {
        self.events
            .iter()
            .find(|e| e.kind == SessionKind::Meet && e.date >= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn event(title: &str, day: u32, kind: SessionKind) -> CalendarEvent {
        CalendarEvent {
            id: Uuid::new_v4(),
            title: title.to_string(),
            date: Utc.with_ymd_and_hms(2023, 10, day, 9, 0, 0).unwrap(),
            kind,
            location: None,
        }
    }

    #[test]
    fn events_are_sorted_ascending() {
        let store = ScheduleStore::new(vec![
            event("Regional Qualifiers", 28, SessionKind::Meet),
            event("Team Practice", 26, SessionKind::Practice),
            event("Coaches Meeting", 27, SessionKind::Meeting),
        ]);

        let titles: Vec<&str> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Team Practice", "Coaches Meeting", "Regional Qualifiers"]);
    }

    #[test]
    fn next_meet_skips_practices_and_past_meets() {
        let store = ScheduleStore::new(vec![
            event("Season Opener", 2, SessionKind::Meet),
            event("Team Practice", 26, SessionKind::Practice),
            event("Regional Qualifiers", 28, SessionKind::Meet),
        ]);

        let now = Utc.with_ymd_and_hms(2023, 10, 20, 0, 0, 0).unwrap();
        assert_eq!(store.next_meet(now).unwrap().title, "Regional Qualifiers");
    }
}
