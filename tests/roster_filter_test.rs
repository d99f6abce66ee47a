use proptest::prelude::*;
use uuid::Uuid;

use track_command::models::{Athlete, AthleteStatus, EventGroup};
use track_command::state::{GroupFilter, RosterStore};

fn athlete(name: &str, group: EventGroup) -> Athlete {
    Athlete {
        id: Uuid::new_v4(),
        first_name: name.to_string(),
        last_name: "Tester".to_string(),
        grade: 11,
        events: vec![],
        group,
        status: AthleteStatus::Active,
        email: None,
        phone: None,
        avatar_url: None,
    }
}

fn sample_roster() -> Vec<Athlete> {
    vec![
        athlete("Jordan", EventGroup::Sprints),
        athlete("Sarah", EventGroup::Distance),
        athlete("Marcus", EventGroup::Throws),
        athlete("Elena", EventGroup::Jumps),
        athlete("Tyrell", EventGroup::Sprints),
    ]
}

#[test]
fn all_filter_returns_full_roster_in_order() {
    let roster = sample_roster();
    let expected: Vec<Uuid> = roster.iter().map(|a| a.id).collect();

    let store = RosterStore::new(roster);
    let ids: Vec<Uuid> = store.filtered().iter().map(|a| a.id).collect();

    assert_eq!(ids, expected);
}

#[test]
fn group_filter_returns_ordered_subsequence() {
    let roster = sample_roster();
    let expected: Vec<Uuid> = roster
        .iter()
        .filter(|a| a.group == EventGroup::Sprints)
        .map(|a| a.id)
        .collect();

    let mut store = RosterStore::new(roster);
    store.set_filter(GroupFilter::Group(EventGroup::Sprints));

    let ids: Vec<Uuid> = store.filtered().iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(ids.len(), 2);
}

#[test]
fn empty_result_is_valid() {
    let mut store = RosterStore::new(sample_roster());
    store.set_filter(GroupFilter::Group(EventGroup::Relays));
    assert!(store.filtered().is_empty());
}

#[test]
fn filtering_does_not_mutate_the_roster() {
    let roster = sample_roster();
    let expected: Vec<Uuid> = roster.iter().map(|a| a.id).collect();

    let mut store = RosterStore::new(roster);
    store.set_filter(GroupFilter::Group(EventGroup::Jumps));
    let _ = store.filtered();
    store.set_filter(GroupFilter::All);

    let ids: Vec<Uuid> = store.filtered().iter().map(|a| a.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn filter_bar_cycles_through_every_group_and_back() {
    let mut filter = GroupFilter::All;
    for _ in 0..GroupFilter::bar().len() {
        filter = filter.next();
    }
    assert_eq!(filter, GroupFilter::All);
    assert_eq!(GroupFilter::All.prev().next(), GroupFilter::All);
}

fn group_strategy() -> impl Strategy<Value = EventGroup> {
    prop::sample::select(EventGroup::ALL.to_vec())
}

proptest! {
    /// For any roster and any filter, the result is the order-preserving
    /// sub-sequence of matching athletes, and filtering twice with the
    /// same filter changes nothing.
    #[test]
    fn filter_laws_hold(groups in prop::collection::vec(group_strategy(), 0..24), pick in group_strategy(), use_all: bool) {
        let roster: Vec<Athlete> = groups
            .iter()
            .enumerate()
            .map(|(i, g)| athlete(&format!("Athlete{i}"), *g))
            .collect();

        let filter = if use_all { GroupFilter::All } else { GroupFilter::Group(pick) };
        let expected: Vec<Uuid> = roster
            .iter()
            .filter(|a| filter.matches(a))
            .map(|a| a.id)
            .collect();

        let mut store = RosterStore::new(roster);
        store.set_filter(filter);

        let once: Vec<Uuid> = store.filtered().iter().map(|a| a.id).collect();
        prop_assert_eq!(&once, &expected);

        // Idempotent under repeated filtering
        store.set_filter(filter);
        let twice: Vec<Uuid> = store.filtered().iter().map(|a| a.id).collect();
        prop_assert_eq!(&twice, &once);
    }
}
