use assert_matches::assert_matches;
use chrono::Local;
use pretty_assertions::assert_eq;

use track_command::data::seed_workouts;
use track_command::models::{EventGroup, Intensity, TrainingPhase};
use track_command::services::GenerationOutcome;
use track_command::state::{CreateMode, DraftState, WorkoutStore};

fn long_draft() -> String {
    "Warm-up: 2x400m easy jog, dynamic drills. Main set: 6x60m block starts at 100%.".to_string()
}

/// Drive the assisted path to a reviewing draft
fn review(store: &mut WorkoutStore, outcome: GenerationOutcome) {
    assert!(store.begin_generation().is_some());
    store.complete_generation(outcome);
}

#[test]
fn creations_keep_most_recent_first_order() {
    let seed_count = seed_workouts().len();
    let mut store = WorkoutStore::new(seed_workouts());

    store.manual.title = "Hill Repeats".to_string();
    store.manual.description = "6x200m uphill".to_string();
    assert!(store.submit_manual());

    store.plan_request.focus = "Block Starts".to_string();
    review(&mut store, GenerationOutcome::Generated(long_draft()));
    assert!(store.accept_draft());

    store.manual.title = "Tempo Run".to_string();
    store.manual.description = "4x1000m @ threshold".to_string();
    assert!(store.submit_manual());

    let titles: Vec<&str> = store.workouts().iter().map(|w| w.title.as_str()).collect();
    assert_eq!(titles[0], "Tempo Run");
    assert_eq!(titles[1], "Block Starts Session");
    assert_eq!(titles[2], "Hill Repeats");
    assert_eq!(store.workouts().len(), seed_count + 3);
}

#[test]
fn accepted_draft_becomes_a_high_intensity_ai_workout() {
    let mut store = WorkoutStore::new(vec![]);
    store.plan_request.group = EventGroup::Sprints;
    store.plan_request.phase = TrainingPhase::PreSeason;
    store.plan_request.focus = "Starts".to_string();

    let draft = long_draft();
    assert!(draft.chars().count() >= 50);
    review(&mut store, GenerationOutcome::Generated(draft.clone()));

    assert!(store.accept_draft());

    let workout = &store.workouts()[0];
    let expected: String = draft.chars().take(50).collect();
    assert_eq!(workout.description, format!("{expected}..."));
    assert_eq!(workout.title, "Starts Session");
    assert_eq!(workout.group, EventGroup::Sprints);
    assert_eq!(workout.intensity, Intensity::High);
    assert_eq!(workout.date, Local::now().date_naive());
    assert!(workout.ai_generated);

    // Draft slot is cleared
    assert_eq!(*store.draft(), DraftState::Idle);
}

#[test]
fn manual_submit_declines_silently_on_missing_fields() {
    let mut store = WorkoutStore::new(seed_workouts());
    let before = store.workouts().len();

    store.manual.title = String::new();
    store.manual.description = "6x200m uphill".to_string();
    assert!(!store.submit_manual());
    assert_eq!(store.workouts().len(), before);
    // Form is untouched
    assert_eq!(store.manual.description, "6x200m uphill");

    store.manual.title = "Hill Repeats".to_string();
    store.manual.description = String::new();
    assert!(!store.submit_manual());
    assert_eq!(store.workouts().len(), before);
    assert_eq!(store.manual.title, "Hill Repeats");
}

#[test]
fn manual_submit_prepends_and_resets_text_fields_only() {
    let mut store = WorkoutStore::new(seed_workouts());
    store.manual.title = "Hill Repeats".to_string();
    store.manual.description = "6x200m uphill".to_string();
    store.manual.group = EventGroup::Distance;
    store.manual.intensity = Intensity::RacePace;
    let date = store.manual.date;

    assert!(store.submit_manual());

    let workout = &store.workouts()[0];
    assert_eq!(workout.title, "Hill Repeats");
    assert_eq!(workout.description, "6x200m uphill");
    assert_eq!(workout.group, EventGroup::Distance);
    assert_eq!(workout.intensity, Intensity::RacePace);
    assert!(!workout.ai_generated);

    // Text fields reset; the rest persists for faster re-entry
    assert_eq!(store.manual.title, "");
    assert_eq!(store.manual.description, "");
    assert_eq!(store.manual.date, date);
    assert_eq!(store.manual.group, EventGroup::Distance);
    assert_eq!(store.manual.intensity, Intensity::RacePace);
}

#[test]
fn default_manual_form_uses_medium_intensity_and_sprints() {
    let mut store = WorkoutStore::new(vec![]);
    store.manual.title = "Hill Repeats".to_string();
    store.manual.description = "6x200m uphill".to_string();

    assert!(store.submit_manual());

    let workout = &store.workouts()[0];
    assert_eq!(workout.intensity, Intensity::Medium);
    assert_eq!(workout.group, EventGroup::Sprints);
    assert_eq!(workout.date, Local::now().date_naive());
}

#[test]
fn mode_switch_retains_manual_draft_but_discards_generated_draft() {
    let mut store = WorkoutStore::new(vec![]);

    // A half-filled manual form survives trips through assisted mode
    store.set_mode(CreateMode::Manual);
    store.manual.title = "Relay Handoffs".to_string();
    store.manual.description = "4x100m exchanges".to_string();

    store.set_mode(CreateMode::Assisted);
    review(&mut store, GenerationOutcome::Generated(long_draft()));
    assert_matches!(store.draft(), DraftState::Reviewing(_));

    store.set_mode(CreateMode::Manual);
    assert_eq!(*store.draft(), DraftState::Idle);
    assert_eq!(store.manual.title, "Relay Handoffs");
    assert_eq!(store.manual.description, "4x100m exchanges");
}

#[test]
fn only_one_generation_request_at_a_time() {
    let mut store = WorkoutStore::new(vec![]);
    assert!(store.begin_generation().is_some());
    assert!(store.is_generating());
    assert!(store.begin_generation().is_none());

    store.complete_generation(GenerationOutcome::Generated(long_draft()));
    assert!(!store.is_generating());
}

#[test]
fn completion_after_mode_switch_is_dropped() {
    let mut store = WorkoutStore::new(vec![]);
    assert!(store.begin_generation().is_some());

    // User flips to manual while the request is in flight
    store.set_mode(CreateMode::Manual);
    store.complete_generation(GenerationOutcome::Generated(long_draft()));

    assert_eq!(*store.draft(), DraftState::Idle);
}

#[test]
fn failed_generation_can_only_be_discarded() {
    let mut store = WorkoutStore::new(vec![]);
    review(&mut store, GenerationOutcome::Unavailable);

    // The placeholder renders in the draft slot but cannot be saved
    assert_matches!(store.reviewing(), Some(GenerationOutcome::Unavailable));
    assert!(!store.can_accept_draft());
    assert!(!store.accept_draft());
    assert!(store.workouts().is_empty());

    store.discard_draft();
    assert_eq!(*store.draft(), DraftState::Idle);
}

#[test]
fn missing_key_draft_is_not_acceptable_either() {
    let mut store = WorkoutStore::new(vec![]);
    review(&mut store, GenerationOutcome::MissingApiKey);

    assert!(!store.can_accept_draft());
    assert!(!store.accept_draft());
    assert!(store.workouts().is_empty());
}
