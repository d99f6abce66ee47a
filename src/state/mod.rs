// View-local state owned by the root controller

pub mod insights;
pub mod roster;
pub mod schedule;
pub mod workouts;

pub use insights::InsightState;
pub use roster::{GroupFilter, RosterStore};
pub use schedule::ScheduleStore;
pub use workouts::{CreateMode, DraftState, ManualForm, PlanRequestForm, WorkoutStore};
