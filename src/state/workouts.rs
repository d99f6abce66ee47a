use chrono::{Local, NaiveDate};

use crate::models::{EventGroup, Intensity, TrainingPhase, Workout};
use crate::services::GenerationOutcome;

/// How many draft characters survive into the saved description
const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Which creation panel is showing. Switching is a view toggle over two
/// independently retained drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateMode {
    Assisted,
    Manual,
}

/// Assisted-generation request form
#[derive(Debug, Clone)]
pub struct PlanRequestForm {
    pub group: EventGroup,
    pub phase: TrainingPhase,
    pub focus: String,
}

impl Default for PlanRequestForm {
    fn default() -> Self {
        Self {
            group: EventGroup::Sprints,
            phase: TrainingPhase::PreSeason,
            focus: "Endurance".to_string(),
        }
    }
}

/// Assisted-path lifecycle: composing, request in flight, or a returned
/// draft awaiting accept/discard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DraftState {
    #[default]
    Idle,
    Generating,
    Reviewing(GenerationOutcome),
}

/// Manual-entry form
#[derive(Debug, Clone)]
pub struct ManualForm {
    pub title: String,
    pub date: NaiveDate,
    pub group: EventGroup,
    pub description: String,
    pub intensity: Intensity,
}

impl ManualForm {
    fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date: today,
            group: EventGroup::Sprints,
            description: String::new(),
            intensity: Intensity::Medium,
        }
    }
}

/// Owns the workout list and both creation workflows.
///
/// The list is kept most-recent-first; workouts are never mutated after
/// creation and never deleted.
#[derive(Debug)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    mode: CreateMode,
    pub plan_request: PlanRequestForm,
    draft: DraftState,
    pub manual: ManualForm,
}

impl WorkoutStore {
    pub fn new(seed: Vec<Workout>) -> Self {
        Self {
            workouts: seed,
            mode: CreateMode::Assisted,
            plan_request: PlanRequestForm::default(),
            draft: DraftState::Idle,
            manual: ManualForm::new(Local::now().date_naive()),
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn mode(&self) -> CreateMode {
        self.mode
    }

    /// Toggle the creation panel. Discards an in-progress generated draft;
    /// the manual form draft is always retained.
    pub fn set_mode(&mut self, mode: CreateMode) {
        if self.mode != mode {
            self.mode = mode;
            self.draft = DraftState::Idle;
        }
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn is_generating(&self) -> bool {
        self.draft == DraftState::Generating
    }

    /// Move to the Generating state and hand back a snapshot of the request
    /// form. Returns `None` while a request is already outstanding; callers
    /// must not issue a second one.
    pub fn begin_generation(&mut self) -> Option<PlanRequestForm> {
        if self.is_generating() {
            return None;
        }
        self.draft = DraftState::Generating;
        Some(self.plan_request.clone())
    }

    /// Deliver a finished generation. A completion that arrives after the
    /// user left the Generating state (mode switch) is dropped.
    pub fn complete_generation(&mut self, outcome: GenerationOutcome) {
        if self.is_generating() {
            self.draft = DraftState::Reviewing(outcome);
        }
    }

    /// The draft under review, if any
    pub fn reviewing(&self) -> Option<&GenerationOutcome> {
        match &self.draft {
            DraftState::Reviewing(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Whether the current draft may be saved as a workout. Placeholder
    /// text from a failed generation can only be discarded.
    pub fn can_accept_draft(&self) -> bool {
        matches!(&self.draft, DraftState::Reviewing(outcome) if outcome.is_generated())
    }

    /// Save the reviewed draft as a new workout at the head of the list
    /// and clear the draft. Refuses non-success drafts.
    pub fn accept_draft(&mut self) -> bool {
        let DraftState::Reviewing(outcome) = &self.draft else {
            return false;
        };
        let Some(text) = outcome.text() else {
            return false;
        };

        let preview: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
        let workout = Workout::new(
            format!("{} Session", self.plan_request.focus),
            Local::now().date_naive(),
            self.plan_request.group,
            format!("{preview}..."),
            Intensity::High,
            true,
        );

        self.workouts.insert(0, workout);
        self.draft = DraftState::Idle;
        true
    }

    /// Drop the reviewed draft without creating a workout
    pub fn discard_draft(&mut self) {
        if matches!(self.draft, DraftState::Reviewing(_)) {
            self.draft = DraftState::Idle;
        }
    }

    /// Save the manual form as a new workout at the head of the list.
    /// Silently declines when `title` or `description` is empty. On success
    /// only `title` and `description` reset; the other fields persist for
    /// faster re-entry.
    pub fn submit_manual(&mut self) -> bool {
        if self.manual.title.is_empty() || self.manual.description.is_empty() {
            return false;
        }

        let workout = Workout::new(
            self.manual.title.clone(),
            self.manual.date,
            self.manual.group,
            self.manual.description.clone(),
            self.manual.intensity,
            false,
        );

        self.workouts.insert(0, workout);
        self.manual.title.clear();
        self.manual.description.clear();
        true
    }
}
