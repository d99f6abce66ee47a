use chrono::Duration;
use crossterm::event::KeyCode;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::data;
use crate::services::{GenerationOutcome, GenerationService, ShareService};
use crate::state::{CreateMode, InsightState, RosterStore, ScheduleStore, WorkoutStore};

/// Top-level dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Roster,
    Performance,
    Training,
    Schedule,
}

/// Completed background generation call, delivered to the event loop
#[derive(Debug)]
pub enum Completion {
    Plan(GenerationOutcome),
    Analysis(GenerationOutcome),
}

/// Training-view form fields in focus order. Assisted and manual panels
/// keep independent focus positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistedField {
    Group,
    Phase,
    Focus,
}

impl AssistedField {
    const ORDER: [AssistedField; 3] = [
        AssistedField::Group,
        AssistedField::Phase,
        AssistedField::Focus,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualField {
    Title,
    Date,
    Group,
    Description,
    Intensity,
}

impl ManualField {
    const ORDER: [ManualField; 5] = [
        ManualField::Title,
        ManualField::Date,
        ManualField::Group,
        ManualField::Description,
        ManualField::Intensity,
    ];
}

/// Application state for the TUI dashboard.
///
/// The root controller: owns every store, the current view selection and
/// the async bridge for in-flight generation calls. Views never talk to
/// each other; everything goes through here.
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Currently selected view
    pub current_view: View,
    /// Show help overlay
    pub show_help: bool,
    /// One-line confirmation shown in the status bar
    pub status: Option<String>,

    pub roster: RosterStore,
    pub workouts: WorkoutStore,
    pub insights: InsightState,
    pub schedule: ScheduleStore,

    /// Focused assisted-form field
    pub assisted_focus: AssistedField,
    /// Focused manual-form field
    pub manual_focus: ManualField,
    /// Selected row in the workout list
    pub workout_selected: usize,

    generation: GenerationService,
    share: ShareService,
    runtime: Handle,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl App {
    /// Create app state seeded with the sample datasets
    pub fn new(config: &AppConfig, runtime: Handle) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            current_view: View::Roster,
            show_help: false,
            status: None,
            roster: RosterStore::new(data::seed_roster()),
            workouts: WorkoutStore::new(data::seed_workouts()),
            insights: InsightState::new(
                "Jordan Miller",
                "100m Dash",
                data::seed_performance_series(),
            ),
            schedule: ScheduleStore::new(data::seed_calendar()),
            assisted_focus: AssistedField::Group,
            manual_focus: ManualField::Title,
            workout_selected: 0,
            generation: GenerationService::new(config.gemini_api_key.clone()),
            share: ShareService::default(),
            runtime,
            completions_tx,
            completions_rx,
        }
    }

    /// Drain finished generation calls into the stores. Called once per
    /// event-loop tick.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            match completion {
                Completion::Plan(outcome) => self.workouts.complete_generation(outcome),
                Completion::Analysis(outcome) => self.insights.complete_analysis(outcome),
            }
        }
    }

    /// Whether typed characters currently go into a text field
    fn is_editing_text(&self) -> bool {
        if self.current_view != View::Training {
            return false;
        }
        match self.workouts.mode() {
            CreateMode::Assisted => self.assisted_focus == AssistedField::Focus,
            CreateMode::Manual => matches!(
                self.manual_focus,
                ManualField::Title | ManualField::Description
            ),
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) {
        // Help overlay takes precedence
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        // Text entry captures printable characters and backspace
        if self.is_editing_text() {
            match key {
                KeyCode::Char(c) => {
                    self.edit_text(|s| s.push(c));
                    return;
                }
                KeyCode::Backspace => {
                    self.edit_text(|s| {
                        s.pop();
                    });
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('1') => self.current_view = View::Roster,
            KeyCode::Char('2') => self.current_view = View::Performance,
            KeyCode::Char('3') => self.current_view = View::Training,
            KeyCode::Char('4') => self.current_view = View::Schedule,
            KeyCode::Esc => self.status = None,
            _ => match self.current_view {
                View::Roster => self.handle_roster_key(key),
                View::Performance => self.handle_performance_key(key),
                View::Training => self.handle_training_key(key),
                View::Schedule => {}
            },
        }
    }

    fn handle_roster_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Char('h') => {
                let filter = self.roster.filter().prev();
                self.roster.set_filter(filter);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let filter = self.roster.filter().next();
                self.roster.set_filter(filter);
            }
            _ => {}
        }
    }

    fn handle_performance_key(&mut self, key: KeyCode) {
        if let KeyCode::Char('a') = key {
            self.trigger_analysis();
        }
    }

    fn handle_training_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => {
                let next = match self.workouts.mode() {
                    CreateMode::Assisted => CreateMode::Manual,
                    CreateMode::Manual => CreateMode::Assisted,
                };
                self.workouts.set_mode(next);
            }
            KeyCode::Up => self.move_focus(-1),
            KeyCode::Down => self.move_focus(1),
            KeyCode::Left => self.cycle_field(-1),
            KeyCode::Right => self.cycle_field(1),
            KeyCode::Enter => match self.workouts.mode() {
                CreateMode::Assisted => self.trigger_generate(),
                CreateMode::Manual => {
                    if self.workouts.submit_manual() {
                        self.workout_selected = 0;
                        self.status = Some("Workout added".to_string());
                    }
                }
            },
            KeyCode::Char('a') => {
                if self.workouts.accept_draft() {
                    self.workout_selected = 0;
                    self.status = Some("Workout saved to calendar".to_string());
                }
            }
            KeyCode::Char('d') => self.workouts.discard_draft(),
            KeyCode::Char('s') => self.share_selected(),
            KeyCode::Char('k') => {
                self.workout_selected = self.workout_selected.saturating_sub(1);
            }
            KeyCode::Char('j') => {
                let last = self.workouts.workouts().len().saturating_sub(1);
                if self.workout_selected < last {
                    self.workout_selected += 1;
                }
            }
            _ => {}
        }
    }

    fn move_focus(&mut self, delta: isize) {
        match self.workouts.mode() {
            CreateMode::Assisted => {
                let order = AssistedField::ORDER;
                let idx = order
                    .iter()
                    .position(|f| *f == self.assisted_focus)
                    .unwrap_or(0) as isize;
                let next = (idx + delta).rem_euclid(order.len() as isize) as usize;
                self.assisted_focus = order[next];
            }
            CreateMode::Manual => {
                let order = ManualField::ORDER;
                let idx = order
                    .iter()
                    .position(|f| *f == self.manual_focus)
                    .unwrap_or(0) as isize;
                let next = (idx + delta).rem_euclid(order.len() as isize) as usize;
                self.manual_focus = order[next];
            }
        }
    }

    /// Cycle the value of the focused enumerated field, or step the manual
    /// date by one day
    fn cycle_field(&mut self, delta: isize) {
        match self.workouts.mode() {
            CreateMode::Assisted => match self.assisted_focus {
                AssistedField::Group => {
                    self.workouts.plan_request.group =
                        cycle(&crate::models::EventGroup::ALL, self.workouts.plan_request.group, delta);
                }
                AssistedField::Phase => {
                    self.workouts.plan_request.phase =
                        cycle(&crate::models::TrainingPhase::ALL, self.workouts.plan_request.phase, delta);
                }
                AssistedField::Focus => {}
            },
            CreateMode::Manual => match self.manual_focus {
                ManualField::Group => {
                    self.workouts.manual.group =
                        cycle(&crate::models::EventGroup::ALL, self.workouts.manual.group, delta);
                }
                ManualField::Intensity => {
                    self.workouts.manual.intensity =
                        cycle(&crate::models::Intensity::ALL, self.workouts.manual.intensity, delta);
                }
                ManualField::Date => {
                    self.workouts.manual.date =
                        self.workouts.manual.date + Duration::days(delta as i64);
                }
                ManualField::Title | ManualField::Description => {}
            },
        }
    }

    fn edit_text(&mut self, f: impl FnOnce(&mut String)) {
        match self.workouts.mode() {
            CreateMode::Assisted => f(&mut self.workouts.plan_request.focus),
            CreateMode::Manual => match self.manual_focus {
                ManualField::Title => f(&mut self.workouts.manual.title),
                ManualField::Description => f(&mut self.workouts.manual.description),
                _ => {}
            },
        }
    }

    /// Kick off an assisted plan request. The store refuses a second
    /// request while one is outstanding.
    fn trigger_generate(&mut self) {
        let Some(request) = self.workouts.begin_generation() else {
            return;
        };

        let service = self.generation.clone();
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let outcome = service
                .generate_workout_plan(request.group, request.phase, &request.focus)
                .await;
            let _ = tx.send(Completion::Plan(outcome));
        });
    }

    /// Kick off a performance analysis; same single-flight rule
    fn trigger_analysis(&mut self) {
        let Some(request) = self.insights.begin_analysis() else {
            return;
        };

        let service = self.generation.clone();
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let outcome = service
                .analyze_performance(&request.athlete_name, &request.event_name, &request.series)
                .await;
            let _ = tx.send(Completion::Analysis(outcome));
        });
    }

    fn share_selected(&mut self) {
        let Some(workout) = self.workouts.workouts().get(self.workout_selected).cloned() else {
            return;
        };
        if self.share.share_workout(&workout) {
            self.status = Some("Workout details copied to clipboard".to_string());
        }
    }
}

/// Step through a closed enumeration's display order
fn cycle<T: Copy + PartialEq>(order: &[T], current: T, delta: isize) -> T {
    let idx = order.iter().position(|v| *v == current).unwrap_or(0) as isize;
    let next = (idx + delta).rem_euclid(order.len() as isize) as usize;
    order[next]
}
