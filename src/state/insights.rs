use crate::models::PerformanceStat;
use crate::services::GenerationOutcome;

/// Analysis request snapshot handed to the spawned client call
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub athlete_name: String,
    pub event_name: String,
    pub series: Vec<PerformanceStat>,
}

/// State of the performance-insight panel: the charted series plus the
/// single-flight analysis slot.
#[derive(Debug)]
pub struct InsightState {
    athlete_name: String,
    event_name: String,
    series: Vec<PerformanceStat>,
    analysis: Option<GenerationOutcome>,
    analyzing: bool,
}

impl InsightState {
    pub fn new(
        athlete_name: impl Into<String>,
        event_name: impl Into<String>,
        series: Vec<PerformanceStat>,
    ) -> Self {
        Self {
            athlete_name: athlete_name.into(),
            event_name: event_name.into(),
            series,
            analysis: None,
            analyzing: false,
        }
    }

    pub fn athlete_name(&self) -> &str {
        &self.athlete_name
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn series(&self) -> &[PerformanceStat] {
        &self.series
    }

    pub fn analysis(&self) -> Option<&GenerationOutcome> {
        self.analysis.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Enter the in-flight state and hand back the request snapshot.
    /// Returns `None` while a request is already outstanding.
    pub fn begin_analysis(&mut self) -> Option<AnalysisRequest> {
        if self.analyzing {
            return None;
        }
        self.analyzing = true;
        Some(AnalysisRequest {
            athlete_name: self.athlete_name.clone(),
            event_name: self.event_name.clone(),
            series: self.series.clone(),
        })
    }

    /// Deliver a finished analysis into the result slot
    pub fn complete_analysis(&mut self, outcome: GenerationOutcome) {
        if self.analyzing {
            self.analyzing = false;
            self.analysis = Some(outcome);
        }
    }
}
