use crate::models::{EventGroup, PerformanceStat, TrainingPhase};

/// Role-setting preamble sent with every plan request
pub const PLAN_SYSTEM_INSTRUCTION: &str =
    "You are a professional track coach known for producing champions.";

/// Sampling temperature for plan generation
pub const PLAN_TEMPERATURE: f32 = 0.7;

/// Build the daily-workout prompt. Same inputs always produce the same text.
pub fn workout_plan_prompt(group: EventGroup, phase: TrainingPhase, focus: &str) -> String {
    format!(
        "You are an elite Olympic Track & Field coach. Create a detailed, \
         high-performance daily workout for the {group} group.\n\
         \n\
         Context:\n\
         - Training Phase: {phase}\n\
         - Specific Focus: {focus}\n\
         \n\
         Format the output using simple Markdown. Include:\n\
         1. Warm-up (Drills/Dynamic)\n\
         2. Main Set (Reps, Sets, Rest intervals)\n\
         3. Cool down\n\
         4. Key coaching cues (Motivational and Technical)\n\
         \n\
         Keep the tone intense, professional, and encouraging."
    )
}

/// Build the trend-analysis prompt from a recorded mark series
pub fn performance_analysis_prompt(
    athlete_name: &str,
    event_name: &str,
    series: &[PerformanceStat],
) -> String {
    let data = series
        .iter()
        .map(|s| format!("{}: {}", s.date.format("%m/%d"), s.display_value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze the recent performance progression for athlete {athlete_name} \
         in the {event_name}.\n\
         \n\
         Data:\n\
         {data}\n\
         \n\
         Provide a concise 2-sentence summary of their trend and one specific \
         recommendation for improvement based on general track principles for \
         this event type."
    )
}
