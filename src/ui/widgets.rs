use chrono::Utc;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Clear, Dataset, GraphType, List, ListItem, Paragraph,
        Widget, Wrap,
    },
};

use super::app::{App, AssistedField, ManualField, View};
use crate::models::{performance_stat::season_best, AthleteStatus, Intensity};
use crate::state::{CreateMode, GroupFilter, InsightState, RosterStore, ScheduleStore};

const ACCENT: Color = Color::Yellow;

/// Render the top navigation bar
pub fn render_nav(area: Rect, buf: &mut Buffer, current: View) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" TRACK COMMAND ")
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    block.render(area, buf);

    let tabs = [
        (View::Roster, "[1] Team Roster"),
        (View::Performance, "[2] Performance"),
        (View::Training, "[3] Training"),
        (View::Schedule, "[4] Schedule"),
    ];

    let mut spans = Vec::new();
    for (view, label) in tabs {
        let style = if view == current {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).render(inner, buf);
}

/// Render the bottom status bar: key hints plus the last confirmation
pub fn render_status_bar(area: Rect, buf: &mut Buffer, app: &App) {
    let hints = match app.current_view {
        View::Roster => "←/→ filter group",
        View::Performance => "a analyze trend",
        View::Training => "Tab mode • ↑/↓ field • Enter generate/add • a accept • d discard • s share",
        View::Schedule => "",
    };

    let mut spans = vec![
        Span::styled(" q quit • ? help • ", Style::default().fg(Color::DarkGray)),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ];

    if app.workouts.is_generating() || app.insights.is_analyzing() {
        spans.push(Span::styled(
            "  ⏳ working...",
            Style::default().fg(ACCENT),
        ));
    }

    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(Color::Green),
        ));
    }

    Paragraph::new(Line::from(spans)).render(area, buf);
}

/// Render the roster view: filter bar plus athlete cards
pub fn render_roster(area: Rect, buf: &mut Buffer, roster: &RosterStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    // Filter bar
    let mut spans = Vec::new();
    for filter in GroupFilter::bar() {
        let style = if filter == roster.filter() {
            Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {filter} "), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans)).render(chunks[0], buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Team Roster ")
        .border_style(Style::default().fg(Color::Gray));

    let items: Vec<ListItem> = roster
        .filtered()
        .into_iter()
        .map(|athlete| {
            let status_color = match athlete.status {
                AthleteStatus::Active => Color::Green,
                AthleteStatus::Injured => Color::Red,
                AthleteStatus::Resting => Color::Yellow,
            };

            let header = Line::from(vec![
                Span::styled(
                    athlete.full_name(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Grade {} • {}", athlete.grade, athlete.group),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  ● {}", athlete.status),
                    Style::default().fg(status_color),
                ),
            ]);

            let events = Line::from(Span::styled(
                format!("    {}", athlete.events.join(", ")),
                Style::default().fg(Color::DarkGray),
            ));

            ListItem::new(vec![header, events])
        })
        .collect();

    if items.is_empty() {
        Paragraph::new("No athletes in this group.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .render(chunks[1], buf);
    } else {
        List::new(items).block(block).render(chunks[1], buf);
    }
}

/// Render the performance view: progression chart plus insight panel
pub fn render_performance(area: Rect, buf: &mut Buffer, insights: &InsightState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let series = insights.series();
    if series.is_empty() {
        Paragraph::new("No recorded marks yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Performance "))
            .render(columns[0], buf);
        return;
    }
    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.value))
        .collect();

    let best = season_best(series)
        .map(|s| s.display_value.clone())
        .unwrap_or_else(|| "-".to_string());

    let title = format!(
        " {} • {} Progression (Season Best: {best}) ",
        insights.athlete_name(),
        insights.event_name(),
    );

    let (min, max) = series.iter().fold((f64::MAX, f64::MIN), |(min, max), s| {
        (min.min(s.value), max.max(s.value))
    });

    let x_labels: Vec<Span> = match (series.first(), series.last()) {
        (Some(first), Some(last)) => vec![
            Span::raw(first.date.format("%m/%d").to_string()),
            Span::raw(last.date.format("%m/%d").to_string()),
        ],
        _ => Vec::new(),
    };

    let datasets = vec![Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(ACCENT))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, points.len().saturating_sub(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([min - 0.2, max + 0.2])
                .labels(vec![
                    Span::raw(format!("{min:.2}")),
                    Span::raw(format!("{max:.2}")),
                ]),
        );
    chart.render(columns[0], buf);

    // Insight panel
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Coach's Insight ")
        .border_style(Style::default().fg(Color::Gray));

    let text = if insights.is_analyzing() {
        Line::from(Span::styled("Analyzing...", Style::default().fg(ACCENT)))
    } else if let Some(analysis) = insights.analysis() {
        Line::from(Span::styled(
            analysis.analysis_text().to_string(),
            Style::default().fg(Color::White),
        ))
    } else {
        Line::from(Span::styled(
            "Press 'a' to ask the AI for a performance analysis identifying trends and plateaus.",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    };

    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(columns[1], buf);
}

/// Render the training view: creator panel, draft review and workout list
pub fn render_training(area: Rect, buf: &mut Buffer, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_creator_panel(columns[0], buf, app);

    let reviewing = app.workouts.reviewing().is_some();
    let right_panels = if reviewing {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Min(0)])
            .split(columns[1])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0)])
            .split(columns[1])
    };

    if reviewing {
        render_draft_panel(right_panels[0], buf, app);
        render_workout_list(right_panels[1], buf, app);
    } else {
        render_workout_list(right_panels[0], buf, app);
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_creator_panel(area: Rect, buf: &mut Buffer, app: &App) {
    let mode = app.workouts.mode();

    let tab = |label: &str, active: bool| {
        Span::styled(
            format!(" {label} "),
            if active {
                Style::default().fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            tab("✦ AI Coach", mode == CreateMode::Assisted),
            Span::raw(" "),
            tab("✎ Manual", mode == CreateMode::Manual),
        ]))
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    let lines = match mode {
        CreateMode::Assisted => {
            let form = &app.workouts.plan_request;
            let generating = app.workouts.is_generating();
            vec![
                Line::from(vec![
                    Span::styled("Target Group: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("◂ {} ▸", form.group),
                        field_style(app.assisted_focus == AssistedField::Group),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Season Phase: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("◂ {} ▸", form.phase),
                        field_style(app.assisted_focus == AssistedField::Phase),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Focus:        ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        form.focus.clone(),
                        field_style(app.assisted_focus == AssistedField::Focus),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    if generating {
                        "⏳ Generating plan..."
                    } else {
                        "[Enter] Generate Plan"
                    },
                    Style::default().fg(if generating { Color::DarkGray } else { ACCENT }),
                )),
            ]
        }
        CreateMode::Manual => {
            let form = &app.workouts.manual;
            vec![
                Line::from(vec![
                    Span::styled("Title:       ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        form.title.clone(),
                        field_style(app.manual_focus == ManualField::Title),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Date:        ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("◂ {} ▸", form.date),
                        field_style(app.manual_focus == ManualField::Date),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Group:       ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("◂ {} ▸", form.group),
                        field_style(app.manual_focus == ManualField::Group),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Description: ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        form.description.clone(),
                        field_style(app.manual_focus == ManualField::Description),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Intensity:   ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("◂ {} ▸", form.intensity),
                        field_style(app.manual_focus == ManualField::Intensity),
                    ),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "[Enter] Add Workout",
                    Style::default().fg(ACCENT),
                )),
            ]
        }
    };

    Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
}

fn render_draft_panel(area: Rect, buf: &mut Buffer, app: &App) {
    let Some(outcome) = app.workouts.reviewing() else {
        return;
    };

    let actions = if app.workouts.can_accept_draft() {
        "[a] Save to Calendar  [d] Discard"
    } else {
        "[d] Discard"
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggested Workout ")
        .title_bottom(Line::from(Span::styled(
            format!(" {actions} "),
            Style::default().fg(ACCENT),
        )))
        .border_style(Style::default().fg(ACCENT));

    let body_style = if app.workouts.can_accept_draft() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Red)
    };

    Paragraph::new(outcome.plan_text().to_string())
        .style(body_style)
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
}

fn render_workout_list(area: Rect, buf: &mut Buffer, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Upcoming Workouts ")
        .border_style(Style::default().fg(Color::Gray));

    let workouts = app.workouts.workouts();
    if workouts.is_empty() {
        Paragraph::new("No workouts scheduled.")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .block(block)
            .render(area, buf);
        return;
    }

    let items: Vec<ListItem> = workouts
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let selected = i == app.workout_selected;
            let marker = if w.ai_generated { " ✦" } else { "" };
            let intensity_color = match w.intensity {
                Intensity::High | Intensity::RacePace => Color::Red,
                _ => ACCENT,
            };

            let title_style = if selected {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            let header = Line::from(vec![
                Span::styled(if selected { "▸ " } else { "  " }, Style::default().fg(ACCENT)),
                Span::styled(format!("{}{marker}", w.title), title_style),
                Span::styled(
                    format!("  [{}]", w.intensity),
                    Style::default().fg(intensity_color),
                ),
            ]);

            let detail = Line::from(Span::styled(
                format!("    {} • {} • {}", w.date, w.group, w.description),
                Style::default().fg(Color::Gray),
            ));

            ListItem::new(vec![header, detail])
        })
        .collect();

    List::new(items).block(block).render(area, buf);
}

/// Render the schedule view, date-ascending with the next meet called out
pub fn render_schedule(area: Rect, buf: &mut Buffer, schedule: &ScheduleStore) {
    let next_meet = schedule.next_meet(Utc::now()).map(|e| e.id);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Schedule ")
        .border_style(Style::default().fg(Color::Gray));

    let items: Vec<ListItem> = schedule
        .events()
        .iter()
        .map(|event| {
            let is_next = next_meet == Some(event.id);
            let kind_color = match event.kind {
                crate::models::SessionKind::Meet => ACCENT,
                crate::models::SessionKind::Meeting => Color::Blue,
                crate::models::SessionKind::Practice => Color::Gray,
            };

            let mut spans = vec![
                Span::styled(
                    event.date.format("%b %d %H:%M").to_string(),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("  "),
                Span::styled(
                    event.title.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  [{}]", event.kind), Style::default().fg(kind_color)),
            ];

            if let Some(location) = &event.location {
                spans.push(Span::styled(
                    format!("  @ {location}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            if is_next {
                spans.push(Span::styled(
                    "  ★ Next Big Meet",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    List::new(items).block(block).render(area, buf);
}

/// Render the help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(ACCENT));

    let lines = vec![
        Line::from(""),
        Line::from("  1-4        switch view"),
        Line::from("  q          quit"),
        Line::from("  ?          toggle this help"),
        Line::from(""),
        Line::from("  Roster:    ←/→ cycle group filter"),
        Line::from("  Stats:     a analyze trend"),
        Line::from("  Training:  Tab switch AI/Manual mode"),
        Line::from("             ↑/↓ move between fields"),
        Line::from("             ←/→ change field value"),
        Line::from("             Enter generate plan / add workout"),
        Line::from("             a accept draft, d discard draft"),
        Line::from("             j/k select workout, s share it"),
        Line::from(""),
    ];

    Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(block)
        .render(area, buf);
}
