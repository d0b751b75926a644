// UI module for rendering the TUI.
// Draws the profile, projects constellation, skills, and activity views.

mod constellation;
mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use starmap::Provenance;
use starmap::derive::ProjectSelection;

use crate::app::{App, Tab};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Profile => draw_profile_tab(frame, app, area),
        Tab::Projects => draw_projects_tab(frame, app, area),
        Tab::Skills => draw_skills_tab(frame, app, area),
        Tab::Activity => list::render_activity_list(
            frame,
            &app.presentation.timeline,
            &mut app.activity_state,
            area,
        ),
    }
}

fn draw_profile_tab(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.presentation.summary;
    let stat = |value: u64, label: &str| {
        vec![
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}   ", label)),
        ]
    };

    let mut stats = stat(summary.repo_count, "repos");
    stats.extend(stat(summary.follower_count, "followers"));
    stats.extend(stat(summary.total_stars, "stars"));

    let mut lines = vec![
        Line::from(Span::styled(
            summary.display_name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(summary.bio.clone()),
        Line::from(""),
        Line::from(stats),
        Line::from(""),
        Line::styled(
            summary.profile_url.clone(),
            Style::default().fg(Color::Blue),
        ),
    ];
    if !summary.avatar_ref.is_empty() {
        lines.push(Line::styled(
            format!("avatar: {}", summary.avatar_ref),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Profile "));
    frame.render_widget(paragraph, area);
}

fn draw_projects_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let projects = match &app.presentation.projects {
        ProjectSelection::Empty => {
            list::render_empty(
                frame,
                area,
                " Projects ",
                "No projects to showcase yet",
            );
            return;
        }
        ProjectSelection::Projects(projects) => projects,
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    list::render_projects_list(frame, projects, &mut app.projects_state, chunks[0]);
    constellation::render_constellation(
        frame,
        &app.presentation.constellation,
        projects,
        app.projects_state.selected(),
        chunks[1],
    );
}

fn draw_skills_tab(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    list::render_skill_bars(frame, &app.presentation.skill_bars, chunks[0]);

    let rows: Vec<Row> = app
        .presentation
        .skill_orbits
        .iter()
        .map(|orbit| {
            Row::new(vec![
                Cell::from(Span::styled(
                    orbit.name.clone(),
                    Style::default().fg(list::hex_color(&orbit.color)),
                )),
                Cell::from(orbit.radius.to_string()),
                Cell::from(format!("{:.0}", orbit.planet_size)),
                Cell::from(format!("{}s", orbit.period_secs)),
                Cell::from(format!("{}°", orbit.start_angle_deg)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(10),
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new(vec!["Language", "Radius", "Size", "Period", "Angle"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(" Orbits "));
    frame.render_widget(table, chunks[1]);
}

/// Draw the status bar with data provenance and key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (marker, color) = match app.presentation.provenance {
        Provenance::Live => ("● live", Color::Green),
        Provenance::Cached => ("◐ cached", Color::Yellow),
        Provenance::Static => ("○ offline snapshot", Color::Red),
    };

    let status = Line::from(vec![
        Span::styled(format!(" {} ", marker), Style::default().fg(color)),
        Span::raw(format!(
            "│ {} · {} repositories · {} languages ",
            app.dataset.identity.id,
            app.dataset.repositories.len(),
            app.dataset.languages.len()
        )),
        Span::styled(
            "│ Tab: switch  j/k: move  r: re-roll  q: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}
