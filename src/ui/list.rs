// List rendering for projects, skills, and activity.
// Provides styled list views with empty states.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use starmap::derive::{ActivityEntry, ProjectEntry, SkillBar};

/// Width of a full skill bar in cells.
const BAR_WIDTH: f64 = 30.0;

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Terminal color for a `#rrggbb` display color.
pub fn hex_color(color: &str) -> Color {
    Color::from_str(color).unwrap_or(Color::Gray)
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(text, area);
}

/// Render the selected projects.
pub fn render_projects_list(
    frame: &mut Frame,
    projects: &[ProjectEntry],
    state: &mut ListState,
    area: Rect,
) {
    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            let mut spans = vec![
                Span::styled("✦ ", Style::default().fg(hex_color(&project.color))),
                Span::styled(
                    project.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ★{} ⑂{}", project.stars, project.forks),
                    Style::default().fg(Color::Yellow),
                ),
            ];
            if !project.language.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", project.language),
                    Style::default().fg(hex_color(&project.color)),
                ));
            }
            spans.push(Span::styled(
                format!("  {}", format_relative_time(&project.updated_at)),
                Style::default().fg(Color::DarkGray),
            ));

            let mut lines = vec![Line::from(spans)];
            if !project.preview.is_empty() {
                lines.push(Line::styled(
                    format!("  {}", project.preview),
                    Style::default().fg(Color::Gray),
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Projects "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, state);
}

/// Render language share bars.
pub fn render_skill_bars(frame: &mut Frame, bars: &[SkillBar], area: Rect) {
    if bars.is_empty() {
        render_empty(frame, area, " Skills ", "No languages detected");
        return;
    }

    let name_width = bars.iter().map(|b| b.name.chars().count()).max().unwrap_or(0);
    let items: Vec<ListItem> = bars
        .iter()
        .map(|bar| {
            let cells = (bar.fill / 100.0 * BAR_WIDTH).round().max(1.0) as usize;
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<width$}  ", bar.name, width = name_width)),
                Span::styled("█".repeat(cells), Style::default().fg(hex_color(&bar.color))),
                Span::styled(
                    format!(" {}%", bar.percent),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list_widget =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Skills "));
    frame.render_widget(list_widget, area);
}

/// Render recent activity.
pub fn render_activity_list(
    frame: &mut Frame,
    entries: &[ActivityEntry],
    state: &mut ListState,
    area: Rect,
) {
    if entries.is_empty() {
        render_empty(frame, area, " Activity ", "No recent activity");
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:<14}", entry.display_date),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    entry.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", entry.url),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Activity "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#dea584"), Color::Rgb(0xde, 0xa5, 0x84));
        assert_eq!(hex_color("#f7df1e"), Color::Rgb(0xf7, 0xdf, 0x1e));
        assert_eq!(hex_color("#8b949e"), Color::Rgb(0x8b, 0x94, 0x9e));
        assert_eq!(hex_color("not a color"), Color::Gray);
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time(&now), "just now");
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::hours(3))),
            "3h ago"
        );
        assert_eq!(
            format_relative_time(&(now - chrono::Duration::days(2))),
            "2d ago"
        );
    }
}
