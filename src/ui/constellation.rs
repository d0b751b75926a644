// Constellation canvas.
// Plots project positions and connectors from the derived layout.

use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        *,
    },
};

use starmap::derive::{Constellation, ProjectEntry};

use super::list::hex_color;

/// Layout y grows downward; canvas y grows upward.
fn flip(y: f64) -> f64 {
    100.0 - y
}

pub fn render_constellation(
    frame: &mut Frame,
    constellation: &Constellation,
    projects: &[ProjectEntry],
    selected: Option<usize>,
    area: Rect,
) {
    let positions = &constellation.positions;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Constellation (r to re-roll) "),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, 100.0])
        .y_bounds([0.0, 100.0])
        .paint(|ctx| {
            for &(i, j) in &constellation.connectors {
                let (Some(a), Some(b)) = (positions.get(i), positions.get(j)) else {
                    continue;
                };
                ctx.draw(&CanvasLine {
                    x1: a.x,
                    y1: flip(a.y),
                    x2: b.x,
                    y2: flip(b.y),
                    color: Color::DarkGray,
                });
            }
            ctx.layer();

            for (i, (point, project)) in positions.iter().zip(projects).enumerate() {
                let mut style = Style::default().fg(hex_color(&project.color));
                if selected == Some(i) {
                    style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                ctx.print(
                    point.x,
                    flip(point.y),
                    Span::styled(format!("✦ {}", project.name), style),
                );
            }
        });

    frame.render_widget(canvas, area);
}
