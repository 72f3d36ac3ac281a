//! Status bar UI component.

use crate::app::{App, View};
use crate::ui::{format_progress, ThemeColors};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar: message on the left, playback state on the right.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let style = Style::default().fg(colors.fg0).bg(colors.bg1);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(40)])
        .split(area);

    f.render_widget(Paragraph::new(app.status.as_str()).style(style), chunks[0]);

    let playback = if app.view == View::Animation {
        let state = if app.is_finished() {
            "done"
        } else if app.paused {
            "paused"
        } else {
            "playing"
        };
        let phase = app.sim.phase().map(|p| p.name()).unwrap_or("Ready");
        format!(
            "{} | {} | {} ",
            phase,
            format_progress(app.frames_played(), app.options.animation.total_frames),
            state
        )
    } else {
        format!("seed {} ", app.options.seed)
    };

    f.render_widget(
        Paragraph::new(playback)
            .style(style)
            .alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
