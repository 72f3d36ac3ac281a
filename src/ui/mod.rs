//! User interface rendering.

mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::{App, View};
use crate::charts;
use crate::tooth;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
    Frame,
};

pub use formatters::{format_axis_label, format_progress};
pub use theme::{blend, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg0).fg(colors.fg0)),
        f.area(),
    );

    // Tabs, content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app.view, &colors);

    match app.view {
        View::Solubility => charts::ui::draw_solubility(f, chunks[1], &app.solubility, &colors),
        View::Coatings => charts::ui::draw_coatings(f, chunks[1], &colors),
        View::Compatibility => charts::ui::draw_compatibility(f, chunks[1], &colors),
        View::Stages => tooth::ui::draw_stages(f, chunks[1], &app.stages, &colors),
        View::Animation => tooth::ui::draw_animation(f, chunks[1], &app.sim, &colors),
        View::Conclusions => charts::ui::draw_conclusions(f, chunks[1], &colors),
    }

    status_bar::draw_status(f, chunks[2], app, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.view, &colors);
}

fn draw_tabs(f: &mut Frame<'_>, area: Rect, view: View, colors: &ThemeColors) {
    let titles: Vec<Line<'_>> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(view.index())
        .style(Style::default().fg(colors.fg0).bg(colors.bg0))
        .highlight_style(
            Style::default()
                .fg(colors.yellow)
                .bg(colors.bg1)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");

    f.render_widget(tabs, area);
}
