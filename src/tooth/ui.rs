//! Tooth cross-section rendering on a braille canvas.

use ndarray::Array1;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as Segment, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use super::profile::ToothProfile;
use super::sim::{Tone, ToothSimulation, ANNOTATION_TEXT};
use super::stages::StageSet;
use crate::charts::ui::draw_notes;
use crate::charts::EROSION_MECHANISM;
use crate::ui::{blend, ThemeColors};

/// Plot window, matching the figure limits of the scene.
const X_BOUNDS: [f64; 2] = [-3.0, 3.0];
const Y_BOUNDS: [f64; 2] = [-2.0, 4.0];
const ANNOTATION_Y: f64 = 2.5;

/// Everything needed to paint one cross-section.
struct Scene<'a> {
    profile: &'a ToothProfile,
    enamel: &'a Array1<f64>,
    eroded: bool,
    coating: Option<&'a Array1<f64>>,
    particles: &'a [(f64, f64)],
    particle_alpha: f64,
}

/// Map a title tone to a theme color.
pub fn tone_color(tone: Tone, colors: &ThemeColors) -> Color {
    match tone {
        Tone::Neutral => colors.fg0,
        Tone::Alert => colors.red,
        Tone::Warning => colors.orange,
        Tone::Calm => colors.blue,
    }
}

/// Draw the animated scene.
pub fn draw_animation(f: &mut Frame<'_>, area: Rect, sim: &ToothSimulation, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" {} ", sim.title()))
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(tone_color(sim.tone(), colors))
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let particles = if sim.particles_visible() {
        sim.particles()
    } else {
        Vec::new()
    };
    let scene = Scene {
        profile: sim.profile(),
        enamel: sim.enamel(),
        eroded: sim.is_eroded(),
        coating: sim.coating(),
        particles: &particles,
        particle_alpha: sim.particle_alpha(),
    };

    let plot = equal_aspect(chunks[0]);
    let annotation = sim.is_annotated().then(|| {
        // Canvas units per terminal column, to center the text.
        let per_col = (X_BOUNDS[1] - X_BOUNDS[0]) / f64::from(plot.width.max(1));
        let x = -(ANNOTATION_TEXT.chars().count() as f64) * per_col / 2.0;
        (x.max(X_BOUNDS[0]), ANNOTATION_Y)
    });

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors.bg0)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(|ctx| {
            paint_scene(ctx, &scene, colors);
            if let Some((x, y)) = annotation {
                ctx.print(
                    x,
                    y,
                    Span::styled(ANNOTATION_TEXT, Style::default().fg(colors.blue)),
                );
            }
        });
    f.render_widget(canvas, plot);

    draw_legend(f, chunks[1], sim.is_eroded(), sim.coating().is_some(), colors);
}

/// Draw the three summary panels side by side, with the mechanism notes below.
pub fn draw_stages(f: &mut Frame<'_>, area: Rect, set: &StageSet, colors: &ThemeColors) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[0]);

    for (stage, column) in set.stages.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", stage.title))
            .title_alignment(Alignment::Center)
            .title_style(
                Style::default()
                    .fg(tone_color(stage.tone, colors))
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.bg2))
            .style(Style::default().bg(colors.bg0));
        let inner = block.inner(*column);
        f.render_widget(block, *column);

        let scene = Scene {
            profile: &set.profile,
            enamel: &stage.enamel,
            eroded: stage.eroded,
            coating: stage.coating.as_ref(),
            particles: &stage.particles,
            particle_alpha: 0.7,
        };
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(colors.bg0)
            .x_bounds(X_BOUNDS)
            .y_bounds(Y_BOUNDS)
            .paint(|ctx| paint_scene(ctx, &scene, colors));
        f.render_widget(canvas, equal_aspect(inner));
    }

    draw_notes(
        f,
        rows[1],
        "Erosion and Recovery Mechanism",
        &EROSION_MECHANISM,
        colors,
    );
}

fn paint_scene(ctx: &mut Context<'_>, scene: &Scene<'_>, colors: &ThemeColors) {
    let profile = scene.profile;
    let floor = Array1::from_elem(profile.len(), profile.root_y);

    fill_between(ctx, &profile.x, &floor, &profile.dentin, colors.dentin);
    ctx.layer();

    let enamel_color = if scene.eroded {
        colors.enamel_eroded
    } else {
        colors.enamel
    };
    fill_between(ctx, &profile.x, &profile.dentin, scene.enamel, enamel_color);
    ctx.layer();

    if let Some(coating) = scene.coating {
        fill_between(ctx, &profile.x, scene.enamel, coating, colors.coating);
        ctx.layer();
    }

    for i in 1..profile.len() {
        ctx.draw(&Segment::new(
            profile.x[i - 1],
            scene.enamel[i - 1],
            profile.x[i],
            scene.enamel[i],
            colors.outline,
        ));
    }

    if !scene.particles.is_empty() && scene.particle_alpha > 0.0 {
        ctx.layer();
        ctx.draw(&Points {
            coords: scene.particles,
            color: blend(colors.acid, colors.bg0, scene.particle_alpha),
        });
    }
}

/// Shade the band between two curves with vertical strokes, one per sample.
fn fill_between(
    ctx: &mut Context<'_>,
    x: &Array1<f64>,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    color: Color,
) {
    for ((&xi, &lo), &hi) in x.iter().zip(lower.iter()).zip(upper.iter()) {
        if hi > lo {
            ctx.draw(&Segment::new(xi, lo, xi, hi, color));
        }
    }
}

fn draw_legend(
    f: &mut Frame<'_>,
    area: Rect,
    eroded: bool,
    with_coating: bool,
    colors: &ThemeColors,
) {
    let enamel = if eroded {
        colors.enamel_eroded
    } else {
        colors.enamel
    };
    let mut spans = vec![
        Span::styled("■ ", Style::default().fg(colors.dentin)),
        Span::raw("Dentin  "),
        Span::styled("■ ", Style::default().fg(enamel)),
        Span::raw("Enamel  "),
        Span::styled("• ", Style::default().fg(colors.acid)),
        Span::raw("Acid (H+)"),
    ];
    if with_coating {
        spans.push(Span::styled("  ■ ", Style::default().fg(colors.coating)));
        spans.push(Span::raw("Protective Coating"));
    }

    let legend = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(colors.fg0))
        .alignment(Alignment::Right);
    f.render_widget(legend, area);
}

/// Largest centered sub-area in which one x unit and one y unit look the same
/// size. Terminal cells are about twice as tall as they are wide.
pub fn equal_aspect(area: Rect) -> Rect {
    let x_span = X_BOUNDS[1] - X_BOUNDS[0];
    let y_span = Y_BOUNDS[1] - Y_BOUNDS[0];
    let cols_per_row = 2.0 * x_span / y_span;

    let width = (f64::from(area.height) * cols_per_row).min(f64::from(area.width));
    let height = (width / cols_per_row).round() as u16;
    let width = width.round() as u16;

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn legend_swatches(eroded: bool, colors: &ThemeColors) -> Vec<Color> {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).expect("test terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                draw_legend(f, area, eroded, false, colors);
            })
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "■")
            .map(|cell| cell.fg)
            .collect()
    }

    #[test]
    fn legend_swatch_follows_enamel_state() {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);

        let healthy = legend_swatches(false, &colors);
        assert_eq!(healthy, vec![colors.dentin, colors.enamel]);

        let eroded = legend_swatches(true, &colors);
        assert_eq!(eroded, vec![colors.dentin, colors.enamel_eroded]);
    }

    #[test]
    fn equal_aspect_fits_wide_areas_by_height() {
        let r = equal_aspect(Rect::new(0, 0, 100, 20));
        assert_eq!(r.height, 20);
        assert_eq!(r.width, 40);
        assert_eq!(r.x, 30);
    }

    #[test]
    fn equal_aspect_fits_tall_areas_by_width() {
        let r = equal_aspect(Rect::new(4, 2, 30, 40));
        assert_eq!(r.width, 30);
        assert_eq!(r.height, 15);
        assert_eq!(r.x, 4);
        assert_eq!(r.y, 2 + 12);
    }
}
