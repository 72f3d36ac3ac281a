//! Chart rendering for the supporting views.

use super::{
    axis_angle, radar_points, SolubilityCurves, COATING_EFFECTS, COATING_PROPOSAL, COMPATIBILITY,
    COMPATIBILITY_PROPERTIES, CRITICAL_PH, MAX_SCORE, MECHANISM_SUMMARY, SOLUBILITY_LIMIT,
};
use crate::ui::{format_axis_label, ThemeColors};
use ndarray::Array1;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as Segment, Points},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
        Wrap,
    },
    Frame,
};

/// pH range shown on the solubility chart.
const PH_RANGE: (f64, f64) = (3.0, 8.0);

/// Chart x position of `ph`. The axis runs from basic on the left to acidic on the right.
fn ph_to_x(ph: f64) -> f64 {
    PH_RANGE.0 + PH_RANGE.1 - ph
}

/// Chart points of a curve, cut where it leaves the top of the plot.
fn visible_series(ph: &Array1<f64>, values: &Array1<f64>) -> Vec<(f64, f64)> {
    let mut series = Vec::with_capacity(ph.len());
    let mut prev: Option<(f64, f64)> = None;

    for (&p, &v) in ph.iter().zip(values.iter()) {
        if let Some((pp, pv)) = prev {
            let crosses = (pv > SOLUBILITY_LIMIT) != (v > SOLUBILITY_LIMIT);
            if crosses {
                let t = (SOLUBILITY_LIMIT - pv) / (v - pv);
                series.push((ph_to_x(pp + t * (p - pp)), SOLUBILITY_LIMIT));
            }
        }
        if v <= SOLUBILITY_LIMIT {
            series.push((ph_to_x(p), v));
        }
        prev = Some((p, v));
    }

    series
}

/// Draw solubility versus pH for normal and fluoride-treated enamel.
pub fn draw_solubility(
    f: &mut Frame<'_>,
    area: Rect,
    curves: &SolubilityCurves,
    colors: &ThemeColors,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    let hap = visible_series(&curves.ph, &curves.hydroxyapatite);
    let fap = visible_series(&curves.ph, &curves.fluorapatite);
    let critical = [
        (ph_to_x(CRITICAL_PH), 0.0),
        (ph_to_x(CRITICAL_PH), SOLUBILITY_LIMIT),
    ];

    let datasets = vec![
        Dataset::default()
            .name("Normal Enamel (Hydroxyapatite)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.red))
            .data(&hap),
        Dataset::default()
            .name("Fluoride-treated (Fluorapatite)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.blue))
            .data(&fap),
        Dataset::default()
            .name("Critical pH (5.5)")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.gray))
            .data(&critical),
    ];

    let x_axis = Axis::default()
        .title("pH (Basic ← → Acidic)")
        .style(Style::default().fg(colors.fg0))
        .bounds([PH_RANGE.0, PH_RANGE.1])
        .labels(vec![
            format_axis_label(PH_RANGE.1),
            format_axis_label(CRITICAL_PH),
            format_axis_label(PH_RANGE.0),
        ]);

    let y_axis = Axis::default()
        .title("Relative Solubility")
        .style(Style::default().fg(colors.fg0))
        .bounds([0.0, SOLUBILITY_LIMIT])
        .labels(vec![
            format_axis_label(0.0),
            format_axis_label(SOLUBILITY_LIMIT / 2.0),
            format_axis_label(SOLUBILITY_LIMIT),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(" Tooth Enamel Erosion: Solubility vs pH Changes ")
                .title_style(
                    Style::default()
                        .fg(colors.yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);
    f.render_widget(chart, chunks[0]);

    draw_notes(
        f,
        chunks[1],
        "Analysis Results",
        &[
            "Normal enamel (hydroxyapatite) begins demineralization at pH 5.5",
            "Fluoride-treated enamel (fluorapatite) resists down to pH 4.5",
            "Acidic beverages (pH 2-4) cause rapid dissolution",
        ],
        colors,
    );
}

/// Draw grouped bars comparing coating materials.
pub fn draw_coatings(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(area);

    let series = [
        ("Acid Resistance", Color::Rgb(0xff, 0x7f, 0x7f)),
        ("Durability", Color::Rgb(0x7f, 0xbf, 0xff)),
        ("Remineralization", Color::Rgb(0x7f, 0xff, 0x7f)),
    ];

    let legend: Vec<Span<'_>> = series
        .iter()
        .flat_map(|(name, color)| {
            [
                Span::styled("■ ", Style::default().fg(*color)),
                Span::styled(format!("{}   ", name), Style::default().fg(colors.fg0)),
            ]
        })
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(Alignment::Center),
        chunks[0],
    );

    let group_gap: u16 = 3;
    let groups = COATING_EFFECTS.len() as u16;
    let usable = chunks[1]
        .width
        .saturating_sub(2 + group_gap * groups.saturating_sub(1));
    let bar_width = (usable / (groups * series.len() as u16)).clamp(1, 8);

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(" Coating Material Protection Effectiveness Comparison (%) ")
                .title_style(
                    Style::default()
                        .fg(colors.yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(group_gap)
        .max(100);

    for effect in COATING_EFFECTS.iter() {
        let values = [
            effect.acid_resistance,
            effect.durability,
            effect.remineralization,
        ];
        let bars: Vec<Bar<'_>> = values
            .iter()
            .zip(series.iter())
            .map(|(&value, (_, color))| {
                Bar::default()
                    .value(value)
                    .text_value(format!("{}%", value))
                    .style(Style::default().fg(*color))
                    .value_style(Style::default().fg(colors.bg0).bg(*color))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(effect.material).alignment(Alignment::Center))
                .bars(&bars),
        );
    }
    f.render_widget(chart, chunks[1]);

    draw_notes(
        f,
        chunks[2],
        "Effectiveness Analysis",
        &[
            "CPP-ACP: highest remineralization capability (90%)",
            "Fluoride Treatment: well-balanced overall protection",
            "Glass Particle Coating: excellent durability (80%)",
            "Resin Coating: superior adhesion but limited remineralization",
        ],
        colors,
    );
}

/// Draw the material compatibility radar with a legend of averages.
pub fn draw_compatibility(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title(" Chemical Compatibility Comparison by Coating Material ")
        .title_style(
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(inner);

    let x_bounds = [-2.0 * MAX_SCORE, 2.0 * MAX_SCORE];
    let y_bounds = [-1.3 * MAX_SCORE, 1.3 * MAX_SCORE];
    let per_col = (x_bounds[1] - x_bounds[0]) / f64::from(chunks[0].width.max(1));
    let n = COMPATIBILITY_PROPERTIES.len();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            // Rings every two points, then spokes.
            for ring in (2..=MAX_SCORE as u32).step_by(2) {
                let r = f64::from(ring);
                for i in 0..n {
                    let (a0, a1) = (axis_angle(i, n), axis_angle(i + 1, n));
                    ctx.draw(&Segment::new(
                        r * a0.cos(),
                        r * a0.sin(),
                        r * a1.cos(),
                        r * a1.sin(),
                        colors.bg2,
                    ));
                }
            }
            for i in 0..n {
                let a = axis_angle(i, n);
                ctx.draw(&Segment::new(
                    0.0,
                    0.0,
                    MAX_SCORE * a.cos(),
                    MAX_SCORE * a.sin(),
                    colors.bg2,
                ));
            }
            ctx.layer();

            for profile in COMPATIBILITY.iter() {
                let (r, g, b) = profile.rgb;
                let color = Color::Rgb(r, g, b);
                let pts = radar_points(profile);
                for (i, &(x0, y0)) in pts.iter().enumerate() {
                    let (x1, y1) = pts[(i + 1) % pts.len()];
                    ctx.draw(&Segment::new(x0, y0, x1, y1, color));
                }
                ctx.draw(&Points {
                    coords: &pts,
                    color,
                });
            }

            for (i, name) in COMPATIBILITY_PROPERTIES.iter().enumerate() {
                let a = axis_angle(i, n);
                let (x, y) = (1.1 * MAX_SCORE * a.cos(), 1.1 * MAX_SCORE * a.sin());
                let width = name.chars().count() as f64 * per_col;
                let x = if a.cos() < -1e-9 {
                    x - width
                } else if a.cos().abs() <= 1e-9 {
                    x - width / 2.0
                } else {
                    x
                };
                ctx.print(x, y, Span::styled(*name, Style::default().fg(colors.fg0)));
            }
        });
    f.render_widget(canvas, chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            "Average score",
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for profile in COMPATIBILITY.iter() {
        let (r, g, b) = profile.rgb;
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(Color::Rgb(r, g, b))),
            Span::styled(
                format!("{:<15}{:.1}/10", profile.material, profile.average()),
                Style::default().fg(colors.fg0),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "The new coating balances every property; it combines the strengths of existing materials.",
        Style::default().fg(colors.green),
    )));

    let legend = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(legend, chunks[1]);
}

/// Draw the conclusions: mechanism summary on the left, coating proposal on the right.
pub fn draw_conclusions(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .title(" Conclusions and Recommendations ")
        .title_style(
            Style::default()
                .fg(colors.yellow)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    draw_notes(
        f,
        columns[0],
        "Chemical Mechanism Summary",
        &MECHANISM_SUMMARY,
        colors,
    );
    draw_notes(
        f,
        columns[1],
        "New Coating Material Proposal",
        &COATING_PROPOSAL,
        colors,
    );
}

/// Draw a heading followed by bulleted notes.
pub fn draw_notes(
    f: &mut Frame<'_>,
    area: Rect,
    heading: &str,
    notes: &[&str],
    colors: &ThemeColors,
) {
    let mut lines = vec![Line::from(Span::styled(
        format!("{}:", heading),
        Style::default()
            .fg(colors.yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(notes.iter().map(|note| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(colors.green)),
            Span::styled(*note, Style::default().fg(colors.fg0)),
        ])
    }));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors.bg2)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ph_axis_is_reversed() {
        assert_eq!(ph_to_x(8.0), 3.0);
        assert_eq!(ph_to_x(3.0), 8.0);
        assert_eq!(ph_to_x(5.5), 5.5);
    }

    #[test]
    fn series_is_cut_at_the_top_of_the_plot() {
        let curves = SolubilityCurves::default();
        let hap = visible_series(&curves.ph, &curves.hydroxyapatite);
        assert!(hap.iter().all(|&(_, y)| y <= SOLUBILITY_LIMIT));
        // The first kept point is the crossing near pH 3.5.
        let (x, y) = hap[0];
        assert_eq!(y, SOLUBILITY_LIMIT);
        assert!((x - ph_to_x(3.5)).abs() < 0.06);

        // Fluorapatite never reaches the limit in range.
        let fap = visible_series(&curves.ph, &curves.fluorapatite);
        assert_eq!(fap.len(), curves.ph.len());
    }
}
