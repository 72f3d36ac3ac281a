//! Headless export of the animation to an animated GIF.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::{ExportConfig, RunOptions};
use crate::error::{EnamelError, Result};
use crate::tooth::sim::ANNOTATION_TEXT;
use crate::tooth::{Tone, ToothSimulation};

/// DejaVu Sans, bundled so exports never depend on installed fonts.
static FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const FONT_FAMILY: &str = "sans-serif";

const DENTIN: RGBColor = RGBColor(255, 228, 181);
const ENAMEL: RGBColor = RGBColor(245, 245, 245);
const ENAMEL_ERODED: RGBColor = RGBColor(232, 232, 232);
const COATING: RGBColor = RGBColor(135, 206, 235);
const OUTLINE: RGBColor = RGBColor(128, 128, 128);
const TITLE_NEUTRAL: RGBColor = RGBColor(40, 40, 40);
const ANNOTATION: RGBColor = RGBColor(30, 80, 200);

/// Summary of a finished export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Frames written.
    pub frames: usize,
    /// Delay between frames in milliseconds.
    pub frame_delay_ms: u32,
}

/// Render every frame of the animation into `export.path`.
pub fn export_gif(options: &RunOptions, export: &ExportConfig) -> Result<ExportSummary> {
    options.validate()?;
    export.validate()?;

    let path = export.path.as_path();
    register_font(FONT_FAMILY, FontStyle::Normal, FONT)
        .map_err(|_| EnamelError::export(path, "bundled font could not be loaded"))?;

    let delay = export.frame_delay_ms();
    let root = BitMapBackend::gif(path, (export.width, export.height), delay)
        .map_err(|e| EnamelError::export(path, e))?
        .into_drawing_area();

    let mut sim = ToothSimulation::new(options.animation.clone(), options.seed);
    let total = options.animation.total_frames;
    tracing::info!(
        "Exporting {} frames ({}x{}, {} ms/frame) to {}",
        total,
        export.width,
        export.height,
        delay,
        path.display()
    );

    for frame in 0..total {
        sim.update(frame);
        draw_frame(&root, &sim).map_err(|e| EnamelError::export(path, e))?;
        root.present().map_err(|e| EnamelError::export(path, e))?;
    }

    tracing::info!("Export finished: {}", path.display());
    Ok(ExportSummary {
        frames: total,
        frame_delay_ms: delay,
    })
}

/// Color of the scene title for `tone`.
fn tone_color(tone: Tone) -> RGBColor {
    match tone {
        Tone::Alert => RED,
        Tone::Calm => BLUE,
        Tone::Warning => RGBColor(255, 140, 0),
        Tone::Neutral => TITLE_NEUTRAL,
    }
}

/// Paint one frame: title and progress band on top, the square scene below.
fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    sim: &ToothSimulation,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (w, h) = root.dim_in_pixel();
    let header = (h / 12).max(12).min(h);
    let (top, body) = root.split_vertically(header);

    let tone = tone_color(sim.tone());
    let title_px = f64::from(header) * 0.6;
    top.draw_text(
        &sim.title(),
        &(FONT_FAMILY, title_px)
            .into_font()
            .style(FontStyle::Bold)
            .color(&tone)
            .pos(Pos::new(HPos::Center, VPos::Center)),
        ((w / 2) as i32, (header / 2) as i32),
    )?;

    let progress = sim
        .frame()
        .map(|f| (f + 1) as f64 / sim.config().total_frames as f64)
        .unwrap_or(0.0);
    let band = (header / 8).max(1);
    top.draw(&Rectangle::new(
        [
            (0, (header - band) as i32),
            ((f64::from(w) * progress) as i32, header as i32),
        ],
        tone.filled(),
    ))?;

    // Equal aspect: a square plot centered horizontally.
    let body_h = h.saturating_sub(header);
    let side = w.min(body_h);
    let plot = body.shrink(((w - side) / 2, 0), (side, side));

    let mut chart =
        ChartBuilder::on(&plot).build_cartesian_2d(-3.0f64..3.0f64, -2.0f64..4.0f64)?;

    let profile = sim.profile();
    let xs: Vec<f64> = profile.x.to_vec();
    let floor = vec![profile.root_y; xs.len()];
    let dentin = profile.dentin.to_vec();
    let enamel = sim.enamel().to_vec();

    chart
        .draw_series(std::iter::once(Polygon::new(
            band_polygon(&xs, &floor, &dentin),
            DENTIN.filled(),
        )))?
        .label("Dentin")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], DENTIN.filled()));

    let enamel_color = if sim.is_eroded() { ENAMEL_ERODED } else { ENAMEL };
    chart
        .draw_series(std::iter::once(Polygon::new(
            band_polygon(&xs, &dentin, &enamel),
            enamel_color.mix(0.9).filled(),
        )))?
        .label("Enamel")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 4), (x + 10, y + 4)], enamel_color.filled())
        });

    if let Some(coating) = sim.coating() {
        chart
            .draw_series(std::iter::once(Polygon::new(
                band_polygon(&xs, &enamel, &coating.to_vec()),
                COATING.mix(0.6).filled(),
            )))?
            .label("Protective Coating")
            .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], COATING.filled()));
    }

    chart.draw_series(LineSeries::new(
        xs.iter().copied().zip(enamel.iter().copied()),
        OUTLINE.stroke_width(1),
    ))?;

    if sim.particles_visible() && sim.particle_alpha() > 0.0 {
        let radius = (side / 150).max(2);
        let style = RED.mix(sim.particle_alpha()).filled();
        chart
            .draw_series(
                sim.particles()
                    .into_iter()
                    .map(|p| Circle::new(p, radius, style)),
            )?
            .label("Acid (H+)")
            .legend(|(x, y)| Circle::new((x + 5, y), 3, RED.filled()));
    }

    let text_px = (f64::from(side) / 28.0).max(6.0);
    if sim.is_annotated() {
        chart.draw_series(std::iter::once(Text::new(
            ANNOTATION_TEXT,
            (0.0, 2.5),
            (FONT_FAMILY, text_px)
                .into_font()
                .style(FontStyle::Bold)
                .color(&ANNOTATION)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT_FAMILY, text_px))
        .background_style(WHITE.mix(0.8))
        .border_style(OUTLINE)
        .draw()?;

    Ok(())
}

/// Closed outline of the band between `lower` and `upper`.
fn band_polygon(xs: &[f64], lower: &[f64], upper: &[f64]) -> Vec<(f64, f64)> {
    let mut pts: Vec<(f64, f64)> = xs.iter().copied().zip(upper.iter().copied()).collect();
    pts.extend(xs.iter().copied().zip(lower.iter().copied()).rev());
    pts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;

    const W: u32 = 800;
    const H: u32 = 480;

    /// RGB pixels of `frame` rendered at 800x480.
    fn render(frame: usize) -> Vec<u8> {
        assert!(register_font(FONT_FAMILY, FontStyle::Normal, FONT).is_ok());
        let mut sim = ToothSimulation::new(AnimationConfig::default(), 42);
        for f in 0..=frame {
            sim.update(f);
        }

        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (W, H)).into_drawing_area();
            draw_frame(&root, &sim).expect("draw frame");
            root.present().expect("present");
        }
        buf
    }

    fn count_rows(
        buf: &[u8],
        rows: std::ops::Range<u32>,
        hit: impl Fn(u8, u8, u8) -> bool,
    ) -> usize {
        buf.chunks_exact(3)
            .enumerate()
            .filter(|(i, _)| rows.contains(&(*i as u32 / W)))
            .filter(|(_, px)| hit(px[0], px[1], px[2]))
            .count()
    }

    #[test]
    fn frame_title_is_drawn_above_the_band() {
        let header = H / 12;
        let band = header / 8;
        let buf = render(60);
        let inked = count_rows(&buf, 0..header - band, |r, g, b| {
            (r, g, b) != (255, 255, 255)
        });
        assert!(inked > 100, "only {} title pixels", inked);
    }

    #[test]
    fn annotation_text_appears_from_frame_one_fifty() {
        let header = H / 12;
        let bluish = |r: u8, _g: u8, b: u8| r < 100 && b > 150;
        let before = count_rows(&render(149), header..H, bluish);
        let after = count_rows(&render(150), header..H, bluish);
        assert_eq!(before, 0);
        assert!(after > 50, "only {} annotation pixels", after);
    }

    #[test]
    fn band_polygon_walks_top_then_bottom() {
        let pts = band_polygon(&[0.0, 1.0], &[0.0, 0.0], &[2.0, 3.0]);
        assert_eq!(pts, vec![(0.0, 2.0), (1.0, 3.0), (1.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn writes_a_gif() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut export = ExportConfig::new(dir.path().join("tooth.gif"));
        export.width = 120;
        export.height = 80;

        let summary = export_gif(&RunOptions::default(), &export).expect("export");
        assert_eq!(summary.frames, 200);
        assert_eq!(summary.frame_delay_ms, 100);

        let bytes = std::fs::read(&export.path).expect("gif on disk");
        assert!(bytes.starts_with(b"GIF8"));
    }

    #[test]
    fn rejects_invalid_export_before_writing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut export = ExportConfig::new(dir.path().join("tooth.gif"));
        export.fps = 0;

        let err = export_gif(&RunOptions::default(), &export).unwrap_err();
        assert!(matches!(err, EnamelError::InvalidConfig(_)));
        assert!(!export.path.exists());
    }
}
