//! Frame-indexed erosion and coating animation.
//!
//! The animation is scripted: each frame index falls into one of three
//! contiguous phases, and [`ToothSimulation::update`] mutates the surface
//! curves and acid particles according to that phase.

use ndarray::{Array1, Zip};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::profile::{interp, ToothProfile};
use crate::config::AnimationConfig;

/// Title shown before the first frame is drawn.
pub const INITIAL_TITLE: &str = "Initial State: Healthy Tooth Enamel";

/// Text added to the scene once the coating has started forming.
pub const ANNOTATION_TEXT: &str = "Fluoride/CPP-ACP Protective Layer Formation";

/// Stage of the scripted narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Acid particles fall onto the enamel.
    AcidAttack,
    /// The enamel surface dissolves.
    Erosion,
    /// A protective layer grows over the enamel.
    Coating,
}

impl Phase {
    /// Phase that `frame` belongs to.
    pub fn of(frame: usize, config: &AnimationConfig) -> Self {
        if frame < config.erosion_start {
            Phase::AcidAttack
        } else if frame < config.coating_start {
            Phase::Erosion
        } else {
            Phase::Coating
        }
    }

    /// Short name for status lines.
    pub fn name(self) -> &'static str {
        match self {
            Phase::AcidAttack => "Acid Attack",
            Phase::Erosion => "Erosion",
            Phase::Coating => "Coating",
        }
    }

    /// Scene title for `frame`.
    pub fn title(self, frame: usize) -> String {
        match self {
            Phase::AcidAttack => format!("Phase 1: Acid Attack (pH < 5.5) - Frame: {}", frame),
            Phase::Erosion => "Phase 2: Enamel Erosion (Ca10(PO4)6(OH)2 Dissolution)".to_string(),
            Phase::Coating => {
                "Phase 3: New Coating Application (Remineralization/Protection)".to_string()
            }
        }
    }

    /// Emphasis of the scene title.
    pub fn tone(self) -> Tone {
        match self {
            Phase::AcidAttack => Tone::Neutral,
            Phase::Erosion => Tone::Alert,
            Phase::Coating => Tone::Calm,
        }
    }
}

/// Title emphasis, mapped to theme colors when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Regular foreground.
    Neutral,
    /// Damage in progress (red).
    Alert,
    /// Caution (orange).
    Warning,
    /// Protection (blue).
    Calm,
}

/// State of the tooth animation.
#[derive(Debug, Clone)]
pub struct ToothSimulation {
    config: AnimationConfig,
    profile: ToothProfile,
    enamel: Array1<f64>,
    coating: Option<Array1<f64>>,
    acid_x: Array1<f64>,
    acid_y: Array1<f64>,
    particle_alpha: f64,
    particles_visible: bool,
    eroded: bool,
    annotated: bool,
    frame: Option<usize>,
    rng: Pcg32,
}

impl ToothSimulation {
    /// Create a healthy tooth with acid particles hovering above it.
    pub fn new(config: AnimationConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let profile = ToothProfile::new(&config);
        let hw = config.half_width;
        let (lo, hi) = config.particle_spawn;
        let acid_x: Array1<f64> = (0..config.particles)
            .map(|_| rng.random_range(-hw..hw))
            .collect();
        let acid_y: Array1<f64> = (0..config.particles)
            .map(|_| rng.random_range(lo..hi))
            .collect();

        Self {
            enamel: profile.base.clone(),
            coating: None,
            acid_x,
            acid_y,
            particle_alpha: config.particle_alpha,
            particles_visible: true,
            eroded: false,
            annotated: false,
            frame: None,
            rng,
            profile,
            config,
        }
    }

    /// Apply the effect of `frame` to the scene.
    pub fn update(&mut self, frame: usize) {
        let phase = Phase::of(frame, &self.config);
        if self.frame.map(|f| Phase::of(f, &self.config)) != Some(phase) {
            tracing::debug!("Frame {}: entering {} phase", frame, phase.name());
        }

        match phase {
            Phase::AcidAttack => self.drop_particles(),
            Phase::Erosion => self.erode(frame),
            Phase::Coating => self.grow_coating(frame),
        }

        self.frame = Some(frame);
    }

    fn drop_particles(&mut self) {
        self.acid_y -= self.config.drop_speed;

        let offset = self.config.rest_offset;
        let x = &self.profile.x;
        let enamel = &self.enamel;
        Zip::from(&mut self.acid_y)
            .and(&self.acid_x)
            .for_each(|y, &px| {
                let surface = interp(px, x, enamel);
                if *y < surface {
                    *y = surface + offset;
                }
            });
    }

    fn erode(&mut self, frame: usize) {
        let wave = self.config.erosion_wave * (frame as f64).sin();
        let noise_amp = self.config.erosion_noise;
        let rng = &mut self.rng;
        let erosion: Array1<f64> = (0..self.enamel.len())
            .map(|_| wave + noise_amp * rng.random::<f64>())
            .collect();
        self.enamel -= &erosion;

        let floor = self.config.min_enamel;
        Zip::from(&mut self.enamel)
            .and(&self.profile.dentin)
            .for_each(|e, &d| *e = e.max(d + floor));
        self.eroded = true;

        if frame % 2 == 0 {
            let elapsed = (frame - self.config.erosion_start) as f64;
            self.particle_alpha =
                (self.config.particle_alpha - elapsed * self.config.fade_rate).max(0.0);
        }
    }

    fn grow_coating(&mut self, frame: usize) {
        self.particles_visible = false;

        let grown = (frame - self.config.coating_start) as f64 * self.config.coating_rate;
        let thickness = grown.min(self.config.max_coating);
        self.coating = Some(&self.enamel + thickness);

        if frame == self.config.annotation_frame {
            self.annotated = true;
        }
    }

    /// Last frame applied, if any.
    pub fn frame(&self) -> Option<usize> {
        self.frame
    }

    /// Phase of the last frame applied.
    pub fn phase(&self) -> Option<Phase> {
        self.frame.map(|f| Phase::of(f, &self.config))
    }

    /// Current scene title.
    pub fn title(&self) -> String {
        match self.frame {
            Some(f) => Phase::of(f, &self.config).title(f),
            None => INITIAL_TITLE.to_string(),
        }
    }

    /// Current title emphasis.
    pub fn tone(&self) -> Tone {
        self.phase().map(Phase::tone).unwrap_or(Tone::Neutral)
    }

    /// Animation constants.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Fixed tooth geometry.
    pub fn profile(&self) -> &ToothProfile {
        &self.profile
    }

    /// Current enamel surface.
    pub fn enamel(&self) -> &Array1<f64> {
        &self.enamel
    }

    /// Top of the coating layer, once it has started forming.
    pub fn coating(&self) -> Option<&Array1<f64>> {
        self.coating.as_ref()
    }

    /// Particle positions as `(x, y)` pairs.
    pub fn particles(&self) -> Vec<(f64, f64)> {
        self.acid_x
            .iter()
            .zip(self.acid_y.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }

    /// Current particle opacity in `[0, 1]`.
    pub fn particle_alpha(&self) -> f64 {
        self.particle_alpha
    }

    /// Whether the particles are drawn at all.
    pub fn particles_visible(&self) -> bool {
        self.particles_visible
    }

    /// Whether the enamel has started to erode.
    pub fn is_eroded(&self) -> bool {
        self.eroded
    }

    /// Whether the protective-layer annotation is shown.
    pub fn is_annotated(&self) -> bool {
        self.annotated
    }

    /// Whether every frame of the run has been applied.
    pub fn is_finished(&self) -> bool {
        self.frame
            .is_some_and(|f| f + 1 >= self.config.total_frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> ToothSimulation {
        ToothSimulation::new(AnimationConfig::default(), 7)
    }

    fn run_to(sim: &mut ToothSimulation, last: usize) {
        let start = sim.frame().map_or(0, |f| f + 1);
        for frame in start..=last {
            sim.update(frame);
        }
    }

    #[test]
    fn starts_healthy() {
        let sim = sim();
        assert_eq!(sim.title(), INITIAL_TITLE);
        assert_eq!(sim.enamel(), &sim.profile().base);
        assert!(sim.coating().is_none());
        assert_eq!(sim.particles().len(), 100);
        assert!(sim
            .particles()
            .iter()
            .all(|&(x, y)| (-2.5..2.5).contains(&x) && (2.0..3.5).contains(&y)));
    }

    #[test]
    fn phases_switch_at_sixty_and_one_twenty() {
        let cfg = AnimationConfig::default();
        assert_eq!(Phase::of(0, &cfg), Phase::AcidAttack);
        assert_eq!(Phase::of(59, &cfg), Phase::AcidAttack);
        assert_eq!(Phase::of(60, &cfg), Phase::Erosion);
        assert_eq!(Phase::of(119, &cfg), Phase::Erosion);
        assert_eq!(Phase::of(120, &cfg), Phase::Coating);
        assert_eq!(Phase::of(500, &cfg), Phase::Coating);
    }

    #[test]
    fn titles_follow_the_frame() {
        let mut sim = sim();
        sim.update(12);
        assert_eq!(sim.title(), "Phase 1: Acid Attack (pH < 5.5) - Frame: 12");
        assert_eq!(sim.tone(), Tone::Neutral);
        sim.update(60);
        assert!(sim.title().starts_with("Phase 2"));
        assert_eq!(sim.tone(), Tone::Alert);
        sim.update(120);
        assert!(sim.title().starts_with("Phase 3"));
        assert_eq!(sim.tone(), Tone::Calm);
    }

    #[test]
    fn particles_never_sink_into_the_enamel() {
        let mut sim = sim();
        for frame in 0..60 {
            sim.update(frame);
            let prof = sim.profile();
            for (x, y) in sim.particles() {
                assert!(y >= interp(x, &prof.x, sim.enamel()));
            }
        }
        // The crown is at least 1.0 high over the middle, so 60 frames at 0.05
        // lands every particle there.
        let prof = sim.profile();
        for (x, y) in sim.particles().into_iter().filter(|(x, _)| x.abs() < 1.5) {
            let surface = interp(x, &prof.x, sim.enamel());
            assert!(y <= surface + 0.1 + 1e-9, "particle at {} still falling", x);
        }
    }

    #[test]
    fn enamel_stays_above_dentin_through_erosion() {
        let mut sim = sim();
        run_to(&mut sim, 59);
        for frame in 60..120 {
            sim.update(frame);
            let dentin = &sim.profile().dentin;
            for (e, d) in sim.enamel().iter().zip(dentin.iter()) {
                assert!(*e >= d + 0.1 - 1e-12, "frame {}: {} below {}", frame, e, d);
            }
        }
        assert!(sim.is_eroded());
    }

    #[test]
    fn clamp_holds_under_heavy_erosion() {
        let cfg = AnimationConfig {
            erosion_noise: 0.5,
            ..AnimationConfig::default()
        };
        let mut sim = ToothSimulation::new(cfg, 3);
        for frame in 60..120 {
            sim.update(frame);
        }
        // The periodic term can lift a clamped sample by at most its amplitude.
        let prof = sim.profile();
        for (e, d) in sim.enamel().iter().zip(prof.dentin.iter()) {
            assert!(*e >= d + 0.1 - 1e-12);
            assert!(*e <= d + 0.1 + 0.005 + 1e-12);
        }
    }

    #[test]
    fn particles_fade_on_even_frames() {
        let mut sim = sim();
        run_to(&mut sim, 59);
        assert_eq!(sim.particle_alpha(), 0.6);
        sim.update(60);
        assert!((sim.particle_alpha() - 0.6).abs() < 1e-12);
        sim.update(61);
        assert!((sim.particle_alpha() - 0.6).abs() < 1e-12);
        sim.update(62);
        assert!((sim.particle_alpha() - 0.58).abs() < 1e-12);
        run_to(&mut sim, 119);
        assert!((sim.particle_alpha() - 0.02).abs() < 1e-9);
        assert!(sim.particles_visible());
        sim.update(120);
        assert!(!sim.particles_visible());
    }

    #[test]
    fn coating_grows_then_caps() {
        let mut sim = sim();
        run_to(&mut sim, 130);
        let enamel = sim.enamel().clone();
        let coating = sim.coating().expect("coating after frame 120");
        for (c, e) in coating.iter().zip(enamel.iter()) {
            assert!((c - e - 0.05).abs() < 1e-9);
        }

        run_to(&mut sim, 199);
        let coating = sim.coating().expect("coating after frame 120");
        for (c, e) in coating.iter().zip(sim.enamel().iter()) {
            assert!((c - e - 0.3).abs() < 1e-9);
        }
        assert!(sim.is_finished());
    }

    #[test]
    fn enamel_is_frozen_once_coating_starts() {
        let mut sim = sim();
        run_to(&mut sim, 120);
        let enamel = sim.enamel().clone();
        run_to(&mut sim, 199);
        assert_eq!(sim.enamel(), &enamel);
    }

    #[test]
    fn annotation_appears_at_one_fifty_and_stays() {
        let mut sim = sim();
        run_to(&mut sim, 149);
        assert!(!sim.is_annotated());
        sim.update(150);
        assert!(sim.is_annotated());
        run_to(&mut sim, 199);
        assert!(sim.is_annotated());
    }

    #[test]
    fn same_seed_same_animation() {
        let mut a = ToothSimulation::new(AnimationConfig::default(), 99);
        let mut b = ToothSimulation::new(AnimationConfig::default(), 99);
        run_to(&mut a, 140);
        run_to(&mut b, 140);
        assert_eq!(a.enamel(), b.enamel());
        assert_eq!(a.particles(), b.particles());

        let c = ToothSimulation::new(AnimationConfig::default(), 100);
        assert_ne!(ToothSimulation::new(AnimationConfig::default(), 99).particles(), c.particles());
    }
}
