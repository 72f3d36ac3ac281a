//! Three-panel summary of the narrative: healthy, eroded, coated.

use ndarray::Array1;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::profile::ToothProfile;
use super::sim::Tone;
use crate::config::AnimationConfig;

/// Particles scattered over the healthy panel.
const STAGE_PARTICLES: usize = 50;
/// Vertical range of those particles.
const STAGE_PARTICLE_SPAN: (f64, f64) = (2.0, 3.0);
/// Maximum depth of the random surface damage.
const STAGE_EROSION: f64 = 0.1;
/// Thickness of the coating in the last panel.
const STAGE_COATING: f64 = 0.2;

/// One panel of the summary.
#[derive(Debug, Clone)]
pub struct Stage {
    /// Panel title.
    pub title: &'static str,
    /// Title emphasis.
    pub tone: Tone,
    /// Enamel surface.
    pub enamel: Array1<f64>,
    /// Whether the enamel is drawn in the eroded color.
    pub eroded: bool,
    /// Top of the coating, if the panel has one.
    pub coating: Option<Array1<f64>>,
    /// Acid particles.
    pub particles: Vec<(f64, f64)>,
}

/// The three panels plus the geometry they share.
#[derive(Debug, Clone)]
pub struct StageSet {
    /// Shared tooth geometry.
    pub profile: ToothProfile,
    /// Healthy, eroded, coated.
    pub stages: [Stage; 3],
}

impl StageSet {
    /// Build the panels from a seeded RNG.
    pub fn new(config: &AnimationConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let profile = ToothProfile::new(config);
        let hw = config.half_width;
        let (lo, hi) = STAGE_PARTICLE_SPAN;

        let xs: Vec<f64> = (0..STAGE_PARTICLES)
            .map(|_| rng.random_range(-hw..hw))
            .collect();
        let ys: Vec<f64> = (0..STAGE_PARTICLES)
            .map(|_| rng.random_range(lo..hi))
            .collect();
        let particles = xs.into_iter().zip(ys).collect();

        let damaged = |rng: &mut Pcg32| -> Array1<f64> {
            profile.base.mapv(|b| b - STAGE_EROSION * rng.random::<f64>())
        };
        let eroded = damaged(&mut rng);
        let coated = damaged(&mut rng);
        let coating = &coated + STAGE_COATING;

        let stages = [
            Stage {
                title: "Stage 1: Acid Attack",
                tone: Tone::Alert,
                enamel: profile.base.clone(),
                eroded: false,
                coating: None,
                particles,
            },
            Stage {
                title: "Stage 2: Enamel Erosion",
                tone: Tone::Warning,
                enamel: eroded,
                eroded: true,
                coating: None,
                particles: Vec::new(),
            },
            Stage {
                title: "Stage 3: Coating Protection",
                tone: Tone::Calm,
                enamel: coated,
                eroded: true,
                coating: Some(coating),
                particles: Vec::new(),
            },
        ];

        Self { profile, stages }
    }
}
