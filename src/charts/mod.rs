//! Supporting charts: why enamel dissolves and how coatings compare.
//!
//! The numbers here are illustrative presentation values, not measurements.

pub mod ui;

use ndarray::Array1;

/// pH below which hydroxyapatite starts to dissolve.
pub const CRITICAL_PH: f64 = 5.5;
/// pH below which fluorapatite starts to dissolve.
pub const FLUORAPATITE_PH: f64 = 4.5;
/// Upper limit of the solubility axis.
pub const SOLUBILITY_LIMIT: f64 = 100.0;

/// Relative solubility of an apatite whose critical pH is `critical` at `ph`.
pub fn solubility(ph: f64, critical: f64) -> f64 {
    10f64.powf(critical - ph)
}

/// Sampled pH/solubility curves.
#[derive(Debug, Clone)]
pub struct SolubilityCurves {
    /// pH samples from acidic to basic.
    pub ph: Array1<f64>,
    /// Normal enamel (hydroxyapatite).
    pub hydroxyapatite: Array1<f64>,
    /// Fluoride-treated enamel (fluorapatite).
    pub fluorapatite: Array1<f64>,
}

impl SolubilityCurves {
    /// Sample both curves over pH 3 to 8.
    pub fn new(samples: usize) -> Self {
        let ph = Array1::linspace(3.0, 8.0, samples);
        let hydroxyapatite = ph.mapv(|p| solubility(p, CRITICAL_PH));
        let fluorapatite = ph.mapv(|p| solubility(p, FLUORAPATITE_PH));
        Self {
            ph,
            hydroxyapatite,
            fluorapatite,
        }
    }
}

impl Default for SolubilityCurves {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Protection scores of one coating material, in percent.
#[derive(Debug, Clone, Copy)]
pub struct CoatingEffect {
    /// Material name.
    pub material: &'static str,
    /// Acid resistance.
    pub acid_resistance: u64,
    /// Durability.
    pub durability: u64,
    /// Remineralization capability.
    pub remineralization: u64,
}

/// Coating materials compared in the effectiveness chart.
pub const COATING_EFFECTS: [CoatingEffect; 5] = [
    CoatingEffect {
        material: "Normal Enamel",
        acid_resistance: 20,
        durability: 30,
        remineralization: 10,
    },
    CoatingEffect {
        material: "Resin Coating",
        acid_resistance: 65,
        durability: 75,
        remineralization: 40,
    },
    CoatingEffect {
        material: "Glass Particle",
        acid_resistance: 70,
        durability: 80,
        remineralization: 45,
    },
    CoatingEffect {
        material: "CPP-ACP",
        acid_resistance: 80,
        durability: 70,
        remineralization: 90,
    },
    CoatingEffect {
        material: "Fluoride Treatment",
        acid_resistance: 85,
        durability: 90,
        remineralization: 75,
    },
];

/// Material property axes of the compatibility radar.
pub const COMPATIBILITY_PROPERTIES: [&str; 5] = [
    "Biocompatibility",
    "Adhesion",
    "Wear Resistance",
    "Transparency",
    "Cost-Effectiveness",
];

/// Highest score on the radar.
pub const MAX_SCORE: f64 = 10.0;

/// Scores of one material on each radar axis.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityProfile {
    /// Material name.
    pub material: &'static str,
    /// One score per entry of [`COMPATIBILITY_PROPERTIES`], 1 to 10.
    pub scores: [u8; 5],
    /// Series color as RGB.
    pub rgb: (u8, u8, u8),
}

impl CompatibilityProfile {
    /// Mean score across all properties.
    pub fn average(&self) -> f64 {
        let total: u32 = self.scores.iter().map(|&s| u32::from(s)).sum();
        f64::from(total) / self.scores.len() as f64
    }
}

/// Materials on the compatibility radar; the last is the proposed coating.
pub const COMPATIBILITY: [CompatibilityProfile; 5] = [
    CompatibilityProfile {
        material: "Resin",
        scores: [8, 9, 7, 6, 7],
        rgb: (0xff, 0x6b, 0x6b),
    },
    CompatibilityProfile {
        material: "Glass Particle",
        scores: [7, 8, 9, 8, 6],
        rgb: (0x4e, 0xcd, 0xc4),
    },
    CompatibilityProfile {
        material: "CPP-ACP",
        scores: [9, 6, 6, 9, 5],
        rgb: (0x45, 0xb7, 0xd1),
    },
    CompatibilityProfile {
        material: "Fluoride",
        scores: [9, 7, 8, 10, 9],
        rgb: (0xf9, 0xca, 0x24),
    },
    CompatibilityProfile {
        material: "New Coating",
        scores: [9, 8, 8, 8, 8],
        rgb: (0x6c, 0x5c, 0xe7),
    },
];

/// Radar vertices of `profile`, with axis `i` at angle `2πi/n` counterclockwise
/// from the positive x axis and radius equal to the score.
pub fn radar_points(profile: &CompatibilityProfile) -> Vec<(f64, f64)> {
    let n = profile.scores.len();
    profile
        .scores
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let angle = axis_angle(i, n);
            let r = f64::from(s);
            (r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Angle of radar axis `i` of `n`.
pub fn axis_angle(i: usize, n: usize) -> f64 {
    2.0 * std::f64::consts::PI * i as f64 / n as f64
}

/// How the three erosion stages unfold.
pub const EROSION_MECHANISM: [&str; 3] = [
    "Acid Attack: H+ ions attack the enamel surface",
    "Enamel Erosion: Ca10(PO4)6(OH)2 structure dissolves",
    "Coating Protection: a new protective layer remineralizes and shields the enamel",
];

/// Chemical mechanism summary of the conclusions view.
pub const MECHANISM_SUMMARY: [&str; 3] = [
    "Erosion Principle: hydroxyapatite dissolves in an acidic environment",
    "Protection Strategy: apply a multi-layer coating system",
    "Remineralization: CPP-ACP and fluoride work synergistically",
];

/// Layers of the proposed coating, innermost first.
pub const COATING_PROPOSAL: [&str; 3] = [
    "Base Layer: fluoride-based remineralization layer",
    "Middle Layer: CPP-ACP buffer layer",
    "Surface Layer: glass particle-reinforced resin",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solubility_is_one_at_the_critical_ph() {
        assert!((solubility(5.5, CRITICAL_PH) - 1.0).abs() < 1e-12);
        assert!((solubility(4.5, FLUORAPATITE_PH) - 1.0).abs() < 1e-12);
        assert!((solubility(3.5, CRITICAL_PH) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn fluorapatite_is_ten_times_less_soluble() {
        let curves = SolubilityCurves::default();
        assert_eq!(curves.ph.len(), 100);
        for (h, f) in curves.hydroxyapatite.iter().zip(curves.fluorapatite.iter()) {
            assert!((h / f - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn new_coating_averages_eight_point_two() {
        let proposed = COMPATIBILITY.last().expect("proposed coating");
        assert_eq!(proposed.material, "New Coating");
        assert!((proposed.average() - 8.2).abs() < 1e-12);
    }

    #[test]
    fn cpp_acp_remineralizes_best() {
        let best = COATING_EFFECTS
            .iter()
            .max_by_key(|c| c.remineralization)
            .expect("materials");
        assert_eq!(best.material, "CPP-ACP");
    }

    #[test]
    fn radar_first_axis_points_right() {
        let pts = radar_points(&COMPATIBILITY[3]);
        assert_eq!(pts.len(), 5);
        assert!((pts[0].0 - 9.0).abs() < 1e-12);
        assert!(pts[0].1.abs() < 1e-12);
    }
}
