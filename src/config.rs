//! Animation constants and run options.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{EnamelError, Result};

/// Largest export image edge in pixels.
pub const MAX_EXPORT_EDGE: u32 = 4096;

/// Constants that script the tooth animation.
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Total number of frames in one run.
    pub total_frames: usize,
    /// First frame of the erosion phase.
    pub erosion_start: usize,
    /// First frame of the coating phase.
    pub coating_start: usize,
    /// Frame at which the protective-layer annotation appears.
    pub annotation_frame: usize,
    /// Number of samples along the tooth surface.
    pub samples: usize,
    /// Horizontal extent of the tooth, from `-half_width` to `half_width`.
    pub half_width: f64,
    /// Depth of the dentin surface below the enamel surface.
    pub enamel_depth: f64,
    /// Floor of the dentin fill.
    pub root_y: f64,
    /// Number of acid particles.
    pub particles: usize,
    /// Vertical range the particles start in.
    pub particle_spawn: (f64, f64),
    /// Distance a particle falls per frame.
    pub drop_speed: f64,
    /// Height a particle rests above the surface.
    pub rest_offset: f64,
    /// Starting particle opacity.
    pub particle_alpha: f64,
    /// Opacity lost per frame into erosion.
    pub fade_rate: f64,
    /// Amplitude of the periodic erosion term.
    pub erosion_wave: f64,
    /// Amplitude of the random erosion term.
    pub erosion_noise: f64,
    /// Minimum enamel thickness left over the dentin.
    pub min_enamel: f64,
    /// Coating growth per frame.
    pub coating_rate: f64,
    /// Maximum coating thickness.
    pub max_coating: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            total_frames: 200,
            erosion_start: 60,
            coating_start: 120,
            annotation_frame: 150,
            samples: 200,
            half_width: 2.5,
            enamel_depth: 0.8,
            root_y: -2.0,
            particles: 100,
            particle_spawn: (2.0, 3.5),
            drop_speed: 0.05,
            rest_offset: 0.1,
            particle_alpha: 0.6,
            fade_rate: 0.01,
            erosion_wave: 0.005,
            erosion_noise: 0.002,
            min_enamel: 0.1,
            coating_rate: 0.005,
            max_coating: 0.3,
        }
    }
}

impl AnimationConfig {
    /// Check that the phase schedule and geometry are usable.
    pub fn validate(&self) -> Result<()> {
        if self.samples < 2 {
            return Err(EnamelError::invalid_config(
                "tooth profile needs at least two samples",
            ));
        }
        if !(self.erosion_start <= self.coating_start && self.coating_start <= self.total_frames)
        {
            return Err(EnamelError::invalid_config(format!(
                "phase boundaries out of order: erosion {}, coating {}, total {}",
                self.erosion_start, self.coating_start, self.total_frames
            )));
        }
        if self.half_width <= 0.0 {
            return Err(EnamelError::invalid_config("tooth width must be positive"));
        }
        Ok(())
    }
}

/// Settings for the headless GIF export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output file.
    pub path: PathBuf,
    /// Playback rate of the written file.
    pub fps: u32,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl ExportConfig {
    /// Default export settings writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fps: 10,
            width: 800,
            height: 480,
        }
    }

    /// Delay between frames in the written file.
    pub fn frame_delay_ms(&self) -> u32 {
        (1000 / self.fps.max(1)).max(1)
    }

    /// Check rate and dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(EnamelError::invalid_config("fps must be at least 1"));
        }
        for (name, edge) in [("width", self.width), ("height", self.height)] {
            if edge == 0 || edge > MAX_EXPORT_EDGE {
                return Err(EnamelError::invalid_config(format!(
                    "{} must be between 1 and {} pixels, got {}",
                    name, MAX_EXPORT_EDGE, edge
                )));
            }
        }
        Ok(())
    }
}

/// Options for one program run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Seed for particle placement and erosion noise.
    pub seed: u64,
    /// Time between animation frames.
    pub interval: Duration,
    /// Animation constants.
    pub animation: AnimationConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            interval: Duration::from_millis(50),
            animation: AnimationConfig::default(),
        }
    }
}

impl RunOptions {
    /// Check every part of the options.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(EnamelError::invalid_config(
                "frame interval must be at least 1 ms",
            ));
        }
        self.animation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RunOptions::default().validate().is_ok());
        assert!(ExportConfig::new("tooth.gif").validate().is_ok());
    }

    #[test]
    fn rejects_zero_interval() {
        let opts = RunOptions {
            interval: Duration::ZERO,
            ..RunOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(EnamelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_misordered_phases() {
        let cfg = AnimationConfig {
            erosion_start: 130,
            ..AnimationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_export_size() {
        let mut cfg = ExportConfig::new("tooth.gif");
        cfg.width = 0;
        assert!(cfg.validate().is_err());
        cfg.width = MAX_EXPORT_EDGE + 1;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn frame_delay_follows_fps() {
        let mut cfg = ExportConfig::new("tooth.gif");
        assert_eq!(cfg.frame_delay_ms(), 100);
        cfg.fps = 25;
        assert_eq!(cfg.frame_delay_ms(), 40);
    }
}
