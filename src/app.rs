//! Application state and logic.

use crate::charts::SolubilityCurves;
use crate::config::RunOptions;
use crate::tooth::{StageSet, ToothSimulation};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Presentation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    /// Solubility of enamel against pH.
    Solubility,
    /// Coating effectiveness bars.
    Coatings,
    /// Coating compatibility radar.
    Compatibility,
    /// Static three-stage summary.
    Stages,
    /// The erosion and coating animation.
    #[default]
    Animation,
    /// Mechanism summary and coating proposal.
    Conclusions,
}

impl View {
    /// All views in tab order.
    pub const ALL: [View; 6] = [
        View::Solubility,
        View::Coatings,
        View::Compatibility,
        View::Stages,
        View::Animation,
        View::Conclusions,
    ];

    /// Position in tab order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&v| v == self).unwrap_or(0)
    }

    /// View at `index` in tab order, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the next view in the cycle.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Get the previous view in the cycle.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Tab label.
    pub fn name(self) -> &'static str {
        match self {
            View::Solubility => "Solubility vs pH",
            View::Coatings => "Coating Effectiveness",
            View::Compatibility => "Compatibility",
            View::Stages => "Erosion Stages",
            View::Animation => "Animation",
            View::Conclusions => "Conclusions",
        }
    }
}

/// Help text shown in the status bar.
pub const HELP: &str =
    "Help: q=quit, Tab/1-6=view, space=pause, .=step, r=restart, T=theme";

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Run options the app was started with.
    pub options: RunOptions,
    /// Active view.
    pub view: View,
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Tooth animation.
    pub sim: ToothSimulation,
    /// Static stage panels.
    pub stages: StageSet,
    /// Solubility chart data.
    pub solubility: SolubilityCurves,
    /// Whether playback is paused.
    pub paused: bool,
    next_frame: usize,
}

impl App {
    /// Create a new application instance.
    pub fn new(options: RunOptions, view: View) -> Self {
        let sim = ToothSimulation::new(options.animation.clone(), options.seed);
        let stages = StageSet::new(&options.animation, options.seed);

        Self {
            options,
            view,
            theme: Theme::GruvboxDark,
            status: "Ready".to_string(),
            sim,
            stages,
            solubility: SolubilityCurves::default(),
            paused: false,
            next_frame: 0,
        }
    }

    /// Advance playback by one frame interval.
    ///
    /// Frames only advance while the animation is on screen and not paused.
    pub fn on_tick(&mut self) {
        if self.view == View::Animation && !self.paused {
            self.advance();
        }
    }

    /// Apply the next frame, if the run has one left.
    fn advance(&mut self) -> bool {
        if self.next_frame >= self.options.animation.total_frames {
            return false;
        }

        self.sim.update(self.next_frame);
        self.next_frame += 1;

        if self.is_finished() {
            self.status = "Animation complete (r: restart)".to_string();
            tracing::info!("Animation finished after {} frames", self.next_frame);
        }
        true
    }

    /// Whether every frame has been played.
    pub fn is_finished(&self) -> bool {
        self.next_frame >= self.options.animation.total_frames
    }

    /// Number of frames played so far.
    pub fn frames_played(&self) -> usize {
        self.next_frame
    }

    /// Toggle pause.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.status = if self.paused {
            "Paused".to_string()
        } else {
            "Playing".to_string()
        };
    }

    /// Apply a single frame while paused.
    pub fn step(&mut self) {
        if !self.paused {
            self.status = "Pause first to step frames".to_string();
            return;
        }
        if self.advance() {
            self.status = format!("Frame {}", self.next_frame - 1);
        }
    }

    /// Rebuild the animation from its seed and play it from the start.
    pub fn restart(&mut self) {
        self.sim = ToothSimulation::new(self.options.animation.clone(), self.options.seed);
        self.next_frame = 0;
        self.paused = false;
        self.status = "Restarted".to_string();
        tracing::debug!("Animation restarted with seed {}", self.options.seed);
    }

    /// Switch to `view`.
    pub fn select_view(&mut self, view: View) {
        self.view = view;
        self.status = format!("View: {}", view.name());
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.select_view(self.view.next());
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.select_view(self.view.prev());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = HELP.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(RunOptions::default(), View::Animation)
    }

    #[test]
    fn views_cycle_both_ways() {
        assert_eq!(View::Animation.next(), View::Conclusions);
        assert_eq!(View::Conclusions.next(), View::Solubility);
        assert_eq!(View::Solubility.prev(), View::Conclusions);
        assert_eq!(View::from_index(2), Some(View::Compatibility));
        assert_eq!(View::from_index(5), Some(View::Conclusions));
        assert_eq!(View::from_index(6), None);
        for v in View::ALL {
            assert_eq!(View::from_index(v.index()), Some(v));
        }
    }

    #[test]
    fn ticks_play_the_animation() {
        let mut app = app();
        assert!(app.sim.frame().is_none());
        app.on_tick();
        app.on_tick();
        assert_eq!(app.sim.frame(), Some(1));
        assert_eq!(app.frames_played(), 2);
    }

    #[test]
    fn ticks_are_ignored_on_other_views() {
        let mut app = App::new(RunOptions::default(), View::Coatings);
        app.on_tick();
        assert!(app.sim.frame().is_none());
    }

    #[test]
    fn pause_and_step() {
        let mut app = app();
        app.toggle_pause();
        app.on_tick();
        assert!(app.sim.frame().is_none());
        app.step();
        assert_eq!(app.sim.frame(), Some(0));
        assert_eq!(app.status, "Frame 0");
        app.toggle_pause();
        app.step();
        assert_eq!(app.sim.frame(), Some(0));
    }

    #[test]
    fn holds_the_last_frame() {
        let mut app = app();
        for _ in 0..250 {
            app.on_tick();
        }
        assert!(app.is_finished());
        assert_eq!(app.sim.frame(), Some(199));
        assert!(app.status.starts_with("Animation complete"));
    }

    #[test]
    fn restart_replays_the_same_run() {
        let mut app = app();
        for _ in 0..80 {
            app.on_tick();
        }
        let enamel = app.sim.enamel().clone();

        app.restart();
        assert!(app.sim.frame().is_none());
        assert!(!app.is_finished());
        for _ in 0..80 {
            app.on_tick();
        }
        assert_eq!(app.sim.enamel(), &enamel);
    }

    #[test]
    fn theme_cycles() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");
    }
}
