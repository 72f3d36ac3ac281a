//! Enamel - a terminal animation of tooth enamel erosion and protection.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use enamel::app::{App, View};
use enamel::config::{ExportConfig, RunOptions};
use enamel::export::export_gif;
use enamel::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "enamel")]
#[command(about = "Animated tooth enamel erosion and protective coating", long_about = None)]
struct Args {
    /// View to open first
    #[arg(long, value_enum, default_value_t = View::Animation)]
    view: View,

    /// Seed for particle placement and erosion noise
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Milliseconds between animation frames
    #[arg(long, default_value_t = 50)]
    interval: u64,

    /// Render the animation to this GIF file and exit
    #[arg(long)]
    export: Option<PathBuf>,

    /// Frames per second of the exported GIF
    #[arg(long, default_value_t = 10)]
    fps: u32,

    /// Width of the exported GIF in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Height of the exported GIF in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided; RUST_LOG overrides the level
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Enamel");
    }

    let options = RunOptions {
        seed: args.seed,
        interval: Duration::from_millis(args.interval),
        ..RunOptions::default()
    };
    options.validate()?;

    if let Some(path) = args.export {
        let export = ExportConfig {
            fps: args.fps,
            width: args.width,
            height: args.height,
            ..ExportConfig::new(path)
        };
        let summary = export_gif(&options, &export)?;
        println!(
            "Wrote {} frames to {} ({} ms/frame)",
            summary.frames,
            export.path.display(),
            summary.frame_delay_ms
        );
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(options, args.view);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Enamel exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let interval = app.options.interval;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Views
                    (KeyModifiers::NONE, KeyCode::Tab) => app.next_view(),
                    (_, KeyCode::BackTab) => app.prev_view(),
                    (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='6')) => {
                        let index = c as usize - '1' as usize;
                        if let Some(view) = View::from_index(index) {
                            app.select_view(view);
                        }
                    }

                    // Playback
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => app.toggle_pause(),
                    (KeyModifiers::NONE, KeyCode::Char('.'))
                    | (KeyModifiers::NONE, KeyCode::Right) => app.step(),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.restart(),

                    // Features
                    (KeyModifiers::SHIFT, KeyCode::Char('T'))
                    | (KeyModifiers::NONE, KeyCode::Char('T')) => app.cycle_theme(),
                    (_, KeyCode::Char('?')) => app.show_help(),

                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= interval {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
