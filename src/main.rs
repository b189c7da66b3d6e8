use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use std::time::Instant;

mod app;
mod coin;
mod config;
mod error;
mod grid;
mod layout;
mod terminal;
#[cfg(test)]
mod test_utils;
mod theme;
mod traversal;
mod viewport;

use app::App;
use grid::GridConfig;
use terminal::TerminalSession;
use viewport::{CellMetrics, TerminalViewport, Viewport};

/// Responsive grid of flipping coins
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Responsive grid of coins that flip on hover and drag"
)]
struct Args {
    /// Config file (defaults to ~/.config/coinflip/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the grid for a pixel viewport and exit, e.g. 1024x768
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    layout: Option<Viewport>,
}

fn main() -> Result<()> {
    // Writes to /tmp/coinflip-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    if let Some(viewport) = args.layout {
        println!("{}", GridConfig::compute(viewport.width, viewport.height));
        return Ok(());
    }

    // Load config early to avoid defaults during app initialization
    let config_result = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let metrics = CellMetrics::resolve(&config_result.config.terminal);

    #[cfg(debug_assertions)]
    log::debug!("=== COINFLIP DEBUG SESSION STARTED ({:?}) ===", metrics);

    let mut session = TerminalSession::start()?;
    let app = App::new(&config_result.config, metrics);
    let result = run(&mut session, app, config_result.warning);
    drop(session);
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== COINFLIP DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/coinflip-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn run(session: &mut TerminalSession, mut app: App, warning: Option<String>) -> Result<()> {
    if let Some(warning) = warning {
        app.show_warning(&warning);
    }

    app.refresh_viewport(&TerminalViewport);

    loop {
        app.tick(Instant::now());

        if app.should_render() {
            session.terminal_mut().draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
