use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use profile_badges::app::App;
use profile_badges::config::{parse_args, AppConfig, Command, USAGE};
use profile_badges::constants::{APP_DIR_NAME, LOG_FILE_NAME, LOG_FILTER_ENV, TICK_INTERVAL_MS};
use profile_badges::profile::{load_default_profile, load_profile};
use profile_badges::terminal::enter_terminal;
use profile_badges::ui::draw_profile_page;
use profile_badges::ui::pulse::current_millis;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Version) => {
            println!("profile-badges {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'profile-badges --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging();

    let profile = match &config.profile_path {
        Some(path) => load_profile(path),
        None => load_default_profile(),
    };
    let profile = match profile {
        Ok(profile) => profile,
        Err(e) => {
            warn!(error = %e, "failed to load profile");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    run(App::new(profile, &config), &config)
}

/// Log to ~/.profile-badges/profile-badges.log. The terminal belongs to the
/// UI, so logging is skipped entirely if the file cannot be opened.
fn init_logging() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let dir = home.join(APP_DIR_NAME);
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn run(mut app: App, config: &AppConfig) -> io::Result<()> {
    info!(editable = config.editable, size = config.size.name(), "starting profile page");

    let guard = enter_terminal()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(TICK_INTERVAL_MS);

    let result = loop {
        let view = app.view(Utc::now(), current_millis());
        if let Err(e) = terminal.draw(|frame| draw_profile_page(frame, &view)) {
            break Err(e);
        }

        match event::poll(tick) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, Utc::now()) {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }
    };

    drop(guard);
    info!("profile page closed");
    result
}
