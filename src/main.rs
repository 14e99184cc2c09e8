use chrono::Utc;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use panda_party::app::{App, AppOutcome};
use panda_party::build_info;
use panda_party::core::config::{load_saved, ConfigLayer, ConfigStore};
use panda_party::core::constants::INPUT_POLL_MS;
use panda_party::input::map_key;
use panda_party::setup::SetupForm;
use panda_party::ui;
use panda_party::utils::logging;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Panda Party - a birthday countdown, bamboo game and quiz in your terminal.
#[derive(Parser)]
#[command(name = "panda-party", disable_version_flag = true)]
struct Cli {
    /// Name of the birthday person.
    #[arg(long)]
    name: Option<String>,

    /// Birthday date, YYYY-MM-DD (midnight UTC) or RFC 3339.
    #[arg(long, value_name = "DATE")]
    date: Option<String>,

    /// Special message revealed at the end.
    #[arg(long)]
    message: Option<String>,

    /// Open the setup form even when a configuration is available.
    #[arg(long)]
    setup: bool,

    /// Delete the saved configuration before starting.
    #[arg(long)]
    reset: bool,

    /// Show version information.
    #[arg(short = 'v', long)]
    version: bool,
}

impl Cli {
    fn layer(&self) -> ConfigLayer {
        let given = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        ConfigLayer {
            name: given(&self.name),
            date: given(&self.date),
            message: given(&self.message),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!(
            "panda-party {} ({})",
            build_info::BUILD_DATE,
            build_info::BUILD_COMMIT
        );
        return Ok(());
    }

    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    // Without a home directory the party still runs, it just cannot save.
    let store = match ConfigStore::new() {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!(error = %e, "config store unavailable, running without persistence");
            None
        }
    };
    if let (true, Some(store)) = (cli.reset, &store) {
        if let Err(e) = store.clear() {
            eprintln!("Could not remove {}: {}", store.path().display(), e);
        }
        tracing::info!(path = %store.path().display(), "saved config reset");
    }

    let saved = load_saved(store.as_ref());
    let layer = cli
        .layer()
        .or(saved.as_ref().map(ConfigLayer::from_saved).unwrap_or_default())
        .or(ConfigLayer::from_env());

    let mut app = build_app(&layer, cli.setup);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, store.as_ref());

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Start the party if the configuration resolves, otherwise open setup.
fn build_app(layer: &ConfigLayer, force_setup: bool) -> App {
    let resolved = layer.resolve();
    if force_setup {
        return App::with_setup(SetupForm::from_layer(layer), resolved.ok());
    }
    match resolved {
        Ok(config) => App::with_config(config, Utc::now()),
        Err(e) => {
            tracing::info!(reason = %e, "configuration incomplete, opening setup");
            let mut form = SetupForm::from_layer(layer);
            if *layer != ConfigLayer::default() {
                form.validation_error = Some(e.to_string());
            }
            App::with_setup(form, None)
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: Option<&ConfigStore>,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                let action = map_key(app, key);
                match app.handle(action, Utc::now(), &mut rng) {
                    AppOutcome::Quit => break,
                    AppOutcome::SaveConfig(config) => match store {
                        Some(store) => {
                            if let Err(e) = store.save(&config) {
                                tracing::error!(error = %e, "failed to save birthday config");
                            }
                        }
                        None => tracing::warn!("birthday config not saved: no config store"),
                    },
                    AppOutcome::Continue => {}
                }
            }
        }

        // Carry the sub-millisecond remainder into the next frame.
        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        app.advance(elapsed_ms, Utc::now(), &mut rng);
    }

    tracing::info!("party closed");
    Ok(())
}
