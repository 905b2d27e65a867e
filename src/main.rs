use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::core::{self as game_core, RunSummary};
use flappy::input::TerminalTicker;
use flappy::{logging, ui, ConfigStore, GameConfig, GameState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Options {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
    init_config: bool,
}

enum Command {
    Play(Options),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "init-config" => options.init_config = true,
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = iter.next().ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown command: {}", other)),
        }
    }

    Ok(Command::Play(options))
}

fn print_help() {
    println!("Flappy - Terminal side-scrolling reflex game\n");
    println!("Usage: flappy [options] [command]\n");
    println!("Commands:");
    println!("  init-config      Write the default configuration file");
    println!("\nOptions:");
    println!("  --seed <n>       Use a fixed seed for the pipe sequence");
    println!("  --config <path>  Load configuration from <path>");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("flappy {}", env!("CARGO_PKG_VERSION"));
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let store = ConfigStore::new(options.config_path.clone())?;

    if options.init_config {
        store.save(&GameConfig::default())?;
        println!("Wrote default configuration to {}", store.config_path().display());
        return Ok(());
    }

    let config = match store.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(store.log_path()) {
        eprintln!("Warning: file logging disabled: {}", e);
    }

    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!(
        "flappy {} starting (seed {}, config {})",
        env!("CARGO_PKG_VERSION"),
        seed,
        store.config_path().display()
    );

    let result = play(config, seed);

    match result {
        Ok(summary) => {
            println!(
                "Thanks for playing! Rounds: {}  Last score: {}",
                summary.rounds, summary.last_score
            );
            Ok(())
        }
        Err(e) => {
            log::error!("terminated: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the game on the alternate screen, restoring the terminal on every exit path.
fn play(config: GameConfig, seed: u64) -> io::Result<RunSummary> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout.execute(EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = run_game(config, seed);

    // Restore terminal
    let restored = disable_raw_mode().and(io::stdout().execute(LeaveAlternateScreen).map(|_| ()));

    let summary = result?;
    restored?;
    Ok(summary)
}

fn run_game(config: GameConfig, seed: u64) -> io::Result<RunSummary> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ticker = TerminalTicker::new(&config);
    let mut state = GameState::new(config);

    terminal.draw(|f| ui::draw(f, &state, 0))?;

    let summary = game_core::run(&mut state, &mut ticker, &mut rng, |state, frame| {
        terminal.draw(|f| ui::draw(f, state, frame.tick_index))?;
        Ok(())
    })?;

    terminal.show_cursor()?;
    Ok(summary)
}
