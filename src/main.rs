use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use resource_explorer::core::constants::FRAME_POLL_MS;
use resource_explorer::input::{handle_game_input, map_key, InputResult};
use resource_explorer::ui::draw_ui;
use resource_explorer::utils::{build_info, logging, persistence};
use resource_explorer::{EngineEvent, GameConfig, GameEngine};
use std::io;
use std::time::{Duration, Instant};

/// Parsed command line.
struct CliArgs {
    seed: Option<u64>,
    write_config: bool,
}

fn print_help() {
    println!("Resource Explorer - classify resources, climb ladders, dodge snakes\n");
    println!("Usage: resource-explorer [options]\n");
    println!("Options:");
    println!("  --seed <N>       Seed the question order");
    println!("  --write-config   Write the default config file and exit");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn parse_args() -> CliArgs {
    let mut cli = CliArgs {
        seed: None,
        write_config: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => cli.seed = Some(seed),
                None => {
                    eprintln!("--seed needs a non-negative integer");
                    std::process::exit(1);
                }
            },
            "--write-config" => cli.write_config = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'resource-explorer --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    cli
}

fn main() -> io::Result<()> {
    let cli = parse_args();

    if cli.write_config {
        let path = persistence::save_config(&GameConfig::default())?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    let config = persistence::load_config();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("Starting with {:?} (seed {:?})", config, cli.seed);

    let mut engine = GameEngine::start(config, &mut rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut engine, &mut rng);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game loop failed: {}", e);
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    engine: &mut GameEngine,
    rng: &mut StdRng,
) -> io::Result<()> {
    let started = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, engine.state(), engine.board()))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                // Windows reports both press and release
                if key_event.kind == KeyEventKind::Press {
                    match handle_game_input(map_key(key_event), engine) {
                        InputResult::Quit => break,
                        InputResult::Changed(events) => log_events(&events),
                        InputResult::Continue => {}
                    }
                }
            }
        }

        let events = engine.sync_to_elapsed(started.elapsed(), rng);
        log_events(&events);
    }

    log::info!(
        "Quit at position {} with score {}",
        engine.state().position,
        engine.state().score
    );
    Ok(())
}

fn log_events(events: &[EngineEvent]) {
    for event in events {
        log::trace!("{:?}", event);
    }
}
