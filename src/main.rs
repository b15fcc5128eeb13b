mod app;
mod domain;
mod input;
mod persistence;
mod report;
mod ticker;
mod timefmt;
mod timer;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Board;
use persistence::{ensure_data_dir, get_data_dir, init_local_dir, load_board};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A kanban-style terminal task board with per-task time budgets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskdeck directory in the current directory
    Init,
    /// Write a markdown snapshot of the board with statistics
    Report {
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let dir = init_local_dir()?;
            println!("Initialized taskdeck directory: {}", dir.display());
            println!();
            println!("Taskdeck will now use this local directory for board storage.");
            println!("Run 'taskdeck' to open the board.");
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let output_path = output.map(std::path::PathBuf::from);
            let report_path = report::generate_report(output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Ensure the data directory exists
    ensure_data_dir()?;

    // Show which directory we're using
    let data_dir = get_data_dir()?;
    eprintln!("Using taskdeck directory: {}", data_dir.display());

    // A missing or corrupt store means a fresh default board, never a crash
    let board = load_board()?.unwrap_or_else(Board::default_board);
    let mut app = AppState::new(board);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pause whatever is running and save on exit
    app.shutdown();

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render; the live countdown is re-derived on every draw
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Autosave after mutations; failures degrade to in-memory only
        if app.needs_save {
            app.save()?;
        }
    }
}
