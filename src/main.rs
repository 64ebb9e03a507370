// robocmd: Time-Travel Robot Command Interpreter

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use robocmd::interpreter::constants::{DEFAULT_MAX_STEPS, DEFAULT_SNAPSHOT_MEMORY};
use robocmd::interpreter::engine::{Interpreter, Limits};
use robocmd::parser::parse;
use robocmd::ui::App;

/// Time-travel interpreter for the robot command language.
#[derive(Parser)]
#[command(
    name = "robocmd",
    version,
    about = "Time-travel interpreter for the robot command language"
)]
struct Cli {
    /// Path to the program source file
    file: PathBuf,

    /// Print the parsed program as a trace instead of opening the TUI
    #[arg(long, conflicts_with_all = ["run", "batch"])]
    print: bool,

    /// Execute without the TUI and print every move
    #[arg(long, conflicts_with = "batch")]
    run: bool,

    /// Treat each non-empty line as a separate program and print its trace
    #[arg(long)]
    batch: bool,

    /// Maximum number of primitive commands to execute
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// Snapshot history budget in bytes
    #[arg(long, default_value_t = DEFAULT_SNAPSHOT_MEMORY)]
    snapshot_limit: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    if cli.batch {
        process::exit(run_batch(&source));
    }

    eprintln!("Parsing {}...", cli.file.display());
    let program = match parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            process::exit(1);
        }
    };

    eprintln!(
        "Parsed successfully. Found {} top-level command(s), repeat depth {}.",
        program.body.len(),
        program.body.depth()
    );

    if cli.print {
        println!("{}", program);
        return Ok(());
    }

    let limits = Limits {
        max_steps: cli.max_steps,
        snapshot_memory: cli.snapshot_limit,
    };
    let mut interpreter = Interpreter::new(program, limits);

    // Run execution to build history
    eprintln!("Executing program...");
    let run_result = interpreter.run();
    match &run_result {
        Ok(()) => {
            eprintln!("Execution completed successfully.");
            eprintln!("Total snapshots: {}", interpreter.total_snapshots());
        }
        Err(e) => eprintln!("Runtime error: {}", e),
    }

    if cli.run {
        for line in interpreter.log() {
            println!("{}", line.text);
        }
        println!("final: {}", interpreter.robot());
        if run_result.is_err() {
            process::exit(1);
        }
        return Ok(());
    }

    if run_result.is_err() {
        eprintln!("Entering TUI with partial execution history...");
    }

    // Rewind to the beginning for TUI
    if let Err(e) = interpreter.rewind_to_start() {
        eprintln!("Warning: Failed to rewind to start: {}", e);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter, source, run_result.err());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

/// Parse every non-empty line as its own program and print its trace.
///
/// Returns the process exit code: 1 if any line failed to parse.
fn run_batch(source: &str) -> i32 {
    let mut failed = false;

    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        println!("text = \"{}\"", line);
        match parse(line) {
            Ok(node) => println!("node = {}", node),
            Err(e) => {
                println!("error: {}", e);
                failed = true;
            }
        }
    }

    i32::from(failed)
}
