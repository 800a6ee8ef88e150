// Trivia Grid CLI - play the daily grid from the terminal

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use trivia_grid::{
    country_launch_date, current_day, load_countries, load_office_holders, load_schedule,
    president_launch_date, Cell, Country, Domain, GridEntity, GridSession, GuessOutcome,
    OfficeHolder, GRID_SIZE,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("countries") => run::<Country>(&args[2..], Domain::Country),
        Some("presidents") => run::<OfficeHolder>(&args[2..], Domain::OfficeHolder),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("Trivia Grid v{}", trivia_grid::VERSION);
    println!();
    println!("Usage:");
    println!("  trivia-grid countries  <data.csv> <grids.json> [day]");
    println!("  trivia-grid presidents <data.csv> <grids.json> [day]");
    println!();
    println!("In play: `<cell 1-9> <name>` to guess, `reveal <cell>`,");
    println!("`board`, `giveup`, `quit`.");
}

fn run<E: GridEntity + LoadRecords>(args: &[String], domain: Domain) -> Result<()> {
    let [csv_path, json_path, rest @ ..] = args else {
        print_usage();
        bail!("expected <data.csv> <grids.json> [day]");
    };

    let records = E::load(Path::new(csv_path))?;
    println!("📋 Loaded {} {} records", records.len(), domain.name());

    let schedule = load_schedule(Path::new(json_path))?;

    let launch = match domain {
        Domain::Country => country_launch_date(),
        Domain::OfficeHolder => president_launch_date(),
    };
    let day = match rest.first() {
        Some(d) => d.parse::<i64>().context("day must be a number")?,
        None => current_day(launch, Local::now().date_naive()),
    };
    if day < 1 {
        bail!("Grid #{day} is not published yet (launch {launch})");
    }
    let grid = schedule
        .get(&(day as u32))
        .with_context(|| format!("No grid published for day {day}"))?
        .clone();

    println!("🗓️  GRID #{day:03}");

    let state_path = state_file(domain, day);
    let mut session = load_or_new(&state_path, day, grid, domain);
    print_board(&session);

    let stdin = io::stdin();
    while !session.is_over() {
        print!("({} left) > ", session.guesses_left);
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match parse_command(input) {
            Command::Quit => break,
            Command::GiveUp => {
                session = session.give_up();
            }
            Command::Board => print_board(&session),
            Command::Reveal(cell) => reveal(&session, &records, cell),
            Command::Guess { cell, name } => {
                let (next, outcome) = session.guess(&records, &name, cell);
                session = next;
                report(&outcome);
                if matches!(outcome, GuessOutcome::Correct { .. }) {
                    print_board(&session);
                }
            }
            Command::Unknown => {
                println!("❓ Try `<cell 1-9> <name>`, `reveal <cell>`, `board`, `giveup`, `quit`");
            }
        }
        save_state(&state_path, day, &session)?;
    }

    if session.is_over() {
        print_endgame(&session, &records);
        save_state(&state_path, day, &session)?;
    }
    Ok(())
}

// ============================================================================
// COMMANDS
// ============================================================================

enum Command {
    Guess { cell: usize, name: String },
    Reveal(usize),
    Board,
    GiveUp,
    Quit,
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let mut parts = input.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("").to_lowercase();
    let tail = parts.next().unwrap_or("").trim();

    match head.as_str() {
        "quit" | "exit" => Command::Quit,
        "giveup" | "forfeit" => Command::GiveUp,
        "board" => Command::Board,
        "reveal" => match tail.parse::<usize>() {
            // cells are shown 1-based
            Ok(n) if (1..=GRID_SIZE).contains(&n) => Command::Reveal(n - 1),
            _ => Command::Unknown,
        },
        _ => match head.parse::<usize>() {
            Ok(n) if (1..=GRID_SIZE).contains(&n) && !tail.is_empty() => Command::Guess {
                cell: n - 1,
                name: tail.to_string(),
            },
            _ => Command::Unknown,
        },
    }
}

fn report(outcome: &GuessOutcome) {
    match outcome {
        GuessOutcome::Correct { name, .. } => println!("✅ {name}!"),
        GuessOutcome::Incorrect => println!("❌ Not a match for that cell"),
        GuessOutcome::UnknownEntity => println!("❌ Name not in the dataset"),
        GuessOutcome::AlreadyUsed => println!("❌ Already placed on this board"),
        GuessOutcome::InvalidCell => println!("❌ That cell is unavailable"),
        GuessOutcome::GameOver => println!("🏁 Game over"),
    }
}

fn print_board(session: &GridSession) {
    println!();
    println!("        [1] {}", session.grid.columns[0]);
    println!("        [2] {}", session.grid.columns[1]);
    println!("        [3] {}", session.grid.columns[2]);
    for (i, row_label) in session.grid.rows.iter().enumerate() {
        let cells: Vec<String> = (0..3)
            .map(|j| match &session.board[i * 3 + j] {
                Cell::Filled(name) => format!("{:>2}:{name}", i * 3 + j + 1),
                Cell::Empty => format!("{:>2}:·", i * 3 + j + 1),
            })
            .collect();
        println!("  {} | {}", cells.join("  "), row_label);
    }
    println!();
}

fn reveal<E: GridEntity>(session: &GridSession, records: &[E], cell: usize) {
    let answers = session.valid_answers(records, cell);
    if answers.is_empty() {
        println!("🤷 No valid answer for cell {}", cell + 1);
    } else {
        println!("💡 Cell {}: {}", cell + 1, answers.join(", "));
    }
}

fn print_endgame<E: GridEntity>(session: &GridSession, records: &[E]) {
    println!(
        "🏁 Final score: {}/{}",
        session.correct_count(),
        GRID_SIZE
    );
    for cell in 0..GRID_SIZE {
        if session.board[cell].is_empty() {
            reveal(session, records, cell);
        }
    }
    println!();
    println!("{}", session.share_text());
}

// ============================================================================
// STATE PERSISTENCE
// ============================================================================

#[derive(Serialize, Deserialize)]
struct SavedState {
    day: i64,
    session: GridSession,
}

fn state_file(domain: Domain, day: i64) -> PathBuf {
    let dir = env::temp_dir().join("trivia-grid");
    dir.join(format!("{}-{day}.json", domain.name().to_lowercase()))
}

fn load_or_new(path: &Path, day: i64, grid: trivia_grid::DailyGrid, domain: Domain) -> GridSession {
    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(saved) = serde_json::from_str::<SavedState>(&raw) {
            // a stale or mismatched save is discarded, never replayed
            if saved.day == day && saved.session.grid == grid {
                println!("💾 Resuming saved session");
                return saved.session;
            }
        }
    }
    GridSession::new(grid, domain)
}

fn save_state(path: &Path, day: i64, session: &GridSession) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create state directory")?;
    }
    let saved = SavedState {
        day,
        session: session.clone(),
    };
    fs::write(path, serde_json::to_string_pretty(&saved)?).context("Failed to save session")?;
    Ok(())
}

// ============================================================================
// RECORD LOADING
// ============================================================================

trait LoadRecords: Sized {
    fn load(path: &Path) -> Result<Vec<Self>>;
}

impl LoadRecords for Country {
    fn load(path: &Path) -> Result<Vec<Self>> {
        load_countries(path)
    }
}

impl LoadRecords for OfficeHolder {
    fn load(path: &Path) -> Result<Vec<Self>> {
        load_office_holders(path)
    }
}
