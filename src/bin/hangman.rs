//! Terminal hangman.
//!
//! Reads one command per line from stdin: a letter to guess, `new`,
//! `difficulty <tier>`, `hint`, `help` or `quit`. An empty line after a
//! round has ended starts the next one.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hangman_engine::core::{Difficulty, EngineConfig, GameRng};
use hangman_engine::{Outcome, Round, RoundEngine, RoundEvent, RoundView};

#[derive(Parser)]
#[command(name = "hangman")]
#[command(about = "Play hangman in the terminal", long_about = None)]
struct Cli {
    /// Difficulty tier: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// RNG seed for reproducible word selection
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML word pool file (built-in pools if omitted)
    #[arg(short, long, value_name = "FILE")]
    words: Option<PathBuf>,

    /// Ring the terminal bell on wrong guesses and at the end of a round
    #[arg(long)]
    bell: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Guess(String),
    New,
    Difficulty(String),
    Hint,
    Help,
    Quit,
    Empty,
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None => Command::Empty,
            Some("new") => Command::New,
            Some("hint") => Command::Hint,
            Some("help" | "?") => Command::Help,
            Some("quit" | "exit") => Command::Quit,
            Some("difficulty") => Command::Difficulty(parts.collect::<Vec<_>>().join(" ")),
            Some(_) => Command::Guess(line.to_string()),
        }
    }
}

struct Session {
    engine: RoundEngine,
    difficulty: Difficulty,
    round: Round,
    last: Option<Outcome>,
}

impl Session {
    fn new(mut engine: RoundEngine, difficulty: Difficulty) -> Result<Self> {
        let round = engine
            .start_round_for(difficulty)
            .with_context(|| format!("cannot start a {difficulty} round"))?;
        Ok(Self {
            engine,
            difficulty,
            round,
            last: None,
        })
    }

    fn new_round(&mut self) -> Result<()> {
        self.round = self.engine.start_round_for(self.difficulty)?;
        self.last = None;
        Ok(())
    }

    fn view(&self) -> RoundView {
        RoundView::new(&self.round, self.last.as_ref())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

const HELP: &str = "Type a letter to guess. Commands: new, difficulty <easy|medium|hard>, hint, help, quit.";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.words {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load word pools from {}", path.display()))?,
        None => EngineConfig::standard(),
    };
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut engine = RoundEngine::with_rng(config, rng).context("invalid word pool configuration")?;

    if cli.bell {
        engine.subscribe(Box::new(|event: &RoundEvent| {
            let ring = matches!(
                event,
                RoundEvent::GuessResolved { outcome: Outcome::Incorrect { .. } }
                    | RoundEvent::RoundWon { .. }
                    | RoundEvent::RoundLost { .. }
            );
            if ring {
                print!("\x07");
            }
        }));
    }

    let mut session = Session::new(engine, cli.difficulty)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Hangman ({}). {HELP}\n", session.difficulty)?;
    writeln!(stdout, "{}\n", session.view())?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => {
                writeln!(stdout, "{HELP}\n")?;
                continue;
            }
            Command::Hint => {
                match session.round.hint() {
                    Some(hint) => writeln!(stdout, "Hint: {hint}\n")?,
                    None => writeln!(stdout, "No hint for this word.\n")?,
                }
                continue;
            }
            Command::New => session.new_round()?,
            Command::Empty if session.round.is_over() => session.new_round()?,
            Command::Empty => continue,
            Command::Difficulty(name) => match name.parse::<Difficulty>() {
                Ok(difficulty) if session.engine.config().tier(difficulty).is_some() => {
                    session.difficulty = difficulty;
                    session.new_round()?;
                }
                Ok(difficulty) => {
                    writeln!(stdout, "No word pool configured for {difficulty}.\n")?;
                    continue;
                }
                Err(err) => {
                    writeln!(stdout, "{err}\n")?;
                    continue;
                }
            },
            Command::Guess(input) => {
                let (round, outcome) = session.engine.guess_str(&session.round, &input);
                session.round = round;
                session.last = Some(outcome);
            }
        }

        writeln!(stdout, "{}", session.view())?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("  "), Command::Empty);
        assert_eq!(Command::parse("NEW"), Command::New);
        assert_eq!(Command::parse("New Game"), Command::New);
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("difficulty  hard"), Command::Difficulty("hard".to_string()));
        assert_eq!(Command::parse(" e "), Command::Guess("e".to_string()));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["hangman", "-d", "hard", "--seed", "7", "-vv"]).unwrap();
        assert_eq!(cli.difficulty, Difficulty::Hard);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.verbose, 2);

        assert!(Cli::try_parse_from(["hangman", "-d", "brutal"]).is_err());
    }

    #[test]
    fn test_session_new_round_resets() {
        let engine = RoundEngine::new(EngineConfig::standard(), 5).unwrap();
        let mut session = Session::new(engine, Difficulty::Easy).unwrap();

        let (round, outcome) = session.engine.guess_str(&session.round, "e");
        session.round = round;
        session.last = Some(outcome);

        session.new_round().unwrap();
        assert_eq!(session.round.guessed_count(), 0);
        assert!(session.last.is_none());
        assert_eq!(session.round.wrong_limit(), 8);
    }
}
