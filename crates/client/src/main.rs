//! Headless dungeon client.
//!
//! Composition root: reads configuration from the environment, sets up
//! logging, restores or starts a session and then feeds it one decoded
//! command per stdin line. Turn reports are printed to stdout.
//!
//! ```bash
//! DUNGEON_SEED=7 cargo run -p dungeon-client
//! ```

mod config;
mod input;
mod logging;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use game_content::{Catalog, CatalogLoader, ConfigLoader, MonasteryLayout};
use game_core::{GameConfig, GameError, LayoutGenerator};
use runtime::{FileSaveRepository, Mode, SaveRepository, Session, SessionError, TurnReport};

use config::ClientConfig;
use input::Command;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.log_dir, &config.session_id)?;
    for key in &config.ignored {
        tracing::warn!(key, "ignoring malformed environment variable");
    }

    let game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let catalog = match &config.catalog_path {
        Some(path) => CatalogLoader::load(path)?,
        None => Catalog::builtin(),
    };
    let layout =
        || -> Box<dyn LayoutGenerator> { Box::new(MonasteryLayout::new(catalog.clone())) };

    let repository = FileSaveRepository::new(&config.save_dir)?;
    let slot = config.session_id.as_str();

    let mut session = match Session::load(&repository, slot, game_config.clone(), layout())? {
        Some(session) => session,
        None => {
            let seed = config.seed.unwrap_or_else(rand::random);
            Session::new_game(seed, game_config, &catalog, layout())?
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, &repository, slot, stdin.lock(), &mut stdout.lock())
}

/// Plays until quit or end of input, then settles the save slot.
///
/// If the loop itself fails (a broken pipe, unreadable input) the session is
/// still saved before the error is returned.
fn run(
    session: &mut Session,
    repository: &dyn SaveRepository,
    slot: &str,
    reader: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match play(session, reader, out) {
        Ok(save) => finish(session, repository, slot, save),
        Err(error) => {
            tracing::error!("input loop failed: {error:#}");
            if let Err(save_error) = finish(session, repository, slot, true) {
                tracing::error!(slot, "emergency save failed: {save_error:#}");
            }
            Err(error)
        }
    }
}

/// Feeds input lines to the session. Returns whether the run should be saved.
fn play(session: &mut Session, reader: impl BufRead, out: &mut impl Write) -> Result<bool> {
    for message in session.state().log.recent(5).collect::<Vec<_>>().into_iter().rev() {
        writeln!(out, "{}", message.full_text())?;
    }
    writeln!(out, "type `help` for commands")?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let intent = match input::parse(&line) {
            Ok(Command::Intent(intent)) => intent,
            Ok(Command::Look(position)) => {
                let names = session.look(position);
                writeln!(out, "{}", if names.is_empty() { "nothing" } else { names.as_str() })?;
                continue;
            }
            Ok(Command::Help) => {
                writeln!(out, "{}", input::HELP)?;
                continue;
            }
            Err(error) => {
                writeln!(out, "? {error:#}")?;
                continue;
            }
        };

        match session.handle(intent) {
            Ok(report) => print_report(out, &report)?,
            Err(SessionError::Quit { save }) => return Ok(save),
            Err(error) => {
                // The state is still consistent; keep playing.
                tracing::error!(
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "turn failed: {error}"
                );
                writeln!(out, "! {error}")?;
            }
        }
    }

    // Input closed without an explicit quit.
    Ok(true)
}

/// Saves (or clears a finished run) before exit.
fn finish(
    session: &Session,
    repository: &dyn SaveRepository,
    slot: &str,
    save: bool,
) -> Result<()> {
    if session.mode() == Mode::GameOver {
        repository.delete(slot)?;
        tracing::info!(slot, "run over, save cleared");
    } else if save {
        session.save(repository, slot)?;
    }
    Ok(())
}

fn print_report(out: &mut impl Write, report: &TurnReport) -> io::Result<()> {
    for message in &report.new_messages {
        writeln!(out, "{}", message.full_text())?;
    }
    let prompt = match report.mode {
        Mode::Normal => String::new(),
        Mode::AwaitingTile { cursor, .. } => format!("  [targeting {cursor}]"),
        Mode::AwaitingLevelUp => "  [level up: vitality, strength or agility]".to_owned(),
        Mode::GameOver => "  [game over]".to_owned(),
    };
    writeln!(
        out,
        "HP {}/{}  floor {}{}",
        report.hp, report.max_hp, report.floor, prompt
    )
}
