pub mod map;
pub mod play;
pub mod simulate;

use std::path::Path;

use colored::Colorize;
use eb_engine::{EngineConfig, GameEngine, GameLogEntry, GameState, RumorPool, SeededRandom};

/// Build an engine config from command-line options.
pub fn config(seed: Option<u64>, beast: Option<String>, inquisitor: Option<String>) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.seed = seed;
    if let Some(name) = beast {
        config = config.with_beast_name(name);
    }
    if let Some(name) = inquisitor {
        config = config.with_inquisitor_name(name);
    }
    config
}

/// Start a game, drawing rumors from `rumors` when a table file is given.
pub fn start(config: &EngineConfig, rumors: Option<&Path>) -> Result<GameEngine, String> {
    let Some(path) = rumors else {
        return Ok(GameEngine::from_config(config));
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let pool = RumorPool::parse(&text).map_err(|e| format!("{}: {e}", path.display()))?;
    let seed = config.resolve_seed();
    Ok(GameEngine::with_sources(
        &config.clone().with_seed(seed),
        Box::new(SeededRandom::new(seed)),
        Box::new(pool),
    ))
}

/// Print log entries, highlighting the ones that matter.
fn print_entries(entries: &[GameLogEntry]) {
    for entry in entries {
        let message = entry.message.as_str();
        let line = if message.contains("VICTORY") || message.contains("HUNT SUCCESS") {
            message.green().bold()
        } else if message.contains("DEFEAT") || message.contains("SURPRISE") {
            message.red().bold()
        } else if message.contains("THE BEAST APPROACHES")
            || message.contains("ARRIVED")
            || message.contains("lunges")
        {
            message.red()
        } else if message.contains("Rumor verified as truth") {
            message.green()
        } else if message.contains("false rumor") || message.contains("wound") {
            message.yellow()
        } else if message.contains("uncovers a rumor") {
            message.cyan()
        } else {
            message.normal()
        };
        println!("  {line}");
    }
}

/// One-line status: date, place, wounds, and what the Inquisitor knows.
fn status_line(state: &GameState) -> String {
    let beast = match (state.beast_location, state.beast_distance) {
        (Some(at), Some(d)) => format!("Beast at {at} ({d} road(s) away)"),
        (Some(at), None) => format!("Beast at {at}"),
        _ => "Beast unseen".to_string(),
    };
    format!(
        "{} {}, {} | Round {} | {} (Location {}) | Health {}/3 | Actions {} | Rumors {} | Secrets {} | {}",
        state.current_month,
        state.current_day,
        state.current_year,
        state.current_round,
        state.player_location.name(),
        state.player_location,
        state.health,
        state.actions_remaining,
        state.investigation.rumors.len(),
        state.investigation.secrets.len(),
        beast,
    )
}
