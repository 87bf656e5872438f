use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use eb_core::{LocationId, calculate_distance, find_path};
use eb_engine::{ActionResponse, EngineConfig, GameEngine, GamePhase, GameState};

use super::print_entries;

/// Secrets the policy wants before it picks a fight on its own.
const HUNT_READY: usize = 3;

/// What the policy does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Hunt,
    Verify,
    Investigate,
    Walk(LocationId),
    Wait,
}

pub fn run(
    seed: u64,
    days: u32,
    json: bool,
    output: Option<&Path>,
    rumors: Option<&Path>,
) -> Result<(), String> {
    let config = EngineConfig::default().with_seed(seed);
    let mut engine = super::start(&config, rumors)?;

    // Each step spends an action, so this only trips on a stuck policy.
    let max_steps = (days as usize + 1) * 8;
    let mut steps = 0;
    while !engine.state().game_ended && engine.state().days_elapsed < days && steps < max_steps {
        let response = step(&mut engine);
        if !response.success {
            tracing::warn!(message = %response.message, "policy chose a refused action");
        }
        steps += 1;
    }

    let view = engine.get_game_state();
    let rendered =
        serde_json::to_string_pretty(&view).map_err(|e| format!("failed to encode game: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &rendered)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }

    if json {
        println!("{rendered}");
        return Ok(());
    }

    print_summary(&engine, seed, days);
    if let Some(path) = output {
        println!("  Game written to {}", path.display());
    }
    Ok(())
}

/// Pick an action for the current state.
fn choose(state: &GameState) -> Choice {
    let secrets = state.investigation.secrets.len();
    if state.game_phase == GamePhase::Hunt
        || (state.beast_is_here() && secrets >= HUNT_READY)
    {
        return Choice::Hunt;
    }
    let here = state.player_location;
    if here == LocationId::II && state.unverified_count() > 0 {
        return Choice::Verify;
    }
    if state.has_token(here) && !state.beast_is_here() {
        return Choice::Investigate;
    }

    let goal = if state.unverified_count() >= 2 {
        LocationId::II
    } else {
        nearest_token(state).unwrap_or(LocationId::II)
    };
    match find_path(here, goal).get(1) {
        Some(&next) => Choice::Walk(next),
        None => Choice::Wait,
    }
}

fn nearest_token(state: &GameState) -> Option<LocationId> {
    state
        .rumors_tokens
        .iter()
        .filter(|&(&at, &present)| present && Some(at) != state.beast_location)
        .filter_map(|(&at, _)| calculate_distance(state.player_location, at).map(|d| (d, at)))
        .min()
        .map(|(_, at)| at)
}

/// Take one action and spend it.
fn step(engine: &mut GameEngine) -> ActionResponse {
    let choice = choose(engine.state());
    tracing::debug!(?choice, "policy");
    let response = match choice {
        Choice::Hunt => engine.hunt_beast(),
        Choice::Verify => engine.verify_rumors(),
        Choice::Investigate => engine.investigate(),
        Choice::Walk(to) => engine.move_player(to),
        Choice::Wait => return engine.complete_action(),
    };
    if response.success && !engine.state().game_ended {
        engine.complete_action()
    } else {
        response
    }
}

fn print_summary(engine: &GameEngine, seed: u64, days: u32) {
    let state = engine.state();
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("(seed={seed}, up to {days} days)").dimmed()
    );
    println!();

    println!("  {}", "Investigation Log".bold().underline());
    println!();
    print_entries(engine.log().entries());
    println!();

    let outcome = if !state.game_ended {
        "Unresolved".yellow().bold()
    } else if state.victorious {
        "Victory".green().bold()
    } else {
        "Defeat".red().bold()
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Days", "Rounds", "Wounds", "Rumors", "Secrets", "Equipment"]);
    table.add_row(vec![
        outcome.to_string(),
        state.days_elapsed.to_string(),
        state.current_round.to_string(),
        state.wounds.to_string(),
        state.investigation.rumors.len().to_string(),
        state.investigation.secrets.len().to_string(),
        state.equipment_collected.to_string(),
    ]);
    println!("{table}");
    println!();
    println!(
        "  Final date: {} {}, {}",
        state.current_month, state.current_day, state.current_year
    );
}
