use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use eb_core::LocationId;
use eb_engine::{ActionResponse, EngineConfig, GameEngine};

use super::{print_entries, status_line};

const HELP: &str = "\
  move <id>     walk to a neighboring location (e.g. move IV)
  investigate   search the rumor token here
  verify        test your rumors (All-Hallows-The-Great only)
  hunt          fight the Beast where you stand
  wait          spend an action doing nothing
  status        show where things stand
  log           print the whole investigation log
  map           show the locations and roads
  help          show this help
  quit          leave the game";

pub fn run(config: EngineConfig, rumors: Option<&Path>) -> Result<(), String> {
    let mut engine = super::start(&config, rumors)?;

    println!("  {} The Eleventh Beast", "Starting".bold());
    println!("  Seed: {}", engine.state().seed);
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    print_entries(engine.log().entries());
    println!("\n  {}\n", status_line(engine.state()).dimmed());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default().to_lowercase();
        let seen = engine.log().len();

        let response = match command.as_str() {
            "quit" | "q" => break,
            "help" | "?" => {
                println!("{HELP}\n");
                continue;
            }
            "status" => {
                println!("  {}\n", status_line(engine.state()));
                continue;
            }
            "log" => {
                print!("{}", engine.log().export_text());
                println!();
                continue;
            }
            "map" => {
                super::map::run()?;
                continue;
            }
            "move" | "m" => match words.next().map(str::parse::<LocationId>) {
                Some(Ok(target)) => engine.move_player(target),
                Some(Err(e)) => {
                    println!("{}\n", e.to_string().yellow());
                    continue;
                }
                None => {
                    println!("{}\n", "Move where? Try 'move IV'.".yellow());
                    continue;
                }
            },
            "investigate" | "i" => engine.investigate(),
            "verify" | "v" => engine.verify_rumors(),
            "hunt" | "h" => engine.hunt_beast(),
            "wait" | "w" => engine.complete_action(),
            other => {
                println!("{}\n", format!("Unknown command '{other}'. Type 'help'.").yellow());
                continue;
            }
        };

        let response = finish_action(&mut engine, response, matches!(command.as_str(), "wait" | "w"));
        report(&engine, &response, seen);

        if engine.state().game_ended {
            let verdict = if engine.state().victorious {
                "The Beast is slain.".green().bold()
            } else {
                "The Inquisitor has fallen.".red().bold()
            };
            println!("  {verdict}\n");
            break;
        }
    }

    Ok(())
}

/// Spend the action a successful command used, unless it already did.
fn finish_action(engine: &mut GameEngine, response: ActionResponse, spent: bool) -> ActionResponse {
    if !response.success || spent || engine.state().game_ended {
        return response;
    }
    let mut after = engine.complete_action();
    after.message = format!("{} {}", response.message, after.message);
    after.dice_rolls = response.dice_rolls;
    after.lowest_roll = response.lowest_roll;
    after
}

fn report(engine: &GameEngine, response: &ActionResponse, seen: usize) {
    if let Some(rolls) = &response.dice_rolls {
        let faces: Vec<String> = rolls.iter().map(u32::to_string).collect();
        println!("  Dice: [{}]", faces.join(", ").bold());
    }
    print_entries(engine.log().since(seen));
    if response.success {
        println!("  {}", response.message);
    } else {
        println!("  {}", response.message.yellow());
    }
    println!("\n  {}\n", status_line(engine.state()).dimmed());
}
