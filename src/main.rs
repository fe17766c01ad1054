use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use seabattle::{
    init_logging,
    render::{render_attack_board, render_fleet, render_ship_board},
    BattleReply, Game, GameConfig, Phase, PlacementError, PlacementReply, PlayerId, SaveStore,
    ShotResult, DEFAULT_SAVE_FILE, TOTAL_SHIP_CELLS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Save file location.
    #[arg(long, default_value = DEFAULT_SAVE_FILE)]
    save_file: PathBuf,

    /// Hits required to win. The standard fleet has 20 cells.
    #[arg(long, default_value_t = TOTAL_SHIP_CELLS)]
    victory_threshold: u32,
}

/// How a finished game run ended.
enum Exit {
    PlayAgain,
    Quit,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig {
        victory_threshold: cli.victory_threshold,
    };
    let store = SaveStore::new(cli.save_file);

    let mut game = match startup(&store, config)? {
        Some(game) => game,
        None => Game::new(config),
    };
    loop {
        match run(&mut game, &store)? {
            Exit::PlayAgain => game = Game::new(config),
            Exit::Quit => break,
        }
    }
    println!("\nBye! Thanks for playing!");
    Ok(())
}

/// Offer to resume a saved game. Load problems are reported and treated
/// as "no saved game".
fn startup(store: &SaveStore, config: GameConfig) -> anyhow::Result<Option<Game>> {
    if !store.exists() {
        return Ok(None);
    }
    let answer = prompt(&format!(
        "\nSaved game found! Load from {}? (y/n): ",
        store.path().display()
    ))?;
    match answer {
        Some(ans) if ans.eq_ignore_ascii_case("y") => {}
        _ => return Ok(None),
    }
    match store.load() {
        Ok(Some(snapshot)) => match Game::from_snapshot(&snapshot, config) {
            Ok(game) => {
                log::info!("resumed saved game from {}", store.path().display());
                Ok(Some(game))
            }
            Err(e) => {
                println!("\nError loading game: {}", e);
                Ok(None)
            }
        },
        Ok(None) => Ok(None),
        Err(e) => {
            println!("\nError loading game: {}", e);
            Ok(None)
        }
    }
}

/// Drive one game to a terminal phase.
fn run(game: &mut Game, store: &SaveStore) -> anyhow::Result<Exit> {
    loop {
        match game.phase() {
            Phase::Placing(player) => placement_turn(game, player)?,
            Phase::Battle(player) => battle_turn(game, player, store)?,
            Phase::Won(player) => return victory(player),
            Phase::Quit => return Ok(Exit::Quit),
        }
    }
}

fn placement_turn(game: &mut Game, player: PlayerId) -> anyhow::Result<()> {
    println!("\n{}'s Board\n", player);
    print!("{}", render_ship_board(game.session().board()));
    println!();
    print!("{}", render_fleet(game.session().fleet()));
    println!("\nControls:");
    println!("Format: [length][row][column][direction]");
    println!("Examples: 6A1R (Carrier at A1 going right), 4B10L (Cruiser at B10 going left)");
    println!("Directions: R = right, L = left, U = up, D = down");
    println!("Special: 'x' to reset the board, 'xxx' to quit");

    let line = match prompt("\nEnter placement code: ")? {
        Some(line) => line,
        None => {
            game.quit();
            return Ok(());
        }
    };
    match game.handle_placement(&line) {
        Ok(PlacementReply::Placed(def)) => {
            log::debug!("{} placed their {}", player, def.name());
        }
        Ok(PlacementReply::FleetComplete(_)) => confirm_placement(game, player)?,
        Ok(PlacementReply::Reset) => println!("\nAll ships removed!"),
        Ok(PlacementReply::Quit) => {}
        Err(e) => report_placement_error(&e),
    }
    Ok(())
}

fn report_placement_error(err: &PlacementError) {
    match err {
        PlacementError::Malformed(msg) => println!("\n{}", msg),
        PlacementError::Rejected(violations) => {
            for v in violations {
                println!("\n{}", v);
            }
        }
    }
}

fn confirm_placement(game: &mut Game, player: PlayerId) -> anyhow::Result<()> {
    println!("\n{}'s Board\n", player);
    print!("{}", render_ship_board(game.session().board()));
    println!("\nAll ships placed!");
    let accept = matches!(
        prompt("\nAre you satisfied with your ship placement? (y/n): ")?,
        Some(ans) if ans.eq_ignore_ascii_case("y")
    );
    if accept {
        println!("\nShip placement confirmed!");
        log::info!("{} confirmed their board", player);
    } else {
        println!("\nResetting your board, place your ships again!");
    }
    game.confirm_placement(accept);
    Ok(())
}

fn battle_turn(game: &mut Game, player: PlayerId, store: &SaveStore) -> anyhow::Result<()> {
    println!("\n{}'s Attack Board\n", player);
    print!("{}", render_attack_board(game.player(player).attack_board()));
    println!("\nControls:");
    println!("Format: [letter][number]");
    println!("Examples: A5, B10");
    println!("Special: 'save' to save and exit, 'xxx' to quit");

    let line = match prompt("\nEnter the coordinate you would like to attack: ")? {
        Some(line) => line,
        None => {
            game.quit();
            return Ok(());
        }
    };
    match game.handle_battle(&line) {
        Ok(BattleReply::Shot { target, result }) => {
            println!("\n{}'s Attack Board\n", player);
            print!("{}", render_attack_board(game.player(player).attack_board()));
            match result {
                ShotResult::Miss => println!("\nMiss!"),
                ShotResult::Hit | ShotResult::Victory => println!("\nHit!"),
            }
            log::debug!("{} fired at {}: {:?}", player, target, result);
        }
        Ok(BattleReply::SaveRequested(snapshot)) => match store.save(&snapshot) {
            Ok(()) => {
                println!("\nGame successfully saved to {}.", store.path().display());
                log::info!("game saved to {}", store.path().display());
                game.quit();
            }
            Err(e) => {
                // The game continues unsaved.
                println!("\nError saving game: {}", e);
            }
        },
        Ok(BattleReply::Quit) => {}
        Err(e) => println!("\n{}", e),
    }
    Ok(())
}

fn victory(player: PlayerId) -> anyhow::Result<Exit> {
    println!("\n{} has won! Congrats!", player);
    log::info!("{} won", player);
    match prompt("\nWould you like to play again? (y/n): ")? {
        Some(ans) if ans.eq_ignore_ascii_case("y") => Ok(Exit::PlayAgain),
        _ => Ok(Exit::Quit),
    }
}

/// Print a prompt and read one trimmed line. `None` on end of input.
fn prompt(message: &str) -> anyhow::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
