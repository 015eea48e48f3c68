use ballbag::agents::TableSeat;
use ballbag::cards::{parse_cards, Card};
use ballbag::engine::ScoreBoard;
use ballbag::game::Game;
use ballbag::prompt::Prompter;
use ballbag::rules::Rules;
use std::error::Error;
use std::io::{BufRead, Write};

fn print_players<R: BufRead, W: Write>(
    board: &dyn ScoreBoard,
    prompter: &mut Prompter<R, W>,
) -> Result<(), Box<dyn Error>> {
    for (i, player) in board.leaders().iter().enumerate() {
        prompter.say(format!("\t{}. {} - {}", i + 1, player.name(), player.total_score()))?;
    }
    Ok(())
}

/// Every player holds at least one card when a call is made.
fn parse_held(answer: &str) -> Result<Vec<Card>, String> {
    let hand = parse_cards(answer).map_err(|e| e.to_string())?;
    if hand.is_empty() {
        return Err("Enter at least one card".to_string());
    }
    Ok(hand)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut prompter = Prompter::stdio();
    let mut game = Game::new(Rules::default());

    while let Some(name) = prompter.read_line("Enter player name: ")? {
        if name.is_empty() {
            break;
        }
        if game.seat_of(&name).is_some() {
            prompter.say(format!("{name} is already playing"))?;
            continue;
        }
        // the game is played at the table; only its results are entered here
        let seat = game.add_player(name, Box::new(TableSeat));
        prompter.say(&game.players()[seat])?;
    }
    if game.players().is_empty() {
        prompter.say("No players, nothing to score.")?;
        return Ok(());
    }

    while !game.is_finished() {
        prompter.say("May the best player win...")?;
        let caller = prompter.ask("Who called ballbag?: ", |s| {
            game.seat_of(s).ok_or_else(|| format!("Don't recognise that player. {s}"))
        })?;

        for seat in 0..game.players().len() {
            let prompt = format!("Cards held by {}: ", game.players()[seat].name());
            let hand = prompter.ask(&prompt, parse_held)?;
            if let Some(player) = game.player_mut(seat) {
                player.set_hand(hand);
            }
        }

        game.tally_scores(caller)?;
        prompter.say("Leaders are:")?;
        print_players(&game, &mut prompter)?;
    }

    prompter.say("And the winner is:")?;
    print_players(&game, &mut prompter)?;
    Ok(())
}
