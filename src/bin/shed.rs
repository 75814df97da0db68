use shed_rs::agents::{AgentTable, BotAgent, BotProfile};
use shed_rs::game::{Game, GameEvent, PlayError};

fn main() -> Result<(), PlayError> {
    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    println!("shed-rs {} — seeded bot match (seed {seed})", shed_rs::VERSION);

    let mut game = Game::new();
    game.new_round_seeded(seed);

    let mut agents = AgentTable::for_seats(2);
    agents.set_agent(0, Some(Box::new(BotAgent::new(BotProfile::default().with_seed(seed)))));
    agents.set_agent(1, Some(Box::new(BotAgent::new(BotProfile::default().with_seed(seed ^ 1)))));

    let mut reported = 0;
    while !game.is_over() {
        agents.on_turn(&mut game)?;
        for event in &game.events()[reported..] {
            print_event(&game, event);
        }
        reported = game.events().len();
    }

    if let Some(seat) = game.winner() {
        println!("{} wins", game.players()[seat].name());
    }
    Ok(())
}

fn print_event(game: &Game, event: &GameEvent) {
    match event {
        GameEvent::Played { seat, combination } => {
            println!(
                "{:>8}: {combination}  ({} left)",
                game.players()[*seat].name(),
                game.hand(*seat).len()
            );
        }
        GameEvent::Passed { seat } => {
            println!("{:>8}: pass", game.players()[*seat].name());
        }
        GameEvent::HandEmptied { seat } => {
            println!("{:>8}: hand emptied", game.players()[*seat].name());
        }
        _ => {}
    }
}
