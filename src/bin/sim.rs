use seabattle::transport::in_memory;
use seabattle::{AiPlayer, FieldGenerator, GameOutcome, PlayerNode, RandomField};
use serde_json::json;

fn outcome_name(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Aborted(reason) => format!("Aborted: {}", reason),
        other => format!("{:?}", other),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let field = RandomField::default();
    let (c1, c2) = in_memory::pair();

    let mut n1 = PlayerNode::with_board(
        Box::new(AiPlayer::new(seed1)),
        field.generate(seed1)?,
        field.fleet_cells(),
        Box::new(c1),
        true,
    );
    let mut n2 = PlayerNode::with_board(
        Box::new(AiPlayer::new(seed2)),
        field.generate(seed2)?,
        field.fleet_cells(),
        Box::new(c2),
        false,
    );

    let (res1, res2) = tokio::join!(n1.run(), n2.run());

    let winner = match (&res1, &res2) {
        (GameOutcome::LocalWon, GameOutcome::RemoteWon) => Some("player1"),
        (GameOutcome::RemoteWon, GameOutcome::LocalWon) => Some("player2"),
        _ => None,
    };

    let result = json!({
        "player1": {"outcome": outcome_name(&res1), "shots": n1.shots_fired()},
        "player2": {"outcome": outcome_name(&res2), "shots": n2.shots_fired()},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
