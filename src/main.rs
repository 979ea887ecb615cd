use std::time::Duration;

use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio::net::TcpListener;

use seabattle::transport::{in_memory, tcp::TcpChannel};
use seabattle::ui::print_field_pair;
use seabattle::{
    init_logging, AiPlayer, CancelHandle, ConsolePlayer, FieldGenerator, GameOutcome, Player,
    PlayerNode, RandomField,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player sea battle over TCP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerType {
    Human,
    Ai,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Initiative {
    First,
    Second,
}

#[derive(Args, Debug)]
struct GameArgs {
    #[arg(long, help = "Seed for the field layout (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player: PlayerType,
    #[arg(long, value_enum, help = "Who fires first (default: the connecting side)")]
    initiative: Option<Initiative>,
    #[arg(long, help = "Abort if the peer stays silent this many seconds")]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Wait for an opponent to connect.
    Server {
        #[arg(long, default_value_t = 3333)]
        port: u16,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Connect to a waiting opponent.
    Client {
        #[arg(long, default_value = "127.0.0.1:3333")]
        connect: String,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Watch two AI players on this machine.
    Local {
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// How long a game may keep running after Ctrl-C before the process is
/// stopped outright. Covers a console prompt blocked on stdin.
const INTERRUPT_GRACE: Duration = Duration::from_secs(2);

/// Exit status after an interrupt the game could not handle itself.
const INTERRUPTED_EXIT_CODE: i32 = 130;

// Two workers keep the signal task running while the console player blocks
// one of them in `read_line`.
#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let cancel = CancelHandle::new();
    tokio::spawn(watch_interrupts(cancel.clone()));

    let token = cancel.token();
    match cli.command {
        Commands::Server { port, game } => {
            let listener = TcpListener::bind(("0.0.0.0", port)).await?;
            println!("Waiting for connection on port {}...", port);
            let (channel, addr) = tokio::select! {
                accepted = TcpChannel::accept(&listener) => accepted?,
                _ = token.cancelled() => bail!("interrupted before a peer connected"),
            };
            println!("Player connected from {}", addr);
            play(channel, game, false, &cancel).await
        }
        Commands::Client { connect, game } => {
            println!("Connecting to {}...", connect);
            let channel = tokio::select! {
                connected = TcpChannel::connect(&connect) => connected?,
                _ = token.cancelled() => bail!("interrupted while connecting"),
            };
            println!("Connected successfully!");
            play(channel, game, true, &cancel).await
        }
        Commands::Local { seed } => local(seed, &cancel).await,
    }
}

/// First Ctrl-C cancels every channel so the game unwinds with an error.
/// A second one, or a game still running after the grace period, ends the
/// process.
async fn watch_interrupts(cancel: CancelHandle) {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    log::warn!("interrupted, stopping the game");
    cancel.cancel();
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = tokio::time::sleep(INTERRUPT_GRACE) => {}
    }
    eprintln!("\nInterrupted.");
    std::process::exit(INTERRUPTED_EXIT_CODE);
}

async fn play(
    channel: TcpChannel,
    args: GameArgs,
    connector: bool,
    cancel: &CancelHandle,
) -> anyhow::Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Using seed: {} (layout is reproducible with --seed)", seed);
    let field = RandomField::default();
    let own = field.generate(seed)?;

    let first_move = match args.initiative {
        Some(Initiative::First) => true,
        Some(Initiative::Second) => false,
        None => connector,
    };
    let mut channel = channel.with_cancel(cancel.token());
    if let Some(secs) = args.timeout_secs {
        channel = channel.with_timeout(Duration::from_secs(secs));
    }
    let player: Box<dyn Player> = match args.player {
        PlayerType::Human => Box::new(ConsolePlayer::stdio()),
        PlayerType::Ai => Box::new(AiPlayer::new(seed.wrapping_add(1))),
    };

    let mut node = PlayerNode::with_board(
        player,
        own,
        field.fleet_cells(),
        Box::new(channel),
        first_move,
    );
    let outcome = node.run().await;
    println!("\nGame over");
    print_field_pair(node.game().own(), node.game().mirror());
    report(&outcome)
}

async fn local(seed: Option<u64>, cancel: &CancelHandle) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Starting local AI vs AI game with seed {}", seed);
    let field = RandomField::default();
    let (c1, c2) = in_memory::pair();

    let mut first = PlayerNode::with_board(
        Box::new(AiPlayer::new(seed.wrapping_add(2))),
        field.generate(seed)?,
        field.fleet_cells(),
        Box::new(c1.with_cancel(cancel.token())),
        true,
    );
    let mut second = PlayerNode::with_board(
        Box::new(AiPlayer::new(seed.wrapping_add(3))),
        field.generate(seed.wrapping_add(1))?,
        field.fleet_cells(),
        Box::new(c2.with_cancel(cancel.token())),
        false,
    );
    let (outcome, _) = tokio::join!(first.run(), second.run());
    print_field_pair(first.game().own(), first.game().mirror());
    println!(
        "Player one fired {} shots, player two fired {}",
        first.shots_fired(),
        second.shots_fired()
    );
    report(&outcome)
}

fn report(outcome: &GameOutcome) -> anyhow::Result<()> {
    match outcome {
        GameOutcome::LocalWon => println!("VICTORY! You have sunk all enemy ships!"),
        GameOutcome::RemoteWon => println!("DEFEAT. All your ships have been destroyed."),
        GameOutcome::InProgress => bail!("game stopped while still in progress"),
        GameOutcome::Aborted(reason) => bail!("game aborted: {}", reason),
    }
    Ok(())
}
