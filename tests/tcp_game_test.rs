use seabattle::transport::tcp::TcpChannel;
use seabattle::{AiPlayer, FieldGenerator, GameOutcome, PlayerNode, RandomField};
use tokio::net::TcpListener;

async fn connected_pair() -> anyhow::Result<(TcpChannel, TcpChannel)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let (accepted, connected) =
        tokio::join!(TcpChannel::accept(&listener), TcpChannel::connect(addr));
    let (server, peer) = accepted?;
    let client = connected?;
    assert_eq!(client.peer_addr()?, addr);
    assert_eq!(server.peer_addr()?, peer);
    Ok((server, client))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ai_game_over_tcp() -> anyhow::Result<()> {
    let (server_side, client_side) = connected_pair().await?;
    let field = RandomField::default();

    let mut server = PlayerNode::with_board(
        Box::new(AiPlayer::new(11)),
        field.generate(100)?,
        field.fleet_cells(),
        Box::new(server_side),
        false,
    );
    let mut client = PlayerNode::with_board(
        Box::new(AiPlayer::new(12)),
        field.generate(200)?,
        field.fleet_cells(),
        Box::new(client_side),
        true,
    );

    let server_task = tokio::spawn(async move {
        let outcome = server.run().await;
        (outcome, server.shots_fired(), server.shots_received())
    });
    let client_outcome = client.run().await;
    let (server_outcome, server_fired, server_received) = server_task.await?;

    let (winner_fired, loser_fired) = match (&client_outcome, &server_outcome) {
        (GameOutcome::LocalWon, GameOutcome::RemoteWon) => (client.shots_fired(), server_fired),
        (GameOutcome::RemoteWon, GameOutcome::LocalWon) => (server_fired, client.shots_fired()),
        other => panic!("outcomes do not agree: {:?}", other),
    };
    assert!(winner_fired >= field.fleet_cells());
    assert!(loser_fired <= 64);
    assert_eq!(client.shots_fired(), server_received);
    assert_eq!(client.shots_received(), server_fired);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_tcp_peer_disconnect_aborts() -> anyhow::Result<()> {
    let (server_side, client_side) = connected_pair().await?;
    let field = RandomField::default();
    let mut server = PlayerNode::with_board(
        Box::new(AiPlayer::new(1)),
        field.generate(1)?,
        field.fleet_cells(),
        Box::new(server_side),
        false,
    );
    drop(client_side);

    let outcome = server.run().await;
    assert!(
        matches!(&outcome, GameOutcome::Aborted(reason) if reason.is_transport()),
        "unexpected {:?}",
        outcome
    );
    Ok(())
}
