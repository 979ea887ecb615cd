use std::io::Cursor;

use log::LevelFilter;
use seabattle::player::cli::parse_coord;
use seabattle::ui::render_field_pair;
use seabattle::{level_from, Board, ConsolePlayer, Coordinate, Player, ShotResult};

fn one_ship() -> Board {
    "
    #.......
    ........
    ........
    ........
    ........
    ........
    ........
    ........
    "
    .parse()
    .unwrap()
}

#[test]
fn test_parse_coord_accepts_both_cases() {
    assert_eq!(parse_coord("A1").unwrap(), Coordinate::new(0, 0));
    assert_eq!(parse_coord("c3").unwrap(), Coordinate::new(2, 2));
    assert_eq!(parse_coord("h8").unwrap(), Coordinate::new(7, 7));
    assert_eq!(parse_coord("B 4").unwrap(), Coordinate::new(3, 1));
}

#[test]
fn test_parse_coord_errors() {
    assert_eq!(parse_coord("").unwrap_err(), "Empty input");
    assert!(parse_coord("A").unwrap_err().starts_with("Too short"));
    assert!(parse_coord("15").unwrap_err().starts_with("Invalid column"));
    assert!(parse_coord("J1").unwrap_err().starts_with("Column 'J' out of bounds"));
    assert!(parse_coord("Ax").unwrap_err().starts_with("Invalid row"));
    assert_eq!(
        parse_coord("A0").unwrap_err(),
        "Row 0 out of bounds - must be 1-8"
    );
    assert!(parse_coord("A9").unwrap_err().starts_with("Row 9 out of bounds"));
}

#[test]
fn test_parse_coord_rejects_signed_rows() {
    assert_eq!(
        parse_coord("A+5").unwrap_err(),
        "Invalid row '+5' - must be a number 1-8"
    );
    assert!(parse_coord("B-1").unwrap_err().starts_with("Invalid row"));
    assert!(parse_coord("C 3").is_ok());
}

#[test]
fn test_console_player_reprompts_until_valid() {
    let own = one_ship();
    let mut mirror = Board::classic_mirror();
    mirror.mark_miss(Coordinate::new(0, 0)).unwrap();

    let input = Cursor::new("z9\nA1\n\nb2\n");
    let mut player = ConsolePlayer::new(input, Vec::new());
    let target = player.select_target(&own, &mirror);
    assert_eq!(target, Some(Coordinate::new(1, 1)));

    let out = String::from_utf8(player.into_output()).unwrap();
    assert!(out.contains("Column 'Z' out of bounds"));
    assert!(out.contains("You have already fired at A1."));
    assert!(out.contains("Empty input"));
    assert_eq!(out.matches("Your shot: ").count(), 4);
}

#[test]
fn test_console_player_gives_up_on_eof() {
    let mut player = ConsolePlayer::new(Cursor::new("x\n"), Vec::new());
    assert_eq!(
        player.select_target(&one_ship(), &Board::classic_mirror()),
        None
    );
}

#[test]
fn test_console_player_reports_results() {
    let mut player = ConsolePlayer::new(Cursor::new(""), Vec::new());
    player.handle_shot_result(Coordinate::new(0, 0), ShotResult::Miss);
    player.handle_shot_result(Coordinate::new(2, 2), ShotResult::Kill);
    player.handle_incoming_shot(Coordinate::new(1, 0), ShotResult::Hit);
    let out = String::from_utf8(player.into_output()).unwrap();
    assert_eq!(
        out,
        "A1: miss\nC3: ship sunk!\nOpponent fired at A2: hit your ship\n"
    );
}

#[test]
fn test_render_field_pair() {
    let own = one_ship();
    let mut mirror = Board::classic_mirror();
    mirror.mark_miss(Coordinate::new(0, 1)).unwrap();
    mirror.mark_hit(Coordinate::new(1, 0)).unwrap();

    let text = render_field_pair(&own, &mirror);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "     A B C D E F G H       A B C D E F G H");
    assert_eq!(lines[0], lines[9]);
    assert_eq!(lines[1], "  1  O . . . . . . .    1  ? * ? ? ? ? ? ?");
    assert_eq!(lines[2], "  2  . . . . . . . .    2  x ? ? ? ? ? ? ?");
    assert!(lines[8].starts_with("  8 "));
}

#[test]
fn test_log_level_from_env_value() {
    assert_eq!(level_from(None), LevelFilter::Info);
    assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
    assert_eq!(level_from(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(level_from(Some("off")), LevelFilter::Off);
    assert_eq!(level_from(Some("loud")), LevelFilter::Info);
}
