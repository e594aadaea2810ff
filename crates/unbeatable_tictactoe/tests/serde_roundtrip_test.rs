//! Engine types survive a trip through JSON.

use unbeatable_tictactoe::{Analysis, Board, Game, Player, Position, analyze};

#[test]
fn test_board_json_roundtrip() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_analysis_json_roundtrip() {
    let board: Board = "X...O....".parse().unwrap();
    let analysis = analyze(&board, Player::X);
    let json = serde_json::to_string(&analysis).unwrap();
    let back: Analysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, analysis);
}

#[test]
fn test_analysis_json_shape() {
    let analysis = analyze(&"OO.......".parse().unwrap(), Player::O);
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["engine"], "O");
    assert_eq!(value["best"], "TopRight");
    assert_eq!(value["evaluations"].as_array().unwrap().len(), 7);
    assert!(value["stats"]["nodes"].as_u64().unwrap() > 0);
}

#[test]
fn test_game_json_roundtrip() {
    let mut game = Game::new(Player::X);
    game.make_move(Position::TopLeft).unwrap();
    game.engine_move().unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
    assert_eq!(back.history().len(), 2);
}
