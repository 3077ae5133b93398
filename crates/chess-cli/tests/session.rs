//! Integration tests for the terminal session: scripted input, captured
//! output, saves in a temporary directory.

use chess_cli::{Config, Session};
use chess_core::{Color, PieceKind, Square};
use chess_engine::{Board, DrawReason, Game, GameResult};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    Config {
        save_dir: dir.path().join("save"),
        ..Config::default()
    }
}

fn run_script(game: Game, config: &Config, script: &str) -> (Game, String) {
    let mut session = Session::new(game, config, script.as_bytes(), Vec::new());
    session.run().unwrap();
    let output = String::from_utf8(session.output().clone()).unwrap();
    (session.game().clone(), output)
}

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

#[test]
fn test_moves_and_quit() {
    let dir = TempDir::new().unwrap();
    let (game, output) = run_script(Game::new(), &config_in(&dir), "e2 e4\nmove e7 e5\nquit\n");
    assert_eq!(game.ply_count(), 2);
    assert!(output.contains("[white] ~~> "));
    assert!(output.contains("[black] ~~> "));
    assert!(!game.is_game_over());
}

#[test]
fn test_end_of_input_stops() {
    let dir = TempDir::new().unwrap();
    let (game, _) = run_script(Game::new(), &config_in(&dir), "d2 d4\n");
    assert_eq!(game.ply_count(), 1);
}

#[test]
fn test_illegal_and_unknown_input() {
    let dir = TempDir::new().unwrap();
    let (game, output) = run_script(Game::new(), &config_in(&dir), "e2 e5\nfoo bar\n\nquit\n");
    assert_eq!(game.ply_count(), 0);
    assert!(output.contains("Illegal move: e2 => e5"));
    assert!(output.contains("Type 'help' for help."));
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    let (_, output) = run_script(Game::new(), &config_in(&dir), "help\nquit\n");
    assert!(output.contains("Commands:"));
    assert!(output.contains("display | board"));
}

#[test]
fn test_fools_mate_announced() {
    let dir = TempDir::new().unwrap();
    let (game, output) = run_script(
        Game::new(),
        &config_in(&dir),
        "f2 f3\ne7 e5\ng2 g4\nd8 h4\n",
    );
    assert_eq!(
        game.result(),
        Some(GameResult::Checkmate {
            winner: Color::Black
        })
    );
    assert!(output.contains("CHECK"));
    assert!(output.trim_end().ends_with("Checkmate. The winner is: black"));
}

#[test]
fn test_resign() {
    let dir = TempDir::new().unwrap();
    let (game, output) = run_script(Game::new(), &config_in(&dir), "e2 e4\nresign\n");
    assert_eq!(game.result().and_then(GameResult::winner), Some(Color::White));
    assert!(output.contains("Resignation. The winner is: white"));
}

#[test]
fn test_stalemate_announced() {
    let mut board = Board::empty();
    board.place_piece(Square::H8, Color::Black, PieceKind::King);
    board.place_piece(sq("e7"), Color::White, PieceKind::Queen);
    board.place_piece(sq("g6"), Color::White, PieceKind::King);
    let dir = TempDir::new().unwrap();
    let (game, output) = run_script(Game::from_board(board), &config_in(&dir), "e7 f7\n");
    assert_eq!(game.result(), Some(GameResult::Draw(DrawReason::Stalemate)));
    assert!(output.trim_end().ends_with("Stalemate."));
}

#[test]
fn test_promotion_prompt() {
    let mut board = Board::empty();
    board.place_piece(Square::E1, Color::White, PieceKind::King);
    board.place_piece(Square::A8, Color::Black, PieceKind::King);
    board.place_piece(sq("g7"), Color::White, PieceKind::Pawn);
    board.place_piece(sq("c3"), Color::Black, PieceKind::Pawn);
    let dir = TempDir::new().unwrap();
    let (game, output) = run_script(Game::from_board(board), &config_in(&dir), "g7 g8\nrook\nquit\n");
    assert!(output.contains("Promote the white pawn on g8"));
    let piece = game.board().piece_at(sq("g8")).unwrap();
    assert_eq!(piece.kind, PieceKind::Rook);
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut board = Board::empty();
    board.place_piece(Square::E1, Color::White, PieceKind::King);
    board.place_piece(Square::A8, Color::Black, PieceKind::King);
    board.place_piece(sq("g7"), Color::White, PieceKind::Pawn);
    board.place_piece(sq("c3"), Color::Black, PieceKind::Pawn);
    let dir = TempDir::new().unwrap();
    let (game, _) = run_script(Game::from_board(board), &config_in(&dir), "g7 g8\n\nquit\n");
    assert_eq!(game.board().piece_at(sq("g8")).map(|p| p.kind), Some(PieceKind::Queen));
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let (saved, output) = run_script(Game::new(), &config, "e2 e4\nsave opening\nquit\n");
    assert!(output.contains("Game saved to"));
    let file = dir.path().join("save").join("opening.json");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), saved.save_state().unwrap());

    let (loaded, _) = run_script(Game::new(), &config, "load opening\nquit\n");
    assert_eq!(loaded.save_state().unwrap(), saved.save_state().unwrap());
    assert_eq!(loaded.current_player(), Color::Black);
}

#[test]
fn test_save_without_name_uses_default() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    run_script(Game::new(), &config, "save\nquit\n");
    assert!(dir.path().join("save").join("saved_game.json").exists());
}

#[test]
fn test_load_errors_keep_game() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    std::fs::create_dir_all(&config.save_dir).unwrap();
    std::fs::write(config.save_dir.join("broken.json"), "not json").unwrap();

    let (game, output) = run_script(
        Game::new(),
        &config,
        "e2 e4\nload missing\nload broken\nquit\n",
    );
    assert_eq!(game.ply_count(), 1);
    assert_eq!(output.matches("Load error").count(), 2);
}

#[test]
fn test_load_game_before_run() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut game = Game::new();
    game.make_move("d2d4".parse().unwrap()).unwrap();
    std::fs::create_dir_all(&config.save_dir).unwrap();
    std::fs::write(config.save_dir.join("resume.json"), game.save_state().unwrap()).unwrap();

    let mut session = Session::new(Game::new(), &config, "quit\n".as_bytes(), Vec::new());
    session.load_game(Some("resume".to_string())).unwrap();
    assert!(session.game().board().piece_at(sq("d4")).is_some());
    assert!(session.load_game(Some("nope".to_string())).is_err());
}

#[test]
fn test_ascii_rendering() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        ascii: true,
        ..config_in(&dir)
    };
    let (_, output) = run_script(Game::new(), &config, "board\nquit\n");
    assert!(output.contains("8 │r│n│b│q│k│b│n│r│ 8"));
    assert!(output.contains("1 │R│N│B│Q│K│B│N│R│ 1"));
}
