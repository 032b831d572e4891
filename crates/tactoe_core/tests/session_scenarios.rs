//! End-to-end controller scenarios.

use tactoe_core::{Board, GameError, GameSession, Outcome, Player, Position, TurnState};

fn board_from(marks: &[(Position, Player)]) -> Board {
    let mut board = Board::new();
    for (pos, player) in marks {
        board.place(*pos, *player).unwrap();
    }
    board
}

#[test]
fn human_completes_a_row_and_wins() {
    // X X _ / O O _ / _ _ _ with the human playing O: (1, 2) completes
    // O's middle row before the computer gets a reply.
    let board = board_from(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
    ]);
    let mut session = GameSession::with_board(board, Player::O);

    let result = session.submit_human_move(1, 2).unwrap();
    assert_eq!(result.outcome, Some(Outcome::Won(Player::O)));
    assert_eq!(session.state(), TurnState::Won(Player::O));
}

#[test]
fn full_board_without_winner_is_a_draw() {
    // X O X / O X X / O X O — no line for either player.
    let board = board_from(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::O),
        (Position::TopRight, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::X),
        (Position::MiddleRight, Player::X),
        (Position::BottomLeft, Player::O),
        (Position::BottomCenter, Player::X),
        (Position::BottomRight, Player::O),
    ]);
    let session = GameSession::with_board(board, Player::X);
    assert_eq!(session.state(), TurnState::Draw);
}

#[test]
fn resubmitting_the_same_square_is_rejected_unchanged() {
    let mut session = GameSession::new(Player::X);
    session.submit_human_move(0, 0).unwrap();

    let before = session.board().clone();
    let err = session.submit_human_move(0, 0).unwrap_err();
    assert_eq!(err, GameError::SquareOccupied(Position::TopLeft));
    assert_eq!(session.board(), &before);
    assert_eq!(session.state(), TurnState::AwaitingHumanMove);
}

#[test]
fn diagonal_strategy_cannot_beat_the_engine() {
    let mut session = GameSession::new(Player::X);

    // Corner opening: the only non-losing reply is the center, which
    // already blocks the main diagonal.
    session.submit_human_move(0, 0).unwrap();
    assert_eq!(
        session.board().get(Position::Center),
        tactoe_core::Square::Occupied(Player::O)
    );

    // Chase the diagonal anyway, falling back to the first empty
    // square when a target is taken; the human must never win.
    let preferred = [(1, 1), (2, 2)];
    let mut targets: Vec<(usize, usize)> = preferred.to_vec();
    while session.state() == TurnState::AwaitingHumanMove {
        let next = targets
            .iter()
            .copied()
            .find(|(r, c)| {
                Position::from_row_col(*r, *c)
                    .is_some_and(|p| session.board().is_empty(p))
            })
            .or_else(|| {
                Position::valid_moves(session.board())
                    .first()
                    .map(|p| (p.row(), p.col()))
            });
        let Some((row, col)) = next else { break };
        targets.retain(|t| *t != (row, col));

        let result = session.submit_human_move(row, col).unwrap();
        if let Some(outcome) = result.outcome {
            assert_ne!(outcome, Outcome::Won(Player::X), "human must not win");
        }
    }

    assert!(matches!(
        session.state(),
        TurnState::Draw | TurnState::Won(Player::O)
    ));
}

#[test]
fn reset_after_acknowledged_outcome_starts_fresh_with_same_marks() {
    // X X _ / O O _ / _ _ _, human O wins, acknowledges, resets.
    let board = board_from(&[
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::X),
        (Position::MiddleLeft, Player::O),
        (Position::Center, Player::O),
    ]);
    let mut session = GameSession::with_board(board, Player::O);
    session.submit_human_move(1, 2).unwrap();
    assert_eq!(session.state(), TurnState::Won(Player::O));

    session.reset();
    assert_eq!(session.state(), TurnState::AwaitingHumanMove);
    assert_eq!(session.human(), Player::O);
    assert_eq!(session.board(), &Board::new());
}
