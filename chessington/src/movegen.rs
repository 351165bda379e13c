use arrayvec::ArrayVec;
use log::trace;

use super::{
    Board, Player, Square, BISHOP_DELTAS, KING_DELTAS, KNIGHT_DELTAS, MAX_PIECE_MOVES,
    QUEEN_DELTAS, ROOK_DELTAS,
};

/// An alias for an [`ArrayVec`] containing at most [`MAX_PIECE_MOVES`] destination squares.
pub type MoveList = ArrayVec<Square, MAX_PIECE_MOVES>;

/// Destinations for a Pawn of `player` standing on `from`.
///
/// In order: one step forward, then two steps forward (from the starting row only). Both need an empty square, and
/// a blocked single step also rules out the double step. Steps that would leave the board are discarded. Pawns do
/// not capture here: no diagonal moves, no en passant, no promotion.
pub fn pawn_moves(board: &Board, from: Square, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    let forward = player.direction();

    if let Some(single) = from.offset(forward, 0) {
        if !board.is_occupied(single) {
            moves.push(single);

            if from.row() == player.pawn_row() {
                if let Some(double) = from.offset(2 * forward, 0) {
                    if !board.is_occupied(double) && !moves.contains(&double) {
                        moves.push(double);
                    }
                }
            }
        }
    }

    trace!("pawn on {from}: {moves:?}");
    moves
}

/// Destinations for a Knight of `player` standing on `from`, in [`KNIGHT_DELTAS`] order.
pub fn knight_moves(board: &Board, from: Square, player: Player) -> MoveList {
    let moves = steps(board, from, player, &KNIGHT_DELTAS);
    trace!("knight on {from}: {moves:?}");
    moves
}

/// Destinations for a Bishop of `player` standing on `from`.
pub fn bishop_moves(board: &Board, from: Square, player: Player) -> MoveList {
    let moves = rays(board, from, player, &BISHOP_DELTAS);
    trace!("bishop on {from}: {moves:?}");
    moves
}

/// Destinations for a Rook of `player` standing on `from`.
pub fn rook_moves(board: &Board, from: Square, player: Player) -> MoveList {
    let moves = rays(board, from, player, &ROOK_DELTAS);
    trace!("rook on {from}: {moves:?}");
    moves
}

/// Destinations for a Queen of `player` standing on `from`: the Rook's directions, then the Bishop's.
pub fn queen_moves(board: &Board, from: Square, player: Player) -> MoveList {
    let moves = rays(board, from, player, &QUEEN_DELTAS);
    trace!("queen on {from}: {moves:?}");
    moves
}

/// Destinations for a King of `player` standing on `from`. No castling.
pub fn king_moves(board: &Board, from: Square, player: Player) -> MoveList {
    let moves = steps(board, from, player, &KING_DELTAS);
    trace!("king on {from}: {moves:?}");
    moves
}

/// Single jumps by each of `deltas`, onto empty or enemy squares.
fn steps(board: &Board, from: Square, player: Player, deltas: &[(i8, i8)]) -> MoveList {
    deltas
        .iter()
        .filter_map(|&(drow, dcol)| from.offset(drow, dcol))
        .filter(|&to| !is_friendly(board, to, player))
        .collect()
}

/// Slides along each of `deltas` until leaving the board or reaching a piece.
///
/// An enemy piece ends the ray on its own square; a friendly piece ends it one square short.
fn rays(board: &Board, from: Square, player: Player, deltas: &[(i8, i8)]) -> MoveList {
    let mut moves = MoveList::new();

    for &(drow, dcol) in deltas {
        let mut to = from;
        while let Some(shifted) = to.offset(drow, dcol) {
            match board.get_piece(shifted) {
                None => moves.push(shifted),
                Some(piece) => {
                    if piece.player() != player {
                        moves.push(shifted);
                    }
                    break;
                }
            }
            to = shifted;
        }
    }

    moves
}

fn is_friendly(board: &Board, square: Square, player: Player) -> bool {
    board
        .get_piece(square)
        .is_some_and(|piece| piece.player() == player)
}
