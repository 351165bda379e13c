use std::{error::Error, fmt};

use super::{Piece, Square, BOARD_SIZE};

/// Failures a caller may want to inspect and recover from.
///
/// These travel inside an [`anyhow::Error`]; use `err.downcast_ref::<ChessError>()` to get them back.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ChessError {
    SquareOutOfRange { row: i8, col: i8 },
    PieceNotFound { piece: Piece },
    NoPieceAt { square: Square },
    SquareOccupied { square: Square },
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SquareOutOfRange { row, col } => write!(
                f,
                "square ({row}, {col}) is out of range. rows and cols must be within 0..{BOARD_SIZE}"
            ),
            Self::PieceNotFound { piece } => write!(
                f,
                "{} {} #{} is not on the board",
                piece.player().name(),
                piece.kind().name(),
                piece.id()
            ),
            Self::NoPieceAt { square } => write!(f, "no piece at the specified square {square}"),
            Self::SquareOccupied { square } => {
                write!(f, "square {square} is already occupied")
            }
        }
    }
}

impl Error for ChessError {
    //
}
