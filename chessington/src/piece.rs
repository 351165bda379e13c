use std::fmt;

use anyhow::{bail, Result};
use log::debug;

use super::{
    bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves, Board, MoveList,
    Player, Square,
};

/// Represents the kind (or "class") that a chess piece can be.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Creates a new [`PieceKind`] from its FEN character, ignoring case.
    ///
    /// # Example
    /// ```
    /// # use chessington::PieceKind;
    /// assert_eq!(PieceKind::from_uci('Q').unwrap(), PieceKind::Queen);
    /// assert!(PieceKind::from_uci('x').is_err());
    /// ```
    pub fn from_uci(kind: char) -> Result<Self> {
        match kind {
            'P' | 'p' => Ok(Self::Pawn),
            'N' | 'n' => Ok(Self::Knight),
            'B' | 'b' => Ok(Self::Bishop),
            'R' | 'r' => Ok(Self::Rook),
            'Q' | 'q' => Ok(Self::Queen),
            'K' | 'k' => Ok(Self::King),
            _ => bail!("Invalid char for PieceKind: Got {kind}."),
        }
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Converts this [`PieceKind`] to its FEN character.
    ///
    /// Will always be a lowercase letter.
    pub const fn to_uci(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl_common_traits!(PieceKind);

/// Identity of a [`Piece`], handed out by the [`Board`] that created it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PieceId(pub(crate) u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chess piece: a [`PieceKind`] owned by a [`Player`].
///
/// Two pieces of the same kind and player are still different pieces; equality compares identity.
/// A piece does not know where it stands. Ask the [`Board`] with [`Board::find_piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    player: Player,
    kind: PieceKind,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, player: Player, kind: PieceKind) -> Self {
        Self { id, player, kind }
    }

    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// The [`Player`] controlling this piece.
    pub const fn player(&self) -> Player {
        self.player
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Converts this [`Piece`] into its FEN character: uppercase for White, lowercase for Black.
    pub const fn to_uci(&self) -> char {
        match self.player {
            Player::White => self.kind.to_uci().to_ascii_uppercase(),
            Player::Black => self.kind.to_uci(),
        }
    }

    /// All squares this piece may move to on `board`, in generation order.
    ///
    /// This never changes `board`. Fails with [`ChessError::PieceNotFound`](super::ChessError::PieceNotFound)
    /// if this piece is not on `board`.
    ///
    /// # Example
    /// ```
    /// # use chessington::{Board, PieceKind, Player, Square};
    /// let mut board = Board::new();
    /// let pawn = board
    ///     .add_piece(Square::at(1, 4).unwrap(), Player::White, PieceKind::Pawn)
    ///     .unwrap();
    ///
    /// let moves = pawn.get_available_moves(&board).unwrap();
    /// assert_eq!(moves.as_slice(), [Square::at(2, 4).unwrap(), Square::at(3, 4).unwrap()]);
    /// ```
    pub fn get_available_moves(&self, board: &Board) -> Result<MoveList> {
        let from = board.find_piece(self)?;

        let moves = match self.kind {
            PieceKind::Pawn => pawn_moves(board, from, self.player),
            PieceKind::Knight => knight_moves(board, from, self.player),
            PieceKind::Bishop => bishop_moves(board, from, self.player),
            PieceKind::Rook => rook_moves(board, from, self.player),
            PieceKind::Queen => queen_moves(board, from, self.player),
            PieceKind::King => king_moves(board, from, self.player),
        };

        Ok(moves)
    }

    /// Moves this piece from wherever it stands on `board` to `to`, returning the piece captured there, if any.
    ///
    /// No legality checks are performed; `to` is expected to come from [`Piece::get_available_moves`].
    pub fn move_to(&self, board: &mut Board, to: Square) -> Result<Option<Piece>> {
        let from = board.find_piece(self)?;
        debug!("moving {self:?} from {from} to {to}");
        board.move_piece(from, to)
    }
}

impl fmt::Display for Piece {
    /// A [`Piece`] displays as its FEN character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} #{}", self.player.name(), self.kind.name(), self.id)
    }
}
