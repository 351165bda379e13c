use std::fmt;

use anyhow::{bail, Result};
use log::debug;

use super::{ChessError, Piece, PieceId, PieceKind, Player, Square, BOARD_SIZE};

/// An `8x8` chessboard and the pieces placed on it.
///
/// The board is the only thing that knows where a [`Piece`] stands. It also hands out piece identities: every
/// piece created through [`Board::add_piece`] (or a placement string) is distinct from every other.
///
/// Two boards are equal when the same pieces stand on the same squares, no matter how many pieces either board has
/// handed out identities to.
#[derive(Clone)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index`].
    squares: [Option<Piece>; Square::COUNT],

    /// Identity handed to the next piece created on this board.
    next_id: u32,
}

impl Board {
    /// Creates a new, empty [`Board`] containing no pieces.
    ///
    /// # Example
    /// ```
    /// # use chessington::Board;
    /// let board = Board::new();
    /// assert_eq!(board.to_placement(), "8/8/8/8/8/8/8/8");
    /// ```
    pub const fn new() -> Self {
        Self {
            squares: [None; Square::COUNT],
            next_id: 0,
        }
    }

    /// Creates a [`Board`] set up for the start of a game.
    ///
    /// # Example
    /// ```
    /// # use chessington::{Board, PLACEMENT_STARTPOS};
    /// let board = Board::starting_position();
    /// assert_eq!(board.to_placement(), PLACEMENT_STARTPOS);
    /// ```
    pub fn starting_position() -> Self {
        use PieceKind::*;
        const BACK_ROW: [PieceKind; BOARD_SIZE] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Self::new();

        for player in Player::iter() {
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                let back = Square::new_unchecked(player.back_row(), col as u8);
                board.put(back, player, kind);

                let front = Square::new_unchecked(player.pawn_row(), col as u8);
                board.put(front, player, Pawn);
            }
        }

        board
    }

    /// Constructs a [`Board`] from the placement field of a FEN string.
    ///
    /// Anything after the first space (side to move, castling, ...) is ignored.
    ///
    /// # Example
    /// ```
    /// # use chessington::{Board, PieceKind, Player, Square};
    /// let board = Board::from_placement("8/8/8/8/8/8/4P3/8").unwrap();
    /// let pawn = board.get_piece(Square::at(1, 4).unwrap()).unwrap();
    /// assert_eq!(pawn.player(), Player::White);
    /// assert_eq!(pawn.kind(), PieceKind::Pawn);
    ///
    /// assert!(Board::from_placement("8/8/8").is_err());
    /// ```
    pub fn from_placement(fen: &str) -> Result<Self> {
        let mut board = Self::new();

        let placements = fen.split(' ').next().unwrap_or_default();

        if placements.matches('/').count() != BOARD_SIZE - 1 {
            bail!("Missing placements for all {BOARD_SIZE} rows in {placements:?}.");
        }

        // Need to reverse this so that White pieces are at the "bottom" of the board
        for (row, placements) in placements.split('/').rev().enumerate() {
            let mut col = 0;

            for piece_char in placements.chars() {
                if let Ok(kind) = PieceKind::from_uci(piece_char) {
                    if col >= BOARD_SIZE {
                        bail!("Too many squares in row {} of {fen:?}.", row + 1);
                    }

                    let square = Square::new_unchecked(row as u8, col as u8);
                    board.put(square, Player::from_case(piece_char), kind);

                    col += 1;
                } else {
                    let Some(empty) = piece_char.to_digit(10) else {
                        bail!("Found non-piece, non-numeric char {piece_char:?} when parsing placement.");
                    };
                    col += empty as usize;
                }
            }

            if col != BOARD_SIZE {
                bail!("Row {} of {fen:?} covers {col} squares instead of {BOARD_SIZE}.", row + 1);
            }
        }

        Ok(board)
    }

    /// Generates the placement field of a FEN string for this [`Board`].
    pub fn to_placement(&self) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row in (0..BOARD_SIZE as u8).rev() {
            let mut placement = String::with_capacity(BOARD_SIZE);
            let mut empty_spaces = 0;

            for col in 0..BOARD_SIZE as u8 {
                if let Some(piece) = self.get_piece(Square::new_unchecked(row, col)) {
                    if empty_spaces != 0 {
                        placement += &empty_spaces.to_string();
                        empty_spaces = 0;
                    }
                    placement.push(piece.to_uci());
                } else {
                    empty_spaces += 1;
                }
            }

            if empty_spaces != 0 {
                placement += &empty_spaces.to_string();
            }
            rows.push(placement);
        }

        rows.join("/")
    }

    /// Creates a new [`Piece`] for `player` and places it on `square`.
    ///
    /// Fails with [`ChessError::SquareOccupied`] if `square` already holds a piece.
    ///
    /// # Example
    /// ```
    /// # use chessington::{Board, ChessError, PieceKind, Player, Square};
    /// let mut board = Board::new();
    /// let e2 = Square::at(1, 4).unwrap();
    /// let pawn = board.add_piece(e2, Player::White, PieceKind::Pawn).unwrap();
    /// assert_eq!(board.get_piece(e2), Some(pawn));
    ///
    /// let err = board.add_piece(e2, Player::Black, PieceKind::Rook).unwrap_err();
    /// assert_eq!(
    ///     err.downcast_ref::<ChessError>(),
    ///     Some(&ChessError::SquareOccupied { square: e2 })
    /// );
    /// ```
    pub fn add_piece(&mut self, square: Square, player: Player, kind: PieceKind) -> Result<Piece> {
        if self.is_occupied(square) {
            bail!(ChessError::SquareOccupied { square });
        }

        Ok(self.put(square, player, kind))
    }

    /// Creates a piece and places it on `square`, replacing any occupant.
    fn put(&mut self, square: Square, player: Player, kind: PieceKind) -> Piece {
        let piece = Piece::new(PieceId(self.next_id), player, kind);
        self.next_id += 1;
        self.squares[square.index()] = Some(piece);
        piece
    }

    /// Returns `true` if `(row, col)` is a square on this board.
    pub const fn valid_square(&self, row: i8, col: i8) -> bool {
        Square::is_valid(row, col)
    }

    /// Fetches the [`Piece`] on `square`, if there is one.
    pub const fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Returns `true` if there is a piece on `square`.
    pub const fn is_occupied(&self, square: Square) -> bool {
        self.squares[square.index()].is_some()
    }

    /// Finds the [`Square`] that `piece` stands on.
    ///
    /// Fails with [`ChessError::PieceNotFound`] if `piece` is not on this board (for example, after being captured).
    pub fn find_piece(&self, piece: &Piece) -> Result<Square> {
        match self.iter().find(|(_, p)| p == piece) {
            Some((square, _)) => Ok(square),
            None => bail!(ChessError::PieceNotFound { piece: *piece }),
        }
    }

    /// Moves the piece on `from` to `to`, returning the piece that was captured on `to`, if any.
    ///
    /// Fails with [`ChessError::NoPieceAt`] if `from` is empty. Moving a piece onto its own square is a no-op.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>> {
        let Some(piece) = self.get_piece(from) else {
            bail!(ChessError::NoPieceAt { square: from });
        };

        if from == to {
            return Ok(None);
        }

        self.squares[from.index()] = None;
        let captured = self.squares[to.index()].replace(piece);

        if let Some(captured) = captured {
            debug!("{piece:?} captured {captured:?} on {to}");
        }

        Ok(captured)
    }

    /// Takes the [`Piece`] off `square`, if there is one present.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// An iterator over every occupied square and its [`Piece`], row by row, starting at `a1`.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| Some((square, self.get_piece(square)?)))
    }

    /// An iterator over the squares and pieces belonging to `player`.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.player() == player)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board = String::with_capacity(198);

        for row in (0..BOARD_SIZE as u8).rev() {
            board += &format!("{}| ", row + 1);

            for col in 0..BOARD_SIZE as u8 {
                let occupant = match self.get_piece(Square::new_unchecked(row, col)) {
                    Some(piece) => piece.to_uci(),
                    None => '.',
                };

                board.push(occupant);
                board.push(' ');
            }

            board += "\n"
        }
        board += " +";
        for _ in 0..BOARD_SIZE {
            board += "--";
        }
        board += "\n   ";
        for col in 0..BOARD_SIZE as u8 {
            board.push((b'a' + col) as char);
            board.push(' ');
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.to_placement())
    }
}
