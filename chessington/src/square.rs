use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

use super::{ChessError, BOARD_SIZE};

/// A single square on the board, addressed by `(row, col)`.
///
/// Row `0` is White's back rank and column `0` is the a-file, so `(1, 4)` is `e2`.
/// A [`Square`] always lies on the board; out-of-range coordinates are rejected when constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    /// Returns `true` if `(row, col)` lies on the board.
    ///
    /// # Example
    /// ```
    /// # use chessington::Square;
    /// assert!(Square::is_valid(0, 7));
    /// assert!(!Square::is_valid(8, 0));
    /// assert!(!Square::is_valid(-1, 3));
    /// ```
    pub const fn is_valid(row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE
    }

    /// Creates a new [`Square`] at `(row, col)`.
    ///
    /// Fails with [`ChessError::SquareOutOfRange`] if either coordinate is off the board.
    ///
    /// # Example
    /// ```
    /// # use chessington::{ChessError, Square};
    /// let e2 = Square::at(1, 4).unwrap();
    /// assert_eq!(e2.to_string(), "e2");
    ///
    /// let err = Square::at(8, 0).unwrap_err();
    /// assert_eq!(
    ///     err.downcast_ref::<ChessError>(),
    ///     Some(&ChessError::SquareOutOfRange { row: 8, col: 0 })
    /// );
    /// ```
    pub fn at(row: i8, col: i8) -> Result<Self> {
        if !Self::is_valid(row, col) {
            bail!(ChessError::SquareOutOfRange { row, col });
        }

        Ok(Self::new_unchecked(row as u8, col as u8))
    }

    /// Creates a new [`Square`] without bounds checks.
    ///
    /// # Panics
    /// If either coordinate is off the board and debug assertions are enabled.
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        debug_assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "Square coordinates must be on the board"
        );
        Self { row, col }
    }

    /// The row of this [`Square`], `0` being White's back rank.
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// The column of this [`Square`], `0` being the a-file.
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the [`Square`] `drow` rows and `dcol` columns away, or `None` if that would leave the board.
    ///
    /// # Example
    /// ```
    /// # use chessington::Square;
    /// let a1 = Square::at(0, 0).unwrap();
    /// assert_eq!(a1.offset(2, 1), Some(Square::at(2, 1).unwrap()));
    /// assert_eq!(a1.offset(-1, 0), None);
    /// assert_eq!(a1.offset(i8::MIN, i8::MAX), None);
    /// ```
    pub const fn offset(&self, drow: i8, dcol: i8) -> Option<Self> {
        let Some(row) = (self.row as i8).checked_add(drow) else {
            return None;
        };
        let Some(col) = (self.col as i8).checked_add(dcol) else {
            return None;
        };

        if Self::is_valid(row, col) {
            Some(Self::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Row-major index of this [`Square`], `row * BOARD_SIZE + col`.
    pub const fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// An iterator over every [`Square`] on the board, row by row, starting at `a1`.
    ///
    /// # Example
    /// ```
    /// # use chessington::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.next().unwrap().to_string(), "a1");
    /// assert_eq!(iter.last().unwrap().to_string(), "h8");
    /// ```
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT)
            .map(|i| Self::new_unchecked((i / BOARD_SIZE) as u8, (i % BOARD_SIZE) as u8))
    }

    /// Parses a [`Square`] from algebraic notation, such as `e4`.
    ///
    /// # Example
    /// ```
    /// # use chessington::Square;
    /// let e4 = Square::from_uci("e4").unwrap();
    /// assert_eq!((e4.row(), e4.col()), (3, 4));
    /// assert!(Square::from_uci("z9").is_err());
    /// ```
    pub fn from_uci(square: &str) -> Result<Self> {
        let mut chars = square.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid square notation {square:?}: must be <file><rank>, such as \"e4\"");
        };

        if !file.is_ascii_lowercase() {
            bail!("Invalid file char for square {square:?}: must be [a, h]. Found {file:?}");
        }
        let rank = rank
            .to_digit(10)
            .with_context(|| format!("Invalid rank char for square {square:?}: found {rank:?}"))?;

        let col = (file as u8 - b'a') as i8;
        let row = rank as i8 - 1;

        Self::at(row, col).with_context(|| format!("Invalid square notation {square:?}"))
    }

    /// Converts this [`Square`] to algebraic notation.
    pub fn to_uci(&self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self, self.row, self.col)
    }
}
