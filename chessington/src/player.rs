use anyhow::{bail, Result};

use super::BOARD_SIZE;

/// One of the two sides of a chess game.
///
/// White traditionally moves first, and therefore [`Player`] defaults to [`Player::White`].
/// White pawns advance toward increasing row indices, Black pawns toward decreasing ones.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Player {
    #[default]
    White,
    Black,
}

impl Player {
    /// Number of player variants.
    pub const COUNT: usize = 2;

    /// An array of both players, starting with White.
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// An iterator over both players, starting with White.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::all().into_iter()
    }

    /// The row offset of a single step "forward" for this [`Player`].
    ///
    /// # Example
    /// ```
    /// # use chessington::Player;
    /// assert_eq!(Player::White.direction(), 1);
    /// assert_eq!(Player::Black.direction(), -1);
    /// ```
    pub const fn direction(&self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// The row this [`Player`]'s pawns start the game on.
    ///
    /// # Example
    /// ```
    /// # use chessington::Player;
    /// assert_eq!(Player::White.pawn_row(), 1);
    /// assert_eq!(Player::Black.pawn_row(), 6);
    /// ```
    pub const fn pawn_row(&self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => BOARD_SIZE as u8 - 2,
        }
    }

    /// The row this [`Player`]'s back-rank pieces start the game on.
    pub const fn back_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => BOARD_SIZE as u8 - 1,
        }
    }

    /// Returns this [`Player`]'s opponent.
    ///
    /// # Example
    /// ```
    /// # use chessington::Player;
    /// assert_eq!(Player::White.opponent(), Player::Black);
    /// assert_eq!(Player::Black.opponent(), Player::White);
    /// ```
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Creates a [`Player`] from its FEN tag, `'w'` or `'b'` (case-insensitive).
    ///
    /// # Example
    /// ```
    /// # use chessington::Player;
    /// assert_eq!(Player::from_uci('b').unwrap(), Player::Black);
    /// assert!(Player::from_uci('x').is_err());
    /// ```
    pub fn from_uci(player: char) -> Result<Self> {
        match player {
            'w' | 'W' => Ok(Self::White),
            'b' | 'B' => Ok(Self::Black),
            _ => bail!("Player must be either 'w' or 'b' (case-insensitive). Found {player}"),
        }
    }

    /// Uppercase letters belong to White, lowercase to Black.
    pub const fn from_case(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Converts this [`Player`] to its FEN tag.
    pub const fn to_uci(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Fetches a human-readable name for this [`Player`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl_common_traits!(Player);
