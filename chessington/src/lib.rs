/// Implements parsing and formatting for enums with `from_uci`, `to_uci` and `name`.
macro_rules! impl_common_traits {
    ($type:ty) => {
        impl ::std::str::FromStr for $type {
            type Err = ::anyhow::Error;
            /// Does the same as [`Self::from_uci`], but only if `s` is one character in length.
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_uci(c),
                    _ => ::anyhow::bail!(
                        "Invalid str for {}: Must be a str of len 1. Got {s:?}",
                        stringify!($type)
                    ),
                }
            }
        }

        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.to_uci())
            }
        }

        impl ::std::fmt::Debug for $type {
            /// Debug formatting displays a $type as its UCI char and name.
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "\"{self}\" ({})", self.name())
            }
        }
    };
}

/// The board: piece placements, lookups and relocation.
pub mod board;
/// Errors that callers can match on.
pub mod error;
/// Rules for generating the destination squares of each kind of piece.
pub mod movegen;
/// Piece kinds and pieces, including the move-generation entry point.
pub mod piece;
/// The two sides of the game.
pub mod player;
/// Squares on the board.
pub mod square;
/// Board geometry and movement tables.
pub mod utils;

pub use board::*;
pub use error::*;
pub use movegen::*;
pub use piece::*;
pub use player::*;
pub use square::*;
pub use utils::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::board::*;
    pub use crate::error::*;
    pub use crate::movegen::*;
    pub use crate::piece::*;
    pub use crate::player::*;
    pub use crate::square::*;
    pub use crate::utils::*;
}
