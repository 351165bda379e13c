use anyhow::{bail, Context, Result};
use chessington::{Board, ChessError, Piece, Square, PLACEMENT_STARTPOS};
use clap::Parser;
use log::info;

/// Prints the squares that pieces on a board may move to
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Placement field of a FEN string, rank 8 first
    #[arg(short, long, default_value = PLACEMENT_STARTPOS)]
    placement: String,

    /// Only print moves for the piece on this square, such as `e2`
    square: Option<Square>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let board = Board::from_placement(&args.placement)
        .with_context(|| format!("Invalid placement {:?}", args.placement))?;
    info!("loaded board {board:?}");

    println!("{board}\n");

    if let Some(square) = args.square {
        let Some(piece) = board.get_piece(square) else {
            bail!(ChessError::NoPieceAt { square });
        };
        print_moves(&board, square, &piece)?;
    } else {
        for (square, piece) in board.iter() {
            print_moves(&board, square, &piece)?;
        }
    }

    Ok(())
}

fn print_moves(board: &Board, square: Square, piece: &Piece) -> Result<()> {
    let moves = piece
        .get_available_moves(board)?
        .iter()
        .map(|to| to.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    println!("{piece:?} on {square}: [{moves}]");
    Ok(())
}
