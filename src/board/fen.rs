//! PDN-style position text: `B:R21,22,K30:B1,2,K12`.
//!
//! The first field is the side to move, followed by one field per color
//! listing its squares. A `K` prefix marks a king.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Square};

/// Position text for the standard starting position.
pub const START_FEN: &str =
    "B:R21,22,23,24,25,26,27,28,29,30,31,32:B1,2,3,4,5,6,7,8,9,10,11,12";

impl Board {
    /// Parse a board position from position text.
    ///
    /// Returns an error if the text is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.trim().split(':').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = Board::empty();
        board.side_to_move = single_color(fields[0]).ok_or_else(|| {
            FenError::InvalidSideToMove {
                found: fields[0].to_string(),
            }
        })?;

        for field in &fields[1..] {
            let mut chars = field.chars();
            let color = chars
                .next()
                .and_then(Color::from_char)
                .ok_or_else(|| FenError::InvalidColor {
                    field: (*field).to_string(),
                })?;
            let entries = chars.as_str();
            for entry in entries.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                let (kind, number) = match entry.strip_prefix(['K', 'k']) {
                    Some(rest) => (PieceKind::King, rest),
                    None => (PieceKind::Man, entry),
                };
                let sq: Square = number.parse().map_err(|_| FenError::InvalidSquare {
                    entry: entry.to_string(),
                })?;
                if board.piece_at(sq).is_some() {
                    return Err(FenError::DuplicateSquare { square: sq });
                }
                board.set_piece(sq, Some(Piece::new(color, kind)));
            }
        }

        Ok(board)
    }

    /// Convert the position to position text.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        fen.push(self.side_to_move.to_char().to_ascii_uppercase());
        for color in [Color::Red, Color::Black] {
            fen.push(':');
            fen.push(color.to_char().to_ascii_uppercase());
            let entries: Vec<String> = self
                .pieces(color)
                .map(|(sq, piece)| {
                    if piece.is_king() {
                        format!("K{sq}")
                    } else {
                        sq.to_string()
                    }
                })
                .collect();
            fen.push_str(&entries.join(","));
        }
        fen
    }
}

fn single_color(field: &str) -> Option<Color> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_char(c),
        _ => None,
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
