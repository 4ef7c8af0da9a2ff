//! Precomputed square geometry.

use once_cell::sync::Lazy;

use super::{Color, Piece, Square, SQUARE_COUNT};

/// Diagonal directions as (row delta, column delta).
pub(crate) const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal neighbor of each square in each direction.
pub(crate) static STEPS: Lazy<[[Option<Square>; 4]; SQUARE_COUNT]> = Lazy::new(|| {
    let mut table = [[None; 4]; SQUARE_COUNT];
    for sq in Square::all() {
        for (dir, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
            table[sq.index()][dir] = Square::from_coords(sq.row() + dr, sq.col() + dc);
        }
    }
    table
});

/// For each square and direction: the square jumped over and the landing square.
pub(crate) static JUMPS: Lazy<[[Option<(Square, Square)>; 4]; SQUARE_COUNT]> = Lazy::new(|| {
    let mut table = [[None; 4]; SQUARE_COUNT];
    for sq in Square::all() {
        for (dir, &(dr, dc)) in DIRECTIONS.iter().enumerate() {
            let over = Square::from_coords(sq.row() + dr, sq.col() + dc);
            let land = Square::from_coords(sq.row() + 2 * dr, sq.col() + 2 * dc);
            if let (Some(over), Some(land)) = (over, land) {
                table[sq.index()][dir] = Some((over, land));
            }
        }
    }
    table
});

/// Direction indices a piece may move in: men only forward, kings both ways.
pub(crate) fn directions_for(piece: Piece) -> impl Iterator<Item = usize> {
    let forward = piece.color.forward();
    let king = piece.is_king();
    (0..DIRECTIONS.len()).filter(move |&dir| king || DIRECTIONS[dir].0 == forward)
}

/// The square jumped over when moving from `from` to `to`, if that is a jump.
pub(crate) fn jump_between(from: Square, to: Square) -> Option<Square> {
    JUMPS[from.index()]
        .iter()
        .flatten()
        .find(|&&(_, land)| land == to)
        .map(|&(over, _)| over)
}

/// Whether `sq` lies on the row where `color`'s men are crowned.
#[inline]
pub(crate) fn is_crowning_square(sq: Square, color: Color) -> bool {
    sq.row() == color.crowning_row()
}
