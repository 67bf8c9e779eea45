//! Grid model: which cubie logically occupies which cell.
//!
//! The grid is a flat array of 27 cells indexed x-major. Every cell except the
//! center holds exactly one cubie id. The grid is the single source of truth
//! for cubie placement; visual transforms only agree with it once a turn's
//! animation has finished.

use rustc_hash::FxHashSet;

use crate::cubie::{Coord, CubieId, CENTER, DIM, GRID_SIZE, NUM_CUBIES};

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * DIM * DIM + y * DIM + z`.
#[inline(always)]
pub const fn coord_to_idx(x: i32, y: i32, z: i32) -> usize {
    (x as usize) * DIM * DIM + (y as usize) * DIM + (z as usize)
}

/// Converts a linear cell index to (x, y, z) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    (
        (cell_index / (DIM * DIM)) as i32,
        ((cell_index / DIM) % DIM) as i32,
        (cell_index % DIM) as i32,
    )
}

/// Returns true if every component of `coord` is in `0..DIM`.
#[inline]
pub fn in_bounds((x, y, z): Coord) -> bool {
    let range = 0..DIM as i32;
    range.contains(&x) && range.contains(&y) && range.contains(&z)
}

/// Mapping from grid cell to the cubie occupying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<CubieId>; GRID_SIZE],
}

impl Grid {
    /// A grid with every cell empty.
    pub const fn empty() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// The starting layout: every cubie in its home cell.
    ///
    /// Ids follow [`crate::cubie::all_cubies`], i.e. x-major order with the
    /// center skipped.
    pub fn solved() -> Self {
        let mut grid = Self::empty();
        let mut next_id = 0;
        for cell in 0..GRID_SIZE {
            let coord = idx_to_coord(cell);
            if coord == CENTER {
                continue;
            }
            grid.cells[cell] = Some(next_id);
            next_id += 1;
        }
        grid
    }

    /// Returns the cubie in `coord`, or `None` for the center.
    ///
    /// Out-of-range coordinates are a programming error.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<CubieId> {
        debug_assert!(in_bounds(coord), "coordinate {coord:?} is outside the grid");
        self.cells[coord_to_idx(coord.0, coord.1, coord.2)]
    }

    /// Places `cubie` in `coord`. The center must never be written.
    #[inline]
    pub fn set(&mut self, coord: Coord, cubie: CubieId) {
        debug_assert!(in_bounds(coord), "coordinate {coord:?} is outside the grid");
        debug_assert!(coord != CENTER, "the center cell must stay empty");
        self.cells[coord_to_idx(coord.0, coord.1, coord.2)] = Some(cubie);
    }

    /// Iterates occupied cells as `(coord, cubie)` pairs in x-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, CubieId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(cell, slot)| slot.map(|cubie| (idx_to_coord(cell), cubie)))
    }

    /// Finds the cell currently holding `cubie`.
    pub fn position_of(&self, cubie: CubieId) -> Option<Coord> {
        self.occupied()
            .find_map(|(coord, id)| (id == cubie).then_some(coord))
    }

    /// Checks that exactly 26 distinct cubies occupy the 26 non-center cells.
    pub fn is_consistent(&self) -> bool {
        if self.cells[coord_to_idx(CENTER.0, CENTER.1, CENTER.2)].is_some() {
            return false;
        }

        let mut seen: FxHashSet<CubieId> = FxHashSet::default();
        for (coord, cubie) in self.occupied() {
            if coord == CENTER || cubie >= NUM_CUBIES || !seen.insert(cubie) {
                return false;
            }
        }
        seen.len() == NUM_CUBIES
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::solved()
    }
}

/// Formats the grid as a human-readable string.
///
/// Displays the three z-slices side by side, rows from y=2 down to y=0 and x
/// increasing left to right. Cubie ids are written in base 36; the empty
/// center shows as '.'.
pub fn format_grid(grid: &Grid) -> String {
    let mut output = String::new();
    for z in 0..DIM {
        if z > 0 {
            output.push_str("  ");
        }
        output.push_str(&format!("z={}", z));
    }
    output.push('\n');

    for y in (0..DIM as i32).rev() {
        for z in 0..DIM as i32 {
            if z > 0 {
                output.push_str("  ");
            }
            for x in 0..DIM as i32 {
                let display_char = match grid.get((x, y, z)) {
                    None => '.',
                    Some(cubie) => char::from_digit(cubie as u32, 36).unwrap_or('?'),
                };
                output.push(display_char);
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for idx in 0..GRID_SIZE {
            let (x, y, z) = idx_to_coord(idx);
            assert!(in_bounds((x, y, z)), "idx_to_coord({idx}) out of range");
            assert_eq!(coord_to_idx(x, y, z), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    fn test_solved_grid_is_consistent() {
        let grid = Grid::solved();
        assert!(grid.is_consistent());
        assert_eq!(grid.get(CENTER), None);
        assert_eq!(grid.occupied().count(), NUM_CUBIES);
    }

    #[test]
    fn test_solved_grid_matches_cubie_homes() {
        let grid = Grid::solved();
        for cubie in crate::cubie::all_cubies() {
            assert_eq!(grid.get(cubie.home), Some(cubie.id));
            assert_eq!(grid.position_of(cubie.id), Some(cubie.home));
        }
    }

    #[test]
    fn test_duplicate_cubie_is_inconsistent() {
        let mut grid = Grid::solved();
        let first = grid.get((0, 0, 0)).unwrap();
        grid.set((2, 2, 2), first);
        assert!(!grid.is_consistent());
    }

    #[test]
    fn test_empty_grid_is_inconsistent() {
        assert!(!Grid::empty().is_consistent());
    }

    #[test]
    fn test_format_solved_grid() {
        insta::assert_snapshot!(format_grid(&Grid::solved()), @r"
        z=0  z=1  z=2
        6en  7fo  8gp
        3ck  4.l  5dm
        09h  1ai  2bj
        ");
    }
}
