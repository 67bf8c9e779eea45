//! Rotation engine: applies a face turn to the grid model.
//!
//! The logical update happens all at once when a turn is accepted. The
//! returned [`RotationState`] only describes how to animate what already
//! happened.

use std::time::Duration;

use crate::animation::RotationState;
use crate::cubie::{Axis, Coord, CubieId, Layer, DIM};
use crate::geometry::rotate_grid_coord;
use crate::grid::Grid;

/// Default duration of one face-turn animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(150);

/// A requested face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationRequest {
    pub axis: Axis,
    pub layer: Layer,
    /// Clockwise as seen looking along the positive direction of `axis`.
    pub clockwise: bool,
}

impl RotationRequest {
    pub const fn new(axis: Axis, layer: Layer, clockwise: bool) -> Self {
        Self {
            axis,
            layer,
            clockwise,
        }
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Returns this request with the direction flipped if `invert` is set.
    pub const fn inverted_if(self, invert: bool) -> Self {
        if invert {
            self.inverse()
        } else {
            self
        }
    }
}

/// Lists the 9 grid cells whose component along `axis` equals the layer offset.
///
/// For the middle layer this includes the (empty) center cell.
pub fn layer_coords(axis: Axis, layer: Layer) -> [Coord; DIM * DIM] {
    let offset = layer.offset();
    let mut coords = [(0, 0, 0); DIM * DIM];
    let mut i = 0;
    for a in 0..DIM as i32 {
        for b in 0..DIM as i32 {
            coords[i] = match axis {
                Axis::X => (offset, a, b),
                Axis::Y => (a, offset, b),
                Axis::Z => (a, b, offset),
            };
            i += 1;
        }
    }
    coords
}

/// Turns one layer of the grid by a quarter turn.
///
/// Every cubie in the layer is written to its rotated cell before this
/// returns. Empty cells (the center, for middle layers) are skipped. The
/// returned state lists the moved cubies with the full `duration` budget.
pub fn rotate_layer(
    grid: &mut Grid,
    request: RotationRequest,
    duration: Duration,
) -> RotationState {
    let RotationRequest {
        axis,
        layer,
        clockwise,
    } = request;

    // collect first: every target cell is also a source cell
    let moves: Vec<(CubieId, Coord)> = layer_coords(axis, layer)
        .into_iter()
        .filter_map(|coord| {
            grid.get(coord)
                .map(|cubie| (cubie, rotate_grid_coord(coord, axis, clockwise)))
        })
        .collect();

    for &(cubie, destination) in &moves {
        grid.set(destination, cubie);
    }

    let cubies = moves.into_iter().map(|(cubie, _)| cubie).collect();
    RotationState::new(request, cubies, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(grid: &mut Grid, axis: Axis, layer: Layer, clockwise: bool) -> RotationState {
        rotate_layer(
            grid,
            RotationRequest::new(axis, layer, clockwise),
            ANIMATION_DURATION,
        )
    }

    fn all_requests() -> impl Iterator<Item = RotationRequest> {
        Axis::ALL.into_iter().flat_map(|axis| {
            Layer::ALL.into_iter().flat_map(move |layer| {
                [false, true]
                    .into_iter()
                    .map(move |clockwise| RotationRequest::new(axis, layer, clockwise))
            })
        })
    }

    #[test]
    fn test_layer_coords_share_axis_component() {
        for axis in Axis::ALL {
            for layer in Layer::ALL {
                let coords = layer_coords(axis, layer);
                assert!(coords.iter().all(|&c| axis.component(c) == layer.offset()));
                let mut sorted = coords.to_vec();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), 9, "Layer {axis:?}/{layer:?} has duplicate cells");
            }
        }
    }

    #[test]
    fn test_every_turn_keeps_grid_consistent() {
        for request in all_requests() {
            let mut grid = Grid::solved();
            rotate_layer(&mut grid, request, ANIMATION_DURATION);
            assert!(grid.is_consistent(), "{request:?} broke the grid invariant");
        }
    }

    #[test]
    fn test_turn_then_inverse_restores_grid() {
        for request in all_requests() {
            let mut grid = Grid::solved();
            rotate_layer(&mut grid, request, ANIMATION_DURATION);
            rotate_layer(&mut grid, request.inverse(), ANIMATION_DURATION);
            assert_eq!(grid, Grid::solved(), "{request:?} was not undone by its inverse");
        }
    }

    #[test]
    fn test_four_turns_restore_grid() {
        for request in all_requests() {
            let mut grid = Grid::solved();
            for _ in 0..4 {
                rotate_layer(&mut grid, request, ANIMATION_DURATION);
            }
            assert_eq!(grid, Grid::solved(), "{request:?} applied 4 times is not identity");
        }
    }

    #[test]
    fn test_single_turn_changes_grid() {
        for request in all_requests() {
            let mut grid = Grid::solved();
            rotate_layer(&mut grid, request, ANIMATION_DURATION);
            assert_ne!(grid, Grid::solved(), "{request:?} did not move anything");
        }
    }

    #[test]
    fn test_far_x_clockwise_scenario() {
        let mut grid = Grid::solved();
        let corner_low = grid.get((2, 0, 0)).unwrap();
        let corner_high = grid.get((2, 2, 2)).unwrap();

        let state = turn(&mut grid, Axis::X, Layer::Far, true);

        assert_eq!(grid.get((2, 0, 2)), Some(corner_low));
        assert_eq!(grid.get((2, 2, 0)), Some(corner_high));
        assert_eq!(state.cubies().len(), 9);
        // the near and middle x layers are untouched
        let solved = Grid::solved();
        for (coord, cubie) in solved.occupied().filter(|&(c, _)| c.0 != 2) {
            assert_eq!(grid.get(coord), Some(cubie));
        }
    }

    #[test]
    fn test_middle_y_turn_moves_only_middle_layer() {
        let mut grid = Grid::solved();
        let state = turn(&mut grid, Axis::Y, Layer::Middle, true);

        // the empty center is not part of the moved set
        assert_eq!(state.cubies().len(), 8);

        let solved = Grid::solved();
        let mut untouched = 0;
        for (coord, cubie) in solved.occupied() {
            if coord.1 != 1 {
                assert_eq!(grid.get(coord), Some(cubie), "{coord:?} should not move");
                untouched += 1;
            } else {
                assert!(state.cubies().contains(&cubie));
            }
        }
        assert_eq!(untouched, 18);
    }

    #[test]
    fn test_moved_set_matches_layer_before_turn() {
        let mut grid = Grid::solved();
        let before: Vec<CubieId> = layer_coords(Axis::Z, Layer::Near)
            .into_iter()
            .filter_map(|c| grid.get(c))
            .collect();
        let state = turn(&mut grid, Axis::Z, Layer::Near, false);
        assert_eq!(state.cubies(), before.as_slice());
        assert_eq!(state.remaining(), ANIMATION_DURATION);
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        let mut grid = Grid::empty();
        grid.set((0, 0, 0), 7);
        let state = turn(&mut grid, Axis::X, Layer::Near, true);
        assert_eq!(state.cubies(), &[7]);
        assert_eq!(grid.get((0, 0, 2)), Some(7));
    }
}
