//! Quarter-turn rotation math.
//!
//! Turns are right-handed: a clockwise turn is -90 degrees about the positive
//! direction of its axis, as seen looking along that axis. The discrete grid
//! update and the continuous animation share this sign convention.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::cubie::{Axis, Coord, Transform, CENTER};

/// Quarter-turn formulas on centered coordinates.
///
/// Indexed as `[axis][clockwise as usize]`:
/// - `[_][0]`: +90 degrees (counter-clockwise)
/// - `[_][1]`: -90 degrees (clockwise)
///
/// Each is an exact swap-and-negate of the two components perpendicular to the
/// axis, so no rounding is ever needed.
pub const QUARTER_TURNS: [[fn(Coord) -> Coord; 2]; 3] = [
    // about X: (y, z) plane
    [|(x, y, z)| (x, -z, y), |(x, y, z)| (x, z, -y)],
    // about Y: (z, x) plane
    [|(x, y, z)| (z, y, -x), |(x, y, z)| (-z, y, x)],
    // about Z: (x, y) plane
    [|(x, y, z)| (-y, x, z), |(x, y, z)| (y, -x, z)],
];

/// Rotates a centered coordinate (components in `-1..=1`) by a quarter turn.
#[inline]
pub fn quarter_turn(coord: Coord, axis: Axis, clockwise: bool) -> Coord {
    QUARTER_TURNS[axis as usize][clockwise as usize](coord)
}

/// Rotates a grid coordinate (components in `0..=2`) a quarter turn about the
/// axis line through the center of the cube.
#[inline]
pub fn rotate_grid_coord(coord: Coord, axis: Axis, clockwise: bool) -> Coord {
    let centered = (coord.0 - CENTER.0, coord.1 - CENTER.1, coord.2 - CENTER.2);
    let (x, y, z) = quarter_turn(centered, axis, clockwise);
    (x + CENTER.0, y + CENTER.1, z + CENTER.2)
}

/// Signed angle of a full quarter turn, in radians.
#[inline]
pub fn quarter_turn_angle(clockwise: bool) -> f32 {
    if clockwise {
        -FRAC_PI_2
    } else {
        FRAC_PI_2
    }
}

/// Rotation of `angle` radians about the positive direction of `axis`.
#[inline]
pub fn axis_rotation(axis: Axis, angle: f32) -> Quat {
    Quat::from_axis_angle(axis.unit(), angle)
}

/// Pivots a transform about the center of the cube.
///
/// Both the position (orbiting the pivot axis) and the orientation (spinning
/// in world space) are rotated, so stickers stay attached to their faces.
pub fn pivot(transform: &Transform, rotation: Quat) -> Transform {
    Transform {
        position: rotation * transform.position,
        rotation: (rotation * transform.rotation).normalize(),
    }
}

/// Rounds a transform that should sit exactly on a grid cell.
///
/// Positions are snapped to whole world units; the orientation is only
/// renormalized since quarter-turn quaternions are not integer valued.
pub fn snap(transform: &Transform) -> Transform {
    Transform {
        position: transform.position.round(),
        rotation: transform.rotation.normalize(),
    }
}

/// Rotates a float vector by a quarter turn and rounds to integers.
///
/// Equivalent to [`quarter_turn`]; kept for cross-checking the exact formulas
/// against the continuous rotation used by the animation.
pub fn quarter_turn_rounded(coord: Coord, axis: Axis, clockwise: bool) -> Coord {
    let v = Vec3::new(coord.0 as f32, coord.1 as f32, coord.2 as f32);
    let r = (axis_rotation(axis, quarter_turn_angle(clockwise)) * v).round();
    (r.x as i32, r.y as i32, r.z as i32)
}
