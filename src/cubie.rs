//! Cubie definitions and the axis/layer vocabulary used to address them.
//!
//! Grid coordinates are integers in `0..=2` per axis. The cell at (1, 1, 1) is
//! the hidden center of the cube and never holds a cubie, leaving 26 cubies.

use glam::{Quat, Vec3};

/// An integer grid coordinate, each component in `0..=2`.
pub type Coord = (i32, i32, i32);

/// Index of a cubie in the session's cubie list.
pub type CubieId = usize;

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Total number of cells in the grid (`DIM^3`).
pub const GRID_SIZE: usize = DIM * DIM * DIM;

/// Number of cubies (every cell except the center).
pub const NUM_CUBIES: usize = GRID_SIZE - 1;

/// The always-empty center cell.
pub const CENTER: Coord = (1, 1, 1);

/// One of the three principal axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector pointing along the positive direction of this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Returns the component of `coord` along this axis.
    #[inline]
    pub const fn component(self, coord: Coord) -> i32 {
        match self {
            Axis::X => coord.0,
            Axis::Y => coord.1,
            Axis::Z => coord.2,
        }
    }

    /// Lowercase letter used in move notation.
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// One of the three layers stacked along an axis.
///
/// Layers are written `-`, `*` and `+` and sit at offsets 0, 1 and 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Near,
    Middle,
    Far,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Near, Layer::Middle, Layer::Far];

    /// Grid coordinate shared by every cell of this layer along its axis.
    #[inline]
    pub const fn offset(self) -> i32 {
        match self {
            Layer::Near => 0,
            Layer::Middle => 1,
            Layer::Far => 2,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Layer::Near => '-',
            Layer::Middle => '*',
            Layer::Far => '+',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Layer> {
        match symbol {
            '-' => Some(Layer::Near),
            '*' => Some(Layer::Middle),
            '+' => Some(Layer::Far),
            _ => None,
        }
    }
}

/// Colors painted on the outer faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StickerColor {
    Yellow,
    Red,
    Green,
    Pink,
    White,
    Blue,
}

impl StickerColor {
    /// Returns the color of the outer face on the given side of `axis`.
    ///
    /// The mapping is fixed so that a cubie's colors never change after
    /// construction.
    pub const fn for_face(axis: Axis, outward: i32) -> StickerColor {
        match (axis, outward < 0) {
            (Axis::X, true) => StickerColor::Yellow,
            (Axis::X, false) => StickerColor::Red,
            (Axis::Y, true) => StickerColor::Green,
            (Axis::Y, false) => StickerColor::Pink,
            (Axis::Z, true) => StickerColor::White,
            (Axis::Z, false) => StickerColor::Blue,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StickerColor::Yellow => "yellow",
            StickerColor::Red => "red",
            StickerColor::Green => "green",
            StickerColor::Pink => "pink",
            StickerColor::White => "white",
            StickerColor::Blue => "blue",
        }
    }

    /// Linear RGB components for rendering.
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            StickerColor::Yellow => [1.0, 1.0, 0.0],
            StickerColor::Red => [1.0, 0.0, 0.0],
            StickerColor::Green => [0.0, 0.5, 0.0],
            StickerColor::Pink => [1.0, 0.75, 0.8],
            StickerColor::White => [1.0, 1.0, 1.0],
            StickerColor::Blue => [0.0, 0.0, 1.0],
        }
    }
}

/// A colored sticker on one outer face of a cubie, in the cubie's own frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sticker {
    pub axis: Axis,
    /// `-1` or `+1`: which side of the cubie along `axis` the sticker faces.
    pub outward: i32,
    pub color: StickerColor,
}

impl Sticker {
    /// Outward normal of the sticker in the cubie's local frame.
    pub fn normal(&self) -> Vec3 {
        self.axis.unit() * self.outward as f32
    }
}

/// Spatial transform of a cubie, relative to the center of the whole cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    /// The resting transform for a cubie sitting in `coord`, unrotated.
    pub fn at_coord(coord: Coord) -> Self {
        Self {
            position: coord_to_world(coord),
            rotation: Quat::IDENTITY,
        }
    }
}

/// Converts a grid coordinate to world units, centering the grid at the origin.
pub fn coord_to_world((x, y, z): Coord) -> Vec3 {
    /// Offset to center the grid around the origin.
    const CENTER_OFFSET: f32 = -1.0;

    Vec3::new(
        x as f32 + CENTER_OFFSET,
        y as f32 + CENTER_OFFSET,
        z as f32 + CENTER_OFFSET,
    )
}

/// One of the 26 small cubes making up the puzzle.
#[derive(Clone, Debug)]
pub struct Cubie {
    pub id: CubieId,
    /// Grid coordinate the cubie was created in.
    pub home: Coord,
    /// Up to three stickers, one per outer face the cubie exposed at home.
    pub stickers: Vec<Sticker>,
    /// Current visual transform, moved by the animation scheduler.
    pub transform: Transform,
}

impl Cubie {
    /// Creates the cubie that lives at `home`, deriving its stickers from the
    /// outer faces it touches.
    pub fn new(id: CubieId, home: Coord) -> Self {
        debug_assert!(home != CENTER, "the center cell has no cubie");

        let mut stickers = Vec::with_capacity(3);
        for axis in Axis::ALL {
            let outward = match axis.component(home) {
                0 => -1,
                2 => 1,
                _ => continue,
            };
            stickers.push(Sticker {
                axis,
                outward,
                color: StickerColor::for_face(axis, outward),
            });
        }

        Self {
            id,
            home,
            stickers,
            transform: Transform::at_coord(home),
        }
    }

    /// Space-separated sticker color names, e.g. `"red pink blue"`.
    pub fn name(&self) -> String {
        let names: Vec<&str> = self.stickers.iter().map(|s| s.color.name()).collect();
        names.join(" ")
    }
}

/// Creates all 26 cubies in x-major order, skipping the center.
///
/// A cubie's id is its index in the returned list.
pub fn all_cubies() -> Vec<Cubie> {
    let mut cubies = Vec::with_capacity(NUM_CUBIES);
    for x in 0..DIM as i32 {
        for y in 0..DIM as i32 {
            for z in 0..DIM as i32 {
                if (x, y, z) == CENTER {
                    continue;
                }
                cubies.push(Cubie::new(cubies.len(), (x, y, z)));
            }
        }
    }
    cubies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cubies_skips_center() {
        let cubies = all_cubies();
        assert_eq!(cubies.len(), NUM_CUBIES);
        assert!(cubies.iter().all(|c| c.home != CENTER));
        for (index, cubie) in cubies.iter().enumerate() {
            assert_eq!(cubie.id, index, "Cubie id should match its list index");
        }
    }

    #[test]
    fn test_sticker_counts() {
        let cubies = all_cubies();
        let count_with = |n: usize| cubies.iter().filter(|c| c.stickers.len() == n).count();
        // 8 corners, 12 edges, 6 face centers
        assert_eq!(count_with(3), 8);
        assert_eq!(count_with(2), 12);
        assert_eq!(count_with(1), 6);
        assert_eq!(count_with(0), 0);
    }

    #[test]
    fn test_corner_name_and_colors() {
        let corner = Cubie::new(0, (2, 2, 2));
        assert_eq!(corner.name(), "red pink blue");

        let opposite = Cubie::new(0, (0, 0, 0));
        assert_eq!(opposite.name(), "yellow green white");
        for sticker in &opposite.stickers {
            assert_eq!(sticker.outward, -1);
        }
    }

    #[test]
    fn test_initial_transform_is_centered() {
        let cubie = Cubie::new(0, (0, 1, 2));
        assert_eq!(cubie.transform.position, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(cubie.transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_layer_symbols_roundtrip() {
        for layer in Layer::ALL {
            assert_eq!(Layer::from_symbol(layer.symbol()), Some(layer));
        }
        assert_eq!(Layer::from_symbol('x'), None);
    }
}
