//! Text notation for face turns.
//!
//! A move is written `<axis><layer>[']`: the axis letter `x`, `y` or `z`, the
//! layer symbol `-`, `*` or `+`, and an optional apostrophe for a
//! counter-clockwise turn. For example `x+` turns the far x layer clockwise
//! and `y*'` turns the middle y layer counter-clockwise.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cubie::{Axis, Layer};
use crate::rotation::RotationRequest;

/// Marks a counter-clockwise turn.
const INVERSE_MARK: char = '\'';

/// Reasons a move string can fail to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty move")]
    Empty,
    #[error("unknown axis {0:?}, expected one of x, y, z")]
    UnknownAxis(char),
    #[error("move {0:?} is missing a layer (-, * or +)")]
    MissingLayer(String),
    #[error("unknown layer {0:?}, expected one of -, *, +")]
    UnknownLayer(char),
    #[error("unexpected {rest:?} after move {parsed:?}")]
    TrailingInput { parsed: String, rest: String },
}

impl Axis {
    fn from_letter(letter: char) -> Option<Axis> {
        match letter.to_ascii_lowercase() {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for RotationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis.letter(), self.layer.symbol())?;
        if !self.clockwise {
            write!(f, "{INVERSE_MARK}")?;
        }
        Ok(())
    }
}

impl FromStr for RotationRequest {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        let axis_letter = chars.next().ok_or(NotationError::Empty)?;
        let axis = Axis::from_letter(axis_letter).ok_or(NotationError::UnknownAxis(axis_letter))?;

        let layer_symbol = chars
            .next()
            .ok_or_else(|| NotationError::MissingLayer(s.trim().to_string()))?;
        let layer = Layer::from_symbol(layer_symbol).ok_or(NotationError::UnknownLayer(layer_symbol))?;

        let mut request = RotationRequest::new(axis, layer, true);
        let rest = chars.as_str();
        match rest {
            "" => {}
            "'" => request.clockwise = false,
            _ => {
                let parsed = format!("{axis_letter}{layer_symbol}");
                return Err(NotationError::TrailingInput {
                    parsed,
                    rest: rest.to_string(),
                });
            }
        }

        Ok(request)
    }
}

/// Parses a whitespace-separated sequence of moves.
pub fn parse_moves<S: AsRef<str>>(moves: &[S]) -> Result<Vec<RotationRequest>, NotationError> {
    moves
        .iter()
        .flat_map(|chunk| chunk.as_ref().split_whitespace())
        .map(str::parse)
        .collect()
}
