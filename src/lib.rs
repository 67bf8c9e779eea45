//! Twisty Cube Library
//!
//! Models a 3x3x3 cube of 26 cubies that can be turned one layer at a time,
//! with each turn applied to the grid immediately and then animated over a
//! fixed duration. Rendering is left to the host: it feeds input into a
//! [`Session`], calls [`Session::tick`] once per frame and draws the cubie
//! transforms the session reports.

pub mod animation;
pub mod cubie;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod notation;
pub mod queue;
pub mod rotation;
mod session;

pub use animation::Tick;
pub use notation::{parse_moves, NotationError};
pub use rotation::RotationRequest;
pub use session::Session;
