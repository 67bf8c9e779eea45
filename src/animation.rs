//! Animation scheduler: plays one face turn at a time.
//!
//! The scheduler is a two-state machine driven by [`Scheduler::tick`], which
//! the host calls once per frame with a monotonic timestamp:
//! - **Idle**: the next queued request (if any) is applied to the grid right
//!   away and its animation starts. No visual step happens on this tick.
//! - **Animating**: the moved cubies are pivoted by the share of the quarter
//!   turn that elapsed since the previous tick. Once the duration budget is
//!   spent, transforms are snapped to the grid and the scheduler goes idle.
//!
//! A request is not even looked at until the previous animation finished, so
//! grid mutations are strictly serialized.

use std::time::Duration;

use log::{debug, trace};

use crate::cubie::{Cubie, CubieId, Transform};
use crate::geometry::{axis_rotation, pivot, quarter_turn_angle, snap};
use crate::grid::Grid;
use crate::queue::InputQueue;
use crate::rotation::{rotate_layer, RotationRequest};

/// The face turn currently being animated.
#[derive(Clone, Debug)]
pub struct RotationState {
    request: RotationRequest,
    /// Cubies being moved, in the order they were selected.
    cubies: Vec<CubieId>,
    /// Transforms of `cubies` when the animation started.
    start_transforms: Vec<Transform>,
    total: Duration,
    remaining: Duration,
    last_update: Duration,
    /// Signed angle applied so far, in radians.
    angle: f32,
}

impl RotationState {
    /// Creates an animation for a turn that was already applied to the grid.
    pub fn new(request: RotationRequest, cubies: Vec<CubieId>, total: Duration) -> Self {
        Self {
            request,
            cubies,
            start_transforms: Vec::new(),
            total,
            remaining: total,
            last_update: Duration::ZERO,
            angle: 0.0,
        }
    }

    pub fn request(&self) -> RotationRequest {
        self.request
    }

    pub fn cubies(&self) -> &[CubieId] {
        &self.cubies
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Signed rotation applied so far, in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Fraction of the animation played so far, from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.total.is_zero() {
            return 1.0;
        }
        1.0 - self.remaining.as_secs_f32() / self.total.as_secs_f32()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Records the starting transforms of the moved cubies.
    fn begin(&mut self, now: Duration, cubies: &[Cubie]) {
        self.last_update = now;
        self.start_transforms = self.cubies.iter().map(|&id| cubies[id].transform).collect();
    }

    /// Advances the animation to `now` and updates the moved cubies.
    ///
    /// Returns the signed angle increment applied by this step.
    fn advance(&mut self, now: Duration, cubies: &mut [Cubie]) -> f32 {
        let elapsed = now.saturating_sub(self.last_update).min(self.remaining);
        self.last_update = now;
        self.remaining -= elapsed;

        let full_turn = quarter_turn_angle(self.request.clockwise);
        let increment = if self.total.is_zero() {
            full_turn - self.angle
        } else {
            elapsed.as_secs_f32() / self.total.as_secs_f32() * full_turn
        };
        self.angle += increment;

        // the last step lands exactly on the quarter turn, whatever rounding
        // accumulated in the increments
        let finished = self.is_finished();
        if finished {
            self.angle = full_turn;
        }

        let rotation = axis_rotation(self.request.axis, self.angle);
        for (&id, start) in self.cubies.iter().zip(&self.start_transforms) {
            let turned = pivot(start, rotation);
            cubies[id].transform = if finished { snap(&turned) } else { turned };
        }

        increment
    }
}

/// Outcome of a single scheduler tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tick {
    /// Request dequeued and applied to the grid during this tick.
    pub started: Option<RotationRequest>,
    /// Cubies whose transform changed during this tick.
    pub moved: Vec<CubieId>,
    /// Signed rotation applied to `moved`, in radians.
    pub angle: f32,
    /// Whether the current animation completed during this tick.
    pub finished: bool,
}

/// Single-flight animation state machine.
#[derive(Clone, Debug, Default)]
pub enum Scheduler {
    #[default]
    Idle,
    Animating(RotationState),
}

impl Scheduler {
    pub fn is_idle(&self) -> bool {
        matches!(self, Scheduler::Idle)
    }

    /// Returns the animation in flight, if any.
    pub fn current(&self) -> Option<&RotationState> {
        match self {
            Scheduler::Idle => None,
            Scheduler::Animating(state) => Some(state),
        }
    }

    /// Performs one non-blocking step.
    ///
    /// When idle, starts the next queued turn (mutating `grid` immediately).
    /// When animating, moves the affected cubies toward their final
    /// transforms and returns to idle once `duration` has elapsed.
    pub fn tick(
        &mut self,
        now: Duration,
        queue: &mut InputQueue,
        grid: &mut Grid,
        cubies: &mut [Cubie],
        duration: Duration,
    ) -> Tick {
        match self {
            Scheduler::Idle => {
                let Some(request) = queue.dequeue() else {
                    return Tick::default();
                };
                let mut state = rotate_layer(grid, request, duration);
                state.begin(now, cubies);
                debug!(
                    "starting {request} ({} cubies, {} queued)",
                    state.cubies().len(),
                    queue.len()
                );
                *self = Scheduler::Animating(state);
                Tick {
                    started: Some(request),
                    ..Tick::default()
                }
            }
            Scheduler::Animating(state) => {
                let angle = state.advance(now, cubies);
                let moved = state.cubies().to_vec();
                let finished = state.is_finished();
                if finished {
                    debug!("finished {}", state.request());
                    *self = Scheduler::Idle;
                } else {
                    trace!("{:.0}% of {}", state.progress() * 100.0, state.request());
                }
                Tick {
                    started: None,
                    moved,
                    angle,
                    finished,
                }
            }
        }
    }
}
