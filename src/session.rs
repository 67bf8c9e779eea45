//! A play session: the cube, its pending turns, and the animation in flight.

use std::time::Duration;

use log::debug;

use crate::animation::{RotationState, Scheduler, Tick};
use crate::cubie::{all_cubies, Cubie, CubieId};
use crate::grid::Grid;
use crate::queue::InputQueue;
use crate::rotation::{RotationRequest, ANIMATION_DURATION};

/// Smallest step used by [`Session::run_until_idle`].
const MIN_STEP: Duration = Duration::from_millis(1);

/// Owns every piece of mutable puzzle state.
///
/// Input handlers call [`enqueue`](Self::enqueue); the host loop calls
/// [`tick`](Self::tick) (or [`advance`](Self::advance)) once per frame and
/// redraws the cubies listed in the returned [`Tick`].
#[derive(Clone, Debug)]
pub struct Session {
    cubies: Vec<Cubie>,
    grid: Grid,
    queue: InputQueue,
    scheduler: Scheduler,
    /// Animation length of every turn.
    duration: Duration,
    /// Timestamp of the most recent tick.
    clock: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh cube with the default turn duration.
    pub fn new() -> Self {
        Self::with_duration(ANIMATION_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            cubies: all_cubies(),
            grid: Grid::solved(),
            queue: InputQueue::new(),
            scheduler: Scheduler::Idle,
            duration,
            clock: Duration::ZERO,
        }
    }

    /// Queues a turn behind everything already pending.
    pub fn enqueue(&mut self, request: RotationRequest) {
        self.queue.enqueue(request);
    }

    /// Runs one frame step at timestamp `now`.
    pub fn tick(&mut self, now: Duration) -> Tick {
        self.clock = now;
        self.scheduler.tick(
            now,
            &mut self.queue,
            &mut self.grid,
            &mut self.cubies,
            self.duration,
        )
    }

    /// Runs one frame step `delta` after the previous one.
    pub fn advance(&mut self, delta: Duration) -> Tick {
        self.tick(self.clock + delta)
    }

    /// Ticks in steps of `step` until the queue is drained and nothing is
    /// animating. Returns the number of turns completed.
    pub fn run_until_idle(&mut self, step: Duration) -> usize {
        let step = step.max(MIN_STEP);
        let mut completed = 0;
        while !self.is_settled() {
            if self.advance(step).finished {
                completed += 1;
            }
        }
        debug!("settled after {completed} turns");
        completed
    }

    /// True when no animation is running. Queued turns may still be pending.
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// True when idle with nothing queued.
    pub fn is_settled(&self) -> bool {
        self.is_idle() && self.queue.is_empty()
    }

    /// Number of turns waiting behind the current animation.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn current(&self) -> Option<&RotationState> {
        self.scheduler.current()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cubie(&self, id: CubieId) -> &Cubie {
        &self.cubies[id]
    }

    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::{Axis, Layer, Transform};
    use crate::grid::format_grid;
    use crate::notation::parse_moves;
    use crate::rotation::rotate_layer;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_new_session_is_settled() {
        let session = Session::new();
        assert!(session.is_settled());
        assert_eq!(session.cubies().len(), 26);
        assert_eq!(session.grid(), &Grid::solved());
        assert_eq!(session.duration(), ANIMATION_DURATION);
    }

    #[test]
    fn test_queued_turns_apply_in_fifo_order() {
        let requests = parse_moves(&["x+ y*' z- x+'"]).unwrap();

        // expected grid history, one turn at a time
        let mut expected = Grid::solved();
        let mut history = Vec::new();
        for &request in &requests {
            rotate_layer(&mut expected, request, ANIMATION_DURATION);
            history.push(expected.clone());
        }

        let mut session = Session::new();
        for &request in &requests {
            session.enqueue(request);
        }

        let mut started = Vec::new();
        let mut grid_at_start = Vec::new();
        let mut now = Duration::ZERO;
        while !session.is_settled() {
            let was_idle = session.is_idle();
            let tick = session.tick(now);
            if let Some(request) = tick.started {
                assert!(was_idle, "a turn started while another was animating");
                started.push(request);
                grid_at_start.push(session.grid().clone());
            } else if !tick.finished {
                // mid-animation ticks never touch the grid
                assert_eq!(Some(session.grid()), grid_at_start.last());
            }
            now += FRAME;
        }

        assert_eq!(started, requests);
        assert_eq!(grid_at_start, history);
    }

    #[test]
    fn test_run_until_idle_counts_turns() {
        let mut session = Session::new();
        for request in parse_moves(&["x+", "x+", "x+", "x+"]).unwrap() {
            session.enqueue(request);
        }
        assert_eq!(session.pending(), 4);
        assert_eq!(session.run_until_idle(FRAME), 4);
        assert!(session.is_settled());
        assert_eq!(session.grid(), &Grid::solved());
    }

    #[test]
    fn test_transforms_match_grid_after_settling() {
        let mut session = Session::new();
        for request in parse_moves(&["x+ y* z-' y+ x*'"]).unwrap() {
            session.enqueue(request);
        }
        session.run_until_idle(Duration::from_millis(7));

        assert!(session.grid().is_consistent());
        for (coord, id) in session.grid().occupied() {
            assert_eq!(
                session.cubie(id).transform.position,
                Transform::at_coord(coord).position
            );
        }
    }

    #[test]
    fn test_advance_uses_internal_clock() {
        let mut session = Session::with_duration(Duration::from_millis(150));
        session.enqueue(RotationRequest::new(Axis::X, Layer::Far, true));

        assert!(session.advance(Duration::ZERO).started.is_some());
        for _ in 0..2 {
            assert!(!session.advance(Duration::from_millis(50)).finished);
        }
        let last = session.advance(Duration::from_millis(50));
        assert!(last.finished);
        assert_eq!(last.moved.len(), 9);
        assert!(session.is_idle());
    }

    #[test]
    fn test_grid_layout_after_turns() {
        let mut session = Session::new();
        for request in parse_moves(&["x+ y*' z-"]).unwrap() {
            session.enqueue(request);
        }
        session.run_until_idle(FRAME);

        insta::assert_snapshot!(format_grid(session.grid()), @r"
        z=0  z=1  z=2
        0o6  7fm  8gj
        9le  c.d  345
        nip  1ak  2bh
        ");
    }
}
