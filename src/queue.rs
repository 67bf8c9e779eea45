//! FIFO queue of pending face turns.

use std::collections::VecDeque;

use log::trace;

use crate::rotation::RotationRequest;

/// Unbounded queue of requests, processed strictly in submission order.
///
/// No deduplication or coalescing: every enqueued turn is played.
#[derive(Clone, Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<RotationRequest>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a request to the back of the queue.
    pub fn enqueue(&mut self, request: RotationRequest) {
        self.pending.push_back(request);
        trace!("queued {request} ({} pending)", self.pending.len());
    }

    /// Removes the oldest request, if any.
    pub fn dequeue(&mut self) -> Option<RotationRequest> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterates pending requests, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &RotationRequest> {
        self.pending.iter()
    }
}

impl Extend<RotationRequest> for InputQueue {
    fn extend<T: IntoIterator<Item = RotationRequest>>(&mut self, iter: T) {
        for request in iter {
            self.enqueue(request);
        }
    }
}
