//! In-memory snapshot recording for playback and scrubbing.

use std::collections::VecDeque;

use abm_core::Tick;

use crate::SimObserver;

/// One recorded population snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<A> {
    pub tick: Tick,
    pub agents: Vec<A>,
}

/// Observer that copies every snapshot it is handed.
///
/// With a frame limit only the most recent `limit` frames are kept, which
/// bounds memory for long runs feeding a live view with a short trail.
pub struct SnapshotRecorder<A> {
    frames: VecDeque<Frame<A>>,
    limit: Option<usize>,
}

impl<A: Clone> SnapshotRecorder<A> {
    /// Keep every frame.
    pub fn new() -> Self {
        Self { frames: VecDeque::new(), limit: None }
    }

    /// Keep at most `limit` frames (at least one).
    pub fn with_frame_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            frames: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames in recording order (oldest first).
    pub fn frames(&self) -> impl ExactSizeIterator<Item = &Frame<A>> + '_ {
        self.frames.iter()
    }

    /// Frame by position, oldest first.
    pub fn get(&self, position: usize) -> Option<&Frame<A>> {
        self.frames.get(position)
    }

    /// Frame recorded for exactly `tick`.
    pub fn at_tick(&self, tick: Tick) -> Option<&Frame<A>> {
        self.frames
            .binary_search_by_key(&tick, |f| f.tick)
            .ok()
            .and_then(|i| self.frames.get(i))
    }

    pub fn latest(&self) -> Option<&Frame<A>> {
        self.frames.back()
    }

    /// Drop all frames and hand them to the caller.
    pub fn take_frames(&mut self) -> Vec<Frame<A>> {
        self.frames.drain(..).collect()
    }
}

impl<A: Clone> Default for SnapshotRecorder<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> SimObserver<A> for SnapshotRecorder<A> {
    fn on_snapshot(&mut self, tick: Tick, agents: &[A]) {
        if let Some(limit) = self.limit {
            while self.frames.len() >= limit {
                self.frames.pop_front();
            }
        }
        self.frames.push_back(Frame { tick, agents: agents.to_vec() });
    }
}
