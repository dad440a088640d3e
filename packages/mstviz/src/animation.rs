//! Step-driven playback of a completed run.
//!
//! Runs are computed eagerly; this module only decides what to show next.
//! The caller owns the clock and calls [`Playback::tick`] (or `next`) at
//! whatever pace it animates.

use std::collections::VecDeque;

use indexmap::IndexSet;

use crate::core::{NodeKey, Weight};
use crate::result::{MstResult, Run};
use crate::trace::Step;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    NotStarted,
    Running,
    Completed,
}

#[derive(Debug, PartialEq)]
pub enum Frame<'a, K, W> {
    /// A node is highlighted for the first time.
    Vertex(&'a K),
    /// The next recorded step, accepted or rejected.
    Edge(&'a Step<K, W>),
    /// Emitted once, after the last step.
    Finished(&'a MstResult<K, W>),
}

pub struct Playback<'a, K, W>
where
    K: NodeKey,
{
    run: &'a Run<K, W>,
    state: PlaybackState,
    cursor: usize,
    pending: VecDeque<Frame<'a, K, W>>,
    visited: IndexSet<&'a K>,
}

impl<'a, K, W> Playback<'a, K, W>
where
    K: NodeKey,
    W: Weight,
{
    pub fn new(run: &'a Run<K, W>) -> Self {
        Self {
            run,
            state: PlaybackState::NotStarted,
            cursor: 0,
            pending: VecDeque::new(),
            visited: IndexSet::new(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Advances by one frame. Returns `None` once completed.
    pub fn tick(&mut self) -> Option<Frame<'a, K, W>> {
        let run = self.run;
        match self.state {
            PlaybackState::Completed => return None,
            PlaybackState::NotStarted => {
                self.state = PlaybackState::Running;
                if let Some(start) = run.trace.start() {
                    self.visit(start);
                }
            }
            PlaybackState::Running => {}
        }

        if let Some(frame) = self.pending.pop_front() {
            return Some(frame);
        }

        if let Some(step) = run.trace.steps().get(self.cursor) {
            self.cursor += 1;
            if step.is_accepted() {
                self.visit(&step.from);
                self.visit(&step.to);
            }
            self.pending.push_back(Frame::Edge(step));
            return self.pending.pop_front();
        }

        self.state = PlaybackState::Completed;
        Some(Frame::Finished(&run.result))
    }

    /// Steps shown so far.
    pub fn played(&self) -> &'a [Step<K, W>] {
        self.run.trace.prefix(self.cursor)
    }

    pub fn highlighted_edges(&self) -> impl Iterator<Item = &'a Step<K, W>> + use<'a, K, W> {
        self.played().iter().filter(|s| s.is_accepted())
    }

    pub fn visited(&self) -> impl Iterator<Item = &'a K> + '_ {
        self.visited.iter().copied()
    }

    /// (steps shown, steps in the trace)
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.run.trace.len())
    }

    pub fn reset(&mut self) {
        self.state = PlaybackState::NotStarted;
        self.cursor = 0;
        self.pending.clear();
        self.visited.clear();
    }

    fn visit(&mut self, key: &'a K) {
        if self.visited.insert(key) {
            self.pending.push_back(Frame::Vertex(key));
        }
    }
}

impl<'a, K, W> Iterator for Playback<'a, K, W>
where
    K: NodeKey,
    W: Weight,
{
    type Item = Frame<'a, K, W>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tick()
    }
}
