//! States and the arena that owns them.
//!
//! The automaton is inherently cyclic (failure links point backward, and a
//! finalized root has self-edges), which rules out a parent-owns-child tree.
//! States instead live in one flat, growable arena and are referred to by
//! stable [`StateId`] indices rather than pointers (§9). This makes teardown
//! a single `Vec` drop and turns "two states, two mutable borrows" into an
//! ordinary split-at-mut rather than an unsafe aliasing problem.

use crate::error::ResourceError;
use crate::goto::GotoTable;
use crate::output::OutputSet;
use crate::state_id::{usize_to_state_id, StateId};

pub(crate) struct State<P, S> {
    pub(crate) goto: GotoTable<S>,
    pub(crate) outputs: OutputSet<P, S>,
    /// `None` only before finalize has visited this state; every non-root
    /// state is visited during finalize's BFS. The root's failure link is
    /// never read, so it is left `None` even after finalize.
    pub(crate) fail: Option<S>,
}

impl<P, S: StateId> State<P, S> {
    fn new() -> Self {
        State {
            goto: GotoTable::new(),
            outputs: OutputSet::default(),
            fail: None,
        }
    }
}

pub(crate) struct Arena<P, S> {
    states: Vec<State<P, S>>,
}

impl<P, S: StateId> Arena<P, S> {
    pub(crate) fn new() -> Self {
        Arena {
            states: vec![State::new()],
        }
    }

    #[inline]
    pub(crate) fn root_id(&self) -> S {
        S::from_usize(0)
    }

    #[inline]
    pub(crate) fn get(&self, id: S) -> &State<P, S> {
        &self.states[id.to_usize()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: S) -> &mut State<P, S> {
        &mut self.states[id.to_usize()]
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn push_state(&mut self) -> Result<S, ResourceError> {
        let id = usize_to_state_id(self.states.len()).ok_or_else(|| {
            log::debug!(
                "state arena exhausted at {} states for a {}-bit state id",
                self.states.len(),
                std::mem::size_of::<S>() * 8,
            );
            ResourceError::ArenaExhausted
        })?;
        self.states.push(State::new());
        let len = self.states.len();
        let max = S::max_id();
        if max < usize::MAX && (len == max / 2 || len == max - max / 8) {
            log::debug!(
                "index arena at {} of {} addressable states for its state id width",
                len,
                max
            );
        }
        Ok(id)
    }

    /// Safe split-borrow of two distinct states, grounded on the teacher's
    /// `get_two_mut` free function. Panics if `i == j`.
    pub(crate) fn get_two_mut(&mut self, i: S, j: S) -> (&mut State<P, S>, &mut State<P, S>) {
        let (i, j) = (i.to_usize(), j.to_usize());
        assert!(i != j, "{} must not equal {}", i, j);
        if i < j {
            let (before, after) = self.states.split_at_mut(j);
            (&mut before[i], &mut after[0])
        } else {
            let (before, after) = self.states.split_at_mut(i);
            (&mut after[0], &mut before[j])
        }
    }
}

impl<P, S: StateId> IntoIterator for Arena<P, S> {
    type Item = State<P, S>;
    type IntoIter = std::vec::IntoIter<State<P, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}
