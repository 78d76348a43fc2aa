//! The top-level [`Index`]: lifecycle phases, keyword insertion, and the
//! breadth-first `finalize` pass that derives failure links and flattens
//! inherited outputs. Query methods live in [`crate::query`].

use std::collections::VecDeque;

use crate::error::{Error, UsageError};
use crate::state::Arena;
use crate::state_id::StateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Building,
    Finalized,
}

/// A multi-pattern substring matcher built with the Aho–Corasick algorithm.
///
/// `P` is the caller's opaque per-keyword payload. `S` is the integer width
/// used for arena-internal state ids (`u8`/`u16`/`u32`/`u64`/`usize`); pick
/// the narrowest width that comfortably bounds the number of states an
/// index will grow to, defaulting to `usize` when in doubt.
///
/// An index starts in the `building` phase, where [`Index::insert`] is the
/// only mutator, and becomes `finalized` exactly once via [`Index::finalize`]
/// — after which it accepts queries and refuses further mutation.
pub struct Index<P, S: StateId = usize> {
    pub(crate) arena: Arena<P, S>,
    pub(crate) phase: Phase,
}

impl<P, S: StateId> Index<P, S> {
    /// Creates a new, empty index in the `building` phase.
    pub fn new() -> Self {
        log::trace!("constructing new index");
        Index {
            arena: Arena::new(),
            phase: Phase::Building,
        }
    }

    /// Returns whether [`Index::finalize`] has been called successfully.
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Finalized
    }

    /// Inserts a keyword, associating it with `payload`. §4.3.
    ///
    /// The empty keyword is accepted: it attaches a zero-length primary
    /// output to the root, which is reported at every phrase position once
    /// the index is finalized and queried.
    pub fn insert(&mut self, keyword: &[u8], payload: P) -> Result<(), Error> {
        if self.phase == Phase::Finalized {
            return Err(Error::Usage(UsageError::InsertAfterFinalize));
        }

        let mut current = self.arena.root_id();
        for &symbol in keyword {
            current = match self.arena.get(current).goto.get(symbol) {
                Some(next) => next,
                None => {
                    let next = self.arena.push_state()?;
                    self.arena.get_mut(current).goto.put(symbol, next);
                    next
                }
            };
        }

        self.arena
            .get_mut(current)
            .outputs
            .add_primary(keyword.len(), payload);
        Ok(())
    }

    /// Transitions the index to the `finalized` phase: assigns a failure
    /// link to every non-root state, flattens failure-chain outputs into
    /// each state's inherited set, and completes the root's goto table to
    /// cover all 256 byte values. §4.4.
    pub fn finalize(&mut self) -> Result<(), Error> {
        if self.phase == Phase::Finalized {
            return Err(Error::Usage(UsageError::DoubleFinalize));
        }
        log::debug!("finalizing index with {} states", self.arena.len());

        let root = self.arena.root_id();
        let mut queue = VecDeque::new();

        // Step 1: root completion and seed queue. Iterate 0..=255 starting
        // from 0 so 7-bit ASCII lands first in the root's edge list (§4.1).
        // This is the degenerate first round of the same BFS step run below
        // (root stands in for its own "parent", with the trivial failure
        // link root -> root): each depth-1 target's failure is root, and
        // root's primary outputs (e.g. the empty keyword, if inserted) are
        // merged into it the same way any other state inherits from its
        // failure target.
        for symbol in 0u16..=255 {
            let symbol = symbol as u8;
            match self.arena.get(root).goto.get(symbol) {
                Some(target) => {
                    self.arena.get_mut(target).fail = Some(root);
                    let (target_state, root_state) = self.arena.get_two_mut(target, root);
                    target_state
                        .outputs
                        .add_all_inherited_from(root, &root_state.outputs);
                    queue.push_back(target);
                }
                None => {
                    self.arena.get_mut(root).goto.put(symbol, root);
                }
            }
        }

        // Step 2: BFS. By the time a state `u` is dequeued as some `r`, its
        // parent `r`'s failure link and inherited outputs are already
        // fully settled — the failure target for `u` always sits at a
        // strictly shallower depth, so it is always a distinct arena slot.
        while let Some(r) = queue.pop_front() {
            let edges: Vec<(u8, S)> = self.arena.get(r).goto.iter().collect();
            for (symbol, u) in edges {
                queue.push_back(u);

                let mut f = self
                    .arena
                    .get(r)
                    .fail
                    .expect("non-root states receive a failure link before their children are visited");
                let target = loop {
                    if let Some(t) = self.arena.get(f).goto.get(symbol) {
                        break t;
                    }
                    f = self
                        .arena
                        .get(f)
                        .fail
                        .expect("root has a goto edge for every symbol, so this loop ends first");
                };
                self.arena.get_mut(u).fail = Some(target);

                let (u_state, target_state) = self.arena.get_two_mut(u, target);
                u_state
                    .outputs
                    .add_all_inherited_from(target, &target_state.outputs);
            }
        }

        self.phase = Phase::Finalized;
        log::debug!("finalize complete");
        Ok(())
    }

    /// Consumes the index, invoking `release` once per primary output's
    /// payload, in arena order. Inherited outputs alias and are never
    /// passed to `release` — they carry no payload of their own to free.
    ///
    /// Ordinary `drop` (letting the index fall out of scope) performs the
    /// memory-safety half of teardown on its own via each `P`'s `Drop`;
    /// `destroy` exists for callers that need the release hook invoked
    /// explicitly and observably (e.g. a host-language binding freeing
    /// foreign objects it handed in as payloads).
    pub fn destroy(self, mut release: impl FnMut(P)) {
        let mut released = 0usize;
        for state in self.arena {
            for primary in state.outputs.primary {
                release(primary.payload);
                released += 1;
            }
        }
        log::debug!("destroyed index, released {} payloads", released);
    }
}

impl<P, S: StateId> Default for Index<P, S> {
    fn default() -> Self {
        Self::new()
    }
}
