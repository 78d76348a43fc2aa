//! Query-time match emission: drives the finalized automaton over a phrase
//! and reports every primary and inherited output encountered. §4.5.

use std::ops::ControlFlow;

use crate::error::{Error, ResourceError, UsageError};
use crate::index::{Index, Phase};
use crate::state_id::StateId;

/// One matched keyword occurrence, reported at query time.
///
/// Borrows from the index and from nothing else, so a callback cannot
/// retain it past the call that handed it out — anything worth keeping must
/// be copied out explicitly.
#[derive(Debug, Clone, Copy)]
pub struct QueryMatch<'a, P> {
    start: usize,
    end: usize,
    payload: &'a P,
}

impl<'a, P> QueryMatch<'a, P> {
    /// The starting byte offset of the match, inclusive.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The ending byte offset of the match, exclusive.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The payload associated with the matched keyword.
    #[inline]
    pub fn payload(&self) -> &'a P {
        self.payload
    }

    /// True for a zero-width match, which can only happen when the empty
    /// keyword was inserted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<P, S: StateId> Index<P, S> {
    /// Runs a query, invoking `callback` once per match in ascending order
    /// of `end` (primary outputs before inherited outputs for matches that
    /// share an `end`, each group in insertion order).
    ///
    /// Returning [`ControlFlow::Break`] from `callback` aborts the scan
    /// immediately; the call then returns
    /// `Err(Error::Resource(ResourceError::CallbackAborted))`.
    pub fn query_with_callback(
        &self,
        phrase: &[u8],
        mut callback: impl FnMut(QueryMatch<'_, P>) -> ControlFlow<()>,
    ) -> Result<(), Error> {
        if self.phase != Phase::Finalized {
            return Err(Error::Usage(UsageError::QueryBeforeFinalize));
        }

        let root = self.arena.root_id();
        let mut current = root;

        // Position 0, before any byte is consumed, is never visited by the
        // loop below (it only emits after advancing `current`). The only
        // outputs that can live at this position are root's own primary
        // outputs (the empty keyword, if inserted) — root never carries
        // inherited outputs, since nothing fails into it from above.
        let root_state = self.arena.get(root);
        for primary in &root_state.outputs.primary {
            let m = QueryMatch {
                start: 0,
                end: 0,
                payload: &primary.payload,
            };
            if callback(m).is_break() {
                return Err(Error::Resource(ResourceError::CallbackAborted));
            }
        }

        for (j, &byte) in phrase.iter().enumerate() {
            loop {
                if let Some(next) = self.arena.get(current).goto.get(byte) {
                    current = next;
                    break;
                }
                // The root has an edge for every byte after finalize, so
                // this always terminates.
                current = self.arena.get(current).fail.unwrap_or(root);
            }

            let state = self.arena.get(current);

            for primary in &state.outputs.primary {
                let m = QueryMatch {
                    start: j + 1 - primary.length,
                    end: j + 1,
                    payload: &primary.payload,
                };
                if callback(m).is_break() {
                    return Err(Error::Resource(ResourceError::CallbackAborted));
                }
            }

            for inherited in &state.outputs.inherited {
                let owner = self.arena.get(inherited.owner);
                let payload = &owner.outputs.primary[inherited.slot as usize].payload;
                let m = QueryMatch {
                    start: j + 1 - inherited.length,
                    end: j + 1,
                    payload,
                };
                if callback(m).is_break() {
                    return Err(Error::Resource(ResourceError::CallbackAborted));
                }
            }
        }

        Ok(())
    }

    /// Convenience sink: runs [`Index::query_with_callback`], appending
    /// every match to `out` instead of invoking a caller-supplied callback.
    pub fn query_into_vec<'a>(
        &'a self,
        phrase: &[u8],
        out: &mut Vec<QueryMatch<'a, P>>,
    ) -> Result<(), Error> {
        self.query_with_callback(phrase, |m| {
            out.push(m);
            ControlFlow::Continue(())
        })
    }
}
