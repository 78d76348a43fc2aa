//! Per-state goto table: a byte-keyed map to a successor state.
//!
//! Kept as an unordered linear list scanned on lookup (§4.1 of the design):
//! keywords are typically short and branching per state is low, so a small
//! `Vec` beats a tree or hash map on cache behavior for the common case.

use crate::state_id::StateId;

#[derive(Debug, Clone)]
pub(crate) struct GotoTable<S>(Vec<(u8, S)>);

impl<S: StateId> GotoTable<S> {
    pub(crate) fn new() -> Self {
        GotoTable(Vec::new())
    }

    #[inline]
    pub(crate) fn get(&self, symbol: u8) -> Option<S> {
        self.0
            .iter()
            .find(|&&(b, _)| b == symbol)
            .map(|&(_, s)| s)
    }

    #[inline]
    pub(crate) fn has(&self, symbol: u8) -> bool {
        self.get(symbol).is_some()
    }

    /// Installs an edge. Callers must guarantee no prior edge exists for
    /// `symbol`, except finalize's root-completion pass.
    pub(crate) fn put(&mut self, symbol: u8, state: S) {
        self.0.push((symbol, state));
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, S)> + '_ {
        self.0.iter().copied()
    }
}
