//! Output sets attached to each state.
//!
//! A [`PrimaryOutput`] owns the payload a keyword was inserted with. An
//! [`InheritedOutput`] never owns a payload — it is a reference descriptor
//! (owning state id + slot within that state's primary list) installed by
//! `finalize` so the query loop can read every failure-chain output without
//! walking the chain at match time (§3, §4.2).

use crate::state_id::StateId;

#[derive(Debug)]
pub(crate) struct PrimaryOutput<P> {
    pub(crate) length: usize,
    pub(crate) payload: P,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct InheritedOutput<S> {
    pub(crate) length: usize,
    pub(crate) owner: S,
    pub(crate) slot: u32,
}

#[derive(Debug)]
pub(crate) struct OutputSet<P, S> {
    pub(crate) primary: Vec<PrimaryOutput<P>>,
    pub(crate) inherited: Vec<InheritedOutput<S>>,
}

impl<P, S> Default for OutputSet<P, S> {
    fn default() -> Self {
        OutputSet {
            primary: Vec::new(),
            inherited: Vec::new(),
        }
    }
}

impl<P, S: StateId> OutputSet<P, S> {
    pub(crate) fn add_primary(&mut self, length: usize, payload: P) {
        self.primary.push(PrimaryOutput { length, payload });
    }

    /// Copies `source`'s primary outputs in as reference descriptors (owner
    /// = `source_id`), then copies `source`'s own inherited descriptors
    /// through unchanged. The two-step merge is what flattens the whole
    /// suffix-link chain's outputs into one set (§4.4).
    pub(crate) fn add_all_inherited_from(&mut self, source_id: S, source: &OutputSet<P, S>) {
        self.inherited.reserve(source.primary.len() + source.inherited.len());
        for (slot, out) in source.primary.iter().enumerate() {
            self.inherited.push(InheritedOutput {
                length: out.length,
                owner: source_id,
                slot: slot as u32,
            });
        }
        self.inherited.extend_from_slice(&source.inherited);
    }
}
