//! A multi-pattern substring matching library built on the Aho–Corasick
//! algorithm.
//!
//! Given a set of byte-string keywords, each carrying an opaque
//! caller-supplied payload, an [`Index`] builds a trie augmented with a
//! failure function and per-state output sets, then scans an input phrase
//! once to report every occurrence of every keyword, its payload, and the
//! exact byte span where it occurred.
//!
//! The lifecycle has three phases: [`Index::insert`] keywords while
//! `building`, [`Index::finalize`] once, then [`Index::query_with_callback`]
//! or [`Index::query_into_vec`] any number of times. The machine retains its
//! failure function rather than compiling down to a deterministic automaton
//! — there is no DFA here, and no incremental removal or un-finalize.
//!
//! The alphabet is raw 8-bit bytes; there is no Unicode awareness or
//! normalization, and embedded zero bytes are ordinary symbols in both
//! keywords and phrases.

mod error;
mod goto;
mod index;
mod output;
mod query;
mod state;
mod state_id;

pub use error::{Error, ResourceError, UsageError};
pub use index::Index;
pub use query::QueryMatch;
pub use state_id::StateId;
