//! Commonly used imports
//!
//! Use `use sequencer::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Enumerator, Sequence, SequenceError};

// Sources
pub use crate::fetch::{fetch, fetch_enumerator, fetch_range, fetch_slice, from_fn};
