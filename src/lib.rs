//! # Sequencer: Lazy Pull-Based Sequences
//!
//! Build data-transformation pipelines that pull one element at a time, with
//! no intermediate collections.
//!
//! ## Core Types
//!
//! - **[`Sequence<T>`]**: A lazy, shared handle around one pull function
//! - **[`Enumerator<T>`]**: The capability a custom source implements to feed a sequence
//!
//! ## Key Features
//!
//! - **Lazy**: Nothing runs until `perform()` or `combine()` drives the pipeline
//! - **Fused**: Each pull advances the whole chain by exactly one element
//! - **Composable**: Chain `.choose()`, `.transform()` and `.limit()` in any order
//!
//! ## Example
//!
//! ```
//! use sequencer::prelude::*;
//!
//! let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! let odd_squares = fetch_slice(&numbers)
//!     .choose(|n| n % 2 == 1)
//!     .transform(|n| n * n);
//!
//! assert_eq!(odd_squares.combine(0, |acc, n| acc + n), 165);
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`fetch_range(iter)`](fetch_range) - Walk a bounded range
//! - [`fetch(container)`](fetch) - Walk anything that is `IntoIterator`
//! - [`fetch_slice(slice)`](fetch_slice) - Copy elements out of a borrowed slice
//! - [`fetch_enumerator(&mut source)`](fetch_enumerator) - Forward pulls to a capability object
//!
//! **Driving:**
//! - [`Sequence::perform`] - Run an action for every element
//! - [`Sequence::combine`] - Fold every element into one value

pub mod combinators;
mod enumerator;
mod error;
pub mod fetch;
pub mod prelude;
mod sequence;
mod terminal;

pub use enumerator::*;
pub use error::*;
pub use fetch::{fetch, fetch_enumerator, fetch_range, fetch_slice, from_fn};
pub use sequence::*;
