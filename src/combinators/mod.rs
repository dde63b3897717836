//! Combinators that wrap one sequence in another
//!
//! Each combinator is a capability object holding its upstream handle; the
//! [`Sequence`](crate::Sequence) methods of the same name box it into a new
//! sequence.

mod choose;
mod limit;
mod transform;

pub use choose::{Choose, TryChoose, choose, try_choose};
pub use limit::{Limit, limit};
pub use transform::{Transform, transform};
