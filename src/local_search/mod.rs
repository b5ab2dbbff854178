//! Neighbourhood moves for improving tours.
//!
//! - [`RandomRelocate`] — Remove one interior location and reinsert it

mod relocate;

pub use relocate::{RandomRelocate, Reinsertion};
