//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions; pages wrap it in a signal and
//! components read projections of it.

pub mod collections;
