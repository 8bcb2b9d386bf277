//! Screen state for cinema-deck
//!
//! This crate provides the fetch lifecycle used by data-driven screens:
//! the [`LoadState`] tri-state, the [`DetailLoader`] that turns one catalog
//! request into a terminal state, and [`MountedFetch`], the task that runs
//! a load for the lifetime of a mounted screen.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod detail_loader;
pub mod load_state;
pub mod mounted;

pub use detail_loader::{DetailLoader, MovieSource};
pub use load_state::{LoadPhase, LoadState, TransitionError};
pub use mounted::MountedFetch;
