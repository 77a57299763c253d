//! Infrastructure adapters for Today's Tale.
//!
//! The production entry store is a remote service; this crate provides the
//! in-process reference adapter used by tests and local development, plus
//! the system clock.

pub mod store;
pub mod time;

pub use store::InMemoryEntryStore;
pub use time::SystemClock;
