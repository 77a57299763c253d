//! Ports (trait interfaces) the domain depends on.
//!
//! Adapters live outside this crate; the domain only sees these contracts.

mod change_feed;
mod clock;
mod entry_store;

pub use change_feed::{EntryChange, EntryChangeFeedPort};
pub use clock::ClockPort;
pub use entry_store::EntryStorePort;
