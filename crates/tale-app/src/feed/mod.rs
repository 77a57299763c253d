//! Entry feed engine: filter state, pagination cursor, de-duplicated
//! accumulation, and the debounced search input feeding it.

mod controller;
mod debounce;
mod error;

pub use controller::{FeedController, FeedSnapshot, PAGE_SIZE};
pub use debounce::SearchDebouncer;
pub use error::FeedError;
