//! Today's Tale application orchestration layer.
//!
//! This crate contains the feed state machine and business-logic use cases.

pub mod feed;
pub mod usecases;

pub use feed::{FeedController, FeedError, FeedSnapshot, SearchDebouncer, PAGE_SIZE};
