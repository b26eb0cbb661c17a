//! Time-expiring in-memory cache for raw API responses
//!
//! This module provides a concurrency-safe cache keyed by request URL that
//! stores opaque response bytes with a fixed TTL (time-to-live). A background
//! reaper task removes entries once their age reaches the TTL, and reads
//! apply the same expiry predicate, so a stale entry is never returned even
//! before the reaper has had a chance to run.

mod store;

pub use store::{Cache, CacheError};
