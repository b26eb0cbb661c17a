//! Cache storage and the background reaper
//!
//! The cache holds timestamped byte payloads behind a read-write lock. Every
//! operation takes the lock only for the map access itself; callers that
//! fetch from the network on a miss do so entirely outside the lock and then
//! call [`Cache::add`] with the result.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::RwLock;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::{debug, trace};

/// Errors that can occur when constructing a cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The configured TTL was zero
    #[error("Cache TTL must be greater than zero")]
    InvalidTtl,
}

/// A single cached payload with its insertion timestamp
#[derive(Debug, Clone)]
struct CacheEntry {
    /// When the entry was inserted (or last overwritten)
    created_at: Instant,
    /// The raw payload bytes, stored as-is
    value: Vec<u8>,
}

impl CacheEntry {
    /// Returns true once the entry's age has reached the TTL.
    ///
    /// Boundary condition: an entry whose age is exactly equal to the TTL is
    /// expired (`>=`, not `>`). [`Cache::get`] and the reaper share this
    /// predicate, so a payload the reaper is about to delete is never
    /// visible to readers.
    fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

type EntryMap = RwLock<HashMap<String, CacheEntry>>;

/// Concurrency-safe cache of opaque byte payloads with a fixed TTL
///
/// Cloning produces another handle to the same underlying cache; all clones
/// share the entry map and the single background reaper. The reaper sweeps
/// the map every TTL interval and stops when [`Cache::close`] is called or
/// when the last handle is dropped, so a cache never leaks its task.
///
/// Values are treated as immutable once added: `add` takes ownership of its
/// buffer and `get` returns a copy, so callers can never alias the stored
/// bytes.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Shared entry map; the reaper holds only a weak reference to it
    entries: Arc<EntryMap>,
    /// Maximum age an entry may reach before it is considered expired
    ttl: Duration,
    /// Signals the reaper to stop; dropping the last handle closes the
    /// channel, which stops the reaper as well
    shutdown: mpsc::Sender<()>,
}

impl Cache {
    /// Creates an empty cache and spawns its background reaper.
    ///
    /// The reaper runs on the current tokio runtime and wakes every `ttl`
    /// to remove entries whose age has reached `ttl` (the reap interval is
    /// deliberately tied to the TTL).
    ///
    /// # Arguments
    /// * `ttl` - How long an entry stays visible after its last write
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidTtl`] if `ttl` is zero.
    pub fn new(ttl: Duration) -> Result<Self, CacheError> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl);
        }

        let entries = Arc::new(RwLock::new(HashMap::new()));
        let (shutdown, shutdown_rx) = mpsc::channel(1);

        spawn_reaper(Arc::downgrade(&entries), ttl, shutdown_rx);

        Ok(Self {
            entries,
            ttl,
            shutdown,
        })
    }

    /// Inserts or overwrites the entry for `key`.
    ///
    /// Overwriting resets the entry's age to zero: expiry is measured from
    /// the latest write, not the first insertion. Any string is a valid key
    /// (including the empty string) and any byte sequence is a valid value
    /// (including an empty one).
    pub fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let entry = CacheEntry {
            created_at: Instant::now(),
            value,
        };
        self.entries.write().insert(key.into(), entry);
    }

    /// Returns a copy of the payload for `key` if it exists and is fresh.
    ///
    /// An entry is visible if and only if its age is strictly less than the
    /// TTL at the moment of the call. A missing or expired key is a normal
    /// outcome, not an error, and a stale read never mutates cache state —
    /// physical removal is the reaper's job.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let now = Instant::now();
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|entry| !entry.is_expired(self.ttl, now))
            .map(|entry| entry.value.clone())
    }

    /// Returns the TTL this cache was constructed with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the number of stored entries, including any that have
    /// expired but not yet been reaped.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Stops the background reaper.
    ///
    /// Idempotent, and affects every clone of this cache since they share
    /// one reaper. Entries already stored remain readable until they
    /// expire; they are simply no longer swept out of memory.
    pub fn close(&self) {
        let _ = self.shutdown.try_send(());
    }
}

/// Spawns the background task that periodically removes expired entries.
///
/// The task holds only a `Weak` reference to the entry map, so it exits on
/// its own if every cache handle is dropped without an explicit close.
fn spawn_reaper(entries: Weak<EntryMap>, ttl: Duration, mut shutdown: mpsc::Receiver<()>) {
    tokio::spawn(async move {
        // First tick lands one full interval after construction.
        let mut tick = time::interval_at(Instant::now() + ttl, ttl);
        tick.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // recv() also yields None once all cache handles are gone.
                _ = shutdown.recv() => {
                    debug!("cache reaper stopped");
                    break;
                }
                _ = tick.tick() => {
                    let Some(entries) = entries.upgrade() else {
                        break;
                    };
                    let now = Instant::now();
                    let removed = {
                        let mut map = entries.write();
                        let before = map.len();
                        map.retain(|_, entry| !entry.is_expired(ttl, now));
                        before - map.len()
                    };
                    if removed > 0 {
                        debug!(removed, "cache reaper removed expired entries");
                    } else {
                        trace!("cache reaper found no expired entries");
                    }
                }
            }
        }
    });
}
