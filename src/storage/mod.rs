pub mod config;
pub mod event_store;
pub mod kv;

pub use event_store::{EntryId, EventStore, SortedEvents, StoreError, StoredEvent, DEFAULT_KEY};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
