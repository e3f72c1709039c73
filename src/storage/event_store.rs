use std::cmp::Ordering;

use thiserror::Error;
use uuid::Uuid;

use crate::calendar::Event;
use crate::storage::kv::KeyValueStore;

pub const DEFAULT_KEY: &str = "events";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Backend(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("No event at position {index} (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Identity of a stored event for the lifetime of the process. Never
/// persisted; a reload hands out fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredEvent {
    pub id: EntryId,
    pub event: Event,
}

/// Ordered list of events mirrored to a key-value store.
///
/// Every mutation writes the whole list back before returning. When the write
/// fails the in-memory list is restored, so memory and storage never diverge.
pub struct EventStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    entries: Vec<StoredEvent>,
}

impl EventStore {
    pub fn load(backend: Box<dyn KeyValueStore>, key: &str) -> Result<Self, StoreError> {
        let payload = backend.get(key)?;
        let events = payload.as_deref().map(decode_payload).unwrap_or_default();
        tracing::info!("Loaded {} events from '{}'", events.len(), key);

        Ok(Self {
            backend,
            key: key.to_string(),
            entries: events
                .into_iter()
                .map(|event| StoredEvent { id: EntryId::fresh(), event })
                .collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StoredEvent> {
        self.entries.get(index)
    }

    pub fn find(&self, id: EntryId) -> Option<&StoredEvent> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Insertion order, which is also the persisted order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredEvent> {
        self.entries.iter()
    }

    pub fn events_on<'a>(&'a self, date_key: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.entries
            .iter()
            .map(|entry| &entry.event)
            .filter(move |event| event.date == date_key)
    }

    pub fn has_events_on(&self, date_key: &str) -> bool {
        self.events_on(date_key).next().is_some()
    }

    pub fn add(&mut self, event: Event) -> Result<EntryId, StoreError> {
        let id = EntryId::fresh();
        self.entries.push(StoredEvent { id, event });
        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }
        tracing::debug!("Added event, store now holds {}", self.entries.len());
        Ok(id)
    }

    /// Removes the event at `index` in insertion order.
    ///
    /// An out-of-range index is a caller bug: it panics in debug builds and
    /// returns `IndexOutOfRange` otherwise.
    pub fn remove_at(&mut self, index: usize) -> Result<Event, StoreError> {
        let len = self.entries.len();
        debug_assert!(index < len, "remove_at({index}) on a store of {len} events");
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.entries.remove(index);
        if let Err(e) = self.persist() {
            self.entries.insert(index, removed);
            return Err(e);
        }
        Ok(removed.event)
    }

    pub fn remove(&mut self, id: EntryId) -> Result<Option<Event>, StoreError> {
        match self.position(id) {
            Some(index) => self.remove_at(index).map(Some),
            None => {
                tracing::warn!("Remove requested for unknown entry {:?}", id);
                Ok(None)
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        let previous = std::mem::take(&mut self.entries);
        if let Err(e) = self.persist() {
            self.entries = previous;
            return Err(e);
        }
        tracing::info!("Cleared {} events", previous.len());
        Ok(())
    }

    pub fn sorted_by_date(&self) -> SortedEvents<'_> {
        let mut order: Vec<&StoredEvent> = self.entries.iter().collect();
        order.sort_by(|a, b| compare_dates(&a.event, &b.event));
        SortedEvents { order }
    }

    /// Serialized form exactly as written to the backend.
    pub fn to_payload(&self) -> Result<String, StoreError> {
        let events: Vec<&Event> = self.entries.iter().map(|entry| &entry.event).collect();
        Ok(serde_json::to_string(&events)?)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let payload = self.to_payload()?;
        self.backend.set(&self.key, &payload)?;
        Ok(())
    }
}

/// Chronological view over a store. Borrowing the store keeps it fixed while
/// the view is alive, and `iter` can be called any number of times.
pub struct SortedEvents<'a> {
    order: Vec<&'a StoredEvent>,
}

impl<'a> SortedEvents<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a StoredEvent> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> IntoIterator for SortedEvents<'a> {
    type Item = &'a StoredEvent;
    type IntoIter = std::vec::IntoIter<&'a StoredEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

// Unparseable dates go after every real date; `sort_by` keeps ties stable.
fn compare_dates(a: &Event, b: &Event) -> Ordering {
    match (a.parsed_date(), b.parsed_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn decode_payload(payload: &str) -> Vec<Event> {
    let items = match serde_json::from_str::<serde_json::Value>(payload) {
        Ok(serde_json::Value::Array(items)) => items,
        Ok(serde_json::Value::Null) => return Vec::new(),
        Ok(other) => {
            tracing::warn!("Stored events are not a list ({}), starting empty", other);
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Stored events could not be parsed, starting empty: {}", e);
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Event>(item.clone()) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Skipping stored entry {}: {}", item, e);
                None
            }
        })
        .collect()
}
