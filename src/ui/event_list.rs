use crate::storage::{EntryId, EventStore};

pub const EMPTY_PLACEHOLDER: &str = "No events scheduled yet. Add your first event below!";

#[derive(Debug, Clone, PartialEq)]
pub enum EventListView {
    Placeholder(&'static str),
    Rows(Vec<EventRow>),
}

/// One line of the list. Removal goes through `id`, never the row position.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub id: EntryId,
    pub date: String,
    pub text: String,
}

impl EventListView {
    pub fn rows(&self) -> &[EventRow] {
        match self {
            EventListView::Placeholder(_) => &[],
            EventListView::Rows(rows) => rows,
        }
    }

    pub fn row_id(&self, position: usize) -> Option<EntryId> {
        self.rows().get(position).map(|row| row.id)
    }

    pub fn render_text(&self) -> String {
        match self {
            EventListView::Placeholder(message) => message.to_string(),
            EventListView::Rows(rows) => rows
                .iter()
                .map(|row| format!("{}: {}", row.date, row.text))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

pub fn build(store: &EventStore) -> EventListView {
    if store.is_empty() {
        return EventListView::Placeholder(EMPTY_PLACEHOLDER);
    }

    EventListView::Rows(
        store
            .sorted_by_date()
            .iter()
            .map(|entry| EventRow {
                id: entry.id,
                date: entry.event.date.clone(),
                text: entry.event.text.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Event;
    use crate::storage::{MemoryStore, DEFAULT_KEY};

    fn empty_store() -> EventStore {
        EventStore::load(Box::new(MemoryStore::new()), DEFAULT_KEY).unwrap()
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let view = build(&empty_store());

        assert_eq!(view, EventListView::Placeholder(EMPTY_PLACEHOLDER));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn rows_follow_chronological_order() {
        let mut store = empty_store();
        store.add(Event::new("03/01/2024", "A")).unwrap();
        store.add(Event::new("01/01/2024", "B")).unwrap();

        let view = build(&store);

        assert_eq!(view.render_text(), "01/01/2024: B\n03/01/2024: A");
    }

    #[test]
    fn row_ids_resolve_to_backing_entries() {
        let mut store = empty_store();
        let a = store.add(Event::new("03/01/2024", "A")).unwrap();
        let b = store.add(Event::new("01/01/2024", "B")).unwrap();

        let view = build(&store);

        assert_eq!(view.row_id(0), Some(b));
        assert_eq!(view.row_id(1), Some(a));
        assert_eq!(view.row_id(2), None);
    }
}
