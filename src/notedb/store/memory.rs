use super::{next_id_after, replace_first, successor, NoteStore};
use crate::error::Result;
use crate::model::{Note, NoteId};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store as if `notes` had been read from disk.
    pub fn with_notes(notes: Vec<Note>) -> Result<Self> {
        let next_id = next_id_after(&notes)?;
        Ok(Self { notes, next_id })
    }
}

impl NoteStore for InMemoryStore {
    fn create(&mut self, mut note: Note) -> Result<NoteId> {
        let id = self.next_id;
        self.next_id = successor(id)?;
        note.id = id;
        self.notes.push(note);
        Ok(id)
    }

    fn read(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn update(&mut self, id: NoteId, note: Note) -> Result<()> {
        replace_first(&mut self.notes, id, note);
        Ok(())
    }

    fn delete(&mut self, id: NoteId) -> Result<()> {
        self.notes.retain(|note| note.id != id);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let note = Note::new(format!("Note {}", i + 1), "low", "09:00", "2024-01-01");
                self.store.create(note).unwrap();
            }
            self
        }

        pub fn with_note(mut self, text: &str, priority: &str, date: &str) -> Self {
            self.store
                .create(Note::new(text, priority, "", date))
                .unwrap();
            self
        }

        pub fn with_done_note(mut self, text: &str) -> Self {
            let mut note = Note::new(text, "low", "", "");
            note.done = true;
            self.store.create(note).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_survive_deletion() {
        let mut store = InMemoryStore::new();
        let first = store.create(Note::new("a", "low", "", "")).unwrap();
        store.delete(first).unwrap();
        let second = store.create(Note::new("b", "low", "", "")).unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn seeded_store_continues_after_max_id() {
        let mut seeded = Note::new("old", "low", "", "");
        seeded.id = 41;
        let mut store = InMemoryStore::with_notes(vec![seeded]).unwrap();

        assert_eq!(store.create(Note::new("new", "low", "", "")).unwrap(), 42);
    }

    #[test]
    fn create_fails_when_ids_run_out() {
        let mut last = Note::new("last", "low", "", "");
        last.id = NoteId::MAX - 1;
        let mut store = InMemoryStore::with_notes(vec![last]).unwrap();

        assert!(store.create(Note::new("no room", "low", "", "")).is_err());
        assert_eq!(store.read().unwrap().len(), 1);
    }

    #[test]
    fn get_uses_trait_default() {
        let mut store = InMemoryStore::new();
        let id = store.create(Note::new("a", "low", "", "")).unwrap();

        assert_eq!(store.get(id).unwrap().unwrap().text, "a");
        assert!(store.get(id + 1).unwrap().is_none());
    }
}
