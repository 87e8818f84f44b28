use super::NoteStore;
use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle that serializes access to one underlying store.
///
/// Every operation holds the lock across its whole read-modify-write, so clones handed
/// to different threads never lose each other's updates or allocate the same id.
/// This only covers callers in one process; other processes writing the same file
/// are not excluded.
#[derive(Debug)]
pub struct SharedStore<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: NoteStore> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        self.inner
            .lock()
            .map_err(|_| NoteError::Store("note store lock poisoned".to_string()))
    }
}

impl<S: NoteStore> NoteStore for SharedStore<S> {
    fn create(&mut self, note: Note) -> Result<NoteId> {
        self.lock()?.create(note)
    }

    fn read(&self) -> Result<Vec<Note>> {
        self.lock()?.read()
    }

    fn update(&mut self, id: NoteId, note: Note) -> Result<()> {
        self.lock()?.update(id, note)
    }

    fn delete(&mut self, id: NoteId) -> Result<()> {
        self.lock()?.delete(id)
    }

    fn get(&self, id: NoteId) -> Result<Option<Note>> {
        self.lock()?.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fs::JsonFileStore;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;
    use std::thread;
    use tempfile::TempDir;

    #[test]
    fn clones_share_state() {
        let mut a = SharedStore::new(InMemoryStore::new());
        let b = a.clone();

        a.create(Note::new("x", "low", "", "")).unwrap();
        assert_eq!(b.read().unwrap().len(), 1);
    }

    #[test]
    fn concurrent_creates_keep_every_note() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("notes.json")).unwrap();
        let shared = SharedStore::new(store);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let mut handle = shared.clone();
                thread::spawn(move || {
                    (0..5)
                        .map(|i| {
                            handle
                                .create(Note::new(format!("{}-{}", t, i), "low", "", ""))
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<NoteId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let unique: HashSet<_> = ids.iter().copied().collect();

        assert_eq!(ids.len(), 40);
        assert_eq!(unique.len(), 40);
        assert_eq!(shared.read().unwrap().len(), 40);
    }
}
