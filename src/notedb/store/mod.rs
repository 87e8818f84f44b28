//! # Storage Layer
//!
//! This module defines the storage contract for notedb. The [`NoteStore`] trait is the
//! whole capability surface callers get: create, read, update, delete.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: Production storage
//!   - All notes live in a single JSON array file
//!   - Every mutation reads the whole file and rewrites it in full
//!   - The file is created lazily on the first write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Same id allocation and no-op rules, no persistence
//!
//! - [`shared::SharedStore`]: Mutex-guarded handle around either of the above
//!   - Clones share one store; each operation runs under the lock
//!
//! ## Semantics Shared by All Stores
//!
//! - Ids are assigned by the store from a counter that only ever grows, so an id is
//!   never handed out twice, even after the note holding it is deleted.
//! - `update` and `delete` targeting an unknown id succeed without changing anything.
//!   Callers that care check existence first (see `commands::update`).
//!
//! ## Concurrency
//!
//! Stores are plain single-owner values. Two `JsonFileStore`s over the same file race:
//! each reads, mutates its own copy and overwrites, so the last writer wins and their
//! id counters can collide. Wrap one store in a `SharedStore` when several threads need it.

use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};

pub mod fs;
pub mod memory;
pub mod shared;

/// Abstract interface for note storage.
pub trait NoteStore {
    /// Store a new note, overwriting its id with a freshly allocated one.
    /// Returns the assigned id.
    fn create(&mut self, note: Note) -> Result<NoteId>;

    /// All notes, in stored order.
    fn read(&self) -> Result<Vec<Note>>;

    /// Replace the first note with `id` by `note` (keeping `id`). Unknown ids are a no-op.
    fn update(&mut self, id: NoteId, note: Note) -> Result<()>;

    /// Remove every note with `id`. Unknown ids are a no-op.
    fn delete(&mut self, id: NoteId) -> Result<()>;

    /// Look up a single note by id
    fn get(&self, id: NoteId) -> Result<Option<Note>> {
        Ok(self.read()?.into_iter().find(|note| note.id == id))
    }
}

/// First id that is free given the notes already stored.
pub(crate) fn next_id_after(notes: &[Note]) -> Result<NoteId> {
    notes.iter().try_fold(0, |next, note| {
        if note.id >= next {
            successor(note.id)
        } else {
            Ok(next)
        }
    })
}

/// The id following `id`. Fails instead of wrapping at `NoteId::MAX`.
pub(crate) fn successor(id: NoteId) -> Result<NoteId> {
    id.checked_add(1)
        .ok_or_else(|| NoteError::Store("id space exhausted".to_string()))
}

/// Replaces the first match in place. Returns whether anything matched.
pub(crate) fn replace_first(notes: &mut [Note], id: NoteId, mut note: Note) -> bool {
    note.id = id;
    match notes.iter_mut().find(|existing| existing.id == id) {
        Some(slot) => {
            *slot = note;
            true
        }
        None => false,
    }
}
