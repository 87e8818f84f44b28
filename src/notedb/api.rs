//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every notedb operation, whatever the UI.
//!
//! The facade dispatches to the matching command and returns `Result<CmdResult>`.
//! It does no business logic (that lives in `commands/*.rs`) and no presentation.
//!
//! ## Generic Over NoteStore
//!
//! `NotesApi<S: NoteStore>` is generic over the storage backend:
//! - Production: `NotesApi<JsonFileStore>`
//! - Testing: `NotesApi<InMemoryStore>`
//! - Shared between threads: `NotesApi<SharedStore<JsonFileStore>>`

use crate::commands;
use crate::error::Result;
use crate::model::{Note, NoteId};
use crate::store::NoteStore;

/// The main API facade for notedb operations.
pub struct NotesApi<S: NoteStore> {
    store: S,
    paths: commands::NotesPaths,
}

impl<S: NoteStore> NotesApi<S> {
    pub fn new(store: S, paths: commands::NotesPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_note(&mut self, note: Note) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, note)
    }

    pub fn list_notes(&self, filter: NoteFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view_notes(&self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, ids)
    }

    pub fn update_note(&mut self, id: NoteId, patch: &NotePatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn complete_notes(&mut self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::toggle::mark_done(&mut self.store, ids)
    }

    pub fn reopen_notes(&mut self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::toggle::mark_undone(&mut self.store, ids)
    }

    pub fn delete_notes(&mut self, ids: &[NoteId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::NoteFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel, NotePatch, NotesPaths};
