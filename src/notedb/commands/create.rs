use crate::commands::{summary, CmdMessage, CmdResult};
use crate::error::{NoteError, Result};
use crate::model::Note;
use crate::store::NoteStore;
use tracing::debug;

pub fn run<S: NoteStore>(store: &mut S, mut note: Note) -> Result<CmdResult> {
    if note.text.trim().is_empty() {
        return Err(NoteError::Api("Note text cannot be empty".into()));
    }

    note.id = store.create(note.clone())?;
    debug!(id = note.id, "note added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note added ({}): {}",
        note.id,
        summary(&note)
    )));
    Ok(result.with_affected_notes(vec![note]))
}
