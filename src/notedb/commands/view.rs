use crate::commands::{missing_note, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;

pub fn run<S: NoteStore>(store: &S, ids: &[NoteId]) -> Result<CmdResult> {
    let notes = store.read()?;
    let mut result = CmdResult::default();

    for id in ids {
        match notes.iter().find(|note| note.id == *id) {
            Some(note) => result.listed_notes.push(note.clone()),
            None => result.add_message(missing_note(*id)),
        }
    }

    Ok(result)
}
