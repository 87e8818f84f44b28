use crate::commands::{missing_note, summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;

pub fn mark_done<S: NoteStore>(store: &mut S, ids: &[NoteId]) -> Result<CmdResult> {
    set_done(store, ids, true)
}

pub fn mark_undone<S: NoteStore>(store: &mut S, ids: &[NoteId]) -> Result<CmdResult> {
    set_done(store, ids, false)
}

fn set_done<S: NoteStore>(store: &mut S, ids: &[NoteId], done: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(mut note) = store.get(id)? else {
            result.add_message(missing_note(id));
            continue;
        };
        if note.done == done {
            result.add_message(CmdMessage::info(format!(
                "Note already {} ({}): {}",
                if done { "done" } else { "open" },
                id,
                summary(&note)
            )));
            continue;
        }

        note.done = done;
        store.update(id, note.clone())?;

        let verb = if done { "completed" } else { "reopened" };
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb,
            id,
            summary(&note)
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
