use crate::commands::{missing_note, summary, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteId;
use crate::store::NoteStore;
use tracing::warn;

pub fn run<S: NoteStore>(store: &mut S, ids: &[NoteId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(note) = store.get(id)? else {
            warn!(id, "delete target missing");
            result.add_message(missing_note(id));
            continue;
        };

        store.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            id,
            summary(&note)
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_note_and_keeps_order() {
        let mut fixture = StoreFixture::new().with_notes(3);
        run(&mut fixture.store, &[1]).unwrap();

        let ids: Vec<_> = fixture.store.read().unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn deleting_twice_only_warns() {
        let mut fixture = StoreFixture::new().with_notes(2);
        run(&mut fixture.store, &[0]).unwrap();
        let result = run(&mut fixture.store, &[0]).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(fixture.store.read().unwrap().len(), 1);
    }
}
