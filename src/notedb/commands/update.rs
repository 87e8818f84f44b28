use crate::commands::{missing_note, summary, CmdMessage, CmdResult, NotePatch};
use crate::error::{NoteError, Result};
use crate::model::NoteId;
use crate::store::NoteStore;
use tracing::warn;

/// Applies `patch` to the note with `id`.
///
/// The store treats unknown ids as a silent no-op; here the lookup happens first so the
/// caller gets a warning instead, and the store is left untouched.
pub fn run<S: NoteStore>(store: &mut S, id: NoteId, patch: &NotePatch) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
        return Ok(result);
    }
    if matches!(&patch.text, Some(text) if text.trim().is_empty()) {
        return Err(NoteError::Api("Note text cannot be empty".into()));
    }

    let Some(current) = store.get(id)? else {
        warn!(id, "update target missing");
        result.add_message(missing_note(id));
        return Ok(result);
    };

    let updated = patch.apply(&current);
    store.update(id, updated.clone())?;

    result.add_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        id,
        summary(&updated)
    )));
    Ok(result.with_affected_notes(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn patches_only_given_fields() {
        let mut fixture = StoreFixture::new().with_note("draft", "low", "2024-01-01");
        let patch = NotePatch {
            priority: Some("high".into()),
            ..Default::default()
        };

        run(&mut fixture.store, 0, &patch).unwrap();

        let note = fixture.store.get(0).unwrap().unwrap();
        assert_eq!(note.priority, "high");
        assert_eq!(note.text, "draft");
        assert_eq!(note.date, "2024-01-01");
    }

    #[test]
    fn missing_id_warns_and_changes_nothing() {
        let mut fixture = StoreFixture::new().with_notes(2);
        let before = fixture.store.read().unwrap();
        let patch = NotePatch {
            text: Some("x".into()),
            ..Default::default()
        };

        let result = run(&mut fixture.store, 9, &patch).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(fixture.store.read().unwrap(), before);
    }

    #[test]
    fn rejects_blank_text() {
        let mut fixture = StoreFixture::new().with_notes(1);
        let patch = NotePatch {
            text: Some(" ".into()),
            ..Default::default()
        };

        assert!(run(&mut fixture.store, 0, &patch).is_err());
    }

    #[test]
    fn empty_patch_is_reported() {
        let mut fixture = StoreFixture::new().with_notes(1);
        let result = run(&mut fixture.store, 0, &NotePatch::default()).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.affected_notes.is_empty());
    }
}
