use super::{next_id_after, replace_first, successor, NoteStore};
use crate::error::{NoteError, Result};
use crate::model::{Note, NoteId};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Note store backed by one JSON array file.
///
/// The file is the only source of truth: nothing is cached between calls except the
/// id counter, which is computed once in [`JsonFileStore::open`].
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    next_id: NoteId,
}

impl JsonFileStore {
    /// Opens a store over `path`. A missing file is an empty store and is not created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let notes = load_notes(&path)?;
        let next_id = next_id_after(&notes)?;
        debug!(path = %path.display(), notes = notes.len(), next_id, "opened note store");
        Ok(Self { path, next_id })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        save_notes(&self.path, notes)
    }
}

impl NoteStore for JsonFileStore {
    fn create(&mut self, mut note: Note) -> Result<NoteId> {
        let mut notes = self.read()?;

        // Allocated before the write: a failed save still burns the id.
        let id = self.next_id;
        self.next_id = successor(id)?;

        note.id = id;
        notes.push(note);
        self.save(&notes)?;
        debug!(id, "created note");
        Ok(id)
    }

    fn read(&self) -> Result<Vec<Note>> {
        load_notes(&self.path)
    }

    fn update(&mut self, id: NoteId, note: Note) -> Result<()> {
        let mut notes = self.read()?;
        if !replace_first(&mut notes, id, note) {
            debug!(id, "update matched no note");
        }
        self.save(&notes)
    }

    fn delete(&mut self, id: NoteId) -> Result<()> {
        let notes = self.read()?;
        let before = notes.len();
        let remaining: Vec<Note> = notes.into_iter().filter(|note| note.id != id).collect();
        debug!(id, removed = before - remaining.len(), "deleted note");
        self.save(&remaining)
    }
}

fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(NoteError::Io(err)),
    };
    // Older writers stored `null` once the last note was gone.
    let notes: Option<Vec<Note>> =
        serde_json::from_str(&content).map_err(NoteError::Serialization)?;
    Ok(notes.unwrap_or_default())
}

fn save_notes(path: &Path, notes: &[Note]) -> Result<()> {
    let mut content = serde_json::to_string_pretty(notes).map_err(NoteError::Serialization)?;
    content.push('\n');
    replace_file(path, &content)?;
    debug!(path = %path.display(), notes = notes.len(), "wrote note file");
    Ok(())
}

/// Replaces `path` with `content` through a temporary sibling and a rename.
///
/// Creates missing parent directories. The temporary file never outlives a failure.
pub(crate) fn replace_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(NoteError::Io)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| NoteError::Store(format!("Not a file path: {}", path.display())))?
        .to_string_lossy();
    let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    let written = fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_file);
        return Err(NoteError::Io(err));
    }
    Ok(())
}
