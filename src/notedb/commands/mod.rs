use crate::config::NotedbConfig;
use crate::model::{Note, NoteId};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod toggle;
pub mod update;
pub mod view;

/// Where notedb keeps its files.
#[derive(Debug, Clone)]
pub struct NotesPaths {
    /// Directory holding `config.json`
    pub home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub config: Option<NotedbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: NotedbConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field-wise edit of an existing note. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub text: Option<String>,
    pub priority: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
    pub done: Option<bool>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.priority.is_none()
            && self.time.is_none()
            && self.date.is_none()
            && self.done.is_none()
    }

    pub fn apply(&self, note: &Note) -> Note {
        Note {
            id: note.id,
            text: self.text.clone().unwrap_or_else(|| note.text.clone()),
            priority: self.priority.clone().unwrap_or_else(|| note.priority.clone()),
            time: self.time.clone().unwrap_or_else(|| note.time.clone()),
            date: self.date.clone().unwrap_or_else(|| note.date.clone()),
            done: self.done.unwrap_or(note.done),
        }
    }
}

pub(crate) fn missing_note(id: NoteId) -> CmdMessage {
    CmdMessage::warning(format!("No note with id {}", id))
}

/// Shortened note text for messages
pub(crate) fn summary(note: &Note) -> String {
    const MAX_CHARS: usize = 40;
    let first_line = note.text.lines().next().unwrap_or_default();
    if first_line.chars().count() > MAX_CHARS {
        let cut: String = first_line.chars().take(MAX_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        first_line.to_string()
    }
}
