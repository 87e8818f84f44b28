use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type NoteId = i64;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single persisted note.
///
/// Field names are part of the on-disk format and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub priority: String,
    pub time: String,
    pub date: String,
    pub done: bool,
}

impl Note {
    /// Builds an open note. The id is a placeholder; stores assign the real one.
    pub fn new(
        text: impl Into<String>,
        priority: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            text: text.into(),
            priority: priority.into(),
            time: time.into(),
            date: date.into(),
            done: false,
        }
    }

    /// Sort weight of the free-form priority: high > medium > low > anything else.
    pub fn priority_rank(&self) -> u8 {
        let normalized = self
            .priority
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .trim()
            .to_lowercase();
        match normalized.as_str() {
            "high" => 3,
            "medium" => 2,
            "low" => 1,
            _ => 0,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }
}
