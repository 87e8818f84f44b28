//! Board listing.
//!
//! Open notes come first, highest priority on top and earliest date first within a
//! priority. Notes without a parseable date sink below dated ones. Completed notes
//! follow in stored order.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteFilter {
    #[default]
    All,
    Active,
    Done,
}

impl NoteFilter {
    fn accepts(self, note: &Note) -> bool {
        match self {
            NoteFilter::All => true,
            NoteFilter::Active => !note.done,
            NoteFilter::Done => note.done,
        }
    }
}

pub fn run<S: NoteStore>(store: &S, filter: NoteFilter) -> Result<CmdResult> {
    let (mut active, completed): (Vec<Note>, Vec<Note>) = store
        .read()?
        .into_iter()
        .filter(|note| filter.accepts(note))
        .partition(|note| !note.done);

    // Stable sort keeps stored order among equal keys.
    active.sort_by(board_order);
    active.extend(completed);

    Ok(CmdResult::default().with_listed_notes(active))
}

fn board_order(a: &Note, b: &Note) -> Ordering {
    b.priority_rank()
        .cmp(&a.priority_rank())
        .then_with(|| match (a.parsed_date(), b.parsed_date()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
