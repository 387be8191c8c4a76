//! The cursor history stack.
//!
//! `len()` is the number of "next" clicks since page 1. The last entry is
//! the cursor the current page was reached with; the second-to-last is the
//! cursor of the previous page.

use smol_str::SmolStr;

/// Separator between tokens in the persisted value.
pub const DELIMITER: char = ',';

/// Why a persisted value could not be turned into a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedHistory;

/// Ordered history of followed cursors, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorStack {
    cursors: Vec<SmolStr>,
}

impl CursorStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a stack from its persisted form.
    ///
    /// An empty string is the empty stack. Any empty token (`"a,,b"`, `","`)
    /// means the value was not written by `to_persisted` and is rejected.
    pub fn parse(persisted: &str) -> Result<Self, MalformedHistory> {
        if persisted.is_empty() {
            return Ok(Self::new());
        }

        let cursors = persisted
            .split(DELIMITER)
            .map(|token| {
                if token.is_empty() {
                    Err(MalformedHistory)
                } else {
                    Ok(SmolStr::new(token))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cursors })
    }

    /// The persisted form: tokens joined by `DELIMITER`.
    pub fn to_persisted(&self) -> String {
        let mut buf = [0; 4];
        let separator: &str = DELIMITER.encode_utf8(&mut buf);
        self.cursors.join(separator)
    }

    pub fn push(&mut self, cursor: impl Into<SmolStr>) {
        self.cursors.push(cursor.into());
    }

    pub fn pop(&mut self) -> Option<SmolStr> {
        self.cursors.pop()
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Cursor the current page was reached with.
    pub fn last(&self) -> Option<&SmolStr> {
        self.cursors.last()
    }

    /// Cursor of the page before the current one. `None` when that page is
    /// page 1 (or there is no previous page).
    pub fn previous(&self) -> Option<&SmolStr> {
        self.cursors.len().checked_sub(2).map(|i| &self.cursors[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.cursors.iter()
    }
}

impl<T: Into<SmolStr>> FromIterator<T> for CursorStack {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cursors: iter.into_iter().map(Into::into).collect(),
        }
    }
}
