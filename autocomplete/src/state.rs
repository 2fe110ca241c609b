//! Transient input state: text, candidates, highlight and creation mode.

use std::collections::HashMap;

use crate::filter::{OptionFilter, filter_items};
use crate::item::Item;

/// One row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// An item from the collection.
    Existing {
        /// Index into the item collection.
        index: usize,
        /// Match score (0 for custom filters and empty input).
        score: u32,
    },
    /// The synthetic item offered when nothing matches.
    Create(Item),
}

/// Everything about the widget that is recomputed as the user types.
///
/// Invariant: `highlighted` is `None` or a valid index into `candidates`.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current text value.
    pub text: String,
    /// Cursor position in text (byte offset).
    pub text_cursor: usize,
    /// Filtered candidates, best first.
    pub candidates: Vec<Candidate>,
    /// Highlighted dropdown row.
    pub highlighted: Option<usize>,
    /// Whether the only candidate is a creation entry.
    pub creating: bool,
    /// Whether the dropdown is open.
    pub open: bool,
    /// Whether the widget has keyboard focus.
    pub focused: bool,
    /// First visible dropdown row.
    pub scroll: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Text manipulation
    // -------------------------------------------------------------------------

    /// Replace the text, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.text_cursor = self.text.len();
    }

    pub fn clear_text(&mut self) {
        self.text.clear();
        self.text_cursor = 0;
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.text_cursor, c);
        self.text_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor. Returns true if text changed.
    pub fn delete_char_before(&mut self) -> bool {
        if self.text_cursor == 0 {
            return false;
        }
        let prev = self.text[..self.text_cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.text.remove(prev);
        self.text_cursor = prev;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    pub fn delete_char_at(&mut self) -> bool {
        if self.text_cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.text_cursor);
        true
    }

    pub fn cursor_left(&mut self) {
        self.text_cursor = self.text[..self.text_cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    pub fn cursor_right(&mut self) {
        self.text_cursor = self.text[self.text_cursor..]
            .chars()
            .next()
            .map(|c| self.text_cursor + c.len_utf8())
            .unwrap_or(self.text.len());
    }

    pub fn cursor_home(&mut self) {
        self.text_cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.text_cursor = self.text.len();
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Recompute candidates for the current text.
    ///
    /// When nothing matches a non-empty text and `allow_create` is set, the
    /// candidates become a single creation entry and creation mode starts.
    /// The highlight moves to the first candidate.
    pub fn refilter(&mut self, items: &[Item], filter: Option<&OptionFilter>, allow_create: bool) {
        self.candidates = match filter {
            Some(filter) => {
                let positions: HashMap<&str, usize> = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (item.value.as_str(), index))
                    .collect();
                filter(items, &self.text)
                    .iter()
                    .filter_map(|item| positions.get(item.value.as_str()))
                    .map(|&index| Candidate::Existing { index, score: 0 })
                    .collect()
            }
            None => filter_items(items, &self.text)
                .into_iter()
                .map(|m| Candidate::Existing {
                    index: m.index,
                    score: m.score,
                })
                .collect(),
        };

        self.creating = self.candidates.is_empty() && allow_create && !self.text.is_empty();
        if self.creating {
            self.candidates.push(Candidate::Create(Item::from_text(&self.text)));
        }

        self.scroll = 0;
        self.highlighted = if self.candidates.is_empty() { None } else { Some(0) };
    }

    /// Show every item, leaving creation mode.
    pub fn reset_candidates(&mut self, items: &[Item]) {
        self.candidates = (0..items.len())
            .map(|index| Candidate::Existing { index, score: 0 })
            .collect();
        self.creating = false;
        self.scroll = 0;
        self.highlighted = if self.candidates.is_empty() { None } else { Some(0) };
    }

    // -------------------------------------------------------------------------
    // Highlight navigation
    // -------------------------------------------------------------------------

    /// Move the highlight down, wrapping from the last row to the first.
    pub fn highlight_next(&mut self) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// Move the highlight up, wrapping from the first row to the last.
    pub fn highlight_prev(&mut self) {
        let len = self.candidates.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn highlight_first(&mut self) {
        self.highlighted = if self.candidates.is_empty() { None } else { Some(0) };
    }

    pub fn highlight_last(&mut self) {
        self.highlighted = self.candidates.len().checked_sub(1);
    }

    /// Highlight a row. Out-of-range indices are ignored.
    pub fn set_highlight(&mut self, index: usize) {
        if index < self.candidates.len() {
            self.highlighted = Some(index);
        }
    }

    /// Adjust `scroll` so the highlighted row is among `visible` rows.
    pub fn ensure_visible(&mut self, visible: usize) {
        let Some(highlighted) = self.highlighted else {
            self.scroll = 0;
            return;
        };
        if visible == 0 {
            return;
        }
        if highlighted < self.scroll {
            self.scroll = highlighted;
        } else if highlighted >= self.scroll.saturating_add(visible) {
            self.scroll = highlighted + 1 - visible;
        }
        let max_scroll = self.candidates.len().saturating_sub(visible);
        self.scroll = self.scroll.min(max_scroll);
    }
}
