//! Selection state for the single and multiple variants.

use crate::item::Item;

/// Which variant of the widget is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one item is selected.
    #[default]
    Single,
    /// An ordered list of distinct items is selected.
    Multiple,
}

/// The selected items, keyed by [`Item::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<Item>),
    Multiple(Vec<Item>),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl Selection {
    /// Create an empty selection for the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(None),
            SelectionMode::Multiple => Self::Multiple(Vec::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multiple(_) => SelectionMode::Multiple,
        }
    }

    /// Check if an item with this value is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.items().iter().any(|item| item.value == value)
    }

    /// Add an item. Returns true if the selection changed.
    ///
    /// Single mode replaces the current item; multiple mode appends the item
    /// unless its value is already present.
    pub fn add(&mut self, item: Item) -> bool {
        match self {
            Self::Single(current) => {
                if current.as_ref() == Some(&item) {
                    return false;
                }
                *current = Some(item);
                true
            }
            Self::Multiple(items) => {
                if items.contains(&item) {
                    return false;
                }
                items.push(item);
                true
            }
        }
    }

    /// Toggle membership of an item. Always changes the selection.
    ///
    /// Selecting an already selected value removes it. In single mode any
    /// other item is replaced.
    pub fn toggle(&mut self, item: Item) -> bool {
        if self.contains(&item.value) {
            self.remove(&item.value);
        } else {
            self.add(item);
        }
        true
    }

    /// Remove the item with this value, returning it if it was selected.
    pub fn remove(&mut self, value: &str) -> Option<Item> {
        match self {
            Self::Single(current) => {
                if current.as_ref().is_some_and(|item| item.value == value) {
                    current.take()
                } else {
                    None
                }
            }
            Self::Multiple(items) => {
                let pos = items.iter().position(|item| item.value == value)?;
                Some(items.remove(pos))
            }
        }
    }

    /// Remove the most recently added item.
    pub fn pop(&mut self) -> Option<Item> {
        match self {
            Self::Single(current) => current.take(),
            Self::Multiple(items) => items.pop(),
        }
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        match self {
            Self::Single(current) => *current = None,
            Self::Multiple(items) => items.clear(),
        }
        changed
    }

    /// Selected items in selection order.
    pub fn items(&self) -> &[Item] {
        match self {
            Self::Single(current) => current.as_slice(),
            Self::Multiple(items) => items,
        }
    }

    /// The selected item in single mode, or the first one in multiple mode.
    pub fn first(&self) -> Option<&Item> {
        self.items().first()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
