//! Selectable items.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A selectable option: what the user sees (`label`) and what identifies it
/// (`value`).
///
/// Two items are equal when their values are equal, regardless of label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub value: String,
}

impl Item {
    /// Create an item from a value and a label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Build the synthetic item offered in creation mode.
    ///
    /// Label and value are both the typed text, verbatim.
    pub fn from_text(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: text.to_string(),
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// Anything that can be shown as an option in an autocomplete.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl AutocompleteItem for Country {
///     fn autocomplete_value(&self) -> String {
///         self.code.clone()
///     }
///
///     fn autocomplete_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait AutocompleteItem {
    /// Unique identifier, used for selection membership.
    fn autocomplete_value(&self) -> String;

    /// Display text, shown in the dropdown and used for filtering.
    fn autocomplete_label(&self) -> String;

    /// Convert into the widget's item type.
    fn to_item(&self) -> Item {
        Item::new(self.autocomplete_value(), self.autocomplete_label())
    }
}

impl AutocompleteItem for Item {
    fn autocomplete_value(&self) -> String {
        self.value.clone()
    }

    fn autocomplete_label(&self) -> String {
        self.label.clone()
    }

    fn to_item(&self) -> Item {
        self.clone()
    }
}

impl AutocompleteItem for String {
    fn autocomplete_value(&self) -> String {
        self.clone()
    }

    fn autocomplete_label(&self) -> String {
        self.clone()
    }
}

impl AutocompleteItem for &str {
    fn autocomplete_value(&self) -> String {
        (*self).to_string()
    }

    fn autocomplete_label(&self) -> String {
        (*self).to_string()
    }
}

// (value, label) tuples
impl<S1, S2> AutocompleteItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn autocomplete_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn autocomplete_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
