//! The component contract: items, text, renderers, callbacks and styles.

use std::fmt;
use std::sync::Arc;

use crate::filter::OptionFilter;
use crate::item::{AutocompleteItem, Item};
use crate::selection::Selection;
use crate::style::StyleProps;

/// Renders an existing item as a dropdown row.
pub type ItemRenderer = Arc<dyn Fn(&Item) -> String + Send + Sync>;

/// Renders a row from the input text (creation entry, empty state).
pub type TextRenderer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Called with the synthetic item when the user creates one.
pub type CreateItemHandler = Arc<dyn Fn(&Item) + Send + Sync>;

/// Called with the new selection whenever it changes.
pub type SelectionChangeHandler = Arc<dyn Fn(&Selection) + Send + Sync>;

/// Default number of dropdown rows shown at once.
pub const DEFAULT_MAX_VISIBLE_ITEMS: usize = 8;

/// Properties of an autocomplete widget.
///
/// # Example
///
/// ```ignore
/// let props = AutocompleteProps::new()
///     .label("Choose preferred work locations")
///     .placeholder("Type a Country")
///     .items(countries)
///     .item_renderer(|item| format!("{} ({})", item.label, item.value))
///     .on_selection_change(|selection| log::info!("{} selected", selection.len()));
/// ```
#[derive(Clone)]
pub struct AutocompleteProps {
    pub items: Vec<Item>,
    pub placeholder: String,
    pub label: String,
    pub filter: Option<OptionFilter>,
    pub item_renderer: Option<ItemRenderer>,
    pub create_item_renderer: Option<TextRenderer>,
    pub empty_state: Option<TextRenderer>,
    pub styles: StyleProps,
    pub hide_toggle_button: bool,
    pub disable_create_item: bool,
    pub max_visible_items: usize,
    pub on_create_item: Option<CreateItemHandler>,
    pub on_selection_change: Option<SelectionChangeHandler>,
}

impl Default for AutocompleteProps {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            placeholder: String::new(),
            label: String::new(),
            filter: None,
            item_renderer: None,
            create_item_renderer: None,
            empty_state: None,
            styles: StyleProps::default(),
            hide_toggle_button: false,
            disable_create_item: false,
            max_visible_items: DEFAULT_MAX_VISIBLE_ITEMS,
            on_create_item: None,
            on_selection_change: None,
        }
    }
}

impl fmt::Debug for AutocompleteProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteProps")
            .field("items", &self.items.len())
            .field("placeholder", &self.placeholder)
            .field("label", &self.label)
            .field("custom_filter", &self.filter.is_some())
            .field("hide_toggle_button", &self.hide_toggle_button)
            .field("disable_create_item", &self.disable_create_item)
            .field("max_visible_items", &self.max_visible_items)
            .finish_non_exhaustive()
    }
}

impl AutocompleteProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selectable items.
    pub fn items<I: AutocompleteItem>(mut self, items: impl IntoIterator<Item = I>) -> Self {
        self.items = items.into_iter().map(|item| item.to_item()).collect();
        self
    }

    /// Set the placeholder text shown when the input is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the label shown above the input.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replace the default fuzzy filter.
    pub fn filter(
        mut self,
        filter: impl Fn(&[Item], &str) -> Vec<Item> + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Control how dropdown rows for existing items are rendered.
    pub fn item_renderer(mut self, renderer: impl Fn(&Item) -> String + Send + Sync + 'static) -> Self {
        self.item_renderer = Some(Arc::new(renderer));
        self
    }

    /// Control how the creation row is rendered. Receives the input text.
    pub fn create_item_renderer(
        mut self,
        renderer: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.create_item_renderer = Some(Arc::new(renderer));
        self
    }

    /// Control what the dropdown shows when nothing matches and creation is
    /// disabled. Receives the input text.
    pub fn empty_state(mut self, renderer: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.empty_state = Some(Arc::new(renderer));
        self
    }

    pub fn styles(mut self, styles: StyleProps) -> Self {
        self.styles = styles;
        self
    }

    pub fn hide_toggle_button(mut self) -> Self {
        self.hide_toggle_button = true;
        self
    }

    /// Never offer to create items from the input text.
    pub fn disable_create_item(mut self) -> Self {
        self.disable_create_item = true;
        self
    }

    /// Set how many dropdown rows are visible at once (at least one).
    pub fn max_visible_items(mut self, rows: usize) -> Self {
        self.max_visible_items = rows.max(1);
        self
    }

    pub fn on_create_item(mut self, handler: impl Fn(&Item) + Send + Sync + 'static) -> Self {
        self.on_create_item = Some(Arc::new(handler));
        self
    }

    pub fn on_selection_change(
        mut self,
        handler: impl Fn(&Selection) + Send + Sync + 'static,
    ) -> Self {
        self.on_selection_change = Some(Arc::new(handler));
        self
    }
}
