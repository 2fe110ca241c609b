//! The autocomplete component: props, input state and selection wired
//! together behind key, mouse and focus handlers.

use crate::buffer::Buffer;
use crate::event::{EventResult, Key, KeyPress, MouseButton};
use crate::item::{AutocompleteItem, Item};
use crate::layout::{Rect, Regions};
use crate::props::AutocompleteProps;
use crate::render;
use crate::selection::{Selection, SelectionMode};
use crate::state::{Candidate, InputState};
use crate::style::Theme;

/// A text input with a fuzzy-filtered dropdown, in single or multiple
/// selection mode.
///
/// # Example
///
/// ```ignore
/// let mut country = Autocomplete::single(
///     AutocompleteProps::new()
///         .label("Country")
///         .placeholder("Type a Country")
///         .items([("gh", "Ghana"), ("ng", "Nigeria"), ("ke", "Kenya")]),
/// );
///
/// country.handle_key(Key::Char('g'));
/// country.handle_key(Key::Char('h'));
/// country.handle_key(Key::Enter);
/// assert_eq!(country.selection().first().map(|i| i.value.as_str()), Some("gh"));
/// ```
#[derive(Debug)]
pub struct Autocomplete {
    props: AutocompleteProps,
    selection: Selection,
    state: InputState,
    regions: Regions,
}

impl Autocomplete {
    pub fn new(props: AutocompleteProps, mode: SelectionMode) -> Self {
        let mut state = InputState::new();
        state.reset_candidates(&props.items);
        Self {
            props,
            selection: Selection::new(mode),
            state,
            regions: Regions::default(),
        }
    }

    /// Create a single-selection autocomplete.
    pub fn single(props: AutocompleteProps) -> Self {
        Self::new(props, SelectionMode::Single)
    }

    /// Create a multiple-selection autocomplete.
    pub fn multiple(props: AutocompleteProps) -> Self {
        Self::new(props, SelectionMode::Multiple)
    }

    /// Start with these items selected. Single mode keeps the last one and
    /// shows its label in the input. No change callback fires.
    pub fn with_selection<I: AutocompleteItem>(mut self, items: impl IntoIterator<Item = I>) -> Self {
        for item in items {
            self.selection.add(item.to_item());
        }
        if self.mode() == SelectionMode::Single
            && let Some(item) = self.selection.first()
        {
            let label = item.label.clone();
            self.state.set_text(label);
            self.refilter();
        }
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn props(&self) -> &AutocompleteProps {
        &self.props
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn items(&self) -> &[Item] {
        &self.props.items
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Current input text.
    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.state.candidates
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    pub fn is_creating(&self) -> bool {
        self.state.creating
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    /// Regions from the last render, used for mouse routing.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// The item behind a candidate row. Creation rows yield the synthetic item.
    pub fn candidate_item(&self, index: usize) -> Option<&Item> {
        match self.state.candidates.get(index)? {
            Candidate::Existing { index, .. } => self.props.items.get(*index),
            Candidate::Create(item) => Some(item),
        }
    }

    /// Labels of all candidates, in dropdown order.
    pub fn candidate_labels(&self) -> Vec<&str> {
        (0..self.state.candidates.len())
            .filter_map(|i| self.candidate_item(i))
            .map(|item| item.label.as_str())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Items and text
    // -------------------------------------------------------------------------

    /// Replace the item collection and re-filter with the current text.
    pub fn set_items<I: AutocompleteItem>(&mut self, items: impl IntoIterator<Item = I>) {
        self.props.items = items.into_iter().map(|item| item.to_item()).collect();
        self.refilter();
    }

    /// Append an item unless one with the same value exists.
    /// Returns true if the item was added.
    pub fn push_item(&mut self, item: Item) -> bool {
        if self.props.items.contains(&item) {
            return false;
        }
        self.props.items.push(item);
        self.refilter();
        true
    }

    /// Replace the input text, as if the user had typed it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.state.refilter(
            &self.props.items,
            self.props.filter.as_ref(),
            !self.props.disable_create_item,
        );
        if self.state.creating {
            log::debug!("entering creation mode for {:?}", self.state.text);
        }
    }

    fn text_changed(&mut self) {
        self.refilter();
        self.state.open = true;
    }

    // -------------------------------------------------------------------------
    // Menu and focus
    // -------------------------------------------------------------------------

    pub fn open_menu(&mut self) {
        if !self.state.open {
            log::debug!("autocomplete {:?} menu opened", self.props.label);
            self.state.open = true;
            self.state.ensure_visible(self.props.max_visible_items);
        }
    }

    pub fn close_menu(&mut self) {
        if self.state.open {
            log::debug!("autocomplete {:?} menu closed", self.props.label);
            self.state.open = false;
        }
    }

    /// Open or close the menu (the toggle button).
    pub fn toggle_menu(&mut self) {
        if self.state.open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Give the widget focus, opening the menu.
    pub fn focus(&mut self) {
        self.state.focused = true;
        self.open_menu();
    }

    /// Take focus away and close the menu. In single mode, the text snaps
    /// back to the selected item's label.
    pub fn blur(&mut self) {
        self.state.focused = false;
        self.close_menu();
        if self.mode() == SelectionMode::Single
            && let Some(item) = self.selection.first()
            && item.label != self.state.text
        {
            let label = item.label.clone();
            self.set_text(label);
        }
    }

    // -------------------------------------------------------------------------
    // Highlight
    // -------------------------------------------------------------------------

    pub fn highlight_next(&mut self) {
        self.state.highlight_next();
        self.state.ensure_visible(self.props.max_visible_items);
    }

    pub fn highlight_prev(&mut self) {
        self.state.highlight_prev();
        self.state.ensure_visible(self.props.max_visible_items);
    }

    pub fn set_highlight(&mut self, index: usize) {
        self.state.set_highlight(index);
        self.state.ensure_visible(self.props.max_visible_items);
    }

    fn page(&mut self, down: bool) {
        let Some(last) = self.state.candidates.len().checked_sub(1) else {
            return;
        };
        let step = self.props.max_visible_items;
        let current = self.state.highlighted.unwrap_or(0);
        let target = if down {
            current.saturating_add(step).min(last)
        } else {
            current.saturating_sub(step)
        };
        self.set_highlight(target);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Activate the candidate at `index`, as if it was clicked.
    ///
    /// Returns false if there is no such candidate.
    pub fn activate(&mut self, index: usize) -> bool {
        let Some(candidate) = self.state.candidates.get(index).cloned() else {
            return false;
        };
        self.state.highlighted = Some(index);

        let item = match candidate {
            Candidate::Create(item) => {
                self.create(item);
                return true;
            }
            Candidate::Existing { index, .. } => match self.props.items.get(index) {
                Some(item) => item.clone(),
                None => return false,
            },
        };

        match self.mode() {
            SelectionMode::Single => {
                let changed = self.selection.add(item.clone());
                log::debug!("selected {:?}", item.value);
                self.state.set_text(item.label);
                self.refilter();
                self.close_menu();
                if changed {
                    self.selection_changed();
                }
            }
            SelectionMode::Multiple => {
                self.selection.toggle(item.clone());
                log::debug!(
                    "toggled {:?}, selected={}",
                    item.value,
                    self.selection.contains(&item.value)
                );
                self.selection_changed();
            }
        }
        true
    }

    /// Activate the highlighted candidate. Returns false if none is
    /// highlighted.
    pub fn activate_highlighted(&mut self) -> bool {
        match self.state.highlighted {
            Some(index) => self.activate(index),
            None => false,
        }
    }

    fn create(&mut self, item: Item) {
        let multiple = self.mode() == SelectionMode::Multiple;
        let changed = if multiple && self.selection.contains(&item.value) {
            self.selection.remove(&item.value).is_some()
        } else if let Some(on_create) = self.props.on_create_item.clone() {
            log::debug!("creating item {:?}", item.value);
            on_create(&item);
            // the host decides whether a created item joins a multiple selection
            !multiple && self.selection.add(item.clone())
        } else {
            log::debug!("selecting unlisted item {:?}", item.value);
            self.selection.add(item.clone())
        };

        self.state.reset_candidates(&self.props.items);
        if multiple {
            self.state.clear_text();
        } else {
            self.state.set_text(item.label);
            self.close_menu();
        }
        if changed {
            self.selection_changed();
        }
    }

    /// Add an item to the selection (single mode: replace it).
    /// Returns true if the selection changed.
    pub fn add_selected(&mut self, item: Item) -> bool {
        if !self.selection.add(item.clone()) {
            return false;
        }
        if self.mode() == SelectionMode::Single {
            self.state.set_text(item.label);
            self.refilter();
        }
        self.selection_changed();
        true
    }

    /// Remove the selected item with this value (a tag's close button).
    pub fn remove_selected(&mut self, value: &str) -> Option<Item> {
        let removed = self.selection.remove(value)?;
        log::debug!("removed {:?} from selection", value);
        self.selection_changed();
        Some(removed)
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.selection_changed();
        }
    }

    fn selection_changed(&self) {
        if let Some(on_change) = &self.props.on_selection_change {
            on_change(&self.selection);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle a key press. Accepts a [`Key`], a [`KeyPress`] or a crossterm
    /// key event.
    pub fn handle_key(&mut self, press: impl Into<KeyPress>) -> EventResult {
        let press = press.into();
        if press.is_chord() {
            return EventResult::Ignored;
        }

        match press.key {
            Key::Down => {
                if self.state.open {
                    self.highlight_next();
                } else {
                    self.state.highlight_first();
                    self.open_menu();
                }
            }
            Key::Up => {
                if self.state.open {
                    self.highlight_prev();
                } else {
                    self.state.highlight_last();
                    self.open_menu();
                }
            }
            Key::PageDown if self.state.open => self.page(true),
            Key::PageUp if self.state.open => self.page(false),
            Key::Enter => {
                if self.state.open {
                    self.activate_highlighted();
                } else {
                    self.open_menu();
                }
            }
            Key::Escape => {
                if self.state.text.is_empty() && !self.state.open && !self.state.creating {
                    return EventResult::Ignored;
                }
                self.state.clear_text();
                self.refilter();
                self.close_menu();
            }
            Key::Char(c) => {
                self.state.insert_char(c);
                self.text_changed();
            }
            Key::Backspace => {
                if self.state.delete_char_before() {
                    self.text_changed();
                } else if self.mode() == SelectionMode::Multiple
                    && self.state.text.is_empty()
                    && let Some(last) = self.selection.pop()
                {
                    log::debug!("removed {:?} from selection", last.value);
                    self.selection_changed();
                }
            }
            Key::Delete => {
                if self.state.delete_char_at() {
                    self.text_changed();
                }
            }
            Key::Left => self.state.cursor_left(),
            Key::Right => self.state.cursor_right(),
            Key::Home => self.state.cursor_home(),
            Key::End => self.state.cursor_end(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    /// Handle a mouse click at terminal coordinates, using the regions of
    /// the last render.
    pub fn handle_click(&mut self, x: u16, y: u16, button: MouseButton) -> EventResult {
        if button != MouseButton::Left {
            return EventResult::Ignored;
        }

        if self.regions.toggle.is_some_and(|toggle| toggle.contains(x, y)) {
            self.state.focused = true;
            self.toggle_menu();
            return EventResult::Consumed;
        }

        if let Some(value) = self.regions.tag_close_at(x, y).map(str::to_string) {
            self.state.focused = true;
            self.remove_selected(&value);
            return EventResult::Consumed;
        }

        if self.state.open
            && let Some(index) = self.regions.row_at(x, y)
        {
            self.state.focused = true;
            self.activate(index);
            return EventResult::Consumed;
        }

        if self.regions.input.contains(x, y) {
            self.focus();
            return EventResult::Consumed;
        }

        if self.regions.area.contains(x, y) {
            self.state.focused = true;
            return EventResult::Consumed;
        }

        EventResult::Ignored
    }

    /// Highlight the dropdown row under the pointer.
    pub fn handle_mouse_move(&mut self, x: u16, y: u16) -> EventResult {
        if !self.state.open {
            return EventResult::Ignored;
        }
        match self.regions.row_at(x, y) {
            Some(index) => {
                self.state.set_highlight(index);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Rows the widget occupies with the menu fully open.
    pub fn max_height(&self) -> u16 {
        let rows = u16::try_from(self.props.max_visible_items).unwrap_or(u16::MAX);
        render::header_rows(self).saturating_add(1).saturating_add(rows)
    }

    /// Draw into `buf` and remember the regions for mouse handling.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &dyn Theme) -> &Regions {
        self.regions = render::render(self, area, buf, theme);
        &self.regions
    }
}
