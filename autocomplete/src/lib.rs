//! A terminal autocomplete (combobox) widget.
//!
//! The widget owns its input text, the filtered candidate list, the
//! highlighted row, creation mode and the selection. Hosts feed it key and
//! mouse events and render it into a [`Buffer`] every frame.
//!
//! ```ignore
//! let props = AutocompleteProps::new()
//!     .label("Choose preferred work locations")
//!     .placeholder("Type a Country")
//!     .items([Item::new("ghana", "Ghana"), Item::new("kenya", "Kenya")])
//!     .on_create_item(|item| log::info!("created {}", item.label));
//!
//! let mut countries = Autocomplete::multiple(props);
//! countries.handle_key(Key::Char('g'));
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod item;
pub mod layout;
pub mod props;
pub mod render;
pub mod selection;
pub mod state;
pub mod style;
pub mod terminal;
pub mod text;
pub mod widget;

pub use buffer::{Buffer, Cell, Pen};
pub use config::AutocompleteConfig;
pub use error::{Error, Result};
pub use event::{EventResult, Key, KeyPress, Modifiers, MouseButton};
pub use filter::{FilterMatch, MatchRank, OptionFilter, default_filter, filter_items, fuzzy_filter};
pub use item::{AutocompleteItem, Item};
pub use layout::{Rect, Regions};
pub use props::AutocompleteProps;
pub use selection::{Selection, SelectionMode};
pub use state::{Candidate, InputState};
pub use style::{Color, DefaultTheme, Rgb, SelectedIcon, Style, StyleProps, TextStyle, Theme};
pub use terminal::Terminal;
pub use widget::Autocomplete;
