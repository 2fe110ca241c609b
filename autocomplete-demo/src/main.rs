//! Two autocompletes side by side, single and multiple selection, over a
//! list of countries. Unlisted countries can be created from either one.

mod paths;

use std::fs::{self, File};
use std::path::PathBuf;

use autocomplete::{
    Autocomplete, AutocompleteConfig, AutocompleteProps, Buffer, DefaultTheme, EventResult, Item,
    Key, KeyPress, Pen, Rect, Result, Rgb, Terminal, TextStyle,
};
use crossterm::event::{Event, EventStream, KeyEventKind, MouseEvent, MouseEventKind};
use futures::StreamExt;
use log::{debug, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;

const COUNTRIES: &[(&str, &str)] = &[
    ("ghana", "Ghana"),
    ("nigeria", "Nigeria"),
    ("kenya", "Kenya"),
    ("southAfrica", "South Africa"),
    ("unitedStates", "United States"),
    ("canada", "Canada"),
    ("germany", "Germany"),
];

/// An item created from the field at `field`.
type Created = (usize, Item);

struct Demo {
    fields: [Autocomplete; 2],
    focused: usize,
    theme: DefaultTheme,
    quit: bool,
}

impl Demo {
    fn new(config: &AutocompleteConfig, created: mpsc::UnboundedSender<Created>) -> Self {
        let field = |index: usize, label: &str| {
            let created = created.clone();
            let props = AutocompleteProps::new()
                .label(label)
                .placeholder("Type a Country")
                .items(COUNTRIES.iter().copied())
                .on_create_item(move |item| {
                    let _ = created.send((index, item.clone()));
                })
                .on_selection_change(move |selection| {
                    debug!("field {} selection: {} item(s)", index, selection.len());
                });
            config.apply(props)
        };

        let mut single = Autocomplete::single(field(0, "Country of residence"));
        single.focus();
        let multiple = Autocomplete::multiple(field(1, "Choose preferred work locations"));

        Self {
            fields: [single, multiple],
            focused: 0,
            theme: DefaultTheme::new(),
            quit: false,
        }
    }

    fn focus(&mut self, index: usize) {
        if index == self.focused {
            return;
        }
        self.fields[self.focused].blur();
        self.focused = index;
        self.fields[index].focus();
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let press = KeyPress::from(key);
                if press.modifiers.ctrl && matches!(press.key, Key::Char('c' | 'q')) {
                    info!("quit requested");
                    self.quit = true;
                    return;
                }
                if self.fields[self.focused].handle_key(press).is_handled() {
                    return;
                }
                match press.key {
                    Key::Tab | Key::BackTab => self.focus(1 - self.focused),
                    _ => debug!("unhandled key {:?}", press),
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                let hit = (0..self.fields.len())
                    .find(|&i| self.fields[i].handle_click(x, y, button.into()) == EventResult::Consumed);
                match hit {
                    Some(index) => self.focus(index),
                    None => self.fields[self.focused].close_menu(),
                }
            }
            MouseEventKind::Moved => {
                for field in &mut self.fields {
                    field.handle_mouse_move(x, y);
                }
            }
            _ => {}
        }
    }

    /// Add a created item to the collection, and to the selection of a
    /// multiple field.
    fn on_created(&mut self, (index, item): Created) {
        info!("created {:?} in field {}", item.label, index);
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        field.push_item(item.clone());
        if index == 1 {
            field.add_selected(item);
        }
    }

    fn draw(&mut self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(3) / 2;
        let height = area.height.saturating_sub(3);
        let left = Rect::new(area.x + 1, area.y + 1, width, height);
        let right = Rect::new(left.right() + 1, area.y + 1, width, height);

        for (field, rect) in self.fields.iter_mut().zip([left, right]) {
            let rect = Rect {
                height: rect.height.min(field.max_height()),
                ..rect
            };
            field.render(rect, buf, &self.theme);
        }

        if let Some(status_y) = area.bottom().checked_sub(1) {
            let pen = Pen {
                fg: Rgb::new(140, 140, 150),
                bg: Rgb::new(0, 0, 0),
                style: TextStyle::new(),
            };
            buf.put_str(area.x + 1, status_y, &self.status(), area.right(), pen);
        }
    }

    fn status(&self) -> String {
        let labels = |field: &Autocomplete| {
            field
                .selection()
                .items()
                .iter()
                .map(|item| item.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Residence: {}  |  Work: {}  |  Tab: switch  Ctrl+Q: quit",
            labels(&self.fields[0]),
            labels(&self.fields[1])
        )
    }
}

fn init_logging() -> Result<()> {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("autocomplete-demo.log"));
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    // only fails if a logger is already installed
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    Ok(())
}

fn load_config() -> Result<AutocompleteConfig> {
    match paths::config_file() {
        Some(path) => AutocompleteConfig::load_from(&path),
        None => Ok(AutocompleteConfig::default()),
    }
}

async fn run() -> Result<()> {
    let config = load_config()?;
    let (created_tx, mut created_rx) = mpsc::unbounded_channel();
    let mut demo = Demo::new(&config, created_tx);

    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();
    info!("demo started");

    while !demo.quit {
        terminal.draw(|area, buf| demo.draw(area, buf))?;

        tokio::select! {
            Some(event) = events.next() => demo.handle_event(event?),
            Some(created) = created_rx.recv() => demo.on_created(created),
            else => break,
        }
    }

    info!("demo stopped");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
