//! Terminal setup, teardown and diffed drawing.

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::Once;

use crossterm::{
    cursor, event, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::error::Result;
use crate::layout::Rect;
use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

/// A raw-mode, alternate-screen terminal that only writes changed cells.
///
/// The terminal is restored on drop and when the process panics.
pub struct Terminal {
    stdout: Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        install_panic_hook();

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        let (width, height) = match enter(&mut stdout) {
            Ok(size) => size,
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        };

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Draw a frame. The closure paints into a cleared buffer covering the
    /// whole screen; only cells that differ from the previous frame are
    /// written out.
    pub fn draw(&mut self, paint: impl FnOnce(Rect, &mut Buffer)) -> Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("terminal resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        paint(Rect::from_size(width, height), &mut self.current_buffer);
        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // the wide char before already covers this column
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.style != last_style {
                // Reset clears colors too, so re-send them afterwards
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                for attribute in attributes(cell.style) {
                    queue!(self.stdout, SetAttribute(attribute))?;
                }
                last_style = cell.style;
                last_fg = None;
                last_bg = None;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }

            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn attributes(style: TextStyle) -> Vec<Attribute> {
    [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.italic, Attribute::Italic),
        (style.underline, Attribute::Underlined),
        (style.reversed, Attribute::Reverse),
    ]
    .into_iter()
    .filter_map(|(on, attribute)| on.then_some(attribute))
    .collect()
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

static PANIC_HOOK: Once = Once::new();

/// Restore the terminal before the panic message is printed. Only the first
/// call installs the hook; returns whether this call did.
pub(crate) fn install_panic_hook() -> bool {
    let mut installed = false;
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
        installed = true;
    });
    installed
}

/// Switch an already raw terminal to the alternate screen and report its size.
fn enter(stdout: &mut Stdout) -> io::Result<(u16, u16)> {
    queue!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        event::EnableMouseCapture
    )?;
    stdout.flush()?;
    terminal::size()
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    queue!(
        stdout,
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}
