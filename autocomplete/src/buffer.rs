//! Cell buffer the widget renders into.

use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Second column of a double-width character.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

/// Resolved colors and attributes for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pen {
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint `width` cells starting at (x, y) with blanks in the pen's colors.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, pen: Pen) {
        for dx in 0..width {
            self.set(
                x.saturating_add(dx),
                y,
                Cell {
                    char: ' ',
                    fg: pen.fg,
                    bg: pen.bg,
                    style: pen.style,
                    wide_continuation: false,
                },
            );
        }
    }

    /// Write text starting at (x, y), never past `max_x`.
    ///
    /// Returns the x coordinate after the last written column. A wide
    /// character that would straddle `max_x` is not written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_x: u16, pen: Pen) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx + w > max_x {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    char: ch,
                    fg: pen.fg,
                    bg: pen.bg,
                    style: pen.style,
                    wide_continuation: false,
                },
            );
            for extra in 1..w {
                self.set(
                    cx + extra,
                    y,
                    Cell {
                        char: ' ',
                        fg: pen.fg,
                        bg: pen.bg,
                        style: pen.style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }
        cx
    }

    /// The characters of row `y` as a string, skipping wide continuations.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
