//! Screen rectangles and the hit map produced by rendering.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The single row at offset `dy`, or an empty rect below the bottom edge.
    pub fn row(&self, dy: u16) -> Rect {
        if dy < self.height {
            Rect::new(self.x, self.y + dy, self.width, 1)
        } else {
            Rect::new(self.x, self.bottom(), self.width, 0)
        }
    }

    /// Split off `width` columns from the right edge.
    pub fn split_right(&self, width: u16) -> (Rect, Rect) {
        let width = width.min(self.width);
        let left = Rect::new(self.x, self.y, self.width - width, self.height);
        let right = Rect::new(left.right(), self.y, width, self.height);
        (left, right)
    }
}

/// Where the interactive parts of a widget landed in the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    /// Whole area the widget drew into.
    pub area: Rect,
    /// The text input line, excluding the toggle button.
    pub input: Rect,
    /// The toggle button, if shown.
    pub toggle: Option<Rect>,
    /// Close glyphs of selected-item tags, with the item value.
    pub tag_closes: Vec<(Rect, String)>,
    /// Dropdown rows, with their candidate index.
    pub rows: Vec<(Rect, usize)>,
}

impl Regions {
    /// Candidate index of the dropdown row at a point.
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        self.rows
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, index)| *index)
    }

    /// Value of the tag whose close glyph is at a point.
    pub fn tag_close_at(&self, x: u16, y: u16) -> Option<&str> {
        self.tag_closes
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.contains(x, y) || self.row_at(x, y).is_some()
    }
}
