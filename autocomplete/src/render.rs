//! Draws an [`Autocomplete`] into a [`Buffer`].
//!
//! Layout, top to bottom: label, selected-item tags (multiple mode only),
//! the input line with its toggle button, and the dropdown when open.

use crate::buffer::{Buffer, Pen};
use crate::layout::{Rect, Regions};
use crate::selection::SelectionMode;
use crate::state::Candidate;
use crate::style::{Rgb, Style, TextStyle, Theme};
use crate::text::{display_width, highlight_segments, tail_to_width, truncate_to_width};
use crate::widget::Autocomplete;

const TOGGLE_WIDTH: u16 = 3;
const TAG_CLOSE: &str = "×";

fn base_pen() -> Pen {
    Pen {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        style: TextStyle::new(),
    }
}

/// Layer a style over a pen, resolving theme colors.
fn apply(style: &Style, theme: &dyn Theme, pen: Pen) -> Pen {
    Pen {
        fg: style
            .foreground
            .as_ref()
            .map_or(pen.fg, |c| c.resolve(theme, pen.fg)),
        bg: style
            .background
            .as_ref()
            .map_or(pen.bg, |c| c.resolve(theme, pen.bg)),
        style: pen.style.union(style.text_style),
    }
}

/// Rows above the input line.
pub fn header_rows(widget: &Autocomplete) -> u16 {
    let label = u16::from(!widget.props().label.is_empty());
    let tags = u16::from(widget.mode() == SelectionMode::Multiple);
    label + tags
}

/// Render the widget and return where its interactive parts landed.
pub fn render(widget: &Autocomplete, area: Rect, buf: &mut Buffer, theme: &dyn Theme) -> Regions {
    let mut regions = Regions {
        area,
        ..Default::default()
    };
    if area.is_empty() {
        return regions;
    }

    let styles = &widget.props().styles;
    let base = base_pen();
    let mut row = 0;

    if !widget.props().label.is_empty() {
        let pen = apply(&styles.label, theme, base);
        let label = truncate_to_width(&widget.props().label, area.width as usize);
        buf.put_str(area.x, area.y, &label, area.right(), pen);
        row += 1;
    }

    if widget.mode() == SelectionMode::Multiple && row < area.height {
        render_tags(widget, area.row(row), buf, theme, &mut regions);
        row += 1;
    }

    if row >= area.height {
        return regions;
    }
    render_input(widget, area.row(row), buf, theme, &mut regions);
    row += 1;

    if widget.is_open() && row < area.height {
        let menu = Rect::new(area.x, area.y + row, area.width, area.height - row);
        render_menu(widget, menu, buf, theme, &mut regions);
    }

    log::trace!(
        "rendered autocomplete {:?} rows={} open={}",
        widget.props().label,
        regions.rows.len(),
        widget.is_open()
    );
    regions
}

fn render_tags(
    widget: &Autocomplete,
    line: Rect,
    buf: &mut Buffer,
    theme: &dyn Theme,
    regions: &mut Regions,
) {
    let pen = apply(&widget.props().styles.tag, theme, base_pen());
    let max_x = line.right();
    let mut x = line.x;

    for item in widget.selection().items() {
        let chip = format!(" {} ", item.label);
        let chip_width = display_width(&chip) + display_width(TAG_CLOSE) + 1;
        let chip_width = u16::try_from(chip_width).unwrap_or(u16::MAX);
        if x.saturating_add(chip_width) > max_x {
            buf.put_str(x, line.y, "…", max_x, base_pen());
            break;
        }

        x = buf.put_str(x, line.y, &chip, max_x, pen);
        regions
            .tag_closes
            .push((Rect::new(x, line.y, 1, 1), item.value.clone()));
        x = buf.put_str(x, line.y, TAG_CLOSE, max_x, pen);
        x = buf.put_str(x, line.y, " ", max_x, pen);
        // gap between chips
        x += 1;
    }
}

fn render_input(
    widget: &Autocomplete,
    line: Rect,
    buf: &mut Buffer,
    theme: &dyn Theme,
    regions: &mut Regions,
) {
    let styles = &widget.props().styles;
    let state = widget.state();

    let (input, toggle) = if widget.props().hide_toggle_button {
        (line, None)
    } else {
        let (input, toggle) = line.split_right(TOGGLE_WIDTH);
        (input, Some(toggle))
    };
    regions.input = input;
    regions.toggle = toggle;

    let mut pen = apply(&styles.input, theme, base_pen());
    if state.focused {
        pen = apply(&styles.input_focused, theme, pen);
    }
    buf.fill(input.x, input.y, input.width, pen);

    let text_x = input.x + 1;
    let max_x = input.right().saturating_sub(1);
    let avail = max_x.saturating_sub(text_x) as usize;

    if state.text.is_empty() {
        if state.focused {
            let cursor = Pen {
                style: pen.style.union(TextStyle {
                    reversed: true,
                    ..TextStyle::new()
                }),
                ..pen
            };
            buf.put_str(text_x, input.y, " ", max_x, cursor);
        }
        let placeholder = apply(&styles.placeholder, theme, pen);
        let start = if state.focused { text_x + 1 } else { text_x };
        let text = truncate_to_width(&widget.props().placeholder, avail.saturating_sub(1));
        buf.put_str(start, input.y, &text, max_x, placeholder);
    } else if state.focused {
        // keep the cursor in view: show the tail of the text before it
        let cursor = state.text_cursor.min(state.text.len());
        let before = tail_to_width(&state.text[..cursor], avail.saturating_sub(1));
        let mut x = buf.put_str(text_x, input.y, before, max_x, pen);

        let mut rest = state.text[cursor..].chars();
        let under_cursor = rest.next().map_or(" ".to_string(), |c| c.to_string());
        let reversed = Pen {
            style: pen.style.union(TextStyle {
                reversed: true,
                ..TextStyle::new()
            }),
            ..pen
        };
        x = buf.put_str(x, input.y, &under_cursor, max_x, reversed);
        buf.put_str(x, input.y, rest.as_str(), max_x, pen);
    } else {
        let text = truncate_to_width(&state.text, avail);
        buf.put_str(text_x, input.y, &text, max_x, pen);
    }

    if let Some(toggle) = toggle {
        let pen = apply(&styles.toggle_button, theme, base_pen());
        buf.fill(toggle.x, toggle.y, toggle.width, pen);
        let glyph = if widget.is_open() { " ▲ " } else { " ▼ " };
        buf.put_str(toggle.x, toggle.y, glyph, toggle.right(), pen);
    }
}

fn render_menu(
    widget: &Autocomplete,
    menu: Rect,
    buf: &mut Buffer,
    theme: &dyn Theme,
    regions: &mut Regions,
) {
    let props = widget.props();
    let styles = &props.styles;
    let state = widget.state();
    let list = apply(&styles.list, theme, base_pen());

    if state.candidates.is_empty() {
        let message = match &props.empty_state {
            Some(render_empty) => render_empty(&state.text),
            None => "No matches".to_string(),
        };
        let pen = Pen {
            style: list.style.union(TextStyle {
                dim: true,
                ..TextStyle::new()
            }),
            ..list
        };
        buf.fill(menu.x, menu.y, menu.width, list);
        buf.put_str(menu.x + 1, menu.y, &message, menu.right(), pen);
        return;
    }

    let visible = props.max_visible_items.min(menu.height as usize);
    for (row, index) in (state.scroll..state.candidates.len())
        .take(visible)
        .enumerate()
    {
        let rect = menu.row(row as u16);
        let mut pen = apply(&styles.list_item, theme, list);
        if state.highlighted == Some(index) {
            pen.bg = styles.highlight_item_bg.resolve(theme, pen.bg);
        }
        buf.fill(rect.x, rect.y, rect.width, pen);

        let max_x = rect.right();
        let mut x = rect.x + 1;
        match &state.candidates[index] {
            Candidate::Create(item) => match &props.create_item_renderer {
                Some(render_create) => {
                    buf.put_str(x, rect.y, &render_create(&state.text), max_x, pen);
                }
                None => {
                    x = buf.put_str(x, rect.y, "Create ", max_x, pen);
                    let quoted = format!("\"{}\"", item.label);
                    let create = apply(&styles.create_item, theme, pen);
                    buf.put_str(x, rect.y, &quoted, max_x, create);
                }
            },
            Candidate::Existing { index: item_index, .. } => {
                let Some(item) = props.items.get(*item_index) else {
                    continue;
                };
                if widget.selection().contains(&item.value) {
                    let icon = &styles.selected_icon;
                    let icon_pen = apply(&icon.style, theme, pen);
                    x = buf.put_str(x, rect.y, &icon.glyph.to_string(), max_x, icon_pen);
                    x = buf.put_str(x, rect.y, " ", max_x, pen);
                }
                match &props.item_renderer {
                    Some(render_item) => {
                        buf.put_str(x, rect.y, &render_item(item), max_x, pen);
                    }
                    None => {
                        let matched = apply(&styles.match_highlight, theme, pen);
                        for (segment, is_match) in highlight_segments(&item.label, &state.text) {
                            let segment_pen = if is_match { matched } else { pen };
                            x = buf.put_str(x, rect.y, segment, max_x, segment_pen);
                        }
                    }
                }
            }
        }
        regions.rows.push((rect, index));
    }
}
