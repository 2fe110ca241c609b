use autocomplete::{
    Autocomplete, AutocompleteProps, Buffer, DefaultTheme, EventResult, Item, Key, MouseButton,
    Rect, Rgb,
};

fn countries() -> Vec<Item> {
    vec![
        Item::new("ghana", "Ghana"),
        Item::new("nigeria", "Nigeria"),
        Item::new("kenya", "Kenya"),
        Item::new("southAfrica", "South Africa"),
        Item::new("unitedStates", "United States"),
        Item::new("canada", "Canada"),
        Item::new("germany", "Germany"),
    ]
}

fn props() -> AutocompleteProps {
    AutocompleteProps::new()
        .label("Country")
        .placeholder("Type a Country")
        .items(countries())
}

fn draw(widget: &mut Autocomplete) -> Buffer {
    let mut buf = Buffer::new(40, 12);
    widget.render(Rect::from_size(40, 12), &mut buf, &DefaultTheme::new());
    buf
}

fn type_text(widget: &mut Autocomplete, text: &str) {
    for c in text.chars() {
        widget.handle_key(Key::Char(c));
    }
}

const HIGHLIGHT_BG: Rgb = Rgb::new(70, 70, 90);
const SURFACE_BG: Rgb = Rgb::new(30, 30, 38);

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_closed_widget_shows_label_placeholder_and_toggle() {
    let mut widget = Autocomplete::single(props());
    let buf = draw(&mut widget);

    assert!(buf.row_text(0).starts_with("Country"));
    assert!(buf.row_text(1).starts_with(" Type a Country"));
    assert!(buf.row_text(1).ends_with(" ▼ "));
    assert!(buf.row_text(2).trim().is_empty());

    let regions = widget.regions();
    assert_eq!(regions.input, Rect::new(0, 1, 37, 1));
    assert_eq!(regions.toggle, Some(Rect::new(37, 1, 3, 1)));
    assert!(regions.rows.is_empty());
}

#[test]
fn test_hidden_toggle_button() {
    let mut widget = Autocomplete::single(props().hide_toggle_button());
    let buf = draw(&mut widget);

    assert!(!buf.row_text(1).contains('▼'));
    assert_eq!(widget.regions().toggle, None);
    assert_eq!(widget.regions().input, Rect::new(0, 1, 40, 1));
}

#[test]
fn test_max_height() {
    assert_eq!(Autocomplete::single(props()).max_height(), 10);
    assert_eq!(Autocomplete::multiple(props()).max_height(), 11);
    assert_eq!(
        Autocomplete::single(AutocompleteProps::new().max_visible_items(3)).max_height(),
        4
    );
}

#[test]
fn test_max_height_saturates_for_huge_row_counts() {
    let widget = Autocomplete::multiple(props().max_visible_items(65535));
    assert_eq!(widget.max_height(), u16::MAX);

    let widget = Autocomplete::single(props().max_visible_items(usize::MAX));
    assert_eq!(widget.max_height(), u16::MAX);

    // the menu still fits the area it is given
    let mut widget = Autocomplete::single(props().max_visible_items(usize::MAX));
    widget.handle_key(Key::Down);
    draw(&mut widget);
    assert_eq!(widget.regions().rows.len(), 7);
}

// ============================================================================
// Dropdown
// ============================================================================

#[test]
fn test_open_menu_lists_items_with_highlight() {
    let mut widget = Autocomplete::single(props());
    widget.handle_key(Key::Down);
    let buf = draw(&mut widget);

    assert!(buf.row_text(1).ends_with(" ▲ "));
    assert!(buf.row_text(2).starts_with(" Ghana"));
    assert!(buf.row_text(3).starts_with(" Nigeria"));
    assert!(buf.row_text(8).starts_with(" Germany"));

    assert_eq!(buf.get(0, 2).map(|cell| cell.bg), Some(HIGHLIGHT_BG));
    assert_eq!(buf.get(0, 3).map(|cell| cell.bg), Some(SURFACE_BG));
    assert_eq!(widget.regions().rows.len(), 7);
}

#[test]
fn test_scrolled_menu_shows_window() {
    let mut widget = Autocomplete::single(props().max_visible_items(3));
    widget.handle_key(Key::Up);
    let buf = draw(&mut widget);

    let rows = &widget.regions().rows;
    assert_eq!(rows.iter().map(|(_, i)| *i).collect::<Vec<_>>(), vec![4, 5, 6]);
    assert!(buf.row_text(2).starts_with(" United States"));
    assert!(buf.row_text(4).starts_with(" Germany"));
    assert_eq!(buf.get(0, 4).map(|cell| cell.bg), Some(HIGHLIGHT_BG));
}

#[test]
fn test_matching_text_is_emphasized() {
    let mut widget = Autocomplete::single(AutocompleteProps::new().items([("gh", "Ghana")]));
    type_text(&mut widget, "an");
    let buf = draw(&mut widget);

    // no label: input on row 0, menu from row 1
    assert!(buf.row_text(1).starts_with(" Ghana"));
    let bold = |x| buf.get(x, 1).is_some_and(|cell| cell.style.bold);
    assert!(!bold(1));
    assert!(!bold(2));
    assert!(bold(3));
    assert!(bold(4));
    assert!(!bold(5));
}

#[test]
fn test_selected_items_carry_icon() {
    let mut widget = Autocomplete::multiple(props()).with_selection([Item::new("ghana", "Ghana")]);
    widget.handle_key(Key::Down);
    let buf = draw(&mut widget);

    // label, tags, input, then the menu
    assert!(buf.row_text(3).starts_with(" ✔ Ghana"));
    assert!(buf.row_text(4).starts_with(" Nigeria"));
    assert_eq!(buf.get(1, 3).map(|cell| cell.fg), Some(Rgb::new(56, 161, 105)));
}

#[test]
fn test_custom_item_renderer() {
    let mut widget = Autocomplete::single(
        props().item_renderer(|item| format!("{} ({})", item.label, item.value)),
    );
    widget.handle_key(Key::Down);
    let buf = draw(&mut widget);

    assert!(buf.row_text(2).starts_with(" Ghana (ghana)"));
}

#[test]
fn test_create_row() {
    let mut widget = Autocomplete::single(props());
    type_text(&mut widget, "Lagos");
    let buf = draw(&mut widget);

    assert!(buf.row_text(2).starts_with(" Create \"Lagos\""));
    let quote = buf.get(8, 2).copied();
    assert_eq!(quote.map(|cell| cell.char), Some('"'));
    assert_eq!(quote.map(|cell| cell.bg), Some(Rgb::new(246, 224, 94)));
    assert_eq!(quote.map(|cell| cell.fg), Some(Rgb::new(0, 0, 0)));
}

#[test]
fn test_custom_create_renderer() {
    let mut widget =
        Autocomplete::single(props().create_item_renderer(|text| format!("Add {text}...")));
    type_text(&mut widget, "Lagos");
    let buf = draw(&mut widget);

    assert!(buf.row_text(2).starts_with(" Add Lagos..."));
}

#[test]
fn test_empty_state() {
    let mut widget = Autocomplete::single(props().disable_create_item());
    type_text(&mut widget, "zzz");
    let buf = draw(&mut widget);
    assert!(buf.row_text(2).starts_with(" No matches"));

    let mut widget = Autocomplete::single(
        props()
            .disable_create_item()
            .empty_state(|text| format!("Nothing for {text}")),
    );
    type_text(&mut widget, "zzz");
    let buf = draw(&mut widget);
    assert!(buf.row_text(2).starts_with(" Nothing for zzz"));
}

// ============================================================================
// Tags
// ============================================================================

#[test]
fn test_tags_for_selected_items() {
    let mut widget = Autocomplete::multiple(props())
        .with_selection([Item::new("ghana", "Ghana"), Item::new("kenya", "Kenya")]);
    let buf = draw(&mut widget);

    assert!(buf.row_text(1).starts_with(" Ghana ×   Kenya × "));
    assert_eq!(
        widget.regions().tag_closes,
        vec![
            (Rect::new(7, 1, 1, 1), "ghana".to_string()),
            (Rect::new(17, 1, 1, 1), "kenya".to_string()),
        ]
    );
    assert!(buf.row_text(2).starts_with(" Type a Country"));
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_click_row_selects() {
    let mut widget = Autocomplete::single(props());
    widget.handle_key(Key::Down);
    draw(&mut widget);

    assert_eq!(widget.handle_click(5, 3, MouseButton::Left), EventResult::Consumed);
    assert_eq!(
        widget.selection().first().map(|item| item.value.as_str()),
        Some("nigeria")
    );
    assert!(!widget.is_open());
    assert_eq!(widget.text(), "Nigeria");
}

#[test]
fn test_click_toggle_opens_and_closes() {
    let mut widget = Autocomplete::single(props());
    draw(&mut widget);

    widget.handle_click(38, 1, MouseButton::Left);
    assert!(widget.is_open());
    let buf = draw(&mut widget);
    assert!(buf.row_text(1).ends_with(" ▲ "));

    widget.handle_click(38, 1, MouseButton::Left);
    assert!(!widget.is_open());
}

#[test]
fn test_click_tag_close_removes() {
    let mut widget = Autocomplete::multiple(props())
        .with_selection([Item::new("ghana", "Ghana"), Item::new("kenya", "Kenya")]);
    draw(&mut widget);

    assert_eq!(widget.handle_click(7, 1, MouseButton::Left), EventResult::Consumed);
    let values: Vec<_> = widget
        .selection()
        .items()
        .iter()
        .map(|item| item.value.clone())
        .collect();
    assert_eq!(values, vec!["kenya"]);
}

#[test]
fn test_click_input_focuses() {
    let mut widget = Autocomplete::single(props());
    draw(&mut widget);

    assert_eq!(widget.handle_click(5, 1, MouseButton::Left), EventResult::Consumed);
    assert!(widget.is_focused());
    assert!(widget.is_open());
}

#[test]
fn test_click_outside_and_right_click_ignored() {
    let mut widget = Autocomplete::single(props());
    draw(&mut widget);

    assert_eq!(widget.handle_click(45, 1, MouseButton::Left), EventResult::Ignored);
    assert_eq!(widget.handle_click(5, 1, MouseButton::Right), EventResult::Ignored);
    assert!(!widget.is_focused());
}

#[test]
fn test_hover_highlights_row() {
    let mut widget = Autocomplete::single(props());
    widget.handle_key(Key::Down);
    draw(&mut widget);

    assert_eq!(widget.handle_mouse_move(3, 4), EventResult::Consumed);
    assert_eq!(widget.highlighted(), Some(2));
    assert_eq!(widget.handle_mouse_move(3, 0), EventResult::Ignored);
    assert_eq!(widget.highlighted(), Some(2));
}
