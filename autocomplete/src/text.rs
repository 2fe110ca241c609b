use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push('…');
    result
}

/// The longest suffix of `s` that fits in `max_width` columns.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (i, ch) in s.char_indices().rev() {
        let ch_width = char_width(ch);
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = i;
    }
    &s[start..]
}

/// Split `text` into runs, flagging the runs that match `query`
/// case-insensitively. Matches do not overlap; an empty query matches
/// nothing.
///
/// ```ignore
/// let runs = highlight_segments("Ghana", "an");
/// assert_eq!(runs, vec![("Gh", false), ("an", true), ("a", false)]);
/// ```
pub fn highlight_segments<'a>(text: &'a str, query: &str) -> Vec<(&'a str, bool)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < chars.len() {
        match match_len_at(&chars[i..], &needle) {
            Some(len) => {
                let start = chars[i].0;
                let end = chars.get(i + len).map_or(text.len(), |(b, _)| *b);
                if plain_start < start {
                    segments.push((&text[plain_start..start], false));
                }
                segments.push((&text[start..end], true));
                plain_start = end;
                i += len;
            }
            None => i += 1,
        }
    }

    if plain_start < text.len() {
        segments.push((&text[plain_start..], false));
    }
    segments
}

/// Number of haystack chars matched when `needle` (already lowercased)
/// occurs at the start of `chars`.
fn match_len_at(chars: &[(usize, char)], needle: &[char]) -> Option<usize> {
    let mut remaining = needle;
    let mut consumed = 0;
    for (_, ch) in chars {
        if remaining.is_empty() {
            break;
        }
        for lower in ch.to_lowercase() {
            match remaining.split_first() {
                Some((first, rest)) if *first == lower => remaining = rest,
                _ => return None,
            }
        }
        consumed += 1;
    }
    remaining.is_empty().then_some(consumed)
}
