//! Wrapping helpers and dimensions for the draft field.
//!
//! Stateless; shared by `CommentForm` (height, visible window) and
//! `CursorState` (cursor placement).

use unicode_width::UnicodeWidthStr;

/// Border (1 each side) + padding (1 each side)
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Row under the field holding the validation message and the submit control
pub(super) const FOOTER_HEIGHT: u16 = 1;
/// Draft lines shown before the field scrolls internally
pub(super) const MAX_VISIBLE_LINES: u16 = 4;
/// Distance from the field's outer edge to the first text cell
pub(super) const CONTENT_OFFSET_X: u16 = 2;
pub(super) const CONTENT_OFFSET_Y: u16 = 1;

pub(super) fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Text width left inside the field; 0 when the area is too narrow.
pub(super) fn inner_width(outer_width: u16) -> u16 {
    outer_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// The draft as it will appear on screen, one entry per row.
///
/// A trailing newline yields a trailing empty row, which textwrap alone
/// does not always produce.
pub(super) fn draft_rows(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }
    let mut rows: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|row| row.into_owned())
        .collect();
    if rows.is_empty() {
        rows.push(String::new());
    }
    if text.ends_with('\n') && !rows.last().is_some_and(|r| r.is_empty()) {
        rows.push(String::new());
    }
    rows
}

pub(super) fn row_count(text: &str, width: u16) -> u16 {
    u16::try_from(draft_rows(text, width).len()).unwrap_or(u16::MAX)
}

/// (row, column) of the caret at byte `pos` of `draft`, in the same wrapped
/// coordinates the field is drawn with.
///
/// Rows are located by walking the wrapped full draft: each row starts where
/// the previous one ended, plus the spaces textwrap dropped at the break and
/// at most one newline.
pub(super) fn caret_cell(draft: &str, pos: usize, width: u16) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let rows = draft_rows(draft, width);
    let pos = pos.min(draft.len());

    let mut offset = 0;
    for (i, row) in rows.iter().enumerate() {
        let start = if row.is_empty() {
            offset
        } else {
            draft[offset..]
                .find(row.as_str())
                .map(|found| offset + found)
                .unwrap_or(offset)
        };
        let end = start + row.len();
        let sep_end = end + draft[end..].len() - draft[end..].trim_start_matches(' ').len();
        let at_line_end = i + 1 == rows.len() || draft[sep_end..].starts_with('\n');

        if pos <= sep_end {
            let col = draft[start.min(pos)..pos].width();
            // A caret exactly on a soft break with no room left belongs to the next row
            if pos < sep_end || col < width as usize || at_line_end {
                let row = u16::try_from(i).unwrap_or(u16::MAX);
                return (row, col.min(width as usize) as u16);
            }
        }

        offset = if draft[sep_end..].starts_with('\n') {
            sep_end + 1
        } else {
            sep_end
        };
    }

    let last = u16::try_from(rows.len().saturating_sub(1)).unwrap_or(u16::MAX);
    (last, 0)
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_of_empty_text() {
        assert_eq!(draft_rows("", 10), vec![String::new()]);
        assert_eq!(row_count("", 0), 1);
    }

    #[test]
    fn rows_wrap_long_text() {
        assert_eq!(row_count("aaaa bbbb cccc", 9), 2);
    }

    #[test]
    fn rows_trailing_newline_adds_row() {
        assert_eq!(row_count("hello\n", 20), 2);
        assert_eq!(row_count("a\nb", 20), 2);
    }

    fn caret_at_end(text: &str, width: u16) -> (u16, u16) {
        caret_cell(text, text.len(), width)
    }

    #[test]
    fn caret_at_end_of_single_row() {
        assert_eq!(caret_at_end("ótimo", 20), (0, 5));
    }

    #[test]
    fn caret_after_trailing_space() {
        assert_eq!(caret_at_end("ótimo ", 20), (0, 6));
    }

    #[test]
    fn caret_after_newline() {
        assert_eq!(caret_at_end("abc\n", 20), (1, 0));
        assert_eq!(caret_cell("a\n\nb", 2, 20), (1, 0));
        assert_eq!(caret_cell("a\n\nb", 3, 20), (2, 0));
    }

    #[test]
    fn caret_on_wrapped_row() {
        assert_eq!(draft_rows("aaaa bbbb cc", 9), vec!["aaaa", "bbbb cc"]);
        assert_eq!(caret_at_end("aaaa bbbb cc", 9), (1, 7));
    }

    #[test]
    fn caret_inside_text_follows_rendered_rows() {
        // Wrapping only the prefix would keep "aaaa bbbb" on one row
        assert_eq!(caret_cell("aaaa bbbb cc", 9, 9), (1, 4));
        assert_eq!(draft_rows("aaaa bbbbbbb", 9), vec!["aaaa", "bbbbbbb"]);
        assert_eq!(caret_cell("aaaa bbbbbbb", 8, 9), (1, 3));
        assert_eq!(caret_cell("aaaa bbbbbbb", 2, 9), (0, 2));
    }

    #[test]
    fn caret_on_broken_word_boundary_moves_down() {
        assert_eq!(draft_rows("aaaaaaaaaaaa", 9), vec!["aaaaaaaaa", "aaa"]);
        assert_eq!(caret_cell("aaaaaaaaaaaa", 9, 9), (1, 0));
        assert_eq!(caret_cell("aaaaaaaaaaaa", 8, 9), (0, 8));
    }

    #[test]
    fn caret_at_start() {
        assert_eq!(caret_cell("aaaa bbbb cc", 0, 9), (0, 0));
        assert_eq!(caret_cell("", 0, 9), (0, 0));
    }

    #[test]
    fn char_boundaries_multibyte() {
        let s = "aé👋";
        assert_eq!(next_char_boundary(s, 0), 1);
        assert_eq!(next_char_boundary(s, 1), 3);
        assert_eq!(next_char_boundary(s, 3), 7);
        assert_eq!(next_char_boundary(s, 7), 7);
        assert_eq!(prev_char_boundary(s, 7), 3);
        assert_eq!(prev_char_boundary(s, 3), 1);
        assert_eq!(prev_char_boundary(s, 0), 0);
    }
}
