//! Caret and internal scroll tracking for the draft field.
//!
//! The draft text itself lives in `PostState`; the form only knows where the
//! caret is inside it. Every method takes the draft explicitly and clamps
//! first, because the draft can change underneath (e.g. cleared on submit).

use ratatui::layout::Rect;

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, MAX_VISIBLE_LINES, caret_cell, inner_width, row_count,
};

pub(super) struct CursorState {
    /// Byte offset into the draft (0..=draft.len()), always on a char boundary
    pub pos: usize,
    /// First visible row when the draft is taller than the field
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Pull the caret back inside `draft` and onto a char boundary.
    pub fn clamp(&mut self, draft: &str) {
        let mut pos = self.pos.min(draft.len());
        while !draft.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
    }

    /// Keep the caret's row inside the visible window.
    pub fn follow(&mut self, draft: &str, outer_width: u16) {
        let width = inner_width(outer_width);
        if row_count(draft, width) <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = caret_cell(draft, self.pos, width);
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Terminal cell of the caret inside the field drawn at `area`.
    pub fn screen_pos(&self, draft: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        let (row, col) = caret_cell(draft, self.pos, width);
        let visible_row = row.saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET_X + col,
            area.y + CONTENT_OFFSET_Y + visible_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_back_after_clear() {
        let mut cursor = CursorState::new();
        cursor.pos = 10;
        cursor.clamp("");
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn clamp_lands_on_char_boundary() {
        let mut cursor = CursorState::new();
        cursor.pos = 2; // inside 'é'
        cursor.clamp("aé");
        assert_eq!(cursor.pos, 1);
    }

    #[test]
    fn follow_scrolls_to_keep_caret_visible() {
        let draft = "1\n2\n3\n4\n5\n6";
        let mut cursor = CursorState::new();
        cursor.pos = draft.len();
        cursor.follow(draft, 20);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 0;
        cursor.follow(draft, 20);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn screen_pos_accounts_for_border_and_padding() {
        let mut cursor = CursorState::new();
        cursor.pos = 3;
        let area = Rect::new(5, 10, 30, 4);
        assert_eq!(cursor.screen_pos("abc", area), (5 + 2 + 3, 10 + 1));
    }

    #[test]
    fn screen_pos_mid_draft_matches_drawn_rows() {
        // Inner width 9 draws "aaaa" / "bbbb cc"; the caret sits after "bbbb"
        let mut cursor = CursorState::new();
        cursor.pos = 9;
        let area = Rect::new(0, 0, 13, 4);
        assert_eq!(cursor.screen_pos("aaaa bbbb cc", area), (2 + 4, 1 + 1));
    }

    #[test]
    fn follow_uses_caret_row_of_full_draft() {
        // Six rows at inner width 9; caret on the second one
        let draft = "aaaa bbbb cc\n3\n4\n5\n6";
        let mut cursor = CursorState::new();
        cursor.pos = draft.len();
        cursor.follow(draft, 13);
        assert_eq!(cursor.scroll_offset, 2);

        cursor.pos = 9;
        cursor.follow(draft, 13);
        assert_eq!(cursor.scroll_offset, 1);
    }
}
