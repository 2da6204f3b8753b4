use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::state::Comment;

/// Horizontal padding (per side) between the border and the text.
const CONTENT_PAD_H: u16 = 1;
/// Borders (1 left + 1 right) plus padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Top + bottom borders.
const VERTICAL_OVERHEAD: u16 = 2;

pub const DELETE_AFFORDANCE: &str = "[x]";
pub const CONFIRM_AFFORDANCE: &str = "apagar? d";

/// A single comment with its delete affordance.
///
/// Transient: built each frame by `CommentList` from the comment it shows and
/// the list's selection state.
#[derive(Clone, Copy)]
pub struct CommentItem<'a> {
    pub comment: &'a Comment,
    pub is_selected: bool,
    /// The delete affordance has been pressed once and awaits confirmation
    pub confirm_delete: bool,
}

impl<'a> CommentItem<'a> {
    pub fn new(comment: &'a Comment, is_selected: bool, confirm_delete: bool) -> Self {
        Self {
            comment,
            is_selected,
            confirm_delete,
        }
    }

    /// Trigger the delete affordance: the callback receives this comment's text.
    pub fn request_delete(&self, on_delete_comment: impl FnOnce(&str)) {
        on_delete_comment(&self.comment.text);
    }

    pub fn calculate_height(comment: &Comment, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }
        u16::try_from(wrap(&comment.text, content_width).len())
            .unwrap_or(u16::MAX)
            .max(1)
            .saturating_add(VERTICAL_OVERHEAD)
    }
}

fn wrap(text: &str, width: u16) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|piece| Line::from(piece.into_owned()))
        .collect()
}

impl<'a> Widget for CommentItem<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, affordance) = if self.is_selected && self.confirm_delete {
            (
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                CONFIRM_AFFORDANCE,
            )
        } else if self.is_selected {
            (Style::default().fg(Color::Cyan), DELETE_AFFORDANCE)
        } else {
            (
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                DELETE_AFFORDANCE,
            )
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_top(Line::styled(affordance, border_style).right_aligned())
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Text::from(wrap(&self.comment.text, inner.width)))
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
    }
}
