//! # Post Content
//!
//! Renders the post body block by block, in order. Paragraph blocks are plain
//! text; link blocks are drawn anchor-style (underlined, link-coloured).
//! Blocks are separated by one blank row.
//!
//! Lines are wrapped here with `textwrap` rather than by `Paragraph`, so the
//! height reported by [`PostContent::calculate_height`] is exactly what gets
//! drawn.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::post::{BlockKind, ContentBlock};

#[derive(Clone, Copy)]
pub struct PostContent<'a> {
    pub blocks: &'a [ContentBlock],
}

impl<'a> PostContent<'a> {
    pub fn new(blocks: &'a [ContentBlock]) -> Self {
        Self { blocks }
    }

    pub fn calculate_height(blocks: &[ContentBlock], width: u16) -> u16 {
        u16::try_from(wrapped_lines(blocks, width).len()).unwrap_or(u16::MAX)
    }
}

fn block_style(kind: BlockKind) -> Style {
    match kind {
        BlockKind::Paragraph => Style::default().fg(Color::Gray),
        BlockKind::Link => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    }
}

fn wrapped_lines(blocks: &[ContentBlock], width: u16) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);

    let mut lines = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let style = block_style(block.kind);
        let wrapped = textwrap::wrap(&block.text, &options);
        if wrapped.is_empty() {
            lines.push(Line::default());
        }
        for piece in wrapped {
            lines.push(Line::styled(piece.into_owned(), style));
        }
    }
    lines
}

impl<'a> Widget for PostContent<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = wrapped_lines(self.blocks, area.width);
        Paragraph::new(Text::from(lines)).render(area, buf);
    }
}
