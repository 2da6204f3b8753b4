//! # Avatar Component
//!
//! Terminals can't show the author's picture, so the avatar is a rounded tile
//! holding a two-letter monogram taken from the image URL's file name
//! (`https://github.com/diego3g.png` → `DI`).

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

/// Fixed footprint of the tile, borders included.
pub const AVATAR_WIDTH: u16 = 6;
pub const AVATAR_HEIGHT: u16 = 3;

#[derive(Clone, Copy)]
pub struct Avatar<'a> {
    pub src: &'a str,
}

impl<'a> Avatar<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src }
    }

    /// Up to two uppercase letters/digits from the URL's last path segment.
    pub fn monogram(src: &str) -> String {
        let path = src
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let file = path.rsplit('/').next().unwrap_or_default();
        let stem = file.split('.').next().unwrap_or_default();

        let letters: String = stem
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if letters.is_empty() {
            "?".to_string()
        } else {
            letters
        }
    }
}

impl<'a> Widget for Avatar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));

        Paragraph::new(Self::monogram(self.src))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block)
            .render(area, buf);
    }
}
