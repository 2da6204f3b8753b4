//! # TitleBar Component
//!
//! Top status bar: whose post is open and how many comments it has.
//!
//! Purely presentational. It receives everything as props and keeps no state,
//! so the parent rebuilds it each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&post.author.name, state.comments.len(), "");
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Postview | Diego Fernandes | 1 comentário | Apagado"`
//! 2. **Default**: `"Postview | Diego Fernandes | 1 comentário"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub author_name: &'a str,
    pub comment_count: usize,
    /// Transient status (e.g. "Comentário publicado"); empty for none
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(author_name: &'a str, comment_count: usize, status_message: &'a str) -> Self {
        Self {
            author_name,
            comment_count,
            status_message,
        }
    }

    fn count_label(&self) -> String {
        match self.comment_count {
            0 => "nenhum comentário".to_string(),
            1 => "1 comentário".to_string(),
            n => format!("{n} comentários"),
        }
    }

    pub fn title_text(&self) -> String {
        let base = format!("Postview | {} | {}", self.author_name, self.count_label());
        if self.status_message.is_empty() {
            base
        } else {
            format!("{base} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.title_text(), Style::default().add_modifier(Modifier::BOLD)),
            area,
        );
    }
}

/// Bottom key-hint line; the hints depend on which pane has focus.
pub struct HelpLine {
    pub composing: bool,
}

impl HelpLine {
    pub fn text(&self) -> &'static str {
        if self.composing {
            "Enter comentar · Ctrl+J nova linha · Tab comentários · Esc sair do campo · Ctrl+C sair"
        } else {
            "↑/↓ selecionar · d d apagar · t data · Tab escrever · PgUp/PgDn rolar · q sair"
        }
    }
}

impl Component for HelpLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Line::styled(self.text(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
