//! # CommentForm Component
//!
//! The "Deixe seu comentário" form: a text field bound to the draft, the
//! required-field message and the "Comentar" submit control.
//!
//! ## State Management
//!
//! The draft and the validation message are props copied from `PostState`
//! before every event and every frame; the form never owns them. It turns
//! keystrokes into `FormEvent`s and the event loop turns those into
//! `core::action::Action`s. The caret position is the only internal state.
//!
//! The submit control is disabled exactly when the draft is empty. Pressing
//! Enter on an empty field does not submit; it reports `FormEvent::Invalid`
//! so the core can raise the required-field message.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    FOOTER_HEIGHT, MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, draft_rows, inner_width,
    next_char_boundary, prev_char_boundary, row_count,
};

pub const FORM_HEADING: &str = "Deixe seu comentário";
pub const PLACEHOLDER: &str = "Escreva seu comentário...";
pub const SUBMIT_LABEL: &str = "Comentar";

/// High-level events emitted by the CommentForm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The field now holds this text
    Changed(String),
    /// Caret moved; only a redraw is needed
    CursorMoved,
    /// Enter with a non-empty draft
    Submit,
    /// Enter with an empty draft
    Invalid,
}

pub struct CommentForm {
    /// Current draft (Prop)
    pub draft: String,
    /// Required-field message, if raised (Prop)
    pub validation: Option<&'static str>,
    /// Whether keystrokes go to this form (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl CommentForm {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            validation: None,
            focused: true,
            cursor: CursorState::new(),
        }
    }

    /// Copy the props that come from `PostState`.
    pub fn sync(&mut self, draft: &str, validation: Option<&'static str>) {
        if self.draft != draft {
            self.draft.clear();
            self.draft.push_str(draft);
        }
        self.validation = validation;
        self.cursor.clamp(&self.draft);
        if self.draft.is_empty() {
            self.cursor.reset();
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Rows needed for the current draft at this width, field and footer included.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let rows = row_count(&self.draft, inner_width(width)).min(MAX_VISIBLE_LINES);
        rows + VERTICAL_OVERHEAD + FOOTER_HEIGHT
    }

    fn edit(&mut self, apply: impl FnOnce(&mut String, &mut usize)) -> Option<FormEvent> {
        self.cursor.clamp(&self.draft);
        let before = self.draft.clone();
        apply(&mut self.draft, &mut self.cursor.pos);
        (self.draft != before).then(|| FormEvent::Changed(self.draft.clone()))
    }

    fn visible_rows(&self, width: u16) -> Vec<String> {
        draft_rows(&self.draft, inner_width(width))
            .into_iter()
            .skip(self.cursor.scroll_offset as usize)
            .take(MAX_VISIBLE_LINES as usize)
            .collect()
    }

    fn field_block(&self) -> Block<'static> {
        let border = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Line::styled(
                format!(" {FORM_HEADING} "),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1))
    }

    fn footer(&self) -> (Paragraph<'static>, Paragraph<'static>) {
        let message = Paragraph::new(self.validation.unwrap_or_default())
            .style(Style::default().fg(Color::Red));

        let button_style = if self.submit_enabled() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        };
        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {SUBMIT_LABEL} ]"),
            button_style,
        )))
        .alignment(Alignment::Right);

        (message, button)
    }
}

impl Default for CommentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CommentForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [field_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
                .areas(area);

        self.cursor.clamp(&self.draft);
        self.cursor.follow(&self.draft, field_area.width);

        let body = if self.draft.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let lines: Vec<Line> = self
                .visible_rows(field_area.width)
                .into_iter()
                .map(Line::from)
                .collect();
            Paragraph::new(lines).style(Style::default().fg(Color::Gray))
        };
        frame.render_widget(body.block(self.field_block()), field_area);

        let (message, button) = self.footer();
        let button_width = SUBMIT_LABEL.chars().count() as u16 + 4;
        let [message_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)])
                .areas(footer_area);
        frame.render_widget(message, message_area);
        frame.render_widget(button, button_area);

        if self.focused {
            let (x, y) = self.cursor.screen_pos(&self.draft, field_area);
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for CommentForm {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.edit(|draft, pos| {
                draft.insert(*pos, *c);
                *pos += c.len_utf8();
            }),
            TuiEvent::Paste(text) => self.edit(|draft, pos| {
                draft.insert_str(*pos, text);
                *pos += text.len();
            }),
            TuiEvent::Backspace => self.edit(|draft, pos| {
                if *pos > 0 {
                    let prev = prev_char_boundary(draft, *pos);
                    draft.drain(prev..*pos);
                    *pos = prev;
                }
            }),
            TuiEvent::Delete => self.edit(|draft, pos| {
                if *pos < draft.len() {
                    let next = next_char_boundary(draft, *pos);
                    draft.drain(*pos..next);
                }
            }),
            TuiEvent::CursorLeft
            | TuiEvent::CursorRight
            | TuiEvent::CursorHome
            | TuiEvent::CursorEnd => {
                self.cursor.clamp(&self.draft);
                let draft = &self.draft;
                let pos = self.cursor.pos;
                let target = match event {
                    TuiEvent::CursorLeft => prev_char_boundary(draft, pos),
                    TuiEvent::CursorRight => next_char_boundary(draft, pos),
                    TuiEvent::CursorHome => draft[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0),
                    _ => draft[pos..]
                        .find('\n')
                        .map(|i| pos + i)
                        .unwrap_or(draft.len()),
                };
                (target != pos).then(|| {
                    self.cursor.pos = target;
                    FormEvent::CursorMoved
                })
            }
            TuiEvent::Submit => {
                if self.submit_enabled() {
                    self.cursor.reset();
                    Some(FormEvent::Submit)
                } else {
                    Some(FormEvent::Invalid)
                }
            }
            _ => None,
        }
    }
}
