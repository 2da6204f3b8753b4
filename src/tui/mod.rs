//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the post card,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to 500ms waiting for input and only redraws when an event
//! arrived or the relative publish time ("há 2 dias") rolled over. All pending
//! events are drained before the next draw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use chrono::Utc;
use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::dates::DateLabels;
use crate::core::post::Post;
use crate::core::state::PostState;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CommentForm, CommentListEvent, CommentListState, FormEvent, TimeDetail,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing edits the draft. Esc or Tab switches to Browse.
    Compose,
    /// Arrow keys select comments, `d` deletes, `t` toggles the date detail.
    /// Typing any other character switches back to Compose.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: CommentForm,
    pub comment_list: CommentListState,
    pub input_mode: InputMode,
    pub time_detail: TimeDetail,
    /// Short feedback shown in the title bar; cleared when the user types again
    pub status_message: String,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            form: CommentForm::new(),
            comment_list: CommentListState::new(),
            input_mode: InputMode::Compose, // User expects to type immediately
            time_detail: TimeDetail::default(),
            status_message: String::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter through; terminals without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(post: Post, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut state = PostState::new();
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    info!(
        "Showing post by {} ({} blocks, zone {:?})",
        post.author.name,
        post.content.len(),
        config.timezone
    );

    let mut dates = DateLabels::derive(post.published_at, Utc::now(), config.timezone);
    let mut needs_redraw = true;

    loop {
        let fresh = DateLabels::derive(post.published_at, Utc::now(), config.timezone);
        if fresh != dates {
            dates = fresh;
            needs_redraw = true;
        }

        if needs_redraw {
            tui.form.sync(&state.draft, state.validation);
            terminal.draw(|f| ui::draw_ui(f, &post, &state, &mut tui, &dates))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &state, &mut tui) {
                if dispatch(&mut state, &mut tui, action) == Effect::Quit {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Leaving with {} comment(s)", state.comments.len());
    ratatui::restore();
    Ok(())
}

/// Apply an action to the core and keep the presentation state consistent with it.
fn dispatch(state: &mut PostState, tui: &mut TuiState, action: Action) -> Effect {
    let status = match &action {
        Action::Submitted if !state.is_draft_empty() => Some("Comentário publicado"),
        Action::DeleteRequested(_) => Some("Comentário apagado"),
        Action::DraftChanged(_) => Some(""),
        _ => None,
    };

    let effect = update(state, action);
    debug!("Effect: {:?}", effect);

    if effect == Effect::Render {
        if let Some(status) = status {
            tui.status_message = status.to_string();
        }
    }
    tui.comment_list.reconcile(&state.comments);
    tui.form.sync(&state.draft, state.validation);
    effect
}

/// Interpret one terminal event according to the current input mode.
fn route_event(event: &TuiEvent, state: &PostState, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        // Ctrl+C always quits regardless of mode
        TuiEvent::ForceQuit => return Some(Action::Quit),
        // Scrolling always goes to the comment list
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.comment_list.handle_event(event, &state.comments);
            return None;
        }
        _ => {}
    }

    match tui.input_mode {
        InputMode::Compose => match event {
            TuiEvent::Escape | TuiEvent::Tab => {
                tui.input_mode = InputMode::Browse;
                tui.comment_list.focus(&state.comments);
                None
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown => None,
            _ => form_action(event, state, tui),
        },
        InputMode::Browse => match event {
            TuiEvent::Tab | TuiEvent::Submit => {
                tui.input_mode = InputMode::Compose;
                tui.comment_list.blur();
                None
            }
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('t') => {
                tui.time_detail = tui.time_detail.toggle();
                None
            }
            TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::InputChar('d') | TuiEvent::Escape => {
                match tui.comment_list.handle_event(event, &state.comments) {
                    Some(CommentListEvent::Delete(text)) => Some(Action::DeleteRequested(text)),
                    None => None,
                }
            }
            // Typing auto-switches to Compose and forwards the keystroke
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                tui.input_mode = InputMode::Compose;
                tui.comment_list.blur();
                form_action(event, state, tui)
            }
            _ => None,
        },
    }
}

fn form_action(event: &TuiEvent, state: &PostState, tui: &mut TuiState) -> Option<Action> {
    tui.form.sync(&state.draft, state.validation);
    match tui.form.handle_event(event)? {
        FormEvent::Changed(text) => Some(Action::DraftChanged(text)),
        FormEvent::Submit => Some(Action::Submitted),
        FormEvent::Invalid => Some(Action::DraftInvalid),
        FormEvent::CursorMoved => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{REQUIRED_FIELD_MESSAGE, SEED_COMMENT};

    /// Feed events through routing and dispatch, like the run loop does.
    fn feed(state: &mut PostState, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            if let Some(action) = route_event(event, state, tui) {
                effects.push(dispatch(state, tui, action));
            }
        }
        effects
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn typing_and_enter_adds_comment() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        let mut events = typed("Ótimo");
        events.push(TuiEvent::Submit);
        feed(&mut state, &mut tui, &events);

        assert_eq!(state.comment_texts(), vec![SEED_COMMENT, "Ótimo"]);
        assert_eq!(state.draft, "");
        assert_eq!(tui.status_message, "Comentário publicado");
    }

    #[test]
    fn enter_on_empty_draft_flags_field() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        feed(&mut state, &mut tui, &[TuiEvent::Submit]);

        assert_eq!(state.comments.len(), 1);
        assert_eq!(state.validation, Some(REQUIRED_FIELD_MESSAGE));
        assert_eq!(tui.form.validation, Some(REQUIRED_FIELD_MESSAGE));

        feed(&mut state, &mut tui, &typed("a"));
        assert_eq!(state.validation, None);
    }

    #[test]
    fn browse_delete_twice_removes_selected() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        feed(
            &mut state,
            &mut tui,
            &[
                TuiEvent::Escape,
                TuiEvent::InputChar('d'),
                TuiEvent::InputChar('d'),
            ],
        );
        assert!(state.comments.is_empty());
        assert_eq!(tui.comment_list.selected, None);
        assert_eq!(tui.status_message, "Comentário apagado");
    }

    #[test]
    fn q_quits_only_outside_the_form() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        let effects = feed(&mut state, &mut tui, &[TuiEvent::InputChar('q')]);
        assert_eq!(effects, vec![Effect::Render]);
        assert_eq!(state.draft, "q");

        let effects = feed(&mut state, &mut tui, &[TuiEvent::Tab, TuiEvent::InputChar('q')]);
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn force_quit_from_compose() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        let effects = feed(&mut state, &mut tui, &[TuiEvent::ForceQuit]);
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn t_toggles_date_detail_in_browse() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        feed(&mut state, &mut tui, &[TuiEvent::Tab, TuiEvent::InputChar('t')]);
        assert_eq!(tui.time_detail, TimeDetail::Iso);
        assert_eq!(state.draft, "");
    }

    #[test]
    fn typing_in_browse_returns_to_compose() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        feed(&mut state, &mut tui, &[TuiEvent::Escape, TuiEvent::InputChar('o')]);
        assert_eq!(tui.input_mode, InputMode::Compose);
        assert_eq!(tui.comment_list.selected, None);
        assert_eq!(state.draft, "o");
    }

    #[test]
    fn enter_in_browse_returns_to_compose_without_submitting() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        feed(&mut state, &mut tui, &[TuiEvent::Tab, TuiEvent::Submit]);
        assert_eq!(tui.input_mode, InputMode::Compose);
        assert_eq!(state.validation, None);
    }

    #[test]
    fn selection_survives_deleting_another_comment() {
        let mut state = PostState::new();
        let mut tui = TuiState::new();
        let mut events = typed("b");
        events.push(TuiEvent::Submit);
        events.extend(typed("c"));
        events.push(TuiEvent::Submit);
        // Select the seed comment, then delete it
        events.extend([
            TuiEvent::Escape,
            TuiEvent::CursorUp,
            TuiEvent::CursorUp,
            TuiEvent::InputChar('d'),
            TuiEvent::InputChar('d'),
        ]);
        feed(&mut state, &mut tui, &events);

        assert_eq!(state.comment_texts(), vec!["b", "c"]);
        let selected = tui.comment_list.selected.and_then(|id| state.comment(id));
        assert_eq!(selected.map(|c| c.text.as_str()), Some("b"));
    }
}
