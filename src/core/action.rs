//! # Actions
//!
//! Everything that can happen to the post card becomes an `Action`.
//! User types? That's `Action::DraftChanged(text)`.
//! User presses the trash icon? That's `Action::DeleteRequested(text)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` telling the adapter what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut state, action), Effect::Render)`.

use log::{debug, info};

use crate::core::state::{PostState, REQUIRED_FIELD_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The draft field now holds this text.
    DraftChanged(String),
    /// The form tried to submit while the required field was empty.
    DraftInvalid,
    /// The comment form was submitted.
    Submitted,
    /// Remove every comment whose text equals this one.
    DeleteRequested(String),
    Quit,
}

/// What the adapter should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// State is unchanged; no redraw needed.
    None,
    /// State changed; redraw.
    Render,
    Quit,
}

pub fn update(state: &mut PostState, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::DraftChanged(text) => {
            let changed = state.draft != text || state.validation.is_some();
            state.draft = text;
            state.validation = None;
            if changed { Effect::Render } else { Effect::None }
        }
        Action::DraftInvalid => flag_required(state),
        Action::Submitted => {
            // An empty required field never reaches submit; the form reports it instead.
            if state.is_draft_empty() {
                return flag_required(state);
            }
            let text = std::mem::take(&mut state.draft);
            let id = state.push_comment(text);
            info!(
                "Comment {:?} added ({} comments total)",
                id,
                state.comments.len()
            );
            Effect::Render
        }
        Action::DeleteRequested(text) => {
            let before = state.comments.len();
            state.comments.retain(|c| c.text != text);
            let removed = before - state.comments.len();
            if removed == 0 {
                debug!("Delete requested for unknown comment text, ignoring");
                return Effect::None;
            }
            info!(
                "Deleted {} comment(s) ({} remaining)",
                removed,
                state.comments.len()
            );
            Effect::Render
        }
        Action::Quit => Effect::Quit,
    }
}

fn flag_required(state: &mut PostState) -> Effect {
    if state.validation == Some(REQUIRED_FIELD_MESSAGE) {
        return Effect::None;
    }
    state.validation = Some(REQUIRED_FIELD_MESSAGE);
    Effect::Render
}
