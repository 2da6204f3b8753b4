//! # Post State
//!
//! The only mutable data the post card owns.
//!
//! ```text
//! PostState
//! ├── comments: Vec<Comment>          // append order, seeded with one comment
//! ├── draft: String                   // comment being typed
//! ├── validation: Option<&str>        // "required" marker shown under the form
//! └── next_id: u64                    // CommentId allocator
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

/// The comment every fresh post card starts with.
pub const SEED_COMMENT: &str = "Post bem feito , parabéns !";

/// Message surfaced when an empty comment is submitted.
pub const REQUIRED_FIELD_MESSAGE: &str = "Esse campo é obrigatório!";

/// Identity of a comment within one post card. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostState {
    pub comments: Vec<Comment>,
    pub draft: String,
    pub validation: Option<&'static str>,
    next_id: u64,
}

impl PostState {
    pub fn new() -> Self {
        let mut state = Self {
            comments: Vec::new(),
            draft: String::new(),
            validation: None,
            next_id: 0,
        };
        state.push_comment(SEED_COMMENT.to_string());
        state
    }

    /// True while there is nothing to submit.
    pub fn is_draft_empty(&self) -> bool {
        self.draft.is_empty()
    }

    /// The submit control is enabled exactly when the draft is non-empty.
    pub fn submit_enabled(&self) -> bool {
        !self.is_draft_empty()
    }

    /// Comment texts in display order.
    pub fn comment_texts(&self) -> Vec<&str> {
        self.comments.iter().map(|c| c.text.as_str()).collect()
    }

    pub fn comment(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    pub(crate) fn push_comment(&mut self, text: String) -> CommentId {
        let id = CommentId(self.next_id);
        self.next_id += 1;
        self.comments.push(Comment { id, text });
        id
    }
}

impl Default for PostState {
    fn default() -> Self {
        Self::new()
    }
}
