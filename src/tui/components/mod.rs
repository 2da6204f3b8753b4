//! # TUI Components
//!
//! All UI pieces of the post view.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from borrowed data:
//! - `TitleBar`, `HelpLine`: top status bar and bottom key hints
//! - `Avatar`, `PostHeader`: author identity and publication time
//! - `PostContent`: the post body blocks
//! - `CommentItem`: one comment with its delete affordance
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep local UI state and emit events for the core to act on:
//! - `CommentForm`: draft field, caret and submit control
//! - `CommentListState` / `CommentList`: selection, delete arming, scrolling
//!
//! Components never touch `PostState` directly. Data flows in as props, intent
//! flows out as events, and the run loop turns events into `Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs     (status bar + help line)
//! ├── avatar.rs        (author monogram tile)
//! ├── post_header.rs   (author + dates)
//! ├── post_content.rs  (paragraph / link blocks)
//! ├── comment_form/    (draft field with caret)
//! ├── comment.rs       (single comment)
//! └── comment_list.rs  (scrollable comment thread)
//! ```

mod title_bar;
pub use title_bar::{HelpLine, TitleBar};

pub mod avatar;
pub mod comment;
pub mod comment_form;
pub mod comment_list;
pub mod post_content;
pub mod post_header;

pub use comment_form::{CommentForm, FormEvent};
pub use comment_list::{CommentList, CommentListEvent, CommentListState};
pub use post_content::PostContent;
pub use post_header::{PostHeader, TimeDetail};
