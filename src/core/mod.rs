//! # Core Post Logic
//!
//! Everything the post card *does*, independent of how it is drawn.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Post (props)         │
//!                    │  • PostState (comments, │
//!                    │    draft, validation)   │
//!                    │  • Action + update()    │
//!                    │  • dates (pt-BR)        │
//!                    │                         │
//!                    │  No terminal. Pure.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`post`]: `Post`, `Author`, `ContentBlock` and loading them from TOML
//! - [`state`]: `PostState`, the comment thread and the draft
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`dates`]: absolute / relative / ISO renderings of the publish time
//! - [`config`]: `~/.postview/config.toml` and override resolution

pub mod action;
pub mod config;
pub mod dates;
pub mod post;
pub mod state;
