//! # Post Props
//!
//! The immutable input of the post card: who wrote it, when, and what it says.
//! Props are read once (from a TOML file or the built-in demo) and never change
//! while the card is on screen.

use chrono::{DateTime, FixedOffset};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// The author shown in the post header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
    pub role: String,
    pub avatar_url: String,
}

/// How a content block is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Link,
}

/// One unit of post body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl ContentBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
        }
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Link,
            text: text.into(),
        }
    }
}

/// Everything the caller hands to the post card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Post {
    pub author: Author,
    /// RFC 3339 in the file; the original offset is kept.
    pub published_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

const DEMO_POST: &str = r#"
published_at = "2022-05-03T20:00:00-03:00"

[author]
name = "Diego Fernandes"
role = "CTO @Rocketseat"
avatar_url = "https://github.com/diego3g.png"

[[content]]
kind = "paragraph"
text = "Fala galeraa 👋"

[[content]]
kind = "paragraph"
text = "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀"

[[content]]
kind = "link"
text = "👉 jane.design/doctorcare"
"#;

#[derive(Debug)]
pub enum PostError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for PostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostError::Io(e) => write!(f, "post file I/O error: {e}"),
            PostError::Parse(e) => write!(f, "post file parse error: {e}"),
        }
    }
}

impl std::error::Error for PostError {}

/// Parse a post from TOML text.
pub fn parse_post(contents: &str) -> Result<Post, PostError> {
    toml::from_str(contents).map_err(PostError::Parse)
}

/// Load a post from a TOML file on disk.
pub fn load_post(path: &Path) -> Result<Post, PostError> {
    let contents = fs::read_to_string(path).map_err(PostError::Io)?;
    let post = parse_post(&contents)?;
    info!(
        "Loaded post by {} ({} blocks) from {}",
        post.author.name,
        post.content.len(),
        path.display()
    );
    Ok(post)
}

/// The post shown when no file is given.
pub fn demo_post() -> Result<Post, PostError> {
    debug!("Using built-in demo post");
    parse_post(DEMO_POST)
}
