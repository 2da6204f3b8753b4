//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{DateTime, TimeZone, Utc};
use ratatui::buffer::Buffer;

use crate::core::post::{Author, ContentBlock, Post};

/// The Rocketseat demo post, built without going through TOML.
pub fn sample_post() -> Post {
    Post {
        author: Author {
            name: "Diego Fernandes".to_string(),
            role: "CTO @Rocketseat".to_string(),
            avatar_url: "https://github.com/diego3g.png".to_string(),
        },
        published_at: DateTime::parse_from_rfc3339("2022-05-03T20:00:00-03:00").unwrap(),
        content: vec![
            ContentBlock::paragraph("Fala galeraa 👋"),
            ContentBlock::paragraph(
                "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz no NLW Return, evento da Rocketseat.",
            ),
            ContentBlock::link("👉 jane.design/doctorcare"),
        ],
    }
}

/// Two days after `sample_post` was published.
pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 5, 5, 23, 0, 0).unwrap()
}

/// Every cell symbol of a buffer, row after row.
pub fn buffer_text(buf: &Buffer) -> String {
    buf.content().iter().map(|c| c.symbol()).collect()
}
