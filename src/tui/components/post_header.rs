//! # Post Header
//!
//! Avatar, author name and role on the left; the time element on the right.
//!
//! The time element shows the relative date. Its "title" (the absolute date)
//! and its machine-readable ISO value share the line below it; `t` flips
//! between them.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use super::avatar::{AVATAR_HEIGHT, AVATAR_WIDTH, Avatar};
use crate::core::dates::DateLabels;
use crate::core::post::Author;

pub const HEADER_HEIGHT: u16 = AVATAR_HEIGHT;

/// Which secondary rendering of the publish time is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeDetail {
    #[default]
    Absolute,
    Iso,
}

impl TimeDetail {
    pub fn toggle(self) -> Self {
        match self {
            TimeDetail::Absolute => TimeDetail::Iso,
            TimeDetail::Iso => TimeDetail::Absolute,
        }
    }
}

#[derive(Clone, Copy)]
pub struct PostHeader<'a> {
    pub author: &'a Author,
    pub dates: &'a DateLabels,
    pub detail: TimeDetail,
}

impl<'a> PostHeader<'a> {
    pub fn new(author: &'a Author, dates: &'a DateLabels, detail: TimeDetail) -> Self {
        Self {
            author,
            dates,
            detail,
        }
    }

    fn detail_text(&self) -> &'a str {
        let dates: &'a DateLabels = self.dates;
        match self.detail {
            TimeDetail::Absolute => &dates.absolute,
            TimeDetail::Iso => &dates.iso,
        }
    }
}

impl<'a> Widget for PostHeader<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [avatar_area, _, info_area] = Layout::horizontal([
            Constraint::Length(AVATAR_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Avatar::new(&self.author.avatar_url).render(avatar_area, buf);

        let [name_row, role_row, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(info_area);

        // Time element on the right; author on the left takes the rest
        let time_width = self.dates.relative.chars().count() as u16;
        let detail_width = self.detail_text().chars().count() as u16;
        let right_width = time_width.max(detail_width).min(info_area.width / 2);

        let [name_area, time_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)])
                .areas(name_row);
        let [role_area, detail_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)])
                .areas(role_row);

        Line::styled(
            self.author.name.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .render(name_area, buf);

        Line::styled(
            self.author.role.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        )
        .render(role_area, buf);

        Paragraph::new(self.dates.relative.as_str())
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Gray))
            .render(time_area, buf);

        Paragraph::new(self.detail_text())
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::DarkGray))
            .render(detail_area, buf);
    }
}
