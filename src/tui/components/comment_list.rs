//! # Comment List Component
//!
//! Scrollable thread of `CommentItem`s, in the order the comments were posted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CommentListState` lives in `TuiState` (selection, scroll, delete arming)
//! - `CommentList` is created each frame with borrowed state and props
//!
//! Selection is tracked by `CommentId`, not position, so deleting another
//! comment never moves the highlight to a different one. Deleting is a two-step
//! affordance: `d` arms the selected item, a second `d` asks the core to delete
//! every comment with that text.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::comment::CommentItem;
use crate::core::state::{Comment, CommentId};
use crate::tui::event::TuiEvent;

/// Events emitted by the comment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentListEvent {
    /// The selected item's delete affordance was confirmed.
    Delete(String),
}

/// Persistent state for the comment list.
pub struct CommentListState {
    pub selected: Option<CommentId>,
    /// Position of the selection as of the last reconcile; used to pick a
    /// neighbour when the selected comment disappears.
    selected_index: usize,
    pub confirm_delete: bool,
    pub scroll_state: ScrollViewState,
    /// Item heights from the last render (for keeping the selection in view)
    item_heights: Vec<u16>,
    viewport_height: u16,
    follow_selection: bool,
}

impl CommentListState {
    pub fn new() -> Self {
        Self {
            selected: None,
            selected_index: 0,
            confirm_delete: false,
            scroll_state: ScrollViewState::default(),
            item_heights: Vec::new(),
            viewport_height: 0,
            follow_selection: false,
        }
    }

    /// Select the last comment if nothing is selected yet.
    pub fn focus(&mut self, comments: &[Comment]) {
        if self.selected.is_none() {
            if let Some(last) = comments.last() {
                self.select_index(comments, comments.len() - 1);
                debug!("Comment list focused on {:?}", last.id);
            }
        }
    }

    pub fn blur(&mut self) {
        self.selected = None;
        self.confirm_delete = false;
    }

    /// Re-anchor the selection after the comment list changed.
    pub fn reconcile(&mut self, comments: &[Comment]) {
        let Some(id) = self.selected else {
            return;
        };
        if let Some(index) = comments.iter().position(|c| c.id == id) {
            self.selected_index = index;
            return;
        }
        self.confirm_delete = false;
        if comments.is_empty() {
            self.selected = None;
            self.selected_index = 0;
        } else {
            let index = self.selected_index.min(comments.len() - 1);
            self.select_index(comments, index);
        }
    }

    fn select_index(&mut self, comments: &[Comment], index: usize) {
        self.selected = comments.get(index).map(|c| c.id);
        self.selected_index = index;
        self.follow_selection = true;
    }

    fn current_index(&self, comments: &[Comment]) -> Option<usize> {
        let id = self.selected?;
        comments.iter().position(|c| c.id == id)
    }

    /// Handle a key event, returning a `CommentListEvent` if the core should act.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        comments: &[Comment],
    ) -> Option<CommentListEvent> {
        // Any other key disarms a pending delete
        if !matches!(event, TuiEvent::InputChar('d')) {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::CursorUp => {
                match self.current_index(comments) {
                    Some(i) => self.select_index(comments, i.saturating_sub(1)),
                    None => self.focus(comments),
                }
                None
            }
            TuiEvent::CursorDown => {
                match self.current_index(comments) {
                    Some(i) if i + 1 < comments.len() => self.select_index(comments, i + 1),
                    Some(_) => {}
                    None => self.focus(comments),
                }
                None
            }
            TuiEvent::InputChar('d') => {
                let index = self.current_index(comments)?;
                if !self.confirm_delete {
                    self.confirm_delete = true;
                    return None;
                }
                self.confirm_delete = false;
                let mut deleted = None;
                CommentItem::new(&comments[index], true, true)
                    .request_delete(|text| deleted = Some(CommentListEvent::Delete(text.to_string())));
                deleted
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }

    /// Adjust the scroll offset so the selected item is fully visible.
    fn scroll_to_selected(&mut self) {
        let Some(index) = self.selected_index_in_cache() else {
            return;
        };
        let top = stacked_height(&self.item_heights[..index]);
        let height = self.item_heights[index];
        let offset = self.scroll_state.offset().y;

        let new_offset = offset_to_reveal(top, height, offset, self.viewport_height);
        if new_offset != offset {
            self.scroll_state.set_offset(Position::new(0, new_offset));
        }
    }

    fn selected_index_in_cache(&self) -> Option<usize> {
        self.selected?;
        (self.selected_index < self.item_heights.len()).then_some(self.selected_index)
    }
}

/// Combined height of stacked items; saturates instead of overflowing.
fn stacked_height(heights: &[u16]) -> u16 {
    heights.iter().fold(0u16, |acc, &h| acc.saturating_add(h))
}

/// Scroll offset that shows rows `top..top + height` inside `viewport` rows.
fn offset_to_reveal(top: u16, height: u16, offset: u16, viewport: u16) -> u16 {
    let bottom = top.saturating_add(height);
    if top < offset {
        top
    } else if bottom > offset.saturating_add(viewport) {
        bottom.saturating_sub(viewport)
    } else {
        offset
    }
}

impl Default for CommentListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the comment list.
pub struct CommentList<'a> {
    state: &'a mut CommentListState,
    comments: &'a [Comment],
}

impl<'a> CommentList<'a> {
    pub fn new(state: &'a mut CommentListState, comments: &'a [Comment]) -> Self {
        Self { state, comments }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        self.state.item_heights = self
            .comments
            .iter()
            .map(|c| CommentItem::calculate_height(c, content_width))
            .collect();
        self.state.viewport_height = area.height;
        let total_height = stacked_height(&self.state.item_heights);

        if self.state.follow_selection {
            self.state.scroll_to_selected();
            self.state.follow_selection = false;
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y: u16 = 0;
        for (comment, &height) in self.comments.iter().zip(&self.state.item_heights) {
            let is_selected = self.state.selected == Some(comment.id);
            let item = CommentItem::new(comment, is_selected, is_selected && self.state.confirm_delete);
            scroll_view.render_widget(item, Rect::new(0, y, content_width, height));
            y = y.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
