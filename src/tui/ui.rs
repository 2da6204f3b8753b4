use crate::core::dates::DateLabels;
use crate::core::post::Post;
use crate::core::state::PostState;
use crate::tui::component::Component;
use crate::tui::components::post_header::HEADER_HEIGHT;
use crate::tui::components::{CommentList, HelpLine, PostContent, PostHeader, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Rows the comment thread keeps even when the post body is long.
const MIN_COMMENTS_HEIGHT: u16 = 3;

/// Layout rows, top to bottom.
pub struct Areas {
    pub title: Rect,
    pub header: Rect,
    pub content: Rect,
    pub form: Rect,
    pub comments: Rect,
    pub help: Rect,
}

pub fn layout(area: Rect, post: &Post, tui: &TuiState) -> Areas {
    use Constraint::{Length, Min};

    let form_height = tui.form.calculate_height(area.width);
    let fixed = 1 + HEADER_HEIGHT + form_height + MIN_COMMENTS_HEIGHT + 1;
    // The body gives way to the comments on short terminals
    let content_height = PostContent::calculate_height(&post.content, area.width)
        .min(area.height.saturating_sub(fixed));

    let [title, header, content, form, comments, help] = Layout::vertical([
        Length(1),
        Length(HEADER_HEIGHT),
        Length(content_height),
        Length(form_height),
        Min(0),
        Length(1),
    ])
    .areas(area);

    Areas {
        title,
        header,
        content,
        form,
        comments,
        help,
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    post: &Post,
    state: &PostState,
    tui: &mut TuiState,
    dates: &DateLabels,
) {
    let areas = layout(frame.area(), post, tui);

    let mut title_bar = TitleBar::new(&post.author.name, state.comments.len(), &tui.status_message);
    title_bar.render(frame, areas.title);

    frame.render_widget(
        PostHeader::new(&post.author, dates, tui.time_detail),
        areas.header,
    );
    frame.render_widget(PostContent::new(&post.content), areas.content);

    tui.form.focused = tui.input_mode == InputMode::Compose;
    tui.form.render(frame, areas.form);

    CommentList::new(&mut tui.comment_list, &state.comments).render(frame, areas.comments);

    let mut help = HelpLine {
        composing: tui.input_mode == InputMode::Compose,
    };
    help.render(frame, areas.help);
}
