// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the toolbar, the recent-folder sidebar, the pane for the active
//! view mode, and the status line. All panes render from the same
//! [`ViewSnapshot`] derived after the last mutation.

use super::Message;
use crate::gallery::{GallerySession, ViewMode, ViewSnapshot};
use crate::media::ImageData;
use crate::ui::{empty_state, gallery_pane, grid_pane, list_pane, sidebar, toolbar};
use iced::{
    widget::{Column, Container, Row, Text},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub session: &'a GallerySession,
    pub snapshot: &'a ViewSnapshot,
    pub current_image: Option<&'a ImageData>,
    pub load_error: Option<&'a str>,
    pub status: Option<&'a str>,
    pub window_size: Size,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar_view = toolbar::view(ctx.snapshot, ctx.session.view_mode(), ctx.session.sort_method());

    let show_sidebar = !ctx.session.recent().is_empty();

    let pane: Element<'_, Message> = if ctx.session.is_empty() {
        empty_state::view(ctx.session.current_folder().is_some())
    } else {
        match ctx.session.view_mode() {
            ViewMode::Single => gallery_pane::view(ctx.snapshot, ctx.current_image, ctx.load_error),
            ViewMode::List => list_pane::view(ctx.snapshot, ctx.session.current_index()),
            ViewMode::Grid => {
                let columns = grid_columns(ctx.window_size, show_sidebar);
                grid_pane::view(ctx.snapshot, ctx.session.hover_preview_path(), columns)
            }
        }
    };

    let mut body = Row::new();
    if show_sidebar {
        body = body.push(sidebar::view(ctx.session.recent()));
    }
    body = body.push(
        Container::new(pane)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut column = Column::new()
        .push(toolbar_view)
        .push(body.width(Length::Fill).height(Length::Fill));

    if let Some(status) = ctx.status {
        column = column.push(
            Container::new(Text::new(status.to_owned()).size(13)).padding([4.0, 10.0]),
        );
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Number of thumbnail columns that fit the space left of the preview panel.
fn grid_columns(window_size: Size, show_sidebar: bool) -> usize {
    let mut available = window_size.width - grid_pane::PREVIEW_WIDTH;
    if show_sidebar {
        available -= sidebar::SIDEBAR_WIDTH;
    }

    let cell = grid_pane::TILE_SIZE + 16.0;
    ((available / cell).floor() as usize).max(1)
}
