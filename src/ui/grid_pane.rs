// SPDX-License-Identifier: MPL-2.0
//! Grid pane: a thumbnail matrix plus a side panel magnifying the thumbnail
//! under the cursor.
//!
//! Hovering only drives the preview panel; selection changes exclusively on
//! click, which jumps to the Single view.

use crate::app::Message;
use crate::gallery::ViewSnapshot;
use iced::{
    alignment,
    widget::{button, image::Handle, mouse_area, scrollable, Column, Container, Image, Row, Text},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Edge length of one thumbnail cell.
pub const TILE_SIZE: f32 = 140.0;
/// Width reserved for the magnified preview panel.
pub const PREVIEW_WIDTH: f32 = 280.0;

/// Renders the Grid view with `columns` thumbnails per row.
pub fn view<'a>(
    snapshot: &'a ViewSnapshot,
    hover_path: Option<&'a Path>,
    columns: usize,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(8).padding(10);

    for chunk in snapshot.entries.chunks(columns) {
        let mut row = Row::new().spacing(8);
        for entry in chunk {
            let thumbnail = Image::new(Handle::from_path(&entry.path))
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(TILE_SIZE))
                .height(Length::Fixed(TILE_SIZE));

            let name = Text::new(entry.name.clone()).size(11);

            let cell = Column::new()
                .spacing(4)
                .align_x(alignment::Horizontal::Center)
                .push(thumbnail)
                .push(name);

            let tile = mouse_area(
                button(cell)
                    .style(button::text)
                    .padding(4)
                    .on_press(Message::SelectImage(entry.index)),
            )
            .on_enter(Message::HoverEntered(entry.index))
            .on_exit(Message::HoverLeft);

            row = row.push(tile);
        }
        grid = grid.push(row);
    }

    let thumbnails = scrollable(grid).width(Length::Fill).height(Length::Fill);

    let preview: Element<'a, Message> = match hover_path {
        Some(path) => Image::new(Handle::from_path(path))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Text::new("Hover a thumbnail to preview").size(13))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    let preview_panel = Container::new(preview)
        .width(Length::Fixed(PREVIEW_WIDTH))
        .height(Length::Fill)
        .padding(10);

    Row::new()
        .push(thumbnails)
        .push(preview_panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
