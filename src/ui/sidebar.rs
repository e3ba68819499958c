// SPDX-License-Identifier: MPL-2.0
//! Recent-folders sidebar.

use crate::app::Message;
use crate::recent_folders::RecentFolders;
use iced::{
    widget::{button, scrollable, Column, Text},
    Element, Length,
};

/// Width of the sidebar column.
pub const SIDEBAR_WIDTH: f32 = 200.0;

/// Renders the most-recently-used folder list; clicking an entry loads it.
pub fn view(recent: &RecentFolders) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(2)
        .padding(10)
        .push(Text::new("Recent").size(14));

    for folder in recent.iter() {
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| folder.display().to_string());

        column = column.push(
            button(Text::new(name).size(13))
                .style(button::text)
                .padding([4.0, 6.0])
                .width(Length::Fill)
                .on_press(Message::OpenRecent(folder.to_path_buf())),
        );
    }

    scrollable(column)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}
