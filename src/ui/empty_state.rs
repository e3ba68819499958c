// SPDX-License-Identifier: MPL-2.0
//! Empty state shown when no folder is loaded or the loaded folder holds no
//! supported images. All navigation and delete controls are absent here.

use crate::app::Message;
use iced::{
    alignment,
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Renders the empty-state message with a folder-picker button.
pub fn view(folder_loaded: bool) -> Element<'static, Message> {
    let message = if folder_loaded {
        "No images found in folder"
    } else {
        "Select a folder to view images"
    };

    let title = Text::new(message).size(16);

    let open_button = button(Text::new("Open Folder"))
        .padding([8.0, 20.0])
        .on_press(Message::OpenFolderDialog);

    let content = Column::new()
        .spacing(15)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(open_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
