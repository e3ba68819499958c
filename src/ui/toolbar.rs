// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: folder picker, view-mode switch, sort picker, and counter.

use crate::app::Message;
use crate::config::SortMethod;
use crate::gallery::{ViewMode, ViewSnapshot};
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, Row, Space, Text},
    Element, Length,
};

/// Renders the toolbar row shown above the active pane.
pub fn view(snapshot: &ViewSnapshot, view_mode: ViewMode, sort_method: SortMethod) -> Element<'_, Message> {
    let open_button = button(Text::new("Open Folder"))
        .on_press(Message::OpenFolderDialog)
        .padding([6.0, 12.0]);

    let mode_button = |label: &'static str, mode: ViewMode| {
        let base = button(Text::new(label)).padding([6.0, 12.0]);
        if mode == view_mode {
            // Active mode stays highlighted and inert
            base.style(button::primary)
        } else {
            base.style(button::secondary).on_press(Message::SetViewMode(mode))
        }
    };

    let sort_picker = pick_list(
        &SortMethod::ALL[..],
        Some(sort_method),
        Message::SortMethodSelected,
    )
    .padding([6.0, 10.0])
    .text_size(14);

    let counter = Text::new(snapshot.counter.clone()).size(14);

    Row::new()
        .spacing(10)
        .padding(10)
        .align_y(Vertical::Center)
        .push(open_button)
        .push(Space::new().width(Length::Fixed(8.0)))
        .push(mode_button("Gallery", ViewMode::Single))
        .push(mode_button("List", ViewMode::List))
        .push(mode_button("Grid", ViewMode::Grid))
        .push(Space::new().width(Length::Fixed(8.0)))
        .push(sort_picker)
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .into()
}
